use serde_json::Value;

use super::{cell, result_of};

/// Headline fields, in priority order, across all commands.
const PRIORITY_KEYS: &[&str] = &["overall_score", "recommended_company_type"];

/// Print just the headline answer: the overall score, the recommended
/// company type, or the top-ranked partner.
pub fn print_minimal(value: &Value) {
    println!("{}", headline(result_of(value)));
}

fn headline(result: &Value) -> String {
    match result {
        Value::Object(map) => {
            if let Some(Value::Object(m)) = map.get("marketability") {
                return headline(&Value::Object(m.clone()));
            }
            for key in PRIORITY_KEYS {
                if let Some(val) = map.get(*key).filter(|v| !v.is_null()) {
                    return cell(val);
                }
            }
            map.iter()
                .next()
                .map(|(key, val)| format!("{}: {}", key, cell(val)))
                .unwrap_or_default()
        }
        Value::Array(arr) => match arr.first() {
            Some(top) => format!(
                "{} ({})",
                top.get("name").map(cell).unwrap_or_default(),
                top.get("relevance_score").map(cell).unwrap_or_default()
            ),
            None => "(no partners)".to_string(),
        },
        other => cell(other),
    }
}
