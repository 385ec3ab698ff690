use serde_json::{Map, Value};
use std::io;

use super::{cell, flatten, result_of};

/// Write output as CSV to stdout. Record lists (e.g. ranked partners) become
/// one row per record; a single result becomes `field,value` rows.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    match result_of(value) {
        Value::Object(map) => write_fields(&mut wtr, map),
        Value::Array(arr) => write_records(&mut wtr, arr),
        other => {
            let _ = wtr.write_record([cell(other)]);
        }
    }

    let _ = wtr.flush();
}

fn write_fields<W: io::Write>(wtr: &mut csv::Writer<W>, map: &Map<String, Value>) {
    let _ = wtr.write_record(["field", "value"]);
    for (key, val) in flatten(map) {
        let _ = wtr.write_record([key, cell(&val)]);
    }
}

fn write_records<W: io::Write>(wtr: &mut csv::Writer<W>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        for item in arr {
            let _ = wtr.write_record([cell(item)]);
        }
        return;
    };

    let headers: Vec<&str> = first.keys().map(String::as_str).collect();
    let _ = wtr.write_record(&headers);
    for item in arr.iter().filter_map(Value::as_object) {
        let row: Vec<String> = headers
            .iter()
            .map(|h| item.get(*h).map(cell).unwrap_or_default())
            .collect();
        let _ = wtr.write_record(&row);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(value: &Value) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        match result_of(value) {
            Value::Object(map) => write_fields(&mut wtr, map),
            Value::Array(arr) => write_records(&mut wtr, arr),
            _ => {}
        }
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_envelope_as_field_rows() {
        let v = json!({"result": {"overall_score": 47, "metrics": {"founder_advantage": 40}}});
        let out = render(&v);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "field,value");
        assert!(lines.contains(&"metrics.founder_advantage,40"));
    }

    #[test]
    fn test_ranked_partners_as_rows() {
        let v = json!([
            {"id": "p1", "relevance_score": 38, "match_reasons": ["UK-based"]},
            {"id": "p2", "relevance_score": 10, "match_reasons": []}
        ]);
        let out = render(&v);
        let lines: Vec<_> = out.lines().collect();
        // serde_json maps iterate in key order
        assert_eq!(lines[0], "id,match_reasons,relevance_score");
        assert_eq!(lines[1], "p1,UK-based,38");
        assert_eq!(lines[2], "p2,,10");
    }
}
