use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFrequency {
    Once,
    Monthly,
    Quarterly,
    Annually,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Tax,
    Filing,
    Registration,
    Compliance,
}

/// A recurring or one-off UK obligation. Deadlines are descriptive text,
/// not computed dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceEvent {
    pub title: String,
    pub description: String,
    pub deadline: String,
    pub frequency: EventFrequency,
    pub priority: EventPriority,
    pub category: EventCategory,
}

fn event(
    title: &str,
    description: &str,
    deadline: &str,
    frequency: EventFrequency,
    priority: EventPriority,
    category: EventCategory,
) -> ComplianceEvent {
    ComplianceEvent {
        title: title.to_string(),
        description: description.to_string(),
        deadline: deadline.to_string(),
        frequency,
        priority,
        category,
    }
}

/// The four obligations every UK company carries.
pub fn baseline_events() -> Vec<ComplianceEvent> {
    vec![
        event(
            "Company Registration",
            "Incorporate the company with Companies House",
            "Before trading begins",
            EventFrequency::Once,
            EventPriority::High,
            EventCategory::Registration,
        ),
        event(
            "Tax Registration",
            "Register with HMRC for Corporation Tax",
            "Within 3 months of starting to trade",
            EventFrequency::Once,
            EventPriority::High,
            EventCategory::Tax,
        ),
        event(
            "Annual Return",
            "File the confirmation statement with Companies House",
            "Within 14 days of the review period end",
            EventFrequency::Annually,
            EventPriority::Medium,
            EventCategory::Filing,
        ),
        event(
            "Tax Return",
            "File the CT600 Corporation Tax return with HMRC",
            "12 months after the end of the accounting period",
            EventFrequency::Annually,
            EventPriority::High,
            EventCategory::Tax,
        ),
    ]
}

pub fn vat_return_event() -> ComplianceEvent {
    event(
        "VAT Return",
        "Submit the VAT return through Making Tax Digital",
        "1 month and 7 days after the end of each VAT quarter",
        EventFrequency::Quarterly,
        EventPriority::High,
        EventCategory::Tax,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_events_shape() {
        let events = baseline_events();
        let summary: Vec<_> = events
            .iter()
            .map(|e| (e.title.as_str(), e.frequency, e.priority, e.category))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Company Registration", EventFrequency::Once, EventPriority::High, EventCategory::Registration),
                ("Tax Registration", EventFrequency::Once, EventPriority::High, EventCategory::Tax),
                ("Annual Return", EventFrequency::Annually, EventPriority::Medium, EventCategory::Filing),
                ("Tax Return", EventFrequency::Annually, EventPriority::High, EventCategory::Tax),
            ]
        );
    }

    #[test]
    fn test_event_serialises_lowercase() {
        let json = serde_json::to_value(vat_return_event()).unwrap();
        assert_eq!(json["frequency"], "quarterly");
        assert_eq!(json["priority"], "high");
        assert_eq!(json["category"], "tax");
    }
}
