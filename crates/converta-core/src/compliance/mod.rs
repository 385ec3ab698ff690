pub mod calendar;
pub mod recommendation;

pub use recommendation::{generate_compliance_recommendation, ComplianceRecommendation};
