pub mod filters;
pub mod ranker;
pub mod recommendations;

pub use filters::PartnerFilter;
pub use ranker::{rank_partners, score_partner, BusinessContext, Partner, PartnerCategory, PartnerWithScore, ScoreBreakdown};
pub use recommendations::{PartnerRecommendation, Urgency};
