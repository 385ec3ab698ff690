pub mod compliance;
pub mod marketability;
pub mod partners;
pub mod readiness;
