#[macro_use]
mod macros;

pub mod error;
pub mod profile;
pub mod types;

#[cfg(feature = "marketability")]
pub mod marketability;

#[cfg(feature = "compliance")]
pub mod compliance;

#[cfg(feature = "partners")]
pub mod partners;

#[cfg(feature = "readiness")]
pub mod readiness;

pub use error::ConvertaError;
pub use profile::BusinessProfile;
pub use types::*;

/// Standard result type for all converta operations
pub type ConvertaResult<T> = Result<T, ConvertaError>;
