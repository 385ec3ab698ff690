use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertaError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ConvertaError {
    fn from(e: serde_json::Error) -> Self {
        ConvertaError::SerializationError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_error_converts() {
        let err: ConvertaError = serde_json::from_str::<u32>("\"x\"").unwrap_err().into();
        assert!(matches!(err, ConvertaError::SerializationError(_)));
    }

    #[test]
    fn test_invalid_input_message() {
        let err = ConvertaError::InvalidInput {
            field: "top_n_per_category".into(),
            reason: "Must be at least 1.".into(),
        };
        assert_eq!(err.to_string(), "Invalid input: top_n_per_category: Must be at least 1.");
    }
}
