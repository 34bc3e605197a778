use thiserror::Error;

#[derive(Debug, Error)]
pub enum AccessError {
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    #[error("invalid role: {0}")]
    InvalidRole(String),
    #[error("unknown list: {0}")]
    UnknownList(String),
    #[error("invalid policy generation: {0}")]
    InvalidGeneration(String),
    #[error("invalid create gate: {0}")]
    InvalidCreateGate(String),
    #[error("session decode error: {0}")]
    Session(#[from] serde_json::Error),
}

pub type AccessResult<T> = Result<T, AccessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_variants() {
        let errors = vec![
            AccessError::InvalidOperation("read".to_string()),
            AccessError::InvalidRole("owner".to_string()),
            AccessError::UnknownList("Comment".to_string()),
            AccessError::InvalidGeneration("v3".to_string()),
            AccessError::InvalidCreateGate("closed".to_string()),
        ];

        for error in errors {
            let rendered = error.to_string();
            assert!(!rendered.is_empty());
        }
    }

    #[test]
    fn session_error_wraps_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated");
        let err = AccessError::from(json_err);
        assert!(err.to_string().starts_with("session decode error"));
    }
}
