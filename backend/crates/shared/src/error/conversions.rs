//! Error conversions - From implementations for common error types
//!
//! Provides automatic conversion from common error types to [`AppError`].

use super::app_error::AppError;

// ============================================================================
// serde_json conversions
// ============================================================================

// Only report rendering produces JSON; its failures are internal
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::internal(format!("JSON serialization error: {err}")).with_source(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;

    use std::collections::BTreeMap;

    #[test]
    fn test_json_serialization_failure_is_internal() {
        // Non-string map keys can't be rendered as JSON
        let map = BTreeMap::from([(vec![1u8], 1u8)]);
        let err: AppError = serde_json::to_string(&map).unwrap_err().into();
        assert_eq!(err.kind(), ErrorKind::Internal);
        assert!(err.message().starts_with("JSON serialization error"));
    }
}
