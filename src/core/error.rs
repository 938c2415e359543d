use thiserror::Error;

/// Core error types for menuboard
///
/// Errors exist only at the ingestion and parsing seams. Filtering itself
/// never errors: malformed items degrade per-field (an unparseable price
/// fails closed, a missing popularity reads as 0) and evaluation continues
/// over the rest of the catalog.
#[derive(Debug, Error)]
pub enum Error {
    /// Catalog snapshot deserialization failed
    #[error("snapshot error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Sort dropdown value outside the known set
    #[error("unknown sort key: {0:?}")]
    UnknownSortKey(String),

    /// Field constraint name outside the known set
    #[error("unknown field kind: {0:?}")]
    UnknownFieldKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_error_wraps_serde() {
        let err = crate::core::catalog::Catalog::from_json("[oops").unwrap_err();
        assert!(matches!(err, Error::Snapshot(_)));
        assert!(err.to_string().starts_with("snapshot error"));
    }

    #[test]
    fn test_unknown_sort_key_names_value() {
        let err = Error::UnknownSortKey("spicy".to_string());
        assert_eq!(err.to_string(), "unknown sort key: \"spicy\"");
    }
}
