use thiserror::Error;

pub type ApiResult<T> = core::result::Result<T, ApiError>;

/// Classified outcome of a failed backend round-trip.
///
/// The transport assigns the variant from the HTTP status; nothing
/// downstream reinterprets it. Messages are server-provided where the
/// response carried one.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure, or a status outside the mapped set.
    #[error("network error: {0}")]
    Network(String),
    /// The resource does not exist server-side (404).
    #[error("not found: {0}")]
    NotFound(String),
    /// The server rejected the caller's rights (401/403). Still possible
    /// after the client-side ownership gate passed.
    #[error("not authorized: {0}")]
    Authorization(String),
    /// The server rejected the payload (400/422).
    #[error("invalid request: {0}")]
    Validation(String),
}

impl ApiError {
    /// True for the variant the detail view renders as "does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_class() {
        let err = ApiError::NotFound("plan 9 does not exist".to_string());
        assert_eq!(err.to_string(), "not found: plan 9 does not exist");
        assert!(err.is_not_found());
        assert!(!ApiError::Network("connection refused".to_string()).is_not_found());
    }
}
