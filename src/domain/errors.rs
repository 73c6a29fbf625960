/// Crate error type. Every variant carries a human-readable cause; none of
/// these reach the user directly, the UI shows its own static messages.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    NetworkError(String),
    DecodeError(String),
    ValidationError(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            AppError::DecodeError(msg) => write!(f, "Decode Error: {}", msg),
            AppError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

pub type NetworkResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_kind() {
        let err = AppError::NetworkError("HTTP error: 503".to_string());
        assert_eq!(err.to_string(), "Network Error: HTTP error: 503");
        let err = AppError::ValidationError("2 times, 3 prices".to_string());
        assert_eq!(err.to_string(), "Validation Error: 2 times, 3 prices");
    }
}
