use serde::Deserialize;
use thiserror::Error;

/// 服務端回傳的錯誤文件 (`{"code": ..., "message": ..., "requestId": ...}`)
#[derive(Error, Debug, Clone, PartialEq, Eq, Deserialize)]
#[error("[Code: {code}; Message: {message}; RequestId: {request_id}]")]
#[serde(rename_all = "camelCase")]
pub struct BceServiceError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub request_id: String,
    #[serde(skip)]
    pub status_code: u16,
}

impl BceServiceError {
    pub fn new(
        code: impl Into<String>,
        message: impl Into<String>,
        request_id: impl Into<String>,
        status_code: u16,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            request_id: request_id.into(),
            status_code,
        }
    }
}

#[derive(Error, Debug)]
pub enum BceError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Service error: {0}")]
    ServiceError(#[from] BceServiceError),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Signing error: {message}")]
    SigningError { message: String },
}

impl BceError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        BceError::InvalidArgument {
            message: message.into(),
        }
    }

    /// HTTP status of a service error, `None` for client-side failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            BceError::ServiceError(e) => Some(e.status_code),
            BceError::HttpError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// 服務端錯誤碼，例如 `NoSuchUser`
    pub fn service_code(&self) -> Option<&str> {
        match self {
            BceError::ServiceError(e) => Some(e.code.as_str()),
            _ => None,
        }
    }

    pub fn request_id(&self) -> Option<&str> {
        match self {
            BceError::ServiceError(e) if !e.request_id.is_empty() => Some(e.request_id.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_error_display() {
        let err = BceServiceError::new("NoSuchUser", "user not found", "req-1", 404);
        assert_eq!(
            err.to_string(),
            "[Code: NoSuchUser; Message: user not found; RequestId: req-1]"
        );
    }

    #[test]
    fn test_service_error_accessors() {
        let err: BceError = BceServiceError::new("AccessDenied", "denied", "req-2", 403).into();
        assert_eq!(err.status_code(), Some(403));
        assert_eq!(err.service_code(), Some("AccessDenied"));
        assert_eq!(err.request_id(), Some("req-2"));

        let err = BceError::invalid_argument("name is empty");
        assert_eq!(err.status_code(), None);
        assert_eq!(err.service_code(), None);
        assert_eq!(err.request_id(), None);
    }

    #[test]
    fn test_service_error_deserialize_partial() {
        let err: BceServiceError =
            serde_json::from_str(r#"{"code":"InvalidParameter","requestId":"abc"}"#).unwrap();
        assert_eq!(err.code, "InvalidParameter");
        assert_eq!(err.message, "");
        assert_eq!(err.request_id, "abc");
        assert_eq!(err.status_code, 0);
    }
}
