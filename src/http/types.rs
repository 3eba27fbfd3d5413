//! JSON request/response types for the HTTP surface.

use serde::{Deserialize, Serialize};

/// Machine-readable error codes returned in failure bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NoFileSelected,
    InvalidFileType,
    FileTooLarge,
    ConversionFailed,
}

/// Failure body: `{success:false, message, error}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub error: ErrorCode,
}

impl ErrorBody {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: code,
        }
    }
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub service: String,
    pub version: String,
}

/// Static service descriptor returned by the info endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoResponse {
    pub service: String,
    pub version: String,
    pub supported_formats: SupportedFormats,
    pub limits: Limits,
    pub endpoints: Endpoints,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportedFormats {
    pub input: Vec<String>,
    pub output: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Limits {
    pub max_file_size: String,
    pub supported_types: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoints {
    pub convert: String,
    pub health: String,
    pub info: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_serialize_screaming_snake() {
        let body = ErrorBody::new(ErrorCode::FileTooLarge, "too big");
        let json = serde_json::to_string(&body).unwrap();
        assert!(json.contains("\"FILE_TOO_LARGE\""));
        assert!(json.contains("\"success\":false"));
    }
}
