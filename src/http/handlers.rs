//! HTTP request handlers for the conversion endpoints.

use crate::convert;
use crate::http::types::{
    Endpoints, ErrorBody, ErrorCode, HealthResponse, InfoResponse, Limits, SupportedFormats,
};
use crate::http::AppState;
use crate::pipeline::docx;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use tracing::{error, info, warn};

const SERVICE_NAME: &str = "PDF to Word Converter";
const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Request-level failures mapped to the documented JSON error bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiError {
    NoFileSelected,
    InvalidFileType,
    FileTooLarge,
    ConversionFailed,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NoFileSelected => (
                StatusCode::BAD_REQUEST,
                ErrorCode::NoFileSelected,
                "Please select a PDF file to upload.",
            ),
            ApiError::InvalidFileType => (
                StatusCode::BAD_REQUEST,
                ErrorCode::InvalidFileType,
                "Only PDF files are allowed.",
            ),
            ApiError::FileTooLarge => (
                StatusCode::BAD_REQUEST,
                ErrorCode::FileTooLarge,
                "File size must be less than 10MB.",
            ),
            ApiError::ConversionFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorCode::ConversionFailed,
                "An error occurred during conversion. Please try again.",
            ),
        };
        (status, Json(ErrorBody::new(code, message))).into_response()
    }
}

/// `POST /api/conversion/convert` — multipart upload of one PDF file.
///
/// On success streams back the DOCX bytes with a download filename derived
/// from the uploaded name. Validation order: file present, content type,
/// size limit, then conversion.
pub async fn convert_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut file_name = String::new();
    let mut content_type = String::new();
    let mut data: Option<Vec<u8>> = None;

    // Take the first field that carries a file.
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(map_multipart_error)?
    {
        if field.file_name().is_none() {
            continue;
        }
        file_name = field.file_name().unwrap_or_default().to_string();
        content_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(map_multipart_error)?;
        data = Some(bytes.to_vec());
        break;
    }

    let data = match data {
        Some(d) if !d.is_empty() => d,
        _ => return Err(ApiError::NoFileSelected),
    };

    if !content_type.eq_ignore_ascii_case(PDF_CONTENT_TYPE) {
        warn!(
            "rejected upload '{}': content type '{}'",
            file_name, content_type
        );
        return Err(ApiError::InvalidFileType);
    }

    if data.len() > state.config.max_upload_bytes {
        warn!(
            "rejected upload '{}': {} bytes exceeds limit of {}",
            file_name,
            data.len(),
            state.config.max_upload_bytes
        );
        return Err(ApiError::FileTooLarge);
    }

    info!("starting conversion for file: {} ({} bytes)", file_name, data.len());

    let output = convert::convert(data, file_name.clone())
        .await
        .map_err(|e| {
            error!("conversion failed for file {}: {}", file_name, e);
            ApiError::ConversionFailed
        })?;

    let download_name = download_name(&file_name);

    info!(
        "conversion completed for {}: {} pages, {} bytes out",
        file_name,
        output.stats.retained_pages,
        output.docx.len()
    );

    Ok((
        [
            (header::CONTENT_TYPE, DOCX_CONTENT_TYPE.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{download_name}\""),
            ),
        ],
        output.docx,
    )
        .into_response())
}

/// The transport body limit surfaces through the multipart reader as a
/// payload-too-large error when an oversized upload is cut short; that one
/// is FILE_TOO_LARGE. Every other decode failure (bad boundary, truncated
/// part) means no usable file arrived.
fn map_multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::FileTooLarge
    } else {
        warn!("failed to decode multipart body: {}", e);
        ApiError::NoFileSelected
    }
}

/// Suggested download file name: the uploaded name minus its extension
/// (case-insensitive), the same basename the document title uses, plus
/// `_converted.docx`.
fn download_name(file_name: &str) -> String {
    format!("{}_converted.docx", docx::file_basename(file_name))
}

/// `GET /api/conversion/health`
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339(),
        service: format!("{SERVICE_NAME} API"),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/conversion/info`
pub async fn info_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    Json(InfoResponse {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        supported_formats: SupportedFormats {
            input: vec!["PDF".to_string()],
            output: vec!["DOCX".to_string()],
        },
        limits: Limits {
            max_file_size: format!("{}MB", state.config.max_upload_bytes / (1024 * 1024)),
            supported_types: vec![PDF_CONTENT_TYPE.to_string()],
        },
        endpoints: Endpoints {
            convert: "/api/conversion/convert".to_string(),
            health: "/api/conversion/health".to_string(),
            info: "/api/conversion/info".to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn download_name_strips_extension_case_insensitively() {
        assert_eq!(download_name("sample.pdf"), "sample_converted.docx");
        assert_eq!(download_name("Report.Pdf"), "Report_converted.docx");
        assert_eq!(download_name("SCAN.PDF"), "SCAN_converted.docx");
        assert_eq!(download_name("noext"), "noext_converted.docx");
    }
}
