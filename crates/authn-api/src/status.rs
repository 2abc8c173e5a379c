//! Status labels for HTTP status codes

use axum::http::StatusCode;

/// Every status code an `ApiError` can carry
pub const API_STATUS_CODES: [StatusCode; 6] = [
    StatusCode::BAD_REQUEST,
    StatusCode::UNAUTHORIZED,
    StatusCode::NOT_FOUND,
    StatusCode::CONFLICT,
    StatusCode::UNPROCESSABLE_ENTITY,
    StatusCode::INTERNAL_SERVER_ERROR,
];

/// Canonical uppercase label for a status code
///
/// Codes without a known reason phrase map to `UNKNOWN`.
#[must_use]
pub fn status_label(code: StatusCode) -> String {
    // Labels for API_STATUS_CODES are part of the response contract and
    // stay fixed regardless of the http crate's reason phrases.
    match code {
        StatusCode::BAD_REQUEST => "BAD REQUEST".to_string(),
        StatusCode::UNAUTHORIZED => "UNAUTHORIZED".to_string(),
        StatusCode::NOT_FOUND => "NOT FOUND".to_string(),
        StatusCode::CONFLICT => "CONFLICT".to_string(),
        StatusCode::UNPROCESSABLE_ENTITY => "UNPROCESSABLE ENTITY".to_string(),
        StatusCode::INTERNAL_SERVER_ERROR => "INTERNAL SERVER ERROR".to_string(),
        other => other
            .canonical_reason()
            .map_or_else(|| "UNKNOWN".to_string(), str::to_uppercase),
    }
}
