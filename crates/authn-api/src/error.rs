//! API error types
//!
//! Every constructor is a pure function of its arguments. Inputs are
//! interpolated verbatim, empty strings included.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::status::{API_STATUS_CODES, status_label};

/// Error returned to API clients
///
/// Decoding goes through the same checks as construction: the code must be
/// one of [`API_STATUS_CODES`] and the status must be its label.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "RawApiError")]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message
    message: String,
    /// HTTP status code
    code: u16,
    /// Uppercase status label, e.g. `NOT FOUND`
    status: String,
}

/// Wire form of [`ApiError`] before validation
#[derive(Deserialize)]
struct RawApiError {
    message: String,
    code: u16,
    status: String,
}

/// Errors from decoding an [`ApiError`] payload
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidApiError {
    /// Code is not one an `ApiError` can carry
    #[error("unsupported status code: {0}")]
    UnsupportedCode(u16),

    /// Status label does not belong to the code
    #[error("status {status:?} does not match code {code}")]
    StatusMismatch {
        /// Decoded code
        code: u16,
        /// Decoded label
        status: String,
    },
}

impl TryFrom<RawApiError> for ApiError {
    type Error = InvalidApiError;

    fn try_from(raw: RawApiError) -> Result<Self, Self::Error> {
        let code = API_STATUS_CODES
            .into_iter()
            .find(|code| code.as_u16() == raw.code)
            .ok_or(InvalidApiError::UnsupportedCode(raw.code))?;

        if raw.status != status_label(code) {
            return Err(InvalidApiError::StatusMismatch {
                code: raw.code,
                status: raw.status,
            });
        }

        Ok(Self::new(code, raw.message))
    }
}

impl ApiError {
    fn new(code: StatusCode, message: String) -> Self {
        Self {
            message,
            code: code.as_u16(),
            status: status_label(code),
        }
    }

    /// 400: request body could not be parsed
    pub fn bad_request(msg: impl AsRef<str>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            format!("Poorly formatted JSON. {}", msg.as_ref()),
        )
    }

    /// 401: message is passed through unchanged
    pub fn unauthorized(msg: impl AsRef<str>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, msg.as_ref().to_string())
    }

    /// 404
    pub fn not_found(msg: impl AsRef<str>) -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            format!("{} was not found", msg.as_ref()),
        )
    }

    /// 409: an object with the same unique field value already exists
    pub fn conflict(
        object_name: impl AsRef<str>,
        field: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Self {
        Self::new(
            StatusCode::CONFLICT,
            format!(
                "{} object with {}: {} already exists",
                object_name.as_ref(),
                field.as_ref(),
                value.as_ref()
            ),
        )
    }

    /// 422: `detail` usually comes from [`EmptyFieldError`]
    pub fn empty_required_field(object_name: impl AsRef<str>, detail: impl AsRef<str>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!(
                "{} object contains empty fields. {}",
                object_name.as_ref(),
                detail.as_ref()
            ),
        )
    }

    /// 422
    pub fn invalid_field_content(field_name: impl AsRef<str>, reason: impl AsRef<str>) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!(
                "Field: {} contains invalid data. {}",
                field_name.as_ref(),
                reason.as_ref()
            ),
        )
    }

    /// 422: `supported` is appended directly after the trailing period
    pub fn unsupported_content(
        place: impl AsRef<str>,
        item: impl AsRef<str>,
        supported: impl AsRef<str>,
    ) -> Self {
        Self::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!(
                "{}: {} is not yet supported.{}",
                place.as_ref(),
                item.as_ref(),
                supported.as_ref()
            ),
        )
    }

    /// 500
    pub fn database(msg: impl AsRef<str>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Database Error: {}", msg.as_ref()),
        )
    }

    /// 500
    pub fn internal(msg: impl AsRef<str>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Internal Error: {}", msg.as_ref()),
        )
    }

    /// Error message
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Numeric status code
    #[must_use]
    pub fn code(&self) -> u16 {
        self.code
    }

    /// Status label
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Typed status code, always one of [`API_STATUS_CODES`]
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Check if the error is the server's fault (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}

/// A required field was left empty
///
/// Plain error without an HTTP status.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("empty value for field: {field}")]
pub struct EmptyFieldError {
    field: String,
}

impl EmptyFieldError {
    /// Create an error for the named field
    pub fn new(field: impl AsRef<str>) -> Self {
        Self {
            field: field.as_ref().to_string(),
        }
    }

    /// Name of the empty field
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }
}

/// Same as [`ApiError::bad_request`]
pub fn bad_request(msg: impl AsRef<str>) -> ApiError {
    ApiError::bad_request(msg)
}

/// Same as [`ApiError::unauthorized`]
pub fn unauthorized(msg: impl AsRef<str>) -> ApiError {
    ApiError::unauthorized(msg)
}

/// Same as [`ApiError::not_found`]
pub fn not_found(msg: impl AsRef<str>) -> ApiError {
    ApiError::not_found(msg)
}

/// Same as [`ApiError::conflict`]
pub fn conflict(
    object_name: impl AsRef<str>,
    field: impl AsRef<str>,
    value: impl AsRef<str>,
) -> ApiError {
    ApiError::conflict(object_name, field, value)
}

/// Same as [`ApiError::empty_required_field`]
pub fn empty_required_field(object_name: impl AsRef<str>, detail: impl AsRef<str>) -> ApiError {
    ApiError::empty_required_field(object_name, detail)
}

/// Same as [`ApiError::invalid_field_content`]
pub fn invalid_field_content(field_name: impl AsRef<str>, reason: impl AsRef<str>) -> ApiError {
    ApiError::invalid_field_content(field_name, reason)
}

/// Same as [`ApiError::unsupported_content`]
pub fn unsupported_content(
    place: impl AsRef<str>,
    item: impl AsRef<str>,
    supported: impl AsRef<str>,
) -> ApiError {
    ApiError::unsupported_content(place, item, supported)
}

/// Same as [`ApiError::database`]
pub fn database(msg: impl AsRef<str>) -> ApiError {
    ApiError::database(msg)
}

/// Same as [`ApiError::internal`]
pub fn generic_internal(msg: impl AsRef<str>) -> ApiError {
    ApiError::internal(msg)
}

/// Same as [`EmptyFieldError::new`]
pub fn generic_empty_required_field(field_name: impl AsRef<str>) -> EmptyFieldError {
    EmptyFieldError::new(field_name)
}
