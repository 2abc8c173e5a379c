//! authn-api: Standard API error values
//!
//! Contains the `ApiError` constructors, status labels, and the JSON error
//! envelope handed back to HTTP clients.

pub mod error;
pub mod responses;
pub mod status;

pub use error::{
    ApiError, EmptyFieldError, InvalidApiError, bad_request, conflict, database,
    empty_required_field, generic_empty_required_field, generic_internal, invalid_field_content,
    not_found, unauthorized, unsupported_content,
};
pub use responses::ErrorBody;
pub use status::{API_STATUS_CODES, status_label};
