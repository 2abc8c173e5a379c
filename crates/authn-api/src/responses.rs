//! Error response envelope

use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;

/// Body written for every failed request: `{"error": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: ApiError,
}

impl From<ApiError> for ErrorBody {
    fn from(error: ApiError) -> Self {
        Self { error }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if self.is_server_error() {
            tracing::error!(
                code = self.code(),
                status = self.status(),
                reason = self.message(),
                "request failed"
            );
        } else {
            tracing::debug!(
                code = self.code(),
                status = self.status(),
                reason = self.message(),
                "request rejected"
            );
        }
        (status, Json(ErrorBody::from(self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use serde_json::json;
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use tracing_subscriber::prelude::*;

    /// Event recorded by `CaptureLayer`
    struct CapturedEvent {
        level: Level,
        fields: HashMap<String, String>,
    }

    #[derive(Clone, Default)]
    struct CaptureLayer {
        events: Arc<Mutex<Vec<CapturedEvent>>>,
    }

    struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

    impl Visit for FieldVisitor<'_> {
        fn record_str(&mut self, field: &Field, value: &str) {
            self.0.insert(field.name().to_string(), value.to_string());
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0
                .insert(field.name().to_string(), format!("{value:?}"));
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut FieldVisitor(&mut fields));
            self.events.lock().unwrap().push(CapturedEvent {
                level: *event.metadata().level(),
                fields,
            });
        }
    }

    /// Convert `error` into a response and return the events it logged
    fn logged_events(error: ApiError) -> Vec<CapturedEvent> {
        let layer = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        tracing::subscriber::with_default(subscriber, || {
            let _ = error.into_response();
        });
        std::mem::take(&mut *layer.events.lock().unwrap())
    }

    #[test]
    fn test_error_body_json() {
        let body = ErrorBody::from(ApiError::not_found("ServiceType"));
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "error": {
                    "message": "ServiceType was not found",
                    "code": 404,
                    "status": "NOT FOUND"
                }
            })
        );
    }

    #[test]
    fn test_error_body_roundtrip_keeps_equality() {
        let body = ErrorBody::from(ApiError::bad_request("missing brace"));
        let json = serde_json::to_string(&body).unwrap();
        let parsed: ErrorBody = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, body);
    }

    #[test]
    fn test_error_body_rejects_inconsistent_error() {
        let result = serde_json::from_str::<ErrorBody>(
            r#"{"error":{"message":"x","code":500,"status":"NOT FOUND"}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_client_error_logged_at_debug() {
        let events = logged_events(ApiError::not_found("ServiceType"));
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.level, Level::DEBUG);
        assert_eq!(event.fields["code"], "404");
        assert_eq!(event.fields["status"], "NOT FOUND");
        assert_eq!(event.fields["reason"], "ServiceType was not found");
        assert_eq!(event.fields["message"], "request rejected");
    }

    #[test]
    fn test_server_error_logged_at_error() {
        let events = logged_events(ApiError::database("connection reset"));
        assert_eq!(events.len(), 1);

        let event = &events[0];
        assert_eq!(event.level, Level::ERROR);
        assert_eq!(event.fields["code"], "500");
        assert_eq!(event.fields["status"], "INTERNAL SERVER ERROR");
        assert_eq!(event.fields["reason"], "Database Error: connection reset");
        assert_eq!(event.fields["message"], "request failed");
    }

    #[tokio::test]
    async fn test_into_response() {
        let response = ApiError::unauthorized("invalid token").into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["error"]["message"], "invalid token");
        assert_eq!(value["error"]["code"], 401);
        assert_eq!(value["error"]["status"], "UNAUTHORIZED");
    }
}
