//! HTTP Error Types
//!
//! Maps application errors to HTTP status codes in one place.

use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use mqscgen_core::domain::Feedback;
use mqscgen_core::error::AppError;
use serde_json::json;
use thiserror::Error;

pub const THROTTLED_MESSAGE: &str = "Rate limit exceeded. Please slow down.";

/// Error returned by route handlers
#[derive(Error, Debug)]
pub enum WebError {
    #[error(transparent)]
    App(#[from] AppError),

    #[error("Template rendering failed: {0}")]
    Render(#[from] askama::Error),

    #[error(transparent)]
    Form(#[from] FormRejection),

    #[error("{}", THROTTLED_MESSAGE)]
    Throttled,
}

/// Status code for an application error
pub fn to_http_status(err: &AppError) -> StatusCode {
    match err {
        AppError::Domain(_) => StatusCode::UNPROCESSABLE_ENTITY,
        AppError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::App(e) => to_http_status(e),
            WebError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            WebError::Form(rejection) => rejection.status(),
            WebError::Throttled => StatusCode::TOO_MANY_REQUESTS,
        }
    }

    pub fn feedback(&self) -> Vec<Feedback> {
        match self {
            WebError::App(e) => e.user_messages().into_iter().map(Feedback::error).collect(),
            WebError::Form(rejection) => vec![Feedback::error(rejection.body_text())],
            other => vec![Feedback::error(other.to_string())],
        }
    }
}

impl WebError {
    pub(crate) fn log(&self) {
        if self.status().is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }
    }
}

/// JSON body, used by the `/api/v1` routes; form routes render the page instead
impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        self.log();

        let body = json!({
            "ok": false,
            "code": status.as_u16(),
            "feedback": self.feedback(),
        });
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mqscgen_core::domain::DomainError;

    #[test]
    fn test_domain_errors_are_unprocessable() {
        let err = WebError::from(AppError::from(DomainError::BlankQmgrName));
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.feedback(), vec![Feedback::error("QMGR Name cannot be blank!")]);
    }

    #[test]
    fn test_io_errors_are_server_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err = WebError::from(AppError::from(io));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_throttled() {
        assert_eq!(WebError::Throttled.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(
            WebError::Throttled.feedback(),
            vec![Feedback::error(THROTTLED_MESSAGE)]
        );
    }
}
