//! Route Handlers
//!
//! Business flow for each endpoint; `server` only does extraction and
//! cookie plumbing.

use crate::error::{WebError, THROTTLED_MESSAGE};
use crate::rate_limiter::RateLimiter;
use crate::session::Session;
use crate::types::{ApiGenerateRequest, ApiGenerateResponse, ObjectTypeInfo, SubmitForm};
use crate::view::{FormValues, IndexPage};
use askama::Template;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Json;
use mqscgen_core::application::{GenerateRequest, MqscService};
use mqscgen_core::domain::{Feedback, ObjectType, DOWNLOAD_FILE_NAME};
use mqscgen_core::port::SessionStore;
use std::sync::Arc;
use tracing::{error, warn};

/// Handler with injected dependencies
pub struct WebHandler {
    service: MqscService,
    rate_limiter: RateLimiter,
}

impl WebHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, rate_limiter: RateLimiter) -> Self {
        Self {
            service: MqscService::new(sessions),
            rate_limiter,
        }
    }

    async fn render(
        &self,
        session: &Session,
        form: FormValues,
        mut flashes: Vec<Feedback>,
        status: StatusCode,
    ) -> Result<Response, WebError> {
        let mut pending = self.service.take_flashes(&session.id).await?;
        pending.append(&mut flashes);
        let scripts = self.service.scripts(&session.id).await?;

        let body = IndexPage::new(form, pending, &scripts).render()?;
        Ok((status, Html(body)).into_response())
    }

    /// Form page carrying the error as flashes, for the HTML routes
    pub async fn error_page(&self, session: &Session, err: WebError) -> Response {
        err.log();
        let status = err.status();
        match self
            .render(session, FormValues::default(), err.feedback(), status)
            .await
        {
            Ok(page) => page,
            Err(render_err) => {
                error!(error = %render_err, "Error page could not be rendered");
                (status, err.to_string()).into_response()
            }
        }
    }

    /// GET /
    pub async fn index(&self, session: &Session) -> Result<Response, WebError> {
        self.render(session, FormValues::default(), Vec::new(), StatusCode::OK)
            .await
    }

    /// POST /
    pub async fn submit(&self, session: &Session, form: SubmitForm) -> Result<Response, WebError> {
        let mut values = FormValues {
            object_type: form.mq_object_type.clone(),
            names: form.names.clone(),
            qmgr_name: form.qmgr_name.clone(),
        };

        if !self.rate_limiter.try_acquire() {
            warn!(session = %session.id, "Form submission throttled");
            return self
                .render(
                    session,
                    values,
                    vec![Feedback::error(THROTTLED_MESSAGE)],
                    StatusCode::TOO_MANY_REQUESTS,
                )
                .await;
        }

        let submission = self
            .service
            .submit(&session.id, GenerateRequest::from(&form))
            .await?;

        // Keep the selection and QMGR, drop the names once they made it into a script
        if submission.is_success() {
            values.names.clear();
        }

        self.render(session, values, Vec::new(), StatusCode::OK)
            .await
    }

    /// POST /download
    pub async fn download(&self, session: &Session) -> Result<Response, WebError> {
        let body = self.service.download(&session.id).await?;

        Ok((
            [
                (header::CONTENT_TYPE, "text/plain".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME),
                ),
            ],
            body,
        )
            .into_response())
    }

    /// POST /clear
    pub async fn clear(&self, session: &Session) -> Result<Response, WebError> {
        self.service.clear(&session.id).await?;
        Ok(Redirect::to("/").into_response())
    }

    /// POST /api/v1/generate
    pub async fn api_generate(&self, req: ApiGenerateRequest) -> Result<Response, WebError> {
        if !self.rate_limiter.try_acquire() {
            return Err(WebError::Throttled);
        }

        let submission = self.service.preview(&GenerateRequest::from(req));
        let status = if submission.is_success() {
            StatusCode::OK
        } else {
            StatusCode::UNPROCESSABLE_ENTITY
        };

        let response = ApiGenerateResponse {
            ok: submission.is_success(),
            script: submission.script.as_ref().map(|s| s.text()),
            commands: submission
                .script
                .as_ref()
                .map(|s| s.commands().collect())
                .unwrap_or_default(),
            feedback: submission.feedback,
        };

        Ok((status, Json(response)).into_response())
    }

    /// GET /api/v1/object-types
    pub fn object_types(&self) -> Json<Vec<ObjectTypeInfo>> {
        Json(ObjectType::ALL.into_iter().map(ObjectTypeInfo::from).collect())
    }
}
