//! HTTP Server
//!
//! Binds the axum router on TCP and serves until the shutdown token fires.

use crate::error::WebError;
use crate::handler::WebHandler;
use crate::rate_limiter::RateLimiter;
use crate::session::Session;
use crate::types::{ApiGenerateRequest, SubmitForm};
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use mqscgen_core::application::ShutdownToken;
use mqscgen_core::port::{IdProvider, SessionStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::info;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_RATE_LIMIT_BURST: u32 = 200;
pub const DEFAULT_RATE_LIMIT_RATE: u32 = 100;

/// Web Server Configuration
#[derive(Debug, Clone)]
pub struct WebServerConfig {
    pub host: String,
    pub port: u16,
    pub rate_limit_burst: u32,
    pub rate_limit_per_sec: u32,
}

impl Default for WebServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rate_limit_burst: DEFAULT_RATE_LIMIT_BURST,
            rate_limit_per_sec: DEFAULT_RATE_LIMIT_RATE,
        }
    }
}

/// Shared router state
#[derive(Clone)]
pub struct AppState {
    pub(crate) handler: Arc<WebHandler>,
    pub(crate) id_provider: Arc<dyn IdProvider>,
}

/// Running server
pub struct WebServerHandle {
    pub local_addr: SocketAddr,
    pub task: JoinHandle<std::io::Result<()>>,
}

/// Web Server
pub struct WebServer {
    config: WebServerConfig,
    state: AppState,
}

impl WebServer {
    pub fn new(
        config: WebServerConfig,
        sessions: Arc<dyn SessionStore>,
        id_provider: Arc<dyn IdProvider>,
    ) -> Self {
        let rate_limiter = RateLimiter::new(config.rate_limit_burst, config.rate_limit_per_sec);
        Self {
            config,
            state: AppState {
                handler: Arc::new(WebHandler::new(sessions, rate_limiter)),
                id_provider,
            },
        }
    }

    /// Router with all routes registered
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(index).post(submit))
            .route("/download", post(download))
            .route("/clear", post(clear))
            .route("/api/v1/object-types", get(object_types))
            .route("/api/v1/generate", post(api_generate))
            .route("/healthz", get(healthz))
            .layer(TraceLayer::new_for_http())
            .with_state(self.state.clone())
    }

    /// Bind and serve in a background task
    pub async fn start(
        self,
        mut shutdown: ShutdownToken,
    ) -> mqscgen_core::Result<WebServerHandle> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = TcpListener::bind(&addr).await?;
        let local_addr = listener.local_addr()?;

        info!(address = %local_addr, "HTTP server listening");

        let router = self.router();
        let task = tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async move { shutdown.wait().await })
                .await
        });

        Ok(WebServerHandle { local_addr, task })
    }
}

/// HTML routes answer with the page, errors included
async fn page(state: &AppState, session: &Session, result: Result<Response, WebError>) -> Response {
    let response = match result {
        Ok(response) => response,
        Err(err) => state.handler.error_page(session, err).await,
    };
    session.attach(response)
}

async fn index(State(state): State<AppState>, session: Session) -> Response {
    let result = state.handler.index(&session).await;
    page(&state, &session, result).await
}

async fn submit(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<SubmitForm>, FormRejection>,
) -> Response {
    let result = match form {
        Ok(Form(form)) => state.handler.submit(&session, form).await,
        Err(rejection) => Err(WebError::from(rejection)),
    };
    page(&state, &session, result).await
}

async fn download(State(state): State<AppState>, session: Session) -> Response {
    let result = state.handler.download(&session).await;
    page(&state, &session, result).await
}

async fn clear(State(state): State<AppState>, session: Session) -> Response {
    let result = state.handler.clear(&session).await;
    page(&state, &session, result).await
}

async fn api_generate(
    State(state): State<AppState>,
    Json(req): Json<ApiGenerateRequest>,
) -> Result<Response, WebError> {
    state.handler.api_generate(req).await
}

async fn object_types(State(state): State<AppState>) -> Response {
    state.handler.object_types().into_response()
}

async fn healthz() -> &'static str {
    "ok"
}
