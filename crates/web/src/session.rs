//! Session cookie handling

use crate::server::AppState;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use mqscgen_core::domain::SessionId;
use std::convert::Infallible;

pub const SESSION_COOKIE: &str = "mqscgen_session";

/// Session bound to the current request.
///
/// Requests without a usable cookie get a fresh ID, sent back with
/// `Set-Cookie` by [`Session::attach`].
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub is_new: bool,
}

/// IDs are issued by us as 32 hex chars; anything else is ignored
fn is_well_formed(id: &str) -> bool {
    id.len() == 32 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Find our cookie among all `Cookie` headers
pub fn session_id_from_headers(headers: &HeaderMap) -> Option<SessionId> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, value)| *name == SESSION_COOKIE && is_well_formed(value))
        .map(|(_, value)| value.to_string())
}

impl Session {
    pub fn set_cookie_value(&self) -> String {
        format!(
            "{}={}; Path=/; HttpOnly; SameSite=Lax",
            SESSION_COOKIE, self.id
        )
    }

    /// Add `Set-Cookie` to the response when the session was just created
    pub fn attach(&self, mut response: Response) -> Response {
        if self.is_new {
            if let Ok(value) = HeaderValue::from_str(&self.set_cookie_value()) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Session {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(match session_id_from_headers(&parts.headers) {
            Some(id) => Session { id, is_new: false },
            None => Session {
                id: state.id_provider.generate_id(),
                is_new: true,
            },
        })
    }
}
