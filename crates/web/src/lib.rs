//! HTTP Layer
//!
//! Serves the MQSC generator form, the script download and a small JSON API.

pub mod error;
pub mod handler;
pub mod rate_limiter;
pub mod server;
pub mod session;
pub mod types;
pub mod view;

pub use server::{WebServer, WebServerConfig, WebServerHandle};
