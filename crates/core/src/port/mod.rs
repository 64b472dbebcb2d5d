// Port Layer - Interfaces for external dependencies

pub mod id_provider; // For deterministic testing
pub mod maintenance;
pub mod session_store;
pub mod time_provider;

// Re-exports
pub use id_provider::IdProvider;
pub use maintenance::{SessionMaintenance, SessionMaintenanceConfig, SessionStats};
pub use session_store::SessionStore;
pub use time_provider::TimeProvider;
