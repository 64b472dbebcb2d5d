// MQSC Generator Infrastructure - In-memory Adapter
// Implements: SessionStore, SessionMaintenance

mod maintenance_impl;
mod session_store;

pub use session_store::InMemorySessionStore;
