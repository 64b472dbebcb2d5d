// In-memory Maintenance Implementation
use crate::InMemorySessionStore;
use async_trait::async_trait;
use mqscgen_core::error::Result;
use mqscgen_core::port::{SessionMaintenance, SessionStats};
use tracing::debug;

#[async_trait]
impl SessionMaintenance for InMemorySessionStore {
    async fn evict_idle(&self, max_idle_ms: i64) -> Result<usize> {
        let now = self.time_provider.now_millis();
        let mut sessions = self.sessions.write().await;

        let before = sessions.len();
        sessions.retain(|_, state| !state.is_idle(now, max_idle_ms));
        let evicted = before - sessions.len();

        if evicted > 0 {
            debug!(evicted, remaining = sessions.len(), "Evicted idle sessions");
        }

        Ok(evicted)
    }

    async fn get_stats(&self) -> Result<SessionStats> {
        let sessions = self.sessions.read().await;

        Ok(SessionStats {
            session_count: sessions.len(),
            script_count: sessions.values().map(|s| s.scripts().len()).sum(),
        })
    }
}
