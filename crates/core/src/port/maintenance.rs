// Session Maintenance port
use crate::error::Result;
use async_trait::async_trait;

/// Session store statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub session_count: usize,
    pub script_count: usize,
}

/// Maintenance configuration
#[derive(Debug, Clone)]
pub struct SessionMaintenanceConfig {
    /// Sessions untouched for longer than this are evicted (minutes)
    pub idle_ttl_minutes: i64,
}

impl SessionMaintenanceConfig {
    pub fn idle_ttl_ms(&self) -> i64 {
        self.idle_ttl_minutes.saturating_mul(60_000)
    }
}

impl Default for SessionMaintenanceConfig {
    fn default() -> Self {
        Self {
            idle_ttl_minutes: 120,
        }
    }
}

/// Session store maintenance operations
#[async_trait]
pub trait SessionMaintenance: Send + Sync {
    /// Drop sessions idle for longer than `max_idle_ms`
    ///
    /// # Returns
    /// Number of sessions evicted
    async fn evict_idle(&self, max_idle_ms: i64) -> Result<usize>;

    /// Get store statistics
    async fn get_stats(&self) -> Result<SessionStats>;

    /// Evict idle sessions, then report what is left
    async fn run_full_maintenance(&self, config: &SessionMaintenanceConfig) -> Result<SessionStats> {
        let evicted = self.evict_idle(config.idle_ttl_ms()).await?;
        let stats = self.get_stats().await?;

        tracing::info!(
            evicted_sessions = evicted,
            sessions = stats.session_count,
            scripts = stats.script_count,
            "Session maintenance completed"
        );

        Ok(stats)
    }
}
