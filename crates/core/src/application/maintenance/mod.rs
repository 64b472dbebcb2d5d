// Session Sweeper
// Periodic eviction of idle sessions from the in-memory store

use crate::application::shutdown::ShutdownToken;
use crate::error::Result;
use crate::port::{SessionMaintenance, SessionMaintenanceConfig, SessionStats};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::interval;
use tracing::{error, info};

/// Background task evicting idle sessions
pub struct SessionSweeper {
    maintenance: Arc<dyn SessionMaintenance>,
    config: SessionMaintenanceConfig,
    interval: Duration,
}

impl SessionSweeper {
    /// # Arguments
    /// * `maintenance` - Store maintenance implementation
    /// * `config` - Idle TTL
    /// * `interval` - How often to sweep
    pub fn new(
        maintenance: Arc<dyn SessionMaintenance>,
        config: SessionMaintenanceConfig,
        interval: Duration,
    ) -> Self {
        Self {
            maintenance,
            config,
            interval,
        }
    }

    /// Sweep loop, returns when `shutdown` fires.
    ///
    /// Should be spawned in tokio::spawn
    pub async fn run(self, mut shutdown: ShutdownToken) {
        info!(
            interval_secs = self.interval.as_secs(),
            idle_ttl_minutes = self.config.idle_ttl_minutes,
            "Session sweeper started"
        );

        let mut tick = interval(self.interval);
        // The first tick completes immediately; nothing is idle yet.
        tick.tick().await;

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    if let Err(e) = self.maintenance.run_full_maintenance(&self.config).await {
                        error!(error = ?e, "Session sweep failed");
                    }
                }
                _ = shutdown.wait() => {
                    info!("Session sweeper stopped");
                    return;
                }
            }
        }
    }

    /// Sweep immediately (manual trigger)
    pub async fn run_now(&self) -> Result<SessionStats> {
        self.maintenance.run_full_maintenance(&self.config).await
    }
}
