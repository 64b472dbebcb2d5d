// Session Store Port (Interface)

use crate::domain::{Feedback, Script, SessionId};
use crate::error::Result;
use async_trait::async_trait;

/// Storage for per-session state.
///
/// Unknown session IDs behave as empty sessions; writes create them.
/// Every call counts as activity for idle eviction.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Accumulated scripts in append order
    async fn scripts(&self, session: &SessionId) -> Result<Vec<Script>>;

    /// Append one script, returns the new script count
    async fn append_script(&self, session: &SessionId, script: Script) -> Result<usize>;

    /// Empty the script list, returns how many scripts were dropped
    async fn clear_scripts(&self, session: &SessionId) -> Result<usize>;

    /// Queue flash messages for the next render
    async fn push_flashes(&self, session: &SessionId, feedback: Vec<Feedback>) -> Result<()>;

    /// Drain pending flash messages
    async fn take_flashes(&self, session: &SessionId) -> Result<Vec<Feedback>>;
}
