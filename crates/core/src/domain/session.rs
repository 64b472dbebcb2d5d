// Session Domain Model

use super::feedback::Feedback;
use super::script::{concatenate, Script};
use serde::{Deserialize, Serialize};

/// Session ID (UUID v4, carried in a cookie)
pub type SessionId = String;

/// Per-session state: accumulated scripts plus pending flash messages.
///
/// Scripts are append-only; the only removal is `clear_scripts`, which
/// empties the whole list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    scripts: Vec<Script>,
    flashes: Vec<Feedback>,
    pub last_seen_at: i64, // epoch ms
}

impl SessionState {
    pub fn new(now: i64) -> Self {
        Self {
            last_seen_at: now,
            ..Default::default()
        }
    }

    pub fn scripts(&self) -> &[Script] {
        &self.scripts
    }

    /// Returns the new script count
    pub fn append_script(&mut self, script: Script) -> usize {
        self.scripts.push(script);
        self.scripts.len()
    }

    /// Returns how many scripts were dropped
    pub fn clear_scripts(&mut self) -> usize {
        let dropped = self.scripts.len();
        self.scripts.clear();
        dropped
    }

    /// Downloadable artifact: all scripts joined by newlines
    pub fn download(&self) -> String {
        concatenate(&self.scripts)
    }

    pub fn push_flashes(&mut self, feedback: impl IntoIterator<Item = Feedback>) {
        self.flashes.extend(feedback);
    }

    /// Flashes are shown once
    pub fn take_flashes(&mut self) -> Vec<Feedback> {
        std::mem::take(&mut self.flashes)
    }

    pub fn touch(&mut self, now: i64) {
        self.last_seen_at = self.last_seen_at.max(now);
    }

    pub fn is_idle(&self, now: i64, max_idle_ms: i64) -> bool {
        now.saturating_sub(self.last_seen_at) > max_idle_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ObjectType;

    fn script(name: &str) -> Script {
        Script::new(ObjectType::LocalQueue, "QM1", vec![name.to_string()])
    }

    #[test]
    fn test_append_then_clear() {
        let mut state = SessionState::new(1000);
        assert!(state.scripts().is_empty());

        assert_eq!(state.append_script(script("A1")), 1);
        assert_eq!(state.append_script(script("B1")), 2);
        assert_eq!(state.scripts()[0].names, vec!["A1"]);

        assert_eq!(state.clear_scripts(), 2);
        assert!(state.scripts().is_empty());
        assert_eq!(state.download(), "");

        // Repeatable after clear
        assert_eq!(state.append_script(script("C1")), 1);
    }

    #[test]
    fn test_flashes_are_taken_once() {
        let mut state = SessionState::new(0);
        state.push_flashes([Feedback::success("ok"), Feedback::error("bad")]);

        let taken = state.take_flashes();
        assert_eq!(taken.len(), 2);
        assert!(taken[1].is_error());
        assert!(state.take_flashes().is_empty());
    }

    #[test]
    fn test_idle_detection() {
        let mut state = SessionState::new(1_000);
        assert!(!state.is_idle(5_000, 10_000));
        assert!(state.is_idle(20_000, 10_000));

        state.touch(15_000);
        assert!(!state.is_idle(20_000, 10_000));

        // Clock going backwards never rewinds last_seen_at
        state.touch(2_000);
        assert_eq!(state.last_seen_at, 15_000);
    }
}
