// In-memory SessionStore Implementation

use async_trait::async_trait;
use mqscgen_core::domain::{Feedback, Script, SessionId, SessionState};
use mqscgen_core::error::Result;
use mqscgen_core::port::{SessionStore, TimeProvider};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Process-local session store.
///
/// Sessions vanish on restart; idle ones are evicted by the sweeper.
pub struct InMemorySessionStore {
    pub(crate) sessions: RwLock<HashMap<SessionId, SessionState>>,
    pub(crate) time_provider: Arc<dyn TimeProvider>,
}

impl InMemorySessionStore {
    pub fn new(time_provider: Arc<dyn TimeProvider>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            time_provider,
        }
    }

    /// Run `f` against the session, creating it if missing
    async fn with_session<T>(
        &self,
        session: &SessionId,
        f: impl FnOnce(&mut SessionState) -> T,
    ) -> T {
        let now = self.time_provider.now_millis();
        let mut sessions = self.sessions.write().await;
        let state = sessions
            .entry(session.clone())
            .or_insert_with(|| SessionState::new(now));
        state.touch(now);
        f(state)
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn scripts(&self, session: &SessionId) -> Result<Vec<Script>> {
        let now = self.time_provider.now_millis();
        let mut sessions = self.sessions.write().await;

        // Reads never create sessions
        Ok(match sessions.get_mut(session) {
            Some(state) => {
                state.touch(now);
                state.scripts().to_vec()
            }
            None => Vec::new(),
        })
    }

    async fn append_script(&self, session: &SessionId, script: Script) -> Result<usize> {
        Ok(self
            .with_session(session, |state| state.append_script(script))
            .await)
    }

    async fn clear_scripts(&self, session: &SessionId) -> Result<usize> {
        Ok(self
            .with_session(session, SessionState::clear_scripts)
            .await)
    }

    async fn push_flashes(&self, session: &SessionId, feedback: Vec<Feedback>) -> Result<()> {
        if feedback.is_empty() {
            return Ok(());
        }
        self.with_session(session, |state| state.push_flashes(feedback))
            .await;
        Ok(())
    }

    async fn take_flashes(&self, session: &SessionId) -> Result<Vec<Feedback>> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions
            .get_mut(session)
            .map(SessionState::take_flashes)
            .unwrap_or_default())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use mqscgen_core::domain::ObjectType;
    use std::sync::atomic::{AtomicI64, Ordering};

    /// Manually advanced clock
    pub(crate) struct ManualClock(pub AtomicI64);

    impl ManualClock {
        pub(crate) fn at(millis: i64) -> Arc<Self> {
            Arc::new(Self(AtomicI64::new(millis)))
        }

        pub(crate) fn advance(&self, millis: i64) {
            self.0.fetch_add(millis, Ordering::SeqCst);
        }
    }

    impl TimeProvider for ManualClock {
        fn now_millis(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn script(name: &str) -> Script {
        Script::new(ObjectType::LocalQueue, "QM1", vec![name.to_string()])
    }

    #[tokio::test]
    async fn test_unknown_session_is_empty() {
        let store = InMemorySessionStore::new(ManualClock::at(0));
        let sid = "nobody".to_string();

        assert!(store.scripts(&sid).await.unwrap().is_empty());
        assert!(store.take_flashes(&sid).await.unwrap().is_empty());
        assert!(store.sessions.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_append_preserves_order() {
        let store = InMemorySessionStore::new(ManualClock::at(0));
        let sid = "s1".to_string();

        assert_eq!(store.append_script(&sid, script("A1")).await.unwrap(), 1);
        assert_eq!(store.append_script(&sid, script("B1")).await.unwrap(), 2);

        let scripts = store.scripts(&sid).await.unwrap();
        assert_eq!(scripts[0].names, vec!["A1"]);
        assert_eq!(scripts[1].names, vec!["B1"]);
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = InMemorySessionStore::new(ManualClock::at(0));
        let alice = "alice".to_string();
        let bob = "bob".to_string();

        store.append_script(&alice, script("A1")).await.unwrap();
        store
            .push_flashes(&alice, vec![Feedback::success("done")])
            .await
            .unwrap();

        assert!(store.scripts(&bob).await.unwrap().is_empty());
        assert!(store.take_flashes(&bob).await.unwrap().is_empty());
        assert_eq!(store.take_flashes(&alice).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_clear_empties_list() {
        let store = InMemorySessionStore::new(ManualClock::at(0));
        let sid = "s1".to_string();

        store.append_script(&sid, script("A1")).await.unwrap();
        store.append_script(&sid, script("B1")).await.unwrap();

        assert_eq!(store.clear_scripts(&sid).await.unwrap(), 2);
        assert!(store.scripts(&sid).await.unwrap().is_empty());
        assert_eq!(store.clear_scripts(&sid).await.unwrap(), 0);
    }
}
