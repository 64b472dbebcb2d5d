// MQSC Service - Core use cases for script generation and session accumulation

pub mod generate;

#[cfg(test)]
mod generate_test;

pub use generate::{generate_script, GenerateRequest};

use crate::domain::{Feedback, Script, SessionId};
use crate::error::{AppError, Result};
use crate::port::SessionStore;
use std::sync::Arc;
use tracing::{debug, info};

pub const GENERATED_MESSAGE: &str = "Script generated successfully!";
pub const CLEARED_MESSAGE: &str = "Output cleared successfully!";

/// Result of one form submission
#[derive(Debug, Clone)]
pub struct Submission {
    /// Present only when every name passed validation
    pub script: Option<Script>,
    pub feedback: Vec<Feedback>,
}

impl Submission {
    pub fn is_success(&self) -> bool {
        self.script.is_some()
    }
}

/// MQSC Service
pub struct MqscService {
    sessions: Arc<dyn SessionStore>,
}

impl MqscService {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }

    /// Generate without touching any session (JSON API, CLI)
    pub fn preview(&self, req: &GenerateRequest) -> Submission {
        outcome(generate::execute(req).map_err(AppError::from))
    }

    /// Generate a script and, on success, append it to the session.
    ///
    /// The returned feedback is also queued as flash messages.
    pub async fn submit(&self, session: &SessionId, req: GenerateRequest) -> Result<Submission> {
        let submission = outcome(generate::execute(&req).map_err(AppError::from));

        if let Some(script) = &submission.script {
            let count = self
                .sessions
                .append_script(session, script.clone())
                .await?;
            info!(
                object_type = %script.object_type,
                lines = script.names.len(),
                session_scripts = count,
                "Script generated"
            );
        } else {
            debug!(errors = submission.feedback.len(), "Submission rejected");
        }

        self.sessions
            .push_flashes(session, submission.feedback.clone())
            .await?;

        Ok(submission)
    }

    /// Scripts accumulated in this session
    pub async fn scripts(&self, session: &SessionId) -> Result<Vec<Script>> {
        self.sessions.scripts(session).await
    }

    /// Concatenated download artifact
    pub async fn download(&self, session: &SessionId) -> Result<String> {
        let scripts = self.sessions.scripts(session).await?;
        Ok(crate::domain::concatenate(&scripts))
    }

    /// Empty the session list and flash a confirmation
    pub async fn clear(&self, session: &SessionId) -> Result<usize> {
        let dropped = self.sessions.clear_scripts(session).await?;
        self.sessions
            .push_flashes(session, vec![Feedback::success(CLEARED_MESSAGE)])
            .await?;

        info!(dropped_scripts = dropped, "Session output cleared");
        Ok(dropped)
    }

    /// Pending flash messages (drained)
    pub async fn take_flashes(&self, session: &SessionId) -> Result<Vec<Feedback>> {
        self.sessions.take_flashes(session).await
    }
}

fn outcome(result: Result<Script>) -> Submission {
    match result {
        Ok(script) => Submission {
            script: Some(script),
            feedback: vec![Feedback::success(GENERATED_MESSAGE)],
        },
        Err(e) => Submission {
            script: None,
            feedback: e.user_messages().into_iter().map(Feedback::error).collect(),
        },
    }
}
