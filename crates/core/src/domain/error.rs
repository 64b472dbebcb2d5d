// Domain Error Types

use super::name::NameViolation;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown object type: {0}")]
    UnknownObjectType(String),

    #[error("Input field cannot be blank!")]
    BlankNames,

    #[error("QMGR Name cannot be blank!")]
    BlankQmgrName,

    #[error("{} name(s) failed validation", .0.len())]
    InvalidNames(Vec<NameViolation>),
}

impl DomainError {
    /// User-facing messages, one per offending input
    pub fn messages(&self) -> Vec<String> {
        match self {
            DomainError::InvalidNames(violations) => {
                violations.iter().map(ToString::to_string).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

pub type Result<T> = std::result::Result<T, DomainError>;
