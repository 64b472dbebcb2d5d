// Domain Layer - Pure business logic and entities

pub mod error;
pub mod feedback;
pub mod name;
pub mod object_type;
pub mod script;
pub mod session;

// Re-exports
pub use error::DomainError;
pub use feedback::{Feedback, Severity};
pub use name::{validate_name, NameViolation, ViolationReason};
pub use object_type::ObjectType;
pub use script::{concatenate, Script, DOWNLOAD_FILE_NAME};
pub use session::{SessionId, SessionState};
