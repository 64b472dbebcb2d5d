// Object Name Validation

use super::object_type::ObjectType;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Upper-case letters, digits and `_` at both ends; `.` and `-` allowed inside.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z0-9_][A-Z0-9._-]*[A-Z0-9_]$").expect("name pattern is a valid regex")
});

/// Why a name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ViolationReason {
    TooLong { limit: usize },
    InvalidCharacters,
}

/// A rejected name candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameViolation {
    pub object_type: ObjectType,
    pub name: String,
    pub reason: ViolationReason,
}

impl NameViolation {
    pub fn message(&self) -> String {
        match self.reason {
            ViolationReason::TooLong { limit } => format!(
                "{} '{}' exceeds {} characters limit.",
                self.object_type, self.name, limit
            ),
            ViolationReason::InvalidCharacters => format!(
                "{} '{}' contains invalid characters.",
                self.object_type, self.name
            ),
        }
    }
}

impl std::fmt::Display for NameViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for NameViolation {}

/// Character-set check only, no length limit
pub fn has_valid_characters(name: &str) -> bool {
    NAME_PATTERN.is_match(name)
}

/// Validate one trimmed name against the rules of `object_type`.
///
/// Length is checked first; a name over the limit is never also reported
/// for its characters.
pub fn validate_name(name: &str, object_type: ObjectType) -> Result<(), NameViolation> {
    let limit = object_type.max_name_length();

    let reason = if name.chars().count() > limit {
        Some(ViolationReason::TooLong { limit })
    } else if !has_valid_characters(name) {
        Some(ViolationReason::InvalidCharacters)
    } else {
        None
    };

    match reason {
        Some(reason) => Err(NameViolation {
            object_type,
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
