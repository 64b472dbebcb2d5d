// Generate Use Case

use crate::domain::{validate_name, DomainError, NameViolation, ObjectType, Script};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Generate request, one per form submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Object type label, e.g. "Local Queue"
    pub object_type: String,
    /// Raw name candidates, one per line
    pub names: Vec<String>,
    pub qmgr_name: String,
}

impl GenerateRequest {
    /// Build a request from the form's newline-separated `names` text
    pub fn from_text(
        object_type: impl Into<String>,
        names: &str,
        qmgr_name: impl Into<String>,
    ) -> Self {
        Self {
            object_type: object_type.into(),
            names: names.lines().map(str::to_string).collect(),
            qmgr_name: qmgr_name.into(),
        }
    }
}

/// Request-level checks that short-circuit before any name is validated.
///
/// Blank names win over a blank QMGR name, which wins over an unknown type.
/// The object type must match a label exactly.
pub fn validate_request(req: &GenerateRequest) -> Result<(ObjectType, String), DomainError> {
    if req.names.iter().all(|name| name.trim().is_empty()) {
        return Err(DomainError::BlankNames);
    }

    let qmgr_name = req.qmgr_name.trim();
    if qmgr_name.is_empty() {
        return Err(DomainError::BlankQmgrName);
    }

    let object_type = req.object_type.parse::<ObjectType>()?;

    Ok((object_type, qmgr_name.to_string()))
}

/// Validate and render the candidates of one submission.
///
/// All-or-nothing: any violation discards every accepted name. Duplicates
/// collapse to their first occurrence.
pub fn generate_script<S: AsRef<str>>(
    candidates: &[S],
    object_type: ObjectType,
    qmgr_name: &str,
) -> Result<Script, Vec<NameViolation>> {
    let mut violations = Vec::new();
    let mut seen = HashSet::new();
    let mut accepted = Vec::new();

    for name in candidates
        .iter()
        .map(|candidate| candidate.as_ref().trim())
        .filter(|name| !name.is_empty())
    {
        match validate_name(name, object_type) {
            Ok(()) => {
                if seen.insert(name) {
                    accepted.push(name.to_string());
                }
            }
            Err(violation) => violations.push(violation),
        }
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    Ok(Script::new(object_type, qmgr_name, accepted))
}

/// Execute generate use case (pure, no session side effects)
pub fn execute(req: &GenerateRequest) -> Result<Script, DomainError> {
    let (object_type, qmgr_name) = validate_request(req)?;

    generate_script(req.names.as_slice(), object_type, &qmgr_name)
        .map_err(DomainError::InvalidNames)
}
