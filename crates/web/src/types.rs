//! HTTP Request/Response Types
//!
//! Form fields keep the names the HTML form posts; JSON bodies belong to
//! the `/api/v1` endpoints.

use mqscgen_core::application::GenerateRequest;
use mqscgen_core::domain::{Feedback, ObjectType};
use serde::{Deserialize, Serialize};

/// `POST /` - form submission
#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub mq_object_type: String,
    #[serde(default)]
    pub names: String,
    #[serde(default)]
    pub qmgr_name: String,
}

impl From<&SubmitForm> for GenerateRequest {
    fn from(form: &SubmitForm) -> Self {
        GenerateRequest::from_text(&form.mq_object_type, &form.names, &form.qmgr_name)
    }
}

/// Names as a list or as newline-separated text
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum NamesInput {
    List(Vec<String>),
    Text(String),
}

impl NamesInput {
    pub fn into_lines(self) -> Vec<String> {
        match self {
            NamesInput::List(names) => names,
            NamesInput::Text(text) => text.lines().map(str::to_string).collect(),
        }
    }
}

/// `POST /api/v1/generate`
#[derive(Debug, Deserialize)]
pub struct ApiGenerateRequest {
    pub object_type: String,
    pub names: NamesInput,
    #[serde(default)]
    pub qmgr_name: String,
}

impl From<ApiGenerateRequest> for GenerateRequest {
    fn from(req: ApiGenerateRequest) -> Self {
        GenerateRequest {
            object_type: req.object_type,
            names: req.names.into_lines(),
            qmgr_name: req.qmgr_name,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApiGenerateResponse {
    pub ok: bool,
    /// Rendered script text, absent when any name was rejected
    pub script: Option<String>,
    pub commands: Vec<String>,
    pub feedback: Vec<Feedback>,
}

/// `GET /api/v1/object-types`
#[derive(Debug, Clone, Serialize)]
pub struct ObjectTypeInfo {
    pub label: &'static str,
    pub max_name_length: usize,
    pub template: &'static str,
}

impl From<ObjectType> for ObjectTypeInfo {
    fn from(kind: ObjectType) -> Self {
        Self {
            label: kind.label(),
            max_name_length: kind.max_name_length(),
            template: kind.template(),
        }
    }
}
