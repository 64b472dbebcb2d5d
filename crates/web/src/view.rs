//! HTML page

use askama::Template;
use mqscgen_core::domain::{Feedback, ObjectType, Script};

pub struct TypeOption {
    pub label: &'static str,
    pub selected: bool,
}

/// Values echoed back into the form
#[derive(Debug, Default, Clone)]
pub struct FormValues {
    pub object_type: String,
    pub names: String,
    pub qmgr_name: String,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub options: Vec<TypeOption>,
    pub form: FormValues,
    pub flashes: Vec<Feedback>,
    pub scripts: Vec<String>,
}

impl IndexPage {
    pub fn new(form: FormValues, flashes: Vec<Feedback>, scripts: &[Script]) -> Self {
        let options = ObjectType::ALL
            .into_iter()
            .map(|kind| TypeOption {
                label: kind.label(),
                selected: kind.label() == form.object_type,
            })
            .collect();

        Self {
            options,
            form,
            flashes,
            scripts: scripts.iter().map(Script::text).collect(),
        }
    }
}
