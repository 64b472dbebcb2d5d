// Script Domain Model

use super::object_type::ObjectType;
use serde::{Deserialize, Serialize};

/// Download file name for accumulated scripts
pub const DOWNLOAD_FILE_NAME: &str = "output.mqsc";

/// One generated script block (one successful submission)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Script {
    pub object_type: ObjectType,
    pub qmgr_name: String,
    /// Validated, deduplicated object names in submission order
    pub names: Vec<String>,
}

impl Script {
    pub fn new(object_type: ObjectType, qmgr_name: impl Into<String>, names: Vec<String>) -> Self {
        Self {
            object_type,
            qmgr_name: qmgr_name.into(),
            names,
        }
    }

    /// Comment line opening the block
    pub fn header(&self) -> String {
        format!("* ********** {} **********", self.object_type)
    }

    /// `DEFINE` commands, one per name
    pub fn commands(&self) -> impl Iterator<Item = String> + '_ {
        self.names.iter().map(move |name| {
            self.object_type
                .render(&format!("{}.{}", self.qmgr_name, name))
        })
    }

    /// Script text as shown and downloaded.
    ///
    /// Starts with a blank line so concatenated blocks stay visually apart;
    /// every line, the last included, ends with `\n`.
    pub fn text(&self) -> String {
        let mut text = format!("\n{}\n", self.header());
        for command in self.commands() {
            text.push_str(&command);
            text.push('\n');
        }
        text
    }
}

/// Join session scripts into the downloadable artifact
pub fn concatenate(scripts: &[Script]) -> String {
    scripts
        .iter()
        .map(Script::text)
        .collect::<Vec<_>>()
        .join("\n")
}
