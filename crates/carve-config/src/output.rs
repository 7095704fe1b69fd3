//! Output rendering configuration.

use serde::{Deserialize, Serialize};

/// Output formats understood by the CLI.
pub const FORMATS: &[&str] = &["json", "table", "raw"];

fn default_format() -> String {
    String::from("json")
}

const fn default_include_text() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct OutputConfig {
    /// One of [`FORMATS`].
    #[serde(default = "default_format")]
    pub format: String,

    /// Include each method's source text in records.
    #[serde(default = "default_include_text")]
    pub include_text: bool,

    /// Cap on records printed per command.
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            include_text: default_include_text(),
            limit: None,
        }
    }
}
