//! Batch scan configuration.

use serde::{Deserialize, Serialize};

fn default_extensions() -> Vec<String> {
    vec![String::from("java")]
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScanConfig {
    /// File extensions (without the dot) picked up by directory walks.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Skip test sources and test directories.
    #[serde(default)]
    pub skip_tests: bool,

    /// Only scan paths matching this glob.
    #[serde(default)]
    pub include_glob: Option<String>,

    /// Never scan paths matching this glob.
    #[serde(default)]
    pub exclude_glob: Option<String>,

    /// Worker threads for extraction. `0` uses one per core.
    #[serde(default)]
    pub threads: usize,

    /// Descend into hidden files and directories.
    #[serde(default)]
    pub hidden: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            skip_tests: false,
            include_glob: None,
            exclude_glob: None,
            threads: 0,
            hidden: false,
        }
    }
}

impl ScanConfig {
    /// Whether `extension` (no leading dot) is one of the configured ones.
    #[must_use]
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|configured| configured.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ScanConfig::default();
        assert_eq!(config.extensions, vec!["java"]);
        assert!(!config.skip_tests);
        assert!(config.include_glob.is_none());
        assert_eq!(config.threads, 0);
        assert!(!config.hidden);
    }

    #[test]
    fn extension_match_ignores_case_and_dot() {
        let config = ScanConfig {
            extensions: vec![String::from(".java"), String::from("jav")],
            ..ScanConfig::default()
        };
        assert!(config.accepts_extension("java"));
        assert!(config.accepts_extension("JAVA"));
        assert!(config.accepts_extension("jav"));
        assert!(!config.accepts_extension("kt"));
    }
}
