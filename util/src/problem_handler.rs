//! Problem metadata as delivered by the judge service.
//!
//! A [`ProblemHandler`] tells the local tooling how a problem is judged: which
//! handler runs it, which checker compares outputs, and the delimiter strings
//! some checkers need. Only the delimiter fields matter to the comparison
//! itself; they are projected into a [`ComparisonConfig`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{UtilError, UtilResult};

/// Delimiter settings consumed by the checkers.
///
/// Every field is optional. A checker that needs a field it does not find
/// fails the comparison instead of erroring.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ComparisonConfig {
    /// Record separator for the line-set checker.
    #[serde(default)]
    pub separator: Option<String>,
    /// Record separator for the bounded token-set checker.
    #[serde(default)]
    pub separator1: Option<String>,
    /// Token separator inside a wrapped record.
    #[serde(default)]
    pub separator2: Option<String>,
    /// Opening wrapper of the reorderable region.
    #[serde(default)]
    pub starting: Option<String>,
    /// Closing wrapper of the reorderable region.
    #[serde(default)]
    pub ending: Option<String>,
}

impl ComparisonConfig {
    pub fn with_separator(mut self, value: impl Into<String>) -> Self {
        self.separator = Some(value.into());
        self
    }

    pub fn with_separator1(mut self, value: impl Into<String>) -> Self {
        self.separator1 = Some(value.into());
        self
    }

    pub fn with_separator2(mut self, value: impl Into<String>) -> Self {
        self.separator2 = Some(value.into());
        self
    }

    pub fn with_starting(mut self, value: impl Into<String>) -> Self {
        self.starting = Some(value.into());
        self
    }

    pub fn with_ending(mut self, value: impl Into<String>) -> Self {
        self.ending = Some(value.into());
        self
    }
}

/// Per-problem judging metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProblemHandler {
    #[serde(default = "default_handler")]
    pub handler: String,

    /// Name of the output checker. Absent means plain exact comparison.
    #[serde(default)]
    pub checker: Option<String>,

    #[serde(default = "default_source_modifier")]
    pub source_modifier: String,

    #[serde(default)]
    pub compilers: Option<String>,

    #[serde(default)]
    pub presentation_error: bool,

    #[serde(default)]
    pub separator: Option<String>,
    #[serde(default)]
    pub separator1: Option<String>,
    #[serde(default)]
    pub separator2: Option<String>,
    #[serde(default)]
    pub starting: Option<String>,
    #[serde(default)]
    pub ending: Option<String>,
}

impl Default for ProblemHandler {
    fn default() -> Self {
        Self {
            handler: default_handler(),
            checker: None,
            source_modifier: default_source_modifier(),
            compilers: None,
            presentation_error: false,
            separator: None,
            separator1: None,
            separator2: None,
            starting: None,
            ending: None,
        }
    }
}

impl ProblemHandler {
    pub fn from_json_str(raw: &str) -> UtilResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads and parses a handler JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> UtilResult<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| UtilError::io(path, e))?;
        let handler = Self::from_json_str(&raw)?;
        tracing::debug!(
            path = %path.display(),
            handler = %handler.handler,
            checker = ?handler.checker,
            "loaded problem handler"
        );
        Ok(handler)
    }

    pub fn comparison_config(&self) -> ComparisonConfig {
        ComparisonConfig {
            separator: self.separator.clone(),
            separator1: self.separator1.clone(),
            separator2: self.separator2.clone(),
            starting: self.starting.clone(),
            ending: self.ending.clone(),
        }
    }

    /// Only the standard handler can be judged locally; graphic and other
    /// custom handlers need the remote judge.
    pub fn supports_local_testcases(&self) -> bool {
        self.handler == "std"
    }
}

/// Missing metadata means the problem cannot be checked locally.
pub fn supports_local_testcases(handler: Option<&ProblemHandler>) -> bool {
    handler.is_some_and(ProblemHandler::supports_local_testcases)
}

fn default_handler() -> String {
    "std".to_string()
}

fn default_source_modifier() -> String {
    "none".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_object_uses_defaults() {
        let h = ProblemHandler::from_json_str("{}").unwrap();
        assert_eq!(h, ProblemHandler::default());
        assert_eq!(h.handler, "std");
        assert_eq!(h.source_modifier, "none");
        assert!(h.checker.is_none());
    }

    #[test]
    fn parses_judge_metadata_and_ignores_unknown_fields() {
        let raw = r#"{
            "handler": "std",
            "checker": "elastic2",
            "source_modifier": "no_main",
            "compilers": "G++17",
            "separator1": "\n",
            "separator2": ",",
            "starting": "{",
            "ending": "}",
            "solution": "C++"
        }"#;
        let h = ProblemHandler::from_json_str(raw).unwrap();
        assert_eq!(h.checker.as_deref(), Some("elastic2"));
        assert_eq!(h.compilers.as_deref(), Some("G++17"));

        let cfg = h.comparison_config();
        assert_eq!(cfg.separator, None);
        assert_eq!(cfg.separator1.as_deref(), Some("\n"));
        assert_eq!(cfg.separator2.as_deref(), Some(","));
        assert_eq!(cfg.starting.as_deref(), Some("{"));
        assert_eq!(cfg.ending.as_deref(), Some("}"));
    }

    #[test]
    fn invalid_json_is_reported() {
        let err = ProblemHandler::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, UtilError::InvalidJson(_)));
    }

    #[test]
    fn load_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"checker": "elastic", "separator": "\n"}}"#).unwrap();

        let h = ProblemHandler::load(file.path()).unwrap();
        assert_eq!(h.checker.as_deref(), Some("elastic"));
        assert_eq!(h.comparison_config().separator.as_deref(), Some("\n"));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = ProblemHandler::load("/definitely/not/here/handler.json").unwrap_err();
        assert!(matches!(err, UtilError::Io { .. }));
    }

    #[test]
    fn only_std_handler_runs_locally() {
        let std_handler = ProblemHandler::default();
        let graphic = ProblemHandler {
            handler: "graphic".into(),
            ..ProblemHandler::default()
        };

        assert!(supports_local_testcases(Some(&std_handler)));
        assert!(!supports_local_testcases(Some(&graphic)));
        assert!(!supports_local_testcases(None));
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = ComparisonConfig::default()
            .with_separator1("\n")
            .with_separator2(" ")
            .with_starting("(")
            .with_ending(")");
        assert_eq!(cfg.separator, None);
        assert_eq!(cfg.separator2.as_deref(), Some(" "));
        assert_eq!(cfg.ending.as_deref(), Some(")"));
    }
}
