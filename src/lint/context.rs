//! State threaded through the rule chain.
//!
//! Early rules fill in what later rules read: the parse rule stores the
//! frontmatter value and the schema rules store the trimmed `name` and
//! `description`.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::core::manifest::MANIFEST_FILE;
use crate::utils::fs::resolve_path;

use super::diagnostic::Diagnostic;

/// Outcome of a single rule: `Ok(())` continues the chain, `Err` ends it.
pub type RuleResult<T = ()> = std::result::Result<T, Diagnostic>;

/// Context provided to validation rules during validation
#[derive(Debug, Clone)]
pub struct ValidationContext {
    /// Absolute bundle path
    pub bundle_path: PathBuf,
    parsed: Option<Value>,
    name: Option<String>,
    description: Option<String>,
}

impl ValidationContext {
    /// Create a context for the bundle at `path`.
    ///
    /// Relative paths are made absolute against the current directory; the
    /// path is not required to exist.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            bundle_path: resolve_path(path),
            parsed: None,
            name: None,
            description: None,
        }
    }

    /// Path of the bundle's manifest file.
    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.bundle_path.join(MANIFEST_FILE)
    }

    /// Last component of the bundle path.
    #[must_use]
    pub fn directory_name(&self) -> String {
        self.bundle_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn set_parsed(&mut self, parsed: Value) {
        self.parsed = Some(parsed);
    }

    pub fn set_name(&mut self, name: String) {
        self.name = Some(name);
    }

    pub fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    /// Frontmatter as parsed, before the mapping check.
    pub fn parsed(&self, rule_id: &str) -> RuleResult<&Value> {
        self.parsed
            .as_ref()
            .ok_or_else(|| Diagnostic::out_of_order(rule_id, "the parsed frontmatter"))
    }

    /// Frontmatter mapping; only available once the mapping check passed.
    pub fn frontmatter(&self, rule_id: &str) -> RuleResult<&Mapping> {
        match &self.parsed {
            Some(Value::Mapping(mapping)) => Ok(mapping),
            _ => Err(Diagnostic::out_of_order(rule_id, "the frontmatter mapping")),
        }
    }

    /// Trimmed skill name.
    pub fn name(&self, rule_id: &str) -> RuleResult<&str> {
        self.name
            .as_deref()
            .ok_or_else(|| Diagnostic::out_of_order(rule_id, "the skill name"))
    }

    /// Trimmed description.
    pub fn description(&self, rule_id: &str) -> RuleResult<&str> {
        self.description
            .as_deref()
            .ok_or_else(|| Diagnostic::out_of_order(rule_id, "the description"))
    }

    /// Hyphen-separated, non-empty segments of the name.
    pub fn name_segments(&self, rule_id: &str) -> RuleResult<Vec<&str>> {
        Ok(self
            .name(rule_id)?
            .split('-')
            .filter(|segment| !segment.is_empty())
            .collect())
    }

    pub(crate) fn into_frontmatter(self) -> Option<Mapping> {
        match self.parsed {
            Some(Value::Mapping(mapping)) => Some(mapping),
            _ => None,
        }
    }
}
