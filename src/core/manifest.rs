//! Typed view of a validated `SKILL.md` manifest.

use serde::Serialize;
use serde_yaml::{Mapping, Value};

/// Manifest file expected directly inside every bundle.
pub const MANIFEST_FILE: &str = "SKILL.md";

/// Keys permitted at the top level of the frontmatter.
pub const ALLOWED_KEYS: [&str; 5] = ["name", "description", "license", "allowed-tools", "metadata"];

/// Maximum length for skill names (in characters).
pub const MAX_NAME_LENGTH: usize = 64;

/// Maximum length for descriptions (in characters).
pub const MAX_DESCRIPTION_LENGTH: usize = 1024;

/// Suffix the first name segment must carry.
pub const GERUND_SUFFIX: &str = "ing";

/// Full names that may not be used.
pub const RESERVED_NAMES: [&str; 2] = ["anthropic-helper", "claude-tools"];

/// Segments that may not appear anywhere in a name.
pub const RESERVED_WORDS: [&str; 2] = ["anthropic", "claude"];

/// Manifest fields after validation.
///
/// `license`, `allowed-tools` and `metadata` are carried as untyped YAML;
/// nothing downstream interprets them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Manifest {
    pub name: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<Value>,
    #[serde(rename = "allowed-tools", skip_serializing_if = "Option::is_none")]
    pub allowed_tools: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
}

impl Manifest {
    /// Build from a frontmatter mapping.
    ///
    /// Returns `None` unless `name` and `description` are strings. Values are
    /// trimmed; no other rule is checked here.
    #[must_use]
    pub fn from_frontmatter(frontmatter: &Mapping) -> Option<Self> {
        let name = frontmatter.get("name")?.as_str()?.trim().to_string();
        let description = frontmatter.get("description")?.as_str()?.trim().to_string();
        Some(Self {
            name,
            description,
            license: frontmatter.get("license").cloned(),
            allowed_tools: frontmatter.get("allowed-tools").cloned(),
            metadata: frontmatter.get("metadata").cloned(),
        })
    }
}

/// Sorted, comma-joined list of allowed keys, as shown in diagnostics.
#[must_use]
pub fn allowed_keys_label() -> String {
    let mut keys = ALLOWED_KEYS.to_vec();
    keys.sort_unstable();
    keys.join(", ")
}
