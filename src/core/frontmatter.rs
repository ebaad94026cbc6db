//! YAML frontmatter extraction for `SKILL.md` documents.
//!
//! A manifest document looks like:
//!
//! ```markdown
//! ---
//! name: testing-skill
//! description: Runs the project's test suite
//! ---
//!
//! # Testing Skill
//! ```
//!
//! Only the delimited block is parsed here; the body is left to the caller and
//! the mapping's values are not interpreted.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Frontmatter delimiter line.
pub const DELIMITER: &str = "---";

/// Why a document's frontmatter could not be turned into a mapping.
///
/// The `Display` strings are the exact diagnostics surfaced by validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontmatterError {
    /// Document does not start with `---`.
    #[error("No YAML frontmatter found")]
    NoFrontmatter,

    /// Opening line is not exactly `---` or the closing delimiter is missing.
    #[error("Invalid frontmatter format")]
    Unterminated,

    /// The delimited block is not valid YAML.
    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),

    /// The block parsed, but not to a mapping.
    #[error("Frontmatter must be a YAML dictionary")]
    NotAMapping,
}

impl FrontmatterError {
    /// True for every failure other than a missing opening delimiter.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        !matches!(self, Self::NoFrontmatter)
    }
}

/// Return the raw text between the opening and closing delimiters.
///
/// The block may be empty (`---\n\n---`). Line endings must already be
/// normalized to `\n`.
pub fn extract_block(content: &str) -> Result<&str, FrontmatterError> {
    if !content.starts_with(DELIMITER) {
        return Err(FrontmatterError::NoFrontmatter);
    }

    let rest = content
        .strip_prefix("---\n")
        .ok_or(FrontmatterError::Unterminated)?;
    let end = rest.find("\n---").ok_or(FrontmatterError::Unterminated)?;
    Ok(&rest[..end])
}

/// Parse the frontmatter block into an untyped YAML value.
///
/// Non-mapping values are returned as-is so the caller can decide how to
/// report them; see [`parse_frontmatter`] for the mapping-only variant.
pub fn parse_frontmatter_value(content: &str) -> Result<Value, FrontmatterError> {
    let normalized = normalize_newlines(content);
    let block = extract_block(&normalized)?;
    serde_yaml::from_str::<Value>(block).map_err(|err| FrontmatterError::InvalidYaml(err.to_string()))
}

/// Parse the frontmatter block and require it to be a mapping.
pub fn parse_frontmatter(content: &str) -> Result<Mapping, FrontmatterError> {
    match parse_frontmatter_value(content)? {
        Value::Mapping(mapping) => Ok(mapping),
        _ => Err(FrontmatterError::NotAMapping),
    }
}

fn normalize_newlines(content: &str) -> std::borrow::Cow<'_, str> {
    if content.contains('\r') {
        std::borrow::Cow::Owned(content.replace("\r\n", "\n"))
    } else {
        std::borrow::Cow::Borrowed(content)
    }
}

/// Human-facing name for a YAML value's type, used in type mismatch messages.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        // YAML's own name for the empty value, not a host-language type name
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "dict",
        Value::Tagged(_) => "tagged",
    }
}

/// Render a mapping key as the text shown in diagnostics.
///
/// String keys render as themselves; any other key falls back to its YAML
/// serialization.
#[must_use]
pub fn key_label(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}
