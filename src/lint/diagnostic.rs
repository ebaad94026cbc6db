//! Diagnostic types for skill validation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of validation rule
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    /// Bundle layout (folder exists, is a directory, has SKILL.md)
    Structure,
    /// Frontmatter delimiters and YAML syntax
    Parse,
    /// Allowed keys, required keys, value types
    Schema,
    /// Skill name conventions
    Naming,
    /// Description content
    Content,
}

impl fmt::Display for RuleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Structure => write!(f, "structure"),
            Self::Parse => write!(f, "parse"),
            Self::Schema => write!(f, "schema"),
            Self::Naming => write!(f, "naming"),
            Self::Content => write!(f, "content"),
        }
    }
}

/// The single failure reported for a bundle.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule ID that generated this diagnostic
    pub rule_id: String,
    /// Category of the rule
    pub category: RuleCategory,
    /// The diagnostic message, shown to users verbatim
    pub message: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(
        rule_id: impl Into<String>,
        category: RuleCategory,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            category,
            message: message.into(),
        }
    }

    /// Diagnostic for a rule that ran before the state it depends on existed.
    ///
    /// Only reachable when a custom engine registers rules out of order.
    pub fn out_of_order(rule_id: impl Into<String>, missing: &str) -> Self {
        let rule_id = rule_id.into();
        let message = format!("Rule '{rule_id}' ran before {missing} was available");
        Self::new(rule_id, RuleCategory::Structure, message)
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.category, self.rule_id, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new(
            "name-gerund",
            RuleCategory::Naming,
            "Name should use gerund form (verb + -ing) for the first segment",
        );
        assert_eq!(
            diag.to_string(),
            "[naming] name-gerund: Name should use gerund form (verb + -ing) for the first segment"
        );
    }

    #[test]
    fn test_category_display() {
        assert_eq!(format!("{}", RuleCategory::Structure), "structure");
        assert_eq!(format!("{}", RuleCategory::Content), "content");
    }

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&RuleCategory::Naming).unwrap();
        assert_eq!(json, "\"naming\"");
    }
}
