//! Validation engine for running the rule chain against a bundle.

use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::core::manifest::Manifest;

use super::context::ValidationContext;
use super::diagnostic::{Diagnostic, RuleCategory};
use super::rule::BoxedRule;
use super::rules::default_rules;

/// Message reported for a bundle that passes every rule.
pub const VALID_MESSAGE: &str = "Skill is valid!";

/// Verdict for one bundle.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult {
    /// Every rule passed
    Valid {
        /// The manifest as read from the frontmatter
        manifest: Manifest,
    },
    /// The first rule that failed
    Invalid(Diagnostic),
}

impl ValidationResult {
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    /// Human-readable verdict: [`VALID_MESSAGE`] or the failing rule's message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Valid { .. } => VALID_MESSAGE,
            Self::Invalid(diagnostic) => &diagnostic.message,
        }
    }

    #[must_use]
    pub const fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid(diagnostic) => Some(diagnostic),
        }
    }

    #[must_use]
    pub const fn manifest(&self) -> Option<&Manifest> {
        match self {
            Self::Valid { manifest } => Some(manifest),
            Self::Invalid(_) => None,
        }
    }
}

/// The validation engine that manages and runs rules
pub struct ValidationEngine {
    rules: Vec<BoxedRule>,
}

impl ValidationEngine {
    /// Engine with the built-in rule chain
    #[must_use]
    pub fn new() -> Self {
        Self {
            rules: default_rules(),
        }
    }

    /// Engine with no rules registered
    #[must_use]
    pub const fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a validation rule at the end of the chain
    pub fn register(&mut self, rule: BoxedRule) {
        self.rules.push(rule);
    }

    /// Register a validation rule (builder pattern)
    #[must_use]
    pub fn with_rule(mut self, rule: BoxedRule) -> Self {
        self.register(rule);
        self
    }

    /// Get registered rules
    #[must_use]
    pub fn rules(&self) -> &[BoxedRule] {
        &self.rules
    }

    /// Validate the bundle at `path`, stopping at the first failing rule.
    #[must_use]
    pub fn validate(&self, path: &Path) -> ValidationResult {
        let mut ctx = ValidationContext::new(path);
        debug!(
            target: "skillforge::validate",
            path = %ctx.bundle_path.display(),
            rules = self.rules.len(),
            "validating bundle"
        );

        for rule in &self.rules {
            if let Err(diagnostic) = rule.check(&mut ctx) {
                debug!(
                    target: "skillforge::validate",
                    rule = rule.id(),
                    category = %rule.category(),
                    message = %diagnostic.message,
                    "rule failed"
                );
                return ValidationResult::Invalid(diagnostic);
            }
            debug!(target: "skillforge::validate", rule = rule.id(), "rule passed");
        }

        let frontmatter = ctx.into_frontmatter();
        match frontmatter.as_ref().and_then(Manifest::from_frontmatter) {
            Some(manifest) => ValidationResult::Valid { manifest },
            None => ValidationResult::Invalid(Diagnostic::new(
                "engine",
                RuleCategory::Schema,
                "Rule chain finished without a name and description",
            )),
        }
    }

    /// List all registered rules
    #[must_use]
    pub fn list_rules(&self) -> Vec<RuleInfo> {
        self.rules
            .iter()
            .map(|r| RuleInfo {
                id: r.id().to_string(),
                description: r.description().to_string(),
                category: r.category(),
            })
            .collect()
    }
}

impl Default for ValidationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Information about a registered rule
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    /// Rule ID
    pub id: String,
    /// Rule description
    pub description: String,
    /// Rule category
    pub category: RuleCategory,
}
