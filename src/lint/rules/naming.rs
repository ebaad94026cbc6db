//! Naming rules for the skill `name`.
//!
//! Names are hyphen-case, at most 64 characters, open with a gerund
//! (`creating-`, `testing-`, ...), avoid reserved words and match the bundle
//! directory exactly.

use crate::core::manifest::{GERUND_SUFFIX, MAX_NAME_LENGTH, RESERVED_NAMES, RESERVED_WORDS};
use crate::impl_rule;
use crate::lint::diagnostic::RuleCategory;
use crate::lint::rule::{BoxedRule, ValidationRule};

impl_rule!(
    HyphenCaseRule,
    id: "name-hyphen-case",
    description: "name may only contain lowercase letters, digits and hyphens",
    category: RuleCategory::Naming,
    check: |rule, ctx| {
        let name = ctx.name(rule.id())?;
        let hyphen_case = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if hyphen_case {
            Ok(())
        } else {
            Err(rule.fail(format!(
                "Name '{name}' should be hyphen-case (lowercase letters, digits, and hyphens only)"
            )))
        }
    }
);

impl_rule!(
    HyphenPlacementRule,
    id: "name-hyphen-placement",
    description: "name may not start or end with a hyphen or contain '--'",
    category: RuleCategory::Naming,
    check: |rule, ctx| {
        let name = ctx.name(rule.id())?;
        if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
            Err(rule.fail(format!(
                "Name '{name}' cannot start/end with hyphen or contain consecutive hyphens"
            )))
        } else {
            Ok(())
        }
    }
);

impl_rule!(
    NameLengthRule,
    id: "name-length",
    description: "name must be at most 64 characters",
    category: RuleCategory::Naming,
    check: |rule, ctx| {
        let length = ctx.name(rule.id())?.chars().count();
        if length > MAX_NAME_LENGTH {
            Err(rule.fail(format!(
                "Name is too long ({length} characters). Maximum is {MAX_NAME_LENGTH} characters."
            )))
        } else {
            Ok(())
        }
    }
);

impl_rule!(
    NameSegmentsRule,
    id: "name-segments",
    description: "name must have at least one hyphen-separated segment",
    category: RuleCategory::Naming,
    check: |rule, ctx| {
        if ctx.name_segments(rule.id())?.is_empty() {
            Err(rule.fail("Name must include at least one segment".to_string()))
        } else {
            Ok(())
        }
    }
);

impl_rule!(
    GerundRule,
    id: "name-gerund",
    description: "the first name segment must be a gerund (end in -ing)",
    category: RuleCategory::Naming,
    check: |rule, ctx| {
        let segments = ctx.name_segments(rule.id())?;
        match segments.first() {
            Some(first) if first.ends_with(GERUND_SUFFIX) => Ok(()),
            _ => Err(rule.fail(
                "Name should use gerund form (verb + -ing) for the first segment".to_string(),
            )),
        }
    }
);

impl_rule!(
    ReservedNameRule,
    id: "name-reserved",
    description: "name may not be a reserved name",
    category: RuleCategory::Naming,
    check: |rule, ctx| {
        let name = ctx.name(rule.id())?;
        if RESERVED_NAMES.contains(&name) {
            Err(rule.fail(format!("Name '{name}' is reserved and cannot be used")))
        } else {
            Ok(())
        }
    }
);

impl_rule!(
    ReservedWordsRule,
    id: "name-reserved-words",
    description: "no name segment may be a reserved word",
    category: RuleCategory::Naming,
    check: |rule, ctx| {
        let segments = ctx.name_segments(rule.id())?;
        if segments.iter().any(|segment| RESERVED_WORDS.contains(segment)) {
            Err(rule.fail(format!(
                "Name cannot contain reserved words: {}",
                RESERVED_WORDS.join(", ")
            )))
        } else {
            Ok(())
        }
    }
);

impl_rule!(
    DirectoryMatchRule,
    id: "name-matches-directory",
    description: "name must equal the skill folder's name",
    category: RuleCategory::Naming,
    check: |rule, ctx| {
        let name = ctx.name(rule.id())?;
        let directory = ctx.directory_name();
        if name == directory {
            Ok(())
        } else {
            Err(rule.fail(format!(
                "Name '{name}' must match directory name '{directory}' exactly"
            )))
        }
    }
);

/// Naming rules in evaluation order.
pub fn naming_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(HyphenCaseRule),
        Box::new(HyphenPlacementRule),
        Box::new(NameLengthRule),
        Box::new(NameSegmentsRule),
        Box::new(GerundRule),
        Box::new(ReservedNameRule),
        Box::new(ReservedWordsRule),
        Box::new(DirectoryMatchRule),
    ]
}
