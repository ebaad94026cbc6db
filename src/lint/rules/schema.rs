//! Schema rules: which keys may appear, which must, and what type they hold.

use std::collections::BTreeSet;

use crate::core::frontmatter::{key_label, type_name};
use crate::core::manifest::{ALLOWED_KEYS, allowed_keys_label};
use crate::lint::context::{RuleResult, ValidationContext};
use crate::lint::diagnostic::RuleCategory;
use crate::lint::rule::ValidationRule;

const MISSING_NAME: &str = "Missing 'name' in frontmatter";

/// Rule that rejects keys outside the allowed set.
pub struct AllowedKeysRule;

impl ValidationRule for AllowedKeysRule {
    fn id(&self) -> &'static str {
        "allowed-keys"
    }

    fn description(&self) -> &'static str {
        "Frontmatter may only contain name, description, license, allowed-tools and metadata"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Schema
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        let unexpected: BTreeSet<String> = ctx
            .frontmatter(self.id())?
            .keys()
            .map(key_label)
            .filter(|key| !ALLOWED_KEYS.contains(&key.as_str()))
            .collect();

        if unexpected.is_empty() {
            return Ok(());
        }

        let unexpected: Vec<String> = unexpected.into_iter().collect();
        Err(self.fail(format!(
            "Unexpected key(s) in SKILL.md frontmatter: {}. Allowed properties are: {}",
            unexpected.join(", "),
            allowed_keys_label()
        )))
    }
}

/// Rule that requires a `name` key.
pub struct RequiredNameRule;

impl ValidationRule for RequiredNameRule {
    fn id(&self) -> &'static str {
        "required-name"
    }

    fn description(&self) -> &'static str {
        "Frontmatter must contain a name"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Schema
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        if ctx.frontmatter(self.id())?.contains_key("name") {
            Ok(())
        } else {
            Err(self.fail(MISSING_NAME.to_string()))
        }
    }
}

/// Rule that requires a `description` key.
pub struct RequiredDescriptionRule;

impl ValidationRule for RequiredDescriptionRule {
    fn id(&self) -> &'static str {
        "required-description"
    }

    fn description(&self) -> &'static str {
        "Frontmatter must contain a description"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Schema
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        if ctx.frontmatter(self.id())?.contains_key("description") {
            Ok(())
        } else {
            Err(self.fail("Missing 'description' in frontmatter".to_string()))
        }
    }
}

/// Rule that requires `name` to be a string; records the trimmed value.
pub struct NameTypeRule;

impl ValidationRule for NameTypeRule {
    fn id(&self) -> &'static str {
        "name-type"
    }

    fn description(&self) -> &'static str {
        "name must be a string"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Schema
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        let name = string_field(ctx, self, "name", "Name")?;
        ctx.set_name(name);
        Ok(())
    }
}

/// Rule that rejects a name that is empty once trimmed.
pub struct NameNotBlankRule;

impl ValidationRule for NameNotBlankRule {
    fn id(&self) -> &'static str {
        "name-not-blank"
    }

    fn description(&self) -> &'static str {
        "name must not be blank"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Schema
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        if ctx.name(self.id())?.is_empty() {
            Err(self.fail(MISSING_NAME.to_string()))
        } else {
            Ok(())
        }
    }
}

/// Rule that requires `description` to be a string; records the trimmed value.
pub struct DescriptionTypeRule;

impl ValidationRule for DescriptionTypeRule {
    fn id(&self) -> &'static str {
        "description-type"
    }

    fn description(&self) -> &'static str {
        "description must be a string"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Schema
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        let description = string_field(ctx, self, "description", "Description")?;
        ctx.set_description(description);
        Ok(())
    }
}

fn string_field(
    ctx: &ValidationContext,
    rule: &dyn ValidationRule,
    key: &str,
    label: &str,
) -> RuleResult<String> {
    let value = ctx
        .frontmatter(rule.id())?
        .get(key)
        .ok_or_else(|| rule.fail(format!("Missing '{key}' in frontmatter")))?;

    value.as_str().map(|s| s.trim().to_string()).ok_or_else(|| {
        rule.fail(format!(
            "{label} must be a string, got {}",
            type_name(value)
        ))
    })
}
