//! Description content rules.
//!
//! A blank description passes both checks trivially; the key being present is
//! all the schema asks for.

use crate::core::manifest::MAX_DESCRIPTION_LENGTH;
use crate::impl_rule;
use crate::lint::diagnostic::RuleCategory;
use crate::lint::rule::{BoxedRule, ValidationRule};

impl_rule!(
    AngleBracketsRule,
    id: "description-angle-brackets",
    description: "description may not contain < or >",
    category: RuleCategory::Content,
    check: |rule, ctx| {
        let description = ctx.description(rule.id())?;
        if description.contains(['<', '>']) {
            Err(rule.fail("Description cannot contain angle brackets (< or >)".to_string()))
        } else {
            Ok(())
        }
    }
);

impl_rule!(
    DescriptionLengthRule,
    id: "description-length",
    description: "description must be at most 1024 characters",
    category: RuleCategory::Content,
    check: |rule, ctx| {
        let length = ctx.description(rule.id())?.chars().count();
        if length > MAX_DESCRIPTION_LENGTH {
            Err(rule.fail(format!(
                "Description is too long ({length} characters). Maximum is {MAX_DESCRIPTION_LENGTH} characters."
            )))
        } else {
            Ok(())
        }
    }
);

/// Content rules in evaluation order.
pub fn content_rules() -> Vec<BoxedRule> {
    vec![Box::new(AngleBracketsRule), Box::new(DescriptionLengthRule)]
}
