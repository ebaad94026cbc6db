//! Frontmatter parsing rules.

use serde_yaml::Value;

use crate::core::frontmatter::{FrontmatterError, parse_frontmatter_value};
use crate::lint::context::{RuleResult, ValidationContext};
use crate::lint::diagnostic::RuleCategory;
use crate::lint::rule::{BoxedRule, ValidationRule};

/// Rule that reads `SKILL.md` and parses its frontmatter block.
pub struct FrontmatterSyntaxRule;

impl ValidationRule for FrontmatterSyntaxRule {
    fn id(&self) -> &'static str {
        "frontmatter-syntax"
    }

    fn description(&self) -> &'static str {
        "SKILL.md must open with a YAML frontmatter block between --- lines"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Parse
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        let manifest_path = ctx.manifest_path();
        let content = std::fs::read_to_string(&manifest_path).map_err(|err| {
            self.fail(format!("Failed to read {}: {err}", manifest_path.display()))
        })?;

        let parsed = parse_frontmatter_value(&content).map_err(|err| self.fail(err.to_string()))?;
        ctx.set_parsed(parsed);
        Ok(())
    }
}

/// Rule that requires the frontmatter to be a mapping.
pub struct FrontmatterMappingRule;

impl ValidationRule for FrontmatterMappingRule {
    fn id(&self) -> &'static str {
        "frontmatter-mapping"
    }

    fn description(&self) -> &'static str {
        "Frontmatter must be a YAML dictionary"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Parse
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        match ctx.parsed(self.id())? {
            Value::Mapping(_) => Ok(()),
            _ => Err(self.fail(FrontmatterError::NotAMapping.to_string())),
        }
    }
}

/// Parse rules in evaluation order.
pub fn parse_rules() -> Vec<BoxedRule> {
    vec![Box::new(FrontmatterSyntaxRule), Box::new(FrontmatterMappingRule)]
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn ctx_with_manifest(content: &str) -> (TempDir, ValidationContext) {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("SKILL.md"), content).unwrap();
        let ctx = ValidationContext::new(temp.path());
        (temp, ctx)
    }

    #[test]
    fn test_no_frontmatter() {
        let (_temp, mut ctx) = ctx_with_manifest("# Just a title");
        let diag = FrontmatterSyntaxRule.check(&mut ctx).unwrap_err();
        assert_eq!(diag.message, "No YAML frontmatter found");
        assert_eq!(diag.category, RuleCategory::Parse);
    }

    #[test]
    fn test_unterminated_frontmatter() {
        let (_temp, mut ctx) = ctx_with_manifest("---\nname: testing-skill\n");
        let diag = FrontmatterSyntaxRule.check(&mut ctx).unwrap_err();
        assert_eq!(diag.message, "Invalid frontmatter format");
    }

    #[test]
    fn test_invalid_yaml() {
        let (_temp, mut ctx) = ctx_with_manifest("---\nkey: : value\n---");
        let diag = FrontmatterSyntaxRule.check(&mut ctx).unwrap_err();
        assert!(diag.message.contains("Invalid YAML"));
    }

    #[test]
    fn test_scalar_frontmatter_fails_mapping_rule() {
        let (_temp, mut ctx) = ctx_with_manifest("---\nhello\n---");
        FrontmatterSyntaxRule.check(&mut ctx).unwrap();
        let diag = FrontmatterMappingRule.check(&mut ctx).unwrap_err();
        assert_eq!(diag.message, "Frontmatter must be a YAML dictionary");
    }

    #[test]
    fn test_mapping_passes_both() {
        let (_temp, mut ctx) = ctx_with_manifest("---\nname: testing-skill\n---\n");
        FrontmatterSyntaxRule.check(&mut ctx).unwrap();
        FrontmatterMappingRule.check(&mut ctx).unwrap();
        assert_eq!(ctx.frontmatter("t").unwrap().len(), 1);
    }

    #[test]
    fn test_non_utf8_manifest_is_a_diagnostic() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("SKILL.md"), [0xff, 0xfe, 0x00]).unwrap();
        let mut ctx = ValidationContext::new(temp.path());
        let diag = FrontmatterSyntaxRule.check(&mut ctx).unwrap_err();
        assert!(diag.message.starts_with("Failed to read "));
    }
}
