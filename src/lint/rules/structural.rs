//! Structural validation rules for skills.
//!
//! These rules check that the bundle is usable at all: the folder exists, is
//! a directory, and holds a `SKILL.md` file.

use crate::lint::context::{RuleResult, ValidationContext};
use crate::lint::diagnostic::RuleCategory;
use crate::lint::rule::{BoxedRule, ValidationRule};

/// Rule that checks the bundle path exists.
pub struct BundleExistsRule;

impl ValidationRule for BundleExistsRule {
    fn id(&self) -> &'static str {
        "bundle-exists"
    }

    fn description(&self) -> &'static str {
        "The skill folder must exist"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Structure
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        if ctx.bundle_path.exists() {
            Ok(())
        } else {
            Err(self.fail(format!(
                "Skill folder not found: {}",
                ctx.bundle_path.display()
            )))
        }
    }
}

/// Rule that checks the bundle path is a directory.
pub struct BundleIsDirectoryRule;

impl ValidationRule for BundleIsDirectoryRule {
    fn id(&self) -> &'static str {
        "bundle-is-directory"
    }

    fn description(&self) -> &'static str {
        "The skill path must be a directory"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Structure
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        if ctx.bundle_path.is_dir() {
            Ok(())
        } else {
            Err(self.fail(format!(
                "Path is not a directory: {}",
                ctx.bundle_path.display()
            )))
        }
    }
}

/// Rule that checks for a `SKILL.md` file directly inside the bundle.
pub struct ManifestPresentRule;

impl ValidationRule for ManifestPresentRule {
    fn id(&self) -> &'static str {
        "manifest-present"
    }

    fn description(&self) -> &'static str {
        "SKILL.md must exist at the top of the skill folder"
    }

    fn category(&self) -> RuleCategory {
        RuleCategory::Structure
    }

    fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
        if ctx.manifest_path().is_file() {
            Ok(())
        } else {
            Err(self.fail(format!(
                "SKILL.md not found in {}",
                ctx.bundle_path.display()
            )))
        }
    }
}

/// Structural rules in evaluation order.
pub fn structural_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(BundleExistsRule),
        Box::new(BundleIsDirectoryRule),
        Box::new(ManifestPresentRule),
    ]
}
