//! Skill bundle validation framework.
//!
//! Validation is an ordered chain of rules. Each rule either lets the chain
//! continue or ends it with the one diagnostic that becomes the verdict:
//!
//! - `ValidationRule` trait for implementing rules
//! - `ValidationContext` for the state rules hand to one another
//! - `ValidationEngine` for running the chain against a bundle folder
//! - `Diagnostic` for the failing rule's report
//!
//! # Example
//!
//! ```
//! use skillforge::lint::{RuleCategory, RuleResult, ValidationContext, ValidationEngine, ValidationRule};
//!
//! struct NoReadme;
//!
//! impl ValidationRule for NoReadme {
//!     fn id(&self) -> &'static str { "no-readme" }
//!     fn description(&self) -> &'static str { "Bundles carry docs in SKILL.md only" }
//!     fn category(&self) -> RuleCategory { RuleCategory::Structure }
//!     fn check(&self, ctx: &mut ValidationContext) -> RuleResult {
//!         if ctx.bundle_path.join("README.md").exists() {
//!             return Err(self.fail("README.md is not allowed".to_string()));
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let engine = ValidationEngine::new().with_rule(Box::new(NoReadme));
//! let result = engine.validate(std::path::Path::new("does-not-exist"));
//! assert!(!result.is_valid());
//! ```

pub mod context;
pub mod diagnostic;
pub mod engine;
pub mod rule;
pub mod rules;

// Re-export main types for convenience
pub use context::{RuleResult, ValidationContext};
pub use diagnostic::{Diagnostic, RuleCategory};
pub use engine::{RuleInfo, VALID_MESSAGE, ValidationEngine, ValidationResult};
pub use rule::{BoxedRule, ValidationRule};

pub use rules::default_rules;
