//! Validation rule trait.

use super::context::{RuleResult, ValidationContext};
use super::diagnostic::{Diagnostic, RuleCategory};

/// One step of the validation chain.
///
/// A rule either lets the chain continue (`Ok(())`) or ends it with the
/// diagnostic that becomes the bundle's verdict. Rules may record state on the
/// context for the rules after them.
pub trait ValidationRule: Send + Sync {
    /// Unique identifier for this rule (e.g., "name-gerund")
    fn id(&self) -> &'static str;

    /// Detailed description of what this rule checks
    fn description(&self) -> &'static str;

    /// Category this rule belongs to
    fn category(&self) -> RuleCategory;

    /// Run the check
    fn check(&self, ctx: &mut ValidationContext) -> RuleResult;

    /// Build a failing diagnostic attributed to this rule.
    fn fail(&self, message: String) -> Diagnostic {
        Diagnostic::new(self.id(), self.category(), message)
    }
}

/// A boxed validation rule for dynamic dispatch
pub type BoxedRule = Box<dyn ValidationRule>;

/// Declare a stateless rule whose check only reads the context.
#[macro_export]
macro_rules! impl_rule {
    (
        $struct_name:ident,
        id: $id:expr,
        description: $desc:expr,
        category: $cat:expr,
        check: |$rule:ident, $ctx:ident| $check_body:expr
    ) => {
        pub struct $struct_name;

        impl $crate::lint::rule::ValidationRule for $struct_name {
            fn id(&self) -> &'static str {
                $id
            }

            fn description(&self) -> &'static str {
                $desc
            }

            fn category(&self) -> $crate::lint::diagnostic::RuleCategory {
                $cat
            }

            fn check(
                &self,
                $ctx: &mut $crate::lint::context::ValidationContext,
            ) -> $crate::lint::context::RuleResult {
                let $rule = self;
                $check_body
            }
        }
    };
}

pub use impl_rule;
