//! Built-in validation rules.
//!
//! Rules are grouped by category, but the chain interleaves them: the name
//! type check runs with the schema rules before any naming rule, while the
//! description type check runs after every naming rule.
//!
//! - **Structural rules** (`structural`): folder exists, is a directory, has `SKILL.md`
//! - **Parse rules** (`parse`): frontmatter delimiters, YAML syntax, mapping shape
//! - **Schema rules** (`schema`): allowed keys, required keys, value types
//! - **Naming rules** (`naming`): hyphen-case, length, gerund, reserved words, directory match
//! - **Content rules** (`content`): description characters and length
//!
//! # Usage
//!
//! ```
//! use skillforge::lint::rules::default_rules;
//! use skillforge::lint::ValidationEngine;
//!
//! let mut engine = ValidationEngine::empty();
//! for rule in default_rules() {
//!     engine.register(rule);
//! }
//! assert_eq!(engine.rules().len(), 21);
//! ```

pub mod content;
pub mod naming;
pub mod parse;
pub mod schema;
pub mod structural;

use crate::lint::rule::BoxedRule;

pub use content::{AngleBracketsRule, DescriptionLengthRule};
pub use naming::{
    DirectoryMatchRule, GerundRule, HyphenCaseRule, HyphenPlacementRule, NameLengthRule,
    NameSegmentsRule, ReservedNameRule, ReservedWordsRule,
};
pub use parse::{FrontmatterMappingRule, FrontmatterSyntaxRule};
pub use schema::{
    AllowedKeysRule, DescriptionTypeRule, NameNotBlankRule, NameTypeRule, RequiredDescriptionRule,
    RequiredNameRule,
};
pub use structural::{BundleExistsRule, BundleIsDirectoryRule, ManifestPresentRule};

/// Returns the full rule chain in evaluation order.
pub fn default_rules() -> Vec<BoxedRule> {
    let mut rules = structural::structural_rules();
    rules.extend(parse::parse_rules());
    rules.extend(schema_rules_before_naming());
    rules.extend(naming::naming_rules());
    rules.push(Box::new(DescriptionTypeRule));
    rules.extend(content::content_rules());
    rules
}

fn schema_rules_before_naming() -> Vec<BoxedRule> {
    vec![
        Box::new(AllowedKeysRule),
        Box::new(RequiredNameRule),
        Box::new(RequiredDescriptionRule),
        Box::new(NameTypeRule),
        Box::new(NameNotBlankRule),
    ]
}
