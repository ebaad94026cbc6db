//! Core skill bundle types and logic

pub mod frontmatter;
pub mod manifest;
pub mod validation;

pub use frontmatter::{FrontmatterError, parse_frontmatter};
pub use manifest::{MANIFEST_FILE, Manifest};
pub use validation::{quick_validate, validate_skill};
