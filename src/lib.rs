//! skillforge - scaffold, validate and package agent skill bundles.
//!
//! A skill bundle is a folder holding a `SKILL.md` manifest (YAML frontmatter
//! plus Markdown body) and optional `scripts/`, `references/` and `assets/`
//! folders. This crate provides:
//!
//! - [`scaffold`]: create a new bundle from the built-in template
//! - [`lint`]: the ordered validation rule chain and its engine
//! - [`bundler`]: package a valid bundle into a `<name>.skill` zip archive
//!
//! ```no_run
//! use std::path::Path;
//!
//! let (valid, message) = skillforge::core::quick_validate(Path::new("skills/processing-pdfs"));
//! println!("{valid}: {message}");
//! ```

pub mod app;
pub mod bundler;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod lint;
pub mod scaffold;
pub mod test_utils;
pub mod utils;

pub use error::{Result, SfError};
