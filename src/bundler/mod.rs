//! Skill packager: validated bundles become `.skill` zip archives

pub mod archive;
pub mod package;

pub use archive::{ARCHIVE_EXTENSION, ArchiveEntry, Compression};
pub use package::{PackagedSkill, package_skill};
