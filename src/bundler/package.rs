//! Bundle packaging

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::core::validation::validate_skill;
use crate::error::{Result, SfError};
use crate::lint::ValidationResult;
use crate::utils::fs::{ensure_dir, resolve_path};

use super::archive::{ARCHIVE_EXTENSION, Compression, collect_entries, write_archive};

/// A packaged skill archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackagedSkill {
    /// Where the `.skill` file was written
    pub path: PathBuf,
    /// Skill name, taken from the bundle folder
    pub name: String,
    /// Number of files stored in the archive
    pub entries: usize,
}

/// Validate the bundle at `bundle` and archive it into `output_dir`.
///
/// The archive is `<output_dir>/<name>.skill`; an existing file there is
/// overwritten. Nothing is written when the bundle is missing or invalid.
pub fn package_skill(
    bundle: &Path,
    output_dir: &Path,
    compression: Compression,
) -> Result<PackagedSkill> {
    let bundle = resolve_path(bundle);
    if !bundle.exists() {
        return Err(SfError::NotFound(bundle));
    }

    if let ValidationResult::Invalid(diagnostic) = validate_skill(&bundle) {
        debug!(
            target: "skillforge::package",
            rule = %diagnostic.rule_id,
            "bundle failed validation; nothing written"
        );
        return Err(SfError::ValidationFailed(diagnostic.message));
    }

    let name = bundle
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| SfError::NotFound(bundle.clone()))?;

    ensure_dir(output_dir)?;
    let dest = resolve_path(output_dir).join(format!("{name}.{ARCHIVE_EXTENSION}"));
    if dest.exists() {
        debug!(target: "skillforge::package", path = %dest.display(), "overwriting existing archive");
    }

    let entries = collect_entries(&bundle, Some(&dest))?;
    for entry in &entries {
        debug!(target: "skillforge::package", entry = %entry.name, "adding");
    }
    write_archive(&dest, &entries, compression)?;

    info!(
        target: "skillforge::package",
        path = %dest.display(),
        entries = entries.len(),
        %compression,
        "packaged skill"
    );

    Ok(PackagedSkill {
        path: dest,
        name,
        entries: entries.len(),
    })
}
