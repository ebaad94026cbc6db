//! Zip archive writing for `.skill` files.

use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::error::{Result, SfError};

/// Extension given to packaged skills.
pub const ARCHIVE_EXTENSION: &str = "skill";

/// Compression applied to every archive entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    #[default]
    Deflated,
    Stored,
}

impl Compression {
    const fn method(self) -> CompressionMethod {
        match self {
            Self::Deflated => CompressionMethod::Deflated,
            Self::Stored => CompressionMethod::Stored,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deflated => write!(f, "deflated"),
            Self::Stored => write!(f, "stored"),
        }
    }
}

impl FromStr for Compression {
    type Err = SfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "deflated" | "deflate" => Ok(Self::Deflated),
            "stored" | "store" | "none" => Ok(Self::Stored),
            other => Err(SfError::Config(format!(
                "unknown compression '{other}' (expected deflated or stored)"
            ))),
        }
    }
}

/// A file queued for the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Entry name inside the zip, `/`-separated, prefixed by the bundle folder
    pub name: String,
    /// File on disk
    pub source: PathBuf,
}

/// Collect every regular file under `bundle_dir`, sorted by entry name.
///
/// Entry names are relative to the bundle's parent so the folder name is the
/// top-level prefix. Symlinks are followed and stored as regular files. `skip` is left out; it is the archive being written when
/// the output directory sits inside the bundle.
pub fn collect_entries(bundle_dir: &Path, skip: Option<&Path>) -> Result<Vec<ArchiveEntry>> {
    let base = bundle_dir.parent().unwrap_or(bundle_dir);
    let mut entries = Vec::new();

    for entry in WalkDir::new(bundle_dir).follow_links(true).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if skip.is_some_and(|skip| skip == path) {
            continue;
        }
        let relative = path.strip_prefix(base).unwrap_or(path);
        entries.push(ArchiveEntry {
            name: entry_name(relative),
            source: path.to_path_buf(),
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Write `entries` to a zip at `dest`, replacing any existing file.
///
/// A partially written archive is removed before the error is returned.
pub fn write_archive(dest: &Path, entries: &[ArchiveEntry], compression: Compression) -> Result<()> {
    let result = write_entries(dest, entries, compression);
    if result.is_err() && dest.exists() {
        if let Err(err) = fs::remove_file(dest) {
            warn!(
                target: "skillforge::package",
                path = %dest.display(),
                error = %err,
                "could not remove partial archive"
            );
        }
    }
    result
}

fn write_entries(dest: &Path, entries: &[ArchiveEntry], compression: Compression) -> Result<()> {
    let file = File::create(dest)?;
    let mut writer = zip::ZipWriter::new(file);

    for entry in entries {
        let mut options = SimpleFileOptions::default().compression_method(compression.method());
        if let Some(mode) = unix_mode(&entry.source)? {
            options = options.unix_permissions(mode);
        }
        writer.start_file(entry.name.as_str(), options)?;
        let mut source = File::open(&entry.source)?;
        io::copy(&mut source, &mut writer)?;
    }

    let mut file = writer.finish()?;
    file.flush()?;
    Ok(())
}

fn entry_name(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(unix)]
fn unix_mode(path: &Path) -> Result<Option<u32>> {
    use std::os::unix::fs::PermissionsExt;
    Ok(Some(fs::metadata(path)?.permissions().mode() & 0o777))
}

#[cfg(not(unix))]
fn unix_mode(_path: &Path) -> Result<Option<u32>> {
    Ok(None)
}
