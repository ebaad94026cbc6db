//! New bundle scaffolding.
//!
//! [`init_skill`] lays out `<parent>/<name>/` with a template `SKILL.md` and
//! the `scripts/`, `references/` and `assets/` resource folders. The name is
//! not validated here; callers run the validator afterwards if they care.

pub mod templates;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::manifest::MANIFEST_FILE;
use crate::error::{Result, SfError};
use crate::utils::fs::resolve_path;

use templates::{EXAMPLE_ASSET, EXAMPLE_REFERENCE, EXAMPLE_SCRIPT, SKILL_TEMPLATE, render};

/// Resource folders created in every bundle.
pub const RESOURCE_DIRS: [&str; 3] = ["scripts", "references", "assets"];

/// Options for [`init_skill`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaffoldOptions {
    /// Write placeholder files into the resource folders
    pub with_examples: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self {
            with_examples: true,
        }
    }
}

/// A freshly scaffolded bundle
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ScaffoldedSkill {
    /// Bundle directory
    pub path: PathBuf,
    /// Files written, relative to the bundle
    pub files: Vec<String>,
}

/// Create a new bundle named `skill_name` under `parent`.
///
/// Fails with [`SfError::AlreadyExists`] without touching anything if the
/// bundle directory is already there.
pub fn init_skill(
    skill_name: &str,
    parent: &Path,
    options: ScaffoldOptions,
) -> Result<ScaffoldedSkill> {
    let skill_dir = resolve_path(parent).join(skill_name);
    if skill_dir.exists() {
        return Err(SfError::AlreadyExists(skill_dir));
    }

    fs::create_dir_all(&skill_dir).map_err(step("creating directory"))?;
    debug!(target: "skillforge::scaffold", path = %skill_dir.display(), "created skill directory");

    let skill_title = title_case_skill_name(skill_name);
    let mut files = Vec::new();

    fs::write(
        skill_dir.join(MANIFEST_FILE),
        render(SKILL_TEMPLATE, skill_name, &skill_title),
    )
    .map_err(step("creating SKILL.md"))?;
    files.push(MANIFEST_FILE.to_string());

    write_resources(&skill_dir, skill_name, &skill_title, options, &mut files)
        .map_err(step("creating resource directories"))?;

    info!(
        target: "skillforge::scaffold",
        name = skill_name,
        path = %skill_dir.display(),
        files = files.len(),
        "skill initialized"
    );

    Ok(ScaffoldedSkill {
        path: skill_dir,
        files,
    })
}

/// `my-skill` becomes `My Skill`.
#[must_use]
pub fn title_case_skill_name(skill_name: &str) -> String {
    skill_name
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn write_resources(
    skill_dir: &Path,
    skill_name: &str,
    skill_title: &str,
    options: ScaffoldOptions,
    files: &mut Vec<String>,
) -> std::io::Result<()> {
    for dir in RESOURCE_DIRS {
        fs::create_dir_all(skill_dir.join(dir))?;
    }
    if !options.with_examples {
        return Ok(());
    }

    let examples = [
        ("scripts/example.py", render(EXAMPLE_SCRIPT, skill_name, skill_title)),
        (
            "references/api_reference.md",
            render(EXAMPLE_REFERENCE, skill_name, skill_title),
        ),
        ("assets/example_asset.txt", EXAMPLE_ASSET.to_string()),
    ];
    for (relative, content) in examples {
        fs::write(skill_dir.join(relative), content)?;
        debug!(target: "skillforge::scaffold", file = relative, "created");
        files.push(relative.to_string());
    }

    make_executable(&skill_dir.join("scripts/example.py"))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

fn step(step: &'static str) -> impl FnOnce(std::io::Error) -> SfError {
    move |source| SfError::Scaffold { step, source }
}
