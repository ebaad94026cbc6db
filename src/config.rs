use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::bundler::Compression;
use crate::error::{Result, SfError};

/// File name of the per-project config, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".skillforge.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scaffold: ScaffoldConfig,
    #[serde(default)]
    pub package: PackageConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load layered config.
    ///
    /// An explicit path (or `SKILLFORGE_CONFIG`) replaces the global and
    /// project files; environment overrides apply last either way.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("SKILLFORGE_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            if let Some(patch) = Self::load_patch(&path)? {
                config.merge_patch(patch);
            }
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;

        Ok(config)
    }

    /// Location of the global config file, if the platform has a config dir.
    #[must_use]
    pub fn global_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("skillforge/config.toml"))
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        match Self::global_path() {
            Some(path) => Self::load_patch(&path),
            None => Ok(None),
        }
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        Self::load_patch(&project_root.join(PROJECT_CONFIG_FILE))
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| SfError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| SfError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.scaffold {
            self.scaffold.merge(patch);
        }
        if let Some(patch) = patch.package {
            self.package.merge(patch);
        }
        if let Some(patch) = patch.output {
            self.output.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    fn apply_overrides_from(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(value) = var("SKILLFORGE_SKILLS_DIR") {
            self.scaffold.skills_dir = PathBuf::from(value);
        }
        if let Some(value) = var("SKILLFORGE_OUTPUT_DIR") {
            self.package.output_dir = Some(PathBuf::from(value));
        }
        if let Some(value) = var("SKILLFORGE_COMPRESSION") {
            self.package.compression = value.parse().map_err(|err| {
                SfError::Config(format!("invalid SKILLFORGE_COMPRESSION value {value}: {err}"))
            })?;
        }
        if let Some(value) = var("SKILLFORGE_OUTPUT_FORMAT") {
            self.output.format = value.parse().map_err(|err| {
                SfError::Config(format!("invalid SKILLFORGE_OUTPUT_FORMAT value {value}: {err}"))
            })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaffoldConfig {
    /// Parent folder for `init` when no `--path` is given
    #[serde(default = "default_skills_dir")]
    pub skills_dir: PathBuf,
    /// Write placeholder files into the resource folders
    #[serde(default = "default_true")]
    pub with_examples: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            skills_dir: default_skills_dir(),
            with_examples: true,
        }
    }
}

impl ScaffoldConfig {
    fn merge(&mut self, patch: ScaffoldPatch) {
        if let Some(value) = patch.skills_dir {
            self.skills_dir = value;
        }
        if let Some(value) = patch.with_examples {
            self.with_examples = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageConfig {
    /// Where archives go when no output dir is given; `None` means cwd
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    #[serde(default)]
    pub compression: Compression,
}

impl PackageConfig {
    fn merge(&mut self, patch: PackagePatch) {
        if let Some(value) = patch.output_dir {
            self.output_dir = Some(value);
        }
        if let Some(value) = patch.compression {
            self.compression = value;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

impl OutputConfig {
    fn merge(&mut self, patch: OutputPatch) {
        if let Some(value) = patch.format {
            self.format = value;
        }
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = SfError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "json" | "robot" => Ok(Self::Json),
            other => Err(SfError::Config(format!(
                "unknown output format '{other}' (expected human or json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub scaffold: Option<ScaffoldPatch>,
    pub package: Option<PackagePatch>,
    pub output: Option<OutputPatch>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ScaffoldPatch {
    pub skills_dir: Option<PathBuf>,
    pub with_examples: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct PackagePatch {
    pub output_dir: Option<PathBuf>,
    pub compression: Option<Compression>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct OutputPatch {
    pub format: Option<OutputFormat>,
}

fn default_skills_dir() -> PathBuf {
    PathBuf::from(".")
}

const fn default_true() -> bool {
    true
}
