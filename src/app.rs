use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat};
use crate::config::{Config, PROJECT_CONFIG_FILE};
use crate::error::Result;

pub struct AppContext {
    /// Working directory the command runs against
    pub project_root: PathBuf,
    /// Config file the settings came from, when there is a single one
    pub config_path: Option<PathBuf>,
    pub config: Config,
    pub output_format: OutputFormat,
}

impl AppContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        let config_path = cli
            .config
            .clone()
            .or_else(|| default_config_path(&project_root));
        let output_format = cli.forced_format().unwrap_or(config.output.format);

        Ok(Self {
            project_root,
            config_path,
            config,
            output_format,
        })
    }

    #[must_use]
    pub fn robot(&self) -> bool {
        self.output_format == OutputFormat::Json
    }

    /// Resolve a user-supplied path against the project root.
    #[must_use]
    pub fn resolve(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }
}

fn default_config_path(project_root: &std::path::Path) -> Option<PathBuf> {
    let project = project_root.join(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }
    Config::global_path().filter(|path| path.is_file())
}
