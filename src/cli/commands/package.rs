//! skillforge package - Validate a bundle and write `<name>.skill`

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use serde::Serialize;

use crate::app::AppContext;
use crate::bundler::{PackagedSkill, package_skill};
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::utils::format::format_size;

#[derive(Args, Debug)]
pub struct PackageArgs {
    /// Path to the skill folder
    pub path: PathBuf,

    /// Where to write the archive (defaults to [package].output_dir, then cwd)
    pub output_dir: Option<PathBuf>,
}

#[derive(Serialize)]
struct PackageReport<'a> {
    #[serde(flatten)]
    packaged: &'a PackagedSkill,
    size: u64,
}

pub fn run(ctx: &AppContext, args: &PackageArgs) -> Result<ExitCode> {
    let bundle = ctx.resolve(&args.path);
    let output_dir = args
        .output_dir
        .as_deref()
        .or(ctx.config.package.output_dir.as_deref())
        .map_or_else(|| ctx.project_root.clone(), |dir| ctx.resolve(dir));

    let packaged = package_skill(&bundle, &output_dir, ctx.config.package.compression)?;
    let size = std::fs::metadata(&packaged.path)?.len();

    if ctx.robot() {
        emit_robot(&robot_ok(PackageReport {
            packaged: &packaged,
            size,
        }))?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("Packaged skill '{}'", packaged.name));
    layout.kv("Archive", &packaged.path.display().to_string());
    layout.kv("Entries", &packaged.entries.to_string());
    layout.kv("Size", &format_size(size));
    emit_human(layout);

    Ok(ExitCode::SUCCESS)
}
