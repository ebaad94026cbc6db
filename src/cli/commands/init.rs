//! skillforge init - Scaffold a new skill bundle

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use console::style;
use serde::Serialize;
use tracing::warn;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::core::validation::quick_validate;
use crate::error::Result;
use crate::scaffold::{ScaffoldOptions, ScaffoldedSkill, init_skill};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Skill name, hyphen-case with a gerund first segment (e.g. processing-pdfs)
    pub name: String,

    /// Folder to create the skill in (defaults to [scaffold].skills_dir)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Only create SKILL.md and empty resource folders
    #[arg(long)]
    pub no_examples: bool,
}

#[derive(Serialize)]
struct InitReport<'a> {
    #[serde(flatten)]
    skill: &'a ScaffoldedSkill,
    valid: bool,
    validation_message: String,
}

pub fn run(ctx: &AppContext, args: &InitArgs) -> Result<ExitCode> {
    let parent = ctx.resolve(
        args.path
            .as_deref()
            .unwrap_or(ctx.config.scaffold.skills_dir.as_path()),
    );
    let options = ScaffoldOptions {
        with_examples: ctx.config.scaffold.with_examples && !args.no_examples,
    };

    let skill = init_skill(&args.name, &parent, options)?;

    // The template itself is valid, so a failure here is about the name.
    let (valid, message) = quick_validate(&skill.path);
    if !valid {
        warn!(target: "skillforge::scaffold", name = %args.name, "{message}");
    }

    if ctx.robot() {
        let report = InitReport {
            skill: &skill,
            valid,
            validation_message: message.clone(),
        };
        let mut response = robot_ok(report);
        if !valid {
            response = response.with_warning(message);
        }
        emit_robot(&response)?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut layout = HumanLayout::new();
    layout.title(&format!("Initialized skill '{}'", args.name));
    layout.kv("Location", &skill.path.display().to_string());
    layout.section("Created");
    for file in &skill.files {
        layout.bullet(file);
    }
    layout.blank();
    if !valid {
        layout.push_line(format!(
            "{} {message}",
            style("Warning:").yellow().bold()
        ));
        layout.blank();
    }
    layout.section("Next steps");
    layout.push_line("1. Edit SKILL.md to complete the TODO items and update the description");
    layout.push_line("2. Customize or delete the example files in scripts/, references/, and assets/");
    layout.push_line(format!(
        "3. Run `skillforge validate {}` when ready",
        skill.path.display()
    ));
    emit_human(layout);

    Ok(ExitCode::SUCCESS)
}
