//! skillforge validate - Check a skill bundle against the rule chain

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Args;
use console::style;
use serde::Serialize;

use crate::app::AppContext;
use crate::cli::output::emit_json;
use crate::core::validation::validate_skill;
use crate::error::Result;
use crate::lint::{RuleCategory, ValidationResult};

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Path to the skill folder
    pub path: PathBuf,
}

pub fn run(ctx: &AppContext, args: &ValidateArgs) -> Result<ExitCode> {
    let path = ctx.resolve(&args.path);
    let result = validate_skill(&path);

    if ctx.robot() {
        emit_json(&build_report(&path, &result))?;
    } else if result.is_valid() {
        println!("{} {}", style("✓").green().bold(), result.message());
    } else {
        println!(
            "{} Validation failed: {}",
            style("✗").red().bold(),
            result.message()
        );
    }

    Ok(if result.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

#[derive(Debug, Serialize)]
pub struct ValidateReport {
    pub path: String,
    pub valid: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<RuleCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

fn build_report(path: &std::path::Path, result: &ValidationResult) -> ValidateReport {
    let diagnostic = result.diagnostic();
    ValidateReport {
        path: path.display().to_string(),
        valid: result.is_valid(),
        message: result.message().to_string(),
        rule: diagnostic.map(|d| d.rule_id.clone()),
        category: diagnostic.map(|d| d.category),
        name: result.manifest().map(|m| m.name.clone()),
    }
}
