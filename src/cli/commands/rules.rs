//! skillforge rules - List the validation chain

use std::process::ExitCode;

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_robot, robot_ok};
use crate::error::Result;
use crate::lint::ValidationEngine;

#[derive(Args, Debug)]
pub struct RulesArgs {}

pub fn run(ctx: &AppContext, _args: &RulesArgs) -> Result<ExitCode> {
    let rules = ValidationEngine::new().list_rules();

    if ctx.robot() {
        emit_robot(&robot_ok(&rules))?;
        return Ok(ExitCode::SUCCESS);
    }

    let mut layout = HumanLayout::new();
    layout.title("Validation rules (evaluated in order, first failure wins)");
    for (idx, rule) in rules.iter().enumerate() {
        layout.push_line(format!(
            "{:>2}. {:<28} {:<10} {}",
            idx + 1,
            rule.id,
            rule.category.to_string(),
            rule.description
        ));
    }
    emit_human(layout);

    Ok(ExitCode::SUCCESS)
}
