//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use std::process::ExitCode;

use clap::Subcommand;

pub mod completions;
pub mod init;
pub mod package;
pub mod rules;
pub mod validate;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scaffold a new skill bundle from the built-in template
    Init(init::InitArgs),

    /// Validate a skill bundle
    Validate(validate::ValidateArgs),

    /// Validate a skill bundle and package it as a .skill archive
    Package(package::PackageArgs),

    /// List the validation rules in evaluation order
    Rules(rules::RulesArgs),

    /// Print shell completions
    Completions(completions::CompletionsArgs),
}

/// Dispatch a command to its handler
///
/// `Ok` carries the exit status: a command can finish cleanly and still
/// report failure, as `validate` does for an invalid bundle.
pub fn run(ctx: &AppContext, command: &Commands) -> Result<ExitCode> {
    match command {
        Commands::Init(args) => init::run(ctx, args),
        Commands::Validate(args) => validate::run(ctx, args),
        Commands::Package(args) => package::run(ctx, args),
        Commands::Rules(args) => rules::run(ctx, args),
        Commands::Completions(args) => completions::run(ctx, args),
    }
}
