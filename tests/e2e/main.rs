//! E2E test suite entry point.

mod fixture;
mod package_workflow;
mod scaffold_workflow;
