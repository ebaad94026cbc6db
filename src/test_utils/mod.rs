//! Shared test utilities for skillforge.

pub mod fixtures;

pub use fixtures::{BundleFixture, manifest};

use crate::core::validation::quick_validate;

/// One row of a table-driven validation test.
#[derive(Debug, Clone)]
pub struct ValidationCase {
    pub name: &'static str,
    /// Bundle folder name
    pub dir: &'static str,
    /// Frontmatter lines, without delimiters
    pub frontmatter: &'static str,
    /// `None` expects a valid bundle; `Some` is a substring of the failure message
    pub expected_error: Option<&'static str>,
}

impl ValidationCase {
    #[must_use]
    pub const fn valid(name: &'static str, dir: &'static str, frontmatter: &'static str) -> Self {
        Self {
            name,
            dir,
            frontmatter,
            expected_error: None,
        }
    }

    #[must_use]
    pub const fn invalid(
        name: &'static str,
        dir: &'static str,
        frontmatter: &'static str,
        expected_error: &'static str,
    ) -> Self {
        Self {
            name,
            dir,
            frontmatter,
            expected_error: Some(expected_error),
        }
    }
}

/// Run validation cases, each against a fresh bundle, with detailed logging.
pub fn run_validation_cases(cases: &[ValidationCase]) -> Result<(), String> {
    for case in cases {
        let start = std::time::Instant::now();
        println!("[TEST] Running: {}", case.name);

        let fixture = BundleFixture::new(case.dir);
        fixture.write_frontmatter(case.frontmatter);
        let (valid, message) = quick_validate(&fixture.bundle_path);
        let elapsed = start.elapsed();

        println!("[TEST] Expected: {:?}", case.expected_error);
        println!("[TEST] Actual: ({valid}, {message:?})");
        println!("[TEST] Timing: {elapsed:?}");

        match case.expected_error {
            None if !valid => {
                return Err(format!(
                    "Test '{}' expected a valid bundle, got: {message}",
                    case.name
                ));
            }
            Some(expected) if valid || !message.contains(expected) => {
                return Err(format!(
                    "Test '{}' failed: expected error containing {expected:?}, got ({valid}, {message:?})",
                    case.name
                ));
            }
            _ => {}
        }
        println!("[TEST] PASSED: {} ({:?})\n", case.name, elapsed);
    }
    Ok(())
}
