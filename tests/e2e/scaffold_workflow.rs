//! E2E Scenario: Scaffold Workflow
//!
//! init → validate → package on a fresh bundle, and what happens when the
//! folder and the manifest name drift apart.

use std::fs;

use super::fixture::E2EFixture;
use skillforge::error::Result;

#[test]
fn test_init_validate_package() -> Result<()> {
    let mut fixture = E2EFixture::new("init_validate_package");

    fixture.log_step("Scaffold a skill");
    let output = fixture.run(&["init", "analyzing-spreadsheets", "--path", "skills"]);
    fixture.assert_success(&output, "init");
    let files = fixture.checkpoint("post_init");
    assert_eq!(
        files,
        vec![
            "skills/analyzing-spreadsheets/SKILL.md",
            "skills/analyzing-spreadsheets/assets/example_asset.txt",
            "skills/analyzing-spreadsheets/references/api_reference.md",
            "skills/analyzing-spreadsheets/scripts/example.py",
        ]
    );

    fixture.log_step("Validate the fresh bundle");
    let output = fixture.run(&["validate", "skills/analyzing-spreadsheets"]);
    fixture.assert_success(&output, "validate");

    fixture.log_step("Package it");
    let output = fixture.run(&["package", "skills/analyzing-spreadsheets", "dist"]);
    fixture.assert_success(&output, "package");
    assert!(fixture.path("dist/analyzing-spreadsheets.skill").is_file());
    Ok(())
}

#[test]
fn test_init_twice_fails() {
    let mut fixture = E2EFixture::new("init_twice");

    fixture.log_step("First init succeeds");
    let output = fixture.run(&["init", "testing-skill"]);
    fixture.assert_success(&output, "init");

    fixture.log_step("Second init is refused");
    let output = fixture.run(&["init", "testing-skill"]);
    fixture.assert_failure(&output, "second init");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Skill directory already exists: "));
}

#[test]
fn test_renamed_folder_fails_directory_match() -> Result<()> {
    let mut fixture = E2EFixture::new("renamed_folder");

    fixture.log_step("Scaffold, then rename the folder");
    let output = fixture.run(&["init", "testing-skill"]);
    fixture.assert_success(&output, "init");
    fs::rename(fixture.path("testing-skill"), fixture.path("testing-renamed"))?;

    fixture.log_step("Validation reports the mismatch");
    let output = fixture.run(&["validate", "testing-renamed"]);
    fixture.assert_failure(&output, "validate");
    fixture.assert_output_contains(
        &output,
        "Name 'testing-skill' must match directory name 'testing-renamed' exactly",
    );
    Ok(())
}

#[test]
fn test_config_disables_examples() -> Result<()> {
    let mut fixture = E2EFixture::new("config_without_examples");
    fs::write(
        fixture.path(".skillforge.toml"),
        "[scaffold]\nskills_dir = \"my-skills\"\nwith_examples = false\n",
    )?;

    fixture.log_step("Init picks up skills_dir and with_examples");
    let output = fixture.run(&["init", "testing-skill"]);
    fixture.assert_success(&output, "init");

    let bundle = fixture.path("my-skills/testing-skill");
    assert!(bundle.join("SKILL.md").is_file());
    assert!(bundle.join("scripts").is_dir());
    assert!(!bundle.join("scripts/example.py").exists());
    Ok(())
}
