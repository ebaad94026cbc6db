//! E2E Scenario: Package Workflow
//!
//! validate → package → read the archive back, plus the refusal paths where
//! nothing may be written.

use std::fs::{self, File};
use std::io::Read;

use zip::ZipArchive;

use super::fixture::E2EFixture;
use skillforge::bundler::{Compression, package_skill};
use skillforge::error::Result;

const VALID_MANIFEST: &str = "---
name: testing-skill
description: A valid description.
---

# Testing Skill

Run the suite.
";

fn write_valid_bundle(fixture: &E2EFixture) {
    let bundle = fixture.path("testing-skill");
    fs::create_dir_all(bundle.join("references")).unwrap();
    fs::create_dir_all(bundle.join("scripts")).unwrap();
    fs::write(bundle.join("SKILL.md"), VALID_MANIFEST).unwrap();
    fs::write(bundle.join("references/notes.md"), "# Notes\n").unwrap();
    fs::write(bundle.join("scripts/run.sh"), "#!/bin/sh\necho ok\n").unwrap();
}

fn entry_names(archive: &mut ZipArchive<File>) -> Vec<String> {
    let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
    names.sort();
    names
}

#[test]
fn test_validate_and_package_valid_bundle() -> Result<()> {
    let mut fixture = E2EFixture::new("validate_and_package");

    fixture.log_step("Create a valid bundle");
    write_valid_bundle(&fixture);

    fixture.log_step("Validate");
    let output = fixture.run(&["validate", "testing-skill"]);
    fixture.assert_success(&output, "validate");
    fixture.assert_output_contains(&output, "Skill is valid!");

    fixture.log_step("Package into dist/");
    let output = fixture.run(&["package", "testing-skill", "dist"]);
    fixture.assert_success(&output, "package");
    fixture.assert_output_contains(&output, "testing-skill.skill");

    fixture.log_step("Read the archive back");
    let mut archive = ZipArchive::new(File::open(fixture.path("dist/testing-skill.skill"))?)?;
    let listing = entry_names(&mut archive).join("\n");
    insta::assert_snapshot!(listing, @r"
    testing-skill/SKILL.md
    testing-skill/references/notes.md
    testing-skill/scripts/run.sh
    ");

    let mut manifest = String::new();
    archive
        .by_name("testing-skill/SKILL.md")?
        .read_to_string(&mut manifest)?;
    assert_eq!(manifest, VALID_MANIFEST);

    fixture.checkpoint("after_package");
    Ok(())
}

#[test]
fn test_package_missing_manifest_writes_nothing() -> Result<()> {
    let mut fixture = E2EFixture::new("package_missing_manifest");

    fixture.log_step("Create a bundle, then delete SKILL.md");
    write_valid_bundle(&fixture);
    fs::remove_file(fixture.path("testing-skill/SKILL.md"))?;

    fixture.log_step("Package must refuse");
    let output = fixture.run(&["package", "testing-skill", "dist"]);
    fixture.assert_failure(&output, "package");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SKILL.md not found in "), "stderr: {stderr}");

    let files = fixture.checkpoint("after_refusal");
    assert!(files.iter().all(|f| !f.ends_with(".skill")));
    assert!(!fixture.path("dist").exists());
    Ok(())
}

#[test]
fn test_package_missing_folder_is_not_found() {
    let mut fixture = E2EFixture::new("package_missing_folder");

    fixture.log_step("Package a folder that does not exist");
    let output = fixture.run(&["--robot", "package", "nowhere"]);
    fixture.assert_failure(&output, "package");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["code"], "not_found");
    assert!(
        json["message"]
            .as_str()
            .unwrap()
            .starts_with("Skill folder not found: ")
    );
}

#[test]
fn test_repackage_overwrites_archive() -> Result<()> {
    let mut fixture = E2EFixture::new("repackage_overwrites");
    write_valid_bundle(&fixture);

    fixture.log_step("Package twice, adding a file in between");
    let first = package_skill(&fixture.path("testing-skill"), fixture.root(), Compression::Deflated)?;
    assert_eq!(first.entries, 3);
    fs::write(fixture.path("testing-skill/assets.txt"), "extra")?;
    let second = package_skill(&fixture.path("testing-skill"), fixture.root(), Compression::Deflated)?;

    assert_eq!(first.path, second.path);
    assert_eq!(second.entries, 4);
    let archive = ZipArchive::new(File::open(&second.path)?)?;
    assert_eq!(archive.len(), 4);
    Ok(())
}

#[test]
fn test_stored_compression_from_config() -> Result<()> {
    let mut fixture = E2EFixture::new("stored_compression");
    write_valid_bundle(&fixture);
    fs::write(
        fixture.path(".skillforge.toml"),
        "[package]\ncompression = \"stored\"\n",
    )?;

    fixture.log_step("Package with stored compression");
    let output = fixture.run(&["package", "testing-skill"]);
    fixture.assert_success(&output, "package");

    let mut archive = ZipArchive::new(File::open(fixture.path("testing-skill.skill"))?)?;
    let entry = archive.by_name("testing-skill/SKILL.md")?;
    assert_eq!(entry.compression(), zip::CompressionMethod::Stored);
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_executable_bit_survives_packaging() -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let fixture = E2EFixture::new("executable_bit");
    write_valid_bundle(&fixture);
    let script = fixture.path("testing-skill/scripts/run.sh");
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

    let packaged = package_skill(&fixture.path("testing-skill"), fixture.root(), Compression::Deflated)?;

    let mut archive = ZipArchive::new(File::open(&packaged.path)?)?;
    let entry = archive.by_name("testing-skill/scripts/run.sh")?;
    assert_eq!(entry.unix_mode().map(|m| m & 0o777), Some(0o755));
    Ok(())
}
