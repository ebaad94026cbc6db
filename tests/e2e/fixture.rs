//! Shared fixture for end-to-end workflows: an isolated working directory
//! plus a runner for the `skillforge` binary.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::Instant;

use tempfile::TempDir;
use walkdir::WalkDir;

pub struct E2EFixture {
    pub name: String,
    pub temp_dir: TempDir,
    step: usize,
    started: Instant,
}

impl E2EFixture {
    pub fn new(name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        println!("[E2E] Scenario: {name}");
        println!("[E2E] Root: {:?}", temp_dir.path());
        Self {
            name: name.to_string(),
            temp_dir,
            step: 0,
            started: Instant::now(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root().join(relative)
    }

    pub fn log_step(&mut self, description: &str) {
        self.step += 1;
        println!(
            "[E2E] Step {} ({:?}): {description}",
            self.step,
            self.started.elapsed()
        );
    }

    /// Run the binary inside the fixture root with a clean environment.
    pub fn run(&self, args: &[&str]) -> Output {
        println!("[E2E] $ skillforge {}", args.join(" "));
        let output = Command::new(env!("CARGO_BIN_EXE_skillforge"))
            .args(args)
            .current_dir(self.root())
            .env_remove("RUST_LOG")
            .env_remove("SKILLFORGE_CONFIG")
            .env_remove("SKILLFORGE_SKILLS_DIR")
            .env_remove("SKILLFORGE_OUTPUT_DIR")
            .env_remove("SKILLFORGE_COMPRESSION")
            .env_remove("SKILLFORGE_OUTPUT_FORMAT")
            .env("XDG_CONFIG_HOME", self.path(".xdg"))
            .env("HOME", self.root())
            .output()
            .expect("Failed to run skillforge");
        println!("[E2E] exit: {:?}", output.status.code());
        output
    }

    pub fn assert_success(&self, output: &Output, label: &str) {
        assert!(
            output.status.success(),
            "[{}] {label} failed\nstdout: {}\nstderr: {}",
            self.name,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    pub fn assert_failure(&self, output: &Output, label: &str) {
        assert!(
            !output.status.success(),
            "[{}] {label} unexpectedly succeeded\nstdout: {}",
            self.name,
            String::from_utf8_lossy(&output.stdout)
        );
    }

    pub fn assert_output_contains(&self, output: &Output, needle: &str) {
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(
            stdout.contains(needle),
            "[{}] expected stdout to contain {needle:?}\nstdout: {stdout}",
            self.name
        );
    }

    /// Print and return every file under the root, relative and sorted.
    pub fn checkpoint(&self, label: &str) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(self.root())
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file())
            .filter_map(|e| {
                e.path()
                    .strip_prefix(self.root())
                    .ok()
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();
        files.sort();
        println!("[E2E] Checkpoint {label}: {} files", files.len());
        for file in &files {
            println!("[E2E]   {file}");
        }
        files
    }
}
