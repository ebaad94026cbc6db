use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::core::manifest::MANIFEST_FILE;

/// A skill bundle folder inside its own temp directory.
///
/// The bundle lives at `<temp>/<dir_name>`, so the temp root doubles as a
/// parent folder for scaffolding and as an output folder for packaging.
pub struct BundleFixture {
    pub temp_dir: TempDir,
    pub bundle_path: PathBuf,
}

impl BundleFixture {
    /// Empty bundle folder named `dir_name`.
    #[must_use]
    pub fn new(dir_name: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let bundle_path = temp_dir.path().join(dir_name);
        std::fs::create_dir_all(&bundle_path).expect("Failed to create bundle dir");

        println!("[FIXTURE] Created bundle directory: {bundle_path:?}");

        Self {
            temp_dir,
            bundle_path,
        }
    }

    /// Bundle whose manifest has exactly `name` and `description`.
    #[must_use]
    pub fn valid(name: &str) -> Self {
        let fixture = Self::new(name);
        fixture.write_manifest(&manifest(name, "A valid description."));
        fixture
    }

    /// Folder holding the bundle.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write raw `SKILL.md` content.
    pub fn write_manifest(&self, content: &str) -> PathBuf {
        self.create_file(MANIFEST_FILE, content)
    }

    /// Write `SKILL.md` from frontmatter lines, adding the delimiters.
    pub fn write_frontmatter(&self, frontmatter: &str) -> PathBuf {
        self.write_manifest(&format!("---\n{frontmatter}\n---\n\n# Body\n"))
    }

    /// Create a file inside the bundle with content.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.bundle_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Delete a file inside the bundle.
    pub fn remove_file(&self, relative_path: &str) {
        std::fs::remove_file(self.bundle_path.join(relative_path))
            .expect("Failed to remove file");
    }
}

/// Minimal manifest text with the two required keys.
#[must_use]
pub fn manifest(name: &str, description: &str) -> String {
    format!("---\nname: {name}\ndescription: {description}\n---\n\n# Body\n")
}
