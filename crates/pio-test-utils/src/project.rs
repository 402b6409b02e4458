//! [`TestProject`] builder for on-disk configuration scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::fixtures::{EXTRA_DEBUG_CONFIG, EXTRA_ENVS_CONFIG, ROOT_CONFIG};

/// File name of the root project document.
pub const ROOT_CONF: &str = "platformio.ini";

/// A temporary project directory with helpers for writing documents.
///
/// # Example
///
/// ```rust,no_run
/// use pio_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write("platformio.ini", "[env:uno]\nboard = uno\n");
/// assert!(project.root_conf().exists());
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a project holding the root document and both secondary
    /// documents from [`fixtures`](crate::fixtures).
    pub fn extends() -> Self {
        let project = Self::new();
        project.write(ROOT_CONF, ROOT_CONFIG);
        project.write("extra_envs.ini", EXTRA_ENVS_CONFIG);
        project.write("extra_debug.ini", EXTRA_DEBUG_CONFIG);
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `name` inside the project.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root().join(name)
    }

    /// Absolute path of the root project document.
    pub fn root_conf(&self) -> PathBuf {
        self.path(ROOT_CONF)
    }

    /// Write `content` to `name`, creating parent directories.
    pub fn write(&self, name: &str, content: &str) -> &Self {
        let full_path = self.path(name);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|_| panic!("Could not write file: {}", full_path.display()));
        self
    }
}
