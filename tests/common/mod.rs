//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.
//! Integration tests drive the real binary against a temporary working
//! directory, with stub `swift` and `ar` shell scripts standing in for
//! the external toolchain. The stubs append their arguments to log
//! files so tests can assert on invocation order and contents.

// Each test binary compiles its own copy; not every helper is used by all.
#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Stub compiler: records every invocation and succeeds
pub const FAKE_SWIFT: &str = "#!/bin/sh\nprintf '%s\\n' \"$*\" >> swift-invocations.log\nexit 0\n";

/// Stub archiver: records every invocation and creates the archive ($2)
pub const FAKE_AR: &str =
    "#!/bin/sh\nprintf '%s\\n' \"$*\" >> ar-invocations.log\n: > \"$2\"\nexit 0\n";

/// Stub archiver that always fails
pub const FAILING_AR: &str = "#!/bin/sh\nexit 3\n";

/// Test project context
///
/// Creates a temporary working directory and provides utilities for
/// staging dependency graphs, stub toolchains, and fake build outputs.
pub struct TestProject {
    /// Temporary working directory
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Write an executable script and return its absolute path
    #[cfg(unix)]
    pub fn write_executable(&self, name: &str, content: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("Failed to write script");
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to mark script executable");
        path
    }

    /// Write the dependency graph document at the default location
    pub fn write_depgraph(&self, graph: &serde_json::Value) {
        self.create_file("depgraph.json", &graph.to_string());
    }

    /// Stage fake compiler output for one package under `build/`
    ///
    /// Creates `<name>.swiftmodule`, `<name>.swiftdoc`, and an object
    /// file under `<name>.build/` for each entry in `objects`.
    pub fn stage_build_outputs(&self, name: &str, objects: &[&str]) {
        self.create_file(&format!("build/{name}.swiftmodule"), "module interface");
        self.create_file(&format!("build/{name}.swiftdoc"), "module docs");
        for object in objects {
            self.create_file(&format!("build/{name}.build/{object}"), "object code");
        }
    }

    /// Absolute path to the staged build output directory
    pub fn build_dir(&self) -> PathBuf {
        self.dir.path().join("build")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a dependency graph node as a JSON value
pub fn dep(name: &str, dependencies: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "url": format!("https://example.com/{name}.git"),
        "version": "1.0.0",
        "path": format!("/checkouts/{name}"),
        "dependencies": dependencies,
    })
}
