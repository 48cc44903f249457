//! Error types for swiftbridge
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Dependency graph errors
#[derive(Error, Debug)]
pub enum GraphError {
    /// Graph document does not parse into the expected shape
    #[error("Malformed dependency graph: {source}")]
    Malformed { source: serde_json::Error },

    /// Two distinct nodes in the tree share a name
    ///
    /// Every package writes its artifacts to `./<name>/`, so a repeated
    /// name would make the second visit overwrite the first.
    #[error("Duplicate package name '{name}' in dependency graph")]
    DuplicateName { name: String },
}

/// Compilation errors
#[derive(Error, Debug)]
pub enum BuildError {
    /// Compiler exited non-zero
    #[error("Compilation failed for package '{package}' ({status})")]
    CompileFailed { package: String, status: ExitStatus },

    /// Compiler could not be started
    #[error("Failed to launch compiler '{program}': {error}")]
    CompilerLaunch { program: PathBuf, error: String },
}

/// Module assembly errors
#[derive(Error, Debug)]
pub enum AssembleError {
    /// Expected compiler output is not on disk
    #[error("Missing artifact '{path}' for package '{package}': the compiler did not produce it")]
    ArtifactMissing { package: String, path: PathBuf },

    /// Archiver exited non-zero
    #[error("Archiving failed for package '{package}' ({status})")]
    ArchiveFailed { package: String, status: ExitStatus },

    /// Archiver could not be started
    #[error("Failed to launch archiver '{program}': {error}")]
    ArchiverLaunch { program: PathBuf, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to copy a file
    #[error("Failed to copy '{from}' to '{to}': {error}")]
    CopyFile {
        from: PathBuf,
        to: PathBuf,
        error: String,
    },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Top-level swiftbridge error type
#[derive(Error, Debug)]
pub enum BridgeError {
    /// Dependency graph error
    #[error("Dependency graph error: {0}")]
    Graph(#[from] GraphError),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Module assembly error
    #[error("Assembly error: {0}")]
    Assemble(#[from] AssembleError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}
