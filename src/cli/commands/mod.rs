//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod install;
pub mod tree;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build every resolved dependency and generate its Bazel package
    Install {
        /// Repository name used in generated cross-package labels
        repository: String,

        /// Absolute path to the Swift compiler executable
        swift_path: PathBuf,

        /// Absolute path to the archiver executable
        ar_path: PathBuf,

        /// Directory where the Swift package manager puts build artifacts
        build_dir: PathBuf,

        /// Path to the resolved dependency graph document
        #[arg(long)]
        graph: Option<PathBuf>,
    },

    /// Display the resolved dependency tree
    Tree {
        /// Path to the resolved dependency graph document
        #[arg(long)]
        graph: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Install {
                repository,
                swift_path,
                ar_path,
                build_dir,
                graph,
            } => {
                let current_dir = std::env::current_dir()?;
                let options = install::InstallOptions {
                    repository,
                    swift_path,
                    ar_path,
                    build_dir,
                    graph,
                };
                install::execute(&current_dir, options).await
            }
            Self::Tree { graph } => {
                let current_dir = std::env::current_dir()?;
                tree::execute(&current_dir, graph).await
            }
        }
    }
}
