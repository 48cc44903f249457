//! Install command implementation
//!
//! Implements `swiftbridge install`: parse the resolved dependency
//! graph, then compile, assemble, and describe every reachable package.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::cli::output::status;
use crate::config::defaults::DEPGRAPH_FILE;
use crate::core::graph::DependencyGraph;
use crate::core::orchestrator::{BridgeConfig, BuildOrchestrator};
use crate::infra::filesystem;

/// Install options
#[derive(Debug)]
pub struct InstallOptions {
    /// Repository name used in generated cross-package labels
    pub repository: String,
    /// Path to the Swift compiler executable
    pub swift_path: PathBuf,
    /// Path to the archiver executable
    pub ar_path: PathBuf,
    /// Swift package manager build output directory
    pub build_dir: PathBuf,
    /// Override for the dependency graph document path
    pub graph: Option<PathBuf>,
}

/// Execute the install command
pub async fn execute(working_dir: &Path, options: InstallOptions) -> Result<()> {
    let graph = load_graph(working_dir, options.graph.as_deref())?;

    tracing::info!(
        "Bridging {} packages for {}",
        graph.package_count(),
        graph.root_name()
    );

    let config = BridgeConfig {
        repository: options.repository,
        swift_path: options.swift_path,
        ar_path: options.ar_path,
        build_dir: options.build_dir,
        out_dir: working_dir.to_path_buf(),
    };

    let orchestrator = BuildOrchestrator::new(config);
    orchestrator.run(&graph)?;

    println!(
        "{} Generated {} Bazel packages",
        status::SUCCESS,
        graph.package_count()
    );

    Ok(())
}

/// Load and parse the resolved dependency graph document
pub fn load_graph(working_dir: &Path, graph: Option<&Path>) -> Result<DependencyGraph> {
    let graph_path = graph
        .map(Path::to_path_buf)
        .unwrap_or_else(|| working_dir.join(DEPGRAPH_FILE));

    if !graph_path.exists() {
        bail!(
            "No dependency graph found at '{}'. Resolve the package first.",
            graph_path.display()
        );
    }

    let content = filesystem::read_file(&graph_path)?;
    DependencyGraph::from_json(&content)
        .with_context(|| format!("Failed to parse '{}'", graph_path.display()))
}
