//! Build orchestration
//!
//! Walks the resolved dependency tree depth-first and, for every node,
//! runs the fixed per-package pipeline: compile with the external Swift
//! compiler, assemble the module directory, generate the Bazel
//! descriptor, then descend into the node's dependencies. Execution is
//! fully serial; the first failure anywhere in the walk aborts the run,
//! leaving already-written artifacts in place.

use std::path::PathBuf;

use crate::config::defaults::DESCRIPTOR_FILE;
use crate::core::assembler::ModuleAssembler;
use crate::core::descriptor::Descriptor;
use crate::core::graph::{DependencyGraph, DependencyNode};
use crate::error::{BridgeError, BuildError};
use crate::infra::process;

/// Configuration for one bridging run
///
/// Built once at startup from the CLI arguments and passed down
/// explicitly; nothing here is read from ambient process state.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// External repository name used in generated cross-package labels
    pub repository: String,

    /// Path to the Swift compiler executable
    pub swift_path: PathBuf,

    /// Path to the archiver executable
    pub ar_path: PathBuf,

    /// Directory where the Swift package manager puts build artifacts
    pub build_dir: PathBuf,

    /// Directory the per-package module directories are written under
    pub out_dir: PathBuf,
}

impl BridgeConfig {
    /// The module directory generated for a package
    pub fn module_dir(&self, name: &str) -> PathBuf {
        self.out_dir.join(name)
    }
}

/// Drives the per-package build pipeline over the dependency tree
#[derive(Debug)]
pub struct BuildOrchestrator {
    config: BridgeConfig,
}

impl BuildOrchestrator {
    /// Create a new orchestrator
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }

    /// The configuration this orchestrator runs with
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Bridge every package reachable from the top-level dependency list
    pub fn run(&self, graph: &DependencyGraph) -> Result<(), BridgeError> {
        graph.check_unique_names()?;

        for dependency in graph.top_level() {
            self.install(dependency)?;
        }

        Ok(())
    }

    /// Compile, assemble, and describe one package, then its dependencies
    fn install(&self, node: &DependencyNode) -> Result<(), BridgeError> {
        println!("Building {}", node.name);
        self.compile(node)?;

        ModuleAssembler::new(&self.config).assemble(node)?;

        println!("Generating {DESCRIPTOR_FILE} for {}", node.name);
        Descriptor::for_node(node, &self.config.repository)
            .write(&self.config.module_dir(&node.name))?;

        for child in &node.dependencies {
            self.install(child)?;
        }

        Ok(())
    }

    /// Invoke a release-mode build scoped to the package's target
    fn compile(&self, node: &DependencyNode) -> Result<(), BridgeError> {
        tracing::info!("Compiling target {}", node.name);

        let status = process::run(
            &self.config.swift_path,
            ["build", "-c", "release", "--target", node.name.as_str()],
        )
        .map_err(|e| BuildError::CompilerLaunch {
            program: self.config.swift_path.clone(),
            error: e.to_string(),
        })?;

        if !status.success() {
            return Err(BuildError::CompileFailed {
                package: node.name.clone(),
                status,
            }
            .into());
        }

        Ok(())
    }
}
