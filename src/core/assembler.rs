//! Module assembly
//!
//! Gathers the compiler's output for one package into a self-contained
//! module directory: the `.swiftmodule` and `.swiftdoc` artifacts are
//! copied verbatim, and every object file under `<name>.build/` is
//! packed into a static archive with the external archiver.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::defaults::{
    ARCHIVER_MODE, ARCHIVE_EXT, BUILD_SUBDIR_SUFFIX, MODULE_DOC_EXT, MODULE_INTERFACE_EXT,
    OBJECT_SUFFIX,
};
use crate::core::graph::DependencyNode;
use crate::core::orchestrator::BridgeConfig;
use crate::error::{AssembleError, BridgeError};
use crate::infra::{filesystem, process};

/// Assembles per-package module directories from compiler output
#[derive(Debug)]
pub struct ModuleAssembler<'a> {
    config: &'a BridgeConfig,
}

impl<'a> ModuleAssembler<'a> {
    /// Create an assembler over the given configuration
    pub fn new(config: &'a BridgeConfig) -> Self {
        Self { config }
    }

    /// Assemble the module directory `./<name>/` for one package
    pub fn assemble(&self, node: &DependencyNode) -> Result<(), BridgeError> {
        let module_dir = self.config.module_dir(&node.name);
        filesystem::create_dir_all(&module_dir)?;

        self.copy_artifact(node, &module_dir, MODULE_INTERFACE_EXT)?;
        self.copy_artifact(node, &module_dir, MODULE_DOC_EXT)?;
        self.pack_archive(node, &module_dir)?;

        Ok(())
    }

    /// Copy one compiler-produced artifact into the module directory
    fn copy_artifact(
        &self,
        node: &DependencyNode,
        module_dir: &Path,
        extension: &str,
    ) -> Result<(), BridgeError> {
        let file_name = format!("{}.{extension}", node.name);
        let source = self.config.build_dir.join(&file_name);

        if !source.is_file() {
            return Err(AssembleError::ArtifactMissing {
                package: node.name.clone(),
                path: source,
            }
            .into());
        }

        filesystem::copy_file(&source, &module_dir.join(&file_name))?;
        Ok(())
    }

    /// Pack the package's object files into `<name>.a`
    fn pack_archive(&self, node: &DependencyNode, module_dir: &Path) -> Result<(), BridgeError> {
        let archive = module_dir.join(format!("{}.{ARCHIVE_EXT}", node.name));
        let objects = self.collect_objects(&node.name);
        tracing::debug!(
            "Archiving {} object files for {}",
            objects.len(),
            node.name
        );

        let mut args: Vec<PathBuf> = vec![ARCHIVER_MODE.into(), archive];
        args.extend(objects);

        let status = process::run(&self.config.ar_path, &args).map_err(|e| {
            AssembleError::ArchiverLaunch {
                program: self.config.ar_path.clone(),
                error: e.to_string(),
            }
        })?;

        if !status.success() {
            return Err(AssembleError::ArchiveFailed {
                package: node.name.clone(),
                status,
            }
            .into());
        }

        Ok(())
    }

    /// Discover the package's object files in a stable order
    ///
    /// Archiver output is sensitive to input order, so the recursive walk
    /// is sorted by full path before being handed to the archiver.
    fn collect_objects(&self, name: &str) -> Vec<PathBuf> {
        let build_subdir = self
            .config
            .build_dir
            .join(format!("{name}{BUILD_SUBDIR_SUFFIX}"));

        let mut objects: Vec<PathBuf> = WalkDir::new(build_subdir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| {
                entry.file_type().is_file()
                    && entry.file_name().to_string_lossy().ends_with(OBJECT_SUFFIX)
            })
            .map(|entry| entry.into_path())
            .collect();

        objects.sort();
        objects
    }
}
