//! Bazel package descriptor generation
//!
//! Renders a `BUILD.bazel` file per package, declaring a `swift_import`
//! target whose inputs are the artifacts placed by the module assembler
//! and whose `deps` mirror the package's direct dependencies in the
//! resolved graph. The descriptor is built as a structured value and
//! serialized in one place, so its shape can be tested without string
//! matching against the whole file.

use std::path::Path;

use crate::config::defaults::{
    ARCHIVE_EXT, DESCRIPTOR_FILE, MODULE_DOC_EXT, MODULE_INTERFACE_EXT, SWIFT_IMPORT_LOAD,
};
use crate::core::graph::DependencyNode;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// A generated Bazel package descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    /// Target name (the package name)
    pub target: String,

    /// Resolved version, recorded in the provenance header
    pub version: String,

    /// Source location, recorded in the provenance header
    pub url: String,

    /// Cross-package labels of the direct dependencies, in graph order
    pub deps: Vec<String>,

    /// Whether the target is visible to all other packages
    pub public: bool,
}

/// Render a cross-package label for a target in the generated repository
pub fn label(repository: &str, target: &str) -> String {
    format!("@{repository}//{target}")
}

impl Descriptor {
    /// Build the descriptor for one node of the resolved graph
    pub fn for_node(node: &DependencyNode, repository: &str) -> Self {
        Self {
            target: node.name.clone(),
            version: node.version.clone(),
            url: node.url.clone(),
            deps: node
                .dependencies
                .iter()
                .map(|child| label(repository, &child.name))
                .collect(),
            public: true,
        }
    }

    /// Serialize the descriptor to BUILD.bazel text
    pub fn render(&self) -> String {
        let visibility = if self.public {
            "//visibility:public"
        } else {
            "//visibility:private"
        };

        let deps = if self.deps.is_empty() {
            "[]".to_string()
        } else {
            let entries: Vec<String> = self
                .deps
                .iter()
                .map(|dep| format!("        \"{dep}\",\n"))
                .collect();
            format!("[\n{}    ]", entries.join(""))
        };

        format!(
            r#"# This file is automatically generated by swiftbridge; do not edit.
# All rules in other repositories can use this target.
# Generated for {target}@{version}
# Url: {url}

package(default_visibility = ["{visibility}"])
{load}

swift_import(
    name = "{target}",
    archives = [
        ":{target}.{archive_ext}",
    ],
    swiftmodules = [
        ":{target}.{interface_ext}",
    ],
    swiftdocs = [
        ":{target}.{doc_ext}",
    ],
    deps = {deps},
)
"#,
            target = self.target,
            version = self.version,
            url = self.url,
            visibility = visibility,
            load = SWIFT_IMPORT_LOAD,
            archive_ext = ARCHIVE_EXT,
            interface_ext = MODULE_INTERFACE_EXT,
            doc_ext = MODULE_DOC_EXT,
            deps = deps,
        )
    }

    /// Write the rendered descriptor into the package's module directory
    pub fn write(&self, module_dir: &Path) -> Result<(), FilesystemError> {
        filesystem::write_file(&module_dir.join(DESCRIPTOR_FILE), &self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn node(name: &str, dependencies: Vec<DependencyNode>) -> DependencyNode {
        DependencyNode {
            name: name.to_string(),
            url: format!("https://example.com/{name}.git"),
            version: "3.2.1".to_string(),
            path: String::new(),
            dependencies,
        }
    }

    #[test]
    fn test_label_format() {
        assert_eq!(label("swift_deps", "Logging"), "@swift_deps//Logging");
    }

    #[test]
    fn test_for_node_mirrors_child_edges_in_order() {
        let n = node("App", vec![node("First", vec![]), node("Second", vec![])]);
        let descriptor = Descriptor::for_node(&n, "swift_deps");

        assert_eq!(descriptor.target, "App");
        assert_eq!(
            descriptor.deps,
            vec!["@swift_deps//First", "@swift_deps//Second"]
        );
        assert!(descriptor.public);
    }

    #[test]
    fn test_for_node_ignores_grandchildren() {
        let n = node("App", vec![node("Child", vec![node("Grandchild", vec![])])]);
        let descriptor = Descriptor::for_node(&n, "deps");
        assert_eq!(descriptor.deps, vec!["@deps//Child"]);
    }

    #[test]
    fn test_render_declares_all_artifacts() {
        let descriptor = Descriptor::for_node(&node("Logging", vec![]), "deps");
        let output = descriptor.render();

        assert!(output.contains("swift_import("));
        assert!(output.contains("name = \"Logging\""));
        assert!(output.contains(":Logging.a"));
        assert!(output.contains(":Logging.swiftmodule"));
        assert!(output.contains(":Logging.swiftdoc"));
        assert!(output.contains(SWIFT_IMPORT_LOAD));
    }

    #[test]
    fn test_render_records_provenance_and_generated_warning() {
        let descriptor = Descriptor::for_node(&node("Logging", vec![]), "deps");
        let output = descriptor.render();

        assert!(output.starts_with("# This file is automatically generated"));
        assert!(output.contains("# Generated for Logging@3.2.1"));
        assert!(output.contains("# Url: https://example.com/Logging.git"));
    }

    #[test]
    fn test_render_is_public_by_default() {
        let descriptor = Descriptor::for_node(&node("Logging", vec![]), "deps");
        assert!(descriptor
            .render()
            .contains(r#"package(default_visibility = ["//visibility:public"])"#));
    }

    #[test]
    fn test_leaf_renders_empty_deps_list() {
        let descriptor = Descriptor::for_node(&node("Leaf", vec![]), "deps");
        assert!(descriptor.render().contains("deps = [],"));
    }

    #[test]
    fn test_render_lists_deps_in_graph_order() {
        let n = node("App", vec![node("B", vec![]), node("A", vec![])]);
        let output = Descriptor::for_node(&n, "deps").render();

        let b_pos = output.find("\"@deps//B\"").unwrap();
        let a_pos = output.find("\"@deps//A\"").unwrap();
        assert!(b_pos < a_pos, "deps must keep resolver order, not sort");
    }

    proptest! {
        /// Every child appears in the rendered deps list exactly once,
        /// in resolver order, regardless of how many children there are.
        #[test]
        fn prop_rendered_deps_preserve_children(
            names in proptest::collection::vec("[A-Za-z][A-Za-z0-9]{0,12}", 0..8)
        ) {
            // Duplicate sibling names would be rejected upstream by the
            // graph pre-check; keep the input unique.
            let mut unique = names.clone();
            unique.sort();
            unique.dedup();
            prop_assume!(unique.len() == names.len());

            let children: Vec<DependencyNode> =
                names.iter().map(|n| node(n, vec![])).collect();
            let descriptor = Descriptor::for_node(&node("App", children), "repo");
            let output = descriptor.render();

            prop_assert_eq!(descriptor.deps.len(), names.len());

            let mut last_pos = 0;
            for name in &names {
                let needle = format!("\"@repo//{name}\"");
                let pos = output.find(&needle);
                prop_assert!(pos.is_some(), "missing dep label for {}", name);
                let pos = pos.unwrap();
                prop_assert!(pos >= last_pos, "dep labels out of order");
                last_pos = pos;
            }

            if names.is_empty() {
                prop_assert!(output.contains("deps = [],"));
            }
        }
    }
}
