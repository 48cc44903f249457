//! Resolved dependency graph model
//!
//! The graph is produced by `swift package show-dependencies --format json`
//! (or an equivalent resolver) and consumed here as-is: swiftbridge maps
//! the tree, it never resolves anything itself. The document is parsed
//! once at startup and read-only thereafter.

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::GraphError;

/// One package in the resolved dependency tree
#[derive(Debug, Clone, Deserialize)]
pub struct DependencyNode {
    /// Package name; also used as directory, archive, and target name
    pub name: String,

    /// Source location of the package (provenance only)
    pub url: String,

    /// Resolved version (provenance only)
    pub version: String,

    /// Checkout path reported by the resolver; not consumed by the traversal
    pub path: String,

    /// Direct dependencies, in resolver order; empty for a leaf
    #[serde(default)]
    pub dependencies: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Visit this node and every descendant, depth-first
    fn visit<'a>(&'a self, f: &mut impl FnMut(&'a DependencyNode)) {
        f(self);
        for child in &self.dependencies {
            child.visit(f);
        }
    }
}

/// The resolved dependency graph
///
/// The root node is the package under bridging itself; only its
/// descendants are built and mapped to Bazel packages.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    root: DependencyNode,
}

impl DependencyGraph {
    /// Parse a graph from its JSON document
    pub fn from_json(content: &str) -> Result<Self, GraphError> {
        let root: DependencyNode =
            serde_json::from_str(content).map_err(|e| GraphError::Malformed { source: e })?;
        Ok(Self { root })
    }

    /// Name of the root package
    pub fn root_name(&self) -> &str {
        &self.root.name
    }

    /// The top-level dependencies, i.e. the build targets to install
    pub fn top_level(&self) -> &[DependencyNode] {
        &self.root.dependencies
    }

    /// Number of packages reachable from the top-level dependency list
    pub fn package_count(&self) -> usize {
        let mut count = 0;
        for dep in self.top_level() {
            dep.visit(&mut |_| count += 1);
        }
        count
    }

    /// Fail fast if two distinct nodes share a name
    ///
    /// Artifacts land in `./<name>/` regardless of tree depth, so a
    /// repeated name would silently overwrite earlier output. The root's
    /// own name is exempt: it is never built.
    pub fn check_unique_names(&self) -> Result<(), GraphError> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut duplicate: Option<String> = None;
        for dep in self.top_level() {
            dep.visit(&mut |node| {
                if duplicate.is_none() && !seen.insert(&node.name) {
                    duplicate = Some(node.name.clone());
                }
            });
        }
        match duplicate {
            Some(name) => Err(GraphError::DuplicateName { name }),
            None => Ok(()),
        }
    }

    /// Format the graph as a printable tree
    pub fn format_tree(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}@{}\n",
            self.root.name, self.root.version
        ));
        let deps = self.top_level();
        for (i, dep) in deps.iter().enumerate() {
            Self::format_node(&mut output, dep, "", i == deps.len() - 1);
        }
        output
    }

    fn format_node(output: &mut String, node: &DependencyNode, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };
        output.push_str(&format!(
            "{prefix}{connector}{}@{}\n",
            node.name, node.version
        ));

        let child_prefix = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };

        for (i, child) in node.dependencies.iter().enumerate() {
            Self::format_node(output, child, &child_prefix, i == node.dependencies.len() - 1);
        }
    }
}
