//! CLI command for displaying the resolved dependency tree
//!
//! Implements the `swiftbridge tree` command.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::commands::install::load_graph;

/// Execute the tree command
pub async fn execute(working_dir: &Path, graph: Option<PathBuf>) -> Result<()> {
    let graph = load_graph(working_dir, graph.as_deref())?;
    println!("{}", graph.format_tree());
    Ok(())
}
