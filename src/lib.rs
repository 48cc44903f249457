//! Swiftbridge - Bridge Swift Package Manager builds into Bazel workspaces
//!
//! This library provides the core functionality for turning a resolved
//! Swift Package Manager dependency graph into a set of self-contained
//! Bazel packages, one per dependency.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (graph model, assembly, descriptor generation)
//! - [`infra`] - Infrastructure layer (filesystem, external processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
