//! Core business logic module
//!
//! This module contains all business logic for swiftbridge.
//!
//! # Submodules
//!
//! - [`graph`] - Resolved dependency graph model
//! - [`assembler`] - Per-package module assembly
//! - [`descriptor`] - Bazel package descriptor generation
//! - [`orchestrator`] - Build orchestration over the dependency tree

pub mod assembler;
pub mod descriptor;
pub mod graph;
pub mod orchestrator;
