//! Default configuration values

/// Resolved dependency graph document, relative to the working directory
pub const DEPGRAPH_FILE: &str = "depgraph.json";

/// File extension of the compiled module interface artifact
pub const MODULE_INTERFACE_EXT: &str = "swiftmodule";

/// File extension of the module documentation artifact
pub const MODULE_DOC_EXT: &str = "swiftdoc";

/// File extension of the packed static archive
pub const ARCHIVE_EXT: &str = "a";

/// Suffix of object files inside a package's build directory
pub const OBJECT_SUFFIX: &str = ".o";

/// Suffix of the per-package build output directory (`<name>.build`)
pub const BUILD_SUBDIR_SUFFIX: &str = ".build";

/// Archiver mode: replace/create with symbol index
pub const ARCHIVER_MODE: &str = "rcs";

/// Filename of the generated Bazel package descriptor
pub const DESCRIPTOR_FILE: &str = "BUILD.bazel";

/// Bazel load statement pulling in the `swift_import` rule
pub const SWIFT_IMPORT_LOAD: &str =
    r#"load("@build_bazel_rules_swift//swift:swift.bzl", "swift_import")"#;
