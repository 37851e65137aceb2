//! Output path resolution for generated builder files.

use std::path::{Path, PathBuf};

/// File name for the builder generated from `source_path`.
///
/// The source file's stem gets a `_builder.go` suffix: `person.go` becomes
/// `person_builder.go`, whatever the original extension was.
pub fn builder_file_name(source_path: &Path) -> String {
    match source_path.file_stem() {
        Some(stem) => format!("{}_builder.go", stem.to_string_lossy()),
        None => "builder.go".to_string(),
    }
}

/// Resolve where the generated builder should be written.
///
/// When `output` is an existing directory, the file lands inside it under
/// [`builder_file_name`]; anything else is taken as the literal output file
/// path.
pub fn resolve_output_path(output: &Path, source_path: &Path) -> PathBuf {
    if output.is_dir() {
        output.join(builder_file_name(source_path))
    } else {
        output.to_path_buf()
    }
}
