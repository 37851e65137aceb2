//! Builder generation for Go structs.
//!
//! This crate renders the builder source and decides where it lands on disk:
//!
//! - [`BuilderFile`] / [`generate_builder`] - builder source synthesis
//! - [`CodeBuilder`] / [`Indent`] - indentation-aware code assembly
//! - [`go_type`] - rendering of lowered Go types
//! - [`builder_file_name`] / [`resolve_output_path`] / [`write_source`] -
//!   output placement

mod builder;
mod code_builder;
mod file;
mod indent;
mod paths;
mod type_mapper;

pub use builder::{BuilderFile, generate_builder};
pub use code_builder::CodeBuilder;
pub use file::write_source;
pub use indent::Indent;
pub use paths::{builder_file_name, resolve_output_path};
pub use type_mapper::go_type;
