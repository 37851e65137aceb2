// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod source;
mod structs;
mod types;

pub use error::{Error, Result};
pub use source::SourceFile;
pub use structs::{StructDecl, StructField};
pub use types::TypeRef;
