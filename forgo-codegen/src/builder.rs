//! Builder source synthesis.
//!
//! Turns the exported fields of a Go struct into the source of a companion
//! builder type: a `XBuilder` struct wrapping a target value, a constructor,
//! one chainable `WithField` setter per exported field, and a `Build` method
//! returning the assembled value.

use std::path::Path;

use forgo_syntax::{Result, SourceFile, StructField};

use crate::code_builder::CodeBuilder;
use crate::type_mapper::go_type;

/// Everything needed to render one builder file.
pub struct BuilderFile {
    package: String,
    struct_name: String,
    fields: Vec<StructField>,
}

impl BuilderFile {
    /// Create a builder file description.
    pub fn new(
        package: impl Into<String>,
        struct_name: impl Into<String>,
        fields: Vec<StructField>,
    ) -> Self {
        Self {
            package: package.into(),
            struct_name: struct_name.into(),
            fields,
        }
    }

    /// Name of the generated builder type, e.g. `PersonBuilder`.
    pub fn builder_name(&self) -> String {
        format!("{}Builder", self.struct_name)
    }

    /// Render the complete Go source for the builder file.
    ///
    /// One declaration per block, one blank line between blocks, four-space
    /// indentation, a single trailing newline. Setters appear in field
    /// declaration order, so rendering the same input twice yields identical
    /// bytes.
    pub fn render(&self) -> String {
        let builder = self.builder_name();
        let target = &self.struct_name;
        CodeBuilder::default()
            .line(&format!("package {}", self.package))
            .blank()
            .block_with_close(&format!("type {} struct {{", builder), "}", |b| {
                b.line(&format!("target {}", target))
            })
            .blank()
            .block_with_close(&format!("func New{}() *{} {{", builder, builder), "}", |b| {
                b.line(&format!("return &{}{{}}", builder))
            })
            .blank()
            .each(&self.fields, |b, field| {
                b.block_with_close(
                    &format!(
                        "func (b *{}) With{}(value {}) *{} {{",
                        builder,
                        field.name,
                        go_type(&field.ty),
                        builder
                    ),
                    "}",
                    |b| {
                        b.line(&format!("b.target.{} = value", field.name))
                            .line("return b")
                    },
                )
                .blank()
            })
            .block_with_close(&format!("func (b *{}) Build() {} {{", builder, target), "}", |b| {
                b.line("return b.target")
            })
            .build()
    }
}

/// Generate builder source for `struct_name` found in the Go file at `path`.
///
/// The generated file is declared in `package`, which does not need to match
/// the package of the parsed source.
pub fn generate_builder(
    path: impl AsRef<Path>,
    struct_name: &str,
    package: &str,
) -> Result<String> {
    let file = SourceFile::open(path)?;
    let fields = file.exported_fields(struct_name)?;
    Ok(BuilderFile::new(package, struct_name, fields).render())
}
