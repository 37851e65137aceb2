use std::path::PathBuf;

use clap::Parser;
use eyre::{Context, Result};
use forgo_codegen::{generate_builder, resolve_output_path, write_source};

/// Extension trait for exiting on generation errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for forgo_syntax::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "forgo")]
#[command(version)]
#[command(about = "Generate fluent Go builders from struct definitions")]
pub(crate) struct Cli {
    /// Go source file containing the struct definition
    pub file_path: PathBuf,

    /// Name of the struct to generate a builder for
    pub struct_name: String,

    /// Output file, or an existing directory to name the file into
    pub output_path: PathBuf,

    /// Package name declared in the generated file
    pub package_name: String,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let source = generate_builder(&self.file_path, &self.struct_name, &self.package_name)
            .unwrap_or_exit();

        let output = resolve_output_path(&self.output_path, &self.file_path);
        write_source(&output, &source)
            .wrap_err_with(|| format!("Failed to write '{}'", output.display()))?;

        println!("Builder generated and saved to: {}", output.display());
        Ok(())
    }
}
