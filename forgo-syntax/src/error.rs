use std::{ops::Range, path::PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for forgo-syntax operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("check that the file exists and is readable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to load the Go grammar")]
    #[diagnostic(code(forgo::grammar_error))]
    Grammar {
        #[source]
        source: tree_sitter::LanguageError,
    },

    #[error("failed to parse Go source")]
    #[diagnostic(code(forgo::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: Option<SourceSpan>,
    },

    #[error("no public fields found for struct {name}")]
    #[diagnostic(
        code(forgo::no_exported_fields),
        help("a builder needs at least one exported field; exported field names start with an uppercase letter")
    )]
    NoExportedFields { name: String },
}

impl Error {
    /// Create an io error for an unreadable input file
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a grammar error (tree-sitter rejected the compiled Go language)
    pub fn grammar(source: tree_sitter::LanguageError) -> Box<Self> {
        Box::new(Error::Grammar { source })
    }

    /// Create a parse error with source context and an optional byte span
    pub fn parse(filename: &str, src: &str, span: Option<Range<usize>>) -> Box<Self> {
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span: span.map(SourceSpan::from),
        })
    }

    /// Create an error for a struct that is missing or has no exported fields
    pub fn no_exported_fields(name: impl Into<String>) -> Box<Self> {
        Box::new(Error::NoExportedFields { name: name.into() })
    }
}
