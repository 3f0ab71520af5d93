use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for snapshot operations (boxed to keep the Ok path small)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{}'", .path.display())]
    #[diagnostic(help("pass the path to a schema snapshot JSON file, or '-' for stdin"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema snapshot")]
    #[diagnostic(code(typegres::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Create a read error for a snapshot path.
    pub fn io(path: &Path, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Create a parse error, locating the span from serde_json's line/column.
    pub fn parse(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Byte offset of a 1-based line/column pair, if it lies inside `src`.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src.split_inclusive('\n').take(line - 1).map(str::len).sum();
    let offset = line_start + column.saturating_sub(1);
    (offset <= src.len()).then_some(offset)
}
