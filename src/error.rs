use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("line {line}: malformed key tag `{text}`")]
    MalformedKey { line: usize, text: String },
    #[error("entry `{key}` opened at line {line} is never closed")]
    UnterminatedEntry { key: String, line: usize },
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl Error {
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            Error::MalformedKey { .. } | Error::UnterminatedEntry { .. }
        )
    }
}

/// Why an entry ends up without an icon. Never leaves the icon resolver as a failure.
#[derive(Debug, Error)]
pub enum IconUnavailable {
    #[error("entry has no icon key")]
    NoKey,
    #[error("cannot read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
