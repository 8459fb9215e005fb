use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the data layer.
///
/// Parse failures during type detection are *not* errors; they only steer
/// the integer → float → text cascade.
#[derive(Error, Debug)]
pub enum DataError {
    /// The input file is missing or unreadable.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output file could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A generation kind outside `Integer`, `Double`, `String`.
    #[error("unsupported data kind: {0}")]
    UnsupportedKind(String),
}

pub type Result<T> = std::result::Result<T, DataError>;
