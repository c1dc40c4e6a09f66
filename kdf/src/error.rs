use std::path::PathBuf;

use kdf_format::{ConfigError, OpenError, ReadError, WriteError};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid option")]
    Config {
        #[source]
        source: ConfigError,
    },

    #[error("Cannot open `{}` for reading", .path.display())]
    OpenReader {
        path: PathBuf,
        #[source]
        source: OpenError,
    },

    #[error("Cannot open `{}` for writing", .path.display())]
    OpenWriter {
        path: PathBuf,
        #[source]
        source: OpenError,
    },

    #[error("Cannot read record from `{}`", .path.display())]
    ReadRecord {
        path: PathBuf,
        #[source]
        source: ReadError,
    },

    #[error("Cannot write to `{}`", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: WriteError,
    },

    #[error("Cannot write to standard output")]
    Stdout {
        #[source]
        source: std::io::Error,
    },

    #[error("File `{}` has no header keys", .path.display())]
    NoHeader { path: PathBuf },

    #[error("Cowardly refusing to copy `{}` onto itself", .path.display())]
    SameFile { path: PathBuf },
}

impl From<ConfigError> for Error {
    fn from(source: ConfigError) -> Self {
        Error::Config { source }
    }
}
