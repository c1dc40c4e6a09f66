use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Delimiter must not be empty.")]
    EmptyDelimiter,

    #[error("Unknown encoding label: '{0}'")]
    UnknownEncoding(String),

    #[error("Encoding is not ASCII-compatible and cannot be split into lines: '{0}'")]
    UnsupportedEncoding(String),
}

#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("Could not open file for reading. Path: '{}'", .1.display())]
    Open(#[source] std::io::Error, PathBuf),

    #[error("Could not open or create file for appending. Path: '{}'", .1.display())]
    Create(#[source] std::io::Error, PathBuf),

    #[error("Could not read header line.")]
    ReadHeader(#[source] std::io::Error),

    #[error("Header line is not valid {encoding}.")]
    InvalidEncoding { encoding: &'static str },

    #[error("Duplicate key found in file header: '{key}'")]
    DuplicateKey { key: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Failed to read line {line}.")]
    Io {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line} is not valid {encoding}.")]
    InvalidEncoding { line: u64, encoding: &'static str },

    #[error("Line {line} has {found} fields but the header only names {expected}.")]
    ExcessFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Line {line} has {found} fields but the header names {expected}.")]
    MissingFields {
        line: u64,
        expected: usize,
        found: usize,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    #[error("Writer has already been closed.")]
    Closed,

    #[error("Failed to write to file.")]
    Io(#[from] std::io::Error),
}
