//! Streaming access to keyed delimited text files.
//!
//! A keyed delimited file holds one record per line, with fields separated by
//! a delimiter (`,` unless configured otherwise). The first line names the
//! fields; every later line is read into a [`Record`] keyed by those names.
//!
//! ```text
//! id,name,age
//! 1,Alice,30,
//! 2,Bob,41,
//! ```
//!
//! Fields are never quoted or escaped, so a value that contains the
//! delimiter cannot be read back.

mod config;
mod de;
pub mod error;
mod file;
mod header;
mod record;
mod ser;

pub use config::{Delimiter, LineEnding, ReaderOptions, WriterOptions, DEFAULT_DELIMITER};
pub use error::{ConfigError, OpenError, ReadError, WriteError};
pub use file::{KeyedFileReader, KeyedFileWriter};
pub use header::KeyRow;
pub use record::Record;

pub use encoding_rs;
