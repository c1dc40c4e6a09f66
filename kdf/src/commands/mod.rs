mod append;
mod cat;
mod copy;
mod keys;

pub use append::{append, comment};
pub use cat::cat;
pub use copy::copy;
pub use keys::keys;

use std::path::Path;

use kdf_format::{
    Delimiter, KeyedFileReader, KeyedFileWriter, LineEnding, ReaderOptions, WriterOptions,
};

use crate::error::{Error, Result};

pub fn reader_options(delimiter: Delimiter, encoding: &str, strict: bool) -> Result<ReaderOptions> {
    Ok(ReaderOptions::new()
        .delimiter(delimiter)
        .encoding_label(encoding)?
        .strict_field_count(strict))
}

pub fn writer_options(delimiter: Delimiter, crlf: bool) -> WriterOptions {
    let line_ending = if crlf {
        LineEnding::CrLf
    } else {
        LineEnding::PLATFORM
    };
    WriterOptions::new()
        .delimiter(delimiter)
        .line_ending(line_ending)
}

fn open_reader(path: &Path, options: ReaderOptions) -> Result<KeyedFileReader> {
    KeyedFileReader::open(path, options).map_err(|source| Error::OpenReader {
        path: path.to_path_buf(),
        source,
    })
}

fn open_writer(path: &Path, options: WriterOptions) -> Result<KeyedFileWriter> {
    KeyedFileWriter::open(path, options).map_err(|source| Error::OpenWriter {
        path: path.to_path_buf(),
        source,
    })
}

fn write_error(path: &Path) -> impl FnOnce(kdf_format::WriteError) -> Error + '_ {
    move |source| Error::Write {
        path: path.to_path_buf(),
        source,
    }
}
