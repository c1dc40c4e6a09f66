use std::fs::{File, OpenOptions};
use std::io::{prelude::*, BufReader};
use std::path::{Path, PathBuf};

use crate::{
    config::ReaderOptions,
    de,
    error::{OpenError, ReadError},
    header::KeyRow,
    record::Record,
};

/// Streams records out of a keyed delimited file, one line at a time.
///
/// The first line is taken as the header. Reading stops at the first empty
/// line, so a blank line in the middle of a file ends the data just like the
/// end of the file does.
#[derive(Debug)]
pub struct KeyedFileReader<R = BufReader<File>> {
    pub(crate) source: Option<R>,
    pub(crate) path: Option<PathBuf>,
    pub(crate) options: ReaderOptions,
    pub(crate) key_row: KeyRow,
    pub(crate) line: u64,
    buf: Vec<u8>,
}

fn owned_tokens(line: &str, delimiter: &str) -> Vec<String> {
    de::tokenize(line, delimiter)
        .into_iter()
        .map(str::to_string)
        .collect()
}

impl KeyedFileReader<BufReader<File>> {
    /// Opens a file for reading and consumes its header line.
    pub fn open<P: AsRef<Path>>(
        path: P,
        options: ReaderOptions,
    ) -> Result<KeyedFileReader<BufReader<File>>, OpenError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|e| OpenError::Open(e, path.to_path_buf()))?;

        let mut reader = Self::from_reader(BufReader::new(file), options)?;
        reader.path = Some(path.to_path_buf());
        Ok(reader)
    }
}

impl<R: BufRead> KeyedFileReader<R> {
    pub fn from_reader(source: R, options: ReaderOptions) -> Result<KeyedFileReader<R>, OpenError> {
        let mut reader = KeyedFileReader {
            source: Some(source),
            path: None,
            options,
            key_row: KeyRow::default(),
            line: 0,
            buf: Vec::new(),
        };

        reader.read_header()?;
        Ok(reader)
    }

    fn read_header(&mut self) -> Result<(), OpenError> {
        let has_line = self.fill_line().map_err(OpenError::ReadHeader)?;
        if !has_line {
            tracing::debug!("empty source, no header keys");
            return Ok(());
        }

        let encoding = self.options.encoding;
        let tokens = {
            let raw = de::strip_bom(de::trim_line_ending(&self.buf));
            let text = de::decode_line(encoding, raw).ok_or(OpenError::InvalidEncoding {
                encoding: encoding.name(),
            })?;
            owned_tokens(&text, self.options.delimiter.as_str())
        };

        if tokens.is_empty() {
            // A blank header means there is no data region at all.
            self.release();
            return Ok(());
        }

        self.key_row = KeyRow::from_tokens(tokens)?;
        tracing::debug!(keys = self.key_row.len(), "parsed header");
        Ok(())
    }

    /// Reads the next raw line into the buffer. Returns `false` once the
    /// source is exhausted, releasing it.
    fn fill_line(&mut self) -> std::io::Result<bool> {
        self.buf.clear();
        let source = match self.source.as_mut() {
            Some(source) => source,
            None => return Ok(false),
        };

        let read = source.read_until(b'\n', &mut self.buf)?;
        if read == 0 {
            self.release();
            return Ok(false);
        }
        self.line += 1;
        Ok(true)
    }

    fn release(&mut self) {
        if self.source.take().is_some() {
            tracing::debug!(line = self.line, "end of data, releasing source");
        }
    }

    /// Returns the next record, or `None` once the data region has ended.
    ///
    /// An error for one line leaves the reader usable; the following call
    /// moves on to the next line.
    pub fn next_line(&mut self) -> Result<Option<Record>, ReadError> {
        let has_line = self.fill_line().map_err(|source| ReadError::Io {
            line: self.line + 1,
            source,
        })?;
        if !has_line {
            return Ok(None);
        }

        let line = self.line;
        let encoding = self.options.encoding;
        let tokens = {
            let raw = de::trim_line_ending(&self.buf);
            let text = de::decode_line(encoding, raw).ok_or(ReadError::InvalidEncoding {
                line,
                encoding: encoding.name(),
            })?;
            owned_tokens(&text, self.options.delimiter.as_str())
        };

        if tokens.is_empty() {
            self.release();
            return Ok(None);
        }

        let expected = self.key_row.len();
        let found = tokens.len();
        if found > expected {
            return Err(ReadError::ExcessFields {
                line,
                expected,
                found,
            });
        }
        if found < expected && self.options.strict_field_count {
            return Err(ReadError::MissingFields {
                line,
                expected,
                found,
            });
        }

        tracing::trace!(line, fields = found, "read record");

        let mut record = Record::default();
        for (key, value) in self.key_row.iter().zip(tokens) {
            record.insert(key.to_string(), value);
        }
        Ok(Some(record))
    }

    /// Releases the underlying source. Later reads return `None`.
    pub fn close(&mut self) {
        self.release();
    }

    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.source.is_none()
    }
}

impl<R> KeyedFileReader<R> {
    /// A copy of the header keys, for labelling records written elsewhere.
    #[inline(always)]
    pub fn key_row(&self) -> KeyRow {
        self.key_row.clone()
    }

    #[inline(always)]
    pub fn keys(&self) -> &[String] {
        self.key_row.as_slice()
    }

    /// The path the reader was opened from, if it was opened from a file.
    #[inline(always)]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The 1-based number of the last line consumed, header included.
    #[inline(always)]
    pub fn line_number(&self) -> u64 {
        self.line
    }

    #[inline(always)]
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }
}

impl<R: BufRead> Iterator for KeyedFileReader<R> {
    type Item = Result<Record, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_line().transpose()
    }
}
