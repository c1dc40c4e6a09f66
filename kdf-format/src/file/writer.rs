use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{prelude::*, BufWriter};
use std::path::{Path, PathBuf};

use crate::{
    config::WriterOptions,
    error::{OpenError, WriteError},
    ser,
};

/// Appends delimited lines to a UTF-8 text file.
///
/// Each writer remembers the keys it has written with
/// [`write_keyed_line`](Self::write_keyed_line) and silently skips repeats.
/// Keys already present in the file from earlier runs are not known to it.
///
/// Call [`close`](Self::close) when done. Dropping an open writer still
/// flushes what it can, but any error at that point is lost.
#[derive(Debug)]
pub struct KeyedFileWriter<W: Write = BufWriter<File>> {
    pub(crate) sink: Option<W>,
    pub(crate) path: Option<PathBuf>,
    pub(crate) options: WriterOptions,
    pub(crate) key_check: HashSet<String>,
}

impl<W: Write> Drop for KeyedFileWriter<W> {
    fn drop(&mut self) {
        if self.sink.is_some() {
            tracing::warn!(
                "KeyedFileWriter dropped without calling close(). \
                 Output at {:?} may be incomplete.",
                self.path
            );
        }
    }
}

impl KeyedFileWriter<BufWriter<File>> {
    /// Opens `path` for appending, creating the file if it does not exist.
    pub fn open<P: AsRef<Path>>(
        path: P,
        options: WriterOptions,
    ) -> Result<KeyedFileWriter<BufWriter<File>>, OpenError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(path)
            .map_err(|e| OpenError::Create(e, path.to_path_buf()))?;

        tracing::debug!(path = %path.display(), "opened for append");

        let mut writer = Self::from_writer(BufWriter::new(file), options);
        writer.path = Some(path.to_path_buf());
        Ok(writer)
    }
}

impl<W: Write> KeyedFileWriter<W> {
    pub fn from_writer(sink: W, options: WriterOptions) -> KeyedFileWriter<W> {
        KeyedFileWriter {
            sink: Some(sink),
            path: None,
            options,
            key_check: HashSet::new(),
        }
    }

    #[inline(always)]
    fn sink(&mut self) -> Result<&mut W, WriteError> {
        self.sink.as_mut().ok_or(WriteError::Closed)
    }

    #[inline(always)]
    fn delimiter(&self) -> &str {
        self.options.delimiter.as_str()
    }

    /// Writes `key` followed by every element, each with a trailing
    /// delimiter, then ends the line.
    ///
    /// Returns `Ok(false)` without writing anything if this writer has
    /// already written a line under `key`. The key is only remembered once
    /// the line has been written successfully.
    pub fn write_keyed_line<I, S>(&mut self, key: &str, elements: I) -> Result<bool, WriteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.sink.is_none() {
            return Err(WriteError::Closed);
        }

        if self.key_check.contains(key) {
            tracing::debug!(key, "key already written, skipping line");
            return Ok(false);
        }

        let line = ser::keyed_line(key, elements, self.delimiter(), self.options.line_ending);
        self.sink()?.write_all(line.as_bytes())?;
        self.key_check.insert(key.to_string());

        tracing::trace!(key, bytes = line.len(), "wrote keyed line");
        Ok(true)
    }

    /// Appends `element` and the delimiter, without ending the line.
    pub fn write_token<S: AsRef<str>>(&mut self, element: S) -> Result<&mut Self, WriteError> {
        let mut token = String::new();
        ser::push_token(&mut token, element.as_ref(), self.delimiter());
        self.sink()?.write_all(token.as_bytes())?;
        Ok(self)
    }

    /// Ends the current line. No delimiter is added.
    pub fn end_line(&mut self) -> Result<&mut Self, WriteError> {
        let ending = self.options.line_ending.as_str();
        self.sink()?.write_all(ending.as_bytes())?;
        Ok(self)
    }

    /// Writes a whole comment line.
    ///
    /// With no prefix the line starts with `#` and the delimiter. An empty
    /// prefix writes `text` alone, and any other prefix replaces the `#`.
    /// Comment lines are not understood by the reader.
    pub fn write_comment<S: AsRef<str>>(
        &mut self,
        text: S,
        prefix: Option<&str>,
    ) -> Result<&mut Self, WriteError> {
        let line = ser::comment_line(
            text.as_ref(),
            prefix,
            self.delimiter(),
            self.options.line_ending,
        );
        self.sink()?.write_all(line.as_bytes())?;
        Ok(self)
    }

    pub fn flush(&mut self) -> Result<(), WriteError> {
        self.sink()?.flush()?;
        Ok(())
    }

    /// Flushes and releases the sink. Closing twice is a no-op.
    ///
    /// If the flush fails the sink is still released, so the writer counts
    /// as closed either way.
    pub fn close(&mut self) -> Result<(), WriteError> {
        let mut sink = match self.sink.take() {
            Some(sink) => sink,
            None => return Ok(()),
        };

        tracing::debug!(keys = self.key_check.len(), "closing writer");
        sink.flush()?;
        Ok(())
    }

    /// Flushes and hands back the sink, consuming the writer.
    pub fn into_inner(mut self) -> Result<W, WriteError> {
        let mut sink = self.sink.take().ok_or(WriteError::Closed)?;
        sink.flush()?;
        Ok(sink)
    }

    #[inline(always)]
    pub fn get_ref(&self) -> Option<&W> {
        self.sink.as_ref()
    }

    #[inline(always)]
    pub fn is_closed(&self) -> bool {
        self.sink.is_none()
    }

    /// Whether this writer has already written a line under `key`.
    #[inline(always)]
    pub fn has_key(&self, key: &str) -> bool {
        self.key_check.contains(key)
    }

    #[inline(always)]
    pub fn key_count(&self) -> usize {
        self.key_check.len()
    }

    #[inline(always)]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[inline(always)]
    pub fn options(&self) -> &WriterOptions {
        &self.options
    }
}
