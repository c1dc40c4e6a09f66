use std::fmt;

use encoding_rs::Encoding;

use crate::error::ConfigError;

pub const DEFAULT_DELIMITER: &str = ",";

/// The separator placed between fields on a line. Never empty.
///
/// Matching is literal: `"|"` splits on a pipe character, not on a pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Delimiter(String);

impl Delimiter {
    pub fn new<S: Into<String>>(value: S) -> Result<Delimiter, ConfigError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(Delimiter(value))
    }

    #[inline(always)]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Delimiter {
    fn default() -> Self {
        Delimiter(DEFAULT_DELIMITER.to_string())
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Delimiter {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Delimiter::new(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    Lf,
    CrLf,
}

impl LineEnding {
    #[cfg(windows)]
    pub const PLATFORM: LineEnding = LineEnding::CrLf;
    #[cfg(not(windows))]
    pub const PLATFORM: LineEnding = LineEnding::Lf;

    #[inline(always)]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

impl Default for LineEnding {
    fn default() -> Self {
        LineEnding::PLATFORM
    }
}

/// Options used when opening a [`KeyedFileReader`](crate::KeyedFileReader).
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    pub(crate) delimiter: Delimiter,
    pub(crate) encoding: &'static Encoding,
    pub(crate) strict_field_count: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions {
            delimiter: Delimiter::default(),
            encoding: encoding_rs::UTF_8,
            strict_field_count: false,
        }
    }
}

impl ReaderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the encoding used to decode input lines.
    ///
    /// Lines are split on `\n` bytes before decoding, so only encodings that
    /// keep ASCII bytes intact are accepted.
    pub fn encoding(mut self, encoding: &'static Encoding) -> Result<Self, ConfigError> {
        if !encoding.is_ascii_compatible() {
            return Err(ConfigError::UnsupportedEncoding(encoding.name().to_string()));
        }
        self.encoding = encoding;
        Ok(self)
    }

    /// Looks up an encoding by its WHATWG label, such as `"latin1"` or `"utf-8"`.
    pub fn encoding_label(self, label: &str) -> Result<Self, ConfigError> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ConfigError::UnknownEncoding(label.to_string()))?;
        self.encoding(encoding)
    }

    /// When set, a data line with fewer fields than the header is an error
    /// instead of a partial record.
    pub fn strict_field_count(mut self, strict: bool) -> Self {
        self.strict_field_count = strict;
        self
    }

    #[inline(always)]
    pub fn get_delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    #[inline(always)]
    pub fn get_encoding(&self) -> &'static Encoding {
        self.encoding
    }
}

/// Options used when opening a [`KeyedFileWriter`](crate::KeyedFileWriter).
///
/// Output is always UTF-8.
#[derive(Debug, Clone, Default)]
pub struct WriterOptions {
    pub(crate) delimiter: Delimiter,
    pub(crate) line_ending: LineEnding,
}

impl WriterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    #[inline(always)]
    pub fn get_delimiter(&self) -> &Delimiter {
        &self.delimiter
    }

    #[inline(always)]
    pub fn get_line_ending(&self) -> LineEnding {
        self.line_ending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_delimiter_rejected() {
        assert!(matches!(Delimiter::new(""), Err(ConfigError::EmptyDelimiter)));
        assert_eq!(Delimiter::new("\t").unwrap().as_str(), "\t");
        assert_eq!(Delimiter::default().as_str(), ",");
    }

    #[test]
    fn encoding_labels() {
        let opts = ReaderOptions::new().encoding_label("latin1").unwrap();
        assert_eq!(opts.get_encoding(), encoding_rs::WINDOWS_1252);

        assert!(matches!(
            ReaderOptions::new().encoding_label("utf-16le"),
            Err(ConfigError::UnsupportedEncoding(_))
        ));
        assert!(matches!(
            ReaderOptions::new().encoding_label("not-a-charset"),
            Err(ConfigError::UnknownEncoding(_))
        ));
    }
}
