use std::path::Path;

use kdf_format::WriterOptions;

use crate::error::Result;

pub fn append(path: &Path, options: WriterOptions, key: &str, values: &[String]) -> Result<()> {
    let mut writer = super::open_writer(path, options)?;

    let written = writer
        .write_keyed_line(key, values)
        .map_err(super::write_error(path))?;
    if !written {
        eprintln!("Key `{}` was already written; skipping.", key);
    }

    writer.close().map_err(super::write_error(path))
}

pub fn comment(path: &Path, options: WriterOptions, text: &str, prefix: Option<&str>) -> Result<()> {
    let mut writer = super::open_writer(path, options)?;
    writer
        .write_comment(text, prefix)
        .map_err(super::write_error(path))?;
    writer.close().map_err(super::write_error(path))
}
