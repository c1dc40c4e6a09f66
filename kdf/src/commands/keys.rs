use std::io::Write;
use std::path::Path;

use kdf_format::ReaderOptions;

use crate::error::{Error, Result};

pub fn keys(path: &Path, options: ReaderOptions) -> Result<()> {
    let mut reader = super::open_reader(path, options)?;
    reader.close();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for key in reader.keys() {
        writeln!(out, "{}", key).map_err(|source| Error::Stdout { source })?;
    }

    Ok(())
}
