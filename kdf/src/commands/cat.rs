use std::io::{BufWriter, Write};
use std::path::Path;

use kdf_format::ReaderOptions;

use crate::error::{Error, Result};

pub fn cat(path: &Path, options: ReaderOptions) -> Result<()> {
    let mut reader = super::open_reader(path, options)?;
    let keys = reader.key_row();
    if keys.is_empty() {
        return Err(Error::NoHeader {
            path: path.to_path_buf(),
        });
    }

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    while let Some(record) = reader.next_line().map_err(|source| Error::ReadRecord {
        path: path.to_path_buf(),
        source,
    })? {
        writeln!(out, "{}", record.to_json(&keys)).map_err(|source| Error::Stdout { source })?;
    }

    out.flush().map_err(|source| Error::Stdout { source })
}
