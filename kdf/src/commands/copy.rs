use std::path::Path;

use kdf_format::{ReaderOptions, WriterOptions};

use crate::error::{Error, Result};

fn same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Appends the header and every record of `source` to `destination`, keyed
/// by the first header column. Records repeating an earlier key are skipped.
///
/// The header is written as plain tokens, so a record whose key matches the
/// first header name is still copied.
pub fn copy(
    source: &Path,
    destination: &Path,
    reader_options: ReaderOptions,
    writer_options: WriterOptions,
) -> Result<()> {
    if same_file(source, destination) {
        return Err(Error::SameFile {
            path: source.to_path_buf(),
        });
    }

    let mut reader = super::open_reader(source, reader_options)?;
    let keys = reader.key_row();
    if keys.is_empty() {
        return Err(Error::NoHeader {
            path: source.to_path_buf(),
        });
    }

    let mut writer = super::open_writer(destination, writer_options)?;
    for key in keys.iter() {
        writer
            .write_token(key)
            .map_err(super::write_error(destination))?;
    }
    writer
        .end_line()
        .map_err(super::write_error(destination))?;

    let (mut written, mut skipped) = (0u64, 0u64);
    while let Some(record) = reader.next_line().map_err(|e| Error::ReadRecord {
        path: source.to_path_buf(),
        source: e,
    })? {
        let mut values = record.values_in(&keys);
        let key = match values.next() {
            Some(key) => key,
            None => continue,
        };

        if writer
            .write_keyed_line(key, values)
            .map_err(super::write_error(destination))?
        {
            written += 1;
        } else {
            tracing::debug!(key, "duplicate key, record skipped");
            skipped += 1;
        }
    }

    writer.close().map_err(super::write_error(destination))?;
    eprintln!("{} records written, {} skipped", written, skipped);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kdf_format::LineEnding;
    use tempfile::TempDir;

    fn lf_options() -> WriterOptions {
        WriterOptions::new().line_ending(LineEnding::Lf)
    }

    #[test]
    fn record_keyed_like_header_is_copied() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("src.csv");
        let dst = dir.path().join("dst.csv");
        std::fs::write(&src, "id,name\nid,x\n1,y\n1,z\n").unwrap();

        copy(&src, &dst, ReaderOptions::new(), lf_options()).unwrap();

        assert_eq!(
            std::fs::read_to_string(&dst).unwrap(),
            "id,name,\nid,x,\n1,y,\n"
        );
    }

    #[test]
    fn refuses_same_file_through_other_path() {
        let dir = TempDir::new().unwrap();
        let src = dir.path().join("a.csv");
        std::fs::write(&src, "id,name\n1,x\n").unwrap();
        let dst = dir.path().join(".").join("a.csv");

        let result = copy(&src, &dst, ReaderOptions::new(), lf_options());
        assert!(matches!(result, Err(Error::SameFile { .. })));
        assert_eq!(std::fs::read_to_string(&src).unwrap(), "id,name\n1,x\n");
    }
}
