use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::error::{DataError, Result};
use super::model::SortedData;

/// Output file used when the user does not name one.
pub const DEFAULT_OUTPUT_FILE: &str = "sorted_data.txt";

/// Write sorted values, one rendered value per line, replacing `path`.
pub fn save_file(data: &SortedData, path: &Path) -> Result<()> {
    save_lines(data.render(), path)?;
    log::info!("Saved {} {} to {}", data.len(), data.kind(), path.display());
    Ok(())
}

/// Write any displayable values, one per line, replacing `path`.
pub fn save_lines<I>(lines: I, path: &Path) -> Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    write_lines(lines, path).map_err(|source| DataError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn write_lines<I>(lines: I, path: &Path) -> std::io::Result<()>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
