//! Input and output files
//!
//! Names come in one per line; records go out one per line. Both UTF-8.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::protocol::EntityRecord;

/// Read entity names, one per line, in file order
pub fn read_names(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_owned).collect())
}

/// Write lines to `path`, replacing any previous content
pub fn write_lines<I, S>(path: &Path, lines: I) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write one formatted line per record
pub fn write_records(path: &Path, records: &[EntityRecord]) -> Result<()> {
    write_lines(path, records.iter().map(EntityRecord::format))
}
