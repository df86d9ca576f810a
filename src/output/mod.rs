// src/output/mod.rs

//! Record sinks for finished sample collections.
//!
//! The table layout is fixed: one header record holding the single field
//! `Bitstring`, then one single-field record per sample in generation order.
//! [`write_csv_file`] stages the table next to its destination and only moves
//! it into place once every record was written, so a failed run never leaves a
//! truncated table behind.

use crate::core::CollapseError;
use crate::simulation::SampleCollection;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Header field of the output table.
pub const BITSTRING_HEADER: &str = "Bitstring";

/// Destination for tabular records.
pub trait RecordSink {
    /// Writes one record. The first record written is the header.
    fn write_record(&mut self, fields: &[&str]) -> Result<(), CollapseError>;

    /// Flushes buffered records. Called once after the last record.
    fn finish(&mut self) -> Result<(), CollapseError> {
        Ok(())
    }
}

/// Writes the header and every sample of `collection` to `sink`, then finishes it.
///
/// Stops at the first sink error and returns it.
pub fn write_collection<S>(sink: &mut S, collection: &SampleCollection) -> Result<(), CollapseError>
where
    S: RecordSink + ?Sized,
{
    sink.write_record(&[BITSTRING_HEADER])?;
    for sample in collection {
        sink.write_record(&[sample.as_str()])?;
    }
    sink.finish()
}

/// CSV encoder over any `io::Write`. Records end with `\n`.
#[derive(Debug)]
pub struct CsvSink<W: Write> {
    writer: W,
}

impl<W: Write> CsvSink<W> {
    /// Wraps `writer`. Buffering is left to the caller.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_record(&mut self, fields: &[&str]) -> Result<(), CollapseError> {
        for (i, field) in fields.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b",")?;
            }
            write_field(&mut self.writer, field)?;
        }
        self.writer.write_all(b"\n")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CollapseError> {
        self.writer.flush()?;
        Ok(())
    }
}

// Fields containing a delimiter, quote, line break or leading blank are quoted, with quotes doubled.
fn write_field<W: Write>(writer: &mut W, field: &str) -> std::io::Result<()> {
    let needs_quotes = field.contains([',', '"', '\n', '\r']) || field.starts_with([' ', '\t']);
    if !needs_quotes {
        return writer.write_all(field.as_bytes());
    }
    writer.write_all(b"\"")?;
    writer.write_all(field.replace('"', "\"\"").as_bytes())?;
    writer.write_all(b"\"")
}

/// Writes `collection` as CSV to `path`, replacing any existing file.
///
/// The table is first written to a sibling `<name>.partial` file and renamed
/// over `path` only after every record was flushed. On failure the staging
/// file is removed and `path` is left untouched.
pub fn write_csv_file(path: impl AsRef<Path>, collection: &SampleCollection) -> Result<(), CollapseError> {
    let path = path.as_ref();
    let staging = staging_path(path);

    match write_staged(&staging, collection) {
        Ok(()) => {
            fs::rename(&staging, path).map_err(|err| {
                discard_staging(&staging);
                CollapseError::io(path, err)
            })?;
            debug!(path = %path.display(), records = collection.len(), "table written");
            Ok(())
        }
        Err(err) => {
            discard_staging(&staging);
            Err(err)
        }
    }
}

fn write_staged(staging: &Path, collection: &SampleCollection) -> Result<(), CollapseError> {
    let file = File::create(staging).map_err(|err| CollapseError::io(staging, err))?;
    let mut sink = CsvSink::new(BufWriter::new(file));
    write_collection(&mut sink, collection).map_err(|err| match err {
        CollapseError::SinkError { message } => CollapseError::Io { path: staging.to_path_buf(), message },
        other => other,
    })?;
    let file = sink
        .into_inner()
        .into_inner()
        .map_err(|err| CollapseError::io(staging, err.into_error()))?;
    file.sync_all().map_err(|err| CollapseError::io(staging, err))
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

fn discard_staging(staging: &Path) {
    if staging.exists() {
        if let Err(err) = fs::remove_file(staging) {
            warn!(path = %staging.display(), error = %err, "could not remove partial table");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(fields: &[&str]) -> String {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_record(fields).unwrap();
        String::from_utf8(sink.into_inner()).unwrap()
    }

    #[test]
    fn test_plain_fields_are_unquoted() {
        assert_eq!(encode(&["Bitstring"]), "Bitstring\n");
        assert_eq!(encode(&["0101", "11"]), "0101,11\n");
    }

    #[test]
    fn test_special_fields_are_quoted() {
        assert_eq!(encode(&["a,b"]), "\"a,b\"\n");
        assert_eq!(encode(&["say \"hi\""]), "\"say \"\"hi\"\"\"\n");
        assert_eq!(encode(&["line\nbreak"]), "\"line\nbreak\"\n");
    }

    #[test]
    fn test_staging_path_is_a_sibling() {
        assert_eq!(staging_path(Path::new("out/table.csv")), PathBuf::from("out/table.csv.partial"));
    }
}
