//! Dataset record sink. One CSV row per emitted payload.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One finished dataset row.
///
/// `has_pii` is true iff `pii_types` is non-empty, and `categories[i]`
/// is the category owning `pii_types[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetRecord {
    pub payload: String,
    pub has_pii: bool,
    pub pii_types: Vec<String>,
    pub categories: Vec<String>,
}

/// Sink accepting finished records. Write failures are fatal to the
/// run; the dataset cannot be partially trusted after one.
pub trait DatasetSink: Send {
    fn write(&mut self, record: &DatasetRecord) -> Result<()>;

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// CSV sink with columns `payload, has_pii, pii_types, categories`.
/// The pipe quote character keeps embedded double quotes in payloads
/// from interfering with downstream readers.
pub struct CsvSink<W: Write + Send> {
    writer: csv::Writer<W>,
}

impl CsvSink<File> {
    /// Create the output file (and parent directories) and write the
    /// header row.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create output directory {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("failed to create output file {}", path.display()))?;
        Self::from_writer(file)
    }
}

impl<W: Write + Send> CsvSink<W> {
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new().quote(b'|').from_writer(writer);
        writer
            .write_record(["payload", "has_pii", "pii_types", "categories"])
            .context("failed to write dataset header")?;
        Ok(Self { writer })
    }

    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("failed to flush dataset sink: {e}"))
    }
}

impl<W: Write + Send> DatasetSink for CsvSink<W> {
    fn write(&mut self, record: &DatasetRecord) -> Result<()> {
        self.writer
            .write_record([
                record.payload.as_str(),
                if record.has_pii { "1" } else { "0" },
                &record.pii_types.join(","),
                &record.categories.join(","),
            ])
            .context("failed to write dataset record")
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().context("failed to flush dataset sink")
    }
}

/// In-memory sink for tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<DatasetRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DatasetSink for MemorySink {
    fn write(&mut self, record: &DatasetRecord) -> Result<()> {
        self.records.push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_row_shape() {
        let mut sink = CsvSink::from_writer(Vec::new()).unwrap();
        sink.write(&DatasetRecord {
            payload: r#"{"email":"a@b.test"}"#.to_string(),
            has_pii: true,
            pii_types: vec!["email".to_string(), "person".to_string()],
            categories: vec!["contact".to_string(), "name".to_string()],
        })
        .unwrap();
        let bytes = sink.into_inner().unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "payload,has_pii,pii_types,categories");
        let row = lines.next().unwrap();
        assert!(row.contains(",1,"));
        assert!(row.contains("email,person"));
        assert!(row.contains("contact,name"));
    }

    #[test]
    fn test_payload_with_commas_is_quoted_with_pipe() {
        let mut sink = CsvSink::from_writer(Vec::new()).unwrap();
        sink.write(&DatasetRecord {
            payload: r#"{"a":1,"b":2}"#.to_string(),
            has_pii: false,
            pii_types: vec![],
            categories: vec![],
        })
        .unwrap();
        let text = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with(r#"|{"a":1,"b":2}|"#));
        assert!(row.ends_with(",0,,"));
    }
}
