//! CSV export
//!
//! One header row followed by one row per accepted record, in result-number
//! order. Multi-valued columns are joined with `", "`.

use crate::output::traits::{Exporter, OutputResult};
use crate::state::{CrawlSnapshot, PublicationRecord};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column order of the exported file
pub const CSV_HEADERS: [&str; 7] = [
    "Search Query",
    "Result No.",
    "Article Title",
    "Article URL",
    "Authors",
    "Author URLs",
    "Publish Date",
];

/// One exported row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvRow {
    #[serde(rename = "Search Query")]
    pub search_query: String,
    #[serde(rename = "Result No.")]
    pub result_no: u64,
    #[serde(rename = "Article Title")]
    pub article_title: String,
    #[serde(rename = "Article URL")]
    pub article_url: String,
    #[serde(rename = "Authors")]
    pub authors: String,
    #[serde(rename = "Author URLs")]
    pub author_urls: String,
    #[serde(rename = "Publish Date")]
    pub publish_date: String,
}

impl From<&PublicationRecord> for CsvRow {
    fn from(record: &PublicationRecord) -> Self {
        Self {
            search_query: record.search_query.clone(),
            result_no: record.sequence_number,
            article_title: record.title.clone(),
            article_url: record.canonical_url.clone(),
            authors: record.author_names().join(", "),
            author_urls: record.author_profile_links().join(", "),
            publish_date: record.publish_date.clone(),
        }
    }
}

/// Writes snapshots to a CSV file
#[derive(Debug, Clone)]
pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the snapshot's rows to any writer
    pub fn write_to<W: Write>(snapshot: &CrawlSnapshot, writer: W) -> OutputResult<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        // Written explicitly so an empty snapshot still yields a header row
        csv_writer.write_record(CSV_HEADERS)?;
        for record in &snapshot.records {
            csv_writer.serialize(CsvRow::from(record))?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}

impl Exporter for CsvExporter {
    fn export(&self, snapshot: &CrawlSnapshot) -> OutputResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::File::create(&self.path)?;
        Self::write_to(snapshot, file)?;

        tracing::info!(
            "Wrote {} rows to {}",
            snapshot.records.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Author, CandidateRecord, CrawlSession};

    fn snapshot() -> CrawlSnapshot {
        let mut session = CrawlSession::new("deep learning");
        session.add_accepted(CandidateRecord {
            title: "Deep Learning Methods".to_string(),
            canonical_url: "https://portal/en/publications/deep-learning-methods".to_string(),
            authors: vec![
                Author::new("A. Smith", Some("https://portal/en/persons/a-smith".to_string())),
                Author::new("B. Jones", None),
            ],
            publish_date: "12 Mar 2020".to_string(),
        });
        session.add_unclassified(1);
        session.snapshot()
    }

    fn render(snapshot: &CrawlSnapshot) -> String {
        let mut buffer = Vec::new();
        CsvExporter::write_to(snapshot, &mut buffer).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_header_and_row() {
        let output = render(&snapshot());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(
            lines[0],
            "Search Query,Result No.,Article Title,Article URL,Authors,Author URLs,Publish Date"
        );
        assert_eq!(
            lines[1],
            "deep learning,1,Deep Learning Methods,https://portal/en/publications/deep-learning-methods,\"A. Smith, B. Jones\",\"https://portal/en/persons/a-smith, \",12 Mar 2020"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_empty_snapshot_writes_header_only() {
        let output = render(&CrawlSession::new("nothing").snapshot());
        assert_eq!(output.lines().count(), 1);
    }

    #[test]
    fn test_export_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.csv");

        CsvExporter::new(&path).export(&snapshot()).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, CSV_HEADERS);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][1], "1");
        assert_eq!(&rows[0][4], "A. Smith, B. Jones");
    }
}
