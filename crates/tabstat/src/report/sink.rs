//! Writers for the accumulated report.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::record::OutputRecord;
use crate::error::{Result, TabstatError};

/// Column order of the tabular report.
const FIELDS: [&str; 5] = ["analysis_type", "group_info", "column_name", "metric", "value"];

/// Report file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl OutputFormat {
    /// File extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Destination for report records.
pub trait RecordSink {
    /// Write all records, preserving their order.
    fn write_records(&mut self, records: &[OutputRecord]) -> Result<()>;
}

/// Writes records as CSV with a header row.
pub struct CsvSink<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(inner),
        }
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| TabstatError::Persistence(format!("Failed to flush CSV output: {}", e)))
    }
}

impl<W: Write> RecordSink for CsvSink<W> {
    fn write_records(&mut self, records: &[OutputRecord]) -> Result<()> {
        self.writer.write_record(FIELDS)?;
        for record in records {
            let value = record.value.to_string();
            self.writer.write_record([
                record.analysis_type.as_str(),
                record.group_info.as_str(),
                record.column_name.as_str(),
                record.metric.as_str(),
                value.as_str(),
            ])?;
        }
        self.writer
            .flush()
            .map_err(|e| TabstatError::Persistence(format!("Failed to flush CSV output: {}", e)))
    }
}

/// Writes records as a pretty-printed JSON array.
pub struct JsonSink<W: Write> {
    inner: W,
}

impl<W: Write> JsonSink<W> {
    /// Wrap a writer.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Return the underlying writer.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> RecordSink for JsonSink<W> {
    fn write_records(&mut self, records: &[OutputRecord]) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.inner, records)?;
        self.inner
            .flush()
            .map_err(|e| TabstatError::Persistence(format!("Failed to flush JSON output: {}", e)))
    }
}

/// Write a report file, creating parent directories if needed.
pub fn write_report(
    path: impl AsRef<Path>,
    format: OutputFormat,
    records: &[OutputRecord],
) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                TabstatError::Persistence(format!(
                    "Failed to create directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(path).map_err(|e| {
        TabstatError::Persistence(format!(
            "Failed to create file '{}': {}",
            path.display(),
            e
        ))
    })?;
    let writer = BufWriter::new(file);

    match format {
        OutputFormat::Csv => CsvSink::new(writer).write_records(records),
        OutputFormat::Json => JsonSink::new(writer).write_records(records),
    }
}

/// `<dir of input>/<prefix>_analysis_results.<ext>`
pub fn default_output_path(input: &Path, prefix: &str, format: OutputFormat) -> PathBuf {
    let name = format!("{}_analysis_results.{}", prefix, format.extension());
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::MetricValue;

    fn sample_records() -> Vec<OutputRecord> {
        vec![
            OutputRecord::new("Dataset_Info", "BASIC", "total_rows", 3usize),
            OutputRecord::new("Overall", "text", "most_frequent_1", "hello, world:2"),
            OutputRecord::new("Overall", "spend", "std", MetricValue::Missing),
        ]
    }

    #[test]
    fn test_csv_sink() {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_records(&sample_records()).unwrap();
        let output = String::from_utf8(sink.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "analysis_type,group_info,column_name,metric,value");
        assert_eq!(lines[1], "Dataset_Info,,BASIC,total_rows,3");
        assert_eq!(lines[2], "Overall,,text,most_frequent_1,\"hello, world:2\"");
        assert_eq!(lines[3], "Overall,,spend,std,");
    }

    #[test]
    fn test_json_sink() {
        let mut sink = JsonSink::new(Vec::new());
        sink.write_records(&sample_records()).unwrap();
        let parsed: Vec<OutputRecord> = serde_json::from_slice(&sink.into_inner()).unwrap();
        assert_eq!(parsed, sample_records());
    }

    #[test]
    fn test_write_report_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        write_report(&path, OutputFormat::Csv, &sample_records()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_default_output_path() {
        let path = default_output_path(Path::new("data/ads.csv"), "fb_ads", OutputFormat::Csv);
        assert_eq!(path, PathBuf::from("data/fb_ads_analysis_results.csv"));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
