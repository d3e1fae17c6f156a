//! Delimited-text parser: comma by default, other delimiters on request or
//! sniffed from the first lines.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::debug;

use super::source::{DataTable, SourceMetadata};
use crate::error::{Result, TabstatError};

/// Candidates for detection, in order of preference on a tie.
const CANDIDATES: [u8; 4] = [b'\t', b',', b';', b'|'];

/// Records inspected when sniffing the delimiter.
const SNIFF_RECORDS: usize = 10;

/// Parser configuration.
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Field delimiter; `None` sniffs it from the data.
    pub delimiter: Option<u8>,
    /// Stop after this many data rows.
    pub max_rows: Option<usize>,
    pub quote: u8,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            delimiter: Some(b','),
            max_rows: None,
            quote: b'"',
        }
    }
}

impl ParserConfig {
    /// Resolve a delimiter name as given on the command line.
    ///
    /// `auto` maps to `None` (detect from the file contents).
    pub fn delimiter_from_name(name: &str) -> Result<Option<u8>> {
        match name.to_lowercase().as_str() {
            "auto" => Ok(None),
            "," | "comma" | "csv" => Ok(Some(b',')),
            "\\t" | "\t" | "tab" | "tsv" => Ok(Some(b'\t')),
            ";" | "semicolon" => Ok(Some(b';')),
            "|" | "pipe" => Ok(Some(b'|')),
            other => Err(TabstatError::InvalidDelimiter(other.to_string())),
        }
    }
}

/// Loads delimited files into a [`DataTable`].
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Read, hash and parse a file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        let path = path.as_ref();
        let contents = fs::read(path).map_err(|source| TabstatError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => self.sniff_delimiter(&contents)?,
        };
        let table = self.parse_bytes(&contents, delimiter)?;

        let format = format_name(delimiter);
        debug!(
            path = %path.display(),
            format,
            rows = table.row_count(),
            columns = table.column_count(),
            "parsed source file"
        );

        let metadata = SourceMetadata::new(
            path.to_path_buf(),
            sha256_hex(&contents),
            contents.len() as u64,
            format.to_string(),
            table.row_count(),
            table.column_count(),
        );
        Ok((table, metadata))
    }

    /// Parse in-memory data whose first record is the header.
    ///
    /// Wholly blank lines are skipped, not read as rows. A header-only input
    /// is a valid, empty table. Input without even a header is `EmptyData`.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<DataTable> {
        let mut reader = self.reader(bytes, delimiter, true);

        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        if headers.is_empty() {
            return Err(TabstatError::EmptyData("No header row found".to_string()));
        }

        let limit = self.config.max_rows.unwrap_or(usize::MAX);
        let rows = reader
            .records()
            .take(limit)
            .map(|record| -> Result<Vec<String>> {
                Ok(record?.iter().map(String::from).collect())
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(DataTable::new(headers, rows, delimiter))
    }

    /// Pick the candidate that splits the first records into the same
    /// number of fields most often, preferring more fields.
    fn sniff_delimiter(&self, bytes: &[u8]) -> Result<u8> {
        let mut best: Option<(bool, usize, u8)> = None;

        for delimiter in CANDIDATES {
            let widths: Vec<usize> = self
                .reader(bytes, delimiter, false)
                .records()
                .take(SNIFF_RECORDS)
                .filter_map(|r| r.ok())
                .map(|r| r.len())
                .collect();

            let Some(&first) = widths.first() else {
                return Err(TabstatError::EmptyData("No lines to analyze".to_string()));
            };
            if first < 2 {
                continue;
            }

            let consistent = widths.iter().all(|&w| w == first);
            let candidate = (consistent, first, delimiter);
            // Strict comparison keeps the earlier candidate on a tie.
            if best.is_none_or(|(c, w, _)| (consistent, first) > (c, w)) {
                best = Some(candidate);
            }
        }

        Ok(best.map_or(b',', |(_, _, d)| d))
    }

    fn reader<'b>(&self, bytes: &'b [u8], delimiter: u8, headers: bool) -> csv::Reader<&'b [u8]> {
        csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .quote(self.config.quote)
            .has_headers(headers)
            .flexible(true)
            .from_reader(bytes)
    }
}

fn format_name(delimiter: u8) -> &'static str {
    match delimiter {
        b',' => "csv",
        b'\t' => "tsv",
        b';' => "csv-semicolon",
        b'|' => "psv",
        _ => "delimited",
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    format!("sha256:{:x}", Sha256::digest(bytes))
}
