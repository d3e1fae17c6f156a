//! Fuzz target for the data parser.
//!
//! This fuzzer tests that the delimited-text parser:
//! 1. Never panics on malformed input
//! 2. Handles every supported delimiter and auto-detection
//! 3. Always yields rows at least as wide as the header

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use tabstat::{Parser, ParserConfig};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    for delimiter in [b',', b'\t', b';', b'|'] {
        if let Ok(table) = Parser::new().parse_bytes(data, delimiter) {
            assert!(table.rows.iter().all(|r| r.len() >= table.column_count()));
        }
    }

    // Auto-detection goes through the file path.
    if let Ok(mut temp_file) = tempfile::NamedTempFile::new() {
        if temp_file.write_all(data).is_ok() {
            let parser = Parser::with_config(ParserConfig {
                delimiter: None,
                ..ParserConfig::default()
            });
            let _ = parser.parse_file(temp_file.path());
        }
    }
});
