use std::io::Read;

use anyhow::{Context, Result};
use csv::ByteRecord;

use crate::domain::entities::table::{RawCell, RawTable};

const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Picks the candidate occurring most often (outside quotes) on the header
/// line. Ties go to the earlier candidate, so plain files stay comma-separated.
pub fn detect_delimiter(data: &[u8]) -> u8 {
    let header_line = data
        .split(|byte| *byte == b'\n')
        .next()
        .unwrap_or_default();

    let mut counts = [0_usize; CANDIDATE_DELIMITERS.len()];
    let mut in_quotes = false;
    for byte in header_line {
        if *byte == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        if let Some(idx) = CANDIDATE_DELIMITERS.iter().position(|d| d == byte) {
            counts[idx] += 1;
        }
    }

    let mut best = 0;
    for (idx, count) in counts.iter().enumerate() {
        if *count > counts[best] {
            best = idx;
        }
    }
    CANDIDATE_DELIMITERS[best]
}

fn decode(field: &[u8]) -> String {
    String::from_utf8_lossy(field).into_owned()
}

/// Reads delimited text into a [`RawTable`]. Every cell stays text; typing
/// happens during normalization.
pub fn read_csv_table<R: Read>(mut input: R) -> Result<RawTable> {
    let mut data = Vec::new();
    input
        .read_to_end(&mut data)
        .context("failed to read csv input")?;

    let delimiter = detect_delimiter(&data);
    tracing::debug!(delimiter = %char::from(delimiter), "detected csv delimiter");

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_reader(data.as_slice());

    let headers = reader
        .byte_headers()
        .context("failed to read csv headers")?
        .iter()
        .map(decode)
        .collect::<Vec<_>>();

    if headers.iter().all(|header| header.trim().is_empty()) {
        anyhow::bail!("csv header is required")
    }

    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    while reader
        .read_byte_record(&mut record)
        .context("failed to parse csv record")?
    {
        rows.push(record.iter().map(|field| RawCell::text(decode(field))).collect());
    }

    Ok(RawTable::new(headers, rows))
}
