use crate::tabulate::{Row, WORD_SEPARATOR};
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::io::{Read, Write};

/// CSV record shape: `Category,Words`.
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Words")]
    words: String,
}

pub fn write_csv<W: Write>(rows: &[Row], writer: W) -> Result<()> {
    let mut w = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        w.write_record(["Category", "Words"])?;
    }
    for row in rows {
        w.serialize(Record { category: row.category.clone(), words: row.joined_words() })?;
    }
    w.flush()?;
    Ok(())
}

pub fn to_csv_string(rows: &[Row]) -> Result<String> {
    let mut buf = Vec::new();
    write_csv(rows, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

/// Parse an export back into rows. Words are split on commas and trimmed.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Row>> {
    let mut r = csv::Reader::from_reader(reader);
    let headers = r.headers()?.clone();
    ensure!(
        headers.iter().eq(["Category", "Words"]),
        "unexpected CSV header {:?}",
        headers
    );
    let mut rows = Vec::new();
    for record in r.deserialize::<Record>() {
        let record = record?;
        let words = record
            .words
            .split(WORD_SEPARATOR.trim())
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect();
        rows.push(Row { category: record.category, words });
    }
    Ok(rows)
}
