//! Backing-file codec for decks.
//!
//! One record per line, `question,answer`, no header row. Fields holding a
//! comma, quote or line break are double-quoted with embedded quotes doubled.
//! Rows that do not decode into exactly two fields are skipped and reported
//! so a single bad line never costs the rest of the set.

use crate::error::Result;
use crate::models::CardRecord;
use std::io::{Read, Write};

/// A row that was dropped while decoding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line the row starts on, when the reader knows it.
    pub line: Option<u64>,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct DecodedRows {
    pub records: Vec<CardRecord>,
    pub skipped: Vec<SkippedRow>,
}

/// Decodes every row of `reader` in file order.
///
/// Only I/O failures abort; malformed rows land in `skipped`.
pub fn decode<R: Read>(reader: R) -> Result<DecodedRows> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut decoded = DecodedRows::default();

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(e.into()),
            Err(e) => {
                decoded.skipped.push(SkippedRow {
                    line: e.position().map(|p| p.line()),
                    reason: e.to_string(),
                });
                continue;
            }
        };

        // Whitespace-only lines count as blank
        if record.len() == 1 && record[0].trim().is_empty() {
            continue;
        }

        if record.len() != 2 {
            decoded.skipped.push(SkippedRow {
                line: record.position().map(|p| p.line()),
                reason: format!("expected 2 fields, found {}", record.len()),
            });
            continue;
        }

        decoded.records.push(CardRecord::new(&record[0], &record[1]));
    }

    Ok(decoded)
}

/// Writes `records` in order, one row each.
pub fn encode<'a, W, I>(records: I, writer: W) -> Result<W>
where
    W: Write,
    I: IntoIterator<Item = &'a CardRecord>,
{
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    for record in records {
        csv_writer.write_record([record.question(), record.answer()])?;
    }

    let writer = csv_writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    Ok(writer)
}

/// Encodes `records` into an in-memory buffer.
pub fn encode_to_vec<'a, I>(records: I) -> Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a CardRecord>,
{
    encode(records, Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_str(input: &str) -> DecodedRows {
        decode(input.as_bytes()).unwrap()
    }

    #[test]
    fn test_decode_plain_rows() {
        let decoded = decode_str("Paris,capital of France\nTokyo,capital of Japan\n");

        assert_eq!(
            decoded.records,
            vec![
                CardRecord::new("Paris", "capital of France"),
                CardRecord::new("Tokyo", "capital of Japan"),
            ]
        );
        assert!(decoded.skipped.is_empty());
    }

    #[test]
    fn test_decode_without_trailing_newline_and_crlf() {
        let decoded = decode_str("a,b\r\nc,d");
        assert_eq!(
            decoded.records,
            vec![CardRecord::new("a", "b"), CardRecord::new("c", "d")]
        );
    }

    #[test]
    fn test_decode_ignores_blank_lines() {
        let decoded = decode_str("a,b\n\n   \nc,d\n");
        assert_eq!(decoded.records.len(), 2);
        assert!(decoded.skipped.is_empty());
    }

    #[test]
    fn test_decode_skips_malformed_rows() {
        let decoded = decode_str("a,b\nonly one field\nx,y,z\nc,d\n");

        assert_eq!(
            decoded.records,
            vec![CardRecord::new("a", "b"), CardRecord::new("c", "d")]
        );
        assert_eq!(decoded.skipped.len(), 2);
        assert_eq!(decoded.skipped[0].line, Some(2));
        assert_eq!(decoded.skipped[1].line, Some(3));
        assert!(decoded.skipped[1].reason.contains("found 3"));
    }

    #[test]
    fn test_decode_quoted_fields() {
        let decoded = decode_str("\"Hello, world\",\"say \"\"hi\"\"\"\n\"multi\nline\",x\n");

        assert_eq!(
            decoded.records,
            vec![
                CardRecord::new("Hello, world", "say \"hi\""),
                CardRecord::new("multi\nline", "x"),
            ]
        );
    }

    #[test]
    fn test_decode_keeps_surrounding_spaces() {
        let decoded = decode_str(" a , b \n");
        assert_eq!(decoded.records, vec![CardRecord::new(" a ", " b ")]);
    }

    #[test]
    fn test_encode_quotes_only_when_needed() {
        let records = vec![
            CardRecord::new("Paris", "capital of France"),
            CardRecord::new("a,b", "say \"hi\""),
        ];

        let bytes = encode_to_vec(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(
            text,
            "Paris,capital of France\n\"a,b\",\"say \"\"hi\"\"\"\n"
        );
    }

    #[test]
    fn test_encode_then_decode_preserves_awkward_text() {
        let records = vec![
            CardRecord::new("line\nbreak", "comma, inside"),
            CardRecord::new("", ""),
            CardRecord::new("zażółć", "\"quoted\""),
        ];

        let bytes = encode_to_vec(&records).unwrap();
        let decoded = decode(bytes.as_slice()).unwrap();

        assert_eq!(decoded.records, records);
        assert!(decoded.skipped.is_empty());
    }

    #[test]
    fn test_encode_empty_deck_writes_nothing() {
        let bytes = encode_to_vec(&Vec::<CardRecord>::new()).unwrap();
        assert!(bytes.is_empty());
    }
}
