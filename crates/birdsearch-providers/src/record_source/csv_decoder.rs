//! CSV decoding of the bird corpus
//!
//! Columns are matched by header name (`name`, `scientific name`,
//! `presence`, `order`, `family`). Extra columns are ignored and missing
//! columns or short rows decode as empty strings. Surrounding whitespace is
//! trimmed from headers and fields.

use std::io::Read;

use csv::StringRecord;

use birdsearch_domain::entities::BirdRecord;
use birdsearch_domain::error::{Error, Result};

/// Position of each known column in the header row
#[derive(Debug, Clone, Copy)]
struct ColumnLayout {
    name: Option<usize>,
    scientific_name: Option<usize>,
    presence: Option<usize>,
    order: Option<usize>,
    family: Option<usize>,
}

impl ColumnLayout {
    fn from_headers(headers: &StringRecord) -> Self {
        let position = |column: &str| headers.iter().position(|h| h == column);
        Self {
            name: position("name"),
            scientific_name: position("scientific name"),
            presence: position("presence"),
            order: position("order"),
            family: position("family"),
        }
    }

    fn record(&self, row: &StringRecord) -> BirdRecord {
        let field = |pos: Option<usize>| pos.and_then(|p| row.get(p)).unwrap_or("");
        BirdRecord::new(
            field(self.name),
            field(self.scientific_name),
            field(self.presence),
            field(self.order),
            field(self.family),
        )
    }
}

/// Decode every data row of a headed CSV document, in file order
///
/// `origin` names the document in error messages.
pub fn decode_records<R: Read>(reader: R, origin: &str) -> Result<Vec<BirdRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let layout = ColumnLayout::from_headers(
        csv_reader
            .headers()
            .map_err(|e| Error::ingestion_with_source(format!("Malformed CSV header in {origin}"), e))?,
    );

    csv_reader
        .records()
        .enumerate()
        .map(|(row, result)| {
            result.map(|record| layout.record(&record)).map_err(|e| {
                // header is line 1, first data row is line 2
                Error::ingestion_with_source(
                    format!("Malformed CSV row {} in {origin}", row + 2),
                    e,
                )
            })
        })
        .collect()
}

/// Decode a CSV document held in memory
pub fn decode_bytes(bytes: &[u8], origin: &str) -> Result<Vec<BirdRecord>> {
    decode_records(bytes, origin)
}
