use std::io::Read;

use tracing::warn;

use crate::{error::ReadError, track_point::TrackPoint};

pub const DEFAULT_DELIMITER: u8 = b';';

/// Reads track points from headerless delimited text, one fix per row.
///
/// Rows only need to have at least three columns, longer rows are accepted.
pub struct TrackReader<R> {
    records: csv::StringRecordsIntoIter<R>,
}

impl<R: Read> TrackReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_delimiter(reader, DEFAULT_DELIMITER)
    }

    pub fn with_delimiter(reader: R, delimiter: u8) -> Self {
        let records = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(reader)
            .into_records();

        Self { records }
    }

    /// Valid points only. Rows that fail to read are logged and skipped.
    pub fn points(self) -> impl Iterator<Item = TrackPoint> {
        self.filter_map(|result| match result {
            Ok(point) => Some(point),
            Err(error) => {
                warn!("Skipping row: {}", error);
                None
            }
        })
    }
}

impl<R: Read> Iterator for TrackReader<R> {
    type Item = Result<TrackPoint, ReadError>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(error) => return Some(Err(ReadError::from(error))),
        };

        let line = record.position().map_or(0, |position| position.line());

        Some(
            TrackPoint::from_fields(record.iter())
                .map_err(|source| ReadError::Record { line, source }),
        )
    }
}
