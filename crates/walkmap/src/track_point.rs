use geo::{Coord, Point};
use jiff::Timestamp;

use crate::error::{FieldError, RecordError};

/// Layout of the timestamp column, e.g. `2020-05-01 10:00:00 +0200`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

/// A single timestamped GPS fix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPoint {
    timestamp: Timestamp,
    point: Point<f64>,
}

impl TrackPoint {
    pub fn from_lat_lon(timestamp: Timestamp, lat: f64, lon: f64) -> Self {
        Self {
            timestamp,
            point: Point::new(lon, lat),
        }
    }

    /// Parses `time;lat;lon[;...]`. Columns past the third are ignored and no
    /// column is trimmed. Every column that fails to parse is reported.
    pub fn from_fields<'a, I>(fields: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields = fields.into_iter().collect::<Vec<_>>();
        if fields.len() < 3 {
            return Err(RecordError::TooFewFields(fields.len()));
        }

        let mut errors = Vec::with_capacity(3);

        let timestamp = Timestamp::strptime(TIME_FORMAT, fields[0])
            .map_err(|source| {
                errors.push(FieldError::Time {
                    value: fields[0].to_owned(),
                    source,
                })
            })
            .ok();

        let lat = fields[1]
            .parse::<f64>()
            .map_err(|source| {
                errors.push(FieldError::Latitude {
                    value: fields[1].to_owned(),
                    source,
                })
            })
            .ok();

        let lon = fields[2]
            .parse::<f64>()
            .map_err(|source| {
                errors.push(FieldError::Longitude {
                    value: fields[2].to_owned(),
                    source,
                })
            })
            .ok();

        match (timestamp, lat, lon) {
            (Some(timestamp), Some(lat), Some(lon)) => {
                Ok(Self::from_lat_lon(timestamp, lat, lon))
            }
            _ => Err(RecordError::InvalidFields(errors)),
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn point(&self) -> Point<f64> {
        self.point
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }
}

impl From<&TrackPoint> for Coord<f64> {
    fn from(track_point: &TrackPoint) -> Self {
        track_point.point.into()
    }
}

impl From<&TrackPoint> for Point<f64> {
    fn from(track_point: &TrackPoint) -> Self {
        track_point.point
    }
}
