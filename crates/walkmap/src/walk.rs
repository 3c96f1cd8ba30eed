use geo::LineString;
use jiff::SignedDuration;

use crate::meters::Meters;

/// A walk: the path that was followed, how far it went and how long it took.
///
/// The distance is stored as given and is not derived from the path, callers
/// are responsible for keeping the two consistent. Nothing is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Walk {
    path: LineString<f64>,
    distance_traveled_meters: f64,
    total_time: SignedDuration,
}

impl Walk {
    pub fn new(
        path: LineString<f64>,
        distance_traveled_meters: f64,
        total_time: SignedDuration,
    ) -> Self {
        Walk {
            path,
            distance_traveled_meters,
            total_time,
        }
    }

    /// Coordinates in the order they were walked, x is longitude and y is latitude.
    pub fn path(&self) -> &LineString<f64> {
        &self.path
    }

    pub fn distance_traveled_meters(&self) -> f64 {
        self.distance_traveled_meters
    }

    pub fn distance_traveled(&self) -> Meters {
        Meters::new(self.distance_traveled_meters)
    }

    pub fn total_time(&self) -> SignedDuration {
        self.total_time
    }

    pub fn into_parts(self) -> (LineString<f64>, f64, SignedDuration) {
        (self.path, self.distance_traveled_meters, self.total_time)
    }
}
