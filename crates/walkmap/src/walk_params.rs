use jiff::SignedDuration;

use crate::{
    distance_method::DistanceMethod, segment::DEFAULT_MAX_GAP, track_reader::DEFAULT_DELIMITER,
};

pub const DEFAULT_MIN_POINTS: usize = 2;

#[derive(Debug, Clone)]
pub struct WalkParams {
    /// Longest pause between two fixes that still belongs to the same walk.
    pub max_gap: SignedDuration,
    /// Segments with fewer points are not turned into walks.
    pub min_points: usize,
    pub distance_method: DistanceMethod,
    pub delimiter: u8,
}

impl Default for WalkParams {
    fn default() -> Self {
        Self {
            max_gap: DEFAULT_MAX_GAP,
            min_points: DEFAULT_MIN_POINTS,
            distance_method: DistanceMethod::default(),
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl WalkParams {
    pub fn with_max_gap(mut self, max_gap: SignedDuration) -> Self {
        self.max_gap = max_gap;
        self
    }

    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    pub fn with_distance_method(mut self, distance_method: DistanceMethod) -> Self {
        self.distance_method = distance_method;
        self
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}
