use std::io::Read;

use geo::{Coord, LineString};
use jiff::SignedDuration;
use tracing::{debug, warn};

use crate::{
    distance_method::DistanceMethod,
    error::AssembleError,
    segment::{GapSegments, SplitByGap},
    track_point::TrackPoint,
    track_reader::TrackReader,
    walk::Walk,
    walk_params::WalkParams,
};

/// Turns one segment into a walk.
///
/// The total time is the last timestamp minus the first one. Points are used
/// in the given order, so an out of order segment can produce a negative time.
/// A walk always needs at least one point, whatever `min_points` says.
pub fn assemble_walk(
    segment: &[TrackPoint],
    distance_method: DistanceMethod,
    min_points: usize,
) -> Result<Walk, AssembleError> {
    let required = min_points.max(1);

    let (Some(first), Some(last)) = (segment.first(), segment.last()) else {
        return Err(AssembleError::TooFewPoints { required, found: 0 });
    };

    if segment.len() < required {
        return Err(AssembleError::TooFewPoints {
            required,
            found: segment.len(),
        });
    }

    let total_time: SignedDuration = last.timestamp().duration_since(first.timestamp());
    let path = segment.iter().map(Coord::<f64>::from).collect::<LineString<f64>>();
    let distance = distance_method.measure(&path);

    Ok(Walk::new(path, distance.value(), total_time))
}

/// Lazily groups track points into walks.
pub struct Walks<I> {
    segments: GapSegments<I>,
    distance_method: DistanceMethod,
    min_points: usize,
}

impl<I> Walks<I>
where
    I: Iterator<Item = TrackPoint>,
{
    pub fn new<P>(points: P, params: &WalkParams) -> Self
    where
        P: IntoIterator<IntoIter = I>,
    {
        Self {
            segments: points.into_iter().split_by_gap(params.max_gap),
            distance_method: params.distance_method,
            min_points: params.min_points,
        }
    }
}

impl<I> Iterator for Walks<I>
where
    I: Iterator<Item = TrackPoint>,
{
    type Item = Result<Walk, AssembleError>;

    fn next(&mut self) -> Option<Self::Item> {
        let segment = self.segments.next()?;
        Some(assemble_walk(&segment, self.distance_method, self.min_points))
    }
}

/// Reads delimited track points and returns every walk that could be built.
/// Unreadable rows and short segments are logged and skipped.
pub fn walks_from_reader<R: Read>(reader: R, params: &WalkParams) -> Vec<Walk> {
    let points = TrackReader::with_delimiter(reader, params.delimiter).points();

    Walks::new(points, params)
        .enumerate()
        .filter_map(|(index, result)| match result {
            Ok(walk) => {
                debug!(
                    "Segment {} became a walk of {} points",
                    index,
                    walk.path().0.len()
                );
                Some(walk)
            }
            Err(error) => {
                warn!("Skipping segment {}: {}", index, error);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use geo::line_string;
    use jiff::Timestamp;

    use super::*;

    fn point_at(seconds: i64, lat: f64, lon: f64) -> TrackPoint {
        let timestamp = Timestamp::from_second(1_588_320_000 + seconds).unwrap();
        TrackPoint::from_lat_lon(timestamp, lat, lon)
    }

    #[test]
    fn test_assemble_walk() {
        let segment = vec![point_at(0, 0.0, 0.0), point_at(300, 1.0, 0.0)];
        let walk = assemble_walk(&segment, DistanceMethod::Haversine, 2).unwrap();

        assert_eq!(walk.path(), &line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0)]);
        assert_eq!(walk.total_time(), SignedDuration::from_mins(5));
        assert!((walk.distance_traveled_meters() - 111_195.0).abs() < 100.0);
    }

    #[test]
    fn test_path_is_lon_lat() {
        let segment = vec![point_at(0, 52.5, 13.4), point_at(10, 52.6, 13.5)];
        let walk = assemble_walk(&segment, DistanceMethod::Haversine, 2).unwrap();

        assert_eq!(walk.path().0[0], Coord { x: 13.4, y: 52.5 });
        assert_eq!(walk.path().0[1], Coord { x: 13.5, y: 52.6 });
    }

    #[test]
    fn test_distance_uses_configured_method() {
        let segment = vec![point_at(0, 0.0, 0.0), point_at(1, 4.0, 3.0)];
        let walk = assemble_walk(&segment, DistanceMethod::Euclidean, 2).unwrap();

        assert_eq!(walk.distance_traveled_meters(), 5.0);
    }

    #[test]
    fn test_single_point_is_rejected() {
        let error = assemble_walk(&[point_at(0, 1.0, 1.0)], DistanceMethod::Haversine, 2);
        assert_eq!(
            error,
            Err(AssembleError::TooFewPoints {
                required: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_empty_segment_is_rejected() {
        let error = assemble_walk(&[], DistanceMethod::Haversine, 2);
        assert_eq!(
            error,
            Err(AssembleError::TooFewPoints {
                required: 2,
                found: 0
            })
        );
    }

    #[test]
    fn test_zero_min_points_still_needs_one_point() {
        let error = assemble_walk(&[], DistanceMethod::Haversine, 0);
        assert_eq!(
            error,
            Err(AssembleError::TooFewPoints {
                required: 1,
                found: 0
            })
        );
    }

    #[test]
    fn test_single_point_walk_with_min_points_one() {
        let segment = vec![point_at(0, 52.5, 13.4)];

        for min_points in [0, 1] {
            let walk = assemble_walk(&segment, DistanceMethod::Haversine, min_points).unwrap();

            assert_eq!(walk.path(), &line_string![(x: 13.4, y: 52.5)]);
            assert_eq!(walk.distance_traveled_meters(), 0.0);
            assert!(walk.total_time().is_zero());
        }

        let error = assemble_walk(&[], DistanceMethod::Haversine, 1);
        assert_eq!(
            error,
            Err(AssembleError::TooFewPoints {
                required: 1,
                found: 0
            })
        );
    }

    #[test]
    fn test_out_of_order_segment_is_not_validated() {
        let segment = vec![point_at(60, 0.0, 0.0), point_at(0, 0.0, 0.001)];
        let walk = assemble_walk(&segment, DistanceMethod::Haversine, 2).unwrap();

        assert_eq!(walk.total_time(), SignedDuration::from_secs(-60));
    }

    #[test]
    fn test_walks_iterator() {
        let points = vec![
            point_at(0, 0.0, 0.0),
            point_at(60, 0.0, 0.001),
            point_at(10_000, 1.0, 1.0),
            point_at(20_000, 2.0, 2.0),
            point_at(20_060, 2.0, 2.001),
            point_at(20_120, 2.0, 2.002),
        ];

        let results = Walks::new(points, &WalkParams::default()).collect::<Vec<_>>();

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().total_time().as_secs(), 60);
        assert!(results[1].is_err());
        assert_eq!(results[2].as_ref().unwrap().path().0.len(), 3);
    }

    #[test]
    fn test_min_points_from_params() {
        let points = vec![point_at(0, 0.0, 0.0), point_at(60, 0.0, 0.001)];
        let params = WalkParams::default().with_min_points(3);

        let results = Walks::new(points, &params).collect::<Vec<_>>();
        assert_eq!(results.len(), 1);
        assert!(results[0].is_err());
    }
}
