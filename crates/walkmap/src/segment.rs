use jiff::SignedDuration;
use tracing::debug;

use crate::track_point::TrackPoint;

pub const DEFAULT_MAX_GAP: SignedDuration = SignedDuration::from_hours(1);

/// Splits a stream of track points into groups wherever two consecutive
/// points are more than `max_gap` apart, in either direction.
///
/// The last group is always yielded, so an empty input yields one empty group.
pub struct GapSegments<I> {
    points: I,
    max_gap: SignedDuration,
    pending: Option<TrackPoint>,
    done: bool,
}

impl<I> GapSegments<I>
where
    I: Iterator<Item = TrackPoint>,
{
    pub fn new(points: I, max_gap: SignedDuration) -> Self {
        Self {
            points,
            max_gap,
            pending: None,
            done: false,
        }
    }
}

impl<I> Iterator for GapSegments<I>
where
    I: Iterator<Item = TrackPoint>,
{
    type Item = Vec<TrackPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut segment = Vec::new();
        segment.extend(self.pending.take());

        for point in self.points.by_ref() {
            if let Some(last) = segment.last() {
                let gap = point.timestamp().duration_since(last.timestamp()).abs();
                if gap > self.max_gap {
                    debug!("Gap of {:#} after {} points", gap, segment.len());
                    self.pending = Some(point);
                    return Some(segment);
                }
            }

            segment.push(point);
        }

        self.done = true;
        Some(segment)
    }
}

pub trait SplitByGap: Iterator<Item = TrackPoint> + Sized {
    fn split_by_gap(self, max_gap: SignedDuration) -> GapSegments<Self> {
        GapSegments::new(self, max_gap)
    }
}

impl<I> SplitByGap for I where I: Iterator<Item = TrackPoint> {}

pub fn split_by_gap<I>(points: I, max_gap: SignedDuration) -> Vec<Vec<TrackPoint>>
where
    I: IntoIterator<Item = TrackPoint>,
{
    GapSegments::new(points.into_iter(), max_gap).collect()
}
