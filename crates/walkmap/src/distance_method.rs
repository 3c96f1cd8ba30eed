use std::{fmt, str::FromStr};

use geo::{Distance, Euclidean, Haversine, LineString, Point};

use crate::meters::Meters;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMethod {
    /// Great-circle distance between consecutive lon/lat coordinates.
    #[default]
    Haversine,
    /// Planar distance, for paths already projected to meters.
    Euclidean,
}

impl DistanceMethod {
    pub fn measure(&self, path: &LineString<f64>) -> Meters {
        path.0
            .windows(2)
            .map(|pair| {
                let from = Point::from(pair[0]);
                let to = Point::from(pair[1]);
                self.distance(from, to)
            })
            .sum()
    }

    fn distance(&self, from: Point<f64>, to: Point<f64>) -> Meters {
        match self {
            DistanceMethod::Haversine => {
                let haversine = Haversine;
                Meters::new(haversine.distance(from, to))
            }
            DistanceMethod::Euclidean => {
                let euclidean = Euclidean;
                Meters::new(euclidean.distance(&from, &to))
            }
        }
    }
}

impl FromStr for DistanceMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "haversine" => Ok(DistanceMethod::Haversine),
            "euclidean" => Ok(DistanceMethod::Euclidean),
            other => Err(format!("Unknown distance method: {other}")),
        }
    }
}

impl fmt::Display for DistanceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMethod::Haversine => f.write_str("haversine"),
            DistanceMethod::Euclidean => f.write_str("euclidean"),
        }
    }
}

#[cfg(test)]
mod tests {
    use geo::line_string;

    use super::*;

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        let path = line_string![(x: 0.0, y: 0.0), (x: 0.0, y: 1.0)];
        let meters = DistanceMethod::Haversine.measure(&path);

        assert!((meters.value() - 111_195.0).abs() < 100.0, "{meters}");
    }

    #[test]
    fn test_euclidean_sums_segments() {
        let path = line_string![(x: 0.0, y: 0.0), (x: 3.0, y: 4.0), (x: 3.0, y: 10.0)];
        assert_eq!(DistanceMethod::Euclidean.measure(&path), Meters::new(11.0));
    }

    #[test]
    fn test_short_paths_measure_zero() {
        let empty = LineString::<f64>::new(vec![]);
        let single = line_string![(x: 13.4, y: 52.5)];

        assert!(DistanceMethod::Haversine.measure(&empty).is_zero());
        assert!(DistanceMethod::Haversine.measure(&single).is_zero());
        assert!(DistanceMethod::Euclidean.measure(&single).is_zero());
    }

    #[test]
    fn test_parse() {
        assert_eq!("Haversine".parse::<DistanceMethod>(), Ok(DistanceMethod::Haversine));
        assert_eq!("euclidean".parse::<DistanceMethod>(), Ok(DistanceMethod::Euclidean));
        assert!("manhattan".parse::<DistanceMethod>().is_err());
    }
}
