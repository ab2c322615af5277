/// Drawable polyline paths
use crate::geometry::Point2;

/// A single path segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathSeg {
    MoveTo(Point2),
    LineTo(Point2),
    /// Connect the last point back to the start of the sub-path
    Close,
}

/// An ordered sequence of drawable segments.
///
/// Paths are immutable values built fresh per call; there is no reusable
/// reset-and-refill builder, so no state leaks between frames.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    segments: Vec<PathSeg>,
}

impl Path {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Polyline through `points` with the last point connected back to
    /// the first. An empty input produces an empty path.
    pub fn closed_polyline(points: &[Point2]) -> Self {
        let mut path = Self::polyline(points);
        if !path.segments.is_empty() {
            path.segments.push(PathSeg::Close);
        }
        path
    }

    /// Open polyline through `points`, in order
    pub fn open_polyline(points: &[Point2]) -> Self {
        Self::polyline(points)
    }

    fn polyline(points: &[Point2]) -> Self {
        let mut segments = Vec::with_capacity(points.len() + 1);
        for (i, &point) in points.iter().enumerate() {
            if i == 0 {
                segments.push(PathSeg::MoveTo(point));
            } else {
                segments.push(PathSeg::LineTo(point));
            }
        }
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSeg] {
        &self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSeg::Close))
    }

    /// The points visited by the path, in drawing order
    pub fn points(&self) -> impl Iterator<Item = Point2> + '_ {
        self.segments.iter().filter_map(|seg| match seg {
            PathSeg::MoveTo(p) | PathSeg::LineTo(p) => Some(*p),
            PathSeg::Close => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_points() -> Vec<Point2> {
        vec![
            Point2::new(50.0, 300.0),
            Point2::new(150.0, 400.0),
            Point2::new(180.0, 340.0),
            Point2::new(240.0, 420.0),
            Point2::new(300.0, 200.0),
        ]
    }

    #[test]
    fn test_closed_polyline_returns_to_start() {
        let path = Path::closed_polyline(&reference_points());
        assert!(path.is_closed());
        assert_eq!(path.segments().len(), 6);
        assert_eq!(
            path.segments()[0],
            PathSeg::MoveTo(Point2::new(50.0, 300.0))
        );
        assert_eq!(path.segments()[5], PathSeg::Close);
    }

    #[test]
    fn test_empty_input_is_empty_path() {
        assert!(Path::closed_polyline(&[]).is_empty());
        assert!(Path::open_polyline(&[]).is_empty());
    }

    #[test]
    fn test_open_polyline_does_not_close() {
        let path = Path::open_polyline(&reference_points());
        assert!(!path.is_closed());
        assert_eq!(path.points().count(), 5);
    }

    #[test]
    fn test_single_point_is_lone_move() {
        let path = Path::open_polyline(&[Point2::new(1.0, 2.0)]);
        assert_eq!(path.segments(), &[PathSeg::MoveTo(Point2::new(1.0, 2.0))]);
    }
}
