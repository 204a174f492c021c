//! Geometry of the animated gradient-descent figure.
//!
//! Coordinates live in the figure's own 100x100 viewBox space; the renderer
//! scales them however it likes.

/// A point in viewBox coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: f64,
    pub y: f64,
}

impl PathPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Center of the loss valley; the path ends here.
pub const CENTER: PathPoint = PathPoint::new(20.0, 50.0);

/// Radii of the concentric loss contours, outermost first.
pub const CONTOUR_RADII: [f64; 6] = [45.0, 36.0, 27.0, 18.0, 10.0, 4.0];

/// The optimizer's trajectory, from the rim down into the valley. The
/// zigzag is deliberate: a stochastic step overshoots and corrects rather
/// than descending in a straight line.
pub const DESCENT_PATH: [PathPoint; 7] = [
    PathPoint::new(80.0, 20.0),
    PathPoint::new(65.0, 35.0),
    PathPoint::new(55.0, 30.0),
    PathPoint::new(40.0, 50.0),
    PathPoint::new(35.0, 45.0),
    PathPoint::new(25.0, 55.0),
    PathPoint::new(20.0, 50.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_terminates_at_the_valley_center() {
        assert_eq!(DESCENT_PATH[DESCENT_PATH.len() - 1], CENTER);
    }

    #[test]
    fn contours_shrink_monotonically() {
        for pair in CONTOUR_RADII.windows(2) {
            assert!(pair[0] > pair[1]);
        }
    }

    #[test]
    fn later_steps_are_closer_to_the_center() {
        let distance = |p: PathPoint| (p.x - CENTER.x).hypot(p.y - CENTER.y);
        // Not strictly monotonic (SGD overshoots), but the trend must hold
        // between the start, the midpoint, and the end.
        let mid = DESCENT_PATH[DESCENT_PATH.len() / 2];
        assert!(distance(DESCENT_PATH[0]) > distance(mid));
        assert!(distance(mid) > distance(DESCENT_PATH[DESCENT_PATH.len() - 1]));
    }
}
