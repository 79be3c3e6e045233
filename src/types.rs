//! Core shared types for motion estimation.
//!
//! A correspondence pairs a point in the source frame with the point believed
//! to depict the same scene location in the reference frame. The estimator
//! works on flat, interleaved `[x0, y0, x1, y1, ...]` buffers internally, so
//! this module also hosts the helpers that gather those buffers.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// A matched point pair `(x, y) -> (rx, ry)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Correspondence {
    pub x: f64,
    pub y: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Correspondence {
    pub fn new(x: f64, y: f64, rx: f64, ry: f64) -> Self {
        Self { x, y, rx, ry }
    }

    /// Build a correspondence from a source and a reference point.
    pub fn from_points(src: Point2<f64>, dst: Point2<f64>) -> Self {
        Self::new(src.x, src.y, dst.x, dst.y)
    }

    pub fn source(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn reference(&self) -> Point2<f64> {
        Point2::new(self.rx, self.ry)
    }
}

/// Split correspondences into interleaved source and reference buffers.
pub(crate) fn split_points(matches: &[Correspondence]) -> (Vec<f64>, Vec<f64>) {
    let mut src = Vec::with_capacity(matches.len() * 2);
    let mut dst = Vec::with_capacity(matches.len() * 2);
    for m in matches {
        src.extend_from_slice(&[m.x, m.y]);
        dst.extend_from_slice(&[m.rx, m.ry]);
    }
    (src, dst)
}

/// Gather the interleaved points at `indices` from `points` into `out`.
///
/// `out` is cleared first so buffers can be reused between calls.
pub(crate) fn gather_points(points: &[f64], indices: &[usize], out: &mut Vec<f64>) {
    out.clear();
    for &i in indices {
        out.extend_from_slice(&points[2 * i..2 * i + 2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_points_interleaves_coordinates() {
        let matches = [
            Correspondence::new(1.0, 2.0, 3.0, 4.0),
            Correspondence::new(5.0, 6.0, 7.0, 8.0),
        ];
        let (src, dst) = split_points(&matches);
        assert_eq!(src, vec![1.0, 2.0, 5.0, 6.0]);
        assert_eq!(dst, vec![3.0, 4.0, 7.0, 8.0]);
    }

    #[test]
    fn gather_points_reuses_buffer() {
        let points = [0.0, 1.0, 10.0, 11.0, 20.0, 21.0];
        let mut out = vec![99.0; 8];
        gather_points(&points, &[2, 0], &mut out);
        assert_eq!(out, vec![20.0, 21.0, 0.0, 1.0]);
    }

    #[test]
    fn point_accessors_match_fields() {
        let c = Correspondence::from_points(Point2::new(1.5, -2.0), Point2::new(3.0, 4.25));
        assert_eq!(c.source(), Point2::new(1.5, -2.0));
        assert_eq!(c.reference(), Point2::new(3.0, 4.25));
    }
}
