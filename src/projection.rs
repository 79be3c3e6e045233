//! Point projection through a fitted motion.

use nalgebra::Point2;

use crate::models::MotionParams;
use crate::types::Correspondence;

/// Project interleaved `[x0, y0, x1, y1, ...]` points through `params`.
///
/// `out` is resized to match `src`.
pub fn project_points(params: &MotionParams, src: &[f64], out: &mut Vec<f64>) {
    out.resize(src.len(), 0.0);
    for (s, o) in src.chunks_exact(2).zip(out.chunks_exact_mut(2)) {
        let (x, y) = params.project(s[0], s[1]);
        o[0] = x;
        o[1] = y;
    }
}

/// Project the source side of each correspondence.
pub fn project_sources(params: &MotionParams, matches: &[Correspondence]) -> Vec<Point2<f64>> {
    matches
        .iter()
        .map(|m| params.project_point(&m.source()))
        .collect()
}

/// Squared distance between the projected source and the reference point.
#[inline]
pub fn squared_residual(params: &MotionParams, m: &Correspondence) -> f64 {
    let (px, py) = params.project(m.x, m.y);
    let dx = px - m.rx;
    let dy = py - m.ry;
    dx * dx + dy * dy
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn projects_interleaved_batch() {
        let p = MotionParams::affine(2.0, 0.0, 0.0, 3.0, 1.0, -1.0);
        let mut out = Vec::new();
        project_points(&p, &[1.0, 1.0, -2.0, 4.0], &mut out);
        assert_eq!(out, vec![3.0, 2.0, -3.0, 11.0]);
    }

    #[test]
    fn identity_leaves_points_in_place() {
        let mut out = vec![0.0; 10];
        project_points(&MotionParams::identity(), &[5.0, 6.0], &mut out);
        assert_eq!(out, vec![5.0, 6.0]);
    }

    #[test]
    fn residual_of_exact_match_is_zero() {
        let p = MotionParams::rotzoom(0.5, 2.0, 3.0, 4.0);
        let (rx, ry) = p.project(7.0, -1.0);
        let m = Correspondence::new(7.0, -1.0, rx, ry);
        assert_relative_eq!(squared_residual(&p, &m), 0.0, epsilon = 1e-20);

        let projected = project_sources(&p, &[m]);
        assert_relative_eq!(projected[0].x, rx);
        assert_relative_eq!(projected[0].y, ry);
    }
}
