//! Rotation-zoom (similarity) estimator.

use crate::core::Estimator;
use crate::estimators::is_collinear3;
use crate::models::{ModelType, MotionParams};
use crate::utils::NormalEquations;

/// Similarity estimator: rotation, uniform scale and translation.
///
/// The unknowns are `[tx, ty, a, b]`; each correspondence contributes
///
/// ```text
/// rx = tx + a * x + b * y
/// ry = ty - b * x + a * y
/// ```
///
/// so the constraint `c = -b, d = a` is built into the equations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RotZoomEstimator;

impl RotZoomEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Estimator for RotZoomEstimator {
    fn model_type(&self) -> ModelType {
        ModelType::RotZoom
    }

    fn sample_size(&self) -> usize {
        3
    }

    fn is_degenerate(&self, points: &[f64]) -> bool {
        is_collinear3(points)
    }

    fn find_transformation(&self, src: &[f64], dst: &[f64]) -> Option<MotionParams> {
        debug_assert_eq!(src.len(), dst.len());
        let mut eq = NormalEquations::<4>::new();
        for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact(2)) {
            let (sx, sy) = (s[0], s[1]);
            eq.accumulate(&[1.0, 0.0, sx, sy], d[0]);
            eq.accumulate(&[0.0, 1.0, sy, -sx], d[1]);
        }

        let x = eq.solve()?;
        Some(MotionParams([x[0], x[1], x[2], x[3], -x[3], x[2]]))
    }
}
