//! Affine estimator.

use crate::core::Estimator;
use crate::estimators::is_collinear3;
use crate::models::{ModelType, MotionParams};
use crate::utils::NormalEquations;

/// General six-parameter affine estimator.
///
/// The x and y channels share no unknowns, so the 6x6 normal equations split
/// into two independent 3x3 systems: `[a, b, tx]` from the x residuals and
/// `[c, d, ty]` from the y residuals. Both channels have the same normal
/// matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AffineEstimator;

impl AffineEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Estimator for AffineEstimator {
    fn model_type(&self) -> ModelType {
        ModelType::Affine
    }

    fn sample_size(&self) -> usize {
        3
    }

    fn is_degenerate(&self, points: &[f64]) -> bool {
        is_collinear3(points)
    }

    fn find_transformation(&self, src: &[f64], dst: &[f64]) -> Option<MotionParams> {
        debug_assert_eq!(src.len(), dst.len());
        let mut eq_x = NormalEquations::<3>::new();
        let mut eq_y = NormalEquations::<3>::new();
        for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact(2)) {
            let row = [s[0], s[1], 1.0];
            eq_x.accumulate(&row, d[0]);
            eq_y.accumulate(&row, d[1]);
        }

        let x = eq_x.solve()?;
        let y = eq_y.solve()?;
        Some(MotionParams([x[2], y[2], x[0], x[1], y[0], y[1]]))
    }
}
