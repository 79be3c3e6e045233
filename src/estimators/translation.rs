//! Translation-only estimator.

use crate::core::Estimator;
use crate::models::{ModelType, MotionParams};
use crate::utils::NormalEquations;

/// Pure translation estimator; the least-squares solution is the mean
/// displacement of the points.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationEstimator;

impl TranslationEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Estimator for TranslationEstimator {
    fn model_type(&self) -> ModelType {
        ModelType::Translation
    }

    fn sample_size(&self) -> usize {
        1
    }

    fn is_degenerate(&self, _points: &[f64]) -> bool {
        false
    }

    fn find_transformation(&self, src: &[f64], dst: &[f64]) -> Option<MotionParams> {
        let mut eq = NormalEquations::<2>::new();
        for (s, d) in src.chunks_exact(2).zip(dst.chunks_exact(2)) {
            eq.accumulate(&[1.0, 0.0], d[0] - s[0]);
            eq.accumulate(&[0.0, 1.0], d[1] - s[1]);
        }
        let t = eq.solve()?;
        Some(MotionParams::translation(t[0], t[1]))
    }
}
