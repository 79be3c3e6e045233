//! RANSAC configuration.
//!
//! The defaults reproduce the fixed constants of the reference motion
//! search: 20 trials, a 1.25 pixel inlier threshold, at most 10 consecutive
//! degenerate samples and at least five times `minpts` correspondences.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// Number of trials run by the motion search.
pub const MIN_TRIALS: usize = 20;
/// Inlier distance threshold, in the units of the point coordinates.
pub const INLIER_THRESHOLD: f64 = 1.25;
/// Consecutive degenerate samples tolerated within one trial.
pub const MAX_DEGENERATE_ITER: usize = 10;
/// Minimum number of correspondences, as a multiple of `minpts`.
pub const MINPTS_MULTIPLIER: usize = 5;

/// Settings for one motion estimation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RansacSettings {
    /// Fixed number of trials; the search is not adaptive.
    pub min_trials: usize,
    /// Inlier threshold on the reprojection distance.
    pub inlier_threshold: f64,
    /// Consecutive degenerate minimal samples before the call fails. The
    /// sample that brings the count within one trial to this value aborts
    /// the search, so exactly `max_degenerate_iter` samples are drawn.
    pub max_degenerate_iter: usize,
    /// The call fails with fewer than `minpts * minpts_multiplier` points.
    pub minpts_multiplier: usize,
    /// PRNG seed. `None` seeds with the number of correspondences.
    pub seed: Option<u32>,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            min_trials: MIN_TRIALS,
            inlier_threshold: INLIER_THRESHOLD,
            max_degenerate_iter: MAX_DEGENERATE_ITER,
            minpts_multiplier: MINPTS_MULTIPLIER,
            seed: None,
        }
    }
}

impl RansacSettings {
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn inlier_threshold_squared(&self) -> f64 {
        self.inlier_threshold * self.inlier_threshold
    }

    /// Seed used for `num_points` correspondences.
    pub fn seed_for(&self, num_points: usize) -> u32 {
        self.seed.unwrap_or(num_points as u32)
    }

    pub fn validate(&self) -> Result<(), MotionError> {
        if !(self.inlier_threshold.is_finite() && self.inlier_threshold > 0.0) {
            return Err(MotionError::InvalidSettings(format!(
                "inlier_threshold must be positive and finite, got {}",
                self.inlier_threshold
            )));
        }
        if self.min_trials == 0 {
            return Err(MotionError::InvalidSettings(
                "min_trials must be at least 1".to_string(),
            ));
        }
        if self.max_degenerate_iter == 0 {
            return Err(MotionError::InvalidSettings(
                "max_degenerate_iter must be at least 1".to_string(),
            ));
        }
        if self.minpts_multiplier == 0 {
            return Err(MotionError::InvalidSettings(
                "minpts_multiplier must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
