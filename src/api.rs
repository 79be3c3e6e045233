//! High-level API for global motion estimation.
//!
//! These functions wire the estimator for the requested [`ModelType`] to the
//! deterministic skip-ahead sampler and run the fixed-trial search.

use nalgebra::DMatrix;

use crate::core::MotionRansac;
use crate::error::MotionError;
use crate::estimators::ModelEstimator;
use crate::models::{ModelType, MotionModel};
use crate::samplers::SkipAheadSampler;
use crate::settings::RansacSettings;
use crate::types::Correspondence;

/// Result of a motion estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult {
    /// `num_desired_motions` models, best first. Entries that were not found
    /// have zero inliers.
    pub models: Vec<MotionModel>,
    /// Number of trials performed.
    pub trials: usize,
    /// Minimal samples rejected as degenerate.
    pub degenerate_samples: usize,
    /// Trials whose minimal fit was singular.
    pub failed_fits: usize,
}

impl EstimationResult {
    /// The best model, if any was found.
    pub fn best(&self) -> Option<&MotionModel> {
        self.models.first().filter(|m| m.is_found())
    }
}

/// Estimate up to `num_desired_motions` motions of `model_type` with default
/// settings.
pub fn estimate_motion(
    matches: &[Correspondence],
    model_type: ModelType,
    num_desired_motions: usize,
) -> Result<EstimationResult, MotionError> {
    estimate_motion_with_settings(
        matches,
        model_type,
        num_desired_motions,
        &RansacSettings::default(),
    )
}

/// Estimate up to `num_desired_motions` motions of `model_type`.
///
/// # Arguments
/// * `matches` - Correspondences `(x, y) -> (rx, ry)`
/// * `model_type` - `RotZoom` or `Affine` (`Translation` with the
///   `translation` feature)
/// * `num_desired_motions` - Number of ranked models to return
/// * `settings` - Trial count, threshold and seed policy
pub fn estimate_motion_with_settings(
    matches: &[Correspondence],
    model_type: ModelType,
    num_desired_motions: usize,
    settings: &RansacSettings,
) -> Result<EstimationResult, MotionError> {
    let estimator = ModelEstimator::for_model(model_type)?;
    let sampler = SkipAheadSampler::new(settings.seed_for(matches.len()));
    let mut ransac = MotionRansac::new(settings.clone(), estimator, sampler);

    let models = ransac.run(matches, num_desired_motions)?;
    Ok(EstimationResult {
        models,
        trials: ransac.trials,
        degenerate_samples: ransac.degenerate_samples,
        failed_fits: ransac.failed_fits,
    })
}

/// Estimate motions from two Nx2 point matrices.
///
/// # Arguments
/// * `points1` - Source points (Nx2 matrix)
/// * `points2` - Reference points (Nx2 matrix)
/// * `model_type` - Motion model to fit
/// * `num_desired_motions` - Number of ranked models to return
/// * `settings_opt` - Optional settings (uses defaults if None)
pub fn estimate_motion_from_matrices(
    points1: &DMatrix<f64>,
    points2: &DMatrix<f64>,
    model_type: ModelType,
    num_desired_motions: usize,
    settings_opt: Option<RansacSettings>,
) -> Result<EstimationResult, MotionError> {
    let matches = correspondences_from_matrices(points1, points2)?;
    let settings = settings_opt.unwrap_or_default();
    estimate_motion_with_settings(&matches, model_type, num_desired_motions, &settings)
}

/// Pair the rows of two Nx2 matrices into correspondences.
pub fn correspondences_from_matrices(
    points1: &DMatrix<f64>,
    points2: &DMatrix<f64>,
) -> Result<Vec<Correspondence>, MotionError> {
    if points1.nrows() != points2.nrows() {
        return Err(MotionError::InvalidInput(
            "points1 and points2 must have the same number of rows".to_string(),
        ));
    }
    if points1.ncols() != 2 || points2.ncols() != 2 {
        return Err(MotionError::InvalidInput(
            "points must be Nx2 matrices".to_string(),
        ));
    }

    Ok((0..points1.nrows())
        .map(|i| {
            Correspondence::new(
                points1[(i, 0)],
                points1[(i, 1)],
                points2[(i, 0)],
                points2[(i, 1)],
            )
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrices_must_agree_in_shape() {
        let a = DMatrix::<f64>::zeros(4, 2);
        let b = DMatrix::<f64>::zeros(5, 2);
        assert!(matches!(
            correspondences_from_matrices(&a, &b),
            Err(MotionError::InvalidInput(_))
        ));

        let c = DMatrix::<f64>::zeros(4, 3);
        assert!(matches!(
            correspondences_from_matrices(&a, &c),
            Err(MotionError::InvalidInput(_))
        ));
    }

    #[test]
    fn rows_become_correspondences() {
        let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let b = DMatrix::from_row_slice(2, 2, &[5.0, 6.0, 7.0, 8.0]);
        let matches = correspondences_from_matrices(&a, &b).unwrap();
        assert_eq!(
            matches,
            vec![
                Correspondence::new(1.0, 2.0, 5.0, 6.0),
                Correspondence::new(3.0, 4.0, 7.0, 8.0),
            ]
        );
    }

    #[test]
    fn identity_model_is_rejected() {
        let matches = vec![Correspondence::default(); 30];
        assert_eq!(
            estimate_motion(&matches, ModelType::Identity, 1),
            Err(MotionError::UnsupportedModel(ModelType::Identity))
        );
    }

    #[test]
    fn best_skips_not_found_models() {
        let result = EstimationResult {
            models: vec![MotionModel::not_found(ModelType::Affine)],
            trials: 20,
            degenerate_samples: 0,
            failed_fits: 20,
        };
        assert!(result.best().is_none());
    }
}
