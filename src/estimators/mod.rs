//! Estimators for the global motion models.
//!
//! Each estimator provides the degeneracy check for its minimal sample and a
//! closed-form least-squares fitter that works for both minimal and
//! over-determined point sets:
//! - Rotation-zoom (similarity) estimation
//! - Affine estimation
//! - Translation estimation (`translation` feature)
//!
//! [`ModelEstimator`] is the closed dispatch over these, selected from a
//! [`ModelType`].

pub mod affine;
pub mod rotzoom;
#[cfg(feature = "translation")]
pub mod translation;

pub use affine::AffineEstimator;
pub use rotzoom::RotZoomEstimator;
#[cfg(feature = "translation")]
pub use translation::TranslationEstimator;

use crate::core::Estimator;
use crate::error::MotionError;
use crate::models::{ModelType, MotionParams};

/// Signed-area tolerance under which three points count as collinear.
pub const COLLINEAR_EPS: f64 = 1e-3;

/// Whether the three interleaved points `p[0..6]` are (nearly) collinear.
pub fn is_collinear3(p: &[f64]) -> bool {
    let v = (p[2] - p[0]) * (p[5] - p[1]) - (p[3] - p[1]) * (p[4] - p[0]);
    v.abs() < COLLINEAR_EPS
}

/// Estimator selected by model type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelEstimator {
    RotZoom(RotZoomEstimator),
    Affine(AffineEstimator),
    #[cfg(feature = "translation")]
    Translation(TranslationEstimator),
}

impl ModelEstimator {
    /// Pick the estimator for `model_type`.
    pub fn for_model(model_type: ModelType) -> Result<Self, MotionError> {
        match model_type {
            ModelType::RotZoom => Ok(Self::RotZoom(RotZoomEstimator::new())),
            ModelType::Affine => Ok(Self::Affine(AffineEstimator::new())),
            #[cfg(feature = "translation")]
            ModelType::Translation => Ok(Self::Translation(TranslationEstimator::new())),
            other => Err(MotionError::UnsupportedModel(other)),
        }
    }
}

impl Estimator for ModelEstimator {
    fn model_type(&self) -> ModelType {
        match self {
            Self::RotZoom(e) => e.model_type(),
            Self::Affine(e) => e.model_type(),
            #[cfg(feature = "translation")]
            Self::Translation(e) => e.model_type(),
        }
    }

    fn sample_size(&self) -> usize {
        match self {
            Self::RotZoom(e) => e.sample_size(),
            Self::Affine(e) => e.sample_size(),
            #[cfg(feature = "translation")]
            Self::Translation(e) => e.sample_size(),
        }
    }

    fn is_degenerate(&self, points: &[f64]) -> bool {
        match self {
            Self::RotZoom(e) => e.is_degenerate(points),
            Self::Affine(e) => e.is_degenerate(points),
            #[cfg(feature = "translation")]
            Self::Translation(e) => e.is_degenerate(points),
        }
    }

    fn find_transformation(&self, src: &[f64], dst: &[f64]) -> Option<MotionParams> {
        match self {
            Self::RotZoom(e) => e.find_transformation(src, dst),
            Self::Affine(e) => e.find_transformation(src, dst),
            #[cfg(feature = "translation")]
            Self::Translation(e) => e.find_transformation(src, dst),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collinear_points_are_detected() {
        assert!(is_collinear3(&[0.0, 0.0, 1.0, 1.0, 5.0, 5.0]));
        assert!(is_collinear3(&[0.0, 1.0, 2.0, 5.0, 4.0, 9.0]));
        assert!(!is_collinear3(&[0.0, 0.0, 1.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn near_collinear_within_tolerance() {
        // Signed area 5e-4 is under the tolerance.
        assert!(is_collinear3(&[0.0, 0.0, 1.0, 0.0, 0.0, 5e-4]));
        assert!(!is_collinear3(&[0.0, 0.0, 1.0, 0.0, 0.0, 2e-3]));
    }

    #[test]
    fn dispatch_selects_matching_estimator() {
        let e = ModelEstimator::for_model(ModelType::Affine).unwrap();
        assert_eq!(e.model_type(), ModelType::Affine);
        assert_eq!(e.sample_size(), 3);

        let e = ModelEstimator::for_model(ModelType::RotZoom).unwrap();
        assert_eq!(e.model_type(), ModelType::RotZoom);
    }

    #[test]
    fn identity_is_not_estimable() {
        assert_eq!(
            ModelEstimator::for_model(ModelType::Identity),
            Err(MotionError::UnsupportedModel(ModelType::Identity))
        );
    }

    #[cfg(not(feature = "translation"))]
    #[test]
    fn translation_is_disabled_by_default() {
        assert_eq!(
            ModelEstimator::for_model(ModelType::Translation),
            Err(MotionError::UnsupportedModel(ModelType::Translation))
        );
    }
}
