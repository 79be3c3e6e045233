//! Motion models produced by the estimator.
//!
//! Every supported model is expressed with the same six-parameter vector
//! `[tx, ty, a, b, c, d]`, interpreted as
//!
//! ```text
//! x' = a * x + b * y + tx
//! y' = c * x + d * y + ty
//! ```
//!
//! A rotation-zoom model additionally satisfies `c = -b` and `d = a`.

use nalgebra::{Matrix3, Point2};
use serde::{Deserialize, Serialize};

use crate::types::Correspondence;

/// Number of parameters in a motion vector.
pub const MAX_PARAMDIM: usize = 6;

/// Parameters of the identity motion.
pub const IDENTITY_PARAMS: [f64; MAX_PARAMDIM] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0];

/// Closed set of global motion models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelType {
    Identity,
    Translation,
    RotZoom,
    Affine,
}

impl ModelType {
    /// Minimum number of correspondences needed to determine the model.
    pub fn minpts(self) -> usize {
        match self {
            ModelType::Identity => 0,
            ModelType::Translation => 1,
            ModelType::RotZoom | ModelType::Affine => 3,
        }
    }
}

/// Six-parameter motion vector `[tx, ty, a, b, c, d]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionParams(pub [f64; MAX_PARAMDIM]);

impl Default for MotionParams {
    fn default() -> Self {
        Self::identity()
    }
}

impl MotionParams {
    pub fn identity() -> Self {
        Self(IDENTITY_PARAMS)
    }

    /// Rotation by `angle` radians, uniform `scale`, then translation.
    pub fn rotzoom(angle: f64, scale: f64, tx: f64, ty: f64) -> Self {
        let a = scale * angle.cos();
        let b = scale * angle.sin();
        Self([tx, ty, a, b, -b, a])
    }

    pub fn affine(a: f64, b: f64, c: f64, d: f64, tx: f64, ty: f64) -> Self {
        Self([tx, ty, a, b, c, d])
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self([tx, ty, 1.0, 0.0, 0.0, 1.0])
    }

    pub fn as_array(&self) -> &[f64; MAX_PARAMDIM] {
        &self.0
    }

    /// Map a single point through the motion.
    #[inline]
    pub fn project(&self, x: f64, y: f64) -> (f64, f64) {
        let [tx, ty, a, b, c, d] = self.0;
        (a * x + b * y + tx, c * x + d * y + ty)
    }

    pub fn project_point(&self, p: &Point2<f64>) -> Point2<f64> {
        let (x, y) = self.project(p.x, p.y);
        Point2::new(x, y)
    }

    /// Homogeneous 3x3 matrix of the motion.
    pub fn to_matrix(&self) -> Matrix3<f64> {
        let [tx, ty, a, b, c, d] = self.0;
        Matrix3::new(a, b, tx, c, d, ty, 0.0, 0.0, 1.0)
    }

    /// Read the affine part of a homogeneous matrix; the last row is ignored.
    pub fn from_matrix(m: &Matrix3<f64>) -> Self {
        Self([
            m[(0, 2)],
            m[(1, 2)],
            m[(0, 0)],
            m[(0, 1)],
            m[(1, 0)],
            m[(1, 1)],
        ])
    }

    /// Largest absolute difference between two parameter vectors.
    pub fn max_abs_diff(&self, other: &MotionParams) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f64::max)
    }
}

/// One ranked result of the estimator.
///
/// A model with `num_inliers == 0` was not found and must not be used as a
/// motion; its parameters are the identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionModel {
    pub model_type: ModelType,
    pub params: MotionParams,
    pub num_inliers: usize,
    /// Sum of squared inlier residuals of the trial that selected this model.
    pub sse: f64,
    /// Indices of the inliers into the input correspondences, ascending.
    pub inlier_indices: Vec<usize>,
    /// The inlier correspondences themselves.
    pub inliers: Vec<Correspondence>,
}

impl MotionModel {
    pub fn not_found(model_type: ModelType) -> Self {
        Self {
            model_type,
            params: MotionParams::identity(),
            num_inliers: 0,
            sse: f64::INFINITY,
            inlier_indices: Vec::new(),
            inliers: Vec::new(),
        }
    }

    pub fn is_found(&self) -> bool {
        self.num_inliers > 0
    }
}
