//! # Motion RANSAC - Robust Global Motion Estimation
//!
//! `motion_ransac` finds the 2D motion (rotation-zoom or affine) that best
//! explains a set of noisy point correspondences between two video frames,
//! tolerating mismatched correspondences as outliers.
//!
//! ## Quick Start
//!
//! ```rust
//! use motion_ransac::{estimate_motion, Correspondence, ModelType, MotionParams};
//!
//! let truth = MotionParams::rotzoom(0.05, 1.02, 3.0, -1.5);
//! let matches: Vec<Correspondence> = (0..40)
//!     .map(|i| {
//!         let (x, y) = ((i % 8) as f64 * 20.0, (i / 8) as f64 * 15.0 + (i % 3) as f64);
//!         let (rx, ry) = truth.project(x, y);
//!         Correspondence::new(x, y, rx, ry)
//!     })
//!     .collect();
//!
//! let result = estimate_motion(&matches, ModelType::RotZoom, 1).unwrap();
//! let best = result.best().unwrap();
//! assert_eq!(best.num_inliers, 40);
//! assert!(best.params.max_abs_diff(&truth) < 1e-6);
//! ```
//!
//! ## How it works
//!
//! A fixed number of trials each draw a minimal sample, reject collinear
//! samples, fit the model in closed form, and count the correspondences whose
//! reprojection error is under the inlier threshold. The best
//! `num_desired_motions` hypotheses are kept, refit on all of their inliers
//! and returned best first (most inliers, then lowest SSE).
//!
//! ## Extending
//!
//! - **[`Estimator`](core::Estimator)**: degeneracy check and fit for a model
//! - **[`Sampler`](core::Sampler)**: source of minimal samples
//!
//! Both plug into [`MotionRansac`](core::MotionRansac) directly.
//!
//! ## Modules
//!
//! - **[`api`](api)**: High-level estimation functions
//! - **[`core`](core)**: Core traits and the RANSAC driver
//! - **[`estimators`](estimators)**: Rotation-zoom, affine and translation fitters
//! - **[`samplers`](samplers)**: Minimal-sample drawing
//! - **[`scoring`](scoring)**: Inlier scoring and candidate ordering
//! - **[`projection`](projection)**: Applying a motion to points
//! - **[`models`](models)**: Model types and parameters
//! - **[`settings`](settings)**: Configuration
//! - **[`utils`](utils)**: Least-squares solver and PRNG

pub mod api;
pub mod core;
pub mod error;
pub mod estimators;
pub mod models;
pub mod projection;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod types;
pub mod utils;

// Re-export high-level API
pub use api::{
    correspondences_from_matrices, estimate_motion, estimate_motion_from_matrices,
    estimate_motion_with_settings, EstimationResult,
};

// Re-export core traits for easy access
pub use core::{Estimator, MotionRansac, Sampler};

pub use error::MotionError;
pub use models::{ModelType, MotionModel, MotionParams};
pub use settings::RansacSettings;
pub use types::Correspondence;
