//! Core traits and the RANSAC motion search.
//!
//! The search is assembled from two seams:
//! - [`Estimator`]: degeneracy check and closed-form fit for one model type.
//! - [`Sampler`]: source of minimal samples.
//!
//! [`MotionRansac`] runs a fixed number of trials, keeps the best
//! `num_desired_motions` hypotheses, refits each of them on its own inliers
//! and returns them best first.

use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use crate::error::MotionError;
use crate::models::{ModelType, MotionModel, MotionParams};
use crate::projection::project_points;
use crate::scoring::{rank_by, CandidateMotion, InlierScoring};
use crate::settings::RansacSettings;
use crate::types::{gather_points, split_points, Correspondence};

/// Fits one motion model type.
///
/// Point buffers are interleaved `[x0, y0, x1, y1, ...]`.
pub trait Estimator {
    /// Model type produced by this estimator.
    fn model_type(&self) -> ModelType;

    /// Size of a minimal sample.
    fn sample_size(&self) -> usize;

    /// Whether a minimal sample cannot determine a unique model.
    fn is_degenerate(&self, points: &[f64]) -> bool;

    /// Least-squares fit mapping `src` onto `dst`; works for minimal and
    /// over-determined inputs. `None` if the system is singular.
    fn find_transformation(&self, src: &[f64], dst: &[f64]) -> Option<MotionParams>;
}

/// Sampler responsible for drawing minimal samples.
pub trait Sampler {
    /// Draw `sample_size` distinct indices below `num_points` into
    /// `out_indices`.
    ///
    /// Returns `false` if no such sample exists.
    fn sample(&mut self, num_points: usize, sample_size: usize, out_indices: &mut [usize]) -> bool;
}

/// Fixed-trial RANSAC search over one motion model.
pub struct MotionRansac<E, S>
where
    E: Estimator,
    S: Sampler,
{
    pub settings: RansacSettings,
    pub estimator: E,
    pub sampler: S,
    cancel: Option<Arc<AtomicBool>>,

    // Diagnostics of the last run.
    pub trials: usize,
    pub degenerate_samples: usize,
    pub failed_fits: usize,
}

impl<E, S> MotionRansac<E, S>
where
    E: Estimator,
    S: Sampler,
{
    pub fn new(settings: RansacSettings, estimator: E, sampler: S) -> Self {
        Self {
            settings,
            estimator,
            sampler,
            cancel: None,
            trials: 0,
            degenerate_samples: 0,
            failed_fits: 0,
        }
    }

    /// Abort with [`MotionError::Cancelled`] once `flag` is set. The flag is
    /// polled before every trial.
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(AtomicOrdering::Relaxed))
    }

    /// Run the search and return `num_desired_motions` models, best first.
    ///
    /// Slots that never collected `minpts` inliers are returned as
    /// [`MotionModel::not_found`].
    pub fn run(
        &mut self,
        matches: &[Correspondence],
        num_desired_motions: usize,
    ) -> Result<Vec<MotionModel>, MotionError> {
        self.settings.validate()?;
        if num_desired_motions == 0 {
            return Err(MotionError::NoMotionsRequested);
        }

        let n = matches.len();
        let minpts = self.estimator.sample_size();
        let model_type = self.estimator.model_type();
        let needed = minpts
            .saturating_mul(self.settings.minpts_multiplier)
            .max(1);
        if n < needed {
            tracing::warn!(
                "{:?} motion needs {} correspondences, got {}",
                model_type,
                needed,
                n
            );
            return Err(MotionError::InsufficientPoints { needed, got: n });
        }

        self.trials = 0;
        self.degenerate_samples = 0;
        self.failed_fits = 0;

        let (src, dst) = split_points(matches);
        let mut sample = vec![0usize; minpts];
        let mut points1 = Vec::with_capacity(2 * n);
        let mut points2 = Vec::with_capacity(2 * n);
        let mut projected = Vec::with_capacity(2 * n);

        let mut kept: Vec<CandidateMotion> = (0..num_desired_motions)
            .map(|_| CandidateMotion::sentinel(n))
            .collect();
        let mut current = CandidateMotion::sentinel(n);
        let mut worst = 0usize;
        let scoring = InlierScoring::new(self.settings.inlier_threshold_squared());

        while self.trials < self.settings.min_trials {
            if self.is_cancelled() {
                tracing::debug!("motion search cancelled after {} trials", self.trials);
                return Err(MotionError::Cancelled);
            }

            self.draw_sample(n, &src, &mut sample, &mut points1)?;
            gather_points(&dst, &sample, &mut points2);
            self.trials += 1;

            let Some(params) = self.estimator.find_transformation(&points1, &points2) else {
                self.failed_fits += 1;
                tracing::trace!("trial {}: singular fit for sample {:?}", self.trials, sample);
                continue;
            };

            project_points(&params, &src, &mut projected);
            scoring.score(&projected, &dst, &mut current);
            tracing::trace!(
                "trial {}: {} inliers, sse {:.4}",
                self.trials,
                current.num_inliers,
                current.sse
            );

            let worst_kept = &kept[worst];
            if current.num_inliers >= worst_kept.num_inliers
                && current.num_inliers > 1
                && current.is_better_than(worst_kept)
            {
                // Swapping hands the index buffer over without copying; the
                // displaced buffer is reused by the next trial.
                std::mem::swap(&mut kept[worst], &mut current);
                worst = worst_index(&kept);
            }
        }

        let mut models = Vec::with_capacity(num_desired_motions);
        for candidate in kept {
            if candidate.num_inliers < minpts {
                models.push(MotionModel::not_found(model_type));
                continue;
            }

            gather_points(&src, &candidate.inlier_indices, &mut points1);
            gather_points(&dst, &candidate.inlier_indices, &mut points2);
            match self.estimator.find_transformation(&points1, &points2) {
                Some(params) => {
                    let inliers = candidate
                        .inlier_indices
                        .iter()
                        .map(|&i| matches[i])
                        .collect();
                    models.push(MotionModel {
                        model_type,
                        params,
                        num_inliers: candidate.num_inliers,
                        sse: candidate.sse,
                        inlier_indices: candidate.inlier_indices,
                        inliers,
                    });
                }
                None => {
                    tracing::warn!(
                        "refit of {:?} motion on {} inliers is singular, dropping it",
                        model_type,
                        candidate.num_inliers
                    );
                    models.push(MotionModel::not_found(model_type));
                }
            }
        }

        models.sort_by(|a, b| rank_by(a.num_inliers, a.sse, b.num_inliers, b.sse));

        tracing::debug!(
            "{:?} motion search: {} points, {} trials ({} singular, {} degenerate samples), best {} inliers",
            model_type,
            n,
            self.trials,
            self.failed_fits,
            self.degenerate_samples,
            models.first().map_or(0, |m| m.num_inliers)
        );

        Ok(models)
    }

    /// Draw a non-degenerate minimal sample into `sample` and its source
    /// points into `points`.
    fn draw_sample(
        &mut self,
        n: usize,
        src: &[f64],
        sample: &mut [usize],
        points: &mut Vec<f64>,
    ) -> Result<(), MotionError> {
        let minpts = sample.len();
        let mut degenerate = 0usize;
        loop {
            if !self.sampler.sample(n, minpts, sample) {
                return Err(MotionError::SamplingFailed {
                    needed: minpts,
                    available: n,
                });
            }
            gather_points(src, sample, points);
            if !self.estimator.is_degenerate(points) {
                return Ok(());
            }

            degenerate += 1;
            self.degenerate_samples += 1;
            if degenerate >= self.settings.max_degenerate_iter {
                tracing::warn!(
                    "giving up after {} consecutive degenerate samples",
                    degenerate
                );
                return Err(MotionError::DegenerateSamples {
                    attempts: degenerate,
                });
            }
        }
    }
}

/// Index of the worst candidate in `kept`.
fn worst_index(kept: &[CandidateMotion]) -> usize {
    let mut worst = 0;
    for (i, candidate) in kept.iter().enumerate().skip(1) {
        if kept[worst].is_better_than(candidate) {
            worst = i;
        }
    }
    worst
}
