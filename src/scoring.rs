//! Inlier scoring and the ordering of candidate motions.
//!
//! A [`CandidateMotion`] is the mutable accumulator filled while scoring one
//! trial: inlier count, sum of squared inlier residuals and the inlier
//! indices. Candidates are ranked by inlier count first and by lower SSE
//! second.

use std::cmp::Ordering;

/// Running statistics of one hypothesis.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMotion {
    pub num_inliers: usize,
    pub sse: f64,
    /// Ascending, unique indices into the correspondence array.
    pub inlier_indices: Vec<usize>,
}

impl CandidateMotion {
    /// Worst possible candidate: no inliers and infinite error.
    ///
    /// `capacity` is reserved up front so refilling the candidate never
    /// reallocates.
    pub fn sentinel(capacity: usize) -> Self {
        Self {
            num_inliers: 0,
            sse: f64::INFINITY,
            inlier_indices: Vec::with_capacity(capacity),
        }
    }

    /// Reset to the sentinel state while keeping the index buffer.
    pub fn clear(&mut self) {
        self.num_inliers = 0;
        self.sse = f64::INFINITY;
        self.inlier_indices.clear();
    }

    /// `self` has more inliers, or as many inliers and a lower SSE.
    pub fn is_better_than(&self, other: &CandidateMotion) -> bool {
        self.num_inliers > other.num_inliers
            || (self.num_inliers == other.num_inliers && self.sse < other.sse)
    }
}

/// Best-first ordering on `(num_inliers, sse)` pairs.
pub fn rank_by(inliers_a: usize, sse_a: f64, inliers_b: usize, sse_b: f64) -> Ordering {
    inliers_b
        .cmp(&inliers_a)
        .then_with(|| sse_a.total_cmp(&sse_b))
}

/// Inlier test on squared reprojection error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InlierScoring {
    threshold_sq: f64,
}

impl InlierScoring {
    /// `threshold_sq` is the squared inlier distance.
    pub fn new(threshold_sq: f64) -> Self {
        Self { threshold_sq }
    }

    /// Compare projected points against their destinations and fill
    /// `candidate` with the points whose squared error is below the threshold.
    ///
    /// Both buffers are interleaved `[x0, y0, x1, y1, ...]`.
    pub fn score(&self, projected: &[f64], dst: &[f64], candidate: &mut CandidateMotion) {
        candidate.clear();
        let mut sse = 0.0;
        for (i, (p, d)) in projected
            .chunks_exact(2)
            .zip(dst.chunks_exact(2))
            .enumerate()
        {
            let dx = p[0] - d[0];
            let dy = p[1] - d[1];
            let err = dx * dx + dy * dy;
            if err < self.threshold_sq {
                candidate.inlier_indices.push(i);
                sse += err;
            }
        }
        candidate.num_inliers = candidate.inlier_indices.len();
        candidate.sse = sse;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(num_inliers: usize, sse: f64) -> CandidateMotion {
        CandidateMotion {
            num_inliers,
            sse,
            inlier_indices: (0..num_inliers).collect(),
        }
    }

    #[test]
    fn more_inliers_wins() {
        assert!(candidate(5, 10.0).is_better_than(&candidate(4, 0.0)));
        assert!(!candidate(4, 0.0).is_better_than(&candidate(5, 10.0)));
    }

    #[test]
    fn lower_sse_breaks_ties() {
        assert!(candidate(5, 1.0).is_better_than(&candidate(5, 2.0)));
        assert!(!candidate(5, 2.0).is_better_than(&candidate(5, 2.0)));
    }

    #[test]
    fn sentinel_loses_to_any_scored_candidate() {
        let sentinel = CandidateMotion::sentinel(8);
        assert!(candidate(0, 0.0).is_better_than(&sentinel));
        assert!(!sentinel.is_better_than(&sentinel));
    }

    #[test]
    fn rank_sorts_best_first() {
        let mut v = vec![candidate(3, 1.0), candidate(7, 2.0), candidate(7, 0.5)];
        v.sort_by(|a, b| rank_by(a.num_inliers, a.sse, b.num_inliers, b.sse));
        let keys: Vec<(usize, f64)> = v.iter().map(|c| (c.num_inliers, c.sse)).collect();
        assert_eq!(keys, vec![(7, 0.5), (7, 2.0), (3, 1.0)]);
    }

    #[test]
    fn score_counts_points_under_threshold() {
        let scoring = InlierScoring::new(1.25 * 1.25);

        let projected = [0.0, 0.0, 10.0, 10.0, 5.0, 5.0, 1.0, 1.0];
        let dst = [0.5, 0.0, 10.0, 11.25, 5.0, 5.0, 3.0, 1.0];
        let mut c = CandidateMotion::sentinel(4);
        scoring.score(&projected, &dst, &mut c);

        // 11.25 - 10 = 1.25 gives exactly the threshold and is rejected.
        assert_eq!(c.inlier_indices, vec![0, 2]);
        assert_eq!(c.num_inliers, 2);
        assert!((c.sse - 0.25).abs() < 1e-12);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut c = CandidateMotion::sentinel(32);
        c.inlier_indices.extend(0..10);
        c.num_inliers = 10;
        c.sse = 1.0;
        c.clear();
        assert_eq!(c.num_inliers, 0);
        assert!(c.sse.is_infinite());
        assert!(c.inlier_indices.capacity() >= 32);
    }
}
