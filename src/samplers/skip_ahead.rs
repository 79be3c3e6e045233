//! Uniform sampler drawing distinct indices by skipping ahead over a cursor.

use rand::RngCore;

use crate::core::Sampler;
use crate::utils::Lcg16;

/// Range covered by one [`Lcg16`] draw.
const RAND15_SPAN: usize = 1 << 15;
const RAND15_MASK: u32 = (1 << 15) - 1;

/// Draws `sample_size` distinct indices from `[0, n)`.
///
/// The first index is `r % n`, where `r` joins two 15-bit draws once `n`
/// exceeds the range of one. Every further index is found by moving a
/// cursor forward (wrapping) over `r % (n - i)` not-yet-chosen positions, so
/// distinctness never needs rejection and the cost of a draw is bounded by
/// `O(n * sample_size)`.
pub struct SkipAheadSampler<R: RngCore = Lcg16> {
    rng: R,
}

impl SkipAheadSampler<Lcg16> {
    /// Sampler backed by an [`Lcg16`] seeded with `seed`.
    pub fn new(seed: u32) -> Self {
        Self::from_rng(Lcg16::new(seed))
    }
}

impl<R: RngCore> SkipAheadSampler<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    #[inline]
    fn next_below(&mut self, bound: usize) -> usize {
        if bound <= RAND15_SPAN {
            return self.rng.next_u32() as usize % bound;
        }
        let hi = (self.rng.next_u32() & RAND15_MASK) as usize;
        let lo = (self.rng.next_u32() & RAND15_MASK) as usize;
        ((hi << 15) | lo) % bound
    }
}

impl<R: RngCore> Sampler for SkipAheadSampler<R> {
    fn sample(&mut self, num_points: usize, sample_size: usize, out_indices: &mut [usize]) -> bool {
        if sample_size == 0 || sample_size > num_points || out_indices.len() < sample_size {
            return false;
        }

        let mut cursor = self.next_below(num_points);
        out_indices[0] = cursor;

        for i in 1..sample_size {
            cursor = (cursor + 1) % num_points;
            let mut skip = self.next_below(num_points - i);
            loop {
                if !out_indices[..i].contains(&cursor) {
                    if skip == 0 {
                        break;
                    }
                    skip -= 1;
                }
                cursor = (cursor + 1) % num_points;
            }
            out_indices[i] = cursor;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn assert_distinct(indices: &[usize], n: usize) {
        for i in 0..indices.len() {
            assert!(indices[i] < n);
            for j in (i + 1)..indices.len() {
                assert_ne!(indices[i], indices[j], "duplicate in {indices:?}");
            }
        }
    }

    #[test]
    fn samples_are_distinct_and_in_range() {
        let mut sampler = SkipAheadSampler::new(42);
        let mut buf = [0usize; 3];
        for _ in 0..1000 {
            assert!(sampler.sample(17, 3, &mut buf));
            assert_distinct(&buf, 17);
        }
    }

    #[test]
    fn full_draw_is_a_permutation() {
        let mut sampler = SkipAheadSampler::new(7);
        let mut buf = [0usize; 6];
        assert!(sampler.sample(6, 6, &mut buf));
        let mut sorted = buf;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn same_seed_same_samples() {
        let mut a = SkipAheadSampler::new(100);
        let mut b = SkipAheadSampler::new(100);
        let (mut x, mut y) = ([0usize; 3], [0usize; 3]);
        for _ in 0..50 {
            a.sample(100, 3, &mut x);
            b.sample(100, 3, &mut y);
            assert_eq!(x, y);
        }
    }

    #[test]
    fn rejects_oversized_requests() {
        let mut sampler = SkipAheadSampler::new(1);
        let mut buf = [0usize; 4];
        assert!(!sampler.sample(3, 4, &mut buf));
        assert!(!sampler.sample(0, 1, &mut buf));
        assert!(!sampler.sample(10, 5, &mut buf));
    }

    #[test]
    fn large_sets_are_sampled_past_the_first_draw_range() {
        let n = 100_000;
        let mut sampler = SkipAheadSampler::new(n as u32);
        let mut buf = [0usize; 3];
        let mut max_first = 0;
        for _ in 0..2000 {
            assert!(sampler.sample(n, 3, &mut buf));
            assert_distinct(&buf, n);
            max_first = max_first.max(buf[0]);
        }
        assert!(max_first > 65_536, "first index never above {max_first}");
    }

    #[test]
    fn small_sets_use_one_draw_per_index() {
        let mut sampler = SkipAheadSampler::new(5);
        let mut rng = Lcg16::new(5);
        let mut buf = [0usize; 1];
        for _ in 0..20 {
            assert!(sampler.sample(1000, 1, &mut buf));
            assert_eq!(buf[0], rng.next_rand16() as usize % 1000);
        }
    }

    #[test]
    fn every_index_is_reachable() {
        let mut sampler = SkipAheadSampler::from_rng(StdRng::seed_from_u64(3));
        let mut seen = [false; 10];
        let mut buf = [0usize; 3];
        for _ in 0..500 {
            sampler.sample(10, 3, &mut buf);
            assert_distinct(&buf, 10);
            for &i in &buf {
                seen[i] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
