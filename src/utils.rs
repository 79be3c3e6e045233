//! Numerical and random-number utilities shared by the estimators and the
//! sampler.
//!
//! - [`NormalEquations`]: incremental accumulation of `A'A` / `A'b` for small
//!   least-squares problems, solved by Gaussian elimination with partial
//!   pivoting.
//! - [`Lcg16`]: the tiny linear congruential generator used to draw minimal
//!   samples deterministically.

use nalgebra::{SMatrix, SVector};
use rand::{Error, RngCore, SeedableRng};

/// Pivots smaller than this are treated as a singular system.
pub const TINY_NEAR_ZERO: f64 = 1.0e-16;

/// Normal equations `(A'A) x = A'b` of an `N`-unknown least-squares problem.
///
/// Observations are added one row of `A` at a time, so the full design
/// matrix is never materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations<const N: usize> {
    ata: SMatrix<f64, N, N>,
    atb: SVector<f64, N>,
}

impl<const N: usize> Default for NormalEquations<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> NormalEquations<N> {
    pub fn new() -> Self {
        Self {
            ata: SMatrix::zeros(),
            atb: SVector::zeros(),
        }
    }

    /// Add the observation `row . x = b`.
    #[inline]
    pub fn accumulate(&mut self, row: &[f64; N], b: f64) {
        for i in 0..N {
            for j in 0..N {
                self.ata[(i, j)] += row[i] * row[j];
            }
            self.atb[i] += row[i] * b;
        }
    }

    /// Solve the accumulated system.
    ///
    /// Returns `None` if a pivot falls below [`TINY_NEAR_ZERO`] or the
    /// solution is not finite. The accumulators are left untouched.
    pub fn solve(&self) -> Option<SVector<f64, N>> {
        let mut a = self.ata;
        let mut b = self.atb;

        // Forward elimination with partial pivoting.
        for i in 0..N {
            let mut max_row = i;
            let mut max_val = a[(i, i)].abs();
            for k in (i + 1)..N {
                let val = a[(k, i)].abs();
                if val > max_val {
                    max_val = val;
                    max_row = k;
                }
            }

            if max_row != i {
                a.swap_rows(i, max_row);
                b.swap_rows(i, max_row);
            }

            if a[(i, i)].abs() < TINY_NEAR_ZERO {
                return None;
            }

            for k in (i + 1)..N {
                let factor = a[(k, i)] / a[(i, i)];
                for j in i..N {
                    a[(k, j)] -= factor * a[(i, j)];
                }
                b[k] -= factor * b[i];
            }
        }

        // Back-substitution.
        let mut x = SVector::<f64, N>::zeros();
        for i in (0..N).rev() {
            let mut acc = b[i];
            for j in (i + 1)..N {
                acc -= a[(i, j)] * x[j];
            }
            x[i] = acc / a[(i, i)];
        }

        if x.iter().all(|v| v.is_finite()) {
            Some(x)
        } else {
            None
        }
    }
}

/// 16-bit-output linear congruential generator.
///
/// `state = state * 1103515245 + 12345`, output `(state / 65536) % 32768`.
/// Each call to [`RngCore::next_u32`] therefore yields 15 random bits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg16 {
    state: u32,
}

impl Lcg16 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    #[inline]
    pub fn next_rand16(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        (self.state / 65_536) % 32_768
    }
}

impl RngCore for Lcg16 {
    fn next_u32(&mut self) -> u32 {
        self.next_rand16()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_rand16());
        let lo = u64::from(self.next_rand16());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(2) {
            let bytes = (self.next_rand16() as u16).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg16 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
