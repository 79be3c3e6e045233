//! Sampling strategies for drawing minimal sets.
//!
//! The estimator only needs one strategy: uniformly drawn distinct indices
//! from a deterministic generator. It sits behind the
//! [`Sampler`](crate::core::Sampler) trait so tests can script the samples.

pub mod skip_ahead;

pub use skip_ahead::SkipAheadSampler;
