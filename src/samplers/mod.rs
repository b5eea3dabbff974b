//! Sampling strategies for RANSAC minimal samples.

pub mod uniform;

pub use uniform::UniformRandomSampler;
