//! Application layer: Use cases and services.
//!
//! This module orchestrates domain logic with ports to implement
//! the inference-and-recommendation pipeline.

mod inference;

pub use inference::InferenceService;
