//! Ports layer: Trait definitions for external capabilities.
//!
//! Following Hexagonal Architecture, these traits define the boundary
//! between the pipeline and the external predictive model.

mod classifier;

pub use classifier::{ClassifierError, DiseaseClassifier};
