//! # Medguide
//!
//! Symptom-to-disease inference with allergy-aware medication guidance
//! and pairwise drug interaction checks.
//!
//! This crate provides:
//! - Binary symptom vectorization against a fixed symptom index
//! - Disease classification through a pluggable predictive model
//! - Multi-source guidance lookup (description, precautions, diet, workout)
//! - Allergy-filtered medication recommendation
//! - Symmetric drug interaction resolution
//!
//! ## Architecture
//!
//! The crate follows Hexagonal Architecture:
//! - `domain`: Core business types (symptom index, reference tables, reports)
//! - `ports`: Trait definitions for external capabilities (the classifier)
//! - `adapters`: Concrete implementations (CSV table loading, linear model)
//! - `application`: Use cases orchestrating domain and ports

pub mod adapters;
pub mod application;
pub mod domain;
pub mod ports;

pub use application::InferenceService;
pub use domain::{InferenceReport, InferenceRequest, ReferenceData};

/// Result type for Medguide operations
pub type Result<T> = std::result::Result<T, MedguideError>;

/// Main error type for Medguide
#[derive(Debug, thiserror::Error)]
pub enum MedguideError {
    #[error("Inference failed: {0}")]
    Inference(#[from] ports::ClassifierError),

    #[error("Classifier returned class index {index}, but the disease catalog has {catalog_len} entries")]
    ClassIndexOutOfRange { index: usize, catalog_len: usize },

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Failed to load reference tables: {0}")]
    Load(#[from] adapters::LoadError),

    #[error("Model artifact error: {0}")]
    Artifact(#[from] adapters::ArtifactError),
}
