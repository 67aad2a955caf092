//! Classifier port: Trait for the pluggable disease prediction model.
//!
//! The pipeline treats the model as an opaque capability: any deterministic
//! implementation that maps a feature vector to a class index satisfies the
//! contract, whether it is a linear model, a decision tree, or a lookup
//! table. Bounds-checking the returned index against the disease catalog is
//! the pipeline's job, not the implementation's.

/// Error type for classifier operations.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("Classifier unavailable: {0}")]
    Unavailable(String),

    #[error("Feature vector has {got} entries, model expects {expected}")]
    FeatureShape { expected: usize, got: usize },
}

/// Trait for disease classification.
pub trait DiseaseClassifier: Send + Sync {
    /// Predict a disease class index from a binary feature vector.
    ///
    /// Must be deterministic: identical input vectors yield identical
    /// indices.
    ///
    /// # Errors
    /// Returns `ClassifierError::FeatureShape` if the vector length does
    /// not match the model, or `ClassifierError::Unavailable` if the model
    /// cannot serve predictions.
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError>;
}
