//! Linear model adapter: Implementation of DiseaseClassifier.
//!
//! Loads a serialized one-vs-rest linear model from a JSON artifact and
//! scores feature vectors against it. The artifact also carries the
//! ordered symptom and disease name lists, so it is the single source of
//! truth for the symptom index and the disease catalog.
//!
//! Prediction is a plain argmax over per-class scores. Ties resolve to the
//! lowest class index, keeping the classifier deterministic.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{DiseaseCatalog, SymptomIndex};
use crate::ports::{ClassifierError, DiseaseClassifier};

/// Error type for model artifact handling.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid artifact JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Inconsistent artifact: {0}")]
    Inconsistent(String),
}

/// Model parameters exported by the training pipeline.
///
/// One weight row per disease class, one weight column per symptom.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Ordered symptom names; position defines the feature vector layout.
    pub symptoms: Vec<String>,
    /// Ordered disease names; position defines the class index.
    pub diseases: Vec<String>,
    /// Per-class weight vectors, `diseases.len()` rows of
    /// `symptoms.len()` columns.
    pub weights: Vec<Vec<f64>>,
    /// Per-class intercepts.
    pub intercepts: Vec<f64>,
}

impl ModelArtifact {
    /// Load and validate an artifact from a JSON file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, is not valid JSON, or is
    /// internally inconsistent.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let contents = std::fs::read_to_string(path)?;
        let artifact: Self = serde_json::from_str(&contents)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Check the artifact's internal shape consistency.
    ///
    /// # Errors
    /// Returns `ArtifactError::Inconsistent` with a description of the
    /// first mismatch found.
    pub fn validate(&self) -> Result<(), ArtifactError> {
        if self.weights.len() != self.diseases.len() {
            return Err(ArtifactError::Inconsistent(format!(
                "{} weight rows for {} diseases",
                self.weights.len(),
                self.diseases.len()
            )));
        }
        if self.intercepts.len() != self.diseases.len() {
            return Err(ArtifactError::Inconsistent(format!(
                "{} intercepts for {} diseases",
                self.intercepts.len(),
                self.diseases.len()
            )));
        }
        if let Some(row) = self
            .weights
            .iter()
            .find(|row| row.len() != self.symptoms.len())
        {
            return Err(ArtifactError::Inconsistent(format!(
                "Weight row has {} columns, expected {} (one per symptom)",
                row.len(),
                self.symptoms.len()
            )));
        }
        Ok(())
    }

    /// Split the artifact into the symptom index, the disease catalog and
    /// a ready-to-use classifier.
    ///
    /// Re-validates the shapes first, since the fields are public and an
    /// artifact may have been assembled without going through `load`.
    ///
    /// # Errors
    /// Returns `ArtifactError::Inconsistent` if the shapes disagree or the
    /// symptom list contains duplicates.
    pub fn into_parts(
        self,
    ) -> Result<(SymptomIndex, DiseaseCatalog, LinearClassifier), ArtifactError> {
        self.validate()?;
        let index = SymptomIndex::from_ordered(self.symptoms).map_err(ArtifactError::Inconsistent)?;
        let catalog = DiseaseCatalog::new(self.diseases);
        let classifier = LinearClassifier {
            num_features: index.len(),
            weights: self.weights,
            intercepts: self.intercepts,
        };
        Ok((index, catalog, classifier))
    }
}

/// One-vs-rest linear classifier over binary symptom vectors.
#[derive(Debug, Clone)]
pub struct LinearClassifier {
    num_features: usize,
    weights: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl DiseaseClassifier for LinearClassifier {
    fn predict(&self, features: &[f64]) -> Result<usize, ClassifierError> {
        if features.len() != self.num_features {
            return Err(ClassifierError::FeatureShape {
                expected: self.num_features,
                got: features.len(),
            });
        }
        if self.weights.is_empty() {
            return Err(ClassifierError::Unavailable(
                "Model has no classes".to_string(),
            ));
        }

        let mut best_index = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (index, row) in self.weights.iter().enumerate() {
            let score: f64 = row
                .iter()
                .zip(features)
                .map(|(w, x)| w * x)
                .sum::<f64>()
                + self.intercepts[index];
            if score > best_score {
                best_score = score;
                best_index = index;
            }
        }
        Ok(best_index)
    }
}
