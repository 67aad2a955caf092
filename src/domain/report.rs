//! Request and report types at the pipeline boundary.

use serde::{Deserialize, Serialize};

/// One inference request as supplied by the calling layer.
///
/// Both fields default to empty lists, matching what the upstream request
/// body allows. Empty symptoms are a valid (if uninformative) input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InferenceRequest {
    /// Reported symptom names; unknown names are dropped during
    /// vectorization.
    #[serde(default)]
    pub symptoms: Vec<String>,

    /// Patient allergy names, matched whole-name and case-insensitively
    /// against recommended medications.
    #[serde(default)]
    pub allergies: Vec<String>,
}

impl InferenceRequest {
    /// Create a request from symptom and allergy lists.
    #[must_use]
    pub fn new(symptoms: Vec<String>, allergies: Vec<String>) -> Self {
        Self { symptoms, allergies }
    }

    /// Parse a request from its JSON wire form.
    ///
    /// Missing fields default to empty lists; anything else wrong with
    /// the payload shape is a request-level error, surfaced before the
    /// pipeline runs.
    ///
    /// # Errors
    /// Returns `MedguideError::MalformedRequest` on invalid input.
    pub fn from_json(json: &str) -> Result<Self, crate::MedguideError> {
        serde_json::from_str(json).map_err(|e| crate::MedguideError::MalformedRequest(e.to_string()))
    }
}

/// The structured result of one full pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceReport {
    /// Predicted disease name.
    pub disease: String,

    /// Space-joined description text; empty if none is on record.
    pub description: String,

    /// Flattened precaution entries.
    pub precautions: Vec<String>,

    /// Diet entries in table order.
    pub diets: Vec<String>,

    /// Workout entries in table order.
    pub workout: Vec<String>,

    /// Allergy-filtered, de-duplicated medication recommendations.
    pub medications: Vec<String>,

    /// Pairwise interaction warnings over the recommended medications.
    pub interactions: Vec<String>,

    /// Timestamp of report creation.
    pub generated_at: chrono::DateTime<chrono::Utc>,
}
