//! Inference service: Orchestrates the symptom-to-guidance pipeline.
//!
//! This service coordinates:
//! - Symptom vectorization
//! - Disease classification
//! - Guidance aggregation
//! - Allergy-filtered medication recommendation
//! - Pairwise interaction resolution
//!
//! Each request runs the pipeline synchronously to completion. The
//! reference data is shared immutably, so any number of requests can run
//! against the same service concurrently without locking.

use std::sync::Arc;

use crate::domain::{InferenceReport, InferenceRequest, PairCheck, ReferenceData};
use crate::ports::DiseaseClassifier;
use crate::MedguideError;

/// Service for running the full inference-and-recommendation pipeline.
pub struct InferenceService<C>
where
    C: DiseaseClassifier,
{
    reference: Arc<ReferenceData>,
    classifier: Arc<C>,
}

impl<C> InferenceService<C>
where
    C: DiseaseClassifier,
{
    /// Create a new inference service over shared reference data.
    pub fn new(reference: Arc<ReferenceData>, classifier: Arc<C>) -> Self {
        Self {
            reference,
            classifier,
        }
    }

    /// Run the full pipeline for one request.
    ///
    /// Performs, in order:
    /// 1. Vectorize the reported symptoms
    /// 2. Classify the feature vector into a disease
    /// 3. Aggregate guidance and recommend medications for that disease
    /// 4. Resolve pairwise interactions over the recommended medications
    ///
    /// Absent reference data degrades to empty report fields; only a
    /// classifier failure (or an out-of-range class index) fails the
    /// request.
    ///
    /// # Errors
    /// Returns `MedguideError::Inference` or
    /// `MedguideError::ClassIndexOutOfRange` if classification fails.
    pub fn run(&self, request: &InferenceRequest) -> Result<InferenceReport, MedguideError> {
        tracing::info!("Starting inference pipeline...");

        tracing::debug!(
            "Step 1: Vectorizing {} reported symptoms...",
            request.symptoms.len()
        );
        let vector = self.reference.symptoms.vectorize(&request.symptoms);

        tracing::debug!("Step 2: Classifying feature vector...");
        let index = self.classifier.predict(&vector)?;
        let disease = self
            .reference
            .diseases
            .name(index)
            .ok_or(MedguideError::ClassIndexOutOfRange {
                index,
                catalog_len: self.reference.diseases.len(),
            })?
            .to_string();

        tracing::debug!("Step 3: Aggregating guidance for {disease}...");
        let guidance = self.reference.guidance.aggregate(&disease);
        if guidance.description.is_empty() {
            tracing::warn!("No description on record for {disease}");
        }

        let medications = self
            .reference
            .medications
            .recommend(&disease, &request.allergies);

        tracing::debug!(
            "Step 4: Resolving interactions over {} medications...",
            medications.len()
        );
        let interactions = self.reference.interactions.resolve(&medications);

        tracing::info!(
            "Inference complete: disease={}, medications={}, interaction warnings={}",
            disease,
            medications.len(),
            interactions.len()
        );

        Ok(InferenceReport {
            disease,
            description: guidance.description,
            precautions: guidance.precautions,
            diets: guidance.diets,
            workout: guidance.workouts,
            medications,
            interactions,
            generated_at: chrono::Utc::now(),
        })
    }

    /// All drug names known to the interaction table, sorted, for use in
    /// a selection UI.
    #[must_use]
    pub fn known_drugs(&self) -> Vec<String> {
        self.reference.interactions.known_drugs()
    }

    /// Check a single named pair of drugs directly, bypassing inference.
    #[must_use]
    pub fn check_pair(&self, drug_a: &str, drug_b: &str) -> PairCheck {
        self.reference.interactions.check_pair(drug_a, drug_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::linear::ModelArtifact;
    use crate::domain::{
        GuidanceTables, InteractionTable, MedicationTable, NO_INTERACTION_DATA,
    };
    use crate::ports::ClassifierError;

    fn fixture_artifact() -> ModelArtifact {
        ModelArtifact {
            symptoms: vec![
                "itching".to_string(),
                "skin_rash".to_string(),
                "continuous_sneezing".to_string(),
                "joint_pain".to_string(),
            ],
            diseases: vec!["Fungal infection".to_string(), "Allergy".to_string()],
            weights: vec![vec![1.0, 1.0, 0.0, 0.0], vec![0.0, 0.0, 2.0, 0.0]],
            intercepts: vec![0.0, 0.0],
        }
    }

    fn fixture_reference(meds: &[(&str, &str)]) -> Arc<ReferenceData> {
        let artifact = fixture_artifact();
        let symptoms = crate::domain::SymptomIndex::from_ordered(artifact.symptoms.clone())
            .expect("Should build index");
        let diseases = crate::domain::DiseaseCatalog::new(artifact.diseases.clone());

        let mut guidance = GuidanceTables::new();
        guidance.push_description("Fungal infection", "Caused by fungi invading the skin.");
        guidance.push_diet("Fungal infection", "Antifungal Diet");

        let mut medications = MedicationTable::new();
        for (disease, med) in meds {
            medications.push(disease, *med);
        }

        let mut interactions = InteractionTable::new();
        interactions.insert("Warfarin", "Aspirin", "Increased risk of bleeding.");

        Arc::new(ReferenceData::new(
            symptoms,
            diseases,
            guidance,
            medications,
            interactions,
        ))
    }

    fn fixture_service(
        meds: &[(&str, &str)],
    ) -> InferenceService<crate::adapters::linear::LinearClassifier> {
        let (_, _, classifier) = fixture_artifact().into_parts().expect("Should split");
        InferenceService::new(fixture_reference(meds), Arc::new(classifier))
    }

    #[test]
    fn test_end_to_end_itching_skin_rash() {
        let service = fixture_service(&[("Fungal infection", "Fluconazole")]);
        let request = InferenceRequest::new(
            vec!["itching".to_string(), "skin_rash".to_string()],
            vec![],
        );

        let report = service.run(&request).expect("Should run pipeline");
        assert_eq!(report.disease, "Fungal infection");
        assert_eq!(report.description, "Caused by fungi invading the skin.");
        assert_eq!(report.diets, vec!["Antifungal Diet"]);
        assert_eq!(report.medications, vec!["Fluconazole"]);
        // Fewer than 2 medications can form no pair.
        assert!(report.interactions.is_empty());
    }

    #[test]
    fn test_end_to_end_interaction_warning() {
        let service = fixture_service(&[
            ("Fungal infection", "Warfarin"),
            ("Fungal infection", "Aspirin"),
        ]);
        let request = InferenceRequest::new(
            vec!["itching".to_string(), "skin_rash".to_string()],
            vec![],
        );

        let report = service.run(&request).expect("Should run pipeline");
        assert_eq!(
            report.interactions,
            vec!["Warfarin + Aspirin: Increased risk of bleeding."]
        );
    }

    #[test]
    fn test_allergy_removes_medication_and_its_warnings() {
        let service = fixture_service(&[
            ("Fungal infection", "Warfarin"),
            ("Fungal infection", "Aspirin"),
        ]);
        let request = InferenceRequest::new(
            vec!["itching".to_string()],
            vec!["warfarin".to_string()],
        );

        let report = service.run(&request).expect("Should run pipeline");
        assert_eq!(report.medications, vec!["Aspirin"]);
        assert!(report.interactions.is_empty());
    }

    #[test]
    fn test_unknown_symptoms_degrade_gracefully() {
        let service = fixture_service(&[("Fungal infection", "Fluconazole")]);
        let request = InferenceRequest::new(
            vec!["no_such_symptom".to_string(), "continuous_sneezing".to_string()],
            vec![],
        );

        let report = service.run(&request).expect("Should run pipeline");
        // Allergy has no guidance or medications on record; the report is
        // still returned with empty fields.
        assert_eq!(report.disease, "Allergy");
        assert!(report.description.is_empty());
        assert!(report.medications.is_empty());
        assert!(report.interactions.is_empty());
    }

    #[test]
    fn test_out_of_range_class_index_is_fatal() {
        struct OutOfRange;
        impl DiseaseClassifier for OutOfRange {
            fn predict(&self, _features: &[f64]) -> Result<usize, ClassifierError> {
                Ok(99)
            }
        }

        let service = InferenceService::new(fixture_reference(&[]), Arc::new(OutOfRange));
        let err = service
            .run(&InferenceRequest::default())
            .expect_err("Should fail");
        assert!(matches!(
            err,
            MedguideError::ClassIndexOutOfRange { index: 99, catalog_len: 2 }
        ));
    }

    #[test]
    fn test_classifier_failure_is_fatal() {
        struct Broken;
        impl DiseaseClassifier for Broken {
            fn predict(&self, _features: &[f64]) -> Result<usize, ClassifierError> {
                Err(ClassifierError::Unavailable("model offline".to_string()))
            }
        }

        let service = InferenceService::new(fixture_reference(&[]), Arc::new(Broken));
        let err = service
            .run(&InferenceRequest::default())
            .expect_err("Should fail");
        assert!(matches!(err, MedguideError::Inference(_)));
    }

    #[test]
    fn test_direct_pair_check_interfaces() {
        let service = fixture_service(&[]);

        let known = service.check_pair("warfarin", "ASPIRIN ");
        assert_eq!(known.drug_a, "Warfarin");
        assert_eq!(known.drug_b, "Aspirin");
        assert_eq!(known.interaction, "Increased risk of bleeding.");

        let unknown = service.check_pair("aspirin", "metformin");
        assert_eq!(unknown.interaction, NO_INTERACTION_DATA);

        assert_eq!(service.known_drugs(), vec!["aspirin", "warfarin"]);
    }
}
