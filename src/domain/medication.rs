//! Medication table and allergy-aware recommendation.

use std::collections::HashMap;

/// Mapping from disease name to its registered medications.
///
/// Disease names are matched case-insensitively, unlike the guidance
/// tables, because the medication source spells them inconsistently.
/// Medication lists keep their source row order.
#[derive(Debug, Clone, Default)]
pub struct MedicationTable {
    by_disease: HashMap<String, Vec<String>>,
}

impl MedicationTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one medication for a disease.
    pub fn push(&mut self, disease: &str, medication: impl Into<String>) {
        self.by_disease
            .entry(disease.to_lowercase())
            .or_default()
            .push(medication.into());
    }

    /// Recommend medications for a disease, excluding the patient's allergies.
    ///
    /// Allergy matching is whole-name and case-insensitive. The result is
    /// de-duplicated while preserving first-seen order. A disease with no
    /// registered medications yields an empty list.
    #[must_use]
    pub fn recommend<S: AsRef<str>>(&self, disease: &str, allergies: &[S]) -> Vec<String> {
        let candidates = match self.by_disease.get(&disease.to_lowercase()) {
            Some(meds) => meds,
            None => return Vec::new(),
        };

        let allergies: Vec<String> = allergies
            .iter()
            .map(|a| a.as_ref().to_lowercase())
            .collect();

        let mut recommended: Vec<String> = Vec::new();
        for medication in candidates {
            if allergies.contains(&medication.to_lowercase()) {
                continue;
            }
            if !recommended.contains(medication) {
                recommended.push(medication.clone());
            }
        }
        recommended
    }
}
