//! Per-disease guidance tables: description, precautions, diet, workout.
//!
//! These tables are keyed by exact disease name and are read-only after
//! load. Absence of a disease in any table is a valid state, not an error;
//! the aggregate simply comes back empty.

use std::collections::HashMap;

/// Maximum number of precaution columns per source row.
pub const PRECAUTION_COLUMNS: usize = 4;

/// Aggregated guidance for a single disease.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiseaseGuidance {
    /// Space-joined description text; empty when no row matches.
    pub description: String,
    /// Flattened precaution entries, row-then-column order. Blank source
    /// cells are kept as empty strings.
    pub precautions: Vec<String>,
    /// Diet entries in table order.
    pub diets: Vec<String>,
    /// Workout entries in table order.
    pub workouts: Vec<String>,
}

/// Reference tables mapping a disease name to its guidance entries.
#[derive(Debug, Clone, Default)]
pub struct GuidanceTables {
    descriptions: HashMap<String, Vec<String>>,
    precautions: HashMap<String, Vec<String>>,
    diets: HashMap<String, Vec<String>>,
    workouts: HashMap<String, Vec<String>>,
}

impl GuidanceTables {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one description row for a disease.
    pub fn push_description(&mut self, disease: impl Into<String>, text: impl Into<String>) {
        self.descriptions
            .entry(disease.into())
            .or_default()
            .push(text.into());
    }

    /// Record one precaution row (up to 4 columns) for a disease.
    ///
    /// Missing cells are flattened to empty strings so the column positions
    /// of later cells in the same row are preserved.
    pub fn push_precaution_row(
        &mut self,
        disease: impl Into<String>,
        row: [Option<String>; PRECAUTION_COLUMNS],
    ) {
        let entries = self.precautions.entry(disease.into()).or_default();
        for cell in row {
            entries.push(cell.unwrap_or_default());
        }
    }

    /// Record one diet entry for a disease.
    pub fn push_diet(&mut self, disease: impl Into<String>, diet: impl Into<String>) {
        self.diets.entry(disease.into()).or_default().push(diet.into());
    }

    /// Record one workout entry for a disease.
    pub fn push_workout(&mut self, disease: impl Into<String>, workout: impl Into<String>) {
        self.workouts
            .entry(disease.into())
            .or_default()
            .push(workout.into());
    }

    /// Gather all guidance for a disease by exact name match.
    ///
    /// A disease absent from any (or every) table is not an error; the
    /// corresponding parts of the result are simply empty.
    #[must_use]
    pub fn aggregate(&self, disease: &str) -> DiseaseGuidance {
        DiseaseGuidance {
            description: self
                .descriptions
                .get(disease)
                .map(|rows| rows.join(" "))
                .unwrap_or_default(),
            precautions: self.precautions.get(disease).cloned().unwrap_or_default(),
            diets: self.diets.get(disease).cloned().unwrap_or_default(),
            workouts: self.workouts.get(disease).cloned().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> GuidanceTables {
        let mut t = GuidanceTables::new();
        t.push_description("Fungal infection", "Caused by fungi invading the skin.");
        t.push_precaution_row(
            "Fungal infection",
            [
                Some("bath twice".to_string()),
                Some("use clean cloths".to_string()),
                None,
                Some("keep area dry".to_string()),
            ],
        );
        t.push_diet("Fungal infection", "Antifungal Diet");
        t.push_workout("Fungal infection", "Avoid sugary foods");
        t.push_workout("Fungal infection", "Consume probiotics");
        t
    }

    #[test]
    fn test_aggregate_known_disease() {
        let guidance = tables().aggregate("Fungal infection");
        assert_eq!(guidance.description, "Caused by fungi invading the skin.");
        assert_eq!(
            guidance.precautions,
            vec!["bath twice", "use clean cloths", "", "keep area dry"]
        );
        assert_eq!(guidance.diets, vec!["Antifungal Diet"]);
        assert_eq!(
            guidance.workouts,
            vec!["Avoid sugary foods", "Consume probiotics"]
        );
    }

    #[test]
    fn test_aggregate_unknown_disease_is_empty() {
        let guidance = tables().aggregate("Migraine");
        assert_eq!(guidance, DiseaseGuidance::default());
    }

    #[test]
    fn test_description_rows_are_space_joined() {
        let mut t = GuidanceTables::new();
        t.push_description("Allergy", "An immune response.");
        t.push_description("Allergy", "Often seasonal.");
        let guidance = t.aggregate("Allergy");
        assert_eq!(guidance.description, "An immune response. Often seasonal.");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let guidance = tables().aggregate("fungal infection");
        assert!(guidance.description.is_empty());
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let t = tables();
        assert_eq!(t.aggregate("Fungal infection"), t.aggregate("Fungal infection"));
    }
}
