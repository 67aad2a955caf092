//! The process-wide reference data store.

use crate::domain::{
    DiseaseCatalog, GuidanceTables, InteractionTable, MedicationTable, SymptomIndex,
};

/// Immutable reference data backing every pipeline invocation.
///
/// Constructed once at startup from the loaded tables and the model
/// artifact's symptom/disease lists, then shared by reference (typically
/// behind an `Arc`). Nothing mutates it after construction, so concurrent
/// readers need no locking. Building it explicitly instead of using
/// process globals lets independent instances coexist in tests.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub symptoms: SymptomIndex,
    pub diseases: DiseaseCatalog,
    pub guidance: GuidanceTables,
    pub medications: MedicationTable,
    pub interactions: InteractionTable,
}

impl ReferenceData {
    /// Assemble the store from its component tables.
    #[must_use]
    pub fn new(
        symptoms: SymptomIndex,
        diseases: DiseaseCatalog,
        guidance: GuidanceTables,
        medications: MedicationTable,
        interactions: InteractionTable,
    ) -> Self {
        Self {
            symptoms,
            diseases,
            guidance,
            medications,
            interactions,
        }
    }
}
