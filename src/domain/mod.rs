//! Domain layer: Core business types and table semantics.
//!
//! This module contains pure Rust types with no I/O. Every table is
//! read-only after construction.

mod disease;
mod guidance;
mod interaction;
mod medication;
mod reference;
mod report;
mod symptom;

pub use disease::DiseaseCatalog;
pub use guidance::{DiseaseGuidance, GuidanceTables, PRECAUTION_COLUMNS};
pub use interaction::{InteractionTable, PairCheck, NO_INTERACTION_DATA};
pub use medication::MedicationTable;
pub use reference::ReferenceData;
pub use report::{InferenceReport, InferenceRequest};
pub use symptom::SymptomIndex;
