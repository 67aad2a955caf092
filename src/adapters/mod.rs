//! Adapters layer: Concrete implementations of ports and data loading.
//!
//! These modules contain the actual integration with external formats:
//! - `tables`: CSV loading of the reference data store
//! - `linear`: serialized linear model implementing the classifier port

pub mod linear;
pub mod tables;

// Re-export adapter errors for lib.rs
pub use linear::ArtifactError;
pub use tables::LoadError;
