//! RxGuard: medication safety analysis engine.
//!
//! Given a prescribed-drug list and a patient's age, the engine reports
//! known pairwise drug interactions, verifies dosing guidance by age
//! band, and proposes safer alternatives for severe conflicts. All
//! reference data lives in memory and is injected at construction; the
//! engine performs no I/O and never mutates shared state, so one value
//! can serve any number of callers.

pub mod analysis;
pub mod models;

pub use analysis::catalog::{InteractionCatalog, InteractionRule};
pub use analysis::engine::DefaultSafetyEngine;
pub use analysis::reference::{DrugReference, DrugReferenceEntry};
pub use analysis::types::{AnalysisError, AnalysisResult, SafetyEngine};
pub use models::{AgeBand, PatientProfile, PrescribedDrug, RiskLevel, Severity};
