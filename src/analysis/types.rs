use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{AgeBand, PatientProfile, PrescribedDrug, RiskLevel, Severity};

// ---------------------------------------------------------------------------
// Findings
// ---------------------------------------------------------------------------

/// One matched interaction rule instance. Names are the catalog's
/// canonical lowercase names, in the rule's stored order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugInteraction {
    pub id: Uuid,
    pub rule_id: String,
    pub drug_a: String,
    pub drug_b: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// Age-banded dosing check for one prescribed drug.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DosageVerification {
    /// Drug name as the caller prescribed it.
    pub drug_name: String,
    pub prescribed_dose: String,
    /// Guidance string for the patient's age band (adult fallback).
    pub recommended_dose: String,
    /// Always true: prescribed vs recommended magnitudes are not yet
    /// compared numerically. A unit-aware dose parser is the pending
    /// follow-up; until then the flag carries no signal.
    pub is_appropriate: bool,
    pub age_band: AgeBand,
    pub warnings: Vec<String>,
}

/// Substitute proposed for the first drug of a severe interaction pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeMedication {
    pub original_drug: String,
    pub alternative: String,
    pub reason: String,
    pub dosage_adjustment: String,
}

// ---------------------------------------------------------------------------
// AnalysisCounts & AnalysisResult
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AnalysisCounts {
    pub severe: usize,
    pub moderate: usize,
    pub mild: usize,
    pub verifications: usize,
    pub alternatives: usize,
    pub unrecognized: usize,
}

impl AnalysisCounts {
    pub fn total_interactions(&self) -> usize {
        self.severe + self.moderate + self.mild
    }
}

/// The engine's sole output, consumed by the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub interactions: Vec<DrugInteraction>,
    /// One entry per prescribed drug found in the reference store,
    /// in input order. Unknown drugs are excluded here and listed in
    /// `unrecognized_drugs` instead.
    pub dosage_verifications: Vec<DosageVerification>,
    pub alternatives: Vec<AlternativeMedication>,
    pub overall_risk: RiskLevel,
    /// Each detected interaction's recommendation text, deduplicated by
    /// exact string equality, first occurrence first.
    pub recommendations: Vec<String>,
    /// Prescribed names absent from the drug reference, deduplicated
    /// case-insensitively, first spelling kept.
    pub unrecognized_drugs: Vec<String>,
    pub counts: AnalysisCounts,
    pub analyzed_at: NaiveDateTime,
    pub processing_time_ms: u64,
}

// ---------------------------------------------------------------------------
// AnalysisError
// ---------------------------------------------------------------------------

/// Construction-time failures for caller-supplied reference data.
/// Analysis itself never errors: unknown drugs and empty lists are
/// ordinary outcomes modeled as data.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Reference data parse failed ({0}): {1}")]
    ReferenceDataParse(String, String),

    #[error("Duplicate reference entry: {0}")]
    DuplicateEntry(String),

    #[error("Duplicate interaction rule for pair {0} + {1}")]
    DuplicateRule(String, String),

    #[error("Interaction rule {0} pairs a drug with itself")]
    SelfInteraction(String),

    #[error("Drug name cannot be empty")]
    EmptyDrugName,
}

// ---------------------------------------------------------------------------
// SafetyEngine trait
// ---------------------------------------------------------------------------

/// The medication safety analysis engine.
pub trait SafetyEngine {
    /// Analyze a prescription list for a patient of the given age.
    /// Always produces a full report; absence of matches is data.
    fn analyze(&self, drugs: &[PrescribedDrug], patient_age: u32) -> AnalysisResult;

    /// Convenience wrapper: age is the only patient attribute consumed.
    fn analyze_for_patient(
        &self,
        drugs: &[PrescribedDrug],
        patient: &PatientProfile,
    ) -> AnalysisResult {
        self.analyze(drugs, patient.age)
    }
}
