use std::collections::HashSet;
use std::time::Instant;

use crate::models::{PrescribedDrug, RiskLevel, Severity};

use super::alternatives::suggest_alternatives;
use super::catalog::InteractionCatalog;
use super::detection::detect_interactions;
use super::dosage::verify_dosages;
use super::reference::DrugReference;
use super::types::{AnalysisCounts, AnalysisResult, DrugInteraction, SafetyEngine};

/// Default implementation of the safety engine.
/// Holds the injected reference tables and runs the three analysis
/// passes, then derives the overall risk and recommendation list.
/// Read-only after construction; safe to share across callers.
pub struct DefaultSafetyEngine {
    reference: DrugReference,
    catalog: InteractionCatalog,
}

impl DefaultSafetyEngine {
    pub fn new(reference: DrugReference, catalog: InteractionCatalog) -> Self {
        Self { reference, catalog }
    }

    /// Engine over the compiled-in reference data.
    pub fn builtin() -> Self {
        Self::new(DrugReference::builtin(), InteractionCatalog::builtin())
    }
}

impl Default for DefaultSafetyEngine {
    fn default() -> Self {
        Self::builtin()
    }
}

impl SafetyEngine for DefaultSafetyEngine {
    fn analyze(&self, drugs: &[PrescribedDrug], patient_age: u32) -> AnalysisResult {
        let start = Instant::now();

        let interactions = detect_interactions(drugs, &self.catalog);
        let dosage_verifications = verify_dosages(drugs, patient_age, &self.reference);
        let alternatives = suggest_alternatives(&interactions, &self.reference);
        let unrecognized_drugs = collect_unrecognized(drugs, &self.reference);

        let overall_risk = overall_risk(&interactions);
        let recommendations = collect_recommendations(&interactions);

        let counts = AnalysisCounts {
            severe: count_severity(&interactions, Severity::Severe),
            moderate: count_severity(&interactions, Severity::Moderate),
            mild: count_severity(&interactions, Severity::Mild),
            verifications: dosage_verifications.len(),
            alternatives: alternatives.len(),
            unrecognized: unrecognized_drugs.len(),
        };

        let processing_time_ms = start.elapsed().as_millis() as u64;

        tracing::info!(
            drugs = drugs.len(),
            interactions = counts.total_interactions(),
            verifications = counts.verifications,
            alternatives = counts.alternatives,
            unrecognized = counts.unrecognized,
            risk = overall_risk.as_str(),
            processing_ms = processing_time_ms,
            "Medication safety analysis complete"
        );

        AnalysisResult {
            interactions,
            dosage_verifications,
            alternatives,
            overall_risk,
            recommendations,
            unrecognized_drugs,
            counts,
            analyzed_at: chrono::Local::now().naive_local(),
            processing_time_ms,
        }
    }
}

/// Overall risk is the maximum detected severity: severe → high,
/// moderate → moderate, mild → low; low with no interactions.
fn overall_risk(interactions: &[DrugInteraction]) -> RiskLevel {
    match interactions.iter().map(|i| i.severity).max() {
        Some(Severity::Severe) => RiskLevel::High,
        Some(Severity::Moderate) => RiskLevel::Moderate,
        Some(Severity::Mild) | None => RiskLevel::Low,
    }
}

/// Each interaction's recommendation in detection order, deduplicated
/// by exact string equality (first occurrence wins).
fn collect_recommendations(interactions: &[DrugInteraction]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut recommendations = Vec::new();

    for interaction in interactions {
        if seen.insert(&interaction.recommendation) {
            recommendations.push(interaction.recommendation.clone());
        }
    }

    recommendations
}

/// Prescribed names with no reference entry, first-occurrence order,
/// deduplicated case-insensitively (first spelling kept).
fn collect_unrecognized(drugs: &[PrescribedDrug], reference: &DrugReference) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut unrecognized = Vec::new();

    for drug in drugs {
        if reference.lookup(&drug.name).is_some() {
            continue;
        }
        if seen.insert(drug.name.to_lowercase()) {
            unrecognized.push(drug.name.clone());
        }
    }

    unrecognized
}

fn count_severity(interactions: &[DrugInteraction], severity: Severity) -> usize {
    interactions.iter().filter(|i| i.severity == severity).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::catalog::InteractionRule;
    use crate::analysis::reference::DrugReferenceEntry;
    use crate::models::{AgeBand, PatientProfile};

    fn drug(name: &str, dosage: &str) -> PrescribedDrug {
        PrescribedDrug::new(name, dosage, "daily", "oral")
    }

    fn engine() -> DefaultSafetyEngine {
        DefaultSafetyEngine::builtin()
    }

    // =================================================================
    // END-TO-END SCENARIOS
    // =================================================================

    #[test]
    fn warfarin_aspirin_geriatric_patient() {
        let result = engine().analyze(
            &[drug("Warfarin", "5mg"), drug("Aspirin", "325mg")],
            70,
        );

        assert_eq!(result.interactions.len(), 1);
        let interaction = &result.interactions[0];
        assert_eq!(interaction.severity, Severity::Severe);
        assert!(interaction.description.to_lowercase().contains("bleeding"));

        assert_eq!(result.dosage_verifications.len(), 2);
        for v in &result.dosage_verifications {
            assert_eq!(v.age_band, AgeBand::Geriatric);
            assert_eq!(
                v.warnings,
                vec!["Start with lower doses, monitor closely".to_string()]
            );
        }

        assert!(!result.alternatives.is_empty());
        assert_eq!(result.alternatives[0].original_drug, "warfarin");
        assert_eq!(result.alternatives[0].alternative, "apixaban");

        assert_eq!(result.overall_risk, RiskLevel::High);
        assert_eq!(result.recommendations.len(), 1);
        assert!(result.unrecognized_drugs.is_empty());
    }

    #[test]
    fn single_metformin_pediatric_patient() {
        let result = engine().analyze(&[drug("Metformin", "500mg")], 10);

        assert!(result.interactions.is_empty());
        assert_eq!(result.dosage_verifications.len(), 1);
        let v = &result.dosage_verifications[0];
        assert_eq!(v.age_band, AgeBand::Pediatric);
        assert_eq!(
            v.warnings,
            vec!["Monitor for pediatric-specific side effects".to_string()]
        );
        assert!(result.alternatives.is_empty());
        assert_eq!(result.overall_risk, RiskLevel::Low);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn unknown_drug_produces_empty_report() {
        let result = engine().analyze(&[drug("Unobtainium", "1mg")], 45);

        assert!(result.interactions.is_empty());
        assert!(result.dosage_verifications.is_empty());
        assert!(result.alternatives.is_empty());
        assert_eq!(result.overall_risk, RiskLevel::Low);
        assert!(result.recommendations.is_empty());
        assert_eq!(result.unrecognized_drugs, vec!["Unobtainium".to_string()]);
    }

    #[test]
    fn mixed_severities_report_every_finding() {
        let result = engine().analyze(
            &[
                drug("warfarin", "5mg"),
                drug("aspirin", "325mg"),
                drug("ibuprofen", "400mg"),
                drug("lisinopril", "10mg"),
            ],
            50,
        );

        // warfarin+aspirin, warfarin+ibuprofen (severe), ibuprofen+lisinopril (moderate)
        assert_eq!(result.interactions.len(), 3);
        assert_eq!(result.counts.severe, 2);
        assert_eq!(result.counts.moderate, 1);
        assert_eq!(result.counts.mild, 0);
        assert_eq!(result.counts.total_interactions(), 3);
        assert_eq!(result.overall_risk, RiskLevel::High);
        // Both severe pairs substitute warfarin.
        assert_eq!(result.alternatives.len(), 2);
        assert_eq!(result.counts.verifications, 4);
    }

    // =================================================================
    // RISK AGGREGATION
    // =================================================================

    #[test]
    fn risk_is_moderate_without_severe_interactions() {
        let result = engine().analyze(
            &[drug("ibuprofen", "400mg"), drug("lisinopril", "10mg")],
            30,
        );
        assert_eq!(result.interactions.len(), 1);
        assert_eq!(result.overall_risk, RiskLevel::Moderate);
        assert!(result.alternatives.is_empty());
    }

    #[test]
    fn risk_is_low_for_non_interacting_drugs() {
        let result = engine().analyze(
            &[drug("metformin", "500mg"), drug("lisinopril", "10mg")],
            30,
        );
        assert!(result.interactions.is_empty());
        assert_eq!(result.overall_risk, RiskLevel::Low);
    }

    #[test]
    fn mild_interactions_map_to_low_risk() {
        let reference = DrugReference::builtin();
        let catalog = InteractionCatalog::from_rules(vec![InteractionRule {
            id: "X-001".into(),
            drug_a: "metformin".into(),
            drug_b: "lisinopril".into(),
            severity: Severity::Mild,
            description: "Minor additive hypoglycemia risk".into(),
            recommendation: "No action needed beyond routine monitoring".into(),
        }])
        .unwrap();
        let custom = DefaultSafetyEngine::new(reference, catalog);

        let result = custom.analyze(
            &[drug("metformin", "500mg"), drug("lisinopril", "10mg")],
            30,
        );
        assert_eq!(result.interactions.len(), 1);
        assert_eq!(result.counts.mild, 1);
        assert_eq!(result.overall_risk, RiskLevel::Low);
    }

    // =================================================================
    // RECOMMENDATIONS & UNRECOGNIZED
    // =================================================================

    #[test]
    fn duplicate_recommendations_collapse_in_order() {
        // Repeated aspirin lines: the same rule matches twice, its
        // recommendation text appears once.
        let result = engine().analyze(
            &[drug("warfarin", "5mg"), drug("aspirin", "325mg"), drug("aspirin", "81mg")],
            40,
        );

        assert_eq!(result.interactions.len(), 2);
        assert_eq!(result.recommendations.len(), 1);
        assert_eq!(
            result.recommendations[0],
            "Consider alternative pain management or dose adjustment with close monitoring"
        );
    }

    #[test]
    fn unrecognized_drugs_dedupe_case_insensitively() {
        let result = engine().analyze(
            &[drug("Unobtainium", "1mg"), drug("unobtainium", "2mg"), drug("aspirin", "81mg")],
            40,
        );
        assert_eq!(result.unrecognized_drugs, vec!["Unobtainium".to_string()]);
        assert_eq!(result.counts.unrecognized, 1);
        assert_eq!(result.dosage_verifications.len(), 1);
    }

    #[test]
    fn empty_prescription_yields_empty_report() {
        let result = engine().analyze(&[], 40);
        assert!(result.interactions.is_empty());
        assert!(result.dosage_verifications.is_empty());
        assert!(result.alternatives.is_empty());
        assert!(result.recommendations.is_empty());
        assert!(result.unrecognized_drugs.is_empty());
        assert_eq!(result.overall_risk, RiskLevel::Low);
        assert_eq!(result.counts.total_interactions(), 0);
    }

    // =================================================================
    // SUBSTITUTE TABLES & PATIENT WRAPPER
    // =================================================================

    #[test]
    fn engine_works_over_injected_tables() {
        let reference = DrugReference::from_entries(vec![DrugReferenceEntry {
            name: "simvastatin".into(),
            generic_name: "simvastatin".into(),
            category: "statin".into(),
            contraindications: vec!["clarithromycin".into()],
            pediatric_dose: None,
            adult_dose: "10-40mg daily".into(),
            geriatric_dose: Some("Start with 10mg daily".into()),
            alternatives: vec!["pravastatin".into()],
        }])
        .unwrap();
        let catalog = InteractionCatalog::from_rules(vec![InteractionRule {
            id: "X-010".into(),
            drug_a: "simvastatin".into(),
            drug_b: "clarithromycin".into(),
            severity: Severity::Severe,
            description: "CYP3A4 inhibition raises statin exposure".into(),
            recommendation: "Suspend the statin during the antibiotic course".into(),
        }])
        .unwrap();
        let custom = DefaultSafetyEngine::new(reference, catalog);

        let result = custom.analyze(
            &[drug("Simvastatin", "20mg"), drug("Clarithromycin", "500mg")],
            70,
        );

        assert_eq!(result.interactions.len(), 1);
        assert_eq!(result.overall_risk, RiskLevel::High);
        assert_eq!(result.alternatives.len(), 1);
        assert_eq!(result.alternatives[0].alternative, "pravastatin");
        // clarithromycin has no reference entry in this table.
        assert_eq!(result.dosage_verifications.len(), 1);
        assert_eq!(result.unrecognized_drugs, vec!["Clarithromycin".to_string()]);
    }

    #[test]
    fn analyze_for_patient_uses_the_age() {
        let patient = PatientProfile::new("Ana Moreau", 70);
        let result = engine().analyze_for_patient(&[drug("aspirin", "325mg")], &patient);
        assert_eq!(result.dosage_verifications[0].age_band, AgeBand::Geriatric);
    }
}
