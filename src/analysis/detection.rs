use uuid::Uuid;

use crate::models::PrescribedDrug;

use super::catalog::InteractionCatalog;
use super::types::DrugInteraction;

/// Scan every unordered pair of prescribed drugs against the catalog.
///
/// All C(n,2) position pairs are evaluated; repeated drug names are
/// not collapsed, so the same rule can produce several findings.
/// Matches are appended in enumeration order (outer index ascending,
/// inner ascending). The exhaustive O(n²) scan is intentional:
/// prescription lists are short and the pairwise semantics stay
/// obvious.
pub fn detect_interactions(
    drugs: &[PrescribedDrug],
    catalog: &InteractionCatalog,
) -> Vec<DrugInteraction> {
    let mut findings = Vec::new();

    for i in 0..drugs.len() {
        for j in (i + 1)..drugs.len() {
            if let Some(rule) = catalog.find_rule(&drugs[i].name, &drugs[j].name) {
                tracing::debug!(
                    rule_id = %rule.id,
                    severity = rule.severity.as_str(),
                    "Known interaction matched"
                );
                findings.push(DrugInteraction {
                    id: Uuid::new_v4(),
                    rule_id: rule.id.clone(),
                    drug_a: rule.drug_a.clone(),
                    drug_b: rule.drug_b.clone(),
                    severity: rule.severity,
                    description: rule.description.clone(),
                    recommendation: rule.recommendation.clone(),
                });
            }
        }
    }

    findings
}
