use crate::models::Severity;

use super::messages::MessageTemplates;
use super::reference::DrugReference;
use super::types::{AlternativeMedication, DrugInteraction};

/// Propose substitutes for severe interactions, in detection order.
///
/// Only the first drug of each pair is considered for substitution;
/// the proposal is always its first-listed alternative. Mild and
/// moderate interactions never produce suggestions.
pub fn suggest_alternatives(
    interactions: &[DrugInteraction],
    reference: &DrugReference,
) -> Vec<AlternativeMedication> {
    let mut suggestions = Vec::new();

    for interaction in interactions {
        if interaction.severity != Severity::Severe {
            continue;
        }
        let Some(entry) = reference.lookup(&interaction.drug_a) else {
            continue;
        };
        let Some(first) = entry.alternatives.first() else {
            continue;
        };

        suggestions.push(AlternativeMedication {
            original_drug: interaction.drug_a.clone(),
            alternative: first.clone(),
            reason: MessageTemplates::severe_interaction_reason(&interaction.drug_b),
            dosage_adjustment: MessageTemplates::standard_dosing_note(),
        });
    }

    suggestions
}
