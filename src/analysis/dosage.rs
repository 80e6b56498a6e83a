//! Age banding and per-drug dosage verification.

use crate::models::{AgeBand, PrescribedDrug};

use super::messages::MessageTemplates;
use super::reference::DrugReference;
use super::types::DosageVerification;

/// Ages below this are pediatric.
const PEDIATRIC_AGE_LIMIT: u32 = 18;
/// Ages above this are geriatric.
const GERIATRIC_AGE_FLOOR: u32 = 65;

/// Classify a patient age into its band. Bands are mutually exclusive
/// and cover all ages; 18 and 65 are both adult.
pub fn age_band(patient_age: u32) -> AgeBand {
    if patient_age < PEDIATRIC_AGE_LIMIT {
        AgeBand::Pediatric
    } else if patient_age > GERIATRIC_AGE_FLOOR {
        AgeBand::Geriatric
    } else {
        AgeBand::Adult
    }
}

/// Check each prescribed drug against the reference store's dosing
/// guidance for the patient's age band, in input order. Drugs absent
/// from the reference produce no entry (the report surfaces them
/// separately as unrecognized).
pub fn verify_dosages(
    drugs: &[PrescribedDrug],
    patient_age: u32,
    reference: &DrugReference,
) -> Vec<DosageVerification> {
    let band = age_band(patient_age);
    let mut verifications = Vec::new();

    for drug in drugs {
        let Some(entry) = reference.lookup(&drug.name) else {
            continue;
        };

        verifications.push(DosageVerification {
            drug_name: drug.name.clone(),
            prescribed_dose: drug.dosage.clone(),
            recommended_dose: entry.dose_guidance(band).to_string(),
            // No numeric comparison yet; see the field note on
            // DosageVerification.
            is_appropriate: true,
            age_band: band,
            warnings: MessageTemplates::band_warnings(band),
        });
    }

    verifications
}
