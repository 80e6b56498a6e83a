use crate::models::AgeBand;

/// Message template builder for patient-facing advisory text.
/// Calm framing throughout; texts are stable so collaborator screens
/// can rely on them verbatim.
pub struct MessageTemplates;

impl MessageTemplates {
    /// Reason attached to an alternative proposed for a severe pair.
    pub fn severe_interaction_reason(conflicting_drug: &str) -> String {
        format!("Severe interaction with {}", conflicting_drug)
    }

    /// Generic dosage note attached to every proposed alternative.
    pub fn standard_dosing_note() -> String {
        "Follow standard dosing guidelines".to_string()
    }

    /// Pediatric-band verification warning.
    pub fn pediatric_monitoring() -> String {
        "Monitor for pediatric-specific side effects".to_string()
    }

    /// Geriatric-band verification warning.
    pub fn geriatric_start_low() -> String {
        "Start with lower doses, monitor closely".to_string()
    }

    /// Static warnings for a dosage verification, by age band.
    pub fn band_warnings(band: AgeBand) -> Vec<String> {
        match band {
            AgeBand::Pediatric => vec![Self::pediatric_monitoring()],
            AgeBand::Geriatric => vec![Self::geriatric_start_low()],
            AgeBand::Adult => vec![],
        }
    }
}
