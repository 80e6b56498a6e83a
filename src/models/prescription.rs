use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One line item on a prescription, as entered or extracted upstream.
/// The name is free text and is matched case-insensitively against the
/// drug reference; dosage, frequency, and route are not validated here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrescribedDrug {
    pub id: Uuid,
    pub name: String,
    pub generic_name: Option<String>,
    pub dosage: String,
    pub frequency: String,
    pub route: String,
    pub duration: Option<String>,
}

impl PrescribedDrug {
    pub fn new(name: &str, dosage: &str, frequency: &str, route: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            generic_name: None,
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
            route: route.to_string(),
            duration: None,
        }
    }
}

/// Patient demographics and history supplied by the caller.
/// The analysis engine consumes only `age`; the remaining fields ride
/// along for collaborator screens (history, allergy display, etc.).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientProfile {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub weight_kg: Option<f64>,
    pub allergies: Vec<String>,
    pub medical_history: Vec<String>,
    pub current_medications: Vec<String>,
}

impl PatientProfile {
    pub fn new(name: &str, age: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            age,
            weight_kg: None,
            allergies: Vec::new(),
            medical_history: Vec::new(),
            current_medications: Vec::new(),
        }
    }
}
