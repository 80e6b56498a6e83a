use serde::{Deserialize, Serialize};

use crate::models::AgeBand;

use super::types::AnalysisError;

/// Clinical reference record for one drug (keyed by canonical
/// lowercase name). Loaded once at construction; never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrugReferenceEntry {
    pub name: String,
    pub generic_name: String,
    pub category: String,
    /// Peer drug names this drug is contraindicated with. Reference
    /// data only: no analysis pass consumes it directly.
    pub contraindications: Vec<String>,
    pub pediatric_dose: Option<String>,
    pub adult_dose: String,
    pub geriatric_dose: Option<String>,
    /// Substitution candidates, preference order = list order.
    pub alternatives: Vec<String>,
}

impl DrugReferenceEntry {
    /// Dosing guidance for an age band, falling back to the adult
    /// guidance when the band-specific string is unset.
    pub fn dose_guidance(&self, band: AgeBand) -> &str {
        match band {
            AgeBand::Pediatric => self.pediatric_dose.as_deref().unwrap_or(&self.adult_dose),
            AgeBand::Adult => &self.adult_dose,
            AgeBand::Geriatric => self.geriatric_dose.as_deref().unwrap_or(&self.adult_dose),
        }
    }
}

/// In-memory drug reference store.
pub struct DrugReference {
    entries: Vec<DrugReferenceEntry>,
}

impl DrugReference {
    /// Build a store from caller-supplied entries. Names are normalized
    /// to lowercase; empty or duplicate names are rejected.
    pub fn from_entries(entries: Vec<DrugReferenceEntry>) -> Result<Self, AnalysisError> {
        let mut normalized: Vec<DrugReferenceEntry> = Vec::with_capacity(entries.len());

        for mut entry in entries {
            entry.name = entry.name.trim().to_lowercase();
            if entry.name.is_empty() {
                return Err(AnalysisError::EmptyDrugName);
            }
            if normalized.iter().any(|e: &DrugReferenceEntry| e.name == entry.name) {
                return Err(AnalysisError::DuplicateEntry(entry.name));
            }
            normalized.push(entry);
        }

        Ok(Self { entries: normalized })
    }

    /// Parse a store from an in-memory JSON array of entries.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let entries: Vec<DrugReferenceEntry> = serde_json::from_str(json).map_err(|e| {
            AnalysisError::ReferenceDataParse("drug reference".into(), e.to_string())
        })?;
        Self::from_entries(entries)
    }

    /// Look up an entry by name, case-insensitively. Matches the
    /// canonical name only (no brand/synonym resolution, no fuzzy
    /// matching). Absence is a normal outcome.
    pub fn lookup(&self, drug_name: &str) -> Option<&DrugReferenceEntry> {
        let lower = drug_name.to_lowercase();
        self.entries.iter().find(|e| e.name == lower)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The compiled-in default table.
    pub fn builtin() -> Self {
        Self {
            entries: vec![
                DrugReferenceEntry {
                    name: "aspirin".into(),
                    generic_name: "acetylsalicylic acid".into(),
                    category: "analgesic".into(),
                    contraindications: vec!["warfarin".into(), "heparin".into()],
                    pediatric_dose: Some("Not recommended under 12".into()),
                    adult_dose: "325-1000mg every 4-6 hours".into(),
                    geriatric_dose: Some("Start with lower dose, 325mg".into()),
                    alternatives: vec!["acetaminophen".into(), "ibuprofen".into()],
                },
                DrugReferenceEntry {
                    name: "warfarin".into(),
                    generic_name: "warfarin sodium".into(),
                    category: "anticoagulant".into(),
                    contraindications: vec![
                        "aspirin".into(),
                        "ibuprofen".into(),
                        "heparin".into(),
                    ],
                    pediatric_dose: Some("Individualized based on INR".into()),
                    adult_dose: "2-10mg daily".into(),
                    geriatric_dose: Some("Start with 2-5mg daily".into()),
                    alternatives: vec!["apixaban".into(), "rivaroxaban".into()],
                },
                DrugReferenceEntry {
                    name: "metformin".into(),
                    generic_name: "metformin hydrochloride".into(),
                    category: "antidiabetic".into(),
                    contraindications: vec!["contrast dye".into()],
                    pediatric_dose: Some("500mg twice daily (>10 years)".into()),
                    adult_dose: "500-1000mg twice daily".into(),
                    geriatric_dose: Some("500mg daily, monitor renal function".into()),
                    alternatives: vec!["glipizide".into(), "sitagliptin".into()],
                },
                DrugReferenceEntry {
                    name: "lisinopril".into(),
                    generic_name: "lisinopril".into(),
                    category: "ace inhibitor".into(),
                    contraindications: vec!["potassium supplements".into()],
                    pediatric_dose: Some("Not typically used".into()),
                    adult_dose: "10-40mg daily".into(),
                    geriatric_dose: Some("Start with 5mg daily".into()),
                    alternatives: vec!["losartan".into(), "amlodipine".into()],
                },
                DrugReferenceEntry {
                    name: "ibuprofen".into(),
                    generic_name: "ibuprofen".into(),
                    category: "nsaid".into(),
                    contraindications: vec!["warfarin".into(), "lisinopril".into()],
                    pediatric_dose: Some("10mg/kg every 6-8 hours".into()),
                    adult_dose: "400-800mg every 6-8 hours".into(),
                    geriatric_dose: Some("200-400mg, monitor GI/renal".into()),
                    alternatives: vec!["acetaminophen".into(), "naproxen".into()],
                },
            ],
        }
    }
}
