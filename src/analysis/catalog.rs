use serde::{Deserialize, Serialize};

use crate::models::Severity;

use super::types::AnalysisError;

/// A known pairwise interaction. The pair is unordered: `find_rule`
/// matches regardless of argument order or case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionRule {
    /// Stable identifier for audit trail.
    pub id: String,
    pub drug_a: String,
    pub drug_b: String,
    pub severity: Severity,
    pub description: String,
    pub recommendation: String,
}

/// Fixed set of pairwise interaction rules, seeded at construction.
/// No runtime additions: replacing the rule set means building a new
/// catalog (and engine) value.
pub struct InteractionCatalog {
    rules: Vec<InteractionRule>,
}

impl InteractionCatalog {
    /// Build a catalog from caller-supplied rules. Drug names are
    /// normalized to lowercase; self-pairs and duplicate unordered
    /// pairs are rejected.
    pub fn from_rules(rules: Vec<InteractionRule>) -> Result<Self, AnalysisError> {
        let mut normalized: Vec<InteractionRule> = Vec::with_capacity(rules.len());

        for mut rule in rules {
            rule.drug_a = rule.drug_a.trim().to_lowercase();
            rule.drug_b = rule.drug_b.trim().to_lowercase();
            if rule.drug_a.is_empty() || rule.drug_b.is_empty() {
                return Err(AnalysisError::EmptyDrugName);
            }
            if rule.drug_a == rule.drug_b {
                return Err(AnalysisError::SelfInteraction(rule.id));
            }
            if normalized.iter().any(|r: &InteractionRule| same_pair(r, &rule)) {
                return Err(AnalysisError::DuplicateRule(rule.drug_a, rule.drug_b));
            }
            normalized.push(rule);
        }

        Ok(Self { rules: normalized })
    }

    /// Parse a catalog from an in-memory JSON array of rules.
    pub fn from_json(json: &str) -> Result<Self, AnalysisError> {
        let rules: Vec<InteractionRule> = serde_json::from_str(json).map_err(|e| {
            AnalysisError::ReferenceDataParse("interaction catalog".into(), e.to_string())
        })?;
        Self::from_rules(rules)
    }

    /// Find the rule covering an unordered drug pair, if any.
    /// Symmetric: `find_rule(a, b) == find_rule(b, a)`.
    pub fn find_rule(&self, name_a: &str, name_b: &str) -> Option<&InteractionRule> {
        let a = name_a.to_lowercase();
        let b = name_b.to_lowercase();
        self.rules.iter().find(|rule| {
            (rule.drug_a == a && rule.drug_b == b) || (rule.drug_a == b && rule.drug_b == a)
        })
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// The compiled-in default rule set.
    pub fn builtin() -> Self {
        Self {
            rules: vec![
                InteractionRule {
                    id: "DDI-001".into(),
                    drug_a: "warfarin".into(),
                    drug_b: "aspirin".into(),
                    severity: Severity::Severe,
                    description: "Increased risk of bleeding due to enhanced anticoagulant effect"
                        .into(),
                    recommendation:
                        "Consider alternative pain management or dose adjustment with close monitoring"
                            .into(),
                },
                InteractionRule {
                    id: "DDI-002".into(),
                    drug_a: "ibuprofen".into(),
                    drug_b: "lisinopril".into(),
                    severity: Severity::Moderate,
                    description: "NSAIDs may reduce the effectiveness of ACE inhibitors".into(),
                    recommendation:
                        "Monitor blood pressure and consider acetaminophen as alternative".into(),
                },
                InteractionRule {
                    id: "DDI-003".into(),
                    drug_a: "warfarin".into(),
                    drug_b: "ibuprofen".into(),
                    severity: Severity::Severe,
                    description: "Increased risk of gastrointestinal bleeding".into(),
                    recommendation: "Avoid combination, use acetaminophen for pain relief".into(),
                },
                InteractionRule {
                    id: "DDI-004".into(),
                    drug_a: "warfarin".into(),
                    drug_b: "heparin".into(),
                    severity: Severity::Severe,
                    description: "Additive anticoagulant effect raises the risk of major bleeding"
                        .into(),
                    recommendation:
                        "Avoid concurrent use outside supervised bridge therapy with close INR monitoring"
                            .into(),
                },
                InteractionRule {
                    id: "DDI-005".into(),
                    drug_a: "aspirin".into(),
                    drug_b: "heparin".into(),
                    severity: Severity::Moderate,
                    description:
                        "Combined antiplatelet and anticoagulant activity increases bleeding risk"
                            .into(),
                    recommendation:
                        "Monitor for signs of bleeding and review whether both agents are needed"
                            .into(),
                },
            ],
        }
    }
}

/// Unordered pair equality between two rules.
fn same_pair(a: &InteractionRule, b: &InteractionRule) -> bool {
    (a.drug_a == b.drug_a && a.drug_b == b.drug_b)
        || (a.drug_a == b.drug_b && a.drug_b == b.drug_a)
}
