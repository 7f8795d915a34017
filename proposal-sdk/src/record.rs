use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ProposalError;

/// One of the fixed proposal fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProposalField {
    Title,
    Organization,
    ContactName,
    ContactEmail,
    Summary,
    Objectives,
    BaselineEmissions,
    TargetReduction,
    Timeline,
    Measures,
    Budget,
    Benefits,
    Risks,
    Kpis,
}

impl ProposalField {
    /// Every field, in form display order
    pub const ALL: [ProposalField; 14] = [
        ProposalField::Title,
        ProposalField::Organization,
        ProposalField::ContactName,
        ProposalField::ContactEmail,
        ProposalField::Summary,
        ProposalField::Objectives,
        ProposalField::BaselineEmissions,
        ProposalField::TargetReduction,
        ProposalField::Timeline,
        ProposalField::Measures,
        ProposalField::Budget,
        ProposalField::Benefits,
        ProposalField::Risks,
        ProposalField::Kpis,
    ];

    /// Key used in the JSON payload sent to the document endpoint
    pub fn key(self) -> &'static str {
        match self {
            ProposalField::Title => "title",
            ProposalField::Organization => "organization",
            ProposalField::ContactName => "contactName",
            ProposalField::ContactEmail => "contactEmail",
            ProposalField::Summary => "summary",
            ProposalField::Objectives => "objectives",
            ProposalField::BaselineEmissions => "baselineEmissionsTCO2e",
            ProposalField::TargetReduction => "targetReductionPercent",
            ProposalField::Timeline => "timeline",
            ProposalField::Measures => "measures",
            ProposalField::Budget => "budget",
            ProposalField::Benefits => "benefits",
            ProposalField::Risks => "risks",
            ProposalField::Kpis => "kpis",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(self) -> &'static str {
        match self {
            ProposalField::Title => "Project Title",
            ProposalField::Organization => "Organization",
            ProposalField::ContactName => "Contact Name",
            ProposalField::ContactEmail => "Contact Email",
            ProposalField::Summary => "Executive Summary",
            ProposalField::Objectives => "Objectives (one per line)",
            ProposalField::BaselineEmissions => "Baseline Emissions (tCO2e)",
            ProposalField::TargetReduction => "Target Reduction (%)",
            ProposalField::Timeline => "Timeline",
            ProposalField::Measures => "Measures (one per line)",
            ProposalField::Budget => "Budget",
            ProposalField::Benefits => "Benefits",
            ProposalField::Risks => "Risks & Mitigations",
            ProposalField::Kpis => "KPIs (one per line)",
        }
    }

    /// Visible rows of the text area; `None` for single-line inputs
    pub fn rows(self) -> Option<u8> {
        match self {
            ProposalField::Summary | ProposalField::Objectives | ProposalField::Measures => Some(4),
            ProposalField::Benefits | ProposalField::Risks | ProposalField::Kpis => Some(3),
            _ => None,
        }
    }

    pub fn is_multiline(self) -> bool {
        self.rows().is_some()
    }
}

impl std::fmt::Display for ProposalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProposalField {
    type Err = ProposalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ProposalField::ALL
            .into_iter()
            .find(|field| field.key() == name)
            .ok_or_else(|| ProposalError::unknown_field(name))
    }
}

/// The proposal document edited by the user.
///
/// Every field is always present. Missing keys in incoming JSON take the
/// form's initial values and unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ProposalRecord {
    pub title: String,
    pub organization: String,
    pub contact_name: String,
    pub contact_email: String,
    pub summary: String,
    pub objectives: String,
    #[serde(rename = "baselineEmissionsTCO2e")]
    pub baseline_emissions_tco2e: String,
    pub target_reduction_percent: String,
    pub timeline: String,
    pub measures: String,
    pub budget: String,
    pub benefits: String,
    pub risks: String,
    pub kpis: String,
}

impl Default for ProposalRecord {
    fn default() -> Self {
        Self {
            title: "Carbon Footprint Reduction Initiative".to_string(),
            organization: String::new(),
            contact_name: String::new(),
            contact_email: String::new(),
            summary: "This project aims to reduce the organization’s greenhouse gas emissions \
                      through targeted efficiency measures and renewable energy adoption."
                .to_string(),
            objectives: [
                "- Reduce Scope 2 emissions via renewable energy procurement",
                "- Improve energy efficiency in facilities and operations",
                "- Engage employees to drive low-carbon behaviors",
            ]
            .join("\n"),
            baseline_emissions_tco2e: String::new(),
            target_reduction_percent: "30".to_string(),
            timeline: "Q1 2025 – Q4 2027".to_string(),
            measures: [
                "- LED lighting retrofit across all sites",
                "- HVAC optimization & smart controls",
                "- Server workload consolidation & cloud efficiency",
                "- Renewable electricity procurement (PPA/RECs)",
                "- Employee commuting program (EV, public transit, cycling)",
            ]
            .join("\n"),
            budget: "€500,000 total across 3 years".to_string(),
            benefits: [
                "- Emissions reduction and progress toward net-zero targets",
                "- Energy cost savings and reduced volatility",
                "- Improved ESG ratings and stakeholder trust",
            ]
            .join("\n"),
            risks: [
                "- Implementation delays due to supply constraints",
                "- Behavior change adoption lag",
                "- Regulatory or incentive scheme changes",
            ]
            .join("\n"),
            kpis: [
                "- Year-over-year tCO2e reduction",
                "- Energy consumption (kWh) per m²",
                "- % renewable electricity",
                "- Employee commute emissions per FTE",
            ]
            .join("\n"),
        }
    }
}

impl ProposalRecord {
    /// A record with every field empty
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            organization: String::new(),
            contact_name: String::new(),
            contact_email: String::new(),
            summary: String::new(),
            objectives: String::new(),
            baseline_emissions_tco2e: String::new(),
            target_reduction_percent: String::new(),
            timeline: String::new(),
            measures: String::new(),
            budget: String::new(),
            benefits: String::new(),
            risks: String::new(),
            kpis: String::new(),
        }
    }

    pub fn get(&self, field: ProposalField) -> &str {
        match field {
            ProposalField::Title => &self.title,
            ProposalField::Organization => &self.organization,
            ProposalField::ContactName => &self.contact_name,
            ProposalField::ContactEmail => &self.contact_email,
            ProposalField::Summary => &self.summary,
            ProposalField::Objectives => &self.objectives,
            ProposalField::BaselineEmissions => &self.baseline_emissions_tco2e,
            ProposalField::TargetReduction => &self.target_reduction_percent,
            ProposalField::Timeline => &self.timeline,
            ProposalField::Measures => &self.measures,
            ProposalField::Budget => &self.budget,
            ProposalField::Benefits => &self.benefits,
            ProposalField::Risks => &self.risks,
            ProposalField::Kpis => &self.kpis,
        }
    }

    /// Replace a single field's value
    pub fn set(&mut self, field: ProposalField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Iterate over `(field, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (ProposalField, &str)> + '_ {
        ProposalField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    fn slot_mut(&mut self, field: ProposalField) -> &mut String {
        match field {
            ProposalField::Title => &mut self.title,
            ProposalField::Organization => &mut self.organization,
            ProposalField::ContactName => &mut self.contact_name,
            ProposalField::ContactEmail => &mut self.contact_email,
            ProposalField::Summary => &mut self.summary,
            ProposalField::Objectives => &mut self.objectives,
            ProposalField::BaselineEmissions => &mut self.baseline_emissions_tco2e,
            ProposalField::TargetReduction => &mut self.target_reduction_percent,
            ProposalField::Timeline => &mut self.timeline,
            ProposalField::Measures => &mut self.measures,
            ProposalField::Budget => &mut self.budget,
            ProposalField::Benefits => &mut self.benefits,
            ProposalField::Risks => &mut self.risks,
            ProposalField::Kpis => &mut self.kpis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_round_trip_through_from_str() {
        for field in ProposalField::ALL {
            assert_eq!(field.key().parse::<ProposalField>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_name() {
        let err = "deadline".parse::<ProposalField>().unwrap_err();
        assert!(matches!(err, ProposalError::UnknownField { ref name } if name == "deadline"));
    }

    #[test]
    fn test_multiline_fields() {
        let multiline: Vec<_> = ProposalField::ALL
            .into_iter()
            .filter(|f| f.is_multiline())
            .map(|f| f.key())
            .collect();
        assert_eq!(
            multiline,
            vec!["summary", "objectives", "measures", "benefits", "risks", "kpis"]
        );
        assert_eq!(ProposalField::Summary.rows(), Some(4));
        assert_eq!(ProposalField::Kpis.rows(), Some(3));
    }

    #[test]
    fn test_default_record_values() {
        let record = ProposalRecord::default();
        assert_eq!(record.title, "Carbon Footprint Reduction Initiative");
        assert_eq!(record.target_reduction_percent, "30");
        assert_eq!(record.budget, "€500,000 total across 3 years");
        assert!(record.organization.is_empty());
        assert!(record.baseline_emissions_tco2e.is_empty());
        assert_eq!(record.measures.lines().count(), 5);
    }

    #[test]
    fn test_serializes_exactly_the_fixed_keys() {
        let value = serde_json::to_value(ProposalRecord::default()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), ProposalField::ALL.len());
        for field in ProposalField::ALL {
            assert!(object[field.key()].is_string(), "missing {}", field.key());
        }
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let record: ProposalRecord =
            serde_json::from_str(r#"{"organization":"Acme","baselineEmissionsTCO2e":"1200"}"#)
                .unwrap();
        assert_eq!(record.organization, "Acme");
        assert_eq!(record.baseline_emissions_tco2e, "1200");
        assert_eq!(record.title, ProposalRecord::default().title);
    }

    #[test]
    fn test_unknown_json_key_rejected() {
        let result = serde_json::from_str::<ProposalRecord>(r#"{"deadline":"soon"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_set_touches_one_field() {
        let mut record = ProposalRecord::blank();
        record.set(ProposalField::Risks, "none");
        for (field, value) in record.iter() {
            if field == ProposalField::Risks {
                assert_eq!(value, "none");
            } else {
                assert!(value.is_empty());
            }
        }
    }
}
