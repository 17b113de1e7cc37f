//! Risk assessment criteria
//!
//! Descriptive guidance for classifying a risk into a tier. Shown to users
//! next to the plan; never copied into an [`AuditPlan`].
//!
//! [`AuditPlan`]: auditplan_core::AuditPlan

use auditplan_core::{ByTier, RiskTier};
use serde::Serialize;

/// Dimension along which a risk is assessed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Dimension {
    #[serde(rename = "Financial Impact")]
    FinancialImpact,
    #[serde(rename = "Regulatory Impact")]
    RegulatoryImpact,
    #[serde(rename = "Reputation Impact")]
    ReputationImpact,
    #[serde(rename = "Operational Impact")]
    OperationalImpact,
    Probability,
}

impl Dimension {
    pub const ALL: [Dimension; 5] = [
        Dimension::FinancialImpact,
        Dimension::RegulatoryImpact,
        Dimension::ReputationImpact,
        Dimension::OperationalImpact,
        Dimension::Probability,
    ];
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FinancialImpact => write!(f, "Financial Impact"),
            Self::RegulatoryImpact => write!(f, "Regulatory Impact"),
            Self::ReputationImpact => write!(f, "Reputation Impact"),
            Self::OperationalImpact => write!(f, "Operational Impact"),
            Self::Probability => write!(f, "Probability"),
        }
    }
}

type Criteria = [(Dimension, &'static str); 5];

/// Criteria per tier, dimensions in [`Dimension::ALL`] order
pub static RISK_ASSESSMENT_CRITERIA: ByTier<Criteria> = ByTier {
    high: [
        (Dimension::FinancialImpact, "Significant financial loss (>$1M)"),
        (Dimension::RegulatoryImpact, "Major regulatory violations"),
        (Dimension::ReputationImpact, "Severe damage to reputation"),
        (Dimension::OperationalImpact, "Critical system disruption"),
        (Dimension::Probability, "High likelihood of occurrence"),
    ],
    medium: [
        (Dimension::FinancialImpact, "Moderate financial loss ($100K-$1M)"),
        (Dimension::RegulatoryImpact, "Minor regulatory violations"),
        (Dimension::ReputationImpact, "Moderate reputation damage"),
        (Dimension::OperationalImpact, "Significant system disruption"),
        (Dimension::Probability, "Moderate likelihood of occurrence"),
    ],
    low: [
        (Dimension::FinancialImpact, "Minor financial loss (<$100K)"),
        (Dimension::RegulatoryImpact, "Procedural non-compliance"),
        (Dimension::ReputationImpact, "Minimal reputation impact"),
        (Dimension::OperationalImpact, "Limited system disruption"),
        (Dimension::Probability, "Low likelihood of occurrence"),
    ],
};

/// Criteria for one tier
pub fn criteria_for(tier: RiskTier) -> &'static [(Dimension, &'static str)] {
    RISK_ASSESSMENT_CRITERIA.get(tier)
}
