//! Core type definitions for audit planning

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Risk tiers, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    High,
    Medium,
    Low,
}

impl RiskTier {
    /// All tiers, highest first
    pub const ALL: [RiskTier; 3] = [RiskTier::High, RiskTier::Medium, RiskTier::Low];

    /// Share of the team assigned to this tier, in tenths
    pub fn share_tenths(self) -> usize {
        match self {
            Self::High => 5,
            Self::Medium => 3,
            Self::Low => 2,
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

impl std::str::FromStr for RiskTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Invalid risk tier: {}", s)),
        }
    }
}

/// One value per risk tier
///
/// Every tier is always present, so a `ByTier<Vec<_>>` can never be missing
/// a tier the way a string-keyed map could.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByTier<T> {
    #[serde(rename = "High")]
    pub high: T,
    #[serde(rename = "Medium")]
    pub medium: T,
    #[serde(rename = "Low")]
    pub low: T,
}

impl<T> ByTier<T> {
    pub fn new(high: T, medium: T, low: T) -> Self {
        Self { high, medium, low }
    }

    /// Build a value for every tier from a function of the tier
    pub fn from_fn(mut f: impl FnMut(RiskTier) -> T) -> Self {
        Self {
            high: f(RiskTier::High),
            medium: f(RiskTier::Medium),
            low: f(RiskTier::Low),
        }
    }

    pub fn get(&self, tier: RiskTier) -> &T {
        match tier {
            RiskTier::High => &self.high,
            RiskTier::Medium => &self.medium,
            RiskTier::Low => &self.low,
        }
    }

    pub fn get_mut(&mut self, tier: RiskTier) -> &mut T {
        match tier {
            RiskTier::High => &mut self.high,
            RiskTier::Medium => &mut self.medium,
            RiskTier::Low => &mut self.low,
        }
    }

    /// Iterate tiers in High, Medium, Low order
    pub fn iter(&self) -> impl Iterator<Item = (RiskTier, &T)> {
        RiskTier::ALL.into_iter().map(move |tier| (tier, self.get(tier)))
    }

    pub fn map<U>(self, mut f: impl FnMut(RiskTier, T) -> U) -> ByTier<U> {
        ByTier {
            high: f(RiskTier::High, self.high),
            medium: f(RiskTier::Medium, self.medium),
            low: f(RiskTier::Low, self.low),
        }
    }
}

impl<T> Index<RiskTier> for ByTier<T> {
    type Output = T;

    fn index(&self, tier: RiskTier) -> &T {
        self.get(tier)
    }
}

impl<T> IndexMut<RiskTier> for ByTier<T> {
    fn index_mut(&mut self, tier: RiskTier) -> &mut T {
        self.get_mut(tier)
    }
}

/// Risk topics per tier
pub type RiskMap = ByTier<Vec<String>>;

/// Team member names per tier (blank names are kept as empty strings)
pub type TeamMembers = ByTier<Vec<String>>;

/// Which sector template catalog to draw from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    /// Broad financial reporting and compliance checklist, nine sectors
    #[default]
    Compliance,
    /// Topic-focused, risk-oriented checklist, three sectors
    Topical,
}

impl CatalogKind {
    pub const ALL: [CatalogKind; 2] = [CatalogKind::Compliance, CatalogKind::Topical];
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Compliance => write!(f, "compliance"),
            Self::Topical => write!(f, "topical"),
        }
    }
}

impl std::str::FromStr for CatalogKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compliance" => Ok(Self::Compliance),
            "topical" | "topic" => Ok(Self::Topical),
            _ => Err(format!("Invalid catalog: {}", s)),
        }
    }
}

/// Predefined audit plan content for one sector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorTemplate {
    pub sector: String,
    pub objectives: Vec<String>,
    pub scope: Vec<String>,
    pub risks: RiskMap,
}

/// Sub-team sizes computed from a total team size
///
/// The per-tier sizes are truncated independently, so they may add up to
/// less than `team_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAllocation {
    pub team_size: usize,
    pub sizes: ByTier<usize>,
}

impl TeamAllocation {
    pub fn size(&self, tier: RiskTier) -> usize {
        self.sizes[tier]
    }

    /// Members placed in one of the three sub-teams
    pub fn assigned(&self) -> usize {
        self.sizes.iter().map(|(_, n)| *n).sum()
    }

    /// Members lost to truncation
    pub fn unassigned(&self) -> usize {
        self.team_size.saturating_sub(self.assigned())
    }
}

impl std::fmt::Display for TeamAllocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Team size: {}", self.team_size)?;
        for (tier, size) in self.sizes.iter() {
            writeln!(f, "  {} Risk Team: {}", tier, size)?;
        }
        write!(f, "  Unassigned: {}", self.unassigned())
    }
}

/// A fully assembled audit plan, ready to render
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditPlan {
    pub company_name: String,
    pub sector: String,
    pub audit_period: String,
    pub team_size: u32,
    pub objectives: Vec<String>,
    pub scope: Vec<String>,
    pub risks: RiskMap,
    pub team_members: TeamMembers,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_display_and_parse() {
        assert_eq!(RiskTier::High.to_string(), "High");
        assert_eq!("medium".parse::<RiskTier>().unwrap(), RiskTier::Medium);
        assert_eq!("LOW".parse::<RiskTier>().unwrap(), RiskTier::Low);
        assert!("severe".parse::<RiskTier>().is_err());
    }

    #[test]
    fn test_by_tier_iterates_in_order() {
        let tiers = ByTier::new("a", "b", "c");
        let order: Vec<_> = tiers.iter().map(|(t, v)| (t, *v)).collect();
        assert_eq!(
            order,
            vec![
                (RiskTier::High, "a"),
                (RiskTier::Medium, "b"),
                (RiskTier::Low, "c")
            ]
        );
    }

    #[test]
    fn test_by_tier_serializes_with_tier_names() {
        let risks: RiskMap = ByTier::new(vec!["x".to_string()], vec![], vec![]);
        let json = serde_json::to_value(&risks).unwrap();
        assert_eq!(json["High"][0], "x");
        assert!(json["Medium"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_catalog_kind_parse() {
        assert_eq!("compliance".parse::<CatalogKind>().unwrap(), CatalogKind::Compliance);
        assert_eq!("Topical".parse::<CatalogKind>().unwrap(), CatalogKind::Topical);
        assert_eq!(CatalogKind::default(), CatalogKind::Compliance);
        assert!("other".parse::<CatalogKind>().is_err());
        assert_eq!("topic".parse::<CatalogKind>().unwrap(), CatalogKind::Topical);
    }

    #[test]
    fn test_allocation_unassigned() {
        let alloc = TeamAllocation {
            team_size: 5,
            sizes: ByTier::new(2, 1, 1),
        };
        assert_eq!(alloc.assigned(), 4);
        assert_eq!(alloc.unassigned(), 1);
        assert_eq!(alloc.size(RiskTier::High), 2);
    }

    #[test]
    fn test_allocation_is_copy() {
        let alloc = TeamAllocation {
            team_size: 10,
            sizes: ByTier::new(5, 3, 2),
        };
        let copy = alloc;
        assert_eq!(copy, alloc);
        assert_eq!(alloc.sizes.low, 2);
    }
}
