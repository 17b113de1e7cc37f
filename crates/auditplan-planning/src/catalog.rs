//! Template Store: read-only sector template catalogs
//!
//! Two catalogs exist side by side. They cover overlapping sector names with
//! different content, and neither supersedes the other; callers pick one with
//! [`CatalogKind`].

use std::sync::LazyLock;

use auditplan_core::{AuditPlanError, ByTier, CatalogKind, Result, SectorTemplate};
use tracing::debug;

use crate::{compliance, topical};

/// Static form of a sector template, as written in the catalog tables
pub(crate) struct RawTemplate {
    pub sector: &'static str,
    pub objectives: &'static [&'static str],
    pub scope: &'static [&'static str],
    pub high: &'static [&'static str],
    pub medium: &'static [&'static str],
    pub low: &'static [&'static str],
}

impl RawTemplate {
    fn to_template(&self) -> SectorTemplate {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        SectorTemplate {
            sector: self.sector.to_string(),
            objectives: owned(self.objectives),
            scope: owned(self.scope),
            risks: ByTier::new(owned(self.high), owned(self.medium), owned(self.low)),
        }
    }
}

static COMPLIANCE: LazyLock<TemplateStore> =
    LazyLock::new(|| TemplateStore::from_raw(CatalogKind::Compliance, compliance::TEMPLATES));

static TOPICAL: LazyLock<TemplateStore> =
    LazyLock::new(|| TemplateStore::from_raw(CatalogKind::Topical, topical::TEMPLATES));

/// An immutable catalog of sector templates, in catalog order
#[derive(Debug)]
pub struct TemplateStore {
    kind: CatalogKind,
    templates: Vec<SectorTemplate>,
}

impl TemplateStore {
    /// The process-wide catalog of the given kind
    pub fn get(kind: CatalogKind) -> &'static TemplateStore {
        match kind {
            CatalogKind::Compliance => LazyLock::force(&COMPLIANCE),
            CatalogKind::Topical => LazyLock::force(&TOPICAL),
        }
    }

    fn from_raw(kind: CatalogKind, raw: &[RawTemplate]) -> Self {
        let templates = raw.iter().map(RawTemplate::to_template).collect::<Vec<_>>();
        debug!("Built {} catalog with {} sectors", kind, templates.len());
        Self { kind, templates }
    }

    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    /// Find the template for a sector (exact, case-sensitive match)
    pub fn lookup(&self, sector: &str) -> Result<&SectorTemplate> {
        self.templates
            .iter()
            .find(|t| t.sector == sector)
            .ok_or_else(|| AuditPlanError::UnknownSector {
                sector: sector.to_string(),
                catalog: self.kind,
            })
    }

    pub fn contains(&self, sector: &str) -> bool {
        self.templates.iter().any(|t| t.sector == sector)
    }

    /// Sector names in catalog order
    pub fn sectors(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|t| t.sector.as_str())
    }

    pub fn templates(&self) -> &[SectorTemplate] {
        &self.templates
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Look up a sector in one of the process-wide catalogs
pub fn lookup(kind: CatalogKind, sector: &str) -> Result<&'static SectorTemplate> {
    TemplateStore::get(kind).lookup(sector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use auditplan_core::RiskTier;
    use std::collections::HashSet;

    #[test]
    fn test_every_template_is_complete() {
        for kind in CatalogKind::ALL {
            let store = TemplateStore::get(kind);
            assert!(!store.is_empty());
            for template in store.templates() {
                let name = &template.sector;
                assert!(!template.objectives.is_empty(), "{kind}/{name}: objectives");
                assert!(!template.scope.is_empty(), "{kind}/{name}: scope");
                for tier in RiskTier::ALL {
                    assert!(!template.risks[tier].is_empty(), "{kind}/{name}: {tier} risks");
                }
            }
        }
    }

    #[test]
    fn test_sector_keys_unique() {
        for kind in CatalogKind::ALL {
            let sectors: Vec<_> = TemplateStore::get(kind).sectors().collect();
            let unique: HashSet<_> = sectors.iter().collect();
            assert_eq!(sectors.len(), unique.len(), "duplicate sector in {kind}");
        }
    }

    #[test]
    fn test_compliance_catalog_order() {
        let sectors: Vec<_> = TemplateStore::get(CatalogKind::Compliance).sectors().collect();
        assert_eq!(
            sectors,
            vec![
                "Technology",
                "Financial Services",
                "Manufacturing",
                "Healthcare",
                "Retail",
                "Energy",
                "Telecommunications",
                "Real Estate",
                "Education",
            ]
        );
    }

    #[test]
    fn test_topical_catalog_is_narrower() {
        let topical = TemplateStore::get(CatalogKind::Topical);
        assert_eq!(topical.len(), 3);
        assert!(topical.contains("Manufacturing"));
        assert!(!topical.contains("Healthcare"));
        assert!(TemplateStore::get(CatalogKind::Compliance).contains("Healthcare"));
    }

    #[test]
    fn test_catalogs_differ_for_shared_sector() {
        let compliance = lookup(CatalogKind::Compliance, "Technology").unwrap();
        let topical = lookup(CatalogKind::Topical, "Technology").unwrap();
        assert_ne!(compliance.objectives, topical.objectives);
        assert_eq!(compliance.risks.high[0], "Revenue recognition");
        assert_eq!(
            topical.risks.high[0],
            "Data breaches and cybersecurity vulnerabilities"
        );
    }

    #[test]
    fn test_unknown_sector() {
        for kind in CatalogKind::ALL {
            match lookup(kind, "NotASector") {
                Err(AuditPlanError::UnknownSector { sector, catalog }) => {
                    assert_eq!(sector, "NotASector");
                    assert_eq!(catalog, kind);
                }
                other => panic!("expected UnknownSector, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(lookup(CatalogKind::Compliance, "technology").is_err());
    }

    #[test]
    fn test_get_returns_same_instance() {
        let a = TemplateStore::get(CatalogKind::Topical);
        let b = TemplateStore::get(CatalogKind::Topical);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.kind(), CatalogKind::Topical);
    }
}
