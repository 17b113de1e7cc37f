//! Plan assembly: form input + sector template + team into one record

use auditplan_core::{AuditPlan, AuditPlanError, ByTier, Result, TeamMembers};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::allocator::{allocate, staff};
use crate::catalog::TemplateStore;

/// Date format used in the audit period, e.g. `January 01, 2024`
const PERIOD_DATE_FORMAT: &str = "%B %d, %Y";

/// A report request as submitted by the input form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRequest {
    pub company_name: String,
    pub sector: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub team_size: u32,
    /// Names typed into the per-tier slots; fitted to the allocation
    #[serde(default)]
    pub team_members: TeamMembers,
}

impl PlanRequest {
    /// Allocate the team, fit the roster to it and assemble the plan
    pub fn assemble(&self, store: &TemplateStore) -> Result<AuditPlan> {
        let allocation = allocate(self.team_size)?;
        let members = staff(&allocation, self.team_members.clone());
        assemble(
            store,
            &self.company_name,
            &self.sector,
            self.start_date,
            self.end_date,
            self.team_size,
            members,
        )
    }
}

/// Merge form input with the sector's template into an [`AuditPlan`]
///
/// Fails with `InvalidInput` for a blank company name, a zero team size or
/// an end date before the start date, and with `UnknownSector` when the
/// sector is not in `store`. Team members are taken as given.
pub fn assemble(
    store: &TemplateStore,
    company_name: &str,
    sector: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    team_size: u32,
    team_members: TeamMembers,
) -> Result<AuditPlan> {
    if company_name.trim().is_empty() {
        return Err(AuditPlanError::invalid_input("company name is required"));
    }
    if team_size == 0 {
        return Err(AuditPlanError::invalid_input("team size must be at least 1"));
    }
    if end_date < start_date {
        return Err(AuditPlanError::invalid_input(format!(
            "audit end date {} is before start date {}",
            end_date, start_date
        )));
    }

    let template = store.lookup(sector)?;
    debug!("Assembling {} plan for {}", template.sector, company_name);

    Ok(AuditPlan {
        company_name: company_name.to_string(),
        sector: template.sector.clone(),
        audit_period: format_period(start_date, end_date),
        team_size,
        objectives: template.objectives.clone(),
        scope: template.scope.clone(),
        risks: template.risks.clone(),
        team_members,
    })
}

/// Format an audit period as `<Month DD, YYYY> to <Month DD, YYYY>`
pub fn format_period(start_date: NaiveDate, end_date: NaiveDate) -> String {
    format!(
        "{} to {}",
        start_date.format(PERIOD_DATE_FORMAT),
        end_date.format(PERIOD_DATE_FORMAT)
    )
}

/// Demonstration plan shown before any company details are entered
pub fn sample_plan(store: &TemplateStore) -> Result<AuditPlan> {
    let template = store.lookup("Technology")?;
    Ok(AuditPlan {
        company_name: "Sample Company".to_string(),
        sector: template.sector.clone(),
        audit_period: "2024".to_string(),
        team_size: 5,
        objectives: template.objectives.clone(),
        scope: template.scope.clone(),
        risks: template.risks.clone(),
        team_members: ByTier::default(),
    })
}
