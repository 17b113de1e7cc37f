//! Team allocation across risk tiers
//!
//! A team of `n` is split 50/30/20 into High/Medium/Low risk sub-teams. Each
//! share is truncated on its own, so for most team sizes one or two people
//! end up in no sub-team at all (`allocate(5)` gives 2/1/1). That loss is the
//! established behavior of the planning form and is reported through
//! [`TeamAllocation::unassigned`] rather than redistributed.

use auditplan_core::{AuditPlanError, ByTier, Result, RiskTier, TeamAllocation, TeamMembers};
use tracing::{debug, warn};

/// Split a team into High/Medium/Low sub-team sizes
///
/// Shares are computed in tenths with integer arithmetic, which gives the
/// same result as `floor(n * 0.5)`, `floor(n * 0.3)`, `floor(n * 0.2)`
/// without floating point drift.
pub fn allocate(team_size: u32) -> Result<TeamAllocation> {
    if team_size == 0 {
        return Err(AuditPlanError::invalid_input("team size must be at least 1"));
    }

    let team_size = team_size as usize;
    let allocation = TeamAllocation {
        team_size,
        sizes: ByTier::from_fn(|tier| team_size * tier.share_tenths() / 10),
    };

    if allocation.unassigned() > 0 {
        debug!(
            "Allocation of {} leaves {} member(s) unassigned",
            team_size,
            allocation.unassigned()
        );
    }

    Ok(allocation)
}

/// Fit a free-form roster to the allocated sub-team sizes
///
/// Each tier ends up with exactly as many names as it has slots. Slots
/// without a name stay as empty strings, the way a blank form field would;
/// names beyond the slot count are dropped.
pub fn staff(allocation: &TeamAllocation, roster: TeamMembers) -> TeamMembers {
    roster.map(|tier, mut names| {
        let slots = allocation.size(tier);
        if names.len() > slots {
            warn!(
                "{} Risk Team has {} slot(s); dropping {} extra name(s)",
                tier,
                slots,
                names.len() - slots
            );
        }
        names.resize(slots, String::new());
        names
    })
}

/// Form labels for every slot of a tier, numbered from 1
pub fn slot_labels(allocation: &TeamAllocation, tier: RiskTier) -> Vec<String> {
    (1..=allocation.size(tier))
        .map(|i| format!("Team Member {} Name ({} Risk)", i, tier))
        .collect()
}
