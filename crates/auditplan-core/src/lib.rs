//! # auditplan-core
//!
//! Core types for the auditplan report generator.
//!
//! An audit plan is put together from three things:
//!
//! - a sector template (objectives, scope and tiered risk areas) taken from a
//!   static catalog
//! - a team split into High/Medium/Low risk sub-teams
//! - the company details supplied by whoever fills in the form
//!
//! This crate holds the shared vocabulary for those pieces, the unified error
//! type and the repository-level configuration.

pub mod config;
mod error;
mod types;

pub use config::{AuditPlanConfig, PageSize, ReportConfig, TeamConfig};
pub use error::{AuditPlanError, Result};
pub use types::*;
