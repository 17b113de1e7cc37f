//! auditplan Planning - from form input to an assembled audit plan
//!
//! This crate owns the static sector template catalogs and the two small
//! transforms that turn a form submission into an [`AuditPlan`]: splitting the
//! team across risk tiers and merging everything into one record.
//!
//! [`AuditPlan`]: auditplan_core::AuditPlan

pub mod allocator;
pub mod assembler;
pub mod catalog;
pub mod criteria;
mod compliance;
mod topical;

pub use allocator::{allocate, slot_labels, staff};
pub use assembler::{assemble, format_period, sample_plan, PlanRequest};
pub use catalog::{lookup, TemplateStore};
pub use criteria::{criteria_for, Dimension, RISK_ASSESSMENT_CRITERIA};
