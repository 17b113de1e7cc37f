//! auditplan Render - audit plan documents
//!
//! Rendering happens in two steps. [`layout`] turns an [`AuditPlan`] into a
//! [`Document`], a flat list of typed blocks in the fixed section order of the
//! report. An encoder then serializes that document: [`PdfRenderer`] for the
//! downloadable report, [`MarkdownRenderer`] for on-screen previews.
//!
//! Both encoders are deterministic. The PDF carries no creation date, producer
//! or file identifier, so rendering the same plan twice yields the same bytes.

pub mod document;
pub mod markdown;
mod metrics;
pub mod pdf;

use auditplan_core::{AuditPlan, PageSize, ReportConfig, Result};
use serde::{Deserialize, Serialize};

pub use document::{layout, Block, Document};
pub use markdown::MarkdownRenderer;
pub use pdf::PdfRenderer;

/// Output formats a plan can be rendered to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Pdf,
    Markdown,
}

impl ReportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Markdown => "md",
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pdf => write!(f, "pdf"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Invalid report format: {}", s)),
        }
    }
}

/// Layout settings shared by all encoders
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// First line of the title block
    pub title: String,
    pub page_size: PageSize,
    /// Margin in points on every side
    pub margin: f32,
}

impl RenderOptions {
    pub fn from_config(config: &ReportConfig) -> Self {
        Self {
            title: config.title.clone(),
            page_size: config.page_size,
            margin: config.margin,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from_config(&ReportConfig::default())
    }
}

/// Serializes a laid-out [`Document`] into bytes
pub trait Renderer {
    fn format(&self) -> ReportFormat;

    fn options(&self) -> &RenderOptions;

    fn encode(&self, document: &Document) -> Result<Vec<u8>>;

    /// Lay out a plan and encode it
    fn render(&self, plan: &AuditPlan) -> Result<Vec<u8>> {
        let document = layout(plan, self.options());
        self.encode(&document)
    }
}

/// Build the encoder for a format
pub fn renderer_for(format: ReportFormat, options: RenderOptions) -> Box<dyn Renderer> {
    match format {
        ReportFormat::Pdf => Box::new(PdfRenderer::new(options)),
        ReportFormat::Markdown => Box::new(MarkdownRenderer::new(options)),
    }
}

/// Render a plan to PDF with default options
pub fn render(plan: &AuditPlan) -> Result<Vec<u8>> {
    PdfRenderer::default().render(plan)
}

/// File name stem for a company's report
///
/// Spaces and path separators become underscores, so the stem is always a
/// single path component.
pub fn report_stem(company_name: &str) -> String {
    let company: String = company_name
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("financial_audit_plan_{}", company)
}

/// Download file name for a company's report, `<report_stem>.<ext>`
pub fn report_filename(company_name: &str, format: ReportFormat) -> String {
    format!("{}.{}", report_stem(company_name), format.extension())
}
