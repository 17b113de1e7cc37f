//! Structural document model and the fixed report layout

use auditplan_core::{AuditPlan, RiskTier};

use crate::RenderOptions;

/// Vertical gap after the title block
const TITLE_GAP: f32 = 30.0;
/// Vertical gap closing a numbered section
const SECTION_GAP: f32 = 20.0;
/// Vertical gap between tier subsections
const SUBSECTION_GAP: f32 = 12.0;

/// One unit of report content
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Centered title line
    Title(String),
    /// Numbered section heading
    Heading(String),
    /// Subsection heading inside a section
    Subheading(String),
    /// Bulleted line; the bullet glyph is added by the encoder
    Bullet(String),
    /// Two-column label/value table
    Table(Vec<[String; 2]>),
    /// Vertical whitespace in points
    Spacer(f32),
}

/// A laid-out report, blocks in reading order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    fn bullets<'a>(&mut self, items: impl IntoIterator<Item = &'a String>) {
        for item in items {
            self.push(Block::Bullet(item.clone()));
        }
    }

    /// Section and subsection headings, in order
    pub fn headings(&self) -> Vec<&str> {
        self.blocks
            .iter()
            .filter_map(|block| match block {
                Block::Heading(text) | Block::Subheading(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rows of every table in the document
    pub fn table_rows(&self) -> impl Iterator<Item = &[String; 2]> {
        self.blocks.iter().flat_map(|block| match block {
            Block::Table(rows) => rows.as_slice(),
            _ => &[][..],
        })
    }

    /// Every block's text, ignoring spacing, one entry per line of content
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                Block::Title(text)
                | Block::Heading(text)
                | Block::Subheading(text)
                | Block::Bullet(text) => lines.push(text.clone()),
                Block::Table(rows) => {
                    lines.extend(rows.iter().map(|[label, value]| format!("{} {}", label, value)))
                }
                Block::Spacer(_) => {}
            }
        }
        lines
    }
}

/// Lay out an audit plan in the report's fixed section order
///
/// 1. Title block (document title, company name)
/// 2. Company Information table
/// 3. Audit Objectives
/// 4. Audit Scope
/// 5. Risk Assessment, one subsection per tier
/// 6. Resource Allocation, one subsection per tier that has members
pub fn layout(plan: &AuditPlan, options: &RenderOptions) -> Document {
    let mut doc = Document::default();

    doc.push(Block::Title(options.title.clone()));
    doc.push(Block::Title(plan.company_name.clone()));
    doc.push(Block::Spacer(TITLE_GAP));

    doc.push(Block::Heading("1. Company Information".to_string()));
    doc.push(Block::Table(vec![
        row("Company Name:", &plan.company_name),
        row("Sector:", &plan.sector),
        row("Audit Period:", &plan.audit_period),
        row("Team Size:", &plan.team_size.to_string()),
    ]));
    doc.push(Block::Spacer(SECTION_GAP));

    doc.push(Block::Heading("2. Audit Objectives".to_string()));
    doc.bullets(&plan.objectives);
    doc.push(Block::Spacer(SECTION_GAP));

    doc.push(Block::Heading("3. Audit Scope".to_string()));
    doc.bullets(&plan.scope);
    doc.push(Block::Spacer(SECTION_GAP));

    doc.push(Block::Heading("4. Risk Assessment".to_string()));
    for (tier, risks) in plan.risks.iter() {
        doc.push(Block::Subheading(format!("{} Risk Areas:", tier)));
        doc.bullets(risks);
        doc.push(Block::Spacer(if tier == RiskTier::Low {
            SECTION_GAP
        } else {
            SUBSECTION_GAP
        }));
    }

    doc.push(Block::Heading("5. Resource Allocation".to_string()));
    for (tier, members) in plan.team_members.iter() {
        if members.is_empty() {
            continue;
        }
        doc.push(Block::Subheading(format!("{} Risk Team:", tier)));
        doc.bullets(members);
        if tier != RiskTier::Low {
            doc.push(Block::Spacer(SUBSECTION_GAP));
        }
    }

    doc
}

fn row(label: &str, value: &str) -> [String; 2] {
    [label.to_string(), value.to_string()]
}
