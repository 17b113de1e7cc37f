//! Markdown encoder, used for on-screen plan previews

use auditplan_core::Result;

use crate::document::{Block, Document};
use crate::{RenderOptions, ReportFormat, Renderer};

/// Renders documents as Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn to_markdown(&self, document: &Document) -> String {
        let mut out = String::new();
        let mut in_list = false;

        for block in &document.blocks {
            let is_bullet = matches!(block, Block::Bullet(_));
            if in_list && !is_bullet {
                out.push('\n');
            }
            in_list = is_bullet;

            match block {
                Block::Title(text) => out.push_str(&format!("# {}\n", text)),
                Block::Heading(text) => out.push_str(&format!("\n## {}\n\n", text)),
                Block::Subheading(text) => out.push_str(&format!("#### {}\n\n", text)),
                Block::Bullet(text) => out.push_str(&format!("- {}\n", text)),
                Block::Table(rows) => {
                    out.push_str("| Field | Value |\n");
                    out.push_str("|-------|-------|\n");
                    for [label, value] in rows {
                        out.push_str(&format!("| {} | {} |\n", escape_cell(label), escape_cell(value)));
                    }
                }
                Block::Spacer(_) => {}
            }
        }

        if in_list {
            out.push('\n');
        }
        out
    }
}

impl Renderer for MarkdownRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }

    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn encode(&self, document: &Document) -> Result<Vec<u8>> {
        Ok(self.to_markdown(document).into_bytes())
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_to_markdown() {
        let doc = Document {
            blocks: vec![
                Block::Title("Financial Audit Plan".to_string()),
                Block::Title("Acme".to_string()),
                Block::Spacer(30.0),
                Block::Heading("1. Company Information".to_string()),
                Block::Table(vec![["Team Size:".to_string(), "10".to_string()]]),
                Block::Heading("2. Audit Objectives".to_string()),
                Block::Bullet("One".to_string()),
                Block::Bullet("Two".to_string()),
                Block::Subheading("High Risk Areas:".to_string()),
                Block::Bullet("Fraud".to_string()),
            ],
        };

        let md = MarkdownRenderer::default().to_markdown(&doc);
        assert_eq!(
            md,
            "# Financial Audit Plan\n# Acme\n\n## 1. Company Information\n\n\
             | Field | Value |\n|-------|-------|\n| Team Size: | 10 |\n\n\
             ## 2. Audit Objectives\n\n- One\n- Two\n\n\
             #### High Risk Areas:\n\n- Fraud\n\n"
        );
    }

    #[test]
    fn test_pipe_escaped_in_table() {
        let doc = Document {
            blocks: vec![Block::Table(vec![["Company Name:".to_string(), "A|B".to_string()]])],
        };
        let md = MarkdownRenderer::default().to_markdown(&doc);
        assert!(md.contains("| Company Name: | A\\|B |"));
    }
}
