//! PDF encoder
//!
//! Flows a [`Document`] onto fixed-size pages using the standard Helvetica
//! faces, so no font data needs to be embedded. Blocks are placed top to
//! bottom; a line or table row that does not fit starts a new page.

use auditplan_core::{AuditPlanError, Result};
use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};
use tracing::debug;

use crate::document::{Block, Document};
use crate::metrics::{encode_win_ansi, wrap, Font};
use crate::{RenderOptions, ReportFormat, Renderer};

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

const BULLET: &str = "\u{2022} ";

/// Table column widths in points, scaled down on narrow pages
const TABLE_COLUMNS: [f32; 2] = [150.0, 250.0];
const CELL_PAD_X: f32 = 6.0;
const CELL_PAD_Y: f32 = 8.0;
/// Light grey, #D3D3D3
const GRID_GRAY: f32 = 0.827;
const GRID_WIDTH: f32 = 0.5;

/// Typography for one kind of paragraph
#[derive(Debug, Clone, Copy)]
struct Style {
    font: Font,
    size: f32,
    leading: f32,
    space_before: f32,
    space_after: f32,
}

const TITLE: Style = Style {
    font: Font::HelveticaBold,
    size: 20.0,
    leading: 24.0,
    space_before: 0.0,
    space_after: 30.0,
};

const HEADING: Style = Style {
    font: Font::HelveticaBold,
    size: 14.0,
    leading: 16.8,
    space_before: 20.0,
    space_after: 12.0,
};

const SUBHEADING: Style = Style {
    font: Font::HelveticaBold,
    size: 12.0,
    leading: 14.4,
    space_before: 12.0,
    space_after: 8.0,
};

const BODY: Style = Style {
    font: Font::Helvetica,
    size: 11.0,
    leading: 14.0,
    space_before: 0.0,
    space_after: 8.0,
};

const TABLE_TEXT_SIZE: f32 = 11.0;
const TABLE_LEADING: f32 = 13.2;

/// Renders documents as PDF
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    options: RenderOptions,
}

impl PdfRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }
}

impl Renderer for PdfRenderer {
    fn format(&self) -> ReportFormat {
        ReportFormat::Pdf
    }

    fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn encode(&self, document: &Document) -> Result<Vec<u8>> {
        let (width, height) = self.options.page_size.dimensions();
        let margin = self.options.margin;
        if !margin.is_finite() || margin < 0.0 || margin * 2.0 >= width.min(height) {
            return Err(AuditPlanError::invalid_input(format!(
                "margin {} leaves no room on a {}x{} page",
                margin, width, height
            )));
        }

        let mut flow = PageFlow::new(width, height, margin);
        for block in &document.blocks {
            flow.place(block);
        }
        let pages = flow.finish();
        debug!("Laid out {} block(s) on {} page(s)", document.blocks.len(), pages.len());

        Ok(write_pdf(pages, width, height))
    }
}

/// Assemble the page contents into a PDF file
fn write_pdf(pages: Vec<Content>, width: f32, height: f32) -> Vec<u8> {
    let catalog_id = Ref::new(1);
    let page_tree_id = Ref::new(2);
    let regular_id = Ref::new(3);
    let bold_id = Ref::new(4);

    let page_refs: Vec<(Ref, Ref)> = (0..pages.len() as i32)
        .map(|i| (Ref::new(5 + 2 * i), Ref::new(6 + 2 * i)))
        .collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_refs.iter().map(|(page_id, _)| *page_id))
        .count(page_refs.len() as i32);

    for ((page_id, content_id), content) in page_refs.iter().zip(pages) {
        let mut page = pdf.page(*page_id);
        page.media_box(Rect::new(0.0, 0.0, width, height));
        page.parent(page_tree_id);
        page.contents(*content_id);
        page.resources()
            .fonts()
            .pair(REGULAR, regular_id)
            .pair(BOLD, bold_id);
        page.finish();

        let data = content.finish();
        pdf.stream(*content_id, &data);
    }

    for (id, font) in [(regular_id, Font::Helvetica), (bold_id, Font::HelveticaBold)] {
        pdf.type1_font(id)
            .base_font(Name(font.base_font()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    pdf.finish()
}

/// Cursor state while flowing blocks onto pages
struct PageFlow {
    pages: Vec<Content>,
    current: Content,
    left: f32,
    top: f32,
    bottom: f32,
    width: f32,
    /// Baseline cursor, measured from the bottom edge
    y: f32,
    /// Nothing placed on the current page yet
    fresh: bool,
}

impl PageFlow {
    fn new(page_width: f32, page_height: f32, margin: f32) -> Self {
        Self {
            pages: Vec::new(),
            current: Content::new(),
            left: margin,
            top: page_height - margin,
            bottom: margin,
            width: page_width - 2.0 * margin,
            y: page_height - margin,
            fresh: true,
        }
    }

    fn finish(mut self) -> Vec<Content> {
        self.pages.push(self.current);
        self.pages
    }

    fn new_page(&mut self) {
        let done = std::mem::replace(&mut self.current, Content::new());
        self.pages.push(done);
        self.y = self.top;
        self.fresh = true;
    }

    /// Start a new page unless `height` more points fit on this one
    fn reserve(&mut self, height: f32) {
        if !self.fresh && self.y - height < self.bottom {
            self.new_page();
        }
        self.fresh = false;
    }

    /// Vertical space, dropped at the top of a page
    fn skip(&mut self, amount: f32) {
        if !self.fresh {
            self.y -= amount;
        }
    }

    fn place(&mut self, block: &Block) {
        match block {
            Block::Title(text) => self.paragraph(text, TITLE, true),
            Block::Heading(text) => self.paragraph(text, HEADING, false),
            Block::Subheading(text) => self.paragraph(text, SUBHEADING, false),
            Block::Bullet(text) => self.bullet(text),
            Block::Table(rows) => self.table(rows),
            Block::Spacer(height) => self.skip(*height),
        }
    }

    fn paragraph(&mut self, text: &str, style: Style, centered: bool) {
        self.skip(style.space_before);
        for line in wrap(text, style.font, style.size, self.width) {
            self.reserve(style.leading);
            let x = if centered {
                self.left + (self.width - style.font.text_width(&line, style.size)) / 2.0
            } else {
                self.left
            };
            self.text(style.font, style.size, x, self.y - style.size, &line);
            self.y -= style.leading;
        }
        self.skip(style.space_after);
    }

    fn bullet(&mut self, text: &str) {
        let style = BODY;
        let indent = style.font.text_width(BULLET, style.size);
        let lines = wrap(text, style.font, style.size, self.width - indent);
        for (i, line) in lines.iter().enumerate() {
            self.reserve(style.leading);
            let baseline = self.y - style.size;
            if i == 0 {
                self.text(style.font, style.size, self.left, baseline, BULLET);
            }
            self.text(style.font, style.size, self.left + indent, baseline, line);
            self.y -= style.leading;
        }
        self.skip(style.space_after);
    }

    fn table(&mut self, rows: &[[String; 2]]) {
        let natural: f32 = TABLE_COLUMNS.iter().sum();
        let scale = (self.width / natural).min(1.0);
        let columns = TABLE_COLUMNS.map(|w| w * scale);
        let fonts = [Font::HelveticaBold, Font::Helvetica];

        for row in rows {
            let cells: Vec<Vec<String>> = row
                .iter()
                .zip(columns)
                .zip(fonts)
                .map(|((text, col), font)| {
                    wrap(text, font, TABLE_TEXT_SIZE, col - 2.0 * CELL_PAD_X)
                })
                .collect();
            let line_count = cells.iter().map(Vec::len).max().unwrap_or(1);
            let row_height = 2.0 * CELL_PAD_Y + line_count as f32 * TABLE_LEADING;

            self.reserve(row_height);
            let row_top = self.y;
            let mut x = self.left;
            for ((lines, col), font) in cells.iter().zip(columns).zip(fonts) {
                let mut baseline = row_top - CELL_PAD_Y - TABLE_TEXT_SIZE;
                for line in lines {
                    self.text(font, TABLE_TEXT_SIZE, x + CELL_PAD_X, baseline, line);
                    baseline -= TABLE_LEADING;
                }
                self.cell_border(x, row_top - row_height, col, row_height);
                x += col;
            }
            self.y -= row_height;
        }
    }

    fn text(&mut self, font: Font, size: f32, x: f32, baseline: f32, text: &str) {
        let name = match font {
            Font::Helvetica => REGULAR,
            Font::HelveticaBold => BOLD,
        };
        let encoded = encode_win_ansi(text);
        self.current
            .begin_text()
            .set_font(name, size)
            .next_line(x, baseline)
            .show(Str(&encoded))
            .end_text();
    }

    fn cell_border(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.current
            .save_state()
            .set_line_width(GRID_WIDTH)
            .set_stroke_gray(GRID_GRAY)
            .rect(x, y, width, height)
            .stroke()
            .restore_state();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    fn doc(blocks: Vec<Block>) -> Document {
        Document { blocks }
    }

    #[test]
    fn test_minimal_document() {
        let bytes = PdfRenderer::default()
            .encode(&doc(vec![Block::Title("Hello".to_string())]))
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert_eq!(count(&bytes, b"(Hello) Tj"), 1);
        assert_eq!(count(&bytes, b"/Helvetica-Bold"), 1);
        assert_eq!(count(&bytes, b"/WinAnsiEncoding"), 2);
    }

    #[test]
    fn test_no_generation_metadata() {
        let bytes = PdfRenderer::default()
            .encode(&doc(vec![Block::Bullet("x".to_string())]))
            .unwrap();
        assert_eq!(count(&bytes, b"/CreationDate"), 0);
        assert_eq!(count(&bytes, b"/Producer"), 0);
        assert_eq!(count(&bytes, b"/ID"), 0);
    }

    #[test]
    fn test_long_document_paginates() {
        let blocks = (0..200)
            .map(|i| Block::Bullet(format!("Item {}", i)))
            .collect();
        let bytes = PdfRenderer::default().encode(&doc(blocks)).unwrap();
        assert!(count(&bytes, b"/MediaBox") > 1);
        assert_eq!(count(&bytes, b"(Item 199) Tj"), 1);
    }

    #[test]
    fn test_table_draws_grid() {
        let rows = vec![["Team Size:".to_string(), "10".to_string()]];
        let bytes = PdfRenderer::default()
            .encode(&doc(vec![Block::Table(rows)]))
            .unwrap();
        assert_eq!(count(&bytes, b"(Team Size:) Tj"), 1);
        assert_eq!(count(&bytes, b"(10) Tj"), 1);
        assert_eq!(count(&bytes, b" re\n"), 2);
    }

    #[test]
    fn test_oversized_margin_rejected() {
        let renderer = PdfRenderer::new(RenderOptions {
            margin: 400.0,
            ..RenderOptions::default()
        });
        assert!(matches!(
            renderer.encode(&Document::default()),
            Err(AuditPlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_nan_margin_rejected() {
        let renderer = PdfRenderer::new(RenderOptions {
            margin: f32::NAN,
            ..RenderOptions::default()
        });
        assert!(matches!(
            renderer.encode(&doc(vec![Block::Title("Hello".to_string())])),
            Err(AuditPlanError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_spacer_dropped_at_page_top() {
        let mut flow = PageFlow::new(612.0, 792.0, 50.0);
        flow.place(&Block::Spacer(30.0));
        assert_eq!(flow.y, 742.0);
    }
}
