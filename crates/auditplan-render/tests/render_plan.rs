//! End-to-end rendering tests
//!
//! Assembles real plans from the catalogs and checks the rendered output:
//! - Section order and header text
//! - Company Information table contents
//! - Byte-for-byte reproducibility
//! - Markdown preview

use auditplan_core::{AuditPlan, ByTier, CatalogKind, PageSize};
use auditplan_planning::{allocate, assemble, sample_plan, staff, TemplateStore};
use auditplan_render::{
    layout, render, renderer_for, Block, MarkdownRenderer, PdfRenderer, RenderOptions,
    Renderer, ReportFormat,
};
use chrono::NaiveDate;

/// Helper to build the Acme Corp technology plan with a team of 10
fn acme_plan() -> AuditPlan {
    let store = TemplateStore::get(CatalogKind::Compliance);
    let allocation = allocate(10).expect("allocate");
    let roster = ByTier::new(
        vec!["Alice".to_string(), "Bob".to_string()],
        vec!["Carol".to_string()],
        vec!["Dan".to_string(), "Eve".to_string()],
    );

    assemble(
        store,
        "Acme Corp",
        "Technology",
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        10,
        staff(&allocation, roster),
    )
    .expect("assemble")
}

fn count(haystack: &[u8], needle: &[u8]) -> usize {
    haystack.windows(needle.len()).filter(|w| *w == needle).count()
}

#[test]
fn test_section_order_and_headers() {
    let doc = layout(&acme_plan(), &RenderOptions::default());

    assert_eq!(doc.blocks[0], Block::Title("Financial Audit Plan".to_string()));
    assert_eq!(doc.blocks[1], Block::Title("Acme Corp".to_string()));
    assert_eq!(
        doc.headings(),
        vec![
            "1. Company Information",
            "2. Audit Objectives",
            "3. Audit Scope",
            "4. Risk Assessment",
            "High Risk Areas:",
            "Medium Risk Areas:",
            "Low Risk Areas:",
            "5. Resource Allocation",
            "High Risk Team:",
            "Medium Risk Team:",
            "Low Risk Team:",
        ]
    );
}

#[test]
fn test_company_information_table() {
    let doc = layout(&acme_plan(), &RenderOptions::default());
    let rows: Vec<[String; 2]> = doc.table_rows().cloned().collect();

    let expected = [
        ["Company Name:", "Acme Corp"],
        ["Sector:", "Technology"],
        ["Audit Period:", "January 01, 2024 to March 31, 2024"],
        ["Team Size:", "10"],
    ];
    assert_eq!(rows.len(), expected.len());
    for (row, [label, value]) in rows.iter().zip(expected) {
        assert_eq!(row[0], label);
        assert_eq!(row[1], value);
    }
}

#[test]
fn test_team_members_padded_to_allocation() {
    let plan = acme_plan();
    assert_eq!(plan.team_members.high, vec!["Alice", "Bob", "", "", ""]);
    assert_eq!(plan.team_members.medium, vec!["Carol", "", ""]);
    assert_eq!(plan.team_members.low, vec!["Dan", "Eve"]);

    let lines = layout(&plan, &RenderOptions::default()).text_lines();
    let team_start = lines
        .iter()
        .position(|l| l == "High Risk Team:")
        .expect("team section");
    assert_eq!(
        &lines[team_start..],
        &[
            "High Risk Team:",
            "Alice",
            "Bob",
            "",
            "",
            "",
            "Medium Risk Team:",
            "Carol",
            "",
            "",
            "Low Risk Team:",
            "Dan",
            "Eve",
        ]
    );
}

#[test]
fn test_pdf_contains_report_text() {
    let bytes = render(&acme_plan()).expect("render");

    assert!(bytes.starts_with(b"%PDF-"));
    assert_eq!(count(&bytes, b"(Financial Audit Plan) Tj"), 1);
    assert_eq!(count(&bytes, b"(1. Company Information) Tj"), 1);
    assert_eq!(count(&bytes, b"(Team Size:) Tj"), 1);
    assert_eq!(count(&bytes, b"(10) Tj"), 1);
    assert_eq!(count(&bytes, b"(5. Resource Allocation) Tj"), 1);
    assert_eq!(count(&bytes, b"(Alice) Tj"), 1);
}

#[test]
fn test_render_is_reproducible() {
    let plan = acme_plan();
    let first = render(&plan).expect("first render");
    let second = render(&plan.clone()).expect("second render");
    assert_eq!(first, second);

    let doc_a = layout(&plan, &RenderOptions::default());
    let doc_b = layout(&plan, &RenderOptions::default());
    assert_eq!(doc_a, doc_b);
}

#[test]
fn test_every_sector_renders() {
    for kind in CatalogKind::ALL {
        let store = TemplateStore::get(kind);
        for sector in store.sectors() {
            let plan = assemble(
                store,
                "Every Sector Ltd",
                sector,
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
                20,
                ByTier::default(),
            )
            .expect("assemble");
            let bytes = render(&plan).expect("render");
            assert!(bytes.starts_with(b"%PDF-"), "{kind}/{sector}");
        }
    }
}

#[test]
fn test_sample_plan_has_no_team_section_entries() {
    let plan = sample_plan(TemplateStore::get(CatalogKind::Compliance)).unwrap();
    let doc = layout(&plan, &RenderOptions::default());

    assert_eq!(doc.headings().last(), Some(&"5. Resource Allocation"));
    assert!(render(&plan).is_ok());
}

#[test]
fn test_a4_pages() {
    let options = RenderOptions {
        page_size: PageSize::A4,
        ..RenderOptions::default()
    };
    let a4 = PdfRenderer::new(options).render(&acme_plan()).unwrap();
    let letter = PdfRenderer::default().render(&acme_plan()).unwrap();
    assert!(a4.starts_with(b"%PDF-"));
    assert_ne!(a4, letter);
}

#[test]
fn test_markdown_preview() {
    let bytes = MarkdownRenderer::default().render(&acme_plan()).unwrap();
    let md = String::from_utf8(bytes).unwrap();

    assert!(md.starts_with("# Financial Audit Plan\n# Acme Corp\n"));
    assert!(md.contains("| Team Size: | 10 |"));
    assert!(md.contains("#### Medium Risk Areas:"));
    assert!(md.contains("- Carol\n"));

    let objectives = md.find("## 2. Audit Objectives").unwrap();
    let scope = md.find("## 3. Audit Scope").unwrap();
    let risks = md.find("## 4. Risk Assessment").unwrap();
    assert!(objectives < scope && scope < risks);
}

#[test]
fn test_renderer_for_markdown_matches_direct() {
    let plan = acme_plan();
    let boxed = renderer_for(ReportFormat::Markdown, RenderOptions::default());
    assert_eq!(
        boxed.render(&plan).unwrap(),
        MarkdownRenderer::default().render(&plan).unwrap()
    );
}
