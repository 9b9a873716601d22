mod common;

use common::TestResult;
use common::fixtures::*;
use folio::{ExportTarget, Exporter, RenderConfig};
use folio_render_flow::render_flow;
use folio_render_page::{PageBlock, render_page};

const PLACEHOLDER: &str = "No materials required.";

#[test]
fn test_flow_empty_materials_yield_single_placeholder() {
    let doc = render_flow(&plan_without_materials("Empty"), &RenderConfig::default());
    let paragraphs: Vec<_> = doc.paragraphs().collect();
    let at = paragraphs
        .iter()
        .position(|p| p.text() == "RESOURCES")
        .unwrap();
    assert_eq!(paragraphs[at + 1].text(), PLACEHOLDER);
    assert!(paragraphs[at + 1].bullet_level.is_none());
    assert_eq!(paragraphs[at + 2].text(), "LESSON PROCEDURE & TIMINGS");
    assert!(paragraphs.iter().all(|p| p.bullet_level.is_none()));
}

#[test]
fn test_page_empty_materials_yield_single_placeholder() {
    let doc = render_page(&plan_without_materials("Empty"), &RenderConfig::default());
    let at = doc
        .content
        .iter()
        .position(|b| matches!(b, PageBlock::Text(t) if t.text() == "RESOURCES"))
        .unwrap();
    match &doc.content[at + 1] {
        PageBlock::Text(t) => assert_eq!(t.text(), PLACEHOLDER),
        other => panic!("expected placeholder text, got {other:?}"),
    }
    assert!(!doc.content.iter().any(|b| matches!(b, PageBlock::List(_))));
}

#[test]
fn test_placeholder_is_configurable() {
    let config = RenderConfig {
        empty_materials: "Nothing needed".to_string(),
        ..RenderConfig::default()
    };
    let doc = render_page(&plan_without_materials("Empty"), &config);
    assert!(doc.text_blocks().any(|t| t.text() == "Nothing needed"));
}

#[test]
fn test_zero_activities_keep_procedure_heading() -> TestResult {
    let plan = folio::LessonPlan {
        activities: vec![],
        ..sample_plan("Quiet day")
    };
    let exporter = Exporter::default();
    for target in ExportTarget::ALL {
        let export = exporter.export(&plan, target, None);
        match target {
            ExportTarget::Flow => {
                let xml = common::encode_docx(&exporter, &export)?.document_xml()?;
                assert_text_contains!(&xml, "LESSON PROCEDURE &amp; TIMINGS");
            }
            ExportTarget::Page => {
                let text = common::encode_pdf(&exporter, &export)?.text()?;
                assert_text_contains!(&text, "LESSON PROCEDURE & TIMINGS");
            }
        }
    }
    Ok(())
}

#[test]
fn test_encoded_documents_show_placeholder() -> TestResult {
    let exporter = Exporter::default();
    let plan = plan_without_materials("Empty");

    let pdf = common::encode_pdf(&exporter, &exporter.export(&plan, ExportTarget::Page, None))?;
    assert_eq!(pdf.text()?.matches(PLACEHOLDER).count(), 1);

    let docx = common::encode_docx(&exporter, &exporter.export(&plan, ExportTarget::Flow, None))?;
    let xml = docx.document_xml()?;
    assert_eq!(xml.matches(PLACEHOLDER).count(), 1);
    assert!(!xml.contains("<w:numPr>"));
    Ok(())
}
