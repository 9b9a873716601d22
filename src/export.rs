//! The export orchestrator: picks a filename, runs the matching backend, and
//! hands back the tree. It performs no I/O; encoding and delivery are the
//! caller's business (see [`crate::encode`] and [`crate::delivery`]).

use crate::encode::DocumentEncoder;
use crate::error::ExportError;
use crate::filename::sanitize;
use folio_render_core::RenderConfig;
use folio_render_flow::{FlowDocument, FlowRenderer};
use folio_render_page::{PageDocument, PageRenderer};
use folio_types::LessonPlan;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// Which backend an export goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportTarget {
    /// Word-processor document.
    Flow,
    /// Print document.
    Page,
}

impl ExportTarget {
    pub const ALL: [ExportTarget; 2] = [ExportTarget::Flow, ExportTarget::Page];

    /// File extension of the default encoder for this target.
    pub fn extension(self) -> &'static str {
        match self {
            ExportTarget::Flow => "docx",
            ExportTarget::Page => "pdf",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "backend", content = "document", rename_all = "lowercase")]
pub enum RenderedTree {
    Flow(FlowDocument),
    Page(PageDocument),
}

impl RenderedTree {
    pub fn target(&self) -> ExportTarget {
        match self {
            RenderedTree::Flow(_) => ExportTarget::Flow,
            RenderedTree::Page(_) => ExportTarget::Page,
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            RenderedTree::Flow(_) => "flow",
            RenderedTree::Page(_) => "page",
        }
    }

    /// Number of forced breaks between batched plans.
    pub fn break_count(&self) -> usize {
        match self {
            RenderedTree::Flow(doc) => doc.break_count(),
            RenderedTree::Page(doc) => doc.break_count(),
        }
    }

    pub fn as_flow(&self) -> Option<&FlowDocument> {
        match self {
            RenderedTree::Flow(doc) => Some(doc),
            RenderedTree::Page(_) => None,
        }
    }

    pub fn as_page(&self) -> Option<&PageDocument> {
        match self {
            RenderedTree::Page(doc) => Some(doc),
            RenderedTree::Flow(_) => None,
        }
    }
}

/// A rendered tree together with its filename base (no extension).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Export {
    pub tree: RenderedTree,
    pub filename: String,
}

impl Export {
    /// `"{filename}.{extension}"`.
    pub fn file_name_with(&self, extension: &str) -> String {
        format!("{}.{}", self.filename, extension)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Exporter {
    flow: FlowRenderer,
    page: PageRenderer,
}

impl Exporter {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            flow: FlowRenderer::new(config.clone()),
            page: PageRenderer::new(config),
        }
    }

    /// Renders one plan. The filename is the sanitized title, prefixed with
    /// `slo_id` when given.
    pub fn export(&self, plan: &LessonPlan, target: ExportTarget, slo_id: Option<&str>) -> Export {
        let filename = sanitize(&plan.title, slo_id);
        log::info!("Exporting '{}' as {:?}", filename, target);
        let tree = match target {
            ExportTarget::Flow => RenderedTree::Flow(self.flow.render(plan)),
            ExportTarget::Page => RenderedTree::Page(self.page.render(plan)),
        };
        Export { tree, filename }
    }

    /// Renders `plans`, in order, into one document with a forced break
    /// between consecutive plans.
    pub fn export_batch(
        &self,
        plans: &[LessonPlan],
        target: ExportTarget,
        base_name: &str,
    ) -> Result<Export, ExportError> {
        if plans.is_empty() {
            return Err(ExportError::EmptyBatch);
        }
        let filename = sanitize(base_name, None);
        log::info!(
            "Exporting batch '{}' of {} plan(s) as {:?}",
            filename,
            plans.len(),
            target
        );
        let tree = match target {
            ExportTarget::Flow => RenderedTree::Flow(self.flow.render_batch(plans)),
            ExportTarget::Page => RenderedTree::Page(self.page.render_batch(plans)),
        };
        Ok(Export { tree, filename })
    }

    /// Serializes an export to bytes, attributing failures to its filename.
    pub fn encode<E: DocumentEncoder>(
        &self,
        export: &Export,
        encoder: &E,
    ) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Cursor::new(Vec::new());
        encoder
            .encode(&export.tree, &mut buffer)
            .map_err(|source| ExportError::EncodingFailure {
                filename: export.file_name_with(encoder.extension()),
                source,
            })?;
        let bytes = buffer.into_inner();
        log::debug!(
            "Encoded '{}' ({} bytes)",
            export.file_name_with(encoder.extension()),
            bytes.len()
        );
        Ok(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::Activity;

    fn plan(title: &str) -> LessonPlan {
        LessonPlan {
            title: title.to_string(),
            grade_level: "4 Primary".to_string(),
            activities: vec![Activity::new("Read", 10, "Chapter one")],
            ..Default::default()
        }
    }

    #[test]
    fn test_export_names_and_routes() {
        let exporter = Exporter::default();
        let export = exporter.export(&plan("My Title!"), ExportTarget::Flow, Some("SLO-1"));
        assert_eq!(export.filename, "SLO-1_My_Title_");
        assert_eq!(export.tree.target(), ExportTarget::Flow);
        assert!(export.tree.as_flow().is_some());
        assert_eq!(export.file_name_with("docx"), "SLO-1_My_Title_.docx");

        let export = exporter.export(&plan("Rocks"), ExportTarget::Page, None);
        assert_eq!(export.filename, "Rocks");
        assert!(export.tree.as_page().is_some());
    }

    #[test]
    fn test_batch_uses_sanitized_base_name() {
        let exporter = Exporter::default();
        let export = exporter
            .export_batch(&[plan("A"), plan("B")], ExportTarget::Page, "Unit 3 plans")
            .unwrap();
        assert_eq!(export.filename, "Unit_3_plans");
        assert_eq!(export.tree.break_count(), 1);
    }

    #[test]
    fn test_empty_batch_is_rejected() {
        let exporter = Exporter::default();
        assert!(matches!(
            exporter.export_batch(&[], ExportTarget::Flow, "none"),
            Err(ExportError::EmptyBatch)
        ));
    }

    #[test]
    fn test_extensions() {
        assert_eq!(ExportTarget::Flow.extension(), "docx");
        assert_eq!(ExportTarget::Page.extension(), "pdf");
    }
}
