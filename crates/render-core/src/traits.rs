use crate::config::RenderConfig;
use crate::header::HeaderFields;
use crate::sections::Section;
use folio_markup::Span;

/// The blocks rendered for one lesson plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment<B> {
    /// True for every fragment of a batch except the first.
    pub break_before: bool,
    pub blocks: Vec<B>,
}

/// A document backend: lowers the semantic pieces of a lesson plan into its
/// own block type, and assembles rendered fragments into a document.
///
/// Section order, tokenization and break placement are decided by
/// [`render_plan`](crate::render_plan) and [`render_batch`](crate::render_batch);
/// implementations only decide how each piece looks.
pub trait RendersSections {
    type Block;
    type Document;

    fn config(&self) -> &RenderConfig;

    /// The header table carrying all nine header fields.
    fn header(&self, fields: &HeaderFields) -> Vec<Self::Block>;

    fn section_heading(&self, section: Section) -> Self::Block;

    /// A body paragraph of styled text.
    fn rich_text(&self, spans: &[Span]) -> Self::Block;

    /// A bulleted list, one item per entry. Never called with no items.
    fn bullet_list(&self, items: &[Vec<Span>]) -> Vec<Self::Block>;

    /// A single unstyled line shown in place of empty content.
    fn placeholder(&self, text: &str) -> Self::Block;

    /// The bold `NAME (n mins)` line above an activity description.
    fn activity_heading(&self, line: &str) -> Self::Block;

    /// Joins rendered fragments into one document, honoring
    /// [`Fragment::break_before`].
    fn assemble(&self, fragments: Vec<Fragment<Self::Block>>) -> Self::Document;
}
