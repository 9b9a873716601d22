use crate::tree::{
    BlockStyle, ListBlock, PageBlock, PageCell, PageDocument, PageTable, TableLayout, TextBlock,
    TextFragment,
};
use folio_markup::Span;
use folio_render_core::{
    Fragment, HeaderFields, LabeledField, RenderConfig, RendersSections, Section, render_batch,
    render_plan,
};
use folio_style::{InlineStyle, Margins, TextScale};
use folio_types::LessonPlan;

/// Presentation constants of the page backend, in points.
#[derive(Debug, Clone, PartialEq)]
pub struct PageTheme {
    pub display_math_size: f32,
    pub page_margins: Margins,
    pub header_margin: Margins,
}

impl Default for PageTheme {
    fn default() -> Self {
        Self {
            display_math_size: 12.0,
            page_margins: Margins::symmetric(5.0, 15.0),
            header_margin: Margins::vertical(0.0, 10.0),
        }
    }
}

/// Renders lesson plans into [`PageDocument`]s.
#[derive(Debug, Clone, Default)]
pub struct PageRenderer {
    config: RenderConfig,
    theme: PageTheme,
}

impl PageRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            theme: PageTheme::default(),
        }
    }

    pub fn with_theme(mut self, theme: PageTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn render(&self, plan: &LessonPlan) -> PageDocument {
        render_plan(self, plan)
    }

    pub fn render_batch(&self, plans: &[LessonPlan]) -> PageDocument {
        render_batch(self, plans)
    }

    fn fragment(&self, span: &Span) -> TextFragment {
        let style = InlineStyle::for_span(span.style);
        TextFragment {
            text: span.text.clone(),
            bold: style.is_bold(),
            italics: style.is_slanted(),
            font_size: match style.scale {
                TextScale::Display => Some(self.theme.display_math_size),
                TextScale::Body => None,
            },
        }
    }

    fn fragments(&self, spans: &[Span]) -> Vec<TextFragment> {
        spans.iter().map(|span| self.fragment(span)).collect()
    }

    /// A labeled header cell. The label is always bold; `strong` makes the
    /// value bold as well, otherwise it keeps its own span styles.
    fn field_cell(&self, field: &LabeledField, col_span: u32, strong: bool) -> PageCell {
        let mut fragments = vec![TextFragment {
            bold: true,
            ..TextFragment::unstyled(field.prefix())
        }];
        fragments.extend(self.fragments(&field.value).into_iter().map(|f| TextFragment {
            bold: f.bold || strong,
            ..f
        }));
        PageCell {
            content: TextBlock::new(BlockStyle::HeaderTableBody, fragments),
            col_span,
        }
    }
}

impl RendersSections for PageRenderer {
    type Block = PageBlock;
    type Document = PageDocument;

    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn header(&self, fields: &HeaderFields) -> Vec<PageBlock> {
        let title = PageCell {
            content: TextBlock::new(
                BlockStyle::HeaderTableTitle,
                vec![
                    TextFragment::unstyled(fields.institution.as_str()),
                    TextFragment::unstyled("\n"),
                    TextFragment::unstyled(fields.product_title.as_str()),
                ],
            ),
            col_span: 4,
        };
        let info_row = fields
            .row_fields()
            .iter()
            .map(|field| self.field_cell(field, 1, true))
            .collect();

        vec![PageBlock::Table(PageTable {
            layout: TableLayout::LightHorizontalLines,
            columns: 4,
            body: vec![
                vec![title],
                info_row,
                vec![self.field_cell(&fields.topic, 4, false)],
                vec![self.field_cell(&fields.objective, 4, false)],
                vec![self.field_cell(&fields.teacher, 4, false)],
            ],
            margin: self.theme.header_margin,
        })]
    }

    fn section_heading(&self, section: Section) -> PageBlock {
        PageBlock::Text(
            TextBlock::new(
                BlockStyle::SectionHeader,
                vec![TextFragment::unstyled(section.title())],
            )
            .with_color(self.config.heading_color),
        )
    }

    fn rich_text(&self, spans: &[Span]) -> PageBlock {
        PageBlock::Text(TextBlock::new(BlockStyle::Body, self.fragments(spans)))
    }

    fn bullet_list(&self, items: &[Vec<Span>]) -> Vec<PageBlock> {
        let items = items
            .iter()
            .map(|spans| TextBlock::new(BlockStyle::Body, self.fragments(spans)))
            .collect();
        vec![PageBlock::List(ListBlock { items })]
    }

    fn placeholder(&self, text: &str) -> PageBlock {
        PageBlock::Text(TextBlock::new(
            BlockStyle::Body,
            vec![TextFragment::unstyled(text)],
        ))
    }

    fn activity_heading(&self, line: &str) -> PageBlock {
        PageBlock::Text(TextBlock::new(
            BlockStyle::ActivityHeading,
            vec![TextFragment {
                bold: true,
                ..TextFragment::unstyled(line)
            }],
        ))
    }

    fn assemble(&self, fragments: Vec<Fragment<PageBlock>>) -> PageDocument {
        let mut content = Vec::new();
        for fragment in fragments {
            if fragment.break_before {
                content.push(PageBlock::PageBreak);
            }
            content.extend(fragment.blocks);
        }
        log::debug!("Assembled page document with {} block(s)", content.len());
        PageDocument {
            page_margins: self.theme.page_margins,
            content,
        }
    }
}

/// Renders one plan with the default theme.
pub fn render_page(plan: &LessonPlan, config: &RenderConfig) -> PageDocument {
    PageRenderer::new(config.clone()).render(plan)
}

/// Renders several plans into one document separated by page breaks.
pub fn render_page_batch(plans: &[LessonPlan], config: &RenderConfig) -> PageDocument {
    PageRenderer::new(config.clone()).render_batch(plans)
}
