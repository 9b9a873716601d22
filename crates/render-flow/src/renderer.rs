use crate::tree::{
    BorderLine, CellBorders, FlowBlock, FlowDocument, FlowSection, Paragraph, Run,
    SectionProperties, Spacing, Table, TableCell, TableRow, VerticalAlign,
};
use folio_markup::Span;
use folio_render_core::{
    Fragment, HeaderFields, LabeledField, RenderConfig, RendersSections, Section, render_batch,
    render_plan,
};
use folio_style::{InlineStyle, Margins, TextAlign, TextScale};
use folio_types::LessonPlan;

/// Presentation constants of the flow backend. None of these carry meaning;
/// they only decide how the document looks.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowTheme {
    pub body_font: String,
    pub math_font: String,
    /// Half-points.
    pub body_size: u32,
    pub display_math_size: u32,
    pub heading_size: u32,
    pub header_size: u32,
    pub product_title_size: u32,
    /// Twips on every side.
    pub page_margin: f32,
}

impl Default for FlowTheme {
    fn default() -> Self {
        Self {
            body_font: "Calibri".to_string(),
            math_font: "Cambria Math".to_string(),
            body_size: 22,
            display_math_size: 24,
            heading_size: 28,
            header_size: 24,
            product_title_size: 36,
            page_margin: 567.0,
        }
    }
}

/// Renders lesson plans into [`FlowDocument`]s.
#[derive(Debug, Clone, Default)]
pub struct FlowRenderer {
    config: RenderConfig,
    theme: FlowTheme,
}

impl FlowRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            theme: FlowTheme::default(),
        }
    }

    pub fn with_theme(mut self, theme: FlowTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn render(&self, plan: &LessonPlan) -> FlowDocument {
        render_plan(self, plan)
    }

    pub fn render_batch(&self, plans: &[LessonPlan]) -> FlowDocument {
        render_batch(self, plans)
    }

    /// Lowers one span. `force_bold` is used by header rows, which are bold throughout.
    fn run(&self, span: &Span, size: u32, force_bold: bool) -> Run {
        let style = InlineStyle::for_span(span.style);
        let size = match style.scale {
            TextScale::Display => {
                size + self
                    .theme
                    .display_math_size
                    .saturating_sub(self.theme.body_size)
            }
            TextScale::Body => size,
        };
        Run {
            text: span.text.clone(),
            bold: style.is_bold() || force_bold,
            italics: style.style.is_italic(),
            font: if style.is_math() {
                self.theme.math_font.clone()
            } else {
                self.theme.body_font.clone()
            },
            size,
            color: None,
        }
    }

    fn text_run(&self, text: &str, bold: bool, size: u32) -> Run {
        Run {
            text: text.to_string(),
            bold,
            italics: false,
            font: self.theme.body_font.clone(),
            size,
            color: None,
        }
    }

    fn runs(&self, spans: &[Span], size: u32, force_bold: bool) -> Vec<Run> {
        spans
            .iter()
            .map(|span| self.run(span, size, force_bold))
            .collect()
    }

    fn field_paragraph(&self, field: &LabeledField, bold: bool) -> Paragraph {
        let size = self.theme.header_size;
        let mut runs = vec![self.text_run(&field.prefix(), bold, size)];
        runs.extend(self.runs(&field.value, size, bold));
        Paragraph {
            runs,
            ..Default::default()
        }
    }

    fn wide_cell(&self, children: Vec<Paragraph>, borders: CellBorders) -> TableCell {
        TableCell {
            children,
            column_span: 4,
            vertical_align: VerticalAlign::Center,
            borders,
        }
    }
}

impl RendersSections for FlowRenderer {
    type Block = FlowBlock;
    type Document = FlowDocument;

    fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn header(&self, fields: &HeaderFields) -> Vec<FlowBlock> {
        let title_cell = TableCell {
            children: vec![
                Paragraph {
                    runs: vec![self.text_run(&fields.institution, true, self.theme.header_size)],
                    alignment: TextAlign::Center,
                    ..Default::default()
                },
                Paragraph {
                    runs: vec![self.text_run(
                        &fields.product_title,
                        true,
                        self.theme.product_title_size,
                    )],
                    alignment: TextAlign::Center,
                    spacing: Spacing::after(50),
                    ..Default::default()
                },
            ],
            column_span: 4,
            vertical_align: VerticalAlign::Top,
            borders: CellBorders {
                top: BorderLine::single(12),
                bottom: BorderLine::single(12),
                ..Default::default()
            },
        };

        let info_row = TableRow {
            cells: fields
                .row_fields()
                .iter()
                .map(|field| TableCell {
                    children: vec![self.field_paragraph(field, true)],
                    column_span: 1,
                    vertical_align: VerticalAlign::Center,
                    borders: CellBorders::default(),
                })
                .collect(),
        };

        let top_rule = |size| CellBorders {
            top: BorderLine::single(size),
            ..Default::default()
        };

        let teacher_paragraph = self.field_paragraph(&fields.teacher, false);

        let table = Table {
            width_percent: 100,
            column_count: 4,
            rows: vec![
                TableRow {
                    cells: vec![title_cell],
                },
                info_row,
                TableRow {
                    cells: vec![self.wide_cell(
                        vec![self.field_paragraph(&fields.topic, false)],
                        top_rule(6),
                    )],
                },
                TableRow {
                    cells: vec![self.wide_cell(
                        vec![self.field_paragraph(&fields.objective, false)],
                        top_rule(2),
                    )],
                },
                TableRow {
                    cells: vec![self.wide_cell(
                        vec![teacher_paragraph],
                        CellBorders {
                            top: BorderLine::single(2),
                            bottom: BorderLine::single(12),
                            ..Default::default()
                        },
                    )],
                },
            ],
        };
        vec![FlowBlock::Table(table)]
    }

    fn section_heading(&self, section: Section) -> FlowBlock {
        let mut run = self.text_run(section.title(), true, self.theme.heading_size);
        run.color = Some(self.config.heading_color);
        FlowBlock::Paragraph(Paragraph {
            runs: vec![run],
            alignment: TextAlign::Left,
            spacing: Spacing {
                before: 300,
                after: 100,
            },
            bullet_level: None,
            bottom_border: Some(BorderLine {
                space: 4,
                color: Some(self.config.heading_color),
                ..BorderLine::single(6)
            }),
        })
    }

    fn rich_text(&self, spans: &[Span]) -> FlowBlock {
        FlowBlock::Paragraph(Paragraph {
            runs: self.runs(spans, self.theme.body_size, false),
            alignment: TextAlign::Justify,
            spacing: Spacing::after(100),
            ..Default::default()
        })
    }

    fn bullet_list(&self, items: &[Vec<Span>]) -> Vec<FlowBlock> {
        items
            .iter()
            .map(|spans| {
                FlowBlock::Paragraph(Paragraph {
                    runs: self.runs(spans, self.theme.body_size, false),
                    spacing: Spacing::after(50),
                    bullet_level: Some(0),
                    ..Default::default()
                })
            })
            .collect()
    }

    fn placeholder(&self, text: &str) -> FlowBlock {
        self.rich_text(&[Span::plain(text)])
    }

    fn activity_heading(&self, line: &str) -> FlowBlock {
        FlowBlock::Paragraph(Paragraph {
            runs: vec![self.text_run(line, true, self.theme.header_size)],
            spacing: Spacing {
                before: 200,
                after: 100,
            },
            ..Default::default()
        })
    }

    fn assemble(&self, fragments: Vec<Fragment<FlowBlock>>) -> FlowDocument {
        let sections: Vec<_> = fragments
            .into_iter()
            .map(|fragment| FlowSection {
                properties: SectionProperties {
                    page_margins: Margins::all(self.theme.page_margin),
                    break_before: fragment.break_before,
                },
                children: fragment.blocks,
            })
            .collect();
        log::debug!("Assembled flow document with {} section(s)", sections.len());
        FlowDocument { sections }
    }
}

/// Renders one plan with the default theme.
pub fn render_flow(plan: &LessonPlan, config: &RenderConfig) -> FlowDocument {
    FlowRenderer::new(config.clone()).render(plan)
}

/// Renders several plans into one document, one section per plan.
pub fn render_flow_batch(plans: &[LessonPlan], config: &RenderConfig) -> FlowDocument {
    FlowRenderer::new(config.clone()).render_batch(plans)
}
