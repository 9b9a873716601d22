//! The flow document tree.
//!
//! Sizes follow word-processor conventions: font sizes in half-points,
//! spacing and margins in twentieths of a point (twips), border widths in
//! eighths of a point.

use folio_style::{Margins, TextAlign};
use folio_types::Color;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct FlowDocument {
    pub sections: Vec<FlowSection>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FlowSection {
    pub properties: SectionProperties,
    pub children: Vec<FlowBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionProperties {
    /// Page margins in twips.
    pub page_margins: Margins,
    /// Start this section on a new page.
    pub break_before: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FlowBlock {
    Paragraph(Paragraph),
    Table(Table),
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Paragraph {
    pub runs: Vec<Run>,
    pub alignment: TextAlign,
    pub spacing: Spacing,
    /// Bullet nesting level; `None` for ordinary paragraphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom_border: Option<BorderLine>,
}

impl Paragraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Paragraph spacing in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct Spacing {
    pub before: u32,
    pub after: u32,
}

impl Spacing {
    pub fn after(after: u32) -> Self {
        Self { before: 0, after }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italics: bool,
    pub font: String,
    /// Size in half-points.
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    pub width_percent: u8,
    pub column_count: u32,
    pub rows: Vec<TableRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableCell {
    pub children: Vec<Paragraph>,
    pub column_span: u32,
    pub vertical_align: VerticalAlign,
    pub borders: CellBorders,
}

impl TableCell {
    pub fn text(&self) -> String {
        self.children
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct CellBorders {
    pub top: BorderLine,
    pub bottom: BorderLine,
    pub left: BorderLine,
    pub right: BorderLine,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    #[default]
    None,
    Single,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct BorderLine {
    pub style: BorderStyle,
    /// Width in eighths of a point.
    pub size: u32,
    /// Gap between text and line, in points.
    pub space: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl BorderLine {
    pub fn single(size: u32) -> Self {
        Self {
            style: BorderStyle::Single,
            size,
            space: 0,
            color: None,
        }
    }
}

impl FlowDocument {
    /// Number of sections that start with a forced page break.
    pub fn break_count(&self) -> usize {
        self.sections
            .iter()
            .filter(|s| s.properties.break_before)
            .count()
    }

    /// All top-level paragraphs, in document order, skipping tables.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.sections
            .iter()
            .flat_map(|s| s.children.iter())
            .filter_map(|block| match block {
                FlowBlock::Paragraph(p) => Some(p),
                FlowBlock::Table(_) => None,
            })
    }

    /// Text of every section heading (paragraphs with a bottom rule).
    pub fn section_titles(&self) -> Vec<String> {
        self.paragraphs()
            .filter(|p| p.bottom_border.is_some())
            .map(Paragraph::text)
            .collect()
    }
}
