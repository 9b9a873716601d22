//! The page document tree. All sizes are in points.

use folio_style::{Margins, TextAlign};
use folio_types::Color;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDocument {
    pub page_margins: Margins,
    pub content: Vec<PageBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageBlock {
    Table(PageTable),
    Text(TextBlock),
    List(ListBlock),
    /// Content after this block starts on a fresh page.
    PageBreak,
}

/// Named block styles, resolved through [`BlockStyle::attributes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockStyle {
    HeaderTableTitle,
    HeaderTableBody,
    SectionHeader,
    ActivityHeading,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleAttributes {
    pub font_size: f32,
    pub bold: bool,
    pub alignment: TextAlign,
    pub margin: Margins,
    pub color: Color,
    pub underline: bool,
    pub line_height: f32,
}

impl BlockStyle {
    pub fn attributes(self) -> StyleAttributes {
        let base = StyleAttributes {
            font_size: 10.0,
            bold: false,
            alignment: TextAlign::Left,
            margin: Margins::default(),
            color: Color::BLACK,
            underline: false,
            line_height: 1.2,
        };
        match self {
            BlockStyle::HeaderTableTitle => StyleAttributes {
                font_size: 14.0,
                bold: true,
                alignment: TextAlign::Center,
                margin: Margins::vertical(2.0, 2.0),
                line_height: 1.0,
                ..base
            },
            BlockStyle::HeaderTableBody => StyleAttributes {
                font_size: 9.0,
                line_height: 1.0,
                ..base
            },
            BlockStyle::SectionHeader => StyleAttributes {
                font_size: 12.0,
                bold: true,
                margin: Margins::vertical(15.0, 5.0),
                color: Color::HEADING_BLUE,
                underline: true,
                line_height: 1.0,
                ..base
            },
            BlockStyle::ActivityHeading => StyleAttributes {
                bold: true,
                margin: Margins::vertical(8.0, 4.0),
                line_height: 1.0,
                ..base
            },
            BlockStyle::Body => StyleAttributes {
                alignment: TextAlign::Justify,
                ..base
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextBlock {
    pub fragments: Vec<TextFragment>,
    pub style: BlockStyle,
    /// Overrides the block style's color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl TextBlock {
    pub fn new(style: BlockStyle, fragments: Vec<TextFragment>) -> Self {
        Self {
            fragments,
            style,
            color: None,
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextFragment {
    pub text: String,
    pub bold: bool,
    pub italics: bool,
    /// Overrides the block style's size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
}

impl TextFragment {
    pub fn unstyled(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italics: false,
            font_size: None,
        }
    }
}

/// An unordered (bulleted) list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListBlock {
    pub items: Vec<TextBlock>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TableLayout {
    /// Thin rules between rows, no vertical rules.
    LightHorizontalLines,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTable {
    pub layout: TableLayout,
    /// Number of equal-width columns.
    pub columns: u32,
    pub body: Vec<Vec<PageCell>>,
    pub margin: Margins,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageCell {
    pub content: TextBlock,
    pub col_span: u32,
}

impl PageDocument {
    pub fn break_count(&self) -> usize {
        self.content
            .iter()
            .filter(|b| matches!(b, PageBlock::PageBreak))
            .count()
    }

    /// Top-level text blocks, in order.
    pub fn text_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.content.iter().filter_map(|block| match block {
            PageBlock::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn section_titles(&self) -> Vec<String> {
        self.text_blocks()
            .filter(|t| t.style == BlockStyle::SectionHeader)
            .map(TextBlock::text)
            .collect()
    }
}
