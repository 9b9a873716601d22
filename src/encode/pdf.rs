// src/encode/pdf.rs

use super::DocumentEncoder;
use crate::error::EncodeError;
use crate::export::RenderedTree;
use folio_render_page::{
    ListBlock, PageBlock, PageDocument, PageTable, StyleAttributes, TextBlock, TextFragment,
};
use folio_style::{Margins, TextAlign};
use folio_types::Color;
use lopdf::content::{Content, Operation};
use lopdf::{Dictionary, Document, Object, Stream, dictionary};
use std::io::{Seek, Write};

/// Share of the font size above the baseline.
const ASCENT: f32 = 0.8;
const BULLET: &str = "\u{2022}";
const RULE_GRAY: Color = Color::rgb(0xAA, 0xAA, 0xAA);

/// Lays page trees out top-down with the standard Helvetica faces and writes
/// them as PDF.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfEncoder {
    pub page_width: f32,
    pub page_height: f32,
    pub cell_padding: f32,
    pub list_indent: f32,
}

impl Default for PdfEncoder {
    /// A4 portrait.
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            cell_padding: 3.0,
            list_indent: 12.0,
        }
    }
}

impl DocumentEncoder for PdfEncoder {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn encode<W: Write + Seek>(
        &self,
        tree: &RenderedTree,
        writer: &mut W,
    ) -> Result<(), EncodeError> {
        let RenderedTree::Page(doc) = tree else {
            return Err(EncodeError::UnsupportedTree {
                encoder: "pdf",
                tree: tree.kind(),
            });
        };
        let pages = self.lay_out(doc);
        log::debug!("Laid out {} PDF page(s)", pages.len());
        let mut pdf = self.build_document(pages)?;
        pdf.save_to(writer)?;
        Ok(())
    }
}

impl PdfEncoder {
    fn lay_out(&self, doc: &PageDocument) -> Vec<Content> {
        let mut ctx = PageContext::new(self, doc.page_margins);
        let width = ctx.content_width();
        for block in &doc.content {
            match block {
                PageBlock::Text(text) => ctx.paragraph(text, ctx.margins.left, width, true),
                PageBlock::List(list) => ctx.list(list, width),
                PageBlock::Table(table) => ctx.table(table, width),
                PageBlock::PageBreak => ctx.new_page(),
            }
        }
        ctx.finish()
    }

    fn build_document(&self, pages: Vec<Content>) -> Result<Document, EncodeError> {
        let mut document = Document::with_version("1.7");
        let pages_id = document.new_object_id();

        let mut fonts = Dictionary::new();
        for face in Face::ALL {
            let font_id = document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.base_font(),
                "Encoding" => "WinAnsiEncoding",
            });
            fonts.set(face.resource_name(), font_id);
        }
        let resources_id = document.add_object(dictionary! { "Font" => fonts });

        let mut kids = Vec::with_capacity(pages.len());
        for content in pages {
            let content_id = document.add_object(Stream::new(Dictionary::new(), content.encode()?));
            let page_id = document.add_object(dictionary! {
                "Type" => "Page",
                "Parent" => pages_id,
                "MediaBox" => vec![0.into(), 0.into(), self.page_width.into(), self.page_height.into()],
                "Contents" => content_id,
                "Resources" => resources_id,
            });
            kids.push(Object::from(page_id));
        }

        let count = kids.len() as i64;
        document.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => kids,
                "Count" => count,
            }),
        );
        let catalog_id = document.add_object(dictionary! { "Type" => "Catalog", "Pages" => pages_id });
        document.trailer.set("Root", catalog_id);
        Ok(document)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Face {
    Regular,
    Bold,
    Oblique,
    BoldOblique,
}

impl Face {
    const ALL: [Face; 4] = [Face::Regular, Face::Bold, Face::Oblique, Face::BoldOblique];

    fn of(bold: bool, italic: bool) -> Self {
        match (bold, italic) {
            (false, false) => Face::Regular,
            (true, false) => Face::Bold,
            (false, true) => Face::Oblique,
            (true, true) => Face::BoldOblique,
        }
    }

    fn resource_name(self) -> &'static str {
        match self {
            Face::Regular => "F1",
            Face::Bold => "F2",
            Face::Oblique => "F3",
            Face::BoldOblique => "F4",
        }
    }

    fn base_font(self) -> &'static str {
        match self {
            Face::Regular => "Helvetica",
            Face::Bold => "Helvetica-Bold",
            Face::Oblique => "Helvetica-Oblique",
            Face::BoldOblique => "Helvetica-BoldOblique",
        }
    }

    /// Average glyph advance as a share of the font size.
    fn average_advance(self) -> f32 {
        match self {
            Face::Regular | Face::Oblique => 0.5,
            Face::Bold | Face::BoldOblique => 0.55,
        }
    }
}

fn text_width(text: &str, size: f32, face: Face) -> f32 {
    text.chars().count() as f32 * size * face.average_advance()
}

/// Maps text onto the WinAnsi code page of the standard fonts. Characters
/// outside it become `?`.
fn win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2026}' => 0x85,
            '\u{20AC}' => 0x80,
            c if (c as u32) < 0x80 || (0xA0..=0xFF).contains(&(c as u32)) => c as u8,
            _ => b'?',
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
struct Piece {
    text: String,
    face: Face,
    size: f32,
    width: f32,
}

#[derive(Debug, Clone, PartialEq, Default)]
struct Line {
    pieces: Vec<Piece>,
    width: f32,
}

impl Line {
    fn push(&mut self, piece: Piece) {
        self.width += piece.width;
        match self.pieces.last_mut() {
            Some(last) if last.face == piece.face && last.size == piece.size => {
                last.text.push_str(&piece.text);
                last.width += piece.width;
            }
            _ => self.pieces.push(piece),
        }
    }

    /// Width without trailing whitespace.
    fn visible_width(&self) -> f32 {
        match self.pieces.last() {
            Some(last) => {
                let trailing = &last.text[last.text.trim_end().len()..];
                self.width - text_width(trailing, last.size, last.face)
            }
            None => 0.0,
        }
    }

    fn size(&self, fallback: f32) -> f32 {
        self.pieces.iter().map(|p| p.size).fold(fallback, f32::max)
    }

    #[cfg(test)]
    fn text(&self) -> String {
        self.pieces.iter().map(|p| p.text.as_str()).collect()
    }
}

/// Greedy word wrap. `\n` forces a line break; a word wider than the whole
/// line is left to overflow.
fn wrap(fragments: &[TextFragment], attrs: &StyleAttributes, max_width: f32) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut line = Line::default();

    for fragment in fragments {
        let face = Face::of(attrs.bold || fragment.bold, fragment.italics);
        let size = fragment.font_size.unwrap_or(attrs.font_size);
        for (i, segment) in fragment.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(std::mem::take(&mut line));
            }
            for word in segment.split_inclusive(' ') {
                if line.pieces.is_empty() && word.trim().is_empty() && !lines.is_empty() {
                    continue;
                }
                let visible = text_width(word.trim_end(), size, face);
                if !line.pieces.is_empty() && line.width + visible > max_width {
                    lines.push(std::mem::take(&mut line));
                    if word.trim().is_empty() {
                        continue;
                    }
                }
                line.push(Piece {
                    text: word.to_string(),
                    face,
                    size,
                    width: text_width(word, size, face),
                });
            }
        }
    }
    if !line.pieces.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

fn measure(block: &TextBlock, width: f32) -> f32 {
    let attrs = block.style.attributes();
    let lines: f32 = wrap(&block.fragments, &attrs, width)
        .iter()
        .map(|line| line.size(attrs.font_size) * attrs.line_height)
        .sum();
    attrs.margin.top + lines + attrs.margin.bottom
}

fn color_operands(color: Color) -> Vec<Object> {
    color.to_unit_rgb().iter().map(|&c| c.into()).collect()
}

struct PageContext<'a> {
    encoder: &'a PdfEncoder,
    margins: Margins,
    pages: Vec<Content>,
    content: Content,
    /// Distance from the top edge of the page.
    cursor: f32,
    dirty: bool,
}

impl<'a> PageContext<'a> {
    fn new(encoder: &'a PdfEncoder, margins: Margins) -> Self {
        Self {
            encoder,
            margins,
            pages: Vec::new(),
            content: Content { operations: vec![] },
            cursor: margins.top,
            dirty: false,
        }
    }

    fn content_width(&self) -> f32 {
        self.encoder.page_width - self.margins.horizontal()
    }

    fn finish(mut self) -> Vec<Content> {
        self.flush_page();
        self.pages
    }

    fn flush_page(&mut self) {
        let content = std::mem::replace(&mut self.content, Content { operations: vec![] });
        self.pages.push(content);
        self.cursor = self.margins.top;
        self.dirty = false;
    }

    fn new_page(&mut self) {
        self.flush_page();
    }

    /// Starts a new page unless `height` still fits on this one. An empty
    /// page always accepts content, however tall.
    fn ensure_room(&mut self, height: f32) {
        let bottom = self.encoder.page_height - self.margins.bottom;
        if self.dirty && self.cursor + height > bottom {
            self.new_page();
        }
    }

    fn flip_y(&self, y: f32) -> f32 {
        self.encoder.page_height - y
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content
            .operations
            .push(Operation::new(operator, operands));
        self.dirty = true;
    }

    fn draw_text(&mut self, text: &str, face: Face, size: f32, x: f32, baseline: f32) {
        let y = self.flip_y(baseline);
        self.push("BT", vec![]);
        self.push("Tf", vec![face.resource_name().into(), size.into()]);
        self.push("Td", vec![x.into(), y.into()]);
        self.push("Tj", vec![Object::string_literal(win_ansi(text))]);
        self.push("ET", vec![]);
    }

    fn draw_rule(&mut self, x1: f32, x2: f32, y: f32, width: f32, color: Color) {
        let y = self.flip_y(y);
        self.push("w", vec![width.into()]);
        self.push("RG", color_operands(color));
        self.push("m", vec![x1.into(), y.into()]);
        self.push("l", vec![x2.into(), y.into()]);
        self.push("S", vec![]);
    }

    /// Draws a text block at the cursor and advances it. With `paginate`
    /// each line may move to a new page.
    fn paragraph(&mut self, block: &TextBlock, x: f32, width: f32, paginate: bool) {
        let lines = wrap(&block.fragments, &block.style.attributes(), width);
        self.paragraph_lines(block, &lines, x, width, paginate);
    }

    fn paragraph_lines(
        &mut self,
        block: &TextBlock,
        lines: &[Line],
        x: f32,
        width: f32,
        paginate: bool,
    ) {
        let attrs = block.style.attributes();
        let color = block.color.unwrap_or(attrs.color);
        self.cursor += attrs.margin.top;

        for line in lines {
            let size = line.size(attrs.font_size);
            let height = size * attrs.line_height;
            if paginate {
                self.ensure_room(height);
            }
            let baseline = self.cursor + size * ASCENT;
            let visible = line.visible_width();
            let offset = match attrs.alignment {
                TextAlign::Center => ((width - visible) / 2.0).max(0.0),
                TextAlign::Right => (width - visible).max(0.0),
                // Justified text is set flush left.
                TextAlign::Left | TextAlign::Justify => 0.0,
            };

            self.push("rg", color_operands(color));
            let mut pen = x + offset;
            for piece in &line.pieces {
                self.draw_text(&piece.text, piece.face, piece.size, pen, baseline);
                pen += piece.width;
            }
            if attrs.underline && !line.pieces.is_empty() {
                self.draw_rule(x + offset, x + offset + visible, baseline + 1.5, 0.5, color);
            }
            self.cursor += height;
        }

        self.cursor += attrs.margin.bottom;
    }

    fn list(&mut self, list: &ListBlock, width: f32) {
        let indent = self.encoder.list_indent;
        let x = self.margins.left;
        for item in &list.items {
            let attrs = item.style.attributes();
            let lines = wrap(&item.fragments, &attrs, width - indent);
            // The bullet shares its page and baseline with the first line.
            let first = lines.first().map_or(attrs.font_size, |l| l.size(attrs.font_size));
            self.ensure_room(attrs.margin.top + first * attrs.line_height);
            let baseline = self.cursor + attrs.margin.top + first * ASCENT;
            self.push("rg", color_operands(item.color.unwrap_or(attrs.color)));
            self.draw_text(BULLET, Face::Regular, attrs.font_size, x, baseline);
            self.paragraph_lines(item, &lines, x + indent, width - indent, true);
        }
    }

    fn table(&mut self, table: &PageTable, width: f32) {
        let padding = self.encoder.cell_padding;
        let column_width = width / table.columns.max(1) as f32;
        let x0 = self.margins.left;

        self.cursor += table.margin.top;
        let last = table.body.len().saturating_sub(1);
        for (index, row) in table.body.iter().enumerate() {
            let heights: Vec<f32> = row
                .iter()
                .map(|cell| {
                    let inner = column_width * cell.col_span.max(1) as f32 - 2.0 * padding;
                    measure(&cell.content, inner)
                })
                .collect();
            let row_height = heights.iter().copied().fold(0.0, f32::max) + 2.0 * padding;
            self.ensure_room(row_height);

            let top = self.cursor;
            let mut column = 0;
            for cell in row {
                let span = cell.col_span.max(1);
                let x = x0 + column as f32 * column_width + padding;
                let inner = column_width * span as f32 - 2.0 * padding;
                self.cursor = top + padding;
                self.paragraph(&cell.content, x, inner, false);
                column += span;
            }
            self.cursor = top + row_height;

            if index < last {
                let color = if index == 0 { Color::BLACK } else { RULE_GRAY };
                self.draw_rule(x0, x0 + width, self.cursor, 0.5, color);
            }
        }
        self.cursor += table.margin.bottom;
    }
}
