//! Minimal WordprocessingML packaging of a [`FlowDocument`].

use super::DocumentEncoder;
use crate::error::EncodeError;
use crate::export::RenderedTree;
use folio_render_flow::{
    BorderLine, BorderStyle, CellBorders, FlowBlock, FlowDocument, FlowSection, Paragraph, Run,
    Table, TableCell, VerticalAlign,
};
use folio_style::TextAlign;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::{self, Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// A4 in twips.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;

/// Bullet list numbering instance referenced by list paragraphs.
const BULLET_NUM_ID: &str = "1";

const CONTENT_TYPES_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
<Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>
</Types>"#;

const PACKAGE_RELS_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#;

const DOCUMENT_RELS_XML: &[u8] = br#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
</Relationships>"#;

const NUMBERING_XML: &[u8] = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>
<w:numbering xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">
<w:abstractNum w:abstractNumId=\"0\">
<w:multiLevelType w:val=\"singleLevel\"/>
<w:lvl w:ilvl=\"0\"><w:start w:val=\"1\"/><w:numFmt w:val=\"bullet\"/><w:lvlText w:val=\"\u{2022}\"/><w:lvlJc w:val=\"left\"/><w:pPr><w:ind w:left=\"720\" w:hanging=\"360\"/></w:pPr></w:lvl>
</w:abstractNum>
<w:num w:numId=\"1\"><w:abstractNumId w:val=\"0\"/></w:num>
</w:numbering>"
    .as_bytes();

/// Encodes flow trees as `.docx` packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxEncoder;

impl DocumentEncoder for DocxEncoder {
    fn extension(&self) -> &'static str {
        "docx"
    }

    fn encode<W: Write + Seek>(
        &self,
        tree: &RenderedTree,
        writer: &mut W,
    ) -> Result<(), EncodeError> {
        let RenderedTree::Flow(doc) = tree else {
            return Err(EncodeError::UnsupportedTree {
                encoder: "docx",
                tree: tree.kind(),
            });
        };

        let document_xml = document_xml(doc)?;

        let mut zip = ZipWriter::new(writer);
        let deflated = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", deflated)?;
        zip.write_all(CONTENT_TYPES_XML)?;
        zip.start_file("_rels/.rels", deflated)?;
        zip.write_all(PACKAGE_RELS_XML)?;
        zip.start_file("word/_rels/document.xml.rels", deflated)?;
        zip.write_all(DOCUMENT_RELS_XML)?;
        zip.start_file("word/numbering.xml", deflated)?;
        zip.write_all(NUMBERING_XML)?;
        zip.start_file("word/document.xml", deflated)?;
        zip.write_all(&document_xml)?;

        zip.finish()?;
        Ok(())
    }
}

/// Serializes the body part, one `w:sectPr` per flow section.
pub(crate) fn document_xml(doc: &FlowDocument) -> Result<Vec<u8>, EncodeError> {
    let mut xml = WordXml::new();
    xml.writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
    xml.start("w:document", &[("xmlns:w", WORD_NS)])?;
    xml.start("w:body", &[])?;

    let last = doc.sections.len().saturating_sub(1);
    for (index, section) in doc.sections.iter().enumerate() {
        for block in &section.children {
            match block {
                FlowBlock::Paragraph(p) => xml.paragraph(p)?,
                FlowBlock::Table(t) => xml.table(t)?,
            }
        }
        if index < last {
            // A section that is not the last one closes inside an empty paragraph.
            xml.start("w:p", &[])?;
            xml.start("w:pPr", &[])?;
            xml.section_properties(section)?;
            xml.end("w:pPr")?;
            xml.end("w:p")?;
        } else {
            xml.section_properties(section)?;
        }
    }
    if doc.sections.is_empty() {
        xml.empty("w:p", &[])?;
    }

    xml.end("w:body")?;
    xml.end("w:document")?;
    Ok(xml.writer.into_inner())
}

fn alignment_value(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Right => "right",
        TextAlign::Center => "center",
        TextAlign::Justify => "both",
    }
}

struct WordXml {
    writer: Writer<Vec<u8>>,
}

impl WordXml {
    fn new() -> Self {
        Self {
            writer: Writer::new(Vec::new()),
        }
    }

    fn start(&mut self, name: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Start(tag))
    }

    fn end(&mut self, name: &str) -> io::Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attrs: &[(&str, &str)]) -> io::Result<()> {
        let tag = BytesStart::new(name).with_attributes(attrs.iter().copied());
        self.writer.write_event(Event::Empty(tag))
    }

    fn text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_event(Event::Text(BytesText::new(text)))
    }

    fn section_properties(&mut self, section: &FlowSection) -> io::Result<()> {
        let margins = &section.properties.page_margins;
        let [top, right, bottom, left] = [margins.top, margins.right, margins.bottom, margins.left]
            .map(|twips| (twips.round() as i64).to_string());

        self.start("w:sectPr", &[])?;
        if section.properties.break_before {
            self.empty("w:type", &[("w:val", "nextPage")])?;
        }
        self.empty(
            "w:pgSz",
            &[
                ("w:w", PAGE_WIDTH.to_string().as_str()),
                ("w:h", PAGE_HEIGHT.to_string().as_str()),
            ],
        )?;
        self.empty(
            "w:pgMar",
            &[
                ("w:top", top.as_str()),
                ("w:right", right.as_str()),
                ("w:bottom", bottom.as_str()),
                ("w:left", left.as_str()),
                ("w:header", "0"),
                ("w:footer", "0"),
                ("w:gutter", "0"),
            ],
        )?;
        self.end("w:sectPr")
    }

    fn paragraph(&mut self, p: &Paragraph) -> io::Result<()> {
        self.start("w:p", &[])?;
        self.start("w:pPr", &[])?;
        if let Some(level) = p.bullet_level {
            self.start("w:numPr", &[])?;
            self.empty("w:ilvl", &[("w:val", level.to_string().as_str())])?;
            self.empty("w:numId", &[("w:val", BULLET_NUM_ID)])?;
            self.end("w:numPr")?;
        }
        if let Some(border) = &p.bottom_border {
            self.start("w:pBdr", &[])?;
            self.border("w:bottom", border)?;
            self.end("w:pBdr")?;
        }
        self.empty(
            "w:spacing",
            &[
                ("w:before", p.spacing.before.to_string().as_str()),
                ("w:after", p.spacing.after.to_string().as_str()),
            ],
        )?;
        self.empty("w:jc", &[("w:val", alignment_value(p.alignment))])?;
        self.end("w:pPr")?;

        for run in &p.runs {
            self.run(run)?;
        }
        self.end("w:p")
    }

    fn run(&mut self, run: &Run) -> io::Result<()> {
        let size = run.size.to_string();
        self.start("w:r", &[])?;
        self.start("w:rPr", &[])?;
        self.empty(
            "w:rFonts",
            &[
                ("w:ascii", run.font.as_str()),
                ("w:hAnsi", run.font.as_str()),
                ("w:cs", run.font.as_str()),
            ],
        )?;
        if run.bold {
            self.empty("w:b", &[])?;
        }
        if run.italics {
            self.empty("w:i", &[])?;
        }
        if let Some(color) = run.color {
            self.empty("w:color", &[("w:val", color.to_hex().as_str())])?;
        }
        self.empty("w:sz", &[("w:val", size.as_str())])?;
        self.empty("w:szCs", &[("w:val", size.as_str())])?;
        self.end("w:rPr")?;

        for (i, line) in run.text.split('\n').enumerate() {
            if i > 0 {
                self.empty("w:br", &[])?;
            }
            self.start("w:t", &[("xml:space", "preserve")])?;
            self.text(line)?;
            self.end("w:t")?;
        }
        self.end("w:r")
    }

    fn border(&mut self, name: &str, line: &BorderLine) -> io::Result<()> {
        let style = match line.style {
            BorderStyle::None => "nil",
            BorderStyle::Single => "single",
        };
        let color = line.color.map_or_else(|| "auto".to_string(), |c| c.to_hex());
        self.empty(
            name,
            &[
                ("w:val", style),
                ("w:sz", line.size.to_string().as_str()),
                ("w:space", line.space.to_string().as_str()),
                ("w:color", color.as_str()),
            ],
        )
    }

    fn table(&mut self, table: &Table) -> io::Result<()> {
        let columns = table.column_count.max(1);
        let usable = PAGE_WIDTH.saturating_sub(2 * 567);
        let column_width = usable / columns;

        self.start("w:tbl", &[])?;
        self.start("w:tblPr", &[])?;
        self.empty(
            "w:tblW",
            &[
                ("w:w", (u32::from(table.width_percent) * 50).to_string().as_str()),
                ("w:type", "pct"),
            ],
        )?;
        self.empty("w:tblLayout", &[("w:type", "fixed")])?;
        self.end("w:tblPr")?;

        self.start("w:tblGrid", &[])?;
        for _ in 0..columns {
            self.empty("w:gridCol", &[("w:w", column_width.to_string().as_str())])?;
        }
        self.end("w:tblGrid")?;

        for row in &table.rows {
            self.start("w:tr", &[])?;
            for cell in &row.cells {
                self.cell(cell, column_width)?;
            }
            self.end("w:tr")?;
        }
        self.end("w:tbl")
    }

    fn cell(&mut self, cell: &TableCell, column_width: u32) -> io::Result<()> {
        let span = cell.column_span.max(1);
        self.start("w:tc", &[])?;
        self.start("w:tcPr", &[])?;
        self.empty(
            "w:tcW",
            &[
                ("w:w", (column_width * span).to_string().as_str()),
                ("w:type", "dxa"),
            ],
        )?;
        if span > 1 {
            self.empty("w:gridSpan", &[("w:val", span.to_string().as_str())])?;
        }
        self.cell_borders(&cell.borders)?;
        let valign = match cell.vertical_align {
            VerticalAlign::Top => "top",
            VerticalAlign::Center => "center",
        };
        self.empty("w:vAlign", &[("w:val", valign)])?;
        self.end("w:tcPr")?;

        // A cell must hold at least one paragraph.
        if cell.children.is_empty() {
            self.empty("w:p", &[])?;
        }
        for p in &cell.children {
            self.paragraph(p)?;
        }
        self.end("w:tc")
    }

    fn cell_borders(&mut self, borders: &CellBorders) -> io::Result<()> {
        self.start("w:tcBorders", &[])?;
        self.border("w:top", &borders.top)?;
        self.border("w:left", &borders.left)?;
        self.border("w:bottom", &borders.bottom)?;
        self.border("w:right", &borders.right)?;
        self.end("w:tcBorders")
    }
}
