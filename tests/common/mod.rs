pub mod fixtures;

use folio::{DocumentEncoder, DocxEncoder, Export, Exporter, PdfEncoder};
use lopdf::Document as LopdfDocument;
use lopdf::content::Content;
use std::io::{Cursor, Read};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// An encoded PDF, reloaded for inspection.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Concatenated operands of every `Tj` operator, page by page.
    pub fn text(&self) -> Result<String, Box<dyn std::error::Error>> {
        let mut text = String::new();
        for (_, page_id) in self.doc.get_pages() {
            let content = Content::decode(&self.doc.get_page_content(page_id)?)?;
            for op in content.operations.iter().filter(|op| op.operator == "Tj") {
                if let Some(operand) = op.operands.first() {
                    text.push_str(&String::from_utf8_lossy(operand.as_str()?));
                }
            }
            text.push('\n');
        }
        Ok(text)
    }

    /// `BaseFont` names of every font object in the file.
    pub fn font_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .doc
            .objects
            .values()
            .filter_map(|obj| obj.as_dict().ok())
            .filter(|dict| dict.has_type(b"Font"))
            .filter_map(|dict| dict.get(b"BaseFont").ok())
            .filter_map(|name| name.as_name().ok())
            .map(|name| String::from_utf8_lossy(name).to_string())
            .collect();
        names.sort();
        names
    }
}

/// An encoded DOCX package.
pub struct GeneratedDocx {
    pub bytes: Vec<u8>,
}

impl GeneratedDocx {
    pub fn part(&self, name: &str) -> Result<String, Box<dyn std::error::Error>> {
        let mut archive = zip::ZipArchive::new(Cursor::new(self.bytes.as_slice()))?;
        let mut part = String::new();
        archive.by_name(name)?.read_to_string(&mut part)?;
        Ok(part)
    }

    pub fn document_xml(&self) -> Result<String, Box<dyn std::error::Error>> {
        self.part("word/document.xml")
    }
}

pub fn encode_pdf(exporter: &Exporter, export: &Export) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    GeneratedPdf::from_bytes(exporter.encode(export, &PdfEncoder::default())?)
}

pub fn encode_docx(exporter: &Exporter, export: &Export) -> Result<GeneratedDocx, Box<dyn std::error::Error>> {
    let bytes = exporter.encode(export, &DocxEncoder)?;
    assert_eq!(DocxEncoder.extension(), "docx");
    Ok(GeneratedDocx { bytes })
}

#[macro_export]
macro_rules! assert_text_contains {
    ($haystack:expr, $needle:expr) => {
        let haystack = $haystack;
        assert!(
            haystack.contains($needle),
            "expected to find {:?} in:\n{}",
            $needle,
            haystack
        );
    };
}
