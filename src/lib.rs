//! Lesson-plan documents: inline markup is tokenized into a shared rich-text
//! model, lowered by a flow (word-processor) or page (print) backend, then
//! encoded as DOCX or PDF.
//!
//! ```
//! use folio::{ExportTarget, Exporter, LessonPlan};
//!
//! let plan = LessonPlan {
//!     title: "Photosynthesis".to_string(),
//!     ..Default::default()
//! };
//! let export = Exporter::default().export(&plan, ExportTarget::Page, Some("SLO-3"));
//! assert_eq!(export.filename, "SLO-3_Photosynthesis");
//! ```

pub mod config;
pub mod delivery;
pub mod encode;
pub mod error;
pub mod export;
pub mod filename;
pub mod input;

pub use config::{DeliveryConfig, Settings};
pub use delivery::{
    DeliverySink, DirectorySink, ExportItem, ItemReport, MemorySink, deliver_batch, deliver_each,
    deliver_export,
};
pub use encode::{DefaultEncoder, DocumentEncoder, DocxEncoder, PdfEncoder};
pub use error::{EncodeError, ExportError};
pub use export::{Export, ExportTarget, Exporter, RenderedTree};
pub use filename::sanitize;
pub use input::{load_plans, parse_plans};

pub use folio_markup::{Span, SpanStyle, tokenize};
pub use folio_render_core::RenderConfig;
pub use folio_types::{Activity, LessonPlan};
