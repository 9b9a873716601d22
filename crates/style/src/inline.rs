//! The single Span → style mapping table shared by every backend.
//!
//! Backends lower an [`InlineStyle`] into their own run or fragment
//! attributes; they never branch on [`SpanStyle`] themselves.

use crate::font::{FontStyle, FontWeight};
use crate::text::{TextRole, TextScale};
use folio_markup::SpanStyle;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct InlineStyle {
    pub weight: FontWeight,
    pub style: FontStyle,
    pub role: TextRole,
    pub scale: TextScale,
}

impl InlineStyle {
    pub const PLAIN: InlineStyle = InlineStyle {
        weight: FontWeight::Regular,
        style: FontStyle::Normal,
        role: TextRole::Body,
        scale: TextScale::Body,
    };

    pub const BOLD: InlineStyle = InlineStyle {
        weight: FontWeight::Bold,
        ..Self::PLAIN
    };

    pub fn for_span(style: SpanStyle) -> Self {
        match style {
            SpanStyle::Plain => Self::PLAIN,
            SpanStyle::Bold => Self::BOLD,
            SpanStyle::Italic => InlineStyle {
                style: FontStyle::Italic,
                ..Self::PLAIN
            },
            SpanStyle::InlineMath => InlineStyle {
                role: TextRole::Math,
                ..Self::BOLD
            },
            SpanStyle::DisplayMath => InlineStyle {
                role: TextRole::Math,
                scale: TextScale::Display,
                ..Self::BOLD
            },
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight.is_bold()
    }

    pub fn is_math(&self) -> bool {
        self.role == TextRole::Math
    }

    /// Whether a backend without a math face should slant this text.
    /// Math is shown italic there so it stays distinct from bold prose.
    pub fn is_slanted(&self) -> bool {
        self.style.is_italic() || self.is_math()
    }
}
