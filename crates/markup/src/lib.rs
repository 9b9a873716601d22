//! The lightweight inline markup dialect used in lesson-plan text fields.
//!
//! Four constructs are recognized, in precedence order:
//!
//! | Markup      | Style                    |
//! |-------------|--------------------------|
//! | `$$...$$`   | [`SpanStyle::DisplayMath`] (body trimmed) |
//! | `$x$`       | [`SpanStyle::InlineMath`] |
//! | `**...**`   | [`SpanStyle::Bold`]      |
//! | `*...*`     | [`SpanStyle::Italic`]    |
//!
//! Everything else is [`SpanStyle::Plain`]. Tokenizing never fails: an
//! unterminated delimiter is kept as literal text.
//!
//! ```
//! use folio_markup::{tokenize, Span};
//!
//! let spans = tokenize("*it*alic");
//! assert_eq!(spans, vec![Span::italic("it"), Span::plain("alic")]);
//! ```

mod span;
mod tokenizer;

pub use span::{Span, SpanStyle, plain_text, to_markup};
pub use tokenizer::tokenize;
