use serde::Serialize;

/// The inline style of a [`Span`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
    InlineMath,
    DisplayMath,
}

impl SpanStyle {
    /// The opening and closing delimiter for this style (empty for plain text).
    pub fn delimiter(self) -> &'static str {
        match self {
            SpanStyle::Plain => "",
            SpanStyle::Bold => "**",
            SpanStyle::Italic => "*",
            SpanStyle::InlineMath => "$",
            SpanStyle::DisplayMath => "$$",
        }
    }
}

/// A contiguous run of text tagged with one inline style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Plain)
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Bold)
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Italic)
    }

    pub fn inline_math(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::InlineMath)
    }

    pub fn display_math(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::DisplayMath)
    }

    /// The span's text with its delimiters added back.
    pub fn to_markup(&self) -> String {
        let delim = self.style.delimiter();
        format!("{delim}{}{delim}", self.text)
    }
}

/// Re-adds delimiters to every span and concatenates the result.
pub fn to_markup(spans: &[Span]) -> String {
    spans.iter().map(Span::to_markup).collect()
}

/// Concatenates span texts with all styling dropped.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}
