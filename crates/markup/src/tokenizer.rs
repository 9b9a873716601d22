//! A single-pass, leftmost-first scanner for the inline markup dialect.
//!
//! At every byte offset the delimiter classes are tried in fixed priority
//! order (display math, inline math, bold, italic). The first class that
//! matches is consumed and scanning resumes right after it; if none match,
//! one character is added to the pending plain run. Already-consumed text is
//! never revisited.

use crate::span::{Span, SpanStyle};

/// Splits `text` into styled spans.
///
/// Never fails. Unterminated or malformed delimiters fall through to
/// [`SpanStyle::Plain`] text, and adjacent plain characters are merged into a
/// single span.
pub fn tokenize(text: &str) -> Vec<Span> {
    Scanner::new(text).run()
}

/// A delimiter match starting at the current offset.
struct Match<'a> {
    style: SpanStyle,
    body: &'a str,
    /// Total bytes consumed, delimiters included.
    len: usize,
}

type Rule = for<'a> fn(&'a str) -> Option<Match<'a>>;

/// Delimiter classes in precedence order.
const RULES: [Rule; 4] = [display_math, inline_math, bold, italic];

struct Scanner<'a> {
    src: &'a str,
    pos: usize,
    plain_start: usize,
    spans: Vec<Span>,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            plain_start: 0,
            spans: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Span> {
        while self.pos < self.src.len() {
            let rest = &self.src[self.pos..];
            match RULES.iter().find_map(|rule| rule(rest)) {
                Some(m) => {
                    self.flush_plain();
                    self.spans.push(Span::new(m.body, m.style));
                    self.pos += m.len;
                    self.plain_start = self.pos;
                }
                None => {
                    self.pos += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        self.flush_plain();
        self.spans
    }

    fn flush_plain(&mut self) {
        if self.plain_start < self.pos {
            self.spans
                .push(Span::plain(&self.src[self.plain_start..self.pos]));
        }
    }
}

/// `$$...$$`; the body may span lines and is trimmed.
fn display_math(rest: &str) -> Option<Match<'_>> {
    let inner = rest.strip_prefix("$$")?;
    let close = inner.find("$$")?;
    Some(Match {
        style: SpanStyle::DisplayMath,
        body: inner[..close].trim(),
        len: close + 4,
    })
}

/// `$x$`; the body is non-empty, contains no `$`, and neither starts nor
/// ends with whitespace. This keeps `$5 and $10` as plain text.
fn inline_math(rest: &str) -> Option<Match<'_>> {
    let inner = rest.strip_prefix('$')?;
    let close = inner.find('$')?;
    let body = &inner[..close];
    let first = body.chars().next()?;
    let last = body.chars().next_back()?;
    if first.is_whitespace() || last.is_whitespace() {
        return None;
    }
    Some(Match {
        style: SpanStyle::InlineMath,
        body,
        len: close + 2,
    })
}

/// `**...**`, closed by the nearest `**` on the same line.
fn bold(rest: &str) -> Option<Match<'_>> {
    let inner = rest.strip_prefix("**")?;
    let close = current_line(inner).find("**")?;
    Some(Match {
        style: SpanStyle::Bold,
        body: &inner[..close],
        len: close + 4,
    })
}

/// `*...*`, closed by the nearest `*` on the same line.
fn italic(rest: &str) -> Option<Match<'_>> {
    let inner = rest.strip_prefix('*')?;
    let close = current_line(inner).find('*')?;
    Some(Match {
        style: SpanStyle::Italic,
        body: &inner[..close],
        len: close + 2,
    })
}

/// The prefix of `s` up to (not including) the first line terminator.
fn current_line(s: &str) -> &str {
    let end = s
        .find(['\n', '\r', '\u{2028}', '\u{2029}'])
        .unwrap_or(s.len());
    &s[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::to_markup;
    use proptest::prelude::*;

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_plain_only() {
        assert_eq!(tokenize("plain"), vec![Span::plain("plain")]);
    }

    #[test]
    fn test_bold() {
        assert_eq!(tokenize("**bold**"), vec![Span::bold("bold")]);
    }

    #[test]
    fn test_italic_followed_by_plain() {
        assert_eq!(
            tokenize("*it*alic"),
            vec![Span::italic("it"), Span::plain("alic")]
        );
    }

    #[test]
    fn test_currency_is_not_math() {
        assert_eq!(tokenize("$5 and $10"), vec![Span::plain("$5 and $10")]);
    }

    #[test]
    fn test_inline_math() {
        assert_eq!(tokenize("$x+1$"), vec![Span::inline_math("x+1")]);
    }

    #[test]
    fn test_inline_math_body_is_not_trimmed() {
        assert_eq!(tokenize("$a + b$"), vec![Span::inline_math("a + b")]);
    }

    #[test]
    fn test_inline_math_closes_at_first_dollar() {
        assert_eq!(
            tokenize("$x$$"),
            vec![Span::inline_math("x"), Span::plain("$")]
        );
    }

    #[test]
    fn test_inline_math_rejects_padded_body() {
        assert_eq!(tokenize("$ x$"), vec![Span::plain("$ x$")]);
        assert_eq!(tokenize("$x $"), vec![Span::plain("$x $")]);
    }

    #[test]
    fn test_display_math_is_trimmed() {
        assert_eq!(tokenize("$$E=mc^2$$"), vec![Span::display_math("E=mc^2")]);
        assert_eq!(
            tokenize("$$\n  F = ma\n$$"),
            vec![Span::display_math("F = ma")]
        );
    }

    #[test]
    fn test_display_math_wins_over_inline() {
        assert_eq!(
            tokenize("see $$x$$ and $y$"),
            vec![
                Span::plain("see "),
                Span::display_math("x"),
                Span::plain(" and "),
                Span::inline_math("y"),
            ]
        );
    }

    #[test]
    fn test_bold_wins_over_italic() {
        assert_eq!(
            tokenize("a **b** *c*"),
            vec![
                Span::plain("a "),
                Span::bold("b"),
                Span::plain(" "),
                Span::italic("c"),
            ]
        );
    }

    #[test]
    fn test_unterminated_delimiters_are_literal() {
        assert_eq!(tokenize("5 * 3"), vec![Span::plain("5 * 3")]);
        assert_eq!(tokenize("cost: $4"), vec![Span::plain("cost: $4")]);
        assert_eq!(tokenize("$$never closed"), vec![Span::plain("$$never closed")]);
    }

    #[test]
    fn test_emphasis_does_not_cross_lines() {
        assert_eq!(
            tokenize("*one\ntwo*"),
            vec![Span::plain("*one\ntwo*")]
        );
    }

    #[test]
    fn test_unclosed_bold_degrades_to_empty_italic() {
        // `**` with no closing pair still matches the italic form.
        assert_eq!(
            tokenize("**a"),
            vec![Span::italic(""), Span::plain("a")]
        );
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        assert_eq!(
            tokenize("Énergie **cinétique** — $½mv^2$"),
            vec![
                Span::plain("Énergie "),
                Span::bold("cinétique"),
                Span::plain(" — "),
                Span::inline_math("½mv^2"),
            ]
        );
    }

    fn strip_whitespace(s: &str) -> String {
        s.chars().filter(|c| !c.is_whitespace()).collect()
    }

    proptest! {
        #[test]
        fn prop_content_round_trips(input in "[ab $*\n\t]{0,40}") {
            let spans = tokenize(&input);
            prop_assert_eq!(strip_whitespace(&to_markup(&spans)), strip_whitespace(&input));
        }

        #[test]
        fn prop_plain_spans_are_merged_and_non_empty(input in "[ab $*\n]{0,40}") {
            let spans = tokenize(&input);
            for pair in spans.windows(2) {
                prop_assert!(!(pair[0].style == SpanStyle::Plain && pair[1].style == SpanStyle::Plain));
            }
            for span in spans.iter().filter(|s| s.style == SpanStyle::Plain) {
                prop_assert!(!span.text.is_empty());
            }
        }

        #[test]
        fn prop_markup_free_text_is_one_plain_span(input in "[a-zA-Z0-9 .,]{1,40}") {
            prop_assert_eq!(tokenize(&input), vec![Span::plain(input.clone())]);
        }
    }
}
