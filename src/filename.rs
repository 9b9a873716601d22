//! Output filename composition.

/// Longest filename base [`sanitize`] returns, in characters.
pub const MAX_FILENAME_CHARS: usize = 100;

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')
}

/// Builds a filesystem-safe filename base (no extension).
///
/// With an `id` the base is `"{id}_{title}"`. Every character outside
/// `[A-Za-z0-9_.-]` becomes `_`, one for one, and the result is cut to
/// [`MAX_FILENAME_CHARS`] characters. Distinct inputs may collide.
///
/// ```
/// assert_eq!(folio::sanitize("My Title!", Some("SLO-1")), "SLO-1_My_Title_");
/// ```
pub fn sanitize(title: &str, id: Option<&str>) -> String {
    let base = match id {
        Some(id) => format!("{id}_{title}"),
        None => title.to_string(),
    };
    base.chars()
        .map(|c| if is_safe(c) { c } else { '_' })
        .take(MAX_FILENAME_CHARS)
        .collect()
}
