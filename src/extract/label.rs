//! Label name normalization.
//!
//! Board label badges carry their name inside an accessibility string of the
//! form `Color: green, title:"Urgent"`, with the title quoted in whatever
//! quote characters the renderer chose that day.

/// Quote characters the page has been observed to wrap label titles in.
const QUOTE_CHARS: [char; 6] = ['"', '\'', '\u{2018}', '\u{2019}', '\u{201C}', '\u{201D}'];

/// Marker preceding the label name inside the accessibility string.
const TITLE_MARKER: &str = "title:";

/// Extracts a clean label name from a raw accessibility string.
///
/// Splits on the first `title:`, trims the remainder, removes straight and
/// curly single/double quotes wherever they occur, and trims again. Returns
/// an empty string when the marker is absent or nothing survives stripping;
/// callers skip empty results.
pub fn normalize_label(raw: &str) -> String {
    let Some((_, rest)) = raw.split_once(TITLE_MARKER) else {
        return String::new();
    };
    let stripped: String = rest
        .trim()
        .chars()
        .filter(|c| !QUOTE_CHARS.contains(c))
        .collect();
    stripped.trim().to_string()
}
