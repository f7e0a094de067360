//! Quote-aware string splitting

/// Split `input` on `delimiter`, treating the delimiter as a literal
/// character inside quoted spans.
///
/// A span opens on any character from `quote_chars` encountered outside a
/// span and closes only on the same character that opened it; the other
/// quote kind is literal inside the span. Segments are the verbatim
/// substrings between separators, so quote characters are retained in the
/// output.
///
/// Empty input yields no segments. An unterminated quote is not an error;
/// the remainder of the input becomes the final segment. A trailing
/// delimiter yields a trailing empty segment, which callers filter out.
pub fn split_enclosed(input: &str, delimiter: char, quote_chars: &[char]) -> Vec<String> {
    if input.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut open_quote: Option<char> = None;

    for ch in input.chars() {
        match open_quote {
            Some(quote) => {
                if ch == quote {
                    open_quote = None;
                }
                current.push(ch);
            }
            None if quote_chars.contains(&ch) => {
                open_quote = Some(ch);
                current.push(ch);
            }
            None if ch == delimiter => segments.push(std::mem::take(&mut current)),
            None => current.push(ch),
        }
    }
    segments.push(current);

    segments
}
