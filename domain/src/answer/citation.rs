//! Citation marker scanning.
//!
//! Search-native responses reference their sources with bracketed numeric
//! markers such as `[1]` or `[12]`. Without structured metadata the markers are
//! the only signal, so the sources derived here are placeholders unless a
//! citation URL list is available to resolve them against.

/// Distinct citation marker numbers, in order of first appearance.
///
/// Only `[` digits `]` counts; `[]`, `[a]` and `[1a]` are ignored, as is `[0]`.
pub fn citation_markers(text: &str) -> Vec<usize> {
    let mut markers = Vec::new();
    let mut rest = text;

    while let Some(open) = rest.find('[') {
        rest = &rest[open + 1..];
        let digits_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
        if digits_len == 0 || rest.as_bytes().get(digits_len) != Some(&b']') {
            continue;
        }
        if let Ok(n) = rest[..digits_len].parse::<usize>()
            && n > 0
            && !markers.contains(&n)
        {
            markers.push(n);
        }
        rest = &rest[digits_len + 1..];
    }

    markers
}

/// Turn the markers found in `text` into source entries.
///
/// Marker `n` resolves to `citations[n - 1]` when that URL exists; otherwise a
/// `"Source n"` placeholder stands in for it.
pub fn resolve_citations(text: &str, citations: &[String]) -> Vec<String> {
    citation_markers(text)
        .into_iter()
        .map(|n| match citations.get(n - 1) {
            Some(url) if !url.trim().is_empty() => url.clone(),
            _ => format!("Source {}", n),
        })
        .collect()
}
