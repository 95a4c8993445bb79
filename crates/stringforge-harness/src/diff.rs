//! Expected-vs-actual rendering for failed cases.

/// Render a two-line diff with a caret under the first differing byte.
#[must_use]
pub fn render_diff(expected: &str, actual: &str) -> String {
    let divergence = expected
        .bytes()
        .zip(actual.bytes())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.len().min(actual.len()));

    let mut out = String::new();
    out.push_str(&format!("expected: {expected:?}\n"));
    out.push_str(&format!("actual:   {actual:?}\n"));
    // The quoted form above starts one byte in, after the opening quote.
    out.push_str(&" ".repeat(10 + 1 + printable_offset(expected, divergence)));
    out.push_str(&format!("^ first difference at byte {divergence}"));
    out
}

/// Column of `byte_index` within the `{:?}` rendering of `s`, accounting
/// for escape sequences that widen earlier bytes.
fn printable_offset(s: &str, byte_index: usize) -> usize {
    s.bytes()
        .take(byte_index)
        .map(|b| match b {
            b'\\' | b'"' | b'\n' | b'\r' | b'\t' => 2,
            0x20..=0x7E => 1,
            _ => 4,
        })
        .sum()
}
