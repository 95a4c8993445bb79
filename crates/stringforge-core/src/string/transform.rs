//! Sequence transformations: case conversion, trim, insert.
//!
//! These return new owned strings rather than mutating in place; the
//! "error returns NULL" contracts of the originals become `Option`.

/// Bytes treated as whitespace when a trim set is empty:
/// space, newline, carriage return, tab, vertical tab, form feed.
const SPACE_SYMBOLS: &[u8] = b" \n\r\t\x0B\x0C";

/// Returns a copy of `s` converted to uppercase (ASCII).
pub fn to_upper(s: &[u8]) -> Vec<u8> {
    s.iter().map(|b| b.to_ascii_uppercase()).collect()
}

/// Returns a copy of `s` converted to lowercase (ASCII).
pub fn to_lower(s: &[u8]) -> Vec<u8> {
    s.iter().map(|b| b.to_ascii_lowercase()).collect()
}

/// Returns a new string with `piece` inserted into `src` at byte
/// position `index`, or `None` when `index` is past the end of `src`.
pub fn insert(src: &[u8], piece: &[u8], index: usize) -> Option<Vec<u8>> {
    if index > src.len() {
        return None;
    }
    let mut out = Vec::with_capacity(src.len() + piece.len());
    out.extend_from_slice(&src[..index]);
    out.extend_from_slice(piece);
    out.extend_from_slice(&src[index..]);
    Some(out)
}

/// Returns a new string with all leading and trailing occurrences of
/// the bytes in `set` removed. An empty set trims whitespace.
pub fn trim(src: &[u8], set: &[u8]) -> Vec<u8> {
    let set = if set.is_empty() { SPACE_SYMBOLS } else { set };
    let start = src.iter().take_while(|b| set.contains(b)).count();
    let end = src.len() - src[start..].iter().rev().take_while(|b| set.contains(b)).count();
    src[start..end].to_vec()
}
