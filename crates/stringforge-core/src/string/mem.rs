//! Memory operations: memcpy, memmove, memcmp, memchr, memset.
//!
//! Bounded, safe slice operations standing in for the `<string.h>`
//! memory functions. Every operation clamps `n` to the slices it was
//! given; nothing here can read or write out of bounds.

use core::cmp::Ordering;

/// Copies `n` bytes from `src` into `dest`.
///
/// Equivalent to C `memcpy` for non-overlapping buffers (distinct Rust
/// slices never alias). Copies `min(n, src.len(), dest.len())` bytes and
/// returns that count.
pub fn memcpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let count = n.min(src.len()).min(dest.len());
    dest[..count].copy_from_slice(&src[..count]);
    count
}

/// Copies `n` bytes within one buffer, from `from` to `to`, handling
/// overlap correctly.
///
/// Equivalent to C `memmove` with both pointers inside the same object;
/// built on `copy_within`, which tolerates any overlap. Returns the
/// number of bytes copied.
pub fn memmove(buf: &mut [u8], from: usize, to: usize, n: usize) -> usize {
    if from >= buf.len() || to >= buf.len() {
        return 0;
    }
    let count = n.min(buf.len() - from).min(buf.len() - to);
    buf.copy_within(from..from + count, to);
    count
}

/// Fills the first `n` bytes of `dest` with `value`.
///
/// Equivalent to C `memset`. Returns the number of bytes written.
pub fn memset(dest: &mut [u8], value: u8, n: usize) -> usize {
    let count = n.min(dest.len());
    dest[..count].fill(value);
    count
}

/// Compares the first `n` bytes of `a` and `b`.
///
/// Equivalent to C `memcmp`, with the result expressed as an
/// [`Ordering`] instead of a signed integer.
pub fn memcmp(a: &[u8], b: &[u8], n: usize) -> Ordering {
    let count = n.min(a.len()).min(b.len());
    a[..count].cmp(&b[..count])
}

/// Finds the first occurrence of `needle` in the first `n` bytes of
/// `haystack`.
///
/// Equivalent to C `memchr`. Returns the byte index, or `None`.
pub fn memchr(haystack: &[u8], needle: u8, n: usize) -> Option<usize> {
    let count = n.min(haystack.len());
    haystack[..count].iter().position(|&b| b == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memcpy_clamps_to_buffers() {
        let mut dest = [0u8; 4];
        assert_eq!(memcpy(&mut dest, b"abcdef", 100), 4);
        assert_eq!(&dest, b"abcd");
    }

    #[test]
    fn test_memmove_overlapping_forward() {
        let mut buf = *b"abcdef";
        assert_eq!(memmove(&mut buf, 0, 2, 4), 4);
        assert_eq!(&buf, b"ababcd");
    }

    #[test]
    fn test_memmove_overlapping_backward() {
        let mut buf = *b"abcdef";
        assert_eq!(memmove(&mut buf, 2, 0, 4), 4);
        assert_eq!(&buf, b"cdefef");
    }

    #[test]
    fn test_memset() {
        let mut buf = *b"xxxxxx";
        assert_eq!(memset(&mut buf, b'-', 3), 3);
        assert_eq!(&buf, b"---xxx");
    }

    #[test]
    fn test_memcmp() {
        assert_eq!(memcmp(b"abc", b"abd", 2), Ordering::Equal);
        assert_eq!(memcmp(b"abc", b"abd", 3), Ordering::Less);
        assert_eq!(memcmp(b"b", b"a", 1), Ordering::Greater);
    }

    #[test]
    fn test_memchr() {
        assert_eq!(memchr(b"hello", b'l', 5), Some(2));
        assert_eq!(memchr(b"hello", b'l', 2), None);
        assert_eq!(memchr(b"hello", b'z', 5), None);
    }
}
