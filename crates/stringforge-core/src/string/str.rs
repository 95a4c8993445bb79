//! String operations: length, copy, concatenation, comparison, search.
//!
//! Safe renditions of the `<string.h>` string functions. Strings are
//! `&[u8]` slices in which a NUL byte (`0x00`) marks the logical end;
//! a slice with no NUL is treated as exactly its length. Destination
//! buffers are fixed-size slices, as C's are.

use core::cmp::Ordering;

/// Length of a NUL-terminated byte string, not counting the NUL.
///
/// Equivalent to C `strlen`.
pub fn strlen(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Byte at logical position `i`, treating the string as NUL-padded to
/// infinity. Shared by the comparison routines.
fn at(s: &[u8], i: usize) -> u8 {
    if i < strlen(s) { s[i] } else { 0 }
}

/// Lexicographic comparison of two NUL-terminated strings.
///
/// Equivalent to C `strcmp`, with the result as an [`Ordering`].
pub fn strcmp(a: &[u8], b: &[u8]) -> Ordering {
    strncmp(a, b, a.len().max(b.len()) + 1)
}

/// Compares at most `n` logical bytes of two NUL-terminated strings.
///
/// Equivalent to C `strncmp`.
pub fn strncmp(a: &[u8], b: &[u8], n: usize) -> Ordering {
    for i in 0..n {
        let (x, y) = (at(a, i), at(b, i));
        match x.cmp(&y) {
            Ordering::Equal if x == 0 => return Ordering::Equal,
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Copies the NUL-terminated string in `src` into `dest`, including the
/// terminator.
///
/// Equivalent to C `strcpy`, except the overflow case is a checked
/// error: returns the copied length (without the NUL), or `None` when
/// `dest` cannot hold the string plus its terminator.
pub fn strcpy(dest: &mut [u8], src: &[u8]) -> Option<usize> {
    let len = strlen(src);
    if dest.len() <= len {
        return None;
    }
    dest[..len].copy_from_slice(&src[..len]);
    dest[len] = 0;
    Some(len)
}

/// Copies at most `n` bytes of `src` into `dest`, NUL-padding the
/// remainder of the `n`-byte window when `src` is shorter.
///
/// Equivalent to C `strncpy`, including its sharp edge: when `src` is
/// `n` bytes or longer the window is not NUL-terminated. Returns the
/// number of bytes written.
pub fn strncpy(dest: &mut [u8], src: &[u8], n: usize) -> usize {
    let window = n.min(dest.len());
    let copy = strlen(src).min(window);
    dest[..copy].copy_from_slice(&src[..copy]);
    dest[copy..window].fill(0);
    window
}

/// Appends the NUL-terminated `src` to the NUL-terminated string
/// already in `dest`.
///
/// Equivalent to C `strcat` with a checked destination: returns the
/// total length of the result (without the NUL), or `None` when `dest`
/// is too small.
pub fn strcat(dest: &mut [u8], src: &[u8]) -> Option<usize> {
    let base = strlen(dest);
    let extra = strlen(src);
    let total = base + extra;
    if dest.len() <= total {
        return None;
    }
    dest[base..total].copy_from_slice(&src[..extra]);
    dest[total] = 0;
    Some(total)
}

/// Appends at most `n` bytes of `src`, then a NUL.
///
/// Equivalent to C `strncat` (which, unlike `strncpy`, always
/// terminates). Returns the total length of the result, or `None` when
/// `dest` is too small.
pub fn strncat(dest: &mut [u8], src: &[u8], n: usize) -> Option<usize> {
    let base = strlen(dest);
    let extra = strlen(src).min(n);
    let total = base + extra;
    if dest.len() <= total {
        return None;
    }
    dest[base..total].copy_from_slice(&src[..extra]);
    dest[total] = 0;
    Some(total)
}

/// First occurrence of `c` in the string.
///
/// Equivalent to C `strchr`. Searching for NUL finds the terminator.
pub fn strchr(s: &[u8], c: u8) -> Option<usize> {
    let len = strlen(s);
    if c == 0 {
        return (len < s.len()).then_some(len);
    }
    s[..len].iter().position(|&b| b == c)
}

/// Last occurrence of `c` in the string.
///
/// Equivalent to C `strrchr`.
pub fn strrchr(s: &[u8], c: u8) -> Option<usize> {
    let len = strlen(s);
    if c == 0 {
        return (len < s.len()).then_some(len);
    }
    s[..len].iter().rposition(|&b| b == c)
}

/// First occurrence of the string `needle` inside `haystack`.
///
/// Equivalent to C `strstr`. An empty needle matches at index 0.
pub fn strstr(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    let hay = &haystack[..strlen(haystack)];
    let needle = &needle[..strlen(needle)];
    if needle.is_empty() {
        return Some(0);
    }
    hay.windows(needle.len()).position(|w| w == needle)
}

/// Length of the leading run of bytes that are all in `accept`.
///
/// Equivalent to C `strspn`.
pub fn strspn(s: &[u8], accept: &[u8]) -> usize {
    let accept = &accept[..strlen(accept)];
    s[..strlen(s)]
        .iter()
        .take_while(|b| accept.contains(b))
        .count()
}

/// Length of the leading run of bytes that are all *not* in `reject`.
///
/// Equivalent to C `strcspn`.
pub fn strcspn(s: &[u8], reject: &[u8]) -> usize {
    let reject = &reject[..strlen(reject)];
    s[..strlen(s)]
        .iter()
        .take_while(|b| !reject.contains(b))
        .count()
}

/// First byte of `s` that appears in `set`.
///
/// Equivalent to C `strpbrk`, returning an index instead of a pointer.
pub fn strpbrk(s: &[u8], set: &[u8]) -> Option<usize> {
    let idx = strcspn(s, set);
    (idx < strlen(s)).then_some(idx)
}

/// Iterator over the delimiter-separated tokens of a string.
///
/// The borrowing stand-in for C `strtok`: instead of punching NUL bytes
/// into the buffer and keeping hidden static state, each call to
/// `next()` yields the next non-empty token as a subslice. Runs of
/// delimiters collapse, exactly as `strtok` collapses them.
pub fn tokens<'a>(s: &'a [u8], delimiters: &'a [u8]) -> Tokens<'a> {
    Tokens {
        rest: &s[..strlen(s)],
        delimiters: &delimiters[..strlen(delimiters)],
    }
}

/// See [`tokens`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    rest: &'a [u8],
    delimiters: &'a [u8],
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let skip = self
            .rest
            .iter()
            .take_while(|b| self.delimiters.contains(b))
            .count();
        self.rest = &self.rest[skip..];
        if self.rest.is_empty() {
            return None;
        }
        let end = self
            .rest
            .iter()
            .position(|b| self.delimiters.contains(b))
            .unwrap_or(self.rest.len());
        let token = &self.rest[..end];
        self.rest = &self.rest[end..];
        Some(token)
    }
}
