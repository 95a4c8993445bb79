//! Typed argument stream.
//!
//! Replaces the C `va_list` walk with an explicit sequence of tagged
//! values built by the caller. Arguments are consumed strictly left to
//! right, one read per directive (plus one per `*` width/precision).
//! Reading past the end, or reading a value of the wrong kind, is a
//! reported error — the formatter fails closed instead of touching
//! uninitialized memory the way the variadic original could.

use std::cell::Cell;

use crate::fmt::FormatError;

/// One typed argument value.
///
/// Integer conversions accept `Int`, `Uint` and `Char` interchangeably
/// (mirroring C's default argument promotions); everything else is
/// matched exactly.
#[derive(Debug, Clone, Copy)]
pub enum Arg<'a> {
    Int(i64),
    Uint(u64),
    Float(f64),
    Char(u8),
    Str(&'a [u8]),
    /// A null pointer argument. Renders as `(null)` for `%s` and
    /// `(nil)` for `%p` — compatibility behavior, not an error.
    Null,
    Ptr(usize),
    /// Write-back slot for `%n`: receives the output length so far.
    Count(&'a Cell<i64>),
}

impl Arg<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Arg::Int(_) => "signed integer",
            Arg::Uint(_) => "unsigned integer",
            Arg::Float(_) => "float",
            Arg::Char(_) => "char",
            Arg::Str(_) => "string",
            Arg::Null => "null",
            Arg::Ptr(_) => "pointer",
            Arg::Count(_) => "count sink",
        }
    }
}

/// Ordered, one-directional view over the caller's arguments.
#[derive(Debug)]
pub struct ArgStream<'a> {
    args: &'a [Arg<'a>],
    cursor: usize,
}

impl<'a> ArgStream<'a> {
    pub fn new(args: &'a [Arg<'a>]) -> Self {
        Self { args, cursor: 0 }
    }

    /// Index of the next unread argument (0-based).
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Pull the next argument, failing closed on exhaustion.
    pub fn next(&mut self) -> Result<Arg<'a>, FormatError> {
        let arg = self.args.get(self.cursor).copied().ok_or(FormatError::MissingArgument {
            index: self.cursor,
            supplied: self.args.len(),
        })?;
        self.cursor += 1;
        Ok(arg)
    }

    /// Next argument as a signed integer (`%d`, `%i`, `*` width/precision).
    pub fn next_signed(&mut self) -> Result<i64, FormatError> {
        let index = self.cursor;
        match self.next()? {
            Arg::Int(v) => Ok(v),
            Arg::Uint(v) => Ok(v as i64),
            Arg::Char(c) => Ok(c as i64),
            other => Err(self.mismatch(index, "signed integer", other)),
        }
    }

    /// Next argument as an unsigned integer (`%u`, `%o`, `%x`, `%X`).
    pub fn next_unsigned(&mut self) -> Result<u64, FormatError> {
        let index = self.cursor;
        match self.next()? {
            Arg::Uint(v) => Ok(v),
            Arg::Int(v) => Ok(v as u64),
            Arg::Char(c) => Ok(c as u64),
            other => Err(self.mismatch(index, "unsigned integer", other)),
        }
    }

    /// Next argument as a float (`%f`, `%e`, `%g`).
    pub fn next_float(&mut self) -> Result<f64, FormatError> {
        let index = self.cursor;
        match self.next()? {
            Arg::Float(v) => Ok(v),
            other => Err(self.mismatch(index, "float", other)),
        }
    }

    /// Next argument narrowed to one character (`%c`).
    pub fn next_char(&mut self) -> Result<u8, FormatError> {
        let index = self.cursor;
        match self.next()? {
            Arg::Char(c) => Ok(c),
            Arg::Int(v) => Ok(v as u8),
            Arg::Uint(v) => Ok(v as u8),
            other => Err(self.mismatch(index, "char", other)),
        }
    }

    /// Next argument as string content (`%s`). `None` is a null pointer.
    pub fn next_str(&mut self) -> Result<Option<&'a [u8]>, FormatError> {
        let index = self.cursor;
        match self.next()? {
            Arg::Str(s) => Ok(Some(s)),
            Arg::Null => Ok(None),
            other => Err(self.mismatch(index, "string", other)),
        }
    }

    /// Next argument as a pointer address (`%p`).
    pub fn next_ptr(&mut self) -> Result<usize, FormatError> {
        let index = self.cursor;
        match self.next()? {
            Arg::Ptr(addr) => Ok(addr),
            Arg::Null => Ok(0),
            other => Err(self.mismatch(index, "pointer", other)),
        }
    }

    /// Next argument as a `%n` write-back slot.
    pub fn next_count(&mut self) -> Result<&'a Cell<i64>, FormatError> {
        let index = self.cursor;
        match self.next()? {
            Arg::Count(cell) => Ok(cell),
            other => Err(self.mismatch(index, "count sink", other)),
        }
    }

    fn mismatch(&self, index: usize, expected: &'static str, found: Arg<'_>) -> FormatError {
        FormatError::WrongArgumentKind {
            index,
            expected,
            found: found.kind(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_to_right_consumption() {
        let args = [Arg::Int(1), Arg::Uint(2), Arg::Float(3.0)];
        let mut stream = ArgStream::new(&args);
        assert_eq!(stream.next_signed().unwrap(), 1);
        assert_eq!(stream.next_unsigned().unwrap(), 2);
        assert_eq!(stream.next_float().unwrap(), 3.0);
    }

    #[test]
    fn test_exhaustion_fails_closed() {
        let mut stream = ArgStream::new(&[]);
        assert_eq!(
            stream.next_signed(),
            Err(FormatError::MissingArgument {
                index: 0,
                supplied: 0
            })
        );
    }

    #[test]
    fn test_integer_promotions() {
        let args = [Arg::Char(b'A'), Arg::Int(-1)];
        let mut stream = ArgStream::new(&args);
        assert_eq!(stream.next_signed().unwrap(), 65);
        // Signed -1 reinterpreted as unsigned, as C varargs would.
        assert_eq!(stream.next_unsigned().unwrap(), u64::MAX);
    }

    #[test]
    fn test_kind_mismatch_reports_index() {
        let args = [Arg::Int(0), Arg::Str(b"x")];
        let mut stream = ArgStream::new(&args);
        stream.next_signed().unwrap();
        let err = stream.next_float().unwrap_err();
        assert_eq!(
            err,
            FormatError::WrongArgumentKind {
                index: 1,
                expected: "float",
                found: "string",
            }
        );
    }

    #[test]
    fn test_null_string_is_not_an_error() {
        let args = [Arg::Null];
        let mut stream = ArgStream::new(&args);
        assert_eq!(stream.next_str().unwrap(), None);
    }
}
