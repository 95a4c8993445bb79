//! printf-family formatting engine.
//!
//! Clean-room implementation of the classic conversion grammar
//! `%[flags][width][.precision][length]conversion` over a typed
//! argument stream. The scanner ([`spec`]) classifies each directive
//! into an immutable descriptor; the renderers ([`int`], [`float`] and
//! the char/string paths here) turn one descriptor plus the next
//! argument(s) into a text fragment; [`pad`] applies width on the way
//! out.
//!
//! Reference: ISO C11 7.21.6.1. Each formatting call is independent and
//! reentrant: there is no shared mutable state, so concurrent calls on
//! separate buffers never interfere.
//!
//! Malformed formats fail closed: the whole call returns an error and
//! the caller must not trust any partial output.

pub mod args;
mod float;
mod int;
mod pad;
pub mod spec;

pub use args::{Arg, ArgStream};
pub use spec::{ConvFlags, ConvSpec, Conversion, LengthMod, Precision, Width};

use thiserror::Error;

/// Why a formatting call failed. All rendering edge cases (zero
/// precision, carry propagation, null string arguments) are normal
/// output, never errors; only a malformed format or a bad argument
/// stream lands here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The format string ended inside a `%`-directive.
    #[error("format string ended inside a conversion directive (directive begins at byte {at})")]
    UnterminatedDirective { at: usize },
    /// A conversion character outside the classic set.
    #[error("unknown conversion character `{ch}` at byte {at}")]
    UnknownConversion { ch: char, at: usize },
    /// The format string asked for more arguments than were supplied.
    #[error("directive needs argument {index} but only {supplied} were supplied")]
    MissingArgument { index: usize, supplied: usize },
    /// An argument had the wrong kind for its directive.
    #[error("argument {index}: directive expects a {expected}, found a {found}")]
    WrongArgumentKind {
        index: usize,
        expected: &'static str,
        found: &'static str,
    },
    /// Byte output did not form valid UTF-8 (only possible via
    /// [`format`] with non-UTF-8 `Str`/`Char` arguments).
    #[error("formatted output is not valid UTF-8")]
    InvalidUtf8,
}

/// A directive with width and precision resolved (any `*` arguments
/// already consumed). Passed by reference into stateless renderers;
/// discarded after one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    pub flags: ConvFlags,
    pub width: usize,
    pub precision: Option<usize>,
    pub length: LengthMod,
    pub conversion: Conversion,
}

/// Format into a fresh byte buffer.
///
/// Literal spans are copied verbatim, `%%` emits one `%`, and every
/// other directive consumes its arguments strictly left to right
/// (`*` width, then `*` precision, then the value).
pub fn vformat(fmt: &[u8], args: &[Arg<'_>]) -> Result<Vec<u8>, FormatError> {
    let mut out = Vec::with_capacity(fmt.len() + 32);
    let mut stream = ArgStream::new(args);
    let mut pos = 0;

    while pos < fmt.len() {
        if fmt[pos] != b'%' {
            let run = fmt[pos..].iter().position(|&b| b == b'%').unwrap_or(fmt.len() - pos);
            out.extend_from_slice(&fmt[pos..pos + run]);
            pos += run;
            continue;
        }
        if pos + 1 >= fmt.len() {
            return Err(FormatError::UnterminatedDirective { at: pos });
        }
        if fmt[pos + 1] == b'%' {
            out.push(b'%');
            pos += 2;
            continue;
        }
        let (parsed, consumed) = spec::parse_directive(&fmt[pos + 1..], pos)?;
        pos += 1 + consumed;
        let directive = resolve(&parsed, &mut stream)?;
        render(&directive, &mut stream, &mut out)?;
    }
    Ok(out)
}

/// [`vformat`] for `&str` in and `String` out.
pub fn format(fmt: &str, args: &[Arg<'_>]) -> Result<String, FormatError> {
    let bytes = vformat(fmt.as_bytes(), args)?;
    String::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8)
}

/// C-convention entry point: render into a caller-provided buffer.
///
/// Returns the number of bytes logically produced, which may exceed
/// `buf.len()` — output is truncated to fit but the full length is
/// still reported, so callers can pre-size and retry. Returns `-1` on
/// any malformed-format or argument-stream error (fails closed; the
/// buffer contents must not be trusted).
pub fn sformat(buf: &mut [u8], fmt: &[u8], args: &[Arg<'_>]) -> i32 {
    match vformat(fmt, args) {
        Ok(rendered) => {
            let copy = rendered.len().min(buf.len());
            buf[..copy].copy_from_slice(&rendered[..copy]);
            rendered.len() as i32
        }
        Err(_) => -1,
    }
}

/// Resolve `*` width/precision from the stream and fold the parse-time
/// flag interactions in.
fn resolve(parsed: &ConvSpec, stream: &mut ArgStream<'_>) -> Result<Directive, FormatError> {
    let mut flags = parsed.flags;

    let width = match parsed.width {
        Width::None => 0,
        Width::Fixed(w) => w,
        Width::FromArg => {
            let w = stream.next_signed()?;
            if w < 0 {
                // Negative width from an argument means left-justify.
                flags.left_justify = true;
                flags.zero_pad = false;
                w.unsigned_abs() as usize
            } else {
                w as usize
            }
        }
    };

    let precision = match parsed.precision {
        Precision::None => None,
        Precision::Fixed(p) => Some(p),
        Precision::FromArg => {
            let p = stream.next_signed()?;
            // A negative precision argument acts as if omitted.
            if p < 0 { None } else { Some(p as usize) }
        }
    };

    Ok(Directive {
        flags,
        width,
        precision,
        length: parsed.length,
        conversion: parsed.conversion,
    })
}

fn render(d: &Directive, stream: &mut ArgStream<'_>, out: &mut Vec<u8>) -> Result<(), FormatError> {
    match d.conversion {
        Conversion::Signed => {
            let value = truncate_signed(stream.next_signed()?, d.length);
            int::signed(value, d, out);
        }
        Conversion::Unsigned | Conversion::Octal | Conversion::Hex { .. } => {
            let value = truncate_unsigned(stream.next_unsigned()?, d.length);
            int::unsigned(value, d, out);
        }
        Conversion::Pointer => {
            int::pointer(stream.next_ptr()?, d, out);
        }
        Conversion::Fixed => {
            float::fixed(stream.next_float()?, d, out);
        }
        Conversion::Scientific { upper } => {
            float::scientific(stream.next_float()?, upper, d, out);
        }
        Conversion::General { upper } => {
            float::general(stream.next_float()?, upper, d, out);
        }
        Conversion::Char => {
            let c = stream.next_char()?;
            pad::emit(
                out,
                d,
                pad::Payload {
                    body: &[c],
                    ..Default::default()
                },
            );
        }
        Conversion::Str => {
            // A null string argument renders as "(null)" — deliberate
            // compatibility behavior, not an error.
            let content = stream.next_str()?.unwrap_or(b"(null)");
            let shown = match d.precision {
                Some(p) => &content[..content.len().min(p)],
                None => content,
            };
            pad::emit(
                out,
                d,
                pad::Payload {
                    body: shown,
                    ..Default::default()
                },
            );
        }
        Conversion::Count => {
            stream.next_count()?.set(out.len() as i64);
        }
    }
    Ok(())
}

/// Narrow a signed argument to the storage width the length modifier
/// selects, then re-widen (C's conversion-through-the-type semantics).
fn truncate_signed(value: i64, length: LengthMod) -> i64 {
    match length {
        LengthMod::Hh => value as i8 as i64,
        LengthMod::H => value as i16 as i64,
        LengthMod::None => value as i32 as i64,
        LengthMod::L | LengthMod::Ll | LengthMod::BigL => value,
    }
}

fn truncate_unsigned(value: u64, length: LengthMod) -> u64 {
    match length {
        LengthMod::Hh => value as u8 as u64,
        LengthMod::H => value as u16 as u64,
        LengthMod::None => value as u32 as u64,
        LengthMod::L | LengthMod::Ll | LengthMod::BigL => value,
    }
}
