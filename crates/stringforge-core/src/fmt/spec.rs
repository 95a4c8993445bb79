//! Format directive scanner.
//!
//! Parses the text of a single `%`-directive into an immutable
//! [`ConvSpec`] descriptor. The grammar is the classic printf one:
//! `%[flags][width][.precision][length]conversion` with
//! flags ⊆ `{-,+,space,#,0}`, width/precision decimal digits or `*`,
//! length ∈ `{"",h,hh,l,ll,L}` and conversion one of
//! `d i u o x X f e E g G c s p n`.
//!
//! Reference: ISO C11 7.21.6.1. Malformed input fails the whole
//! formatting call (fails closed): an unterminated directive or an
//! unknown conversion character is an error, never silently emitted.

use crate::fmt::FormatError;

/// Flags parsed from a conversion directive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvFlags {
    pub left_justify: bool, // '-'
    pub force_sign: bool,   // '+'
    pub space_sign: bool,   // ' '
    pub alt_form: bool,     // '#'
    pub zero_pad: bool,     // '0'
}

/// Minimum field width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    None,
    Fixed(usize),
    /// `*`: taken from the next argument.
    FromArg,
}

/// Precision. `None` is distinct from `Fixed(0)`: a bare `.` means 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precision {
    None,
    Fixed(usize),
    /// `.*`: taken from the next argument.
    FromArg,
}

/// Length modifier selecting the argument's storage width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMod {
    None,
    Hh,
    H,
    L,
    Ll,
    BigL,
}

/// Conversion kind. `%%` is handled before directive parsing and has no
/// variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `d` / `i`
    Signed,
    /// `u`
    Unsigned,
    /// `o`
    Octal,
    /// `x` / `X`
    Hex { upper: bool },
    /// `f`
    Fixed,
    /// `e` / `E`
    Scientific { upper: bool },
    /// `g` / `G`
    General { upper: bool },
    /// `c`
    Char,
    /// `s`
    Str,
    /// `p`
    Pointer,
    /// `n`: write-back of the output length, renders nothing.
    Count,
}

impl Conversion {
    /// True for the conversions whose payload is a number, i.e. the ones
    /// that zero-padding applies to.
    pub fn is_numeric(self) -> bool {
        !matches!(self, Conversion::Char | Conversion::Str | Conversion::Count)
    }
}

/// One parsed conversion directive. Created fresh per `%`-directive,
/// consumed by a single renderer call, then discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvSpec {
    pub flags: ConvFlags,
    pub width: Width,
    pub precision: Precision,
    pub length: LengthMod,
    pub conversion: Conversion,
}

/// Parse one directive starting immediately after the `%`.
///
/// `fmt` is the remaining format text; `at` is the byte offset of the
/// `%` that opened the directive (used only for error reporting).
/// Returns the descriptor and the number of bytes consumed.
pub fn parse_directive(fmt: &[u8], at: usize) -> Result<(ConvSpec, usize), FormatError> {
    let mut cursor = Cursor { fmt, pos: 0 };

    let mut flags = ConvFlags::default();
    loop {
        match cursor.peek() {
            Some(b'-') => flags.left_justify = true,
            Some(b'+') => flags.force_sign = true,
            Some(b' ') => flags.space_sign = true,
            Some(b'#') => flags.alt_form = true,
            Some(b'0') => flags.zero_pad = true,
            _ => break,
        }
        cursor.bump();
    }
    // '+' overrides ' '; '-' overrides '0'.
    if flags.force_sign {
        flags.space_sign = false;
    }
    if flags.left_justify {
        flags.zero_pad = false;
    }

    let width = match cursor.peek() {
        Some(b'*') => {
            cursor.bump();
            Width::FromArg
        }
        Some(b'1'..=b'9') => Width::Fixed(cursor.decimal()),
        _ => Width::None,
    };

    let precision = if cursor.peek() == Some(b'.') {
        cursor.bump();
        match cursor.peek() {
            Some(b'*') => {
                cursor.bump();
                Precision::FromArg
            }
            // A bare '.' means precision zero.
            _ => Precision::Fixed(cursor.decimal()),
        }
    } else {
        Precision::None
    };

    // Longest match first: 'hh' and 'll' before 'h' and 'l'.
    let length = match cursor.peek() {
        Some(b'h') => {
            cursor.bump();
            if cursor.peek() == Some(b'h') {
                cursor.bump();
                LengthMod::Hh
            } else {
                LengthMod::H
            }
        }
        Some(b'l') => {
            cursor.bump();
            if cursor.peek() == Some(b'l') {
                cursor.bump();
                LengthMod::Ll
            } else {
                LengthMod::L
            }
        }
        Some(b'L') => {
            cursor.bump();
            LengthMod::BigL
        }
        _ => LengthMod::None,
    };

    let Some(ch) = cursor.peek() else {
        return Err(FormatError::UnterminatedDirective { at });
    };
    cursor.bump();

    let conversion = match ch {
        b'd' | b'i' => Conversion::Signed,
        b'u' => Conversion::Unsigned,
        b'o' => Conversion::Octal,
        b'x' => Conversion::Hex { upper: false },
        b'X' => Conversion::Hex { upper: true },
        b'f' => Conversion::Fixed,
        b'e' => Conversion::Scientific { upper: false },
        b'E' => Conversion::Scientific { upper: true },
        b'g' => Conversion::General { upper: false },
        b'G' => Conversion::General { upper: true },
        b'c' => Conversion::Char,
        b's' => Conversion::Str,
        b'p' => Conversion::Pointer,
        b'n' => Conversion::Count,
        other => {
            return Err(FormatError::UnknownConversion {
                ch: other as char,
                at: at + cursor.pos,
            });
        }
    };

    Ok((
        ConvSpec {
            flags,
            width,
            precision,
            length,
            conversion,
        },
        cursor.pos,
    ))
}

struct Cursor<'a> {
    fmt: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn peek(&self) -> Option<u8> {
        self.fmt.get(self.pos).copied()
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Consume a (possibly empty) run of decimal digits.
    fn decimal(&mut self) -> usize {
        let mut value = 0_usize;
        while let Some(d @ b'0'..=b'9') = self.peek() {
            value = value.saturating_mul(10).saturating_add((d - b'0') as usize);
            self.bump();
        }
        value
    }
}
