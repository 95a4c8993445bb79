//! Integer rendering: `%d`, `%i`, `%u`, `%o`, `%x`, `%X`, `%p`.
//!
//! Magnitude and sign are produced separately so the sign/space/zero-pad
//! logic is shared across the family. Digits come from repeated division,
//! least significant first, then a reversal.
//!
//! Precision is a minimum digit count, filled with `0` independently of
//! width padding. Precision 0 with value 0 renders no digits at all.

use crate::fmt::Directive;
use crate::fmt::pad::{self, Payload};
use crate::fmt::spec::Conversion;

/// Render a signed decimal value.
pub(crate) fn signed(value: i64, d: &Directive, out: &mut Vec<u8>) {
    let sign = if value < 0 {
        Some(b'-')
    } else if d.flags.force_sign {
        Some(b'+')
    } else if d.flags.space_sign {
        Some(b' ')
    } else {
        None
    };

    let digits = magnitude_digits(value.unsigned_abs(), 10, false);
    let (zero_fill, body) = precision_fill(d, value == 0, &digits);

    pad::emit(
        out,
        d,
        Payload {
            sign,
            prefix: b"",
            zero_fill,
            body,
        },
    );
}

/// Render an unsigned value in the directive's base (`u`, `o`, `x`, `X`).
pub(crate) fn unsigned(value: u64, d: &Directive, out: &mut Vec<u8>) {
    let (base, upper) = match d.conversion {
        Conversion::Octal => (8, false),
        Conversion::Hex { upper } => (16, upper),
        _ => (10, false),
    };
    let digits = magnitude_digits(value, base, upper);
    let (mut zero_fill, body) = precision_fill(d, value == 0, &digits);

    let prefix: &[u8] = if d.flags.alt_form && value != 0 {
        match d.conversion {
            Conversion::Hex { upper: false } => b"0x",
            Conversion::Hex { upper: true } => b"0X",
            _ => b"",
        }
    } else {
        b""
    };

    // '#' on octal guarantees a leading zero digit; add one only when the
    // zero-filled digit string would not start with '0' already.
    if d.flags.alt_form && d.conversion == Conversion::Octal {
        let leading = if zero_fill > 0 {
            b'0'
        } else {
            *body.first().unwrap_or(&b' ')
        };
        if leading != b'0' {
            zero_fill += 1;
        }
    }

    pad::emit(
        out,
        d,
        Payload {
            sign: None,
            prefix,
            zero_fill,
            body,
        },
    );
}

/// Render a pointer address as `0x`-prefixed lowercase hex.
///
/// Address 0 renders as `(nil)`, space-padded only.
pub(crate) fn pointer(addr: usize, d: &Directive, out: &mut Vec<u8>) {
    if addr == 0 {
        let mut text_only = *d;
        text_only.flags.zero_pad = false;
        pad::emit(
            out,
            &text_only,
            Payload {
                body: b"(nil)",
                ..Default::default()
            },
        );
        return;
    }

    let digits = magnitude_digits(addr as u64, 16, false);
    let zero_fill = d
        .precision
        .map_or(0, |p| p.saturating_sub(digits.len()));

    pad::emit(
        out,
        d,
        Payload {
            sign: None,
            prefix: b"0x",
            zero_fill,
            body: &digits,
        },
    );
}

/// Digits of `value` in `base`, most significant first.
pub(crate) fn magnitude_digits(mut value: u64, base: u64, upper: bool) -> Vec<u8> {
    let alphabet = if upper { b'A' } else { b'a' };
    let mut digits = Vec::with_capacity(20);
    loop {
        let digit = (value % base) as u8;
        digits.push(if digit < 10 {
            b'0' + digit
        } else {
            alphabet + (digit - 10)
        });
        value /= base;
        if value == 0 {
            break;
        }
    }
    digits.reverse();
    digits
}

/// Resolve integer precision into (zero-fill count, digit body).
///
/// Precision 0 with value 0 suppresses the digit string entirely.
fn precision_fill<'a>(d: &Directive, is_zero: bool, digits: &'a [u8]) -> (usize, &'a [u8]) {
    match d.precision {
        Some(0) if is_zero => (0, b"" as &[u8]),
        Some(p) => (p.saturating_sub(digits.len()), digits),
        None => (0, digits),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fmt::spec::{ConvFlags, LengthMod};

    fn directive(conversion: Conversion) -> Directive {
        Directive {
            flags: ConvFlags::default(),
            width: 0,
            precision: None,
            length: LengthMod::None,
            conversion,
        }
    }

    fn render_signed(value: i64, d: &Directive) -> Vec<u8> {
        let mut out = Vec::new();
        signed(value, d, &mut out);
        out
    }

    fn render_unsigned(value: u64, d: &Directive) -> Vec<u8> {
        let mut out = Vec::new();
        unsigned(value, d, &mut out);
        out
    }

    #[test]
    fn test_magnitude_digits_bases() {
        assert_eq!(magnitude_digits(0, 10, false), b"0");
        assert_eq!(magnitude_digits(255, 16, false), b"ff");
        assert_eq!(magnitude_digits(255, 16, true), b"FF");
        assert_eq!(magnitude_digits(8, 8, false), b"10");
        assert_eq!(magnitude_digits(u64::MAX, 10, false), b"18446744073709551615");
    }

    #[test]
    fn test_signed_negative() {
        let d = directive(Conversion::Signed);
        assert_eq!(render_signed(-123, &d), b"-123");
    }

    #[test]
    fn test_signed_i64_min() {
        let d = directive(Conversion::Signed);
        assert_eq!(render_signed(i64::MIN, &d), b"-9223372036854775808");
    }

    #[test]
    fn test_force_sign_and_space() {
        let mut d = directive(Conversion::Signed);
        d.flags.force_sign = true;
        assert_eq!(render_signed(42, &d), b"+42");
        d.flags.force_sign = false;
        d.flags.space_sign = true;
        assert_eq!(render_signed(42, &d), b" 42");
    }

    #[test]
    fn test_precision_minimum_digits() {
        let mut d = directive(Conversion::Signed);
        d.precision = Some(5);
        assert_eq!(render_signed(-42, &d), b"-00042");
    }

    #[test]
    fn test_precision_zero_value_zero_is_empty() {
        let mut d = directive(Conversion::Signed);
        d.precision = Some(0);
        assert_eq!(render_signed(0, &d), b"");
        // Width padding still applies around the empty digit string.
        d.width = 3;
        assert_eq!(render_signed(0, &d), b"   ");
    }

    #[test]
    fn test_hex_alt_form() {
        let mut d = directive(Conversion::Hex { upper: false });
        d.flags.alt_form = true;
        assert_eq!(render_unsigned(255, &d), b"0xff");
        // No prefix for zero.
        assert_eq!(render_unsigned(0, &d), b"0");
        let mut d = directive(Conversion::Hex { upper: true });
        d.flags.alt_form = true;
        assert_eq!(render_unsigned(255, &d), b"0XFF");
    }

    #[test]
    fn test_octal_alt_form() {
        let mut d = directive(Conversion::Octal);
        d.flags.alt_form = true;
        assert_eq!(render_unsigned(8, &d), b"010");
        // Value zero already renders "0"; no doubling.
        assert_eq!(render_unsigned(0, &d), b"0");
        // Precision already forces a leading zero; no extra one.
        d.precision = Some(4);
        assert_eq!(render_unsigned(8, &d), b"0010");
    }

    #[test]
    fn test_octal_alt_form_suppressed_zero_still_prints() {
        let mut d = directive(Conversion::Octal);
        d.flags.alt_form = true;
        d.precision = Some(0);
        assert_eq!(render_unsigned(0, &d), b"0");
    }

    #[test]
    fn test_pointer() {
        let d = directive(Conversion::Pointer);
        let mut out = Vec::new();
        pointer(0xdead, &d, &mut out);
        assert_eq!(out, b"0xdead");
    }

    #[test]
    fn test_pointer_null() {
        let mut d = directive(Conversion::Pointer);
        d.width = 7;
        let mut out = Vec::new();
        pointer(0, &d, &mut out);
        assert_eq!(out, b"  (nil)");
    }

    #[test]
    fn test_round_trip_all_bases() {
        let d_oct = directive(Conversion::Octal);
        let d_hex = directive(Conversion::Hex { upper: false });
        let d_dec = directive(Conversion::Unsigned);
        for value in [0u64, 1, 7, 8, 255, 4096, u64::MAX / 3, u64::MAX] {
            for (d, base) in [(&d_oct, 8), (&d_hex, 16), (&d_dec, 10)] {
                let text = String::from_utf8(render_unsigned(value, d)).unwrap();
                assert_eq!(u64::from_str_radix(&text, base).unwrap(), value);
            }
        }
    }
}
