//! Floating-point rendering: `%f`, `%e`/`%E`, `%g`/`%G`.
//!
//! Digits are produced explicitly rather than delegated to `core::fmt`:
//! the integer part by repeated division (exact via `u128` for every
//! value that fits), the fractional part by a multiply-by-ten loop with
//! one guard digit. All three conversions share [`round_at`], which
//! rounds ties away from zero and propagates carries across every digit
//! position, including into a new leading digit (`9.996` at two
//! fractional digits becomes `10.00`).
//!
//! Default precision is 6 when unspecified. `%g` treats precision 0 as 1
//! and chooses fixed vs. scientific form by the C rule: fixed when the
//! decimal exponent X satisfies −4 ≤ X < P, scientific otherwise.

use crate::fmt::Directive;
use crate::fmt::int::magnitude_digits;
use crate::fmt::pad::{self, Payload};

/// Render `%f`: fixed-point decimal.
pub(crate) fn fixed(value: f64, d: &Directive, out: &mut Vec<u8>) {
    if emit_special(value, false, d, out) {
        return;
    }
    let precision = d.precision.unwrap_or(6);
    let abs = value.abs();

    let mut int_digits = integer_digits(abs);
    let mut frac_digits = fraction_digits(abs, precision + 1);
    round_at(&mut int_digits, &mut frac_digits, precision);

    let mut body = int_digits;
    if precision > 0 || d.flags.alt_form {
        body.push(b'.');
        body.extend_from_slice(&frac_digits);
    }
    emit_signed_body(value, d, body, out);
}

/// Render `%e` / `%E`: one leading digit, fraction, explicit exponent.
pub(crate) fn scientific(value: f64, upper: bool, d: &Directive, out: &mut Vec<u8>) {
    if emit_special(value, upper, d, out) {
        return;
    }
    let precision = d.precision.unwrap_or(6);
    let (digits, exp) = significant_digits(value.abs(), precision + 1);

    let mut body = vec![digits[0]];
    if precision > 0 || d.flags.alt_form {
        body.push(b'.');
        body.extend_from_slice(&digits[1..]);
    }
    body.extend_from_slice(&exponent_suffix(exp, upper));
    emit_signed_body(value, d, body, out);
}

/// Render `%g` / `%G`: fixed or scientific, whichever is shorter by the
/// exponent rule, with trailing fractional zeros stripped unless `#`.
pub(crate) fn general(value: f64, upper: bool, d: &Directive, out: &mut Vec<u8>) {
    if emit_special(value, upper, d, out) {
        return;
    }
    let p = d.precision.unwrap_or(6).max(1);
    // Style choice uses the exponent of the value as rounded to `p`
    // significant digits: 9.9 at one digit rounds to 10 and must switch
    // to scientific form.
    let (digits, exp) = significant_digits(value.abs(), p);

    let mut body;
    if exp >= -4 && exp < p as i32 {
        if exp >= 0 {
            let split = exp as usize + 1;
            body = digits[..split].to_vec();
            if split < digits.len() || d.flags.alt_form {
                body.push(b'.');
                body.extend_from_slice(&digits[split..]);
            }
        } else {
            body = vec![b'0', b'.'];
            body.resize(body.len() + (-exp - 1) as usize, b'0');
            body.extend_from_slice(&digits);
        }
        if !d.flags.alt_form {
            strip_fraction(&mut body);
        }
    } else {
        body = vec![digits[0]];
        if digits.len() > 1 || d.flags.alt_form {
            body.push(b'.');
            body.extend_from_slice(&digits[1..]);
        }
        if !d.flags.alt_form {
            strip_fraction(&mut body);
        }
        body.extend_from_slice(&exponent_suffix(exp, upper));
    }
    emit_signed_body(value, d, body, out);
}

// ---------------------------------------------------------------------------
// Digit pipeline
// ---------------------------------------------------------------------------

/// Integer-part decimal digits of a finite non-negative value, most
/// significant first. Values beyond `u128` range fall back to floating
/// division, which is deterministic but inexact in the low digits.
fn integer_digits(v: f64) -> Vec<u8> {
    if v < 1.0 {
        return vec![b'0'];
    }
    if v < u128::MAX as f64 {
        let mut n = v as u128;
        let mut digits = Vec::with_capacity(20);
        loop {
            digits.push(b'0' + (n % 10) as u8);
            n /= 10;
            if n == 0 {
                break;
            }
        }
        digits.reverse();
        return digits;
    }
    let mut n = v.trunc();
    let mut digits = Vec::new();
    while n >= 1.0 {
        digits.push(b'0' + (n % 10.0) as u8);
        n = (n / 10.0).trunc();
    }
    digits.reverse();
    digits
}

/// First `count` fractional digits of `v`.
fn fraction_digits(v: f64, count: usize) -> Vec<u8> {
    let mut frac = v.fract();
    let mut digits = Vec::with_capacity(count);
    for _ in 0..count {
        frac *= 10.0;
        let digit = frac.trunc();
        digits.push(b'0' + digit as u8);
        frac -= digit;
    }
    digits
}

/// Round so that only `keep` fractional digits remain, using the digit
/// past the cut as the guard. Ties round away from zero. The carry may
/// ripple through every fractional and integer digit and grow the
/// integer part by one position.
fn round_at(int_digits: &mut Vec<u8>, frac_digits: &mut Vec<u8>, keep: usize) {
    if frac_digits.len() <= keep {
        return;
    }
    let guard = frac_digits[keep];
    frac_digits.truncate(keep);
    if guard < b'5' {
        return;
    }
    for digit in frac_digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    for digit in int_digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    int_digits.insert(0, b'1');
}

/// Normalize a positive value to `[1, 10)`, returning its decimal exponent.
fn normalize(mut v: f64) -> (f64, i32) {
    let mut exp = 0;
    while v >= 10.0 {
        v /= 10.0;
        exp += 1;
    }
    while v < 1.0 {
        v *= 10.0;
        exp -= 1;
    }
    (v, exp)
}

/// Exactly `count` significant decimal digits of `abs`, rounded with the
/// shared rule, plus the decimal exponent of the rounded value.
fn significant_digits(abs: f64, count: usize) -> (Vec<u8>, i32) {
    if abs == 0.0 {
        return (vec![b'0'; count], 0);
    }
    let (mantissa, mut exp) = normalize(abs);
    let mut int_digits = integer_digits(mantissa);
    let mut frac_digits = fraction_digits(mantissa, count);
    round_at(&mut int_digits, &mut frac_digits, count - 1);
    if int_digits.len() > 1 {
        // Rounded up to 10.00…: every kept digit carried to zero.
        exp += 1;
        int_digits.truncate(1);
    }
    int_digits.extend_from_slice(&frac_digits);
    (int_digits, exp)
}

/// `e+NN` / `E-NN` suffix: explicit sign, at least two exponent digits.
fn exponent_suffix(exp: i32, upper: bool) -> Vec<u8> {
    let mut suffix = vec![
        if upper { b'E' } else { b'e' },
        if exp < 0 { b'-' } else { b'+' },
    ];
    let digits = magnitude_digits(u64::from(exp.unsigned_abs()), 10, false);
    if digits.len() < 2 {
        suffix.push(b'0');
    }
    suffix.extend_from_slice(&digits);
    suffix
}

/// Remove trailing fractional zeros, and the point itself when nothing
/// follows it. Leaves exponent-free bodies only; callers strip before
/// appending any exponent suffix.
fn strip_fraction(body: &mut Vec<u8>) {
    let Some(dot) = body.iter().position(|&b| b == b'.') else {
        return;
    };
    let mut end = body.len();
    while end > dot + 1 && body[end - 1] == b'0' {
        end -= 1;
    }
    if end == dot + 1 {
        end = dot;
    }
    body.truncate(end);
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

fn sign_of(negative: bool, d: &Directive) -> Option<u8> {
    if negative {
        Some(b'-')
    } else if d.flags.force_sign {
        Some(b'+')
    } else if d.flags.space_sign {
        Some(b' ')
    } else {
        None
    }
}

fn emit_signed_body(value: f64, d: &Directive, body: Vec<u8>, out: &mut Vec<u8>) {
    pad::emit(
        out,
        d,
        Payload {
            sign: sign_of(value.is_sign_negative(), d),
            prefix: b"",
            zero_fill: 0,
            body: &body,
        },
    );
}

/// Emit nan/inf if `value` is not finite. These are padded with spaces
/// only, never zeros.
fn emit_special(value: f64, upper: bool, d: &Directive, out: &mut Vec<u8>) -> bool {
    let text: &[u8] = if value.is_nan() {
        if upper { b"NAN" } else { b"nan" }
    } else if value.is_infinite() {
        if upper { b"INF" } else { b"inf" }
    } else {
        return false;
    };
    let mut text_only = *d;
    text_only.flags.zero_pad = false;
    pad::emit(
        out,
        &text_only,
        Payload {
            sign: sign_of(value.is_sign_negative() && !value.is_nan(), d),
            prefix: b"",
            zero_fill: 0,
            body: text,
        },
    );
    true
}
