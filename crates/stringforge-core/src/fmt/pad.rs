//! Shared padding and field assembly.
//!
//! Every renderer reduces its output to a [`Payload`] — sign, base
//! prefix, zero-fill count and digit/text body — and hands it to
//! [`emit`], which applies the directive's width. Shortfall is filled
//! with spaces (on the left unless left-justify) or, for numeric
//! conversions, with `0` placed after the sign and prefix.

use crate::fmt::Directive;
use crate::fmt::spec::Conversion;

/// Assembled pieces of one rendered fragment, in emission order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Payload<'a> {
    /// `-`, `+` or space, already chosen by the renderer.
    pub sign: Option<u8>,
    /// Alternate-form or pointer prefix (`0`, `0x`, `0X`).
    pub prefix: &'a [u8],
    /// Zero digits owed to an integer precision (minimum digit count).
    pub zero_fill: usize,
    /// Digits or text content.
    pub body: &'a [u8],
}

impl Payload<'_> {
    fn len(&self) -> usize {
        self.sign.is_some() as usize + self.prefix.len() + self.zero_fill + self.body.len()
    }
}

/// Write `payload` into `out`, padded to the directive's width.
pub fn emit(out: &mut Vec<u8>, d: &Directive, payload: Payload<'_>) {
    let shortfall = d.width.saturating_sub(payload.len());

    if d.flags.left_justify {
        write_payload(out, &payload);
        fill(out, b' ', shortfall);
        return;
    }

    if d.flags.zero_pad && zero_pad_applies(d) {
        // Zero padding goes after the sign and prefix: "-007", "0x00ff".
        if let Some(sign) = payload.sign {
            out.push(sign);
        }
        out.extend_from_slice(payload.prefix);
        fill(out, b'0', shortfall);
        fill(out, b'0', payload.zero_fill);
        out.extend_from_slice(payload.body);
        return;
    }

    fill(out, b' ', shortfall);
    write_payload(out, &payload);
}

fn write_payload(out: &mut Vec<u8>, payload: &Payload<'_>) {
    if let Some(sign) = payload.sign {
        out.push(sign);
    }
    out.extend_from_slice(payload.prefix);
    fill(out, b'0', payload.zero_fill);
    out.extend_from_slice(payload.body);
}

/// Zero padding only applies to numeric conversions, and an explicit
/// precision on an integer conversion overrides it.
fn zero_pad_applies(d: &Directive) -> bool {
    if !d.conversion.is_numeric() {
        return false;
    }
    let integer = matches!(
        d.conversion,
        Conversion::Signed
            | Conversion::Unsigned
            | Conversion::Octal
            | Conversion::Hex { .. }
            | Conversion::Pointer
    );
    !(integer && d.precision.is_some())
}

fn fill(out: &mut Vec<u8>, byte: u8, count: usize) {
    out.resize(out.len() + count, byte);
}
