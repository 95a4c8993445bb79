//! End-to-end conformance tests for the formatting entry points,
//! exercising directive grammar, flag interplay, rounding, and the
//! C-convention buffer interface together.

use std::cell::Cell;

use stringforge_core::errmsg::{self, Platform};
use stringforge_core::fmt::{self, Arg, FormatError};

fn run(spec: &str, args: &[Arg<'_>]) -> String {
    fmt::format(spec, args).unwrap()
}

#[test]
fn sign_flags_interact_correctly() {
    assert_eq!(run("%+d", &[Arg::Int(5)]), "+5");
    assert_eq!(run("% d", &[Arg::Int(5)]), " 5");
    // '+' wins over space when both are present, in either order.
    assert_eq!(run("%+ d", &[Arg::Int(5)]), "+5");
    assert_eq!(run("% +d", &[Arg::Int(5)]), "+5");
    // Negative values carry their own sign regardless of flags.
    assert_eq!(run("%+d", &[Arg::Int(-5)]), "-5");
    assert_eq!(run("% d", &[Arg::Int(-5)]), "-5");
}

#[test]
fn zero_pad_and_left_justify() {
    assert_eq!(run("%05d", &[Arg::Int(-42)]), "-0042");
    // '-' wins over '0'.
    assert_eq!(run("%-05d|", &[Arg::Int(-42)]), "-42  |");
    // Zero padding slots in after the sign for floats too.
    assert_eq!(run("%08.2f", &[Arg::Float(-3.5)]), "-0003.50");
    // And after the base prefix.
    assert_eq!(run("%#08x", &[Arg::Uint(255)]), "0x0000ff");
}

#[test]
fn integer_precision_is_minimum_digits() {
    assert_eq!(run("%.5d", &[Arg::Int(42)]), "00042");
    assert_eq!(run("%.5d", &[Arg::Int(-42)]), "-00042");
    // Explicit precision turns the '0' flag off for integers.
    assert_eq!(run("%08.3d", &[Arg::Int(42)]), "     042");
    // Precision 0 with value 0 renders nothing, width still applies.
    assert_eq!(run("[%3.0d]", &[Arg::Int(0)]), "[   ]");
}

#[test]
fn alternate_forms() {
    assert_eq!(run("%#o", &[Arg::Uint(8)]), "010");
    assert_eq!(run("%#o", &[Arg::Uint(0)]), "0");
    assert_eq!(run("%#.4o", &[Arg::Uint(8)]), "0010");
    assert_eq!(run("%#x %#X", &[Arg::Uint(255), Arg::Uint(255)]), "0xff 0XFF");
    assert_eq!(run("%#x", &[Arg::Uint(0)]), "0");
    // '#' on %f keeps the point even at precision 0.
    assert_eq!(run("%#.0f", &[Arg::Float(3.0)]), "3.");
}

#[test]
fn fixed_point_rounding() {
    assert_eq!(run("%.2f", &[Arg::Float(9.996)]), "10.00");
    assert_eq!(run("%.0f", &[Arg::Float(0.5)]), "1");
    assert_eq!(run("%.0f", &[Arg::Float(-0.5)]), "-1");
    assert_eq!(run("%f", &[Arg::Float(0.0)]), "0.000000");
}

#[test]
fn scientific_form() {
    assert_eq!(run("%.2e", &[Arg::Float(250.0)]), "2.50e+02");
    assert_eq!(run("%.2e", &[Arg::Float(0.999999)]), "1.00e+00");
    assert_eq!(run("%.2E", &[Arg::Float(0.25)]), "2.50E-01");
    assert_eq!(run("%10.3e", &[Arg::Float(1234.5)]), " 1.235e+03");
    assert_eq!(run("%e", &[Arg::Float(0.0)]), "0.000000e+00");
}

#[test]
fn general_form_picks_style() {
    assert_eq!(run("%g", &[Arg::Float(100.0)]), "100");
    assert_eq!(run("%g", &[Arg::Float(0.0001)]), "0.0001");
    assert_eq!(run("%g", &[Arg::Float(0.00001)]), "1e-05");
    assert_eq!(run("%.1g", &[Arg::Float(9.9)]), "1e+01");
    assert_eq!(run("%G", &[Arg::Float(0.00001)]), "1E-05");
}

#[test]
fn special_float_values() {
    assert_eq!(run("%f", &[Arg::Float(f64::NAN)]), "nan");
    assert_eq!(run("%E", &[Arg::Float(f64::INFINITY)]), "INF");
    assert_eq!(run("%+f", &[Arg::Float(f64::INFINITY)]), "+inf");
    // '0' never pads specials; spaces only.
    assert_eq!(run("%08f", &[Arg::Float(f64::NEG_INFINITY)]), "    -inf");
}

#[test]
fn string_width_and_precision() {
    assert_eq!(run("%10.4s", &[Arg::Str(b"hello")]), "      hell");
    assert_eq!(run("%-10s|", &[Arg::Str(b"hello")]), "hello     |");
    assert_eq!(run("%s", &[Arg::Null]), "(null)");
}

#[test]
fn char_accepts_integer_arguments() {
    assert_eq!(run("%c", &[Arg::Char(b'A')]), "A");
    assert_eq!(run("%c", &[Arg::Int(66)]), "B");
}

#[test]
fn pointer_form() {
    assert_eq!(run("%p", &[Arg::Ptr(0x7fff_1234)]), "0x7fff1234");
    assert_eq!(run("%p", &[Arg::Null]), "(nil)");
    assert_eq!(run("%12p", &[Arg::Ptr(0xff)]), "        0xff");
}

#[test]
fn count_directive_reports_running_length() {
    let early = Cell::new(-1_i64);
    let late = Cell::new(-1_i64);
    let args = [
        Arg::Count(&early),
        Arg::Str(b"abc"),
        Arg::Int(42),
        Arg::Count(&late),
    ];
    assert_eq!(run("%nx=%s,%d%n", &args), "x=abc,42");
    assert_eq!(early.get(), 0);
    assert_eq!(late.get(), 8);
}

#[test]
fn star_width_and_precision_consume_left_to_right() {
    let args = [Arg::Int(8), Arg::Int(3), Arg::Float(3.14159)];
    assert_eq!(run("%*.*f", &args), "   3.142");
}

#[test]
fn malformed_formats_fail_closed() {
    assert!(matches!(
        fmt::format("tail%", &[]),
        Err(FormatError::UnterminatedDirective { .. })
    ));
    assert!(matches!(
        fmt::format("%y", &[]),
        Err(FormatError::UnknownConversion { ch: 'y', .. })
    ));
    assert!(matches!(
        fmt::format("%d", &[]),
        Err(FormatError::MissingArgument { .. })
    ));
    assert!(matches!(
        fmt::format("%d", &[Arg::Float(1.0)]),
        Err(FormatError::WrongArgumentKind { .. })
    ));
}

#[test]
fn sformat_matches_c_conventions() {
    // Exact fit.
    let mut buf = [0u8; 5];
    assert_eq!(fmt::sformat(&mut buf, b"%s", &[Arg::Str(b"hello")]), 5);
    assert_eq!(&buf, b"hello");

    // Truncation still reports the full logical length.
    let mut small = [0u8; 3];
    assert_eq!(fmt::sformat(&mut small, b"%d", &[Arg::Int(123456)]), 6);
    assert_eq!(&small, b"123");

    // Errors are the -1 sentinel.
    let mut buf = [0u8; 8];
    assert_eq!(fmt::sformat(&mut buf, b"%z", &[]), -1);
}

#[test]
fn formatting_is_reentrant_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                for j in 0..200 {
                    let n = i * 1000 + j;
                    let got = fmt::format(
                        "%d:%08.3f:%#x",
                        &[Arg::Int(n), Arg::Float(n as f64 / 7.0), Arg::Uint(n as u64)],
                    )
                    .unwrap();
                    assert!(got.starts_with(&format!("{n}:")));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn error_messages_compose_with_formatting() {
    let text = errmsg::error_text_for(Platform::Linux, 12);
    let got = run("errno %d: %s", &[Arg::Int(12), Arg::Str(text.as_bytes())]);
    assert_eq!(got, "errno 12: Cannot allocate memory");
}

#[test]
fn combined_report_line() {
    let args = [
        Arg::Float(3.14159),
        Arg::Int(-7),
        Arg::Uint(255),
        Arg::Float(0.0001),
    ];
    assert_eq!(
        run("%5.2f|%-5d|%#x|%g", &args),
        " 3.14|-7   |0xff|0.0001"
    );
}
