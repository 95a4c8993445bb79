//! # stringforge-core
//!
//! Safe Rust reimplementations of the classic C string toolkit: a full
//! printf-family formatter plus the `<string.h>` primitives it leans on.
//!
//! The formatter replaces the C variadic calling convention with an
//! explicit, typed argument stream ([`fmt::Arg`]), so a format/argument
//! mismatch is a reported error rather than undefined memory access.
//! No `unsafe` code is permitted at the crate level.

#![deny(unsafe_code)]

pub mod errmsg;
pub mod fmt;
pub mod string;
