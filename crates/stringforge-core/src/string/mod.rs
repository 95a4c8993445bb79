//! String and memory operations.
//!
//! Safe slice-based renditions of the `<string.h>` surface, plus the
//! case/trim/insert transformations.

pub mod mem;
pub mod str;
pub mod transform;

// Re-export commonly used functions.
pub use mem::{memchr, memcmp, memcpy, memmove, memset};
pub use str::{
    strcat, strchr, strcmp, strcpy, strcspn, strlen, strncat, strncmp, strncpy, strpbrk, strrchr,
    strspn, strstr, tokens,
};
pub use transform::{insert, to_lower, to_upper, trim};
