//! A streaming output filter that removes extra whitespace at the beginning
//! of lines and completely removes blank lines, leaving the contents of
//! `<textarea>` regions untouched.
//!
//! Input may arrive in arbitrarily sized chunks; line boundaries and marker
//! tags split across chunks are still recognized, because the scan state is
//! retained between writes. Emitted units are batched in a reusable buffer so
//! that the downstream sink sees as few calls as possible.
//!
//! # Examples
//!
//! ```rust
//! use linetrim::TrimFilter;
//!
//! let mut filter = TrimFilter::new(String::new());
//! filter.write_str("  foo\n\n\nbar\n").unwrap();
//! let out = filter.close().unwrap();
//! assert_eq!(out, "foo\nbar\n");
//! ```

#![no_std]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

mod error;
mod filter;
mod markers;
mod options;
mod sink;
mod trimmer;
mod unit;

#[cfg(test)]
mod tests;

pub use error::{MarkerError, Unsupported};
pub use filter::TrimFilter;
pub use markers::{Markers, VerbatimKind};
pub use options::{LineTerminator, TrimOptions};
#[cfg(feature = "std")]
pub use sink::IoSink;
pub use sink::{FmtSink, Sink};
pub use trimmer::Trimmer;
pub use unit::Unit;
