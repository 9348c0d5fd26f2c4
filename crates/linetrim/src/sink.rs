use alloc::{string::String, vec::Vec};
use core::{convert::Infallible, fmt};

use crate::unit::Unit;

/// The downstream consumer of emitted units.
///
/// A sink is an opaque capability: accept a contiguous span of units, flush,
/// and close. [`TrimFilter`](crate::TrimFilter) batches emitted units and
/// calls `write` with either a full buffer or the used prefix of one;
/// whether a span was a whole buffer or a bounded sub-span is carried by the
/// slice itself.
///
/// Errors raised here propagate unchanged through the filter; the filter has
/// no basis for deciding whether a downstream failure is recoverable.
pub trait Sink {
    /// The unit this sink accepts, `u8` or `char`.
    type Unit: Unit;
    /// The failure type surfaced by writes, flushes, and closes.
    type Error;

    /// Accepts a contiguous span of units.
    ///
    /// # Errors
    ///
    /// Any downstream failure.
    fn write(&mut self, span: &[Self::Unit]) -> Result<(), Self::Error>;

    /// Pushes previously accepted units onward.
    ///
    /// # Errors
    ///
    /// Any downstream failure.
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Releases the sink. No further calls are made after `close`.
    ///
    /// # Errors
    ///
    /// Any downstream failure.
    fn close(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Sink for Vec<u8> {
    type Unit = u8;
    type Error = Infallible;

    fn write(&mut self, span: &[u8]) -> Result<(), Infallible> {
        self.extend_from_slice(span);
        Ok(())
    }
}

impl Sink for String {
    type Unit = char;
    type Error = Infallible;

    fn write(&mut self, span: &[char]) -> Result<(), Infallible> {
        self.extend(span.iter().copied());
        Ok(())
    }
}

/// Adapts any [`core::fmt::Write`] into a character [`Sink`].
///
/// # Examples
///
/// ```rust
/// use linetrim::{FmtSink, TrimFilter};
///
/// let mut filter = TrimFilter::new(FmtSink::new(String::new()));
/// filter.write_str("   indented\n").unwrap();
/// let out = filter.close().unwrap().into_inner();
/// assert_eq!(out, "indented\n");
/// ```
#[derive(Debug)]
pub struct FmtSink<W> {
    inner: W,
}

impl<W: fmt::Write> FmtSink<W> {
    /// Wraps a [`core::fmt::Write`] value.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped value.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> Sink for FmtSink<W> {
    type Unit = char;
    type Error = fmt::Error;

    fn write(&mut self, span: &[char]) -> Result<(), fmt::Error> {
        for &c in span {
            self.inner.write_char(c)?;
        }
        Ok(())
    }
}

/// Adapts any [`std::io::Write`] into a byte [`Sink`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

#[cfg(feature = "std")]
impl<W: std::io::Write> IoSink<W> {
    /// Wraps a [`std::io::Write`] value.
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Returns the wrapped value.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

#[cfg(feature = "std")]
impl<W: std::io::Write> Sink for IoSink<W> {
    type Unit = u8;
    type Error = std::io::Error;

    fn write(&mut self, span: &[u8]) -> Result<(), std::io::Error> {
        self.inner.write_all(span)
    }

    fn flush(&mut self) -> Result<(), std::io::Error> {
        self.inner.flush()
    }

    fn close(&mut self) -> Result<(), std::io::Error> {
        self.inner.flush()
    }
}
