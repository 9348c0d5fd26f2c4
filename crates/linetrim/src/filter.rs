use alloc::{boxed::Box, sync::Arc, vec};

use crate::{
    error::Unsupported,
    markers::Markers,
    options::{LineTerminator, TrimOptions},
    sink::Sink,
    trimmer::Trimmer,
    unit::Unit,
};

/// A buffered trimming filter over a downstream [`Sink`].
///
/// Every written unit is classified by a [`Trimmer`]; emitted units are
/// batched in a reusable fixed-capacity buffer that is flushed to the sink
/// only when it would overflow. Units left in the buffer at the end of a
/// write stay pending so that adjacent writes coalesce into one downstream
/// call; [`flush`](Self::flush) forces them out.
///
/// A filter instance is driven by one logical thread of control for its whole
/// lifetime and performs no internal synchronization.
///
/// The byte form (`Sink<Unit = u8>`) and the character form
/// (`Sink<Unit = char>`) share this one implementation and behave
/// identically.
///
/// # Examples
///
/// ```rust
/// use linetrim::TrimFilter;
///
/// let mut filter = TrimFilter::new(Vec::new());
/// filter.write_all(b"  <ul>\n\n    <li>x</li>\n  </ul>\n").unwrap();
/// let out = filter.close().unwrap();
/// assert_eq!(out, b"<ul>\n<li>x</li>\n</ul>\n");
/// ```
#[derive(Debug)]
pub struct TrimFilter<S: Sink> {
    sink: S,
    trimmer: Trimmer<S::Unit>,
    buffer: Box<[S::Unit]>,
    used: usize,
    terminator: Box<[S::Unit]>,
}

impl<S: Sink> TrimFilter<S> {
    /// Creates a filter with the `<textarea` marker pair and default options.
    pub fn new(sink: S) -> Self {
        Self::with_options(sink, TrimOptions::default())
    }

    /// Creates a filter with the `<textarea` marker pair and the given
    /// options.
    ///
    /// # Panics
    ///
    /// Panics if `options.buffer_capacity` is zero.
    pub fn with_options(sink: S, options: TrimOptions) -> Self {
        Self::with_markers(sink, Arc::new(Markers::textarea()), options)
    }

    /// Creates a filter scanning for the given marker pair.
    ///
    /// The marker tables are shared, not copied; hosts running one filter per
    /// stream build the tables once and clone the [`Arc`].
    ///
    /// # Panics
    ///
    /// Panics if `options.buffer_capacity` is zero.
    pub fn with_markers(sink: S, markers: Arc<Markers<S::Unit>>, options: TrimOptions) -> Self {
        assert!(options.buffer_capacity > 0, "buffer capacity must be nonzero");
        let terminator: Box<[S::Unit]> = match options.line_terminator {
            LineTerminator::Lf => Box::new([S::Unit::LINE_FEED]),
            LineTerminator::CrLf => Box::new([S::Unit::CARRIAGE_RETURN, S::Unit::LINE_FEED]),
        };
        Self {
            sink,
            trimmer: Trimmer::new(markers),
            buffer: vec![S::Unit::default(); options.buffer_capacity].into_boxed_slice(),
            used: 0,
            terminator,
        }
    }

    /// Writes a single unit.
    ///
    /// # Errors
    ///
    /// Propagates sink failures unchanged.
    pub fn write_unit(&mut self, unit: S::Unit) -> Result<(), S::Error> {
        self.push(unit)
    }

    /// Writes a span of units.
    ///
    /// Chunking is irrelevant: any split of a stream into spans produces the
    /// same output, including splits through the middle of a marker tag.
    ///
    /// # Errors
    ///
    /// Propagates sink failures unchanged.
    pub fn write_all(&mut self, span: &[S::Unit]) -> Result<(), S::Error> {
        for &unit in span {
            self.push(unit)?;
        }
        Ok(())
    }

    /// Writes one unit followed by the line terminator.
    ///
    /// The terminator runs through the trimming state machine like any other
    /// units; it is not exempt from suppression.
    ///
    /// # Errors
    ///
    /// Propagates sink failures unchanged.
    pub fn write_line(&mut self, unit: S::Unit) -> Result<(), S::Error> {
        self.push(unit)?;
        self.newline()
    }

    /// Writes the line terminator.
    ///
    /// # Errors
    ///
    /// Propagates sink failures unchanged.
    pub fn newline(&mut self) -> Result<(), S::Error> {
        for i in 0..self.terminator.len() {
            let unit = self.terminator[i];
            self.push(unit)?;
        }
        Ok(())
    }

    /// Drains pending buffered units, then flushes the sink.
    ///
    /// # Errors
    ///
    /// Propagates sink failures unchanged.
    pub fn flush(&mut self) -> Result<(), S::Error> {
        self.drain()?;
        self.sink.flush()
    }

    /// Drains pending units, closes the sink, and returns it.
    ///
    /// Consuming the filter is what makes it unusable afterwards; a closed
    /// filter cannot be written to by construction.
    ///
    /// # Errors
    ///
    /// Propagates sink failures unchanged.
    pub fn close(mut self) -> Result<S, S::Error> {
        self.drain()?;
        self.sink.close()?;
        Ok(self.sink)
    }

    /// Leaves verbatim mode without touching the rest of the scan state.
    ///
    /// For hosts that discard buffered output and start over; see
    /// [`Trimmer::clear_verbatim`] for the exact (narrow) semantics.
    pub fn clear_verbatim(&mut self) {
        self.trimmer.clear_verbatim();
    }

    /// Whether the filter is currently inside a verbatim region.
    #[must_use]
    pub fn is_verbatim(&self) -> bool {
        self.trimmer.is_verbatim()
    }

    /// A shared view of the downstream sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    fn push(&mut self, unit: S::Unit) -> Result<(), S::Error> {
        if self.trimmer.process(unit) {
            if self.used == self.buffer.len() {
                self.drain()?;
            }
            self.buffer[self.used] = unit;
            self.used += 1;
        }
        Ok(())
    }

    fn drain(&mut self) -> Result<(), S::Error> {
        if self.used > 0 {
            self.sink.write(&self.buffer[..self.used])?;
            self.used = 0;
        }
        Ok(())
    }
}

impl<S: Sink<Unit = char>> TrimFilter<S> {
    /// Writes the characters of a string slice.
    ///
    /// # Errors
    ///
    /// Propagates sink failures unchanged.
    pub fn write_str(&mut self, text: &str) -> Result<(), S::Error> {
        for c in text.chars() {
            self.push(c)?;
        }
        Ok(())
    }

    /// Locale-aware numeric output.
    ///
    /// # Errors
    ///
    /// Always fails with [`Unsupported`]: no formatting locale reaches this
    /// layer, and writing the number unfiltered would silently bypass
    /// trimming. Format the value upstream and use
    /// [`write_str`](Self::write_str) instead.
    pub fn write_localized_number(&mut self, _value: f64) -> Result<(), Unsupported> {
        Err(Unsupported)
    }
}
