/// The line terminator written by [`TrimFilter::newline`] and
/// [`TrimFilter::write_line`].
///
/// The terminator units run through the trimming state machine like any other
/// write, so a terminator at the start of a blank line is still suppressed.
///
/// [`TrimFilter::newline`]: crate::TrimFilter::newline
/// [`TrimFilter::write_line`]: crate::TrimFilter::write_line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineTerminator {
    /// `\n`.
    #[default]
    Lf,
    /// `\r\n`.
    CrLf,
}

/// Configuration for a [`TrimFilter`](crate::TrimFilter).
///
/// # Examples
///
/// ```rust
/// use linetrim::{TrimFilter, TrimOptions};
///
/// let options = TrimOptions {
///     buffer_capacity: 64,
///     ..Default::default()
/// };
/// let mut filter = TrimFilter::with_options(String::new(), options);
/// filter.write_str("  x").unwrap();
/// assert_eq!(filter.close().unwrap(), "x");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimOptions {
    /// Capacity of the reusable output buffer, in units.
    ///
    /// The buffer is allocated once and flushed to the sink whenever it would
    /// overflow; the capacity changes how output is chunked into sink calls,
    /// never the output itself. Must be nonzero.
    ///
    /// # Default
    ///
    /// `4096`
    pub buffer_capacity: usize,

    /// Terminator text used by the line-oriented write conveniences.
    ///
    /// # Default
    ///
    /// [`LineTerminator::Lf`]
    pub line_terminator: LineTerminator,
}

impl Default for TrimOptions {
    fn default() -> Self {
        Self {
            buffer_capacity: 4096,
            line_terminator: LineTerminator::Lf,
        }
    }
}
