use alloc::sync::Arc;

use crate::{
    markers::{Markers, VerbatimKind},
    unit::Unit,
};

/// The per-unit trimming state machine.
///
/// Classifies each incoming unit as *emit* or *suppress*: leading whitespace
/// on a line is suppressed, blank lines collapse to nothing, and everything
/// between a case-insensitive start marker and the matching end marker passes
/// through untouched. Units must be presented in strict left-to-right stream
/// order; the scan state carried between calls is what makes markers and line
/// boundaries split across chunk boundaries come out right.
///
/// [`TrimFilter`](crate::TrimFilter) drives one of these per stream and adds
/// output buffering; drive a `Trimmer` directly only when the sink-adapter
/// layer does not fit.
#[derive(Debug, Clone)]
pub struct Trimmer<U: Unit> {
    markers: Arc<Markers<U>>,
    /// True until a unit other than leading whitespace is emitted on the
    /// current line.
    at_line_start: bool,
    verbatim: Option<VerbatimKind>,
    /// Units of the active marker matched so far by the most recent
    /// contiguous run of candidate units. The active marker is the start
    /// marker outside a verbatim region and the end marker inside one.
    partial_match: usize,
}

impl<U: Unit> Trimmer<U> {
    /// Creates a trimmer scanning for the given marker pair.
    #[must_use]
    pub fn new(markers: Arc<Markers<U>>) -> Self {
        Self {
            markers,
            at_line_start: true,
            verbatim: None,
            partial_match: 0,
        }
    }

    /// Processes one unit and returns whether it should be emitted.
    ///
    /// A mismatch during a marker scan resets the match counter to zero; the
    /// rejected unit is not re-tested against the start of the marker. The
    /// scan can therefore miss a marker that overlaps a near-miss (for
    /// example `<<textarea` is not detected, while `x<textarea` is). A
    /// failure-function automaton would close that gap, but the reset
    /// behavior is kept for compatibility with existing output.
    #[must_use]
    pub fn process(&mut self, unit: U) -> bool {
        if self.verbatim.is_some() {
            if self.markers.end_matches(self.partial_match, unit) {
                self.partial_match += 1;
                if self.partial_match == self.markers.end_len() {
                    self.verbatim = None;
                    self.partial_match = 0;
                }
            } else {
                self.partial_match = 0;
            }
            true
        } else if unit == U::CARRIAGE_RETURN {
            self.partial_match = 0;
            !self.at_line_start
        } else if unit == U::LINE_FEED {
            self.partial_match = 0;
            if self.at_line_start {
                // A line feed with nothing emitted on the line yet is a blank
                // line; dropping it is what collapses runs of them.
                false
            } else {
                self.at_line_start = true;
                true
            }
        } else if unit == U::SPACE || unit == U::TAB {
            self.partial_match = 0;
            !self.at_line_start
        } else {
            self.at_line_start = false;
            if self.markers.start_matches(self.partial_match, unit) {
                self.partial_match += 1;
                if self.partial_match == self.markers.start_len() {
                    self.verbatim = Some(self.markers.kind());
                    self.partial_match = 0;
                }
            } else {
                self.partial_match = 0;
            }
            true
        }
    }

    /// Whether the trimmer is currently inside a verbatim region.
    #[must_use]
    pub fn is_verbatim(&self) -> bool {
        self.verbatim.is_some()
    }

    /// Whether nothing has been emitted yet on the current line.
    #[must_use]
    pub fn at_line_start(&self) -> bool {
        self.at_line_start
    }

    /// Returns all state to its initial values, as on stream close.
    pub fn reset(&mut self) {
        self.at_line_start = true;
        self.verbatim = None;
        self.partial_match = 0;
    }

    /// Leaves verbatim mode without touching any other state.
    ///
    /// For hosts that discard previously produced output and start over.
    /// Only the verbatim flag is cleared: the line-start flag and the
    /// partial-match counter keep whatever values the discarded stream left
    /// behind, and the next units are scanned against those.
    pub fn clear_verbatim(&mut self) {
        self.verbatim = None;
    }
}
