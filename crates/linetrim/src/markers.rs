use alloc::boxed::Box;

use crate::{error::MarkerError, unit::Unit};

const TEXTAREA_START: &str = "<textarea";
const TEXTAREA_END: &str = "</textarea";

/// The kind of verbatim region a marker pair delimits.
///
/// A single kind exists today; the tag is kept so that a second region kind
/// (for example preformatted blocks) can be added without reshaping the
/// filter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum VerbatimKind {
    /// A `<textarea` … `</textarea` region.
    TextArea,
}

/// Case-duplicated scan tables for one verbatim marker pair.
///
/// The start and end markers are each held as two parallel sequences, one
/// all-lowercase and one all-uppercase, so the scanner can match
/// case-insensitively by comparing an incoming unit against both tables at
/// the current index without per-character case folding. Both sequences of a
/// marker always have identical length.
///
/// A `Markers` value is immutable. Build it once and share it across filter
/// instances with [`alloc::sync::Arc`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers<U> {
    kind: VerbatimKind,
    start_lower: Box<[U]>,
    start_upper: Box<[U]>,
    end_lower: Box<[U]>,
    end_upper: Box<[U]>,
}

impl<U: Unit> Markers<U> {
    /// Builds marker tables from literal marker text.
    ///
    /// # Errors
    ///
    /// Returns [`MarkerError`] if either marker is empty or contains a
    /// non-ASCII character.
    pub fn new(kind: VerbatimKind, start: &str, end: &str) -> Result<Self, MarkerError> {
        for text in [start, end] {
            if text.is_empty() {
                return Err(MarkerError::Empty);
            }
            if let Some(c) = text.chars().find(|c| !c.is_ascii()) {
                return Err(MarkerError::NotAscii(c));
            }
        }
        Ok(Self::build(kind, start, end))
    }

    /// The default marker pair: `<textarea` / `</textarea`.
    ///
    /// Neither marker includes the closing `>`, so tags carrying attributes
    /// (`<textarea rows="4">`) still open a region.
    #[must_use]
    pub fn textarea() -> Self {
        Self::build(VerbatimKind::TextArea, TEXTAREA_START, TEXTAREA_END)
    }

    /// `start` and `end` are known-ASCII, non-empty.
    fn build(kind: VerbatimKind, start: &str, end: &str) -> Self {
        let table = |text: &str, f: fn(char) -> char| -> Box<[U]> {
            text.chars().map(|c| U::from_ascii_char(f(c))).collect()
        };
        Self {
            kind,
            start_lower: table(start, |c| c.to_ascii_lowercase()),
            start_upper: table(start, |c| c.to_ascii_uppercase()),
            end_lower: table(end, |c| c.to_ascii_lowercase()),
            end_upper: table(end, |c| c.to_ascii_uppercase()),
        }
    }

    /// The region kind this pair delimits.
    #[must_use]
    pub fn kind(&self) -> VerbatimKind {
        self.kind
    }

    pub(crate) fn start_len(&self) -> usize {
        self.start_lower.len()
    }

    pub(crate) fn end_len(&self) -> usize {
        self.end_lower.len()
    }

    /// The scanner resets its counter the moment a full match is reached, so
    /// `index` normally stays below the marker length. A verbatim clear can
    /// hand the start scan a larger counter inherited from an end-marker
    /// scan; out of range never matches.
    pub(crate) fn start_matches(&self, index: usize, unit: U) -> bool {
        self.start_lower.get(index) == Some(&unit) || self.start_upper.get(index) == Some(&unit)
    }

    pub(crate) fn end_matches(&self, index: usize, unit: U) -> bool {
        self.end_lower.get(index) == Some(&unit) || self.end_upper.get(index) == Some(&unit)
    }
}

impl<U: Unit> Default for Markers<U> {
    fn default() -> Self {
        Self::textarea()
    }
}
