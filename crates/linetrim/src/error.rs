use thiserror::Error;

/// Rejected marker text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MarkerError {
    /// Marker text must contain at least one character.
    #[error("marker text is empty")]
    Empty,
    /// The case tables compare units positionally and only hold ASCII.
    #[error("marker text must be ASCII, found {0:?}")]
    NotAscii(char),
}

/// Returned by operations that were never wired through the filter.
///
/// Locale-aware numeric formatting falls through to this error
/// unconditionally rather than silently writing unfiltered output; callers
/// must format numbers themselves before writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("localized numeric output is not implemented")]
pub struct Unsupported;
