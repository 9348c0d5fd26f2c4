use core::fmt;

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for char {}
}

/// A buffer unit the trimming state machine can classify.
///
/// Implemented for `u8` (byte streams) and `char` (character streams). The
/// byte implementation compares each byte as if it were one character, which
/// is only correct for single-byte encodings and the ASCII subset of UTF-8;
/// multi-byte sequences pass through unharmed because no byte of one ever
/// compares equal to an ASCII marker or whitespace unit.
pub trait Unit: Copy + Eq + Default + fmt::Debug + sealed::Sealed {
    /// Carriage return (`\r`).
    const CARRIAGE_RETURN: Self;
    /// Line feed (`\n`).
    const LINE_FEED: Self;
    /// Space (`' '`).
    const SPACE: Self;
    /// Horizontal tab (`\t`).
    const TAB: Self;

    /// Converts one ASCII character into a unit.
    ///
    /// Marker and line-terminator text is validated as ASCII before this is
    /// called.
    fn from_ascii_char(c: char) -> Self;
}

impl Unit for u8 {
    const CARRIAGE_RETURN: Self = b'\r';
    const LINE_FEED: Self = b'\n';
    const SPACE: Self = b' ';
    const TAB: Self = b'\t';

    #[inline]
    fn from_ascii_char(c: char) -> Self {
        debug_assert!(c.is_ascii());
        c as u8
    }
}

impl Unit for char {
    const CARRIAGE_RETURN: Self = '\r';
    const LINE_FEED: Self = '\n';
    const SPACE: Self = ' ';
    const TAB: Self = '\t';

    #[inline]
    fn from_ascii_char(c: char) -> Self {
        debug_assert!(c.is_ascii());
        c
    }
}
