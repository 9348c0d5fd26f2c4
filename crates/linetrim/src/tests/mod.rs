mod buffers;
mod trimming;

use alloc::{string::String, vec::Vec};

use crate::TrimFilter;

/// Runs `input` through a character-form filter in one write.
pub(crate) fn trim_text(input: &str) -> String {
    let mut filter = TrimFilter::new(String::new());
    filter.write_str(input).unwrap();
    filter.close().unwrap()
}

/// Runs `input` through a byte-form filter in one write.
pub(crate) fn trim_bytes(input: &[u8]) -> Vec<u8> {
    let mut filter = TrimFilter::new(Vec::new());
    filter.write_all(input).unwrap();
    filter.close().unwrap()
}
