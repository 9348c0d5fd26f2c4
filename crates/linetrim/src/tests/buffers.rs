use alloc::{string::String, vec::Vec};
use core::convert::Infallible;

use rstest::rstest;

use super::trim_bytes;
use crate::{Sink, TrimFilter, TrimOptions, Unsupported};

/// Byte sink that records how output was chunked into downstream calls.
#[derive(Debug, Default)]
struct RecordingSink {
    data: Vec<u8>,
    chunks: Vec<usize>,
    flushes: usize,
    closed: bool,
}

impl Sink for RecordingSink {
    type Unit = u8;
    type Error = Infallible;

    fn write(&mut self, span: &[u8]) -> Result<(), Infallible> {
        self.chunks.push(span.len());
        self.data.extend_from_slice(span);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Infallible> {
        self.flushes += 1;
        Ok(())
    }

    fn close(&mut self) -> Result<(), Infallible> {
        self.closed = true;
        Ok(())
    }
}

/// Byte sink whose writes always fail.
#[derive(Debug)]
struct FailingSink;

impl Sink for FailingSink {
    type Unit = u8;
    type Error = &'static str;

    fn write(&mut self, _span: &[u8]) -> Result<(), &'static str> {
        Err("downstream failure")
    }
}

const INPUT: &[u8] = b"  foo\n\n\nbar\n<textarea>\n  baz\n</textarea>\nqux";

/// The buffer capacity changes how output is chunked into sink calls, never
/// the bytes delivered.
#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
#[case(4096)]
fn capacity_never_changes_the_output(#[case] capacity: usize) {
    let options = TrimOptions {
        buffer_capacity: capacity,
        ..Default::default()
    };
    let mut filter = TrimFilter::with_options(RecordingSink::default(), options);
    filter.write_all(INPUT).unwrap();
    let sink = filter.close().unwrap();
    assert_eq!(sink.data, trim_bytes(INPUT));
    assert!(sink.chunks.iter().all(|&len| len > 0 && len <= capacity));
}

#[test]
fn pending_output_coalesces_across_writes() {
    let mut filter = TrimFilter::new(RecordingSink::default());
    filter.write_all(b"  a").unwrap();
    filter.write_all(b"b\n").unwrap();
    assert!(filter.sink().chunks.is_empty());
    filter.flush().unwrap();
    let sink = filter.close().unwrap();
    assert_eq!(sink.chunks, [3]);
    assert_eq!(sink.data, b"ab\n");
    assert_eq!(sink.flushes, 1);
}

#[test]
fn close_drains_pending_units_and_closes_the_sink() {
    let mut filter = TrimFilter::new(RecordingSink::default());
    filter.write_all(b"  x").unwrap();
    let sink = filter.close().unwrap();
    assert_eq!(sink.data, b"x");
    assert!(sink.closed);
}

#[test]
fn a_full_buffer_is_written_before_the_overflowing_unit() {
    let options = TrimOptions {
        buffer_capacity: 2,
        ..Default::default()
    };
    let mut filter = TrimFilter::with_options(RecordingSink::default(), options);
    filter.write_all(b"abc").unwrap();
    // Two units fill the buffer; the third forces one full-capacity write
    // and stays pending.
    assert_eq!(filter.sink().chunks, [2]);
    let sink = filter.close().unwrap();
    assert_eq!(sink.chunks, [2, 1]);
    assert_eq!(sink.data, b"abc");
}

#[test]
fn sink_errors_propagate_from_writes() {
    let options = TrimOptions {
        buffer_capacity: 1,
        ..Default::default()
    };
    let mut filter = TrimFilter::with_options(FailingSink, options);
    filter.write_all(b"a").unwrap();
    assert_eq!(filter.write_all(b"b"), Err("downstream failure"));
}

#[test]
fn sink_errors_propagate_from_flush() {
    let mut filter = TrimFilter::new(FailingSink);
    filter.write_all(b"abc").unwrap();
    assert_eq!(filter.flush(), Err("downstream failure"));
}

#[test]
#[should_panic(expected = "buffer capacity must be nonzero")]
fn zero_capacity_is_rejected() {
    let options = TrimOptions {
        buffer_capacity: 0,
        ..Default::default()
    };
    let _ = TrimFilter::with_options(Vec::<u8>::new(), options);
}

#[test]
fn localized_numeric_output_is_unsupported() {
    let mut filter = TrimFilter::new(String::new());
    assert_eq!(filter.write_localized_number(3.25), Err(Unsupported));
}
