use alloc::{string::String, sync::Arc};

use quickcheck_macros::quickcheck;
use rstest::rstest;

use super::trim_text;
use crate::{LineTerminator, Markers, TrimFilter, TrimOptions, Trimmer};

#[rstest]
#[case("", "")]
#[case("foo", "foo")]
#[case("   foo", "foo")]
#[case("\t\tfoo", "foo")]
#[case(" \t foo", "foo")]
#[case("line1\n   line2", "line1\nline2")]
#[case("a  b", "a  b")]
#[case("a \n", "a \n")]
fn strips_leading_whitespace(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(trim_text(input), expected);
}

#[rstest]
#[case("\n", "")]
#[case("\n\n\n", "")]
#[case("  \n\t\n \n", "")]
#[case("a\n\n\nb", "a\nb")]
#[case("a\nb\n\n", "a\nb\n")]
#[case("a\r\n\r\n\r\nb", "a\r\nb")]
#[case("\r\n  a", "a")]
fn collapses_blank_lines(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(trim_text(input), expected);
}

/// The first line break terminating a non-empty line survives; the rest of
/// the run vanishes.
#[test]
fn keeps_the_line_break_that_ends_a_non_empty_line() {
    assert_eq!(trim_text("x\n"), "x\n");
    assert_eq!(trim_text("x\n\n"), "x\n");
    assert_eq!(trim_text("x\r\n"), "x\r\n");
}

#[test]
fn carriage_return_alone_does_not_end_the_line() {
    // A CR mid-line is emitted, but only the LF flips the line-start flag.
    assert_eq!(trim_text("a\r  b"), "a\r  b");
}

#[quickcheck]
fn trimmed_output_is_a_fixed_point(input: String) -> bool {
    let once = trim_text(&input);
    trim_text(&once) == once
}

#[test]
fn newline_is_subject_to_suppression() {
    let mut filter = TrimFilter::new(String::new());
    filter.write_str("x").unwrap();
    filter.newline().unwrap();
    // The line is now empty, so another terminator is a blank line.
    filter.newline().unwrap();
    assert_eq!(filter.close().unwrap(), "x\n");
}

#[test]
fn crlf_terminator_is_suppressed_as_a_pair() {
    let options = TrimOptions {
        line_terminator: LineTerminator::CrLf,
        ..Default::default()
    };
    let mut filter = TrimFilter::with_options(String::new(), options);
    filter.write_line('x').unwrap();
    filter.newline().unwrap();
    assert_eq!(filter.close().unwrap(), "x\r\n");
}

#[test]
fn write_line_appends_the_terminator() {
    let mut filter = TrimFilter::new(String::new());
    filter.write_line('y').unwrap();
    assert_eq!(filter.close().unwrap(), "y\n");
}

#[test]
fn trimmer_reset_returns_to_line_start() {
    let mut trimmer = Trimmer::new(Arc::new(Markers::textarea()));
    assert!(trimmer.process('a'));
    assert!(!trimmer.at_line_start());
    trimmer.reset();
    assert!(trimmer.at_line_start());
    assert!(!trimmer.is_verbatim());
    assert!(!trimmer.process(' '));
}
