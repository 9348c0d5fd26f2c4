#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use linetrim::{TrimFilter, TrimOptions};

#[derive(Debug, Arbitrary)]
struct Plan {
    text: String,
    splits: Vec<usize>,
    capacity: u16,
}

fuzz_target!(|plan: Plan| {
    let Plan {
        text,
        splits,
        capacity,
    } = plan;

    // Reference: character form, whole input in one write.
    let mut whole = TrimFilter::new(String::new());
    whole.write_str(&text).unwrap();
    let expected = whole.close().unwrap();

    // Chunked writes with an arbitrary buffer capacity must match.
    let options = TrimOptions {
        buffer_capacity: usize::from(capacity) + 1,
        ..Default::default()
    };
    let mut chunked = TrimFilter::with_options(String::new(), options);
    let chars: Vec<char> = text.chars().collect();
    let mut idx = 0;
    let mut remaining = chars.len();
    for s in splits {
        if remaining == 0 {
            break;
        }
        let size = 1 + (s % remaining);
        let chunk: String = chars[idx..idx + size].iter().collect();
        chunked.write_str(&chunk).unwrap();
        idx += size;
        remaining -= size;
    }
    if remaining > 0 {
        let chunk: String = chars[idx..].iter().collect();
        chunked.write_str(&chunk).unwrap();
    }
    assert_eq!(chunked.close().unwrap(), expected);

    // The byte form must agree on the UTF-8 encoding of the same stream.
    let mut bytes = TrimFilter::new(Vec::new());
    bytes.write_all(text.as_bytes()).unwrap();
    assert_eq!(bytes.close().unwrap(), expected.as_bytes());

    // Trimmed output is a fixed point.
    let mut again = TrimFilter::new(String::new());
    again.write_str(&expected).unwrap();
    assert_eq!(again.close().unwrap(), expected);
});
