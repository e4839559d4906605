//! # CSV Codec
//!
//! Maps one field value to a CSV-safe string and one physical line back to
//! its fields. No CSV library is involved; the dialect is deliberately narrow:
//!
//! - Every `"` in a value is doubled to `""`.
//! - The doubled value is wrapped in `"..."` only if it contains a `,`.
//!   A value with quotes but no comma is emitted as bare doubled text.
//!
//! The decoder is a single pass state machine with one `in_quotes` flag. It
//! accepts more than the encoder produces: unbalanced quotes are not an error,
//! decoding simply ends in whatever quote state it reached.
//!
//! ```text
//! Aspirin        -> Aspirin
//! Asp,irin       -> "Asp,irin"
//! "Ass"pi"r"in   -> ""Ass""pi""r""in
//! "Ass"p,i"rin   -> """Ass""p,i""rin"
//! ```

const QUOTE: char = '"';
const SEPARATOR: char = ',';

/// Encode a single field value.
pub fn encode_field(value: &str) -> String {
    let doubled = value.replace(QUOTE, "\"\"");
    if doubled.contains(SEPARATOR) {
        format!("\"{}\"", doubled)
    } else {
        doubled
    }
}

/// Encode a whole record: every field encoded, joined by `,`.
pub fn encode_record<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| encode_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode one line into its fields.
///
/// An empty line decodes to a single empty field.
pub fn decode_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE => {
                if chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            SEPARATOR if !in_quotes => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }

    fields.push(current);
    fields
}
