/// Splits `text` on `separator` and drops the final piece.
///
/// The final piece is treated as the empty tail after a trailing separator.
/// It is dropped even when the text does not end with the separator, so the
/// last real record is discarded in that case. Judged outputs always end with
/// the separator; do not change this without checking against the judge.
pub fn split_records<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    let mut records: Vec<&str> = text.split(separator).collect();
    records.pop();
    records
}

/// A delimiter is usable only when present and non-empty.
pub fn delimiter(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
