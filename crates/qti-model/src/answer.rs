//! Answer label helpers shared by validation and the codec.
//!
//! Answers reference options either by letter (`A` is the first option) or by
//! 1-based number (`1` is the first option).

/// Labels accepted by row validation: `A`-`H` or `1`-`8`.
pub const ROW_LABEL_LIMIT: usize = 8;

/// Labels accepted by the XML builder: `A`-`Z` or `1`-`26`.
pub const BUILDER_LABEL_LIMIT: usize = 26;

/// Resolves an answer label to a 0-based option index.
///
/// The label is trimmed and uppercased first. Letters map by ordinal, digit
/// strings map to `n - 1`. Returns `None` for anything outside the first
/// `limit` labels.
pub fn choice_index(label: &str, limit: usize) -> Option<usize> {
    let normalized = label.trim().to_uppercase();
    let mut chars = normalized.chars();
    let first = chars.next()?;
    if first.is_ascii_uppercase() && chars.next().is_none() {
        let index = (first as u8 - b'A') as usize;
        return (index < limit).then_some(index);
    }
    if normalized.chars().all(|ch| ch.is_ascii_digit()) {
        let number: usize = normalized.parse().ok()?;
        return (1..=limit).contains(&number).then(|| number - 1);
    }
    None
}

/// Like [`choice_index`], but only single-character labels qualify.
pub fn single_char_choice_index(label: &str, limit: usize) -> Option<usize> {
    let trimmed = label.trim();
    if trimmed.chars().count() != 1 {
        return None;
    }
    choice_index(trimmed, limit)
}

/// Letter identifier for a 0-based option position (`0` -> `A`).
pub fn choice_identifier(index: usize) -> Option<char> {
    if index < BUILDER_LABEL_LIMIT {
        Some((b'A' + index as u8) as char)
    } else {
        None
    }
}
