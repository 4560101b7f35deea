//! Range set maintenance.
//!
//! The stored range set is kept overlap-free: applying formatting over a
//! span removes every existing range that touches it before the new range
//! is appended. Text edits are handled conservatively; a range that cannot
//! be proven intact is dropped rather than repaired.

use crate::formatting::FormattedRange;

/// Insert `new_range` into `ranges`, resolving overlap by removal.
///
/// Any existing range fully contained in the new span is discarded, and so
/// is any range partially overlapping it. No splitting is attempted; the
/// most recent edit wins wholesale.
pub fn add_or_update_range(
    ranges: &[FormattedRange],
    new_range: FormattedRange,
) -> Vec<FormattedRange> {
    let mut next: Vec<FormattedRange> = ranges
        .iter()
        .filter(|existing| !existing.overlaps(&new_range))
        .cloned()
        .collect();
    next.push(new_range);
    next
}

/// Drop ranges invalidated by a text edit.
///
/// A range survives only if its captured substring still occurs verbatim in
/// `new_text` and the text at its original offsets is unchanged. This is
/// deliberately lossy: an edit that shifts surrounding text invalidates
/// ranges even when the formatted span itself was untouched.
pub fn reconcile_after_edit(
    old_text: &str,
    new_text: &str,
    ranges: &[FormattedRange],
) -> Vec<FormattedRange> {
    ranges
        .iter()
        .filter(|range| range_survives(old_text, new_text, range))
        .cloned()
        .collect()
}

fn range_survives(old_text: &str, new_text: &str, range: &FormattedRange) -> bool {
    let captured = match char_slice(old_text, range.start, range.end) {
        Some(captured) => captured,
        None => return false,
    };
    if !new_text.contains(captured) {
        return false;
    }
    match char_slice(new_text, range.start, range.end) {
        Some(current) => current == captured,
        None => false,
    }
}

/// Map a character position to its byte offset in `text`.
///
/// Position `chars().count()` maps to `text.len()` so that exclusive range
/// ends resolve.
pub(crate) fn char_to_byte(text: &str, pos: usize) -> Option<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .nth(pos)
}

/// Slice `text` by character offsets. None if the interval is empty or out
/// of bounds.
pub(crate) fn char_slice(text: &str, start: usize, end: usize) -> Option<&str> {
    if start >= end {
        return None;
    }
    let byte_start = char_to_byte(text, start)?;
    let byte_end = char_to_byte(text, end)?;
    text.get(byte_start..byte_end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::TextFormatting;

    fn bold(start: usize, end: usize) -> FormattedRange {
        FormattedRange::new(
            start,
            end,
            TextFormatting {
                bold: true,
                ..Default::default()
            },
        )
    }

    fn italic(start: usize, end: usize) -> FormattedRange {
        FormattedRange::new(
            start,
            end,
            TextFormatting {
                italic: true,
                ..Default::default()
            },
        )
    }

    #[test]
    fn test_add_removes_contained_range() {
        let existing = vec![bold(2, 4)];
        let next = add_or_update_range(&existing, italic(0, 6));

        assert_eq!(next, vec![italic(0, 6)]);
    }

    #[test]
    fn test_add_removes_partially_overlapping_range() {
        let existing = vec![bold(0, 5)];
        let next = add_or_update_range(&existing, italic(3, 8));

        assert_eq!(next, vec![italic(3, 8)]);
    }

    #[test]
    fn test_add_keeps_disjoint_ranges() {
        let existing = vec![bold(0, 3), bold(10, 12)];
        let next = add_or_update_range(&existing, italic(4, 8));

        assert_eq!(next.len(), 3);
        assert_eq!(next[0], bold(0, 3));
        assert_eq!(next[1], bold(10, 12));
        assert_eq!(next[2], italic(4, 8));
    }

    #[test]
    fn test_touching_ranges_are_not_overlapping() {
        // Half-open intervals: [0,3) and [3,6) share no character
        let existing = vec![bold(0, 3)];
        let next = add_or_update_range(&existing, italic(3, 6));

        assert_eq!(next.len(), 2);
    }

    #[test]
    fn test_reconcile_preserves_untouched_span() {
        // "Hello" still sits at [0,5)
        let ranges = vec![bold(0, 5)];
        let survivors = reconcile_after_edit("Hello world", "Hello there", &ranges);

        assert_eq!(survivors, vec![bold(0, 5)]);
    }

    #[test]
    fn test_reconcile_drops_edited_span() {
        // [0,5) of "Hi world" is "Hi wo", not "Hello"
        let ranges = vec![bold(0, 5)];
        let survivors = reconcile_after_edit("Hello world", "Hi world", &ranges);

        assert!(survivors.is_empty());
    }

    #[test]
    fn test_reconcile_drops_shifted_span() {
        // The word "world" survives verbatim but no longer at [6,11);
        // the lossy strategy drops it rather than re-anchoring.
        let ranges = vec![bold(6, 11)];
        let survivors = reconcile_after_edit("Hello world", "Hey world", &ranges);

        assert!(survivors.is_empty());
    }

    #[test]
    fn test_reconcile_drops_out_of_bounds_range() {
        let ranges = vec![bold(0, 20)];
        let survivors = reconcile_after_edit("short", "short", &ranges);

        assert!(survivors.is_empty());
    }

    #[test]
    fn test_reconcile_handles_multibyte_text() {
        // Offsets are characters, so the accented prefix counts as 4
        let ranges = vec![bold(0, 4)];
        let survivors = reconcile_after_edit("héllo world", "héll", &ranges);

        assert_eq!(survivors, vec![bold(0, 4)]);
    }

    #[test]
    fn test_char_slice() {
        assert_eq!(char_slice("héllo", 0, 2), Some("hé"));
        assert_eq!(char_slice("héllo", 2, 5), Some("llo"));
        assert_eq!(char_slice("héllo", 0, 6), None);
        assert_eq!(char_slice("héllo", 3, 3), None);
    }
}
