//! Line and list handling.
//!
//! List blocks are stored as one plain string; each line renders as one
//! list item. When a user edits the raw text directly, the list mode can be
//! re-derived from line prefixes rather than forcing the caller to track it.

use crate::formatting::{FormattedRange, ListType};

/// Split `text` into lines, clipping `ranges` to each line and re-basing
/// them to line-local offsets.
///
/// A range spanning a line break contributes its intersection to each line
/// it touches.
pub fn split_lines(text: &str, ranges: &[FormattedRange]) -> Vec<(String, Vec<FormattedRange>)> {
    let mut lines = Vec::new();
    let mut offset = 0usize;

    for line in text.split('\n') {
        let line_len = line.chars().count();
        let line_end = offset + line_len;

        let mut line_ranges = Vec::new();
        for range in ranges {
            let start = range.start.max(offset);
            let end = range.end.min(line_end);
            if start < end {
                line_ranges.push(FormattedRange::new(
                    start - offset,
                    end - offset,
                    range.formatting,
                ));
            }
        }

        lines.push((line.to_string(), line_ranges));
        offset = line_end + 1; // consume the newline
    }
    lines
}

/// Infer the list mode from raw line prefixes.
///
/// Each line votes: `"N. "` prefixes vote ordered, bullet prefixes (`"• "`,
/// `"- "`, `"* "`) vote unordered, anything else votes no-list. The
/// majority wins; ties favor no-list.
pub fn infer_list_type(text: &str) -> ListType {
    let mut ordered = 0usize;
    let mut unordered = 0usize;
    let mut plain = 0usize;

    for line in text.split('\n') {
        match classify_line(line) {
            ListType::Ordered => ordered += 1,
            ListType::Unordered => unordered += 1,
            ListType::None => plain += 1,
        }
    }

    if ordered > unordered && ordered > plain {
        ListType::Ordered
    } else if unordered > ordered && unordered > plain {
        ListType::Unordered
    } else {
        ListType::None
    }
}

fn classify_line(line: &str) -> ListType {
    let trimmed = line.trim_start();

    if trimmed.starts_with("• ") || trimmed.starts_with("- ") || trimmed.starts_with("* ") {
        return ListType::Unordered;
    }

    let digit_len = trimmed.chars().take_while(|c| c.is_ascii_digit()).count();
    if digit_len > 0 && trimmed[digit_len..].starts_with(". ") {
        return ListType::Ordered;
    }

    ListType::None
}
