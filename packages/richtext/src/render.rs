//! Markup rendering.
//!
//! Converts raw text plus formatting ranges into HTML-flavored markup.
//! Ranges are spliced from the end of the string toward the beginning so
//! that inserted markers never invalidate the offsets of ranges still to
//! be applied.

use crate::formatting::{FormattedRange, ListType, TextFormatting};
use crate::lists::split_lines;
use crate::ranges::char_to_byte;

/// Wrap a segment in tags for each set flag, innermost first.
///
/// The order is fixed (bold, italic, underline, strikethrough, subscript,
/// superscript) so the same flag set always nests identically, independent
/// of the order ranges were inserted in.
fn wrap(segment: &str, formatting: &TextFormatting) -> String {
    let flags: [(bool, &str); 6] = [
        (formatting.bold, "strong"),
        (formatting.italic, "em"),
        (formatting.underline, "u"),
        (formatting.strikethrough, "s"),
        (formatting.subscript, "sub"),
        (formatting.superscript, "sup"),
    ];

    let mut out = segment.to_string();
    for (set, tag) in flags {
        if set {
            out = format!("<{tag}>{out}</{tag}>");
        }
    }
    out
}

/// Render `text` with `ranges` applied as markup.
///
/// Invalid ranges are skipped. Ranges sharing an identical span have their
/// flags merged before rendering, so `{0,4,bold}` plus `{0,4,italic}` comes
/// out as one well-nested `<em><strong>…</strong></em>` span.
pub fn apply_ranges(text: &str, ranges: &[FormattedRange]) -> String {
    let text_len = text.chars().count();

    let mut merged: Vec<FormattedRange> = Vec::new();
    for range in ranges {
        if !range.is_valid(text_len) {
            continue;
        }
        if let Some(existing) = merged
            .iter_mut()
            .find(|candidate| candidate.start == range.start && candidate.end == range.end)
        {
            existing.formatting = existing.formatting.merge(&range.formatting);
        } else {
            merged.push(range.clone());
        }
    }

    // Splice from the highest start down; everything before a splice point
    // is still original text, so original byte offsets stay valid.
    merged.sort_by(|a, b| b.start.cmp(&a.start));

    let mut out = text.to_string();
    for range in &merged {
        let (byte_start, byte_end) =
            match (char_to_byte(text, range.start), char_to_byte(text, range.end)) {
                (Some(byte_start), Some(byte_end)) => (byte_start, byte_end),
                _ => continue,
            };
        let segment = &text[byte_start..byte_end];
        out.replace_range(byte_start..byte_end, &wrap(segment, &range.formatting));
    }
    out
}

/// Render a full text block, wrapping lines as list items when a list mode
/// is active.
pub fn render_block(text: &str, ranges: &[FormattedRange], list_type: ListType) -> String {
    match list_type {
        ListType::None => apply_ranges(text, ranges),
        ListType::Ordered => render_list(text, ranges, "ol"),
        ListType::Unordered => render_list(text, ranges, "ul"),
    }
}

fn render_list(text: &str, ranges: &[FormattedRange], tag: &str) -> String {
    let mut out = format!("<{tag}>");
    for (line, line_ranges) in split_lines(text, ranges) {
        out.push_str("<li>");
        out.push_str(&apply_ranges(&line, &line_ranges));
        out.push_str("</li>");
    }
    out.push_str(&format!("</{tag}>"));
    out
}
