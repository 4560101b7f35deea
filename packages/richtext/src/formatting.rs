//! Formatting primitives.

use serde::{Deserialize, Serialize};

/// Independent style flags applied to a text range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextFormatting {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
    pub subscript: bool,
    pub superscript: bool,
}

impl TextFormatting {
    /// True if no flag is set.
    pub fn is_plain(&self) -> bool {
        *self == TextFormatting::default()
    }

    /// Union of two flag sets.
    pub fn merge(&self, other: &TextFormatting) -> TextFormatting {
        TextFormatting {
            bold: self.bold || other.bold,
            italic: self.italic || other.italic,
            underline: self.underline || other.underline,
            strikethrough: self.strikethrough || other.strikethrough,
            subscript: self.subscript || other.subscript,
            superscript: self.superscript || other.superscript,
        }
    }
}

/// List rendering mode for a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListType {
    #[default]
    None,
    Ordered,
    Unordered,
}

/// A half-open `[start, end)` character interval with style flags.
///
/// Ranges are stored against a specific text value; after the text changes
/// they must be passed through [`reconcile_after_edit`] before reuse.
///
/// [`reconcile_after_edit`]: crate::reconcile_after_edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedRange {
    pub start: usize,
    pub end: usize,
    pub formatting: TextFormatting,
}

impl FormattedRange {
    pub fn new(start: usize, end: usize, formatting: TextFormatting) -> Self {
        Self {
            start,
            end,
            formatting,
        }
    }

    /// A range is renderable only if it spans at least one character and
    /// stays within `text_len` characters.
    pub fn is_valid(&self, text_len: usize) -> bool {
        self.start < self.end && self.end <= text_len
    }

    /// True if the two spans share at least one character.
    pub fn overlaps(&self, other: &FormattedRange) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// True if this range lies entirely within `other`'s span.
    pub fn contained_in(&self, other: &FormattedRange) -> bool {
        other.start <= self.start && self.end <= other.end
    }
}
