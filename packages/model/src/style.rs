//! Element styling.
//!
//! One style record serves every element kind: margin and padding are
//! always present, the remaining fields apply only where the kind uses
//! them. Partial updates go through [`StylePatch`] and merge key-by-key,
//! never replacing the record wholesale.

use serde::{Deserialize, Serialize};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    Normal,
    Bold,
}

/// Visual styling for one element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementStyle {
    pub margin: u32,
    pub padding: u32,
    pub font_size: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub text_align: Option<Alignment>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub border_width: Option<u32>,
    pub border_color: Option<String>,
    pub border_radius: Option<u32>,
    pub min_height: Option<u32>,
    pub gap: Option<u32>,
    pub columns: Option<u32>,
}

/// Partial style update. `None` leaves the corresponding field untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StylePatch {
    pub margin: Option<u32>,
    pub padding: Option<u32>,
    pub font_size: Option<String>,
    pub font_weight: Option<FontWeight>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub text_align: Option<Alignment>,
    pub width: Option<String>,
    pub height: Option<String>,
    pub border_width: Option<u32>,
    pub border_color: Option<String>,
    pub border_radius: Option<u32>,
    pub min_height: Option<u32>,
    pub gap: Option<u32>,
    pub columns: Option<u32>,
}

impl ElementStyle {
    /// Key-by-key merge of a partial update, returning the merged record.
    pub fn merged(&self, patch: &StylePatch) -> ElementStyle {
        let mut next = self.clone();
        if let Some(margin) = patch.margin {
            next.margin = margin;
        }
        if let Some(padding) = patch.padding {
            next.padding = padding;
        }
        if let Some(font_size) = &patch.font_size {
            next.font_size = Some(font_size.clone());
        }
        if let Some(font_weight) = patch.font_weight {
            next.font_weight = Some(font_weight);
        }
        if let Some(color) = &patch.color {
            next.color = Some(color.clone());
        }
        if let Some(background_color) = &patch.background_color {
            next.background_color = Some(background_color.clone());
        }
        if let Some(text_align) = patch.text_align {
            next.text_align = Some(text_align);
        }
        if let Some(width) = &patch.width {
            next.width = Some(width.clone());
        }
        if let Some(height) = &patch.height {
            next.height = Some(height.clone());
        }
        if let Some(border_width) = patch.border_width {
            next.border_width = Some(border_width);
        }
        if let Some(border_color) = &patch.border_color {
            next.border_color = Some(border_color.clone());
        }
        if let Some(border_radius) = patch.border_radius {
            next.border_radius = Some(border_radius);
        }
        if let Some(min_height) = patch.min_height {
            next.min_height = Some(min_height);
        }
        if let Some(gap) = patch.gap {
            next.gap = Some(gap);
        }
        if let Some(columns) = patch.columns {
            next.columns = Some(columns);
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_is_key_by_key() {
        let base = ElementStyle {
            margin: 16,
            padding: 8,
            color: Some("#000000".to_string()),
            font_size: Some("16px".to_string()),
            ..Default::default()
        };

        let patch = StylePatch {
            color: Some("#FF0000".to_string()),
            border_radius: Some(4),
            ..Default::default()
        };

        let merged = base.merged(&patch);

        // Patched fields take the new value
        assert_eq!(merged.color.as_deref(), Some("#FF0000"));
        assert_eq!(merged.border_radius, Some(4));
        // Untouched fields keep the old value
        assert_eq!(merged.margin, 16);
        assert_eq!(merged.font_size.as_deref(), Some("16px"));
    }

    #[test]
    fn test_empty_patch_is_identity() {
        let base = ElementStyle {
            margin: 16,
            padding: 8,
            text_align: Some(Alignment::Center),
            ..Default::default()
        };

        assert_eq!(base.merged(&StylePatch::default()), base);
    }
}
