//! Element types.
//!
//! An [`Element`] is one placeable content block. The kind-specific payload
//! lives in [`ElementContent`], a closed tagged union: adding a kind is a
//! compile-checked exercise across every `match` on it, never a silent
//! runtime fallthrough.

use pagecraft_richtext::{FormattedRange, ListType};
use serde::{Deserialize, Serialize};

use crate::style::ElementStyle;

/// The closed set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Heading,
    Paragraph,
    Image,
    Button,
    Container,
    TwoColumn,
    Form,
    Gallery,
    Video,
    Link,
    Table,
}

/// Absolute position carried for collaborators that lay elements out
/// freely. Always `(0, 0)` in the built-in templates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A single placeable content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: String,
    /// Owning drop zone. `None` only transiently, while the reducer is
    /// constructing or relocating the element.
    pub parent_id: Option<String>,
    pub position: Position,
    pub style: ElementStyle,
    #[serde(flatten)]
    pub content: ElementContent,
}

/// Kind-specific payload, tagged by `type` in the serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ElementContent {
    Heading(HeadingContent),
    Paragraph(ParagraphContent),
    Image(ImageContent),
    Button(ButtonContent),
    Container(ContainerContent),
    TwoColumn(TwoColumnContent),
    Form(FormContent),
    Gallery(GalleryContent),
    Video(VideoContent),
    Link(LinkContent),
    Table(TableContent),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeadingContent {
    pub content: String,
    pub formatted_ranges: Vec<FormattedRange>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParagraphContent {
    pub content: String,
    pub formatted_ranges: Vec<FormattedRange>,
    pub list_type: ListType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageContent {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonContent {
    pub label: String,
    pub link: String,
}

/// Container elements carry a child list as plain data. No command
/// currently populates it; zones stay flat.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerContent {
    pub children: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TwoColumnContent {
    pub left: Vec<String>,
    pub right: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldType {
    Text,
    Email,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormContent {
    pub fields: Vec<FormField>,
    pub submit_label: String,
    pub submit_background: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: String,
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryContent {
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoContent {
    pub url: String,
    pub title: String,
    pub controls: bool,
    pub autoplay: bool,
    #[serde(rename = "loop")]
    pub looping: bool,
    pub muted: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkContent {
    pub text: String,
    pub href: String,
    pub target: String,
    pub underlined: bool,
}

/// The `headers`/`data` matrix is the single source of truth for table
/// shape; there are no separate row/column counters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableContent {
    pub headers: Vec<String>,
    pub data: Vec<Vec<String>>,
    pub header_background: String,
    pub header_color: String,
    pub row_background: String,
    pub row_color: String,
}

impl ElementContent {
    pub fn kind(&self) -> ElementKind {
        match self {
            ElementContent::Heading(_) => ElementKind::Heading,
            ElementContent::Paragraph(_) => ElementKind::Paragraph,
            ElementContent::Image(_) => ElementKind::Image,
            ElementContent::Button(_) => ElementKind::Button,
            ElementContent::Container(_) => ElementKind::Container,
            ElementContent::TwoColumn(_) => ElementKind::TwoColumn,
            ElementContent::Form(_) => ElementKind::Form,
            ElementContent::Gallery(_) => ElementKind::Gallery,
            ElementContent::Video(_) => ElementKind::Video,
            ElementContent::Link(_) => ElementKind::Link,
            ElementContent::Table(_) => ElementKind::Table,
        }
    }
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        self.content.kind()
    }

    /// Raw text and formatting ranges, for text-bearing kinds.
    pub fn rich_text(&self) -> Option<(&str, &[FormattedRange])> {
        match &self.content {
            ElementContent::Heading(heading) => {
                Some((&heading.content, &heading.formatted_ranges))
            }
            ElementContent::Paragraph(paragraph) => {
                Some((&paragraph.content, &paragraph.formatted_ranges))
            }
            _ => None,
        }
    }

    /// List mode, for kinds that have one.
    pub fn list_type(&self) -> Option<ListType> {
        match &self.content {
            ElementContent::Paragraph(paragraph) => Some(paragraph.list_type),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_serialization() {
        let element = Element {
            id: "e-1".to_string(),
            parent_id: Some("zone-1".to_string()),
            position: Position::default(),
            style: ElementStyle::default(),
            content: ElementContent::TwoColumn(TwoColumnContent::default()),
        };

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "two-column");

        let back: Element = serde_json::from_value(json).unwrap();
        assert_eq!(back, element);
    }

    #[test]
    fn test_rich_text_accessor() {
        let heading = ElementContent::Heading(HeadingContent {
            content: "Title".to_string(),
            formatted_ranges: vec![],
        });
        let image = ElementContent::Image(ImageContent {
            src: "x.png".to_string(),
            alt: String::new(),
        });

        let make = |content| Element {
            id: "e".to_string(),
            parent_id: None,
            position: Position::default(),
            style: ElementStyle::default(),
            content,
        };

        assert!(make(heading).rich_text().is_some());
        assert!(make(image).rich_text().is_none());
    }
}
