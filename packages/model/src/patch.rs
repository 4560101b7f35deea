//! Partial element updates.
//!
//! [`ElementPatch`] is the wire shape of an "update element" request: every
//! field optional, shallow-merged onto the element. Fields that do not
//! apply to the element's kind are ignored, mirroring a shallow object
//! merge. Style merges are always key-by-key via [`StylePatch`].

use pagecraft_richtext::{FormattedRange, ListType};
use serde::{Deserialize, Serialize};

use crate::element::{
    Element, ElementContent, FormField, GalleryImage, Position,
};
use crate::style::StylePatch;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementPatch {
    pub position: Option<Position>,
    pub style: Option<StylePatch>,

    // Text kinds
    pub content: Option<String>,
    pub formatted_ranges: Option<Vec<FormattedRange>>,
    pub list_type: Option<ListType>,

    // Image
    pub src: Option<String>,
    pub alt: Option<String>,

    // Button
    pub label: Option<String>,
    pub link: Option<String>,

    // Link
    pub text: Option<String>,
    pub href: Option<String>,
    pub target: Option<String>,
    pub underlined: Option<bool>,

    // Form
    pub fields: Option<Vec<FormField>>,
    pub submit_label: Option<String>,

    // Gallery
    pub images: Option<Vec<GalleryImage>>,

    // Video
    pub url: Option<String>,
    pub title: Option<String>,
    pub controls: Option<bool>,
    pub autoplay: Option<bool>,
    #[serde(rename = "loop")]
    pub looping: Option<bool>,
    pub muted: Option<bool>,

    // Table
    pub headers: Option<Vec<String>>,
    pub data: Option<Vec<Vec<String>>>,
}

impl ElementPatch {
    /// Patch that replaces a text element's content.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    /// Patch that replaces a text element's formatting ranges.
    pub fn with_ranges(ranges: Vec<FormattedRange>) -> Self {
        Self {
            formatted_ranges: Some(ranges),
            ..Default::default()
        }
    }

    /// Patch that sets a text element's list mode.
    pub fn with_list_type(list_type: ListType) -> Self {
        Self {
            list_type: Some(list_type),
            ..Default::default()
        }
    }

    /// Patch that merges style fields.
    pub fn with_style(style: StylePatch) -> Self {
        Self {
            style: Some(style),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == ElementPatch::default()
    }
}

impl Element {
    /// Shallow-merge a patch, returning the patched element. The original
    /// is untouched; aggregates are rebuilt, never mutated in place.
    pub fn patched(&self, patch: &ElementPatch) -> Element {
        let mut next = self.clone();

        if let Some(position) = patch.position {
            next.position = position;
        }
        if let Some(style_patch) = &patch.style {
            next.style = next.style.merged(style_patch);
        }

        match &mut next.content {
            ElementContent::Heading(heading) => {
                if let Some(content) = &patch.content {
                    heading.content = content.clone();
                }
                if let Some(ranges) = &patch.formatted_ranges {
                    heading.formatted_ranges = ranges.clone();
                }
            }
            ElementContent::Paragraph(paragraph) => {
                if let Some(content) = &patch.content {
                    paragraph.content = content.clone();
                }
                if let Some(ranges) = &patch.formatted_ranges {
                    paragraph.formatted_ranges = ranges.clone();
                }
                if let Some(list_type) = patch.list_type {
                    paragraph.list_type = list_type;
                }
            }
            ElementContent::Image(image) => {
                if let Some(src) = &patch.src {
                    image.src = src.clone();
                }
                if let Some(alt) = &patch.alt {
                    image.alt = alt.clone();
                }
            }
            ElementContent::Button(button) => {
                if let Some(label) = &patch.label {
                    button.label = label.clone();
                }
                if let Some(link) = &patch.link {
                    button.link = link.clone();
                }
            }
            // Child lists are structural, not patchable
            ElementContent::Container(_) | ElementContent::TwoColumn(_) => {}
            ElementContent::Form(form) => {
                if let Some(fields) = &patch.fields {
                    form.fields = fields.clone();
                }
                if let Some(submit_label) = &patch.submit_label {
                    form.submit_label = submit_label.clone();
                }
            }
            ElementContent::Gallery(gallery) => {
                if let Some(images) = &patch.images {
                    gallery.images = images.clone();
                }
            }
            ElementContent::Video(video) => {
                if let Some(url) = &patch.url {
                    video.url = url.clone();
                }
                if let Some(title) = &patch.title {
                    video.title = title.clone();
                }
                if let Some(controls) = patch.controls {
                    video.controls = controls;
                }
                if let Some(autoplay) = patch.autoplay {
                    video.autoplay = autoplay;
                }
                if let Some(looping) = patch.looping {
                    video.looping = looping;
                }
                if let Some(muted) = patch.muted {
                    video.muted = muted;
                }
            }
            ElementContent::Link(link) => {
                if let Some(text) = &patch.text {
                    link.text = text.clone();
                }
                if let Some(href) = &patch.href {
                    link.href = href.clone();
                }
                if let Some(target) = &patch.target {
                    link.target = target.clone();
                }
                if let Some(underlined) = patch.underlined {
                    link.underlined = underlined;
                }
            }
            ElementContent::Table(table) => {
                if let Some(headers) = &patch.headers {
                    table.headers = headers.clone();
                }
                if let Some(data) = &patch.data {
                    table.data = data.clone();
                }
            }
        }

        next
    }
}
