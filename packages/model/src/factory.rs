//! Default content factories.
//!
//! [`default_element`] builds a fully valid element for any kind, and
//! [`starter_document`] builds the three built-in templates with the basic
//! template current and its seeded content in place. Everything returned
//! here satisfies the structural invariants out of the box.

use pagecraft_richtext::ListType;

use crate::document::{Document, DropZone, Template};
use crate::element::{
    ButtonContent, ContainerContent, Element, ElementContent, ElementKind, FieldType, FormContent,
    FormField, GalleryContent, GalleryImage, HeadingContent, ImageContent, LinkContent,
    ParagraphContent, Position, TableContent, TwoColumnContent, VideoContent,
};
use crate::id_generator::IdGenerator;
use crate::style::{Alignment, ElementStyle, FontWeight};

const PLACEHOLDER_IMAGE: &str =
    "https://images.unsplash.com/photo-1518791841217-8f162f1e1131?w=800";
const GALLERY_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1501785888041-af3ef285b470?w=600",
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=600",
    "https://images.unsplash.com/photo-1470071459604-3b5ec3a7fe05?w=600",
];
const VIDEO_PLACEHOLDER: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";

const ACCENT_BLUE: &str = "#3B82F6";
const BORDER_GRAY: &str = "#E5E7EB";
const TEXT_GRAY: &str = "#4B5563";

/// Margin/padding shared by every kind's default style.
fn base_style() -> ElementStyle {
    ElementStyle {
        margin: 16,
        padding: 8,
        ..Default::default()
    }
}

/// Build a default element of `kind` owned by `parent_id`.
pub fn default_element(kind: ElementKind, parent_id: &str, ids: &mut IdGenerator) -> Element {
    let id = ids.new_id();
    let (style, content) = match kind {
        ElementKind::Heading => (
            ElementStyle {
                font_size: Some("32px".to_string()),
                font_weight: Some(FontWeight::Bold),
                color: Some("#000000".to_string()),
                text_align: Some(Alignment::Left),
                ..base_style()
            },
            ElementContent::Heading(HeadingContent {
                content: "New Heading".to_string(),
                formatted_ranges: Vec::new(),
            }),
        ),
        ElementKind::Paragraph => (
            ElementStyle {
                font_size: Some("16px".to_string()),
                font_weight: Some(FontWeight::Normal),
                color: Some(TEXT_GRAY.to_string()),
                text_align: Some(Alignment::Left),
                ..base_style()
            },
            ElementContent::Paragraph(ParagraphContent {
                content: "New paragraph text. Click to edit content.".to_string(),
                formatted_ranges: Vec::new(),
                list_type: ListType::None,
            }),
        ),
        ElementKind::Image => (
            ElementStyle {
                width: Some("100%".to_string()),
                height: Some("auto".to_string()),
                border_radius: Some(4),
                ..base_style()
            },
            ElementContent::Image(ImageContent {
                src: PLACEHOLDER_IMAGE.to_string(),
                alt: "Placeholder image".to_string(),
            }),
        ),
        ElementKind::Button => (
            ElementStyle {
                background_color: Some(ACCENT_BLUE.to_string()),
                color: Some("#FFFFFF".to_string()),
                font_size: Some("16px".to_string()),
                border_radius: Some(4),
                text_align: Some(Alignment::Center),
                ..base_style()
            },
            ElementContent::Button(ButtonContent {
                label: "Button".to_string(),
                link: "#".to_string(),
            }),
        ),
        ElementKind::Container => (
            ElementStyle {
                background_color: Some("#FFFFFF".to_string()),
                border_width: Some(1),
                border_color: Some(BORDER_GRAY.to_string()),
                border_radius: Some(4),
                min_height: Some(100),
                ..base_style()
            },
            ElementContent::Container(ContainerContent::default()),
        ),
        ElementKind::TwoColumn => (
            ElementStyle {
                background_color: Some("#FFFFFF".to_string()),
                gap: Some(16),
                ..base_style()
            },
            ElementContent::TwoColumn(TwoColumnContent::default()),
        ),
        ElementKind::Form => (
            base_style(),
            ElementContent::Form(FormContent {
                fields: vec![
                    FormField {
                        id: ids.new_id(),
                        label: "Name".to_string(),
                        field_type: FieldType::Text,
                        required: true,
                    },
                    FormField {
                        id: ids.new_id(),
                        label: "Email".to_string(),
                        field_type: FieldType::Email,
                        required: true,
                    },
                    FormField {
                        id: ids.new_id(),
                        label: "Message".to_string(),
                        field_type: FieldType::Textarea,
                        required: true,
                    },
                ],
                submit_label: "Submit".to_string(),
                submit_background: ACCENT_BLUE.to_string(),
            }),
        ),
        ElementKind::Gallery => (
            ElementStyle {
                columns: Some(3),
                gap: Some(16),
                ..base_style()
            },
            ElementContent::Gallery(GalleryContent {
                images: GALLERY_IMAGES
                    .iter()
                    .map(|src| GalleryImage {
                        id: ids.new_id(),
                        src: (*src).to_string(),
                        alt: "Gallery image".to_string(),
                    })
                    .collect(),
            }),
        ),
        ElementKind::Video => (
            ElementStyle {
                width: Some("100%".to_string()),
                text_align: Some(Alignment::Center),
                border_radius: Some(4),
                ..base_style()
            },
            ElementContent::Video(VideoContent {
                url: VIDEO_PLACEHOLDER.to_string(),
                title: "Video Title".to_string(),
                controls: true,
                autoplay: false,
                looping: false,
                muted: false,
            }),
        ),
        ElementKind::Link => (
            ElementStyle {
                color: Some(ACCENT_BLUE.to_string()),
                text_align: Some(Alignment::Left),
                ..base_style()
            },
            ElementContent::Link(LinkContent {
                text: "Click Here".to_string(),
                href: "https://www.example.com".to_string(),
                target: "_blank".to_string(),
                underlined: true,
            }),
        ),
        ElementKind::Table => (
            ElementStyle {
                font_size: Some("14px".to_string()),
                width: Some("100%".to_string()),
                border_width: Some(1),
                border_color: Some(BORDER_GRAY.to_string()),
                ..base_style()
            },
            ElementContent::Table(TableContent {
                headers: (1..=3).map(|n| format!("Header {n}")).collect(),
                data: (1..=2)
                    .map(|row| (1..=3).map(|cell| format!("Row {row}, Cell {cell}")).collect())
                    .collect(),
                header_background: "#F3F4F6".to_string(),
                header_color: "#111827".to_string(),
                row_background: "#FFFFFF".to_string(),
                row_color: TEXT_GRAY.to_string(),
            }),
        ),
    };

    Element {
        id,
        parent_id: Some(parent_id.to_string()),
        position: Position::default(),
        style,
        content,
    }
}

/// Build the starter document: all three built-in templates registered,
/// the basic template current, and its seeded content in place.
pub fn starter_document(ids: &mut IdGenerator) -> Document {
    let mut document = Document {
        elements: Default::default(),
        zones: Default::default(),
        templates: Vec::new(),
        current_template_id: "template-basic".to_string(),
    };

    register_basic_template(&mut document, ids);
    register_portfolio_template(&mut document);
    register_business_template(&mut document);

    document
}

fn register_zones(document: &mut Document, id: &str, name: &str, zones: &[(&str, &str)]) {
    document.templates.push(Template {
        id: id.to_string(),
        name: name.to_string(),
        zones: zones.iter().map(|(zone_id, _)| zone_id.to_string()).collect(),
    });
    for (zone_id, zone_name) in zones {
        document
            .zones
            .insert(zone_id.to_string(), DropZone::new(*zone_id, *zone_name));
    }
}

fn seed(document: &mut Document, element: Element) {
    let zone_id = element
        .parent_id
        .clone()
        .unwrap_or_default();
    if let Some(zone) = document.zones.get_mut(&zone_id) {
        zone.children.push(element.id.clone());
    }
    document.elements.insert(element.id.clone(), element);
}

fn register_basic_template(document: &mut Document, ids: &mut IdGenerator) {
    register_zones(
        document,
        "template-basic",
        "Basic Template",
        &[
            ("basic-header", "Header"),
            ("basic-main-left", "Main Left"),
            ("basic-main-right", "Main Right"),
            ("basic-buttons", "Button Row"),
            ("basic-third", "Third Row"),
            ("basic-footer", "Footer"),
        ],
    );

    let mut welcome = default_element(ElementKind::Heading, "basic-main-left", ids);
    if let ElementContent::Heading(heading) = &mut welcome.content {
        heading.content = "Welcome to Your Website".to_string();
    }
    seed(document, welcome);

    let mut intro = default_element(ElementKind::Paragraph, "basic-main-left", ids);
    if let ElementContent::Paragraph(paragraph) = &mut intro.content {
        paragraph.content =
            "Build your page by editing this text or dropping new elements into any zone."
                .to_string();
    }
    seed(document, intro);

    let mut picture = default_element(ElementKind::Image, "basic-main-right", ids);
    picture.style.margin = 0;
    picture.style.padding = 0;
    seed(document, picture);

    let mut learn_more = default_element(ElementKind::Button, "basic-buttons", ids);
    if let ElementContent::Button(button) = &mut learn_more.content {
        button.label = "Learn More".to_string();
    }
    seed(document, learn_more);
}

fn register_portfolio_template(document: &mut Document) {
    register_zones(
        document,
        "template-portfolio",
        "Portfolio Template",
        &[
            ("portfolio-hero", "Hero"),
            ("portfolio-about", "About"),
            ("portfolio-gallery", "Gallery"),
            ("portfolio-contact", "Contact"),
            ("portfolio-footer", "Footer"),
        ],
    );
}

fn register_business_template(document: &mut Document) {
    register_zones(
        document,
        "template-business",
        "Business Template",
        &[
            ("business-nav", "Navigation"),
            ("business-hero", "Hero"),
            ("business-features", "Features"),
            ("business-pricing", "Pricing"),
            ("business-cta", "Call to Action"),
            ("business-footer", "Footer"),
        ],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> IdGenerator {
        IdGenerator::new("factory-test")
    }

    #[test]
    fn test_every_kind_produces_a_parented_element() {
        let kinds = [
            ElementKind::Heading,
            ElementKind::Paragraph,
            ElementKind::Image,
            ElementKind::Button,
            ElementKind::Container,
            ElementKind::TwoColumn,
            ElementKind::Form,
            ElementKind::Gallery,
            ElementKind::Video,
            ElementKind::Link,
            ElementKind::Table,
        ];

        let mut ids = ids();
        for kind in kinds {
            let element = default_element(kind, "zone-1", &mut ids);
            assert_eq!(element.kind(), kind);
            assert_eq!(element.parent_id.as_deref(), Some("zone-1"));
            assert_eq!(element.style.margin, 16);
            assert_eq!(element.style.padding, 8);
        }
    }

    #[test]
    fn test_heading_defaults() {
        let element = default_element(ElementKind::Heading, "zone", &mut ids());

        assert_eq!(element.style.font_weight, Some(FontWeight::Bold));
        assert_eq!(element.style.font_size.as_deref(), Some("32px"));
        assert_eq!(
            element.rich_text().map(|(text, _)| text),
            Some("New Heading")
        );
    }

    #[test]
    fn test_table_defaults_to_three_by_two_grid() {
        let element = default_element(ElementKind::Table, "zone", &mut ids());

        let ElementContent::Table(table) = &element.content else {
            panic!("expected table content");
        };
        assert_eq!(table.headers, vec!["Header 1", "Header 2", "Header 3"]);
        assert_eq!(table.data.len(), 2);
        assert_eq!(table.data[0][2], "Row 1, Cell 3");
        assert_eq!(table.data[1][0], "Row 2, Cell 1");
    }

    #[test]
    fn test_form_fields_get_unique_ids() {
        let element = default_element(ElementKind::Form, "zone", &mut ids());

        let ElementContent::Form(form) = &element.content else {
            panic!("expected form content");
        };
        assert_eq!(form.fields.len(), 3);
        assert_ne!(form.fields[0].id, form.fields[1].id);
        assert_eq!(form.fields[2].field_type, FieldType::Textarea);
        assert!(form.fields.iter().all(|field| field.required));
    }

    #[test]
    fn test_starter_document_registers_three_templates() {
        let document = starter_document(&mut ids());

        assert_eq!(document.templates.len(), 3);
        assert_eq!(document.current_template_id, "template-basic");
        assert!(document.template("template-portfolio").is_some());
        assert!(document.template("template-business").is_some());
        assert_eq!(document.validate(), Ok(()));
    }

    #[test]
    fn test_basic_template_seeded_content() {
        let document = starter_document(&mut ids());

        let main_left = &document.zones["basic-main-left"];
        assert_eq!(main_left.children.len(), 2);
        let heading = &document.elements[&main_left.children[0]];
        assert_eq!(
            heading.rich_text().map(|(text, _)| text),
            Some("Welcome to Your Website")
        );

        let main_right = &document.zones["basic-main-right"];
        assert_eq!(main_right.children.len(), 1);
        let picture = &document.elements[&main_right.children[0]];
        assert_eq!(picture.kind(), ElementKind::Image);
        // The seeded image sits flush in its column
        assert_eq!(picture.style.margin, 0);
        assert_eq!(picture.style.padding, 0);

        let buttons = &document.zones["basic-buttons"];
        assert_eq!(buttons.children.len(), 1);

        // Remaining zones start empty
        assert!(document.zones["basic-header"].children.is_empty());
        assert!(document.zones["basic-third"].children.is_empty());
        assert!(document.zones["basic-footer"].children.is_empty());
    }

    #[test]
    fn test_portfolio_and_business_zones_start_empty() {
        let document = starter_document(&mut ids());

        for template_id in ["template-portfolio", "template-business"] {
            let template = document.template(template_id).expect("template registered");
            for zone_id in &template.zones {
                assert!(document.zones[zone_id].children.is_empty());
            }
        }
    }
}
