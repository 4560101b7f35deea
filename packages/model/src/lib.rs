//! # Pagecraft Model
//!
//! Content model for the page builder.
//!
//! A page document is a flat map of [`Element`]s owned by [`DropZone`]s,
//! grouped into named [`Template`]s. The model is plain data: no callbacks,
//! no cycles, fully serializable. All editing goes through the reducer in
//! `pagecraft-editor`; this crate only defines the shapes, the default
//! content factories, and the integrity checks.
//!
//! ## Structural invariant
//!
//! Every element's `parent_id` names exactly one drop zone, and that zone's
//! child list contains the element's id exactly once. [`Document::validate`]
//! checks the bijection in both directions.

mod document;
mod element;
mod factory;
mod id_generator;
mod patch;
mod style;

pub use document::{Document, DropZone, IntegrityError, Template};
pub use element::{
    ButtonContent, ContainerContent, Element, ElementContent, ElementKind, FieldType, FormContent,
    FormField, GalleryContent, GalleryImage, HeadingContent, ImageContent, LinkContent,
    ParagraphContent, Position, TableContent, TwoColumnContent, VideoContent,
};
pub use factory::{default_element, starter_document};
pub use id_generator::{session_seed, IdGenerator};
pub use patch::ElementPatch;
pub use style::{Alignment, ElementStyle, FontWeight, StylePatch};
