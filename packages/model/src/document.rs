//! Document aggregate and integrity checks.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::element::Element;

/// An ordered slot that owns zero or more elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropZone {
    pub id: String,
    pub name: String,
    /// Reserved for nested zones; always `None` in the built-in templates.
    pub parent_id: Option<String>,
    /// Child element ids in render order.
    pub children: Vec<String>,
}

impl DropZone {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            children: Vec::new(),
        }
    }
}

/// A named, fixed set of drop zones defining a page layout.
///
/// The zone list is established at template creation and never changes;
/// switching templates changes which zones are visible, not their contents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub zones: Vec<String>,
}

/// The persistent document: every element and zone across every template,
/// plus which template is current. Transient view state (selection,
/// preview, viewport) lives outside this type and is never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub elements: HashMap<String, Element>,
    pub zones: HashMap<String, DropZone>,
    pub templates: Vec<Template>,
    pub current_template_id: String,
}

/// A violated structural invariant, named precisely enough to debug the
/// offending entity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntegrityError {
    #[error("element {id} has no parent zone")]
    UnparentedElement { id: String },

    #[error("element {id} declares missing zone {parent}")]
    OrphanElement { id: String, parent: String },

    #[error("element {id} is not listed by its parent zone {parent}")]
    UnlistedElement { id: String, parent: String },

    #[error("zone {zone} lists missing element {child}")]
    DanglingChild { zone: String, child: String },

    #[error("zone {zone} lists element {child} more than once")]
    DuplicateChild { zone: String, child: String },

    #[error("element {id} declares parent {declared} but is listed under {actual}")]
    ParentMismatch {
        id: String,
        declared: String,
        actual: String,
    },

    #[error("template {template} references missing zone {zone}")]
    MissingTemplateZone { template: String, zone: String },

    #[error("unknown current template {id}")]
    UnknownCurrentTemplate { id: String },
}

impl Document {
    pub fn template(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn current_template(&self) -> Option<&Template> {
        self.template(&self.current_template_id)
    }

    /// Zones of the current template, in layout order.
    pub fn current_zones(&self) -> Vec<&DropZone> {
        self.current_template()
            .map(|template| {
                template
                    .zones
                    .iter()
                    .filter_map(|zone_id| self.zones.get(zone_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Check the parent/child bijection in both directions, plus template
    /// references. Returns the first violation found.
    pub fn validate(&self) -> Result<(), IntegrityError> {
        // Zone side: every listed child exists, is listed once, and points back
        for zone in self.zones.values() {
            let mut seen = HashSet::new();
            for child_id in &zone.children {
                if !seen.insert(child_id) {
                    return Err(IntegrityError::DuplicateChild {
                        zone: zone.id.clone(),
                        child: child_id.clone(),
                    });
                }
                let element = self.elements.get(child_id).ok_or_else(|| {
                    IntegrityError::DanglingChild {
                        zone: zone.id.clone(),
                        child: child_id.clone(),
                    }
                })?;
                if element.parent_id.as_deref() != Some(zone.id.as_str()) {
                    return Err(IntegrityError::ParentMismatch {
                        id: child_id.clone(),
                        declared: element
                            .parent_id
                            .clone()
                            .unwrap_or_else(|| "none".to_string()),
                        actual: zone.id.clone(),
                    });
                }
            }
        }

        // Element side: every element resolves to a zone that lists it
        for element in self.elements.values() {
            let parent_id = element.parent_id.as_deref().ok_or_else(|| {
                IntegrityError::UnparentedElement {
                    id: element.id.clone(),
                }
            })?;
            let zone =
                self.zones
                    .get(parent_id)
                    .ok_or_else(|| IntegrityError::OrphanElement {
                        id: element.id.clone(),
                        parent: parent_id.to_string(),
                    })?;
            if !zone.children.iter().any(|child| child == &element.id) {
                return Err(IntegrityError::UnlistedElement {
                    id: element.id.clone(),
                    parent: parent_id.to_string(),
                });
            }
        }

        // Template references
        for template in &self.templates {
            for zone_id in &template.zones {
                if !self.zones.contains_key(zone_id) {
                    return Err(IntegrityError::MissingTemplateZone {
                        template: template.id.clone(),
                        zone: zone_id.clone(),
                    });
                }
            }
        }
        if self.current_template().is_none() {
            return Err(IntegrityError::UnknownCurrentTemplate {
                id: self.current_template_id.clone(),
            });
        }

        Ok(())
    }
}
