//! Design-time inspection.
//!
//! Editors and templates address style slots by property name and read or
//! write raw string identifiers, without knowing the typed style kinds behind
//! them. Every [Themeable] element gets this surface through [Inspectable].

use indexmap::IndexMap;
use thiserror::Error;

use crate::themeable::Themeable;

/// An error from the inspection surface.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InspectError {
    /// The element declares no slot with this property name.
    #[error("Unknown inspectable property '{property}'")]
    UnknownProperty {
        /// The property name that was requested.
        property: String,
    },
}

impl InspectError {
    fn unknown_property(property: &str) -> Self {
        Self::UnknownProperty {
            property: property.to_string(),
        }
    }
}

/// String-keyed access to the style slots of a [Themeable] element.
pub trait Inspectable {
    /// Every inspectable property name, in capability order.
    fn inspectable_properties(&self) -> Vec<&'static str>;

    /// The raw style id stored under a property.
    fn style_id(&self, property: &str) -> Option<&str>;

    /// Store a raw style id under a property, marking the element dirty if it changed.
    ///
    /// Unknown ids are stored as given and resolve to no style.
    fn set_style_id(&mut self, property: &str, id: Option<&str>) -> Result<(), InspectError>;

    /// A snapshot of every property and its raw id.
    fn style_ids(&self) -> IndexMap<&'static str, Option<String>>;

    /// The ids a property can resolve, for pick lists.
    fn known_style_ids(&self, property: &str) -> Result<Vec<&'static str>, InspectError>;
}

impl<T: Themeable + ?Sized> Inspectable for T {
    fn inspectable_properties(&self) -> Vec<&'static str> {
        self.theme_state().capabilities().properties()
    }

    fn style_id(&self, property: &str) -> Option<&str> {
        self.theme_state().capabilities().style_id(property)
    }

    fn set_style_id(&mut self, property: &str, id: Option<&str>) -> Result<(), InspectError> {
        let changed = self
            .theme_state_mut()
            .capabilities_mut()
            .set_style_id(property, id)
            .ok_or_else(|| InspectError::unknown_property(property))?;

        self.mark_style_changed(changed);
        Ok(())
    }

    fn style_ids(&self) -> IndexMap<&'static str, Option<String>> {
        self.theme_state()
            .capabilities()
            .iter()
            .flat_map(|capability| capability.slots())
            .map(|slot| (slot.property(), slot.id().map(str::to_string)))
            .collect()
    }

    fn known_style_ids(&self, property: &str) -> Result<Vec<&'static str>, InspectError> {
        self.theme_state()
            .capabilities()
            .slot(property)
            .map(|slot| slot.known_ids())
            .ok_or_else(|| InspectError::unknown_property(property))
    }
}
