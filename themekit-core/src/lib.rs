#![warn(missing_docs)]

//! Core library for ThemeKit => See `themekit` crate.
//!
//! Contains the host interface, the themeable capabilities and the dispatcher
//! that applies them.

pub use themekit_theme as theme;

/// Contains the [ThemeHost](host::ThemeHost) trait and the [RecordingHost](host::RecordingHost).
pub mod host;

/// Contains style slots, the storage behind every style id property.
pub mod slot;

/// Contains the themeable capabilities and the [CapabilitySet](capability::CapabilitySet).
pub mod capability;

/// Contains the [Themeable](themeable::Themeable) trait and per-element [ThemeState](themeable::ThemeState).
pub mod themeable;

/// Contains the [Inspectable](inspect::Inspectable) design-time surface.
pub mod inspect;

/// Contains [ElementTemplate](template::ElementTemplate) for construction from templates.
pub mod template;
