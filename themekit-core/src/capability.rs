//! # Themeable Capabilities
//!
//! A capability is one independent theming behaviour an element can have:
//! a background colour, a tint colour, text attributes, a thumb tint or a bar
//! tint. Each capability owns its style slots and knows how to push resolved
//! values to the matching [ThemeHost] primitive.
//!
//! Elements declare their capabilities up front in a [CapabilitySet]. The set
//! is the only thing the dispatcher looks at: a capability that is not in the
//! set is never applied and never touches its host primitive.
//!
//! ## Application Order
//!
//! Capabilities are applied in [CapabilityKind] order:
//!
//! ```text
//! Background -> Tint -> Text -> ThumbTint -> Bar
//! ```
//!
//! Capabilities do not depend on each other; the order only keeps host call
//! sequences deterministic.
//!
//! ## Usage
//!
//! ```rust
//! use themekit_core::capability::{
//!     BackgroundColourThemeable, CapabilityKind, CapabilitySet, TextThemeable,
//! };
//!
//! let set = CapabilitySet::new()
//!     .with(TextThemeable::new())
//!     .with(BackgroundColourThemeable::new());
//!
//! assert_eq!(set.kinds(), vec![CapabilityKind::Background, CapabilityKind::Text]);
//! assert!(!set.supports(CapabilityKind::Tint));
//! ```
//!
//! ## Missing Values
//!
//! When a slot has no style, or its id is unknown, or the theme has no
//! mapping for the style, the capability does nothing and the host keeps its
//! current value. No capability ever falls back to a hardcoded default.

use std::fmt;

use themekit_theme::style::{ColourStyle, TextStyle};
use themekit_theme::text::TextAttributes;
use themekit_theme::theme::Theme;

use crate::host::ThemeHost;
use crate::slot::{AnyStyleSlot, SlotKey, StyleSlot};

/// The kinds of capability, in application order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityKind {
    /// Background colour.
    Background,
    /// Tint colour.
    Tint,
    /// Text attributes and text colour.
    Text,
    /// Thumb tint colour.
    ThumbTint,
    /// Bar tint colour.
    Bar,
}

impl CapabilityKind {
    /// Every kind, in application order.
    pub const ALL: [CapabilityKind; 5] = [
        CapabilityKind::Background,
        CapabilityKind::Tint,
        CapabilityKind::Text,
        CapabilityKind::ThumbTint,
        CapabilityKind::Bar,
    ];

    /// The name of the capability.
    pub fn as_str(&self) -> &'static str {
        match self {
            CapabilityKind::Background => "BackgroundColourThemeable",
            CapabilityKind::Tint => "TintColourThemeable",
            CapabilityKind::Text => "TextThemeable",
            CapabilityKind::ThumbTint => "ThumbTintColourThemeable",
            CapabilityKind::Bar => "BarThemeable",
        }
    }
}

impl fmt::Display for CapabilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defines a capability that resolves a single colour style onto one host primitive.
macro_rules! colour_capability {
    (
        $(#[$meta:meta])*
        $name:ident, $property:literal, $host_fn:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            style: StyleSlot<ColourStyle>,
        }

        impl $name {
            /// The slot of this capability.
            pub const STYLE: SlotKey<ColourStyle> = SlotKey::new($property);

            /// Create the capability with no style set.
            pub fn new() -> Self {
                Self {
                    style: StyleSlot::new($property),
                }
            }

            /// Create the capability with the given style.
            pub fn with_style(style: ColourStyle) -> Self {
                let mut capability = Self::new();
                capability.style.set_style(Some(style));
                capability
            }

            /// The typed style.
            pub fn style(&self) -> Option<ColourStyle> {
                self.style.style()
            }

            /// Set the typed style. Returns `true` if it changed.
            pub fn set_style(&mut self, style: Option<ColourStyle>) -> bool {
                self.style.set_style(style)
            }

            /// The raw style identifier.
            pub fn style_id(&self) -> Option<&str> {
                self.style.id()
            }

            /// Set the raw style identifier. Returns `true` if it changed.
            pub fn set_style_id(&mut self, id: Option<&str>) -> bool {
                self.style.set_id(id)
            }

            /// Push the resolved colour to the host, if the style resolves.
            pub fn apply(&self, theme: &Theme, host: &mut dyn ThemeHost) {
                if let Some(colour) = self.style().and_then(|style| theme.colour(style)) {
                    host.$host_fn(colour);
                }
            }

            fn slots(&self) -> Vec<&dyn AnyStyleSlot> {
                vec![&self.style]
            }

            fn slots_mut(&mut self) -> Vec<&mut dyn AnyStyleSlot> {
                vec![&mut self.style]
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

colour_capability!(
    /// Themes the background colour of an element.
    BackgroundColourThemeable,
    "backgroundColourStyleId",
    set_background_colour
);

colour_capability!(
    /// Themes the tint colour of an element.
    TintColourThemeable,
    "tintColourStyleId",
    set_tint_colour
);

colour_capability!(
    /// Themes the thumb tint colour of an element, such as a slider knob.
    ThumbTintColourThemeable,
    "thumbTintColourStyleId",
    set_thumb_tint_colour
);

colour_capability!(
    /// Themes the bar tint colour of a bar element.
    BarThemeable,
    "barTintColourStyleId",
    set_bar_tint_colour
);

/// Themes the text of an element.
///
/// Two slots: the text style picks the attributes, the text colour style
/// overrides their colour. With only a text colour set, the theme's
/// [TextStyle::Body] attributes carry it. A text style the theme cannot
/// resolve leaves the host untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextThemeable {
    text_style: StyleSlot<TextStyle>,
    text_colour_style: StyleSlot<ColourStyle>,
}

impl TextThemeable {
    /// The text style slot.
    pub const TEXT_STYLE: SlotKey<TextStyle> = SlotKey::new("textStyleId");
    /// The text colour slot.
    pub const TEXT_COLOUR_STYLE: SlotKey<ColourStyle> = SlotKey::new("textColourStyleId");

    /// Create the capability with no styles set.
    pub fn new() -> Self {
        Self {
            text_style: StyleSlot::new(Self::TEXT_STYLE.property()),
            text_colour_style: StyleSlot::new(Self::TEXT_COLOUR_STYLE.property()),
        }
    }

    /// Create the capability with the given text style.
    pub fn with_style(style: TextStyle) -> Self {
        let mut capability = Self::new();
        capability.text_style.set_style(Some(style));
        capability
    }

    /// The typed text style.
    pub fn style(&self) -> Option<TextStyle> {
        self.text_style.style()
    }

    /// Set the typed text style. Returns `true` if it changed.
    pub fn set_style(&mut self, style: Option<TextStyle>) -> bool {
        self.text_style.set_style(style)
    }

    /// The raw text style identifier.
    pub fn style_id(&self) -> Option<&str> {
        self.text_style.id()
    }

    /// Set the raw text style identifier. Returns `true` if it changed.
    pub fn set_style_id(&mut self, id: Option<&str>) -> bool {
        self.text_style.set_id(id)
    }

    /// The typed text colour style.
    pub fn colour_style(&self) -> Option<ColourStyle> {
        self.text_colour_style.style()
    }

    /// Set the typed text colour style. Returns `true` if it changed.
    pub fn set_colour_style(&mut self, style: Option<ColourStyle>) -> bool {
        self.text_colour_style.set_style(style)
    }

    /// The raw text colour style identifier.
    pub fn colour_style_id(&self) -> Option<&str> {
        self.text_colour_style.id()
    }

    /// Set the raw text colour style identifier. Returns `true` if it changed.
    pub fn set_colour_style_id(&mut self, id: Option<&str>) -> bool {
        self.text_colour_style.set_id(id)
    }

    /// Resolve the attributes this capability would push, if any.
    ///
    /// A text style that is set but does not resolve yields [None] even when
    /// the colour resolves, so the host keeps its current font. The
    /// [TextStyle::Body] base is only used when no text style is set, and only
    /// if the theme maps it.
    pub fn resolve(&self, theme: &Theme) -> Option<TextAttributes> {
        let colour = self.colour_style().and_then(|style| theme.colour(style));

        let mut attributes = match self.style_id() {
            Some(_) => self.style().and_then(|style| theme.text_attributes(style))?,
            None => theme.text_attributes(TextStyle::Body).filter(|_| colour.is_some())?,
        }
        .clone();

        if colour.is_some() {
            attributes.colour = colour;
        }
        Some(attributes)
    }

    /// Push the resolved attributes to the host, if anything resolves.
    pub fn apply(&self, theme: &Theme, host: &mut dyn ThemeHost) {
        if let Some(attributes) = self.resolve(theme) {
            host.set_text_attributes(&attributes);
        }
    }

    fn slots(&self) -> Vec<&dyn AnyStyleSlot> {
        vec![&self.text_style, &self.text_colour_style]
    }

    fn slots_mut(&mut self) -> Vec<&mut dyn AnyStyleSlot> {
        vec![&mut self.text_style, &mut self.text_colour_style]
    }
}

impl Default for TextThemeable {
    fn default() -> Self {
        Self::new()
    }
}

/// One declared capability of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// See [BackgroundColourThemeable].
    Background(BackgroundColourThemeable),
    /// See [TintColourThemeable].
    Tint(TintColourThemeable),
    /// See [TextThemeable].
    Text(TextThemeable),
    /// See [ThumbTintColourThemeable].
    ThumbTint(ThumbTintColourThemeable),
    /// See [BarThemeable].
    Bar(BarThemeable),
}

impl Capability {
    /// The kind of this capability.
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Capability::Background(_) => CapabilityKind::Background,
            Capability::Tint(_) => CapabilityKind::Tint,
            Capability::Text(_) => CapabilityKind::Text,
            Capability::ThumbTint(_) => CapabilityKind::ThumbTint,
            Capability::Bar(_) => CapabilityKind::Bar,
        }
    }

    /// Create an empty capability of the given kind.
    pub fn empty(kind: CapabilityKind) -> Self {
        match kind {
            CapabilityKind::Background => BackgroundColourThemeable::new().into(),
            CapabilityKind::Tint => TintColourThemeable::new().into(),
            CapabilityKind::Text => TextThemeable::new().into(),
            CapabilityKind::ThumbTint => ThumbTintColourThemeable::new().into(),
            CapabilityKind::Bar => BarThemeable::new().into(),
        }
    }

    /// Push this capability's resolved values to the host.
    pub fn apply(&self, theme: &Theme, host: &mut dyn ThemeHost) {
        match self {
            Capability::Background(capability) => capability.apply(theme, host),
            Capability::Tint(capability) => capability.apply(theme, host),
            Capability::Text(capability) => capability.apply(theme, host),
            Capability::ThumbTint(capability) => capability.apply(theme, host),
            Capability::Bar(capability) => capability.apply(theme, host),
        }
    }

    /// The style slots of this capability.
    pub fn slots(&self) -> Vec<&dyn AnyStyleSlot> {
        match self {
            Capability::Background(capability) => capability.slots(),
            Capability::Tint(capability) => capability.slots(),
            Capability::Text(capability) => capability.slots(),
            Capability::ThumbTint(capability) => capability.slots(),
            Capability::Bar(capability) => capability.slots(),
        }
    }

    /// The style slots of this capability, mutably.
    pub fn slots_mut(&mut self) -> Vec<&mut dyn AnyStyleSlot> {
        match self {
            Capability::Background(capability) => capability.slots_mut(),
            Capability::Tint(capability) => capability.slots_mut(),
            Capability::Text(capability) => capability.slots_mut(),
            Capability::ThumbTint(capability) => capability.slots_mut(),
            Capability::Bar(capability) => capability.slots_mut(),
        }
    }
}

macro_rules! impl_from_capability {
    ($($variant:ident($ty:ty)),*) => {$(
        impl From<$ty> for Capability {
            fn from(capability: $ty) -> Self {
                Capability::$variant(capability)
            }
        }
    )*};
}

impl_from_capability!(
    Background(BackgroundColourThemeable),
    Tint(TintColourThemeable),
    Text(TextThemeable),
    ThumbTint(ThumbTintColourThemeable),
    Bar(BarThemeable)
);

impl From<CapabilityKind> for Capability {
    fn from(kind: CapabilityKind) -> Self {
        Capability::empty(kind)
    }
}

/// The ordered set of capabilities an element declares.
///
/// Holds at most one capability per [CapabilityKind], always sorted in
/// application order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapabilitySet {
    capabilities: Vec<Capability>,
}

macro_rules! typed_access {
    ($get:ident, $get_mut:ident, $variant:ident, $ty:ty) => {
        /// Typed access to the capability, if declared.
        pub fn $get(&self) -> Option<&$ty> {
            match self.get(CapabilityKind::$variant) {
                Some(Capability::$variant(capability)) => Some(capability),
                _ => None,
            }
        }

        /// Typed mutable access to the capability, if declared.
        pub fn $get_mut(&mut self) -> Option<&mut $ty> {
            match self.get_mut(CapabilityKind::$variant) {
                Some(Capability::$variant(capability)) => Some(capability),
                _ => None,
            }
        }
    };
}

impl CapabilitySet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a set with an empty capability of each given kind.
    pub fn of(kinds: &[CapabilityKind]) -> Self {
        kinds.iter().fold(Self::new(), |set, kind| set.with(*kind))
    }

    /// Add a capability and return self.
    pub fn with(mut self, capability: impl Into<Capability>) -> Self {
        self.insert(capability);
        self
    }

    /// Add a capability, returning the one it replaced if the kind was
    /// already declared.
    pub fn insert(&mut self, capability: impl Into<Capability>) -> Option<Capability> {
        let capability = capability.into();
        match self
            .capabilities
            .binary_search_by_key(&capability.kind(), Capability::kind)
        {
            Ok(index) => Some(std::mem::replace(&mut self.capabilities[index], capability)),
            Err(index) => {
                self.capabilities.insert(index, capability);
                None
            },
        }
    }

    fn index_of(&self, kind: CapabilityKind) -> Option<usize> {
        self.capabilities
            .binary_search_by_key(&kind, Capability::kind)
            .ok()
    }

    /// Returns `true` if the kind is declared.
    pub fn supports(&self, kind: CapabilityKind) -> bool {
        self.get(kind).is_some()
    }

    /// The capability of the given kind, if declared.
    pub fn get(&self, kind: CapabilityKind) -> Option<&Capability> {
        let index = self.index_of(kind)?;
        self.capabilities.get(index)
    }

    /// The capability of the given kind, if declared, mutably.
    pub fn get_mut(&mut self, kind: CapabilityKind) -> Option<&mut Capability> {
        let index = self.index_of(kind)?;
        self.capabilities.get_mut(index)
    }

    typed_access!(background, background_mut, Background, BackgroundColourThemeable);
    typed_access!(tint, tint_mut, Tint, TintColourThemeable);
    typed_access!(text, text_mut, Text, TextThemeable);
    typed_access!(thumb_tint, thumb_tint_mut, ThumbTint, ThumbTintColourThemeable);
    typed_access!(bar, bar_mut, Bar, BarThemeable);

    /// Iterate the capabilities in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Capability> {
        self.capabilities.iter()
    }

    /// The declared kinds in application order.
    pub fn kinds(&self) -> Vec<CapabilityKind> {
        self.capabilities.iter().map(Capability::kind).collect()
    }

    /// Number of declared capabilities.
    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    /// Returns `true` if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }

    /// Every slot property name, in application order.
    pub fn properties(&self) -> Vec<&'static str> {
        self.capabilities
            .iter()
            .flat_map(Capability::slots)
            .map(|slot| slot.property())
            .collect()
    }

    /// The slot with the given property name.
    pub fn slot(&self, property: &str) -> Option<&dyn AnyStyleSlot> {
        self.capabilities
            .iter()
            .flat_map(Capability::slots)
            .find(|slot| slot.property() == property)
    }

    /// The slot with the given property name, mutably.
    pub fn slot_mut(&mut self, property: &str) -> Option<&mut dyn AnyStyleSlot> {
        self.capabilities
            .iter_mut()
            .flat_map(Capability::slots_mut)
            .find(|slot| slot.property() == property)
    }

    /// The raw style identifier stored under a property.
    ///
    /// [None] both when the property is unknown and when it is unset; use
    /// [CapabilitySet::slot] to tell the two apart.
    pub fn style_id(&self, property: &str) -> Option<&str> {
        self.slot(property).and_then(|slot| slot.id())
    }

    /// Store a raw identifier under a property.
    ///
    /// Returns [None] if no declared capability has the property, otherwise
    /// whether the value changed.
    pub fn set_style_id(&mut self, property: &str, id: Option<&str>) -> Option<bool> {
        self.slot_mut(property).map(|slot| slot.set_id(id))
    }

    /// Apply every declared capability in order.
    pub fn apply(&self, theme: &Theme, host: &mut dyn ThemeHost) {
        for capability in &self.capabilities {
            log::trace!("Applying {} from theme '{}'", capability.kind(), theme.name());
            capability.apply(theme, host);
        }
    }
}

impl<C: Into<Capability>> FromIterator<C> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |set, capability| set.with(capability))
    }
}

impl<'a> IntoIterator for &'a CapabilitySet {
    type Item = &'a Capability;
    type IntoIter = std::slice::Iter<'a, Capability>;

    fn into_iter(self) -> Self::IntoIter {
        self.capabilities.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::{HostCall, RecordingHost};
    use themekit_theme::style::StyleKind;
    use themekit_theme::text::FontWeight;
    use vello::peniko::Color;

    fn theme() -> Theme {
        Theme::new("test")
            .with_colour(ColourStyle::Primary, Color::from_rgb8(10, 20, 30))
            .with_colour(ColourStyle::Accent, Color::from_rgb8(40, 50, 60))
            .with_text(TextStyle::Body, TextAttributes::new("serif", 12.0))
            .with_text(
                TextStyle::Headline,
                TextAttributes::new("serif", 20.0).with_weight(FontWeight::Bold),
            )
    }

    #[test]
    fn test_set_is_kept_in_application_order() {
        let set = CapabilitySet::new()
            .with(BarThemeable::new())
            .with(TextThemeable::new())
            .with(BackgroundColourThemeable::new())
            .with(ThumbTintColourThemeable::new())
            .with(TintColourThemeable::new());

        assert_eq!(set.kinds(), CapabilityKind::ALL.to_vec());
    }

    #[test]
    fn test_insert_replaces_same_kind() {
        let mut set = CapabilitySet::new().with(BackgroundColourThemeable::with_style(ColourStyle::Primary));
        let replaced = set.insert(BackgroundColourThemeable::with_style(ColourStyle::Accent));

        assert_eq!(set.len(), 1);
        assert_eq!(set.background().unwrap().style(), Some(ColourStyle::Accent));
        assert!(matches!(replaced, Some(Capability::Background(_))));
    }

    #[test]
    fn test_properties_follow_capability_order() {
        let set = CapabilitySet::of(&[CapabilityKind::Bar, CapabilityKind::Text, CapabilityKind::Tint]);
        assert_eq!(
            set.properties(),
            vec![
                "tintColourStyleId",
                "textStyleId",
                "textColourStyleId",
                "barTintColourStyleId"
            ]
        );
    }

    #[test]
    fn test_slot_keys_name_their_capability_slots() {
        let set = CapabilitySet::of(&CapabilityKind::ALL);
        let keys = [
            BackgroundColourThemeable::STYLE.property(),
            TintColourThemeable::STYLE.property(),
            TextThemeable::TEXT_STYLE.property(),
            TextThemeable::TEXT_COLOUR_STYLE.property(),
            ThumbTintColourThemeable::STYLE.property(),
            BarThemeable::STYLE.property(),
        ];

        assert_eq!(set.properties(), keys.to_vec());
        assert_eq!(
            set.slot(TextThemeable::TEXT_STYLE.property()).unwrap().known_ids(),
            TextStyle::identifiers()
        );
    }

    #[test]
    fn test_set_style_id_by_property() {
        let mut set = CapabilitySet::of(&[CapabilityKind::Background]);

        assert_eq!(set.set_style_id("backgroundColourStyleId", Some("primary")), Some(true));
        assert_eq!(set.set_style_id("backgroundColourStyleId", Some("primary")), Some(false));
        assert_eq!(set.set_style_id("tintColourStyleId", Some("primary")), None);
        assert_eq!(set.style_id("backgroundColourStyleId"), Some("primary"));
    }

    #[test]
    fn test_colour_capability_applies_resolved_colour() {
        let mut host = RecordingHost::new();
        TintColourThemeable::with_style(ColourStyle::Accent).apply(&theme(), &mut host);
        assert_eq!(host.calls(), &[HostCall::TintColour(Color::from_rgb8(40, 50, 60))]);
    }

    #[test]
    fn test_unresolved_colour_is_a_no_op() {
        let mut host = RecordingHost::new();

        BackgroundColourThemeable::new().apply(&theme(), &mut host);
        BackgroundColourThemeable::with_style(ColourStyle::Error).apply(&theme(), &mut host);

        let mut bogus = BackgroundColourThemeable::new();
        bogus.set_style_id(Some("bogus"));
        bogus.apply(&theme(), &mut host);

        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_text_colour_overrides_attributes() {
        let mut text = TextThemeable::with_style(TextStyle::Headline);
        text.set_colour_style(Some(ColourStyle::Primary));

        let attributes = text.resolve(&theme()).unwrap();
        assert_eq!(attributes.size, 20.0);
        assert_eq!(attributes.weight, FontWeight::Bold);
        assert_eq!(attributes.colour, Some(Color::from_rgb8(10, 20, 30)));
    }

    #[test]
    fn test_text_colour_alone_uses_body() {
        let mut text = TextThemeable::new();
        text.set_colour_style_id(Some("accent"));

        let attributes = text.resolve(&theme()).unwrap();
        assert_eq!(attributes.family, "serif");
        assert_eq!(attributes.size, 12.0);
        assert_eq!(attributes.colour, Some(Color::from_rgb8(40, 50, 60)));
    }

    #[test]
    fn test_unmapped_text_style_keeps_host_font() {
        let mut host = RecordingHost::new();
        let mut text = TextThemeable::with_style(TextStyle::Caption);
        text.set_colour_style(Some(ColourStyle::Accent));

        text.apply(&theme(), &mut host);

        let mut unknown = TextThemeable::new();
        unknown.set_style_id(Some("display"));
        unknown.set_colour_style(Some(ColourStyle::Accent));
        unknown.apply(&theme(), &mut host);

        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_text_colour_alone_without_body_is_a_no_op() {
        let theme = Theme::new("no-body")
            .with_colour(ColourStyle::Accent, Color::from_rgb8(40, 50, 60))
            .with_text(TextStyle::Headline, TextAttributes::new("serif", 20.0));

        let mut host = RecordingHost::new();
        let mut text = TextThemeable::new();
        text.set_colour_style(Some(ColourStyle::Accent));
        text.apply(&theme, &mut host);

        assert!(host.calls().is_empty());
    }

    #[test]
    fn test_text_without_styles_is_a_no_op() {
        let mut host = RecordingHost::new();
        TextThemeable::new().apply(&theme(), &mut host);
        assert!(host.calls().is_empty());
    }
}
