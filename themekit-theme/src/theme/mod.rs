//! # Themes
//!
//! A [Theme] maps style kinds to concrete rendering values: every
//! [ColourStyle] to a [Color] and every [TextStyle] to [TextAttributes].
//!
//! Lookups never panic. A style that the theme does not map returns [None],
//! and callers treat that as "leave the current value alone".
//!
//! ## Usage
//!
//! ```rust
//! use themekit_theme::theme::Theme;
//! use themekit_theme::style::ColourStyle;
//! use vello::peniko::Color;
//!
//! let theme = Theme::new("brand")
//!     .with_colour(ColourStyle::Primary, Color::from_rgb8(100, 150, 255));
//!
//! assert!(theme.colour(ColourStyle::Primary).is_some());
//! assert!(theme.colour(ColourStyle::Error).is_none());
//! ```
//!
//! Two complete built-in themes are available: [Theme::light] and
//! [Theme::dark].

use indexmap::IndexMap;
use vello::peniko::Color;

use crate::style::{ColourStyle, TextStyle};
use crate::text::TextAttributes;

/// The built-in dark theme.
pub mod dark;
/// The built-in light theme.
pub mod light;

/// A mapping from style kinds to concrete rendering values.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    name: String,
    colours: IndexMap<ColourStyle, Color>,
    text: IndexMap<TextStyle, TextAttributes>,
}

impl Theme {
    /// Create a new empty theme with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            colours: IndexMap::new(),
            text: IndexMap::new(),
        }
    }

    /// The name of the theme.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Map a colour style and return self.
    pub fn with_colour(mut self, style: ColourStyle, colour: Color) -> Self {
        self.set_colour(style, colour);
        self
    }

    /// Map a text style and return self.
    pub fn with_text(mut self, style: TextStyle, attributes: TextAttributes) -> Self {
        self.set_text(style, attributes);
        self
    }

    /// Map a colour style.
    pub fn set_colour(&mut self, style: ColourStyle, colour: Color) {
        self.colours.insert(style, colour);
    }

    /// Map a text style.
    pub fn set_text(&mut self, style: TextStyle, attributes: TextAttributes) {
        self.text.insert(style, attributes);
    }

    /// Resolve a colour style.
    pub fn colour(&self, style: ColourStyle) -> Option<Color> {
        self.colours.get(&style).copied()
    }

    /// Resolve a text style.
    pub fn text_attributes(&self, style: TextStyle) -> Option<&TextAttributes> {
        self.text.get(&style)
    }

    /// All colour mappings in insertion order.
    pub fn colours(&self) -> &IndexMap<ColourStyle, Color> {
        &self.colours
    }

    /// All text mappings in insertion order.
    pub fn text_styles(&self) -> &IndexMap<TextStyle, TextAttributes> {
        &self.text
    }

    /// Returns `true` if every [ColourStyle] and [TextStyle] is mapped.
    pub fn is_complete(&self) -> bool {
        use crate::style::StyleKind;

        ColourStyle::ALL.iter().all(|s| self.colours.contains_key(s))
            && TextStyle::ALL.iter().all(|s| self.text.contains_key(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_mappings_resolve_to_none() {
        let theme = Theme::new("empty");
        assert_eq!(theme.colour(ColourStyle::Primary), None);
        assert!(theme.text_attributes(TextStyle::Body).is_none());
        assert!(!theme.is_complete());
    }

    #[test]
    fn test_later_mapping_overrides_earlier() {
        let theme = Theme::new("t")
            .with_colour(ColourStyle::Accent, Color::from_rgb8(1, 2, 3))
            .with_colour(ColourStyle::Accent, Color::from_rgb8(4, 5, 6));

        assert_eq!(theme.colour(ColourStyle::Accent), Some(Color::from_rgb8(4, 5, 6)));
        assert_eq!(theme.colours().len(), 1);
    }

    #[test]
    fn test_builtin_themes_are_complete() {
        assert!(Theme::light().is_complete());
        assert!(Theme::dark().is_complete());
        assert_ne!(
            Theme::light().colour(ColourStyle::Background),
            Theme::dark().colour(ColourStyle::Background)
        );
    }
}
