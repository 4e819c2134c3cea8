//! # Style Kinds
//!
//! Style kinds are the typed, validated form of the plain string identifiers
//! that elements store. An element keeps a raw id such as `"primary"`; the
//! matching [ColourStyle] is derived from it on demand. Parsing is the single
//! normalization point between stored strings and typed styles: an unknown id
//! never produces an error, it simply yields [None].
//!
//! ## Usage
//!
//! ```rust
//! use themekit_theme::style::{ColourStyle, StyleKind, TextStyle};
//!
//! assert_eq!(ColourStyle::parse("primary"), Some(ColourStyle::Primary));
//! assert_eq!(ColourStyle::parse("Primary"), None);
//! assert_eq!(TextStyle::Headline.as_str(), "headline");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Common shape of every style kind.
///
/// A style kind is a closed enumeration whose variants round-trip through a
/// raw string identifier.
pub trait StyleKind: Copy + Eq + std::hash::Hash + fmt::Debug + 'static {
    /// Human readable name of the kind, used in log output.
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const ALL: &'static [Self];

    /// The raw identifier of this style.
    fn as_str(&self) -> &'static str;

    /// Parse a raw identifier. Unknown identifiers return [None].
    fn parse(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|style| style.as_str() == id)
    }

    /// All valid raw identifiers of this kind.
    fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(|style| style.as_str()).collect()
    }
}

/// Error returned by [FromStr] for style kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown {kind} style identifier: '{id}'")]
pub struct UnknownStyle {
    /// The kind that was being parsed.
    pub kind: &'static str,
    /// The identifier that failed to parse.
    pub id: String,
}

/// Colour styles.
///
/// These name semantic colour purposes that a [Theme](crate::theme::Theme)
/// maps to concrete colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColourStyle {
    /// The main brand colour.
    Primary,
    /// A secondary brand colour.
    Secondary,
    /// Accent for highlighted controls.
    Accent,
    /// Main background.
    Background,
    /// Background of grouped or inset content.
    SecondaryBackground,
    /// Primary text colour.
    Text,
    /// Less prominent text.
    SecondaryText,
    /// Tint of interactive controls.
    Tint,
    /// Selection highlight.
    Highlight,
    /// Separator lines.
    Separator,
    /// Errors and destructive actions.
    Error,
    /// Success states.
    Success,
}

impl StyleKind for ColourStyle {
    const KIND: &'static str = "colour";

    const ALL: &'static [Self] = &[
        ColourStyle::Primary,
        ColourStyle::Secondary,
        ColourStyle::Accent,
        ColourStyle::Background,
        ColourStyle::SecondaryBackground,
        ColourStyle::Text,
        ColourStyle::SecondaryText,
        ColourStyle::Tint,
        ColourStyle::Highlight,
        ColourStyle::Separator,
        ColourStyle::Error,
        ColourStyle::Success,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ColourStyle::Primary => "primary",
            ColourStyle::Secondary => "secondary",
            ColourStyle::Accent => "accent",
            ColourStyle::Background => "background",
            ColourStyle::SecondaryBackground => "secondaryBackground",
            ColourStyle::Text => "text",
            ColourStyle::SecondaryText => "secondaryText",
            ColourStyle::Tint => "tint",
            ColourStyle::Highlight => "highlight",
            ColourStyle::Separator => "separator",
            ColourStyle::Error => "error",
            ColourStyle::Success => "success",
        }
    }
}

/// Text styles.
///
/// Each one resolves to a set of [TextAttributes](crate::text::TextAttributes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextStyle {
    /// Large screen titles.
    LargeTitle,
    /// Titles.
    Title,
    /// Headlines.
    Headline,
    /// Subheadlines.
    Subheadline,
    /// Body text, also the base for text that only sets a colour.
    Body,
    /// Callouts.
    Callout,
    /// Captions.
    Caption,
    /// Footnotes.
    Footnote,
}

impl StyleKind for TextStyle {
    const KIND: &'static str = "text";

    const ALL: &'static [Self] = &[
        TextStyle::LargeTitle,
        TextStyle::Title,
        TextStyle::Headline,
        TextStyle::Subheadline,
        TextStyle::Body,
        TextStyle::Callout,
        TextStyle::Caption,
        TextStyle::Footnote,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TextStyle::LargeTitle => "largeTitle",
            TextStyle::Title => "title",
            TextStyle::Headline => "headline",
            TextStyle::Subheadline => "subheadline",
            TextStyle::Body => "body",
            TextStyle::Callout => "callout",
            TextStyle::Caption => "caption",
            TextStyle::Footnote => "footnote",
        }
    }
}

macro_rules! impl_style_traits {
    ($($kind:ty),*) => {$(
        impl fmt::Display for $kind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $kind {
            type Err = UnknownStyle;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$kind as StyleKind>::parse(s).ok_or_else(|| UnknownStyle {
                    kind: <$kind as StyleKind>::KIND,
                    id: s.to_string(),
                })
            }
        }

        impl Serialize for $kind {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $kind {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let id = String::deserialize(deserializer)?;
                id.parse().map_err(serde::de::Error::custom)
            }
        }
    )*};
}

impl_style_traits!(ColourStyle, TextStyle);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colour_styles_round_trip() {
        for style in ColourStyle::ALL {
            assert_eq!(ColourStyle::parse(style.as_str()), Some(*style));
        }
    }

    #[test]
    fn test_text_styles_round_trip() {
        for id in TextStyle::identifiers() {
            let style = TextStyle::parse(id).unwrap();
            assert_eq!(style.as_str(), id);
        }
    }

    #[test]
    fn test_unknown_identifiers_are_rejected() {
        assert_eq!(ColourStyle::parse(""), None);
        assert_eq!(ColourStyle::parse("PRIMARY"), None);
        assert_eq!(ColourStyle::parse("primary "), None);
        assert_eq!(TextStyle::parse("heading"), None);
    }

    #[test]
    fn test_from_str_reports_kind() {
        let err = "mauve".parse::<ColourStyle>().unwrap_err();
        assert_eq!(err.kind, "colour");
        assert_eq!(err.id, "mauve");
        assert_eq!(err.to_string(), "Unknown colour style identifier: 'mauve'");

        assert_eq!("body".parse::<TextStyle>(), Ok(TextStyle::Body));
    }

    #[test]
    fn test_identifiers_are_unique() {
        let mut ids = ColourStyle::identifiers();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ColourStyle::ALL.len());
    }
}
