use vello::peniko::Color;

use crate::style::{ColourStyle, TextStyle};
use crate::text::{FontWeight, TextAttributes};
use crate::theme::Theme;

impl Theme {
    /// The built-in light theme, with cool blue accents on a white background.
    pub fn light() -> Self {
        let text = Color::from_rgb8(33, 33, 33);

        Theme::new("light")
            .with_colour(ColourStyle::Primary, Color::from_rgb8(100, 150, 255))
            .with_colour(ColourStyle::Secondary, Color::from_rgb8(150, 120, 230))
            .with_colour(ColourStyle::Accent, Color::from_rgb8(0, 122, 255))
            .with_colour(ColourStyle::Background, Color::from_rgb8(255, 255, 255))
            .with_colour(ColourStyle::SecondaryBackground, Color::from_rgb8(242, 242, 247))
            .with_colour(ColourStyle::Text, text)
            .with_colour(ColourStyle::SecondaryText, Color::from_rgb8(110, 110, 115))
            .with_colour(ColourStyle::Tint, Color::from_rgb8(0, 122, 255))
            .with_colour(ColourStyle::Highlight, Color::from_rgb8(220, 230, 255))
            .with_colour(ColourStyle::Separator, Color::from_rgb8(200, 200, 200))
            .with_colour(ColourStyle::Error, Color::from_rgb8(244, 67, 54))
            .with_colour(ColourStyle::Success, Color::from_rgb8(76, 175, 80))
            .with_text(
                TextStyle::LargeTitle,
                TextAttributes::new("sans-serif", 34.0)
                    .with_weight(FontWeight::Bold)
                    .with_colour(text),
            )
            .with_text(
                TextStyle::Title,
                TextAttributes::new("sans-serif", 28.0)
                    .with_weight(FontWeight::Semibold)
                    .with_colour(text),
            )
            .with_text(
                TextStyle::Headline,
                TextAttributes::new("sans-serif", 17.0)
                    .with_weight(FontWeight::Semibold)
                    .with_colour(text),
            )
            .with_text(
                TextStyle::Subheadline,
                TextAttributes::new("sans-serif", 15.0).with_colour(text),
            )
            .with_text(TextStyle::Body, TextAttributes::new("sans-serif", 17.0).with_colour(text))
            .with_text(TextStyle::Callout, TextAttributes::new("sans-serif", 16.0).with_colour(text))
            .with_text(
                TextStyle::Caption,
                TextAttributes::new("sans-serif", 12.0).with_colour(Color::from_rgb8(110, 110, 115)),
            )
            .with_text(
                TextStyle::Footnote,
                TextAttributes::new("sans-serif", 13.0).with_colour(Color::from_rgb8(110, 110, 115)),
            )
    }
}
