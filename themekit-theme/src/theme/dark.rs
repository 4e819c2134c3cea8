use vello::peniko::Color;

use crate::style::{ColourStyle, TextStyle};
use crate::text::{FontWeight, TextAttributes};
use crate::theme::Theme;

impl Theme {
    /// The built-in dark theme, high contrast for low-light conditions.
    pub fn dark() -> Self {
        let text = Color::from_rgb8(230, 230, 230);
        let muted = Color::from_rgb8(160, 160, 160);

        Theme::new("dark")
            .with_colour(ColourStyle::Primary, Color::from_rgb8(100, 150, 255))
            .with_colour(ColourStyle::Secondary, Color::from_rgb8(180, 140, 255))
            .with_colour(ColourStyle::Accent, Color::from_rgb8(10, 132, 255))
            .with_colour(ColourStyle::Background, Color::from_rgb8(30, 30, 30))
            .with_colour(ColourStyle::SecondaryBackground, Color::from_rgb8(45, 45, 45))
            .with_colour(ColourStyle::Text, text)
            .with_colour(ColourStyle::SecondaryText, muted)
            .with_colour(ColourStyle::Tint, Color::from_rgb8(10, 132, 255))
            .with_colour(ColourStyle::Highlight, Color::from_rgb8(60, 70, 100))
            .with_colour(ColourStyle::Separator, Color::from_rgb8(80, 80, 80))
            .with_colour(ColourStyle::Error, Color::from_rgb8(255, 105, 97))
            .with_colour(ColourStyle::Success, Color::from_rgb8(50, 215, 75))
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
            .with_text(
                TextStyle::Callout,
                TextAttributes::new("sans-serif", 16.0)
                    .with_weight(FontWeight::Medium)
                    .with_colour(text),
            )
            .with_text(TextStyle::Caption, TextAttributes::new("sans-serif", 12.0).with_colour(muted))
            .with_text(TextStyle::Footnote, TextAttributes::new("sans-serif", 13.0).with_colour(muted))
    }
}
