use vello::peniko::Color;

/// Font weight of a text style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Medium weight.
    Medium,
    /// Semibold weight.
    Semibold,
    /// Bold weight.
    Bold,
}

/// The concrete attributes a [TextStyle](crate::style::TextStyle) resolves to.
///
/// `colour` is optional: when it is [None] the host keeps whatever text colour
/// it already uses.
#[derive(Debug, Clone, PartialEq)]
pub struct TextAttributes {
    /// The font family name.
    pub family: String,
    /// The point size.
    pub size: f32,
    /// The font weight.
    pub weight: FontWeight,
    /// The text colour, if the style carries one.
    pub colour: Option<Color>,
}

impl TextAttributes {
    /// Create attributes for the given family and size with regular weight and no colour.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::Regular,
            colour: None,
        }
    }

    /// Set the weight and return self.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Set the colour and return self.
    pub fn with_colour(mut self, colour: Color) -> Self {
        self.colour = Some(colour);
        self
    }
}

impl Default for TextAttributes {
    fn default() -> Self {
        Self::new("sans-serif", 14.0)
    }
}
