themeable_element! {
    /// A text label.
    ///
    /// ### Theming
    /// - `backgroundColourStyleId` - the background colour.
    /// - `textStyleId` - the font attributes.
    /// - `textColourStyleId` - the text colour, overriding the text style's.
    pub struct Label {
        capabilities: [Background, Text],
        refresh: Layout,
        text: String,
    }
}

impl<H: themekit_core::host::ThemeHost> Label<H> {
    /// Set the text and return self.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Set the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    background_colour_accessors!();
    text_accessors!();
}
