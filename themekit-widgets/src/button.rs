themeable_element! {
    /// A button with a title.
    ///
    /// ### Theming
    /// - `backgroundColourStyleId` - the background colour.
    /// - `tintColourStyleId` - the tint colour.
    /// - `textStyleId` - the title font attributes.
    /// - `textColourStyleId` - the title colour.
    pub struct Button {
        capabilities: [Background, Tint, Text],
        refresh: Layout,
        title: String,
    }
}

impl<H: themekit_core::host::ThemeHost> Button<H> {
    /// Set the title and return self.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    background_colour_accessors!();
    tint_colour_accessors!();
    text_accessors!();
}
