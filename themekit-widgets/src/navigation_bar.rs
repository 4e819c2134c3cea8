themeable_element! {
    /// A navigation bar showing a title.
    ///
    /// ### Theming
    /// - `tintColourStyleId` - the colour of the bar's buttons.
    /// - `textStyleId` - the title font attributes.
    /// - `textColourStyleId` - the title colour.
    /// - `barTintColourStyleId` - the bar background colour.
    pub struct NavigationBar {
        capabilities: [Tint, Text, Bar],
        refresh: Layout,
        title: String,
    }
}

impl<H: themekit_core::host::ThemeHost> NavigationBar<H> {
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

    tint_colour_accessors!();
    text_accessors!();
    bar_tint_colour_accessors!();
}
