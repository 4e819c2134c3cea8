themeable_element! {
    /// A button living in a bar.
    ///
    /// Bar items have no layout pass of their own, so a style change is
    /// applied straight away instead of waiting for layout.
    ///
    /// ### Theming
    /// - `tintColourStyleId` - the tint colour.
    /// - `textStyleId` - the title font attributes.
    /// - `textColourStyleId` - the title colour.
    pub struct BarButtonItem {
        capabilities: [Tint, Text],
        refresh: Immediate,
        title: String,
    }
}

impl<H: themekit_core::host::ThemeHost> BarButtonItem<H> {
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
}
