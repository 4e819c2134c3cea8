themeable_element! {
    /// A plain rectangular element with a themeable background.
    ///
    /// ### Theming
    /// - `backgroundColourStyleId` - the background colour.
    pub struct View {
        capabilities: [Background],
        refresh: Layout,
    }
}

impl<H: themekit_core::host::ThemeHost> View<H> {
    background_colour_accessors!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use themekit_core::host::RecordingHost;
    use themekit_core::themeable::Themeable;
    use themekit_theme::style::ColourStyle;
    use themekit_theme::theme::Theme;
    use themekit_theme::vendor::ThemeVendor;

    #[test]
    fn test_background_is_applied_on_layout() {
        let mut view = View::new(RecordingHost::new(), ThemeVendor::with_builtin_themes());
        view.set_background_colour_style(Some(ColourStyle::Background));
        view.on_layout();

        assert_eq!(
            view.host().background_colour(),
            Theme::light().colour(ColourStyle::Background)
        );
    }

    #[test]
    fn test_unset_background_leaves_host_untouched() {
        let mut view = View::new(RecordingHost::new(), ThemeVendor::with_builtin_themes());
        assert!(view.update_theme_if_needed());
        assert!(view.into_host().calls().is_empty());
    }
}
