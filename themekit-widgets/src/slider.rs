themeable_element! {
    /// A slider to control a floating point value between `0.0` and `1.0`.
    ///
    /// ### Theming
    /// - `tintColourStyleId` - the colour of the filled track.
    /// - `thumbTintColourStyleId` - the colour of the knob.
    pub struct Slider {
        capabilities: [Tint, ThumbTint],
        refresh: Layout,
        value: f32,
    }
}

impl<H: themekit_core::host::ThemeHost> Slider<H> {
    /// Set the value and return self.
    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(value);
        self
    }

    /// The value, between `0.0` and `1.0`.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the value, clamped to `0.0..=1.0`.
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    tint_colour_accessors!();
    thumb_tint_colour_accessors!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use themekit_core::host::RecordingHost;
    use themekit_theme::vendor::ThemeVendor;

    #[test]
    fn test_value_is_clamped() {
        let slider = Slider::new(RecordingHost::new(), ThemeVendor::new()).with_value(1.5);
        assert_eq!(slider.value(), 1.0);
    }
}
