//! Shared scaffolding for the themeable elements of this crate.

/// Declares a themeable element wrapping a host `H`.
///
/// Generates the struct, `new`, `from_template`, host accessors and the
/// [Themeable](themekit_core::themeable::Themeable) impl. Extra fields are
/// initialized from their [Default].
macro_rules! themeable_element {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            capabilities: [$($capability:ident),* $(,)?],
            refresh: $refresh:ident,
            $($(#[$field_meta:meta])* $field:ident: $field_ty:ty,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<H> {
            host: H,
            state: themekit_core::themeable::ThemeState,
            $($(#[$field_meta])* $field: $field_ty,)*
        }

        impl<H: themekit_core::host::ThemeHost> $name<H> {
            /// Create the element around a host, pulling themes from `vendor`.
            pub fn new(host: H, vendor: themekit_theme::vendor::ThemeVendor) -> Self {
                let capabilities = themekit_core::capability::CapabilitySet::of(&[
                    $(themekit_core::capability::CapabilityKind::$capability),*
                ]);

                Self {
                    host,
                    state: themekit_core::themeable::ThemeState::new(vendor, capabilities)
                        .with_refresh(themekit_core::themeable::RefreshStrategy::$refresh),
                    $($field: Default::default(),)*
                }
            }

            /// Create the element from a template.
            pub fn from_template(
                host: H,
                vendor: themekit_theme::vendor::ThemeVendor,
                template: &themekit_core::template::ElementTemplate,
            ) -> Self {
                if template.kind() != stringify!($name) {
                    log::warn!(
                        "Building {} from a '{}' template",
                        stringify!($name),
                        template.kind()
                    );
                }

                let mut element = Self::new(host, vendor);
                themekit_core::themeable::Themeable::load_template(&mut element, template);
                element
            }

            /// The host.
            pub fn host(&self) -> &H {
                &self.host
            }

            /// The host, mutably.
            pub fn host_mut(&mut self) -> &mut H {
                &mut self.host
            }

            /// Unwrap the host.
            pub fn into_host(self) -> H {
                self.host
            }
        }

        impl<H: themekit_core::host::ThemeHost> themekit_core::themeable::Themeable for $name<H> {
            fn theme_state(&self) -> &themekit_core::themeable::ThemeState {
                &self.state
            }

            fn theme_state_mut(&mut self) -> &mut themekit_core::themeable::ThemeState {
                &mut self.state
            }

            fn theme_parts(
                &mut self,
            ) -> (
                &themekit_core::themeable::ThemeState,
                &mut dyn themekit_core::host::ThemeHost,
            ) {
                (&self.state, &mut self.host)
            }
        }
    };
}

/// Generates typed and raw accessors for one style slot.
macro_rules! style_accessors {
    (
        $key:expr, $property:literal, $kind:ty,
        $getter:ident, $setter:ident, $id_getter:ident, $id_setter:ident
    ) => {
        #[doc = concat!("The `", $property, "` style.")]
        pub fn $getter(&self) -> Option<$kind> {
            themekit_core::themeable::Themeable::style(self, $key)
        }

        #[doc = concat!("Set the `", $property, "` style. Returns `true` if it changed.")]
        pub fn $setter(&mut self, style: Option<$kind>) -> bool {
            themekit_core::themeable::Themeable::set_style(self, $key, style)
        }

        #[doc = concat!("The raw `", $property, "` id.")]
        pub fn $id_getter(&self) -> Option<&str> {
            themekit_core::themeable::Themeable::slot_id(self, $key)
        }

        #[doc = concat!("Set the raw `", $property, "` id. Returns `true` if it changed.")]
        pub fn $id_setter(&mut self, id: Option<&str>) -> bool {
            themekit_core::themeable::Themeable::set_slot_id(self, $key, id)
        }
    };
}

macro_rules! background_colour_accessors {
    () => {
        style_accessors!(
            themekit_core::capability::BackgroundColourThemeable::STYLE,
            "backgroundColourStyleId",
            themekit_theme::style::ColourStyle,
            background_colour_style,
            set_background_colour_style,
            background_colour_style_id,
            set_background_colour_style_id
        );
    };
}

macro_rules! tint_colour_accessors {
    () => {
        style_accessors!(
            themekit_core::capability::TintColourThemeable::STYLE,
            "tintColourStyleId",
            themekit_theme::style::ColourStyle,
            tint_colour_style,
            set_tint_colour_style,
            tint_colour_style_id,
            set_tint_colour_style_id
        );
    };
}

macro_rules! text_accessors {
    () => {
        style_accessors!(
            themekit_core::capability::TextThemeable::TEXT_STYLE,
            "textStyleId",
            themekit_theme::style::TextStyle,
            text_style,
            set_text_style,
            text_style_id,
            set_text_style_id
        );

        style_accessors!(
            themekit_core::capability::TextThemeable::TEXT_COLOUR_STYLE,
            "textColourStyleId",
            themekit_theme::style::ColourStyle,
            text_colour_style,
            set_text_colour_style,
            text_colour_style_id,
            set_text_colour_style_id
        );
    };
}

macro_rules! thumb_tint_colour_accessors {
    () => {
        style_accessors!(
            themekit_core::capability::ThumbTintColourThemeable::STYLE,
            "thumbTintColourStyleId",
            themekit_theme::style::ColourStyle,
            thumb_tint_colour_style,
            set_thumb_tint_colour_style,
            thumb_tint_colour_style_id,
            set_thumb_tint_colour_style_id
        );
    };
}

macro_rules! bar_tint_colour_accessors {
    () => {
        style_accessors!(
            themekit_core::capability::BarThemeable::STYLE,
            "barTintColourStyleId",
            themekit_theme::style::ColourStyle,
            bar_tint_colour_style,
            set_bar_tint_colour_style,
            bar_tint_colour_style_id,
            set_bar_tint_colour_style_id
        );
    };
}
