#![warn(missing_docs)]

//! Style-identifier theming for UI elements.
//!
//! Elements store symbolic style ids such as `"primary"` or `"headline"`,
//! which are resolved against the active theme and pushed to the toolkit
//! element on the next layout pass.
//!
//! ```rust
//! use themekit::prelude::*;
//!
//! let vendor = ThemeVendor::with_builtin_themes();
//! let mut view = View::new(RecordingHost::new(), vendor);
//!
//! view.set_background_colour_style(Some(ColourStyle::Primary));
//! view.on_layout();
//!
//! assert!(view.host().background_colour().is_some());
//! ```

pub use vello::peniko as color;

pub use themekit_core as core;
pub use themekit_theme as theme;
pub use themekit_widgets as widgets;

/// A "prelude" for users of ThemeKit.
///
/// Importing this module brings into scope the most common types needed to
/// theme elements.
///
/// ```rust
/// use themekit::prelude::*;
/// ```
pub mod prelude {
    // Theme data
    pub use crate::theme::config::ThemeKitConfig;
    pub use crate::theme::error::{ThemeError, ThemeResult};
    pub use crate::theme::style::{ColourStyle, StyleKind, TextStyle};
    pub use crate::theme::text::{FontWeight, TextAttributes};
    pub use crate::theme::theme::Theme;
    pub use crate::theme::vendor::{ThemeVariant, ThemeVendor};

    // Core
    pub use crate::core::capability::{Capability, CapabilityKind, CapabilitySet};
    pub use crate::core::host::{HostCall, RecordingHost, ThemeHost};
    pub use crate::core::inspect::{InspectError, Inspectable};
    pub use crate::core::template::{ElementTemplate, TemplateError};
    pub use crate::core::themeable::{RefreshStrategy, ThemeState, Themeable};

    // Color
    pub use crate::color::Color;

    // Elements
    pub use crate::widgets::bar_button_item::BarButtonItem;
    pub use crate::widgets::button::Button;
    pub use crate::widgets::label::Label;
    pub use crate::widgets::navigation_bar::NavigationBar;
    pub use crate::widgets::slider::Slider;
    pub use crate::widgets::view::View;
}
