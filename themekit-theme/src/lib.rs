#![warn(missing_docs)]

//! # ThemeKit Theme Data
//!
//! The data layer of the ThemeKit theming system: typed style kinds, the
//! [Theme](theme::Theme) that maps them to rendering values, and the
//! [ThemeVendor](vendor::ThemeVendor) that holds the active theme.
//!
//! ## Overview
//!
//! - **[StyleKind](style::StyleKind)**: validated wrappers over plain string
//!   style identifiers ([ColourStyle](style::ColourStyle),
//!   [TextStyle](style::TextStyle))
//! - **[Theme](theme::Theme)**: style kind to colour / text attribute mapping
//! - **[ThemeVendor](vendor::ThemeVendor)**: shared handle to the active theme,
//!   with runtime switching between registered variants
//! - **[ThemeKitConfig](config::ThemeKitConfig)**: theme selection from
//!   environment variables and TOML files
//!
//! ## Quick Start
//!
//! ```rust
//! use themekit_theme::style::{ColourStyle, StyleKind};
//! use themekit_theme::vendor::ThemeVendor;
//!
//! let vendor = ThemeVendor::with_builtin_themes();
//! let theme = vendor.default_theme().unwrap();
//!
//! let style = ColourStyle::parse("primary").unwrap();
//! let colour = theme.colour(style);
//! assert!(colour.is_some());
//! ```

/// Contains the [config::ThemeKitConfig] struct for theme selection.
pub mod config;
/// Contains the [error::ThemeError] type.
pub mod error;
/// Contains the [style::StyleKind] trait and the built-in style kinds.
pub mod style;
/// Contains [text::TextAttributes].
pub mod text;
/// Contains the [theme::Theme] struct and built-in themes.
pub mod theme;
/// Contains the [vendor::ThemeVendor].
pub mod vendor;

pub use vello::peniko::Color;
