#![warn(missing_docs)]

//! Element library for ThemeKit => See `themekit` crate.
//!
//! Contains the themeable elements. Each one wraps a toolkit host and declares
//! the capabilities it supports.

#[macro_use]
mod element;

/// Contains the [view::View] element.
pub mod view;

/// Contains the [label::Label] element.
pub mod label;

/// Contains the [button::Button] element.
pub mod button;

/// Contains the [slider::Slider] element.
pub mod slider;

/// Contains the [navigation_bar::NavigationBar] element.
pub mod navigation_bar;

/// Contains the [bar_button_item::BarButtonItem] element.
pub mod bar_button_item;
