//! Host toolkit abstraction.
//!
//! This module decouples theming from the concrete UI toolkit. A toolkit
//! element implements [ThemeHost] to receive resolved theme values; ThemeKit
//! never talks to the toolkit any other way.

use themekit_theme::text::TextAttributes;
use vello::peniko::Color;

/// The primitives a host toolkit element exposes to the theming system.
///
/// Every setter has a no-op default, so an element only implements the
/// primitives it actually has. Only [request_layout](ThemeHost::request_layout)
/// is required, since it drives deferred theme updates.
pub trait ThemeHost {
    /// Set the background colour.
    fn set_background_colour(&mut self, _colour: Color) {}

    /// Set the tint colour.
    fn set_tint_colour(&mut self, _colour: Color) {}

    /// Set the text attributes.
    fn set_text_attributes(&mut self, _attributes: &TextAttributes) {}

    /// Set the tint colour of a thumb (e.g. a slider knob).
    fn set_thumb_tint_colour(&mut self, _colour: Color) {}

    /// Set the tint colour of a bar's background.
    fn set_bar_tint_colour(&mut self, _colour: Color) {}

    /// Ask the toolkit to run its layout pass for this element soon.
    fn request_layout(&mut self);
}

impl<H: ThemeHost + ?Sized> ThemeHost for Box<H> {
    fn set_background_colour(&mut self, colour: Color) {
        (**self).set_background_colour(colour)
    }

    fn set_tint_colour(&mut self, colour: Color) {
        (**self).set_tint_colour(colour)
    }

    fn set_text_attributes(&mut self, attributes: &TextAttributes) {
        (**self).set_text_attributes(attributes)
    }

    fn set_thumb_tint_colour(&mut self, colour: Color) {
        (**self).set_thumb_tint_colour(colour)
    }

    fn set_bar_tint_colour(&mut self, colour: Color) {
        (**self).set_bar_tint_colour(colour)
    }

    fn request_layout(&mut self) {
        (**self).request_layout()
    }
}

/// A primitive call received by a [RecordingHost].
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    /// [ThemeHost::set_background_colour]
    BackgroundColour(Color),
    /// [ThemeHost::set_tint_colour]
    TintColour(Color),
    /// [ThemeHost::set_text_attributes]
    TextAttributes(TextAttributes),
    /// [ThemeHost::set_thumb_tint_colour]
    ThumbTintColour(Color),
    /// [ThemeHost::set_bar_tint_colour]
    BarTintColour(Color),
    /// [ThemeHost::request_layout]
    RequestLayout,
}

/// A host that records every primitive call and keeps the last value of each.
///
/// Useful in tests and for headless use of ThemeKit.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
    background_colour: Option<Color>,
    tint_colour: Option<Color>,
    text_attributes: Option<TextAttributes>,
    thumb_tint_colour: Option<Color>,
    bar_tint_colour: Option<Color>,
}

impl RecordingHost {
    /// Create a host with no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every call received so far, oldest first.
    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Return the recorded calls and start a fresh log. Current values are kept.
    pub fn take_calls(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    /// Calls other than [HostCall::RequestLayout].
    pub fn style_calls(&self) -> Vec<&HostCall> {
        self.calls
            .iter()
            .filter(|call| **call != HostCall::RequestLayout)
            .collect()
    }

    /// How many times a layout pass was requested.
    pub fn layout_requests(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| **call == HostCall::RequestLayout)
            .count()
    }

    /// The current background colour.
    pub fn background_colour(&self) -> Option<Color> {
        self.background_colour
    }

    /// The current tint colour.
    pub fn tint_colour(&self) -> Option<Color> {
        self.tint_colour
    }

    /// The current text attributes.
    pub fn text_attributes(&self) -> Option<&TextAttributes> {
        self.text_attributes.as_ref()
    }

    /// The current thumb tint colour.
    pub fn thumb_tint_colour(&self) -> Option<Color> {
        self.thumb_tint_colour
    }

    /// The current bar tint colour.
    pub fn bar_tint_colour(&self) -> Option<Color> {
        self.bar_tint_colour
    }
}

impl ThemeHost for RecordingHost {
    fn set_background_colour(&mut self, colour: Color) {
        self.background_colour = Some(colour);
        self.calls.push(HostCall::BackgroundColour(colour));
    }

    fn set_tint_colour(&mut self, colour: Color) {
        self.tint_colour = Some(colour);
        self.calls.push(HostCall::TintColour(colour));
    }

    fn set_text_attributes(&mut self, attributes: &TextAttributes) {
        self.text_attributes = Some(attributes.clone());
        self.calls.push(HostCall::TextAttributes(attributes.clone()));
    }

    fn set_thumb_tint_colour(&mut self, colour: Color) {
        self.thumb_tint_colour = Some(colour);
        self.calls.push(HostCall::ThumbTintColour(colour));
    }

    fn set_bar_tint_colour(&mut self, colour: Color) {
        self.bar_tint_colour = Some(colour);
        self.calls.push(HostCall::BarTintColour(colour));
    }

    fn request_layout(&mut self) {
        self.calls.push(HostCall::RequestLayout);
    }
}
