//! # Themeable Elements
//!
//! The [Themeable] trait is the single dispatch point of the theming system.
//! An element stores a [ThemeState] (its declared capabilities, its vendor and
//! its dirty flag) and exposes its host; every other behaviour comes from the
//! trait's default methods.
//!
//! ## State Machine
//!
//! ```text
//!            style change (new value)
//!            set_needs_update_theme()
//!   +-------+ ----------------------> +-------+
//!   | CLEAN |                         | DIRTY |  <- initial
//!   +-------+ <---------------------- +-------+
//!            update_theme_if_needed()
//!            (theme available)
//! ```
//!
//! Without a theme an update leaves the element dirty, so the next layout
//! pass tries again.
//!
//! ## Implementing
//!
//! ```rust
//! use themekit_core::capability::{BackgroundColourThemeable, CapabilitySet};
//! use themekit_core::host::{RecordingHost, ThemeHost};
//! use themekit_core::themeable::{ThemeState, Themeable};
//! use themekit_theme::style::ColourStyle;
//! use themekit_theme::vendor::ThemeVendor;
//!
//! struct Panel {
//!     host: RecordingHost,
//!     state: ThemeState,
//! }
//!
//! impl Themeable for Panel {
//!     fn theme_state(&self) -> &ThemeState {
//!         &self.state
//!     }
//!
//!     fn theme_state_mut(&mut self) -> &mut ThemeState {
//!         &mut self.state
//!     }
//!
//!     fn theme_parts(&mut self) -> (&ThemeState, &mut dyn ThemeHost) {
//!         (&self.state, &mut self.host)
//!     }
//! }
//!
//! let vendor = ThemeVendor::with_builtin_themes();
//! let mut panel = Panel {
//!     host: RecordingHost::new(),
//!     state: ThemeState::new(vendor, CapabilitySet::new().with(BackgroundColourThemeable::new())),
//! };
//!
//! panel.set_style(BackgroundColourThemeable::STYLE, Some(ColourStyle::Primary));
//! panel.on_layout();
//!
//! assert!(!panel.needs_update_theme());
//! assert!(panel.host.background_colour().is_some());
//! ```

use std::sync::Arc;

use themekit_theme::style::StyleKind;
use themekit_theme::theme::Theme;
use themekit_theme::vendor::ThemeVendor;

use crate::capability::{CapabilityKind, CapabilitySet};
use crate::host::ThemeHost;
use crate::inspect::Inspectable;
use crate::slot::SlotKey;
use crate::template::ElementTemplate;

/// How an element gets its pending theme applied after it is marked dirty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshStrategy {
    /// Request a host layout pass; the theme is applied in
    /// [Themeable::on_layout].
    #[default]
    Layout,
    /// Apply straight away. For elements that never get a layout pass of
    /// their own, such as bar items.
    Immediate,
}

/// The theming state every themeable element carries.
#[derive(Debug, Clone)]
pub struct ThemeState {
    capabilities: CapabilitySet,
    vendor: ThemeVendor,
    refresh: RefreshStrategy,
    created_from_template: bool,
    loading_template: bool,
    needs_update_theme: bool,
}

impl ThemeState {
    /// Create a dirty state with the given vendor and capabilities.
    pub fn new(vendor: ThemeVendor, capabilities: CapabilitySet) -> Self {
        Self {
            capabilities,
            vendor,
            refresh: RefreshStrategy::default(),
            created_from_template: false,
            loading_template: false,
            needs_update_theme: true,
        }
    }

    /// Set the refresh strategy and return self.
    pub fn with_refresh(mut self, refresh: RefreshStrategy) -> Self {
        self.refresh = refresh;
        self
    }

    /// The declared capabilities.
    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    /// The declared capabilities, mutably.
    ///
    /// Changes made here do not mark the element dirty; outside this crate
    /// slots are only reachable through the setters on [Themeable] and
    /// [Inspectable].
    ///
    /// ```compile_fail
    /// use themekit_core::capability::CapabilitySet;
    /// use themekit_core::themeable::ThemeState;
    /// use themekit_theme::vendor::ThemeVendor;
    ///
    /// let mut state = ThemeState::new(ThemeVendor::new(), CapabilitySet::new());
    /// state.capabilities_mut();
    /// ```
    pub(crate) fn capabilities_mut(&mut self) -> &mut CapabilitySet {
        &mut self.capabilities
    }

    /// The vendor this element pulls its theme from.
    pub fn vendor(&self) -> &ThemeVendor {
        &self.vendor
    }

    /// The refresh strategy.
    pub fn refresh(&self) -> RefreshStrategy {
        self.refresh
    }

    /// Returns `true` if a theme is pending.
    pub fn needs_update_theme(&self) -> bool {
        self.needs_update_theme
    }

    /// Returns `true` if the element was built from a template.
    pub fn created_from_template(&self) -> bool {
        self.created_from_template
    }

    pub(crate) fn set_needs_update_theme(&mut self, needs_update: bool) {
        self.needs_update_theme = needs_update;
    }

    pub(crate) fn set_created_from_template(&mut self) {
        self.created_from_template = true;
    }

    pub(crate) fn set_loading_template(&mut self, loading: bool) {
        self.loading_template = loading;
    }
}

/// An element that can be themed.
///
/// Implementors provide access to their [ThemeState] and host. Everything
/// else has a default; override [Themeable::apply_theme] to add behaviour on
/// top of the capability dispatch.
pub trait Themeable {
    /// The theming state.
    fn theme_state(&self) -> &ThemeState;

    /// The theming state, mutably.
    fn theme_state_mut(&mut self) -> &mut ThemeState;

    /// The theming state together with the host, so both can be borrowed at once.
    fn theme_parts(&mut self) -> (&ThemeState, &mut dyn ThemeHost);

    /// The theme to use, which is the vendor's current default theme.
    fn theme(&self) -> Option<Arc<Theme>> {
        self.theme_state().vendor().default_theme()
    }

    /// Apply every declared capability, in capability order.
    fn apply_capability_themes(&mut self, theme: &Theme) {
        let (state, host) = self.theme_parts();
        state.capabilities().apply(theme, host);
    }

    /// Apply a theme to this element.
    fn apply_theme(&mut self, theme: &Theme) {
        self.apply_capability_themes(theme);
    }

    /// Mark the element dirty and schedule an update according to its
    /// [RefreshStrategy].
    fn set_needs_update_theme(&mut self) {
        self.theme_state_mut().set_needs_update_theme(true);

        match self.theme_state().refresh() {
            RefreshStrategy::Layout => {
                let (_, host) = self.theme_parts();
                host.request_layout();
            },
            RefreshStrategy::Immediate if self.theme_state().loading_template => {
                log::trace!("Deferring immediate theme update until the template is loaded");
            },
            RefreshStrategy::Immediate => {
                self.update_theme_if_needed();
            },
        }
    }

    /// Apply the current theme if the element is dirty.
    ///
    /// Returns `true` if a theme was applied. The element stays dirty when no
    /// theme is available.
    fn update_theme_if_needed(&mut self) -> bool {
        if !self.needs_update_theme() {
            return false;
        }

        let Some(theme) = self.theme() else {
            log::debug!("No theme available, keeping element dirty");
            return false;
        };

        self.apply_theme(&theme);
        self.theme_state_mut().set_needs_update_theme(false);
        log::debug!("Applied theme '{}'", theme.name());
        true
    }

    /// Returns `true` if a theme is pending.
    fn needs_update_theme(&self) -> bool {
        self.theme_state().needs_update_theme()
    }

    /// Returns `true` if the element was built from a template.
    fn created_from_template(&self) -> bool {
        self.theme_state().created_from_template()
    }

    /// Returns `true` if the element declares the capability.
    fn supports(&self, kind: CapabilityKind) -> bool {
        self.theme_state().capabilities().supports(kind)
    }

    /// Mark the element dirty if `changed`. Returns `changed`.
    fn mark_style_changed(&mut self, changed: bool) -> bool {
        if changed {
            self.set_needs_update_theme();
        }
        changed
    }

    /// Called once an element has been built from a template.
    fn on_construct_from_template(&mut self) {
        self.theme_state_mut().set_created_from_template();
    }

    /// Called when the element is attached to a parent.
    ///
    /// Programmatically built elements are themed right away. Template-built
    /// elements wait for their layout pass.
    fn on_attach_to_parent(&mut self) {
        if self.created_from_template() {
            return;
        }

        if let Some(theme) = self.theme() {
            self.apply_theme(&theme);
            self.theme_state_mut().set_needs_update_theme(false);
        }
    }

    /// Called on the host's layout pass.
    fn on_layout(&mut self) {
        self.update_theme_if_needed();
    }

    /// The typed style in a slot, or [None] if unset, unknown or not declared.
    fn style<S: StyleKind>(&self, key: SlotKey<S>) -> Option<S>
    where
        Self: Sized,
    {
        self.theme_state()
            .capabilities()
            .style_id(key.property())
            .and_then(S::parse)
    }

    /// Typed form of [Themeable::set_slot_id].
    fn set_style<S: StyleKind>(&mut self, key: SlotKey<S>, style: Option<S>) -> bool
    where
        Self: Sized,
    {
        self.set_slot_id(key, style.map(|style| style.as_str()))
    }

    /// The raw style id in a slot.
    fn slot_id<S: StyleKind>(&self, key: SlotKey<S>) -> Option<&str>
    where
        Self: Sized,
    {
        self.theme_state().capabilities().style_id(key.property())
    }

    /// Set the raw style id in a slot, marking the element dirty if it changed.
    ///
    /// Returns `true` if it changed. Setting a slot of an undeclared
    /// capability does nothing.
    fn set_slot_id<S: StyleKind>(&mut self, key: SlotKey<S>, id: Option<&str>) -> bool
    where
        Self: Sized,
    {
        let changed = match self
            .theme_state_mut()
            .capabilities_mut()
            .set_style_id(key.property(), id)
        {
            Some(changed) => changed,
            None => {
                log::warn!("Element does not declare a '{}' slot", key.property());
                false
            },
        };

        self.mark_style_changed(changed)
    }

    /// Apply the properties of a template, then run
    /// [Themeable::on_construct_from_template].
    ///
    /// Unknown properties are logged and skipped. Elements with
    /// [RefreshStrategy::Immediate] are not themed while the template loads;
    /// they stay dirty until their next update.
    fn load_template(&mut self, template: &ElementTemplate)
    where
        Self: Sized,
    {
        self.theme_state_mut().set_loading_template(true);

        for (property, id) in template.properties() {
            let id = Some(id.as_str()).filter(|id| !id.is_empty());
            if let Err(err) = self.set_style_id(property, id) {
                log::warn!("Skipping template property of '{}': {}", template.kind(), err);
            }
        }

        self.theme_state_mut().set_loading_template(false);
        self.on_construct_from_template();
    }
}
