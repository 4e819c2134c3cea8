//! # Theme Vendor
//!
//! The [ThemeVendor] holds the active theme. It is a cheap handle: clone it
//! and hand the clone to every element at construction. All clones share the
//! same state, so setting a theme through one is visible through all of them.
//!
//! The vendor does not notify anyone when the theme changes. Elements pull the
//! current theme the next time they update, so a switch becomes visible on an
//! element only after that element is dirtied and laid out again. Hosts that
//! want eager refresh can compare [ThemeVendor::generation] between frames and
//! dirty their elements themselves.
//!
//! ## Usage
//!
//! ```rust
//! use themekit_theme::vendor::{ThemeVendor, ThemeVariant};
//!
//! let vendor = ThemeVendor::with_builtin_themes();
//! assert_eq!(vendor.current_variant(), Some(ThemeVariant::Light));
//!
//! vendor.switch_theme(&ThemeVariant::Dark);
//! assert_eq!(vendor.default_theme().unwrap().name(), "dark");
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::ThemeKitConfig;
use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;

/// A theme variant that can be switched at runtime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum ThemeVariant {
    /// Light theme variant.
    #[default]
    Light,
    /// Dark theme variant.
    Dark,
    /// Custom theme variant with a name.
    Custom(String),
}

impl ThemeVariant {
    /// Parse a variant from its textual form.
    ///
    /// `light` and `dark` are matched case-insensitively. `custom:<name>`
    /// names a custom variant explicitly; any other string is taken as a
    /// custom variant name as-is.
    pub fn parse(source: &str) -> Self {
        let source = source.trim();
        match source.to_lowercase().as_str() {
            "light" => ThemeVariant::Light,
            "dark" => ThemeVariant::Dark,
            _ => match source.strip_prefix("custom:") {
                Some(name) => ThemeVariant::Custom(name.to_string()),
                None => ThemeVariant::Custom(source.to_string()),
            },
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeVariant::Light => f.write_str("light"),
            ThemeVariant::Dark => f.write_str("dark"),
            ThemeVariant::Custom(name) => write!(f, "custom:{}", name),
        }
    }
}

impl FromStr for ThemeVariant {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Serialize for ThemeVariant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ThemeVariant {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let source = String::deserialize(deserializer)?;
        Ok(Self::parse(&source))
    }
}

#[derive(Default)]
struct VendorState {
    default_theme: Option<Arc<Theme>>,
    current_variant: Option<ThemeVariant>,
    available: IndexMap<ThemeVariant, Arc<Theme>>,
    generation: u64,
}

impl VendorState {
    fn replace_default(&mut self, theme: Option<Arc<Theme>>, variant: Option<ThemeVariant>) {
        self.default_theme = theme;
        self.current_variant = variant;
        self.generation = self.generation.wrapping_add(1);
    }
}

/// Shared holder of the active [Theme].
#[derive(Clone, Default)]
pub struct ThemeVendor {
    state: Arc<RwLock<VendorState>>,
}

impl ThemeVendor {
    /// Create a vendor with no theme and no registered variants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vendor whose default theme is `theme`.
    pub fn with_theme(theme: Theme) -> Self {
        let vendor = Self::new();
        vendor.set_default_theme(Some(theme));
        vendor
    }

    /// Create a vendor with the built-in light and dark themes registered and
    /// the light theme active.
    pub fn with_builtin_themes() -> Self {
        let vendor = Self::new();
        vendor.add_theme(ThemeVariant::Light, Theme::light());
        vendor.add_theme(ThemeVariant::Dark, Theme::dark());
        vendor.switch_theme(&ThemeVariant::Light);
        vendor
    }

    /// Create a vendor with the built-in themes and activate the variant
    /// selected by `config`, falling back to the configured fallback.
    ///
    /// If neither variant is registered the vendor is left without a theme.
    pub fn from_config(config: &ThemeKitConfig) -> Self {
        let vendor = Self::with_builtin_themes();
        vendor.apply_config(config);
        vendor
    }

    /// Activate the variant selected by `config`, falling back to the
    /// configured fallback. Returns the variant that was activated.
    pub fn apply_config(&self, config: &ThemeKitConfig) -> Option<ThemeVariant> {
        if self.switch_theme(&config.default_theme) {
            return Some(config.default_theme.clone());
        }

        log::warn!(
            "Configured theme '{}' is not registered, trying fallback",
            config.default_theme
        );

        if let Some(fallback) = &config.fallback_theme {
            if self.switch_theme(fallback) {
                return Some(fallback.clone());
            }
            log::warn!("Fallback theme '{}' is not registered either", fallback);
        }

        self.clear_default_theme();
        None
    }

    fn read(&self) -> RwLockReadGuard<'_, VendorState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, VendorState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// The active theme, if any.
    pub fn default_theme(&self) -> Option<Arc<Theme>> {
        self.read().default_theme.clone()
    }

    /// Returns `true` if a theme is active.
    pub fn has_theme(&self) -> bool {
        self.read().default_theme.is_some()
    }

    /// Set or unset the active theme directly.
    ///
    /// The current variant is cleared since the theme is not one of the
    /// registered variants.
    pub fn set_default_theme(&self, theme: Option<Theme>) {
        self.set_default_theme_arc(theme.map(Arc::new));
    }

    /// Set or unset the active theme from a shared theme.
    pub fn set_default_theme_arc(&self, theme: Option<Arc<Theme>>) {
        match &theme {
            Some(theme) => log::info!("Default theme set to '{}'", theme.name()),
            None => log::info!("Default theme cleared"),
        }
        self.write().replace_default(theme, None);
    }

    /// Unset the active theme.
    pub fn clear_default_theme(&self) {
        self.set_default_theme_arc(None);
    }

    /// Register a theme variant. Replaces an existing registration.
    ///
    /// Registering does not change the active theme, even when `variant` is
    /// the current one; call [ThemeVendor::switch_theme] to pick it up.
    pub fn add_theme(&self, variant: ThemeVariant, theme: Theme) {
        self.write().available.insert(variant, Arc::new(theme));
    }

    /// Switch to a registered theme variant.
    ///
    /// Returns `false` and leaves the active theme untouched if the variant is
    /// not registered.
    pub fn switch_theme(&self, variant: &ThemeVariant) -> bool {
        let mut state = self.write();
        let Some(theme) = state.available.get(variant).cloned() else {
            log::debug!("Cannot switch to unregistered theme variant '{}'", variant);
            return false;
        };

        log::info!("Switching theme to '{}'", variant);
        state.replace_default(Some(theme), Some(variant.clone()));
        true
    }

    /// Like [ThemeVendor::switch_theme], but reports an unknown variant as an error.
    pub fn try_switch_theme(&self, variant: &ThemeVariant) -> ThemeResult<()> {
        if self.switch_theme(variant) {
            Ok(())
        } else {
            Err(ThemeError::unknown_variant(variant.to_string()))
        }
    }

    /// The variant that is currently active, if the active theme came from
    /// the registry.
    pub fn current_variant(&self) -> Option<ThemeVariant> {
        self.read().current_variant.clone()
    }

    /// All registered variants, in registration order.
    pub fn available_variants(&self) -> Vec<ThemeVariant> {
        self.read().available.keys().cloned().collect()
    }

    /// A counter that changes every time the active theme is set, switched or cleared.
    pub fn generation(&self) -> u64 {
        self.read().generation
    }

    /// Returns `true` if both handles share the same state.
    pub fn ptr_eq(&self, other: &ThemeVendor) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl fmt::Debug for ThemeVendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.read();
        f.debug_struct("ThemeVendor")
            .field(
                "default_theme",
                &state.default_theme.as_ref().map(|theme| theme.name().to_string()),
            )
            .field("current_variant", &state.current_variant)
            .field("available", &state.available.keys().collect::<Vec<_>>())
            .field("generation", &state.generation)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_vendor_has_no_theme() {
        let vendor = ThemeVendor::new();
        assert!(vendor.default_theme().is_none());
        assert!(!vendor.has_theme());
        assert!(vendor.available_variants().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let vendor = ThemeVendor::new();
        let handle = vendor.clone();

        vendor.set_default_theme(Some(Theme::dark()));
        assert_eq!(handle.default_theme().unwrap().name(), "dark");
        assert!(handle.ptr_eq(&vendor));
        assert!(!handle.ptr_eq(&ThemeVendor::new()));
    }

    #[test]
    fn test_switch_theme() {
        let vendor = ThemeVendor::with_builtin_themes();
        assert_eq!(vendor.default_theme().unwrap().name(), "light");

        assert!(vendor.switch_theme(&ThemeVariant::Dark));
        assert_eq!(vendor.current_variant(), Some(ThemeVariant::Dark));
        assert_eq!(vendor.default_theme().unwrap().name(), "dark");

        let missing = ThemeVariant::Custom("solarized".to_string());
        assert!(!vendor.switch_theme(&missing));
        assert_eq!(vendor.current_variant(), Some(ThemeVariant::Dark));
        assert!(matches!(
            vendor.try_switch_theme(&missing),
            Err(ThemeError::UnknownVariant { .. })
        ));
    }

    #[test]
    fn test_generation_tracks_changes() {
        let vendor = ThemeVendor::new();
        let start = vendor.generation();

        vendor.set_default_theme(Some(Theme::light()));
        vendor.clear_default_theme();
        assert_eq!(vendor.generation(), start + 2);

        vendor.add_theme(ThemeVariant::Dark, Theme::dark());
        assert_eq!(vendor.generation(), start + 2);
    }

    #[test]
    fn test_direct_theme_clears_variant() {
        let vendor = ThemeVendor::with_builtin_themes();
        vendor.set_default_theme(Some(Theme::new("brand")));
        assert_eq!(vendor.current_variant(), None);
        assert_eq!(vendor.default_theme().unwrap().name(), "brand");
    }

    #[test]
    fn test_from_config_uses_fallback() {
        let config = ThemeKitConfig::new()
            .with_default_theme(ThemeVariant::Custom("missing".to_string()))
            .with_fallback_theme(ThemeVariant::Dark);

        let vendor = ThemeVendor::from_config(&config);
        assert_eq!(vendor.current_variant(), Some(ThemeVariant::Dark));
    }

    #[test]
    fn test_from_config_without_registered_variant() {
        let config = ThemeKitConfig::new()
            .with_default_theme(ThemeVariant::Custom("missing".to_string()))
            .without_fallback();

        let vendor = ThemeVendor::from_config(&config);
        assert!(vendor.default_theme().is_none());
    }

    #[test]
    fn test_variant_parsing() {
        assert_eq!(ThemeVariant::parse("Dark"), ThemeVariant::Dark);
        assert_eq!(ThemeVariant::parse(" light "), ThemeVariant::Light);
        assert_eq!(
            ThemeVariant::parse("custom:brand"),
            ThemeVariant::Custom("brand".to_string())
        );
        assert_eq!(
            ThemeVariant::parse("solarized"),
            ThemeVariant::Custom("solarized".to_string())
        );
        assert_eq!(ThemeVariant::Custom("brand".to_string()).to_string(), "custom:brand");
    }
}
