//! Style slots.
//!
//! A slot is one style identifier property of a capability, such as
//! `backgroundColourStyleId`. The slot stores the raw string, which is what
//! templates and design-time editors read and write, and derives the typed
//! style from it on every read. The two views can therefore never disagree.

use std::fmt;
use std::marker::PhantomData;

use themekit_theme::style::StyleKind;

/// A raw style identifier paired with the typed [StyleKind] it parses to.
#[derive(Clone, PartialEq, Eq)]
pub struct StyleSlot<S> {
    property: &'static str,
    id: Option<String>,
    _kind: PhantomData<S>,
}

impl<S: StyleKind> StyleSlot<S> {
    /// Create an empty slot exposed under the given property name.
    pub const fn new(property: &'static str) -> Self {
        Self {
            property,
            id: None,
            _kind: PhantomData,
        }
    }

    /// The property name of this slot.
    pub fn property(&self) -> &'static str {
        self.property
    }

    /// The raw style identifier.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The typed style, or [None] if no id is set or the id is unknown.
    pub fn style(&self) -> Option<S> {
        self.id.as_deref().and_then(S::parse)
    }

    /// Store a raw identifier. Returns `true` if the stored value changed.
    ///
    /// Unknown identifiers are stored as given; they just resolve to no style.
    pub fn set_id(&mut self, id: Option<&str>) -> bool {
        if self.id.as_deref() == id {
            return false;
        }

        if let Some(id) = id.filter(|id| S::parse(id).is_none()) {
            log::debug!(
                "'{}' is not a known {} style, {} resolves to no style",
                id,
                S::KIND,
                self.property
            );
        }

        self.id = id.map(str::to_string);
        true
    }

    /// Store a typed style as its raw identifier. Returns `true` if the stored value changed.
    pub fn set_style(&mut self, style: Option<S>) -> bool {
        self.set_id(style.map(|style| style.as_str()))
    }
}

impl<S: StyleKind> fmt::Debug for StyleSlot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleSlot")
            .field("property", &self.property)
            .field("id", &self.id)
            .field("style", &self.style())
            .finish()
    }
}

/// Type-erased access to a [StyleSlot], for inspection by property name.
pub trait AnyStyleSlot {
    /// The property name of the slot.
    fn property(&self) -> &'static str;

    /// The raw style identifier.
    fn id(&self) -> Option<&str>;

    /// Store a raw identifier. Returns `true` if the stored value changed.
    fn set_id(&mut self, id: Option<&str>) -> bool;

    /// Every identifier this slot can resolve.
    fn known_ids(&self) -> Vec<&'static str>;

    /// Returns `true` if the stored id parses to a style.
    fn is_resolvable(&self) -> bool;
}

impl<S: StyleKind> AnyStyleSlot for StyleSlot<S> {
    fn property(&self) -> &'static str {
        self.property
    }

    fn id(&self) -> Option<&str> {
        StyleSlot::id(self)
    }

    fn set_id(&mut self, id: Option<&str>) -> bool {
        StyleSlot::set_id(self, id)
    }

    fn known_ids(&self) -> Vec<&'static str> {
        S::identifiers()
    }

    fn is_resolvable(&self) -> bool {
        self.style().is_some()
    }
}

/// A typed handle naming a slot property, used for typed access through an element.
///
/// Capabilities expose one constant per slot, e.g.
/// [BackgroundColourThemeable::STYLE](crate::capability::BackgroundColourThemeable::STYLE).
/// Those constants are the only keys; a key cannot pair a property with the
/// wrong style kind.
///
/// ```compile_fail
/// use themekit_core::slot::SlotKey;
/// use themekit_theme::style::TextStyle;
///
/// let key = SlotKey::<TextStyle>::new("backgroundColourStyleId");
/// ```
pub struct SlotKey<S> {
    property: &'static str,
    _kind: PhantomData<S>,
}

impl<S> SlotKey<S> {
    pub(crate) const fn new(property: &'static str) -> Self {
        Self {
            property,
            _kind: PhantomData,
        }
    }

    /// The property name.
    pub const fn property(&self) -> &'static str {
        self.property
    }
}

impl<S> Clone for SlotKey<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for SlotKey<S> {}

impl<S> fmt::Debug for SlotKey<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SlotKey").field(&self.property).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use themekit_theme::style::ColourStyle;

    #[test]
    fn test_typed_and_raw_views_agree() {
        let mut slot = StyleSlot::<ColourStyle>::new("tintColourStyleId");
        assert_eq!(slot.style(), None);

        assert!(slot.set_style(Some(ColourStyle::Accent)));
        assert_eq!(slot.id(), Some("accent"));

        assert!(slot.set_id(Some("error")));
        assert_eq!(slot.style(), Some(ColourStyle::Error));
    }

    #[test]
    fn test_same_value_is_not_a_change() {
        let mut slot = StyleSlot::<ColourStyle>::new("tintColourStyleId");
        assert!(slot.set_id(Some("primary")));
        assert!(!slot.set_id(Some("primary")));
        assert!(!slot.set_style(Some(ColourStyle::Primary)));
        assert!(slot.set_style(None));
        assert!(!slot.set_id(None));
    }

    #[test]
    fn test_unknown_id_is_kept_but_unresolved() {
        let mut slot = StyleSlot::<ColourStyle>::new("tintColourStyleId");
        assert!(slot.set_id(Some("not-a-style")));
        assert_eq!(slot.id(), Some("not-a-style"));
        assert_eq!(slot.style(), None);
        assert!(!AnyStyleSlot::is_resolvable(&slot));
    }
}
