//! Two-state helpers for form controls
//!
//! In the browser host these helpers are wired to inline event handlers and
//! operate on DOM elements resolved by id. Here the host environment is
//! modeled explicitly: a [`Page`] is a registry of [`Element`] handles keyed
//! by id, and the togglers resolve a handle and mutate it in place.
//!
//! The contract names are fixed, because the styling layer depends on the
//! literals: the value toggler reads the `data-off` and `data-on` attributes,
//! and the visibility toggler flips the `visible`/`invisible` class pair.
//!
//! Lookup failures are not absorbed: a missing id yields
//! [`ControlError::NoSuchElement`], never an implicit element or a silent
//! no-op. Callers wire these to controls known to exist in the page markup.

use crate::error::ControlError;
use std::collections::HashMap;

/// Attribute holding a control's "off" value
pub const ATTR_OFF: &str = "data-off";
/// Attribute holding a control's "on" value
pub const ATTR_ON: &str = "data-on";
/// Class marking an element as shown
pub const CLASS_VISIBLE: &str = "visible";
/// Class marking an element as hidden
pub const CLASS_INVISIBLE: &str = "invisible";

/// A mutable element handle: id, current value, attributes, and class list.
///
/// Pure data, no behavior beyond field access; the toggle semantics live in
/// the free functions so the handle stays reusable for other controls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    id: String,
    value: String,
    attributes: HashMap<String, String>,
    classes: Vec<String>,
}

impl Element {
    /// Create an element with the given id and no value, attributes or classes
    pub fn new(id: impl Into<String>) -> Self {
        Element {
            id: id.into(),
            ..Element::default()
        }
    }

    /// The element's id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The element's current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the element's current value
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Read an attribute, if set
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    /// Set an attribute, replacing any previous value
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Whether the class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a class; a class already present is not duplicated
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Remove a class; absent classes are ignored
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// The class list, in insertion order
    pub fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Registry of elements keyed by id
///
/// # Examples
///
/// ```ignore
/// let mut page = Page::new();
/// let mut check = Element::new("debug");
/// check.set_attribute(ATTR_OFF, "0");
/// check.set_attribute(ATTR_ON, "1");
/// page.insert(check);
///
/// toggle_value(&mut page, "debug")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Page {
    elements: HashMap<String, Element>,
}

impl Page {
    /// Create an empty page
    pub fn new() -> Self {
        Page::default()
    }

    /// Insert an element
    ///
    /// If an element with the same id already exists, it is replaced.
    pub fn insert(&mut self, element: Element) {
        self.elements.insert(element.id().to_string(), element);
    }

    /// Resolve an element by id
    pub fn element(&self, id: &str) -> Result<&Element, ControlError> {
        self.elements
            .get(id)
            .ok_or_else(|| ControlError::NoSuchElement(id.to_string()))
    }

    /// Resolve an element by id for mutation
    pub fn element_mut(&mut self, id: &str) -> Result<&mut Element, ControlError> {
        self.elements
            .get_mut(id)
            .ok_or_else(|| ControlError::NoSuchElement(id.to_string()))
    }

    /// Whether an element with the given id exists
    pub fn has(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }
}

/// Swap a control's value between its two configured values.
///
/// Reads the `data-off` and `data-on` attributes (a missing attribute reads
/// as the empty string) and the current value. A current value equal to the
/// on-value flips to the off-value; any other current value, including one
/// that matches neither attribute, counts as off and flips to the on-value.
/// After the call the value is always exactly one of the two configured
/// values.
///
/// Returns `Ok(true)` whenever the element exists; the constant flag is kept
/// for callers that historically required a boolean return.
pub fn toggle_value(page: &mut Page, id: &str) -> Result<bool, ControlError> {
    let elm = page.element_mut(id)?;
    let off = elm.attribute(ATTR_OFF).unwrap_or_default().to_string();
    let on = elm.attribute(ATTR_ON).unwrap_or_default().to_string();
    if elm.value() == on {
        elm.set_value(off);
    } else {
        elm.set_value(on);
    }
    Ok(true)
}

/// Flip an element between the `visible` and `invisible` classes.
///
/// An element carrying `visible` loses it and gains `invisible`; any other
/// state loses `invisible` (if present) and gains `visible`. After the call
/// exactly one of the two classes is present. The state before first use is
/// the caller's responsibility.
pub fn toggle_visibility(page: &mut Page, id: &str) -> Result<(), ControlError> {
    let elm = page.element_mut(id)?;
    if elm.has_class(CLASS_VISIBLE) {
        elm.remove_class(CLASS_VISIBLE);
        elm.add_class(CLASS_INVISIBLE);
    } else {
        elm.remove_class(CLASS_INVISIBLE);
        elm.add_class(CLASS_VISIBLE);
    }
    Ok(())
}
