//! Selected/custom field pairs and their resolution.

use super::options::OTHER;

/// Resolves the effective value of a selected/custom pair.
///
/// Returns `custom.trim()` when `selected` is the `other` sentinel, otherwise
/// `selected.trim()`.
pub fn resolve(selected: &str, custom: &str, other: &str) -> String {
    if selected == other {
        custom.trim().to_string()
    } else {
        selected.trim().to_string()
    }
}

/// Decides how a persisted value is shown in a selected/custom pair.
///
/// Returns `None` for a blank value, meaning the pair must be left as is.
/// An exact (case-sensitive) match in `options` becomes `(value, "")`;
/// anything else becomes `(other, value)`.
pub fn reconcile(options: &[&str], value: &str, other: &str) -> Option<(String, String)> {
    if value.trim().is_empty() {
        return None;
    }
    if options.contains(&value) {
        Some((value.to_string(), String::new()))
    } else {
        Some((other.to_string(), value.to_string()))
    }
}

/// A form field offering a fixed option list plus a free-text override.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChoiceField {
    pub selected: String,
    pub custom: String,
}

impl ChoiceField {
    pub fn new(selected: impl Into<String>, custom: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
            custom: custom.into(),
        }
    }

    /// Effective value of the field.
    pub fn value(&self) -> String {
        resolve(&self.selected, &self.custom, OTHER)
    }

    /// Returns `true` if the effective value is non-blank.
    pub fn is_filled(&self) -> bool {
        !self.value().is_empty()
    }

    /// Selects an option, clearing any custom text.
    pub fn select(&mut self, option: impl Into<String>) {
        self.selected = option.into();
        self.custom.clear();
    }

    /// Switches to the `OTHER` sentinel with the given free text.
    pub fn set_custom(&mut self, text: impl Into<String>) {
        self.selected = OTHER.to_string();
        self.custom = text.into();
    }

    /// Loads a persisted value, matching it against `options`.
    ///
    /// A blank value leaves the field untouched.
    pub fn set_field(&mut self, options: &[&str], value: &str) {
        if let Some((selected, custom)) = reconcile(options, value, OTHER) {
            self.selected = selected;
            self.custom = custom;
        }
    }
}
