//! CSS classes for components.

use crate::SharedString;
use dioxus::prelude::IntoAttributeValue;
use dioxus_core::AttributeValue;
use smallvec::SmallVec;
use std::{borrow::Cow, fmt};

/// A class type for dioxus components.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Class {
    /// A list of classes.
    classes: SmallVec<[SharedString; 5]>,
}

impl Class {
    /// Creates a new instance.
    #[inline]
    pub fn new(class: &'static str) -> Self {
        Self {
            classes: class.split_whitespace().map(SharedString::from).collect(),
        }
    }

    /// Adds a class to the list, omitting any that are already present.
    #[inline]
    pub fn add(&mut self, class: impl Into<SharedString>) {
        let class = class.into();
        if !(class.is_empty() || self.contains(&class)) {
            self.classes.push(class);
        }
    }

    /// Removes a class from the list.
    #[inline]
    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|s| s != class)
    }

    /// Toggles a class in the list.
    #[inline]
    pub fn toggle(&mut self, class: impl Into<SharedString>) {
        let class = class.into();
        if let Some(index) = self.classes.iter().position(|s| s == &class) {
            self.classes.remove(index);
        } else {
            self.classes.push(class);
        }
    }

    /// Returns `true` if a given class has been added.
    #[inline]
    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|s| s == class)
    }

    /// Returns `true` if the class list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Formats `self` as a `Cow<str>`.
    pub fn format(&self) -> Cow<'_, str> {
        if let [class] = self.classes.as_slice() {
            Cow::Borrowed(class.as_ref())
        } else {
            Cow::Owned(self.classes.join(" "))
        }
    }
}

impl From<&'static str> for Class {
    #[inline]
    fn from(class: &'static str) -> Self {
        Self::new(class)
    }
}

impl From<String> for Class {
    #[inline]
    fn from(class: String) -> Self {
        Self {
            classes: class
                .split_whitespace()
                .map(|s| SharedString::from(s.to_owned()))
                .collect(),
        }
    }
}

impl From<Vec<&'static str>> for Class {
    #[inline]
    fn from(classes: Vec<&'static str>) -> Self {
        Self {
            classes: classes.into_iter().map(SharedString::from).collect(),
        }
    }
}

impl<const N: usize> From<[&'static str; N]> for Class {
    #[inline]
    fn from(classes: [&'static str; N]) -> Self {
        Self {
            classes: classes.into_iter().map(SharedString::from).collect(),
        }
    }
}

impl fmt::Display for Class {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let format = self.format();
        write!(f, "{format}")
    }
}

impl IntoAttributeValue for Class {
    #[inline]
    fn into_value(self) -> AttributeValue {
        AttributeValue::Text(self.format().into_owned())
    }
}

/// Formats the class of the props with a default value.
#[macro_export]
macro_rules! format_class {
    ($props:ident, $default_class:expr) => {
        $props
            .class
            .as_ref()
            .map($crate::class::Class::format)
            .unwrap_or_else(|| $default_class.into())
    };
}

#[cfg(test)]
mod tests {
    use super::Class;

    #[test]
    fn add_omits_duplicates() {
        let mut class = Class::new("dropdown");
        class.add("is-active");
        class.add("is-active");
        class.add("");
        assert_eq!(class.format(), "dropdown is-active");
    }

    #[test]
    fn toggle_flips_membership() {
        let mut class = Class::new("button");
        class.toggle("is-loading");
        assert!(class.contains("is-loading"));
        class.toggle("is-loading");
        assert!(!class.contains("is-loading"));
    }

    #[test]
    fn format_splits_whitespace() {
        let class = Class::from("dropdown  is-up".to_owned());
        assert_eq!(class.to_string(), "dropdown is-up");
        assert_eq!(Class::new("button").format(), "button");
    }
}
