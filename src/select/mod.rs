//! Selectable dropdown controls.

use crate::SharedString;
use std::fmt;

mod dropdown;

pub use dropdown::{Dropdown, DropdownList, DropdownListProps, DropdownProps};

/// The identity value of a dropdown option.
///
/// Two options denote the same choice iff their values are equal; labels and
/// positions do not participate in the comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// A textual value.
    Text(SharedString),
    /// An integer value.
    Integer(i64),
}

impl fmt::Display for OptionValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptionValue::Text(value) => write!(f, "{value}"),
            OptionValue::Integer(value) => write!(f, "{value}"),
        }
    }
}

impl From<&'static str> for OptionValue {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::Text(value.into())
    }
}

impl From<String> for OptionValue {
    #[inline]
    fn from(value: String) -> Self {
        Self::Text(value.into())
    }
}

impl From<SharedString> for OptionValue {
    #[inline]
    fn from(value: SharedString) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for OptionValue {
    #[inline]
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for OptionValue {
    #[inline]
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

/// A selectable option with a display label and an identity value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownOption {
    /// The display label.
    pub label: SharedString,
    /// The identity value.
    pub value: OptionValue,
}

impl DropdownOption {
    /// Creates a new instance.
    #[inline]
    pub fn new(label: impl Into<SharedString>, value: impl Into<OptionValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// The externally owned selection of a dropdown control.
///
/// The variant must agree with the mode of the control: [`Single`](Self::Single)
/// for single-select and [`Multi`](Self::Multi) for multi-select. The absence
/// of a selection is represented by `Option::<Selection>::None` rather than a
/// dedicated variant, and an emptied multi-select set collapses to `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// A single selected option.
    Single(DropdownOption),
    /// An ordered set of selected options, deduplicated by value.
    Multi(Vec<DropdownOption>),
}

impl Selection {
    /// Returns `true` if an option with the given value is selected.
    pub fn contains(&self, value: &OptionValue) -> bool {
        match self {
            Selection::Single(entry) => &entry.value == value,
            Selection::Multi(entries) => entries.iter().any(|entry| &entry.value == value),
        }
    }

    /// Returns `true` if the selection holds no options.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(_) => false,
            Selection::Multi(entries) => entries.is_empty(),
        }
    }

    /// Returns the number of selected options.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Selection::Single(_) => 1,
            Selection::Multi(entries) => entries.len(),
        }
    }

    /// Joins the labels of the selected options with a comma separator.
    pub fn labels(&self) -> String {
        match self {
            Selection::Single(entry) => entry.label.clone().into_owned(),
            Selection::Multi(entries) => entries
                .iter()
                .map(|entry| entry.label.as_ref())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    /// Returns `true` if the variant agrees with the select mode.
    #[inline]
    pub fn matches_mode(&self, multi_select: bool) -> bool {
        matches!(self, Selection::Multi(_)) == multi_select
    }

    /// Computes the next single-select selection after a click on `entry`.
    ///
    /// Clicking the currently selected option clears the selection;
    /// any other option replaces it.
    pub fn toggle_single(current: Option<&Selection>, entry: &DropdownOption) -> Option<Selection> {
        if current.is_some_and(|selection| selection.contains(&entry.value)) {
            None
        } else {
            Some(Selection::Single(entry.clone()))
        }
    }

    /// Computes the next multi-select selection after a click on `entry`.
    ///
    /// A selected option is removed and an unselected one is appended last,
    /// preserving the order of the rest. An emptied set collapses to `None`.
    pub fn toggle_multi(current: Option<&Selection>, entry: &DropdownOption) -> Option<Selection> {
        let mut entries = match current {
            Some(Selection::Multi(entries)) => entries.clone(),
            Some(Selection::Single(entry)) => vec![entry.clone()],
            None => Vec::new(),
        };
        if let Some(index) = entries.iter().position(|e| e.value == entry.value) {
            entries.remove(index);
        } else {
            entries.push(entry.clone());
        }
        (!entries.is_empty()).then_some(Selection::Multi(entries))
    }
}
