use super::{DropdownOption, Selection};
use crate::{class::Class, icon::SvgIcon, SharedString};
use dioxus::prelude::*;
use dioxus_free_icons::icons::{bs_icons::BsChevronDown, fa_solid_icons::FaXmark};

/// A selectable dropdown control with single- and multi-select modes.
///
/// The control is fully controlled: the selection is owned by the caller and
/// passed back in through `value` on every render, while every change is
/// reported through `on_change` without being applied internally. Picking an
/// option in single-select mode closes the list; in multi-select mode the
/// list stays open so further options can be toggled. A pointer-down outside
/// the control dismisses an open list.
pub fn Dropdown(props: DropdownProps) -> Element {
    let mut opened = use_signal(|| props.opened);
    let multi_select = props.multi_select;
    let disabled = props.disabled;
    let on_change = props.on_change;
    let options = props.options.unwrap_or_default();
    let selection = checked_selection(props.value, multi_select);
    let has_selection = selection.as_ref().is_some_and(|s| !s.is_empty());
    let trigger_label = match (props.render_value, selection.as_ref()) {
        (Some(render), Some(selection)) => render.call(selection.clone()),
        _ if has_selection => {
            let labels = selection.as_ref().map(Selection::labels).unwrap_or_default();
            rsx! { "{labels}" }
        }
        _ => rsx! { "{props.placeholder}" },
    };
    let current = selection.clone();
    // The trigger must stay above the backdrop so the clear affordance
    // remains clickable while the list is open.
    let trigger_style = if opened() {
        "position:relative;z-index:20"
    } else {
        ""
    };
    rsx! {
        div {
            class: "{props.class}",
            class: if opened() { "is-active" },
            if opened() {
                div {
                    class: "dropdown-backdrop",
                    style: "position:fixed;top:0;right:0;bottom:0;left:0",
                    onmousedown: move |_event| {
                        opened.set(false);
                    },
                }
            }
            div {
                class: "dropdown-trigger",
                style: "{trigger_style}",
                button {
                    r#type: "button",
                    class: "{props.trigger_class}",
                    disabled: disabled,
                    aria_haspopup: "true",
                    aria_expanded: "{opened()}",
                    onclick: move |_event| {
                        if !disabled {
                            opened.set(!opened());
                        }
                    },
                    span { { trigger_label } }
                    if props.clearable && has_selection && !disabled {
                        span {
                            class: "icon is-small",
                            aria_label: "Clear selection",
                            onclick: move |event| {
                                event.stop_propagation();
                                if let Some(handler) = on_change.as_ref() {
                                    handler.call(None);
                                }
                            },
                            SvgIcon { shape: FaXmark, width: 14 }
                        }
                    }
                    if !props.arrowless {
                        span {
                            class: "icon is-small",
                            SvgIcon { shape: BsChevronDown, width: 14 }
                        }
                    }
                }
            }
            if opened() {
                div {
                    class: "dropdown-menu",
                    role: "menu",
                    DropdownList {
                        item_class: props.item_class.clone(),
                        selected_class: props.selected_class.clone(),
                        options: options.clone(),
                        selection: selection.clone(),
                        empty_value: props.empty_value.clone(),
                        render_option: props.render_option,
                        on_pick: move |entry: DropdownOption| {
                            let next = if multi_select {
                                Selection::toggle_multi(current.as_ref(), &entry)
                            } else {
                                opened.set(false);
                                Selection::toggle_single(current.as_ref(), &entry)
                            };
                            if let Some(handler) = on_change.as_ref() {
                                handler.call(next);
                            }
                        },
                    }
                }
            }
        }
    }
}

/// The [`Dropdown`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownProps {
    /// The class attribute for the component.
    #[props(into, default = Class::from("dropdown"))]
    pub class: Class,
    /// A class to apply to the trigger button element.
    #[props(into, default = Class::from("button"))]
    pub trigger_class: Class,
    /// A class to apply to each option row.
    #[props(into, default = Class::from("dropdown-item"))]
    pub item_class: Class,
    /// A class to apply to the selected option rows.
    #[props(into, default = Class::from("is-active"))]
    pub selected_class: Class,
    /// The selectable options, rendered in input order.
    #[props(into)]
    pub options: Option<Vec<DropdownOption>>,
    /// The current selection, owned by the caller and passed back in on
    /// every render. The variant must agree with `multi_select`.
    #[props(into)]
    pub value: Option<Selection>,
    /// A flag to allow selecting multiple options.
    #[props(default)]
    pub multi_select: bool,
    /// The text shown on the trigger while the selection is empty.
    #[props(into, default = SharedString::from("Select an option"))]
    pub placeholder: SharedString,
    /// The text shown in the list when there are no options.
    #[props(into, default = SharedString::from("No options available"))]
    pub empty_value: SharedString,
    /// A flag to suppress all interaction.
    #[props(default)]
    pub disabled: bool,
    /// A flag to show a clear affordance on the trigger while a selection
    /// exists. Clearing reports `None` in both modes.
    #[props(default)]
    pub clearable: bool,
    /// A flag to omit the dropdown arrow on the trigger.
    #[props(default)]
    pub arrowless: bool,
    /// A flag to set the initial open state of the list.
    #[props(default)]
    pub opened: bool,
    /// A custom renderer for an option row and its selected state.
    pub render_option: Option<Callback<(DropdownOption, bool), Element>>,
    /// A custom renderer for the trigger label of the current selection.
    pub render_value: Option<Callback<Selection, Element>>,
    /// An event handler to be called when the selection changes.
    pub on_change: Option<EventHandler<Option<Selection>>>,
}

/// The option list of a dropdown control.
pub fn DropdownList(props: DropdownListProps) -> Element {
    let options = props.options.unwrap_or_default();
    let selection = props.selection;
    let render_option = props.render_option;
    let on_pick = props.on_pick;
    let item_class = props.item_class;
    let selected_class = props.selected_class;
    if options.is_empty() {
        return rsx! {
            div {
                class: props.class,
                div {
                    class: "{item_class}",
                    "{props.empty_value}"
                }
            }
        };
    }
    let items = options.iter().map(|entry| {
        let selected = selection
            .as_ref()
            .is_some_and(|selection| selection.contains(&entry.value));
        let content = match render_option.as_ref() {
            Some(render) => render.call((entry.clone(), selected)),
            None => {
                let label = entry.label.clone();
                rsx! { "{label}" }
            }
        };
        let key = entry.value.to_string();
        let entry = entry.clone();
        rsx! {
            a {
                key: "{key}",
                class: "{item_class}",
                class: if selected { "{selected_class}" },
                onclick: move |_event| {
                    if let Some(handler) = on_pick.as_ref() {
                        handler.call(entry.clone());
                    }
                },
                { content }
            }
        }
    });
    rsx! {
        div {
            class: props.class,
            { items }
        }
    }
}

/// The [`DropdownList`] properties struct for the configuration of the component.
#[derive(Clone, PartialEq, Props)]
pub struct DropdownListProps {
    /// The class attribute for the component.
    #[props(into, default = Class::from("dropdown-content"))]
    pub class: Class,
    /// A class to apply to each option row.
    #[props(into, default = Class::from("dropdown-item"))]
    pub item_class: Class,
    /// A class to apply to the selected option rows.
    #[props(into, default = Class::from("is-active"))]
    pub selected_class: Class,
    /// The selectable options, rendered in input order.
    #[props(into)]
    pub options: Option<Vec<DropdownOption>>,
    /// The current selection.
    #[props(into)]
    pub selection: Option<Selection>,
    /// The text shown when there are no options.
    #[props(into, default = SharedString::from("No options available"))]
    pub empty_value: SharedString,
    /// A custom renderer for an option row and its selected state.
    pub render_option: Option<Callback<(DropdownOption, bool), Element>>,
    /// An event handler to be called when an option row is clicked.
    pub on_pick: Option<EventHandler<DropdownOption>>,
}

/// Checks the selection shape against the select mode.
///
/// A mismatched shape is a caller contract violation; it is reported once per
/// render and treated as no selection instead of propagating further.
fn checked_selection(value: Option<Selection>, multi_select: bool) -> Option<Selection> {
    let selection = value?;
    if selection.matches_mode(multi_select) {
        Some(selection)
    } else {
        tracing::warn!(multi_select, "selection shape does not match the select mode");
        None
    }
}
