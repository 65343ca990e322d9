use dioxus::prelude::*;
use dioxus_dropdown::prelude::*;

fn render(app: fn() -> Element) -> String {
    let mut vdom = VirtualDom::new(app);
    vdom.rebuild_in_place();
    dioxus_ssr::render(&vdom)
}

fn fruits() -> Vec<DropdownOption> {
    vec![
        DropdownOption::new("Apple", 1),
        DropdownOption::new("Banana", 2),
    ]
}

#[test]
fn trigger_shows_placeholder_without_selection() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Select an option"));
    // The list is closed initially, so no option rows are rendered.
    assert!(!html.contains("Apple"));
    assert!(!html.contains("dropdown-menu"));
    assert!(!html.contains("dropdown-backdrop"));
}

#[test]
fn open_list_renders_option_rows() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                opened: true,
            }
        }
    }
    let html = render(app);
    assert!(html.contains("dropdown-menu"));
    assert!(html.contains("Apple"));
    assert!(html.contains("Banana"));
    assert!(html.contains("aria-expanded=\"true\""));
}

#[test]
fn open_list_without_options_shows_empty_value() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                opened: true,
            }
        }
    }
    let html = render(app);
    assert!(html.contains("No options available"));
}

#[test]
fn open_trigger_stacks_above_the_backdrop() {
    fn opened() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                clearable: true,
                opened: true,
                value: Selection::Single(DropdownOption::new("Apple", 1)),
            }
        }
    }
    fn closed() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                clearable: true,
                value: Selection::Single(DropdownOption::new("Apple", 1)),
            }
        }
    }
    let html = render(opened);
    assert!(html.contains("dropdown-backdrop"));
    // The trigger is raised above the backdrop, keeping the clear
    // affordance clickable while the list is open.
    assert!(html.contains("position:relative;z-index:20"));
    assert!(html.contains("Clear selection"));
    assert!(!render(closed).contains("position:relative;z-index:20"));
}

#[test]
fn trigger_shows_custom_placeholder() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                placeholder: "Pick a fruit",
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Pick a fruit"));
}

#[test]
fn trigger_shows_single_selection_label() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                value: Selection::Single(DropdownOption::new("Apple", 1)),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Apple"));
    assert!(!html.contains("Select an option"));
}

#[test]
fn trigger_joins_multi_selection_labels() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                multi_select: true,
                value: Selection::Multi(fruits()),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Apple, Banana"));
}

#[test]
fn mismatched_selection_shape_is_ignored() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                value: Selection::Multi(fruits()),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Select an option"));
    assert!(!html.contains("Apple"));
}

#[test]
fn disabled_trigger_is_rendered_disabled() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                disabled: true,
            }
        }
    }
    let html = render(app);
    assert!(html.contains("disabled"));
}

#[test]
fn clear_affordance_requires_a_selection() {
    fn with_selection() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                clearable: true,
                value: Selection::Single(DropdownOption::new("Apple", 1)),
            }
        }
    }
    fn without_selection() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                clearable: true,
            }
        }
    }
    fn disabled() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                clearable: true,
                disabled: true,
                value: Selection::Single(DropdownOption::new("Apple", 1)),
            }
        }
    }
    assert!(render(with_selection).contains("Clear selection"));
    assert!(!render(without_selection).contains("Clear selection"));
    assert!(!render(disabled).contains("Clear selection"));
}

#[test]
fn custom_trigger_label_renderer() {
    fn app() -> Element {
        rsx! {
            Dropdown {
                options: fruits(),
                multi_select: true,
                value: Selection::Multi(fruits()),
                render_value: Callback::new(|selection: Selection| {
                    let count = selection.len();
                    rsx! { "{count} selected" }
                }),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("2 selected"));
    assert!(!html.contains("Apple, Banana"));
}

#[test]
fn empty_option_list_shows_empty_value() {
    fn app() -> Element {
        rsx! {
            DropdownList {}
        }
    }
    let html = render(app);
    assert!(html.contains("No options available"));
    assert!(!html.contains("<a"));
}

#[test]
fn empty_option_list_shows_custom_empty_value() {
    fn app() -> Element {
        rsx! {
            DropdownList {
                empty_value: "Nothing to pick",
            }
        }
    }
    let html = render(app);
    assert!(html.contains("Nothing to pick"));
    assert!(!html.contains("No options available"));
}

#[test]
fn option_rows_render_in_input_order() {
    fn app() -> Element {
        rsx! {
            DropdownList {
                options: fruits(),
            }
        }
    }
    let html = render(app);
    let apple = html.find("Apple").unwrap();
    let banana = html.find("Banana").unwrap();
    assert!(apple < banana);
    assert_eq!(html.matches("dropdown-item").count(), 2);
}

#[test]
fn selected_row_carries_the_selected_class() {
    fn app() -> Element {
        rsx! {
            DropdownList {
                options: fruits(),
                selection: Selection::Single(DropdownOption::new("Apple", 1)),
            }
        }
    }
    let html = render(app);
    assert_eq!(html.matches("is-active").count(), 1);
}

#[test]
fn custom_option_renderer() {
    fn app() -> Element {
        rsx! {
            DropdownList {
                options: fruits(),
                selection: Selection::Single(DropdownOption::new("Apple", 1)),
                render_option: Callback::new(|(entry, selected): (DropdownOption, bool)| {
                    let marker = if selected { "*" } else { "" };
                    rsx! { strong { "{marker}{entry.label}" } }
                }),
            }
        }
    }
    let html = render(app);
    assert!(html.contains("<strong>*Apple</strong>"));
    assert!(html.contains("<strong>Banana</strong>"));
}
