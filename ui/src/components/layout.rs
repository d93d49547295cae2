//! Layout wrappers shared by every section.

#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;

/// Centered, padded page-width container.
#[component]
pub fn Container(#[props(default, into)] class: String, children: Element) -> Element {
    rsx! { div { class: "container-custom {class}", {children} } }
}

/// A top-level page section, addressable by `#id` from the navigation.
#[component]
pub fn Section(#[props(into)] id: String, #[props(default, into)] class: String, children: Element) -> Element {
    rsx! {
        section { id: "{id}", class: "section-padding {class}",
            Container { {children} }
        }
    }
}

/// The split black/white square used as the site mark.
#[component]
pub fn Logo() -> Element {
    rsx! {
        div { class: "w-8 h-8 relative",
            div { class: "absolute inset-0 w-1/2 h-full bg-primary-950 dark:bg-white" }
            div { class: "absolute inset-0 ml-4 w-1/2 h-full bg-white dark:bg-primary-950 border-l border-primary-950 dark:border-white" }
        }
    }
}
