use dioxus::prelude::*;

use crate::components::icon::Icon;
use crate::components::icon::IconName;
use crate::components::layout::Container;
use crate::components::layout::Logo;
use crate::content::NAV_LINKS;
use crate::content::SITE_NAME;
use crate::hooks::use_scrolled::use_scrolled;
use crate::theme::use_theme;

/// Scroll offset, in pixels, after which the header gets a solid backdrop.
const SCROLLED_OFFSET: f64 = 10.0;

#[component]
fn ThemeToggle() -> Element {
    let mut theme = use_theme();
    let mode = theme.current();

    rsx! {
        button {
            class: "p-2 rounded-full hover:bg-primary-100 dark:hover:bg-primary-800 transition-colors",
            "aria-label": "Toggle theme",
            onclick: move |_| theme.toggle(),
            Icon {
                name: mode.pick(IconName::Moon, IconName::Sun),
                class: mode.pick("w-5 h-5 text-primary-950", "w-5 h-5 text-white"),
            }
        }
    }
}

#[component]
pub fn Header() -> Element {
    let mut is_menu_open = use_signal(|| false);
    let is_scrolled = use_scrolled(SCROLLED_OFFSET);
    let menu_icon = if is_menu_open() { IconName::Close } else { IconName::Menu };

    let header_class = if is_scrolled() {
        "fixed w-full z-50 transition-all duration-300 bg-white/90 dark:bg-primary-950/90 backdrop-blur-sm shadow-md"
    } else {
        "fixed w-full z-50 transition-all duration-300 bg-transparent"
    };

    rsx! {
        header { class: "{header_class}",
            Container {
                div { class: "flex items-center justify-between py-4",
                    a { href: "#", class: "flex items-center space-x-2",
                        Logo {}
                        span { class: "text-xl font-bold", "{SITE_NAME}" }
                    }

                    // Desktop navigation
                    nav { class: "hidden md:flex items-center space-x-8",
                        for link in NAV_LINKS.iter() {
                            a {
                                key: "{link.name}",
                                href: "{link.href}",
                                class: "text-primary-950 dark:text-white hover:text-accent-600 dark:hover:text-accent-400 transition-colors duration-300",
                                "{link.name}"
                            }
                        }
                        ThemeToggle {}
                    }

                    // Mobile controls
                    div { class: "flex md:hidden items-center space-x-4",
                        ThemeToggle {}
                        button {
                            class: "p-2 rounded-lg hover:bg-primary-100 dark:hover:bg-primary-800 transition-colors",
                            "aria-label": "Menu",
                            "aria-expanded": is_menu_open(),
                            onclick: move |_| is_menu_open.toggle(),
                            Icon {
                                name: menu_icon,
                                class: "w-6 h-6",
                            }
                        }
                    }
                }
            }

            if is_menu_open() {
                div { class: "md:hidden bg-white dark:bg-primary-950 border-t border-primary-200 dark:border-primary-800 menu-slide",
                    Container { class: "py-4",
                        nav { class: "flex flex-col space-y-4",
                            for link in NAV_LINKS.iter() {
                                a {
                                    key: "{link.name}",
                                    href: "{link.href}",
                                    class: "py-2 text-primary-950 dark:text-white hover:text-accent-600 dark:hover:text-accent-400",
                                    onclick: move |_| is_menu_open.set(false),
                                    "{link.name}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
