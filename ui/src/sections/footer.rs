use chrono::Datelike;
use dioxus::prelude::*;

use crate::components::icon::Icon;
use crate::components::icon::IconName;
use crate::components::layout::Container;
use crate::components::layout::Logo;
use crate::content::ADDRESS;
use crate::content::EMAIL;
use crate::content::LEGAL_LINKS;
use crate::content::NAV_LINKS;
use crate::content::PHONE;
use crate::content::SITE_NAME;
use crate::content::TAGLINE;

const SOCIAL: [(IconName, &str); 3] = [
    (IconName::Twitter, "Twitter"),
    (IconName::Instagram, "Instagram"),
    (IconName::Linkedin, "LinkedIn"),
];

#[component]
pub fn Footer() -> Element {
    let current_year = chrono::Local::now().year();
    let link_class = "text-primary-700 hover:text-primary-950 dark:text-primary-300 dark:hover:text-white transition-colors duration-300";

    rsx! {
        footer { class: "bg-primary-100 dark:bg-primary-900 pt-16 pb-8",
            Container {
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8 mb-16",
                    div { class: "space-y-4",
                        div { class: "flex items-center space-x-2",
                            Logo {}
                            h3 { class: "text-xl font-bold", "{SITE_NAME}" }
                        }
                        p { class: "text-primary-700 dark:text-primary-300", "{TAGLINE}" }
                    }

                    div {
                        h3 { class: "text-lg font-semibold mb-4", "Quick Links" }
                        ul { class: "space-y-2",
                            for link in NAV_LINKS.iter() {
                                li { key: "{link.name}",
                                    a { href: "{link.href}", class: "{link_class}", "{link.name}" }
                                }
                            }
                        }
                    }

                    div {
                        h3 { class: "text-lg font-semibold mb-4", "Contact" }
                        ul { class: "space-y-3",
                            li { class: "flex items-start",
                                Icon { name: IconName::MapPin, class: "w-5 h-5 mr-2 mt-0.5 text-primary-800 dark:text-primary-200" }
                                span { class: "text-primary-700 dark:text-primary-300", "{ADDRESS}" }
                            }
                            li { class: "flex items-center",
                                Icon { name: IconName::Phone, class: "w-5 h-5 mr-2 text-primary-800 dark:text-primary-200" }
                                span { class: "text-primary-700 dark:text-primary-300", "{PHONE}" }
                            }
                            li { class: "flex items-center",
                                Icon { name: IconName::Mail, class: "w-5 h-5 mr-2 text-primary-800 dark:text-primary-200" }
                                a { href: "mailto:{EMAIL}", class: "{link_class}", "{EMAIL}" }
                            }
                        }
                    }

                    div {
                        h3 { class: "text-lg font-semibold mb-4", "Follow Us" }
                        div { class: "flex space-x-4",
                            for (icon, label) in SOCIAL {
                                a {
                                    key: "{label}",
                                    href: "#",
                                    class: "w-10 h-10 rounded-full bg-primary-950 dark:bg-white text-white dark:text-primary-950 flex items-center justify-center hover:bg-accent-600 dark:hover:bg-accent-400 transition-colors duration-300",
                                    "aria-label": "{label}",
                                    Icon { name: icon, class: "w-5 h-5" }
                                }
                            }
                        }
                        div { class: "mt-6",
                            h4 { class: "text-sm font-semibold mb-3", "Subscribe to our newsletter" }
                            div { class: "flex",
                                input {
                                    r#type: "email",
                                    placeholder: "Your email",
                                    class: "px-4 py-2 w-full rounded-l-md border border-primary-300 dark:border-primary-700 bg-white dark:bg-primary-800 text-primary-950 dark:text-white focus:outline-none focus:ring-2 focus:ring-accent-500",
                                }
                                button { class: "px-4 py-2 bg-primary-950 dark:bg-white text-white dark:text-primary-950 rounded-r-md hover:bg-primary-800 dark:hover:bg-primary-100 transition-colors duration-300",
                                    "Send"
                                }
                            }
                        }
                    }
                }

                div { class: "pt-8 border-t border-primary-200 dark:border-primary-800",
                    div { class: "flex flex-col md:flex-row items-center justify-between",
                        p { class: "text-sm text-primary-700 dark:text-primary-400",
                            "© {current_year} {SITE_NAME}. All rights reserved."
                        }
                        div { class: "flex space-x-6 mt-4 md:mt-0",
                            for label in LEGAL_LINKS {
                                a { key: "{label}", href: "#", class: "text-sm {link_class}", "{label}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
