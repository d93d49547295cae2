use dioxus::prelude::*;
use view_state::reveal::AnimationVariant;

use crate::components::animated_element::AnimatedElement;
use crate::components::icon::Icon;
use crate::components::icon::IconName;
use crate::components::layout::Section;
use crate::content::TeamMember;
use crate::content::TEAM;

const SOCIAL_LINK_CLASS: &str = "w-8 h-8 rounded-full bg-white text-primary-950 flex items-center justify-center hover:bg-accent-500 hover:text-white transition-colors duration-300";

#[component]
fn MemberCard(index: usize, delay_ms: u64) -> Element {
    let Some(member) = TEAM.get(index) else {
        return rsx! {};
    };
    let TeamMember { name, role, image } = member;
    let email = member.email();

    rsx! {
        AnimatedElement { delay_ms, variant: AnimationVariant::Tilt,
            div { class: "group",
                div { class: "relative overflow-hidden rounded-xl bg-primary-100 dark:bg-primary-900 aspect-[3/4]",
                    img {
                        src: "{image}",
                        alt: "{name}",
                        class: "w-full h-full object-cover transition-transform duration-500 group-hover:scale-105",
                    }
                    div { class: "absolute inset-0 bg-gradient-to-t from-primary-950/70 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300" }
                    div { class: "absolute bottom-0 left-0 right-0 p-6 translate-y-6 opacity-0 group-hover:translate-y-0 group-hover:opacity-100 transition-all duration-300",
                        div { class: "flex justify-center space-x-3",
                            a { href: "#", class: SOCIAL_LINK_CLASS, "aria-label": "{name}'s Twitter",
                                Icon { name: IconName::Twitter, class: "w-4 h-4" }
                            }
                            a { href: "#", class: SOCIAL_LINK_CLASS, "aria-label": "{name}'s LinkedIn",
                                Icon { name: IconName::Linkedin, class: "w-4 h-4" }
                            }
                            a { href: "mailto:{email}", class: SOCIAL_LINK_CLASS, "aria-label": "Email {name}",
                                Icon { name: IconName::Mail, class: "w-4 h-4" }
                            }
                        }
                    }
                }
                div { class: "mt-4 text-center",
                    h3 { class: "text-lg font-semibold", "{name}" }
                    p { class: "text-primary-600 dark:text-primary-400", "{role}" }
                }
            }
        }
    }
}

#[component]
pub fn Team() -> Element {
    rsx! {
        Section { id: "team", class: "bg-primary-50 dark:bg-primary-900/40",
            AnimatedElement { variant: AnimationVariant::Flip, class: "text-center max-w-3xl mx-auto mb-16",
                h2 { class: "heading-lg mb-4", "Meet Our Team" }
                p { class: "text-xl text-primary-600 dark:text-primary-300",
                    "Our talented team of creatives brings diverse expertise and a shared passion for minimal, effective design."
                }
            }

            div { class: "grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8",
                for index in 0..TEAM.len() {
                    MemberCard { key: "{index}", index, delay_ms: index as u64 * 100 }
                }
            }
        }
    }
}
