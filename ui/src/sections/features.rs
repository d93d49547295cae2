use dioxus::prelude::*;
use view_state::reveal::AnimationVariant;

use crate::components::animated_element::AnimatedElement;
use crate::components::icon::Icon;
use crate::components::icon::IconName;
use crate::components::layout::Section;
use crate::content::FEATURES;

/// Stagger between consecutive cards, in milliseconds.
const STAGGER_MS: u64 = 100;

#[component]
fn FeatureCard(icon: IconName, title: &'static str, description: &'static str, delay_ms: u64) -> Element {
    rsx! {
        AnimatedElement { delay_ms, variant: AnimationVariant::Rotate3d, class: "h-full",
            div { class: "p-6 rounded-xl border border-primary-200 dark:border-primary-800 bg-white dark:bg-primary-900 h-full feature-card",
                div { class: "rounded-lg w-12 h-12 flex items-center justify-center bg-primary-100 dark:bg-primary-800 text-primary-950 dark:text-white mb-4",
                    Icon { name: icon, class: "w-6 h-6" }
                }
                h3 { class: "text-xl font-semibold mb-3", "{title}" }
                p { class: "text-primary-600 dark:text-primary-300", "{description}" }
            }
        }
    }
}

#[component]
pub fn Features() -> Element {
    rsx! {
        Section { id: "features", class: "bg-primary-50 dark:bg-primary-900/40",
            AnimatedElement { variant: AnimationVariant::Flip, class: "text-center max-w-3xl mx-auto mb-16",
                h2 { class: "heading-lg mb-4", "Powerful Features, Simple Design" }
                p { class: "text-xl text-primary-600 dark:text-primary-300",
                    "Our platform combines powerful capabilities with intuitive design, creating experiences that delight users and drive results."
                }
            }

            div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8",
                for (index, feature) in FEATURES.iter().enumerate() {
                    FeatureCard {
                        key: "{feature.title}",
                        icon: feature.icon,
                        title: feature.title,
                        description: feature.description,
                        delay_ms: index as u64 * STAGGER_MS,
                    }
                }
            }
        }
    }
}
