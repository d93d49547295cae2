use dioxus::prelude::*;
use view_state::reveal::AnimationVariant;
use view_state::style::ButtonSize;
use view_state::style::ButtonVariant;

use crate::components::animated_element::AnimatedElement;
use crate::components::button::Button;
use crate::components::icon::Icon;
use crate::components::icon::IconName;
use crate::components::layout::Section;
use crate::content::ACHIEVEMENTS;
use crate::content::BENEFITS;
use crate::content::SITE_NAME;

#[component]
pub fn About() -> Element {
    rsx! {
        Section { id: "about",
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-16 items-center",
                div { class: "order-2 lg:order-1",
                    div { class: "relative",
                        AnimatedElement { variant: AnimationVariant::FadeLeft,
                            div { class: "aspect-square max-w-lg relative z-10 rounded-2xl overflow-hidden shadow-2xl border border-primary-200 dark:border-primary-800 bg-white dark:bg-primary-900",
                                div { class: "absolute inset-0 grid grid-cols-2 grid-rows-2 gap-2 p-6",
                                    div { class: "bg-primary-100 dark:bg-primary-800 rounded-lg" }
                                    div { class: "bg-primary-950 dark:bg-white rounded-lg" }
                                    div { class: "bg-primary-950 dark:bg-white rounded-lg" }
                                    div { class: "bg-primary-100 dark:bg-primary-800 rounded-lg" }
                                }
                            }
                        }
                        div { class: "absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-full h-full max-w-lg max-h-lg border-2 border-primary-200 dark:border-primary-800 rounded-2xl -z-10 -rotate-6" }
                        div { class: "absolute -bottom-6 -right-6 w-48 h-48 bg-accent-500 rounded-full blur-3xl opacity-20 -z-20" }
                    }
                }

                div { class: "order-1 lg:order-2",
                    AnimatedElement { variant: AnimationVariant::FadeRight,
                        h2 { class: "heading-lg mb-6", "About {SITE_NAME}" }
                        p { class: "text-lg text-primary-700 dark:text-primary-300 mb-6 leading-relaxed",
                            "Founded in 2020, {SITE_NAME} has quickly established itself as a leader in creating minimalist, high-performance digital experiences that blend aesthetics with functionality."
                        }
                        p { class: "text-lg text-primary-700 dark:text-primary-300 mb-8 leading-relaxed",
                            "Our mission is simple: strip away the unnecessary and focus on what truly matters. We believe in the power of clean design, intuitive user experiences, and cutting-edge technology."
                        }

                        div { class: "grid grid-cols-2 sm:grid-cols-4 gap-6 mb-8",
                            for (index, item) in ACHIEVEMENTS.iter().enumerate() {
                                AnimatedElement {
                                    key: "{item.text}",
                                    delay_ms: index as u64 * 100,
                                    variant: AnimationVariant::Scale,
                                    div { class: "text-center",
                                        p { class: "text-3xl md:text-4xl font-bold text-primary-950 dark:text-white", "{item.number}" }
                                        p { class: "text-primary-600 dark:text-primary-400 text-sm mt-1", "{item.text}" }
                                    }
                                }
                            }
                        }

                        div { class: "mb-8",
                            h3 { class: "text-xl font-semibold mb-4", "Why Choose Us" }
                            div { class: "grid grid-cols-1 sm:grid-cols-2 gap-3",
                                for (index, benefit) in BENEFITS.iter().enumerate() {
                                    AnimatedElement {
                                        key: "{benefit}",
                                        delay_ms: 200 + index as u64 * 100,
                                        variant: AnimationVariant::FadeUp,
                                        class: "flex items-start",
                                        Icon { name: IconName::CheckCircle, class: "w-5 h-5 text-accent-600 dark:text-accent-400 mr-2 flex-shrink-0 mt-0.5" }
                                        span { "{benefit}" }
                                    }
                                }
                            }
                        }

                        Button { variant: ButtonVariant::Primary, size: ButtonSize::Lg, "Learn More About Us" }
                    }
                }
            }
        }
    }
}
