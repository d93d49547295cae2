use dioxus::prelude::*;
use view_state::reveal::AnimationVariant;
use view_state::style::ButtonSize;
use view_state::style::ButtonVariant;
use view_state::style::IconPosition;
use view_state::tilt::Tilt;

use crate::components::animated_element::AnimatedElement;
use crate::components::button::Button;
use crate::components::icon::IconName;
use crate::components::layout::Container;
use crate::content::TRUSTED_BY;
use crate::hooks::use_tilt::use_tilt;

/// Lines in each direction of the backdrop grid.
const GRID_LINES: usize = 24;

#[component]
fn BrowserMockup() -> Element {
    rsx! {
        div { class: "aspect-[4/3] relative z-10 rounded-2xl overflow-hidden shadow-2xl border border-primary-200 dark:border-primary-800 hover-lift",
            div { class: "absolute inset-0 bg-gradient-to-br from-white to-primary-100 dark:from-primary-900 dark:to-primary-950 flex items-center justify-center",
                div { class: "w-4/5 aspect-video bg-white dark:bg-primary-800 rounded-lg shadow-lg overflow-hidden hover-grow",
                    div { class: "h-6 bg-primary-100 dark:bg-primary-700 flex items-center px-3 gap-1.5",
                        for i in 0..3 {
                            div { key: "{i}", class: "w-3 h-3 rounded-full bg-primary-300 dark:bg-primary-500 hover-accent" }
                        }
                    }
                    div { class: "grid grid-cols-5 h-[calc(100%-24px)]",
                        div { class: "col-span-1 bg-primary-50 dark:bg-primary-900" }
                        div { class: "col-span-4 bg-white dark:bg-primary-800 p-3",
                            div { class: "w-full h-4 rounded bg-primary-200 dark:bg-primary-700 mb-3" }
                            div { class: "w-4/5 h-4 rounded bg-primary-200 dark:bg-primary-700 mb-6" }
                            div { class: "grid grid-cols-2 gap-3",
                                for i in 0..4 {
                                    div { key: "{i}", class: "aspect-video rounded bg-primary-100 dark:bg-primary-700 hover-glow" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Hero() -> Element {
    let mut tilt = use_tilt(Tilt::backdrop);
    let tilt_css = tilt.css(1000);

    rsx! {
        section {
            id: "home",
            class: "relative min-h-screen flex items-center py-20 overflow-hidden",
            onmounted: move |evt| tilt.mounted(evt),
            onmouseenter: move |_| tilt.measure(),
            onmousemove: move |evt| tilt.pointer_move(evt),
            onmouseleave: move |_| tilt.pointer_leave(),

            // Backdrop grid, tilted with the pointer.
            div {
                class: "absolute inset-0 pointer-events-none opacity-10 dark:opacity-5",
                style: "{tilt_css}",
                div { class: "absolute inset-0",
                    for i in 0..GRID_LINES {
                        div {
                            key: "v{i}",
                            class: "absolute top-0 bg-primary-950 dark:bg-white h-full w-px grid-line",
                            style: "left: {i * 100 / GRID_LINES}%;",
                        }
                    }
                    for i in 0..GRID_LINES {
                        div {
                            key: "h{i}",
                            class: "absolute left-0 bg-primary-950 dark:bg-white w-full h-px grid-line",
                            style: "top: {i * 100 / GRID_LINES}%;",
                        }
                    }
                }
            }

            Container { class: "pt-24 relative",
                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-12 items-center",
                    AnimatedElement { on_mount: true, class: "flex flex-col space-y-6",
                        div { class: "flex flex-col space-y-2",
                            AnimatedElement { on_mount: true, delay_ms: 200,
                                h1 { class: "heading-xl text-gradient hover-grow",
                                    "Bold Vision."
                                    br {}
                                    "Minimal Design."
                                }
                            }
                            AnimatedElement { on_mount: true, delay_ms: 400,
                                p { class: "text-xl md:text-2xl text-primary-600 dark:text-primary-300 max-w-xl leading-relaxed",
                                    "We create exceptional digital experiences through the perfect balance of form and function."
                                }
                            }
                        }

                        AnimatedElement { on_mount: true, delay_ms: 600, class: "flex flex-wrap gap-4",
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Lg,
                                icon: IconName::ArrowRight,
                                icon_position: IconPosition::Right,
                                "Get Started"
                            }
                            Button { variant: ButtonVariant::Outline, size: ButtonSize::Lg, "Learn More" }
                        }

                        AnimatedElement { on_mount: true, delay_ms: 800, class: "flex items-center space-x-6 pt-6",
                            p { class: "text-primary-600 dark:text-primary-400 text-sm", "Trusted by:" }
                            div { class: "flex space-x-8",
                                for company in TRUSTED_BY {
                                    div { key: "{company}", class: "text-primary-800 dark:text-primary-200 font-semibold whitespace-nowrap hover-grow",
                                        "{company}"
                                    }
                                }
                            }
                        }
                    }

                    AnimatedElement {
                        on_mount: true,
                        delay_ms: 300,
                        variant: AnimationVariant::Scale,
                        class: "relative",
                        div { style: "{tilt_css}",
                            BrowserMockup {}
                        }
                        div { class: "absolute -top-6 -right-6 w-24 h-24 bg-accent-500 dark:bg-accent-600 rounded-full blur-xl opacity-20 pulse-glow" }
                        div { class: "absolute -bottom-8 -left-8 w-32 h-32 bg-primary-950 dark:bg-white rounded-full blur-xl opacity-10 pulse-glow pulse-glow-late" }
                    }
                }

                div { class: "absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center space-y-2 scroll-hint",
                    span { class: "text-sm text-primary-600 dark:text-primary-400", "Scroll to explore" }
                    div { class: "w-1 h-8 relative",
                        div { class: "absolute top-0 left-0 w-full h-full bg-primary-300 dark:bg-primary-700 rounded-full" }
                        div { class: "absolute top-0 left-0 w-full bg-primary-950 dark:bg-white rounded-full scroll-hint-bar" }
                    }
                }
            }
        }
    }
}
