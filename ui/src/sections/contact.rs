use dioxus::prelude::*;
use view_state::contact::ContactForm;
use view_state::contact::FormField;
use view_state::contact::FormTimer;
use view_state::prefs::SitePrefs;
use view_state::reveal::AnimationVariant;
use view_state::style::ButtonVariant;

use crate::compat;
use crate::components::animated_element::AnimatedElement;
use crate::components::button::Button;
use crate::components::icon::Icon;
use crate::components::icon::IconName;
use crate::components::layout::Section;
use crate::content::CONTACT_INFO;
use crate::content::SOCIAL_PLATFORMS;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-md border border-primary-200 dark:border-primary-700 bg-white dark:bg-primary-800 text-primary-950 dark:text-white focus:outline-none focus:ring-2 focus:ring-accent-500 transition-all duration-300";

/// Runs `timer`, then feeds it back to the form; repeats for whatever timer
/// the form hands out next. Lives on the calling scope, so an unmounted form
/// never sees a late callback.
fn run_form_timer(mut form: Signal<ContactForm>, timer: FormTimer) {
    spawn(async move {
        let mut next = Some(timer);
        while let Some(FormTimer { token, delay }) = next {
            compat::sleep(delay).await;
            next = form.write().fire(token);
            dioxus_logger::tracing::debug!("contact form now {:?}", form.peek().phase());
        }
    });
}

#[component]
fn FormInput(mut form: Signal<ContactForm>, field: FormField, #[props(default = "text")] input_type: &'static str) -> Element {
    let value = form.read().get(field).to_string();
    rsx! {
        div {
            label { r#for: "{field}", class: "block text-sm font-medium mb-2", "{field.label()}" }
            if field == FormField::Message {
                textarea {
                    id: "{field}",
                    name: "{field}",
                    rows: 5,
                    required: true,
                    class: INPUT_CLASS,
                    value: "{value}",
                    oninput: move |evt| {
                        if let Err(e) = form.write().set(field, evt.value()) {
                            dioxus_logger::tracing::warn!("{e}");
                        }
                    },
                }
            } else {
                input {
                    r#type: input_type,
                    id: "{field}",
                    name: "{field}",
                    required: true,
                    class: INPUT_CLASS,
                    value: "{value}",
                    oninput: move |evt| {
                        if let Err(e) = form.write().set(field, evt.value()) {
                            dioxus_logger::tracing::warn!("{e}");
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn ContactFormCard() -> Element {
    let prefs = use_context::<SitePrefs>();
    let mut form = use_signal(|| ContactForm::new(prefs.form_timings));

    use_drop(move || {
        if let Ok(mut f) = form.try_write() {
            f.teardown();
        }
    });

    let submitted = form.read().phase().is_submitted();
    let submitting = form.read().phase().is_submitting();

    rsx! {
        div { class: "bg-white dark:bg-primary-900 rounded-xl shadow-xl p-8 border border-primary-100 dark:border-primary-800",
            h3 { class: "text-2xl font-bold mb-6", "Send Us a Message" }

            if submitted {
                AnimatedElement { on_mount: true, variant: AnimationVariant::FadeUp,
                    div { class: "bg-green-50 dark:bg-green-900/30 text-green-800 dark:text-green-200 rounded-lg p-4 flex items-start",
                        role: "status",
                        Icon { name: IconName::CheckCircle, class: "w-5 h-5 mr-2 mt-0.5" }
                        div {
                            p { class: "font-medium", "Message sent successfully!" }
                            p { class: "text-green-700 dark:text-green-300 text-sm", "We'll get back to you as soon as possible." }
                        }
                    }
                }
            } else {
                form {
                    class: "space-y-6",
                    "aria-busy": submitting,
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        let result = form.write().submit();
                        match result {
                            Ok(timer) => run_form_timer(form, timer),
                            Err(e) => dioxus_logger::tracing::warn!("contact form not sent: {e}"),
                        }
                    },
                    div { class: "grid grid-cols-1 md:grid-cols-2 gap-6",
                        FormInput { form, field: FormField::Name }
                        FormInput { form, field: FormField::Email, input_type: "email" }
                    }
                    FormInput { form, field: FormField::Subject }
                    FormInput { form, field: FormField::Message }
                    div { class: "text-right",
                        Button { button_type: "submit", variant: ButtonVariant::Primary, icon: IconName::Send,
                            if submitting { "Sending..." } else { "Send Message" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    rsx! {
        Section { id: "contact",
            AnimatedElement { class: "text-center max-w-3xl mx-auto mb-16",
                h2 { class: "heading-lg mb-4", "Get In Touch" }
                p { class: "text-xl text-primary-600 dark:text-primary-300",
                    "Have a project in mind or just want to say hello? We'd love to hear from you."
                }
            }

            div { class: "grid grid-cols-1 lg:grid-cols-5 gap-12",
                div { class: "lg:col-span-2",
                    AnimatedElement { variant: AnimationVariant::FadeLeft,
                        h3 { class: "text-2xl font-bold mb-6", "Contact Information" }
                        div { class: "space-y-6 mb-8",
                            for item in CONTACT_INFO.iter() {
                                div { key: "{item.title}", class: "flex items-start",
                                    div { class: "w-10 h-10 rounded-full bg-primary-100 dark:bg-primary-800 flex items-center justify-center text-primary-950 dark:text-white mr-4 flex-shrink-0",
                                        Icon { name: item.icon, class: "w-5 h-5" }
                                    }
                                    div {
                                        h4 { class: "font-medium text-lg", "{item.title}" }
                                        p { class: "text-primary-600 dark:text-primary-400", "{item.content}" }
                                    }
                                }
                            }
                        }
                        div {
                            h3 { class: "text-xl font-bold mb-4", "Follow Us" }
                            div { class: "flex space-x-4",
                                for platform in SOCIAL_PLATFORMS {
                                    a {
                                        key: "{platform}",
                                        href: "#",
                                        class: "py-2 px-4 rounded-md border border-primary-200 dark:border-primary-700 text-primary-950 dark:text-white hover:bg-primary-100 dark:hover:bg-primary-800 transition-colors duration-300",
                                        "{platform}"
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "lg:col-span-3",
                    AnimatedElement { variant: AnimationVariant::FadeRight,
                        ContactFormCard {}
                    }
                }
            }
        }
    }
}
