#![allow(non_snake_case)] // Allow PascalCase for component function names

use dioxus::prelude::*;
use view_state::easing::Easing;
use view_state::press::PressFeedback;
use view_state::style::button_classes;
use view_state::style::ButtonSize;
use view_state::style::ButtonVariant;
use view_state::style::IconPosition;
use view_state::tilt::Tilt;

use crate::components::icon::Icon;
use crate::components::icon::IconName;
use crate::hooks::use_tilt::use_tilt;

#[derive(Props, PartialEq, Clone)]
pub struct ButtonProps {
    children: Element,
    #[props(optional)]
    on_click: Option<EventHandler<MouseEvent>>,
    #[props(default)]
    variant: ButtonVariant,
    #[props(default)]
    size: ButtonSize,
    #[props(optional)]
    icon: Option<IconName>,
    #[props(default)]
    icon_position: IconPosition,
    #[props(default = "button".to_string(), into)]
    button_type: String,
    #[props(default, into)]
    class: String,
}

/// The site's button: themed classes, a spring tilt that follows the
/// pointer, and a small scale bump on hover and press.
pub fn Button(props: ButtonProps) -> Element {
    let mut tilt = use_tilt(Tilt::card);
    let mut press = use_signal(PressFeedback::default);

    let classes = button_classes(
        props.variant,
        props.size,
        props.icon.map(|_| props.icon_position),
        &props.class,
    );
    let style = format!(
        "{} scale: {}; transition: scale 150ms {};",
        tilt.css(1200),
        press.read().scale(),
        Easing::EaseOut.to_css()
    );

    rsx! {
        button {
            r#type: "{props.button_type}",
            class: "{classes}",
            style: "{style}",
            onmounted: move |evt| tilt.mounted(evt),
            onmouseenter: move |_| {
                tilt.measure();
                press.write().pointer_enter();
            },
            onmousemove: move |evt| tilt.pointer_move(evt),
            onmouseleave: move |_| {
                tilt.pointer_leave();
                press.write().pointer_leave();
            },
            onmousedown: move |_| press.write().pointer_down(),
            onmouseup: move |_| press.write().pointer_up(),
            onclick: move |evt| {
                if let Some(handler) = &props.on_click {
                    handler.call(evt);
                }
            },
            if let Some(icon) = props.icon {
                Icon { name: icon, class: "w-5 h-5" }
            }
            span { {props.children} }
        }
    }
}
