#![allow(non_snake_case)] // Allow PascalCase for component function names

use std::time::Duration;

use dioxus::prelude::*;
use view_state::prefs::SitePrefs;
use view_state::reveal::AnimationVariant;
use view_state::reveal::RevealConfig;
use view_state::tilt::Tilt;

use crate::hooks::use_reveal::use_reveal;
use crate::hooks::use_tilt::use_tilt;

#[derive(Props, PartialEq, Clone)]
pub struct AnimatedElementProps {
    children: Element,
    #[props(default)]
    variant: AnimationVariant,
    /// Extra wait between crossing the threshold and starting the animation.
    #[props(default)]
    delay_ms: u64,
    /// Animate as soon as the element mounts instead of when it scrolls in.
    #[props(default = false)]
    on_mount: bool,
    #[props(default, into)]
    class: String,
}

/// Wraps content that animates in once, the first time it scrolls into view.
pub fn AnimatedElement(props: AnimatedElementProps) -> Element {
    let prefs = use_context::<SitePrefs>();
    let variant = props.variant;
    let delay = Duration::from_millis(props.delay_ms);

    let config = match RevealConfig::new(variant, delay, prefs.reveal_threshold) {
        Ok(config) => config,
        Err(e) => {
            dioxus_logger::tracing::warn!("{e}; using the default threshold");
            RevealConfig::new(variant, delay, view_state::reveal::DEFAULT_THRESHOLD)
                .unwrap_or_default()
        }
    };

    let mut reveal = use_reveal(config);
    let mut tilt = use_tilt(Tilt::card);
    let on_mount = props.on_mount;
    let tracks_pointer = variant.tracks_pointer();

    let shown = reveal.style();
    let transition = variant.transition();
    let style = if tracks_pointer {
        format!(
            "opacity: {}; transition: opacity {}ms {}; {}",
            shown.opacity,
            transition.duration.as_millis(),
            transition.easing.to_css(),
            tilt.css(1200)
        )
    } else {
        format!("{} {} will-change: opacity, transform;", shown.to_css(), transition.to_css())
    };

    rsx! {
        div {
            class: "{props.class}",
            style: "{style}",
            "data-variant": "{variant}",
            "data-revealed": reveal.is_visible(),
            onmounted: move |evt| {
                if on_mount {
                    reveal.observe(1.0);
                }
                if tracks_pointer {
                    tilt.mounted(evt);
                }
            },
            onvisible: move |evt: Event<VisibleData>| {
                if on_mount {
                    return;
                }
                let ratio = match evt.get_intersection_ratio() {
                    Ok(ratio) => ratio,
                    Err(_) => {
                        if evt.is_intersecting().unwrap_or(false) { 1.0 } else { 0.0 }
                    }
                };
                reveal.observe(ratio);
            },
            onmouseenter: move |_| {
                if tracks_pointer {
                    tilt.measure();
                }
            },
            onmousemove: move |evt| {
                if tracks_pointer {
                    tilt.pointer_move(evt);
                }
            },
            onmouseleave: move |_| {
                if tracks_pointer {
                    tilt.pointer_leave();
                }
            },
            {props.children}
        }
    }
}
