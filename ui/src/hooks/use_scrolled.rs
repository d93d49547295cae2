//=============================================================================
// File: src/hooks/use_scrolled.rs
//=============================================================================

// Reports whether the window has scrolled past a given offset. The header
// uses it to switch to its solid backdrop.

#[cfg(target_arch = "wasm32")]
pub use self::wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use self::webview::*;

/// # WebAssembly (WASM) Implementation
/// Listens for `scroll` on the window through `web_sys` and removes the
/// listener when the owning component is dropped.
#[cfg(target_arch = "wasm32")]
mod wasm32 {
    use std::rc::Rc;

    use dioxus::prelude::*;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    pub fn use_scrolled(offset: f64) -> Signal<bool> {
        let mut scrolled = use_signal(|| false);

        let listener = use_hook(|| {
            let closure = Closure::<dyn FnMut()>::new(move || {
                let y = web_sys::window()
                    .and_then(|w| w.scroll_y().ok())
                    .unwrap_or(0.0);
                let now = y > offset;
                if *scrolled.peek() != now {
                    scrolled.set(now);
                }
            });
            if let Some(window) = web_sys::window() {
                if window
                    .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
                    .is_err()
                {
                    dioxus_logger::tracing::warn!("could not subscribe to window scroll");
                }
            }
            Rc::new(closure)
        });

        use_drop(move || {
            let closure: &Closure<dyn FnMut()> = &listener;
            let callback: &JsValue = closure.as_ref();
            if let Some(window) = web_sys::window() {
                if window
                    .remove_event_listener_with_callback("scroll", callback.unchecked_ref())
                    .is_err()
                {
                    dioxus_logger::tracing::debug!("could not unsubscribe from window scroll");
                }
            }
        });

        scrolled
    }
}

/// # Webview Implementation
/// Desktop renders into a webview, so the listener is installed with a small
/// script that reports back through `eval`.
#[cfg(not(target_arch = "wasm32"))]
mod webview {
    use dioxus::prelude::*;

    pub fn use_scrolled(offset: f64) -> Signal<bool> {
        let mut scrolled = use_signal(|| false);

        use_future(move || async move {
            let js = format!(
                r#"
                const report = () => dioxus.send(window.scrollY > {offset});
                window.addEventListener("scroll", report, {{ passive: true }});
                report();
                await new Promise(() => {{}});
                "#
            );
            let mut eval = document::eval(&js);
            while let Ok(now) = eval.recv::<bool>().await {
                if *scrolled.peek() != now {
                    scrolled.set(now);
                }
            }
        });

        scrolled
    }
}
