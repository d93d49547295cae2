use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use view_state::tilt::PointerOffset;
use view_state::tilt::Tilt;
use web_time::Instant;

use crate::compat::interval::Interval;

const FRAME: Duration = Duration::from_millis(16);

/// Element bounds in client (viewport) pixels.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
struct Bounds {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

impl Bounds {
    /// Maps a client-space point to an offset from the element centre.
    /// `None` while the bounds are being re-measured or were never read.
    fn offset(&self, x: f64, y: f64, measuring: bool) -> Option<PointerOffset> {
        if measuring || self.width <= 0.0 || self.height <= 0.0 {
            return None;
        }
        Some(PointerOffset::from_element(
            x - self.left,
            y - self.top,
            self.width,
            self.height,
        ))
    }
}

/// Pointer-tracking tilt for one element.
///
/// Wire `onmounted`, `onmouseenter`, `onmousemove` and `onmouseleave` to the
/// matching methods and put [`TiltHandle::css`] in the element's style.
#[derive(Clone, Copy)]
pub struct TiltHandle {
    tilt: Signal<Tilt>,
    element: Signal<Option<Rc<MountedData>>>,
    bounds: Signal<Bounds>,
    measuring: Signal<bool>,
    animating: Signal<bool>,
}

impl TiltHandle {
    pub fn mounted(&mut self, evt: MountedEvent) {
        self.element.set(Some(evt.data()));
        self.measure();
    }

    /// Re-reads the element bounds. Scrolling moves them, so this runs on
    /// enter and after every pointer move.
    pub fn measure(&self) {
        if *self.measuring.peek() {
            return;
        }
        let Some(element) = self.element.peek().clone() else {
            return;
        };
        let mut bounds = self.bounds;
        let mut measuring = self.measuring;
        measuring.set(true);
        spawn(async move {
            if let Ok(rect) = element.get_client_rect().await {
                bounds.set(Bounds {
                    left: rect.origin.x,
                    top: rect.origin.y,
                    width: rect.size.width,
                    height: rect.size.height,
                });
            }
            measuring.set(false);
        });
    }

    /// Moves arriving while a measurement is in flight are dropped, so a
    /// scroll never maps the pointer against stale bounds.
    pub fn pointer_move(&mut self, evt: MouseEvent) {
        let point = evt.client_coordinates();
        let measuring = *self.measuring.peek();
        let offset = self.bounds.peek().offset(point.x, point.y, measuring);
        if let Some(offset) = offset {
            self.tilt.write().pointer_move(offset);
            self.animate();
        }
        self.measure();
    }

    pub fn pointer_leave(&mut self) {
        self.tilt.write().pointer_leave();
        self.animate();
    }

    /// Inline `transform` for the current rotation.
    pub fn css(&self, perspective: u32) -> String {
        self.tilt.read().to_css(perspective)
    }

    /// Runs the springs at roughly display rate until they settle.
    fn animate(&mut self) {
        if *self.animating.peek() {
            return;
        }
        self.animating.set(true);

        let mut tilt = self.tilt;
        let mut animating = self.animating;
        spawn(async move {
            let mut interval = Interval::new(FRAME);
            let mut last = Instant::now();
            loop {
                interval.tick().await;
                let now = Instant::now();
                let dt = now.duration_since(last).as_secs_f64();
                last = now;

                tilt.write().tick(dt);
                if tilt.peek().is_settled() {
                    break;
                }
            }
            animating.set(false);
        });
    }
}

pub fn use_tilt(init: impl FnOnce() -> Tilt) -> TiltHandle {
    TiltHandle {
        tilt: use_signal(init),
        element: use_signal(|| None),
        bounds: use_signal(Bounds::default),
        measuring: use_signal(|| false),
        animating: use_signal(|| false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn centre_of_the_element_is_zero_offset() {
        assert_eq!(CARD.offset(200.0, 100.0, false), Some(PointerOffset::ZERO));
    }

    #[test]
    fn moves_during_a_measurement_are_dropped() {
        assert_eq!(CARD.offset(300.0, 150.0, true), None);
    }

    #[test]
    fn unmeasured_element_yields_no_offset() {
        assert_eq!(Bounds::default().offset(10.0, 10.0, false), None);
    }
}
