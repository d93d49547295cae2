use dioxus::prelude::*;
use view_state::reveal::RevealAction;
use view_state::reveal::RevealBlock;
use view_state::reveal::RevealConfig;
use view_state::reveal::VariantStyle;

use crate::compat;

/// Reactive wrapper around a [`RevealBlock`].
///
/// Delay timers are spawned on the calling component's scope, so they die
/// with it; the block's own token check covers anything that slips through.
#[derive(Clone, Copy)]
pub struct RevealHandle {
    block: Signal<RevealBlock>,
}

impl RevealHandle {
    /// Feeds one intersection ratio to the block, starting the delay timer
    /// if this is the crossing.
    pub fn observe(&mut self, ratio: f64) {
        let action = self.block.write().observe(ratio);
        if let RevealAction::Schedule { token, delay } = action {
            let mut block = self.block;
            spawn(async move {
                compat::sleep(delay).await;
                block.write().fire(token);
            });
        }
    }

    pub fn is_visible(&self) -> bool {
        self.block.read().is_visible()
    }

    pub fn style(&self) -> VariantStyle {
        self.block.read().style()
    }

    pub fn config(&self) -> RevealConfig {
        *self.block.read().config()
    }
}

pub fn use_reveal(config: RevealConfig) -> RevealHandle {
    let mut block = use_signal(|| RevealBlock::new(config));

    use_drop(move || {
        if let Ok(mut b) = block.try_write() {
            b.teardown();
        }
    });

    RevealHandle { block }
}
