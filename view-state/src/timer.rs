/// Identifies one scheduled timer. A token is only honoured while it is the
/// most recent one its owner issued.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct TimerToken(u64);

/// Hands out tokens and remembers which one is live.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub(crate) struct TimerSlot {
    generation: u64,
    pending: Option<TimerToken>,
}

impl TimerSlot {
    pub(crate) fn issue(&mut self) -> TimerToken {
        self.generation += 1;
        let token = TimerToken(self.generation);
        self.pending = Some(token);
        token
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consumes `token` if it is the live one.
    pub(crate) fn take(&mut self, token: TimerToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub(crate) fn cancel(&mut self) {
        self.pending = None;
        self.generation += 1;
    }
}
