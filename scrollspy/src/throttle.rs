/// Coalesces scroll events into at most one evaluation per display refresh.
///
/// Call [`FrameThrottle::request`] from the scroll handler: it returns `true` only when no
/// evaluation is pending, in which case the adapter schedules a frame callback. The callback
/// runs the evaluation and then calls [`FrameThrottle::complete`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameThrottle {
    ticking: bool,
    coalesced: u64,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&mut self) -> bool {
        if self.ticking {
            self.coalesced = self.coalesced.saturating_add(1);
            return false;
        }
        self.ticking = true;
        true
    }

    pub fn complete(&mut self) {
        debug_assert!(self.ticking, "FrameThrottle::complete without a pending request");
        if self.coalesced > 0 {
            strace!(coalesced = self.coalesced, "FrameThrottle: coalesced scroll events");
        }
        self.ticking = false;
        self.coalesced = 0;
    }

    pub fn is_pending(&self) -> bool {
        self.ticking
    }

    /// Scroll events absorbed since the pending evaluation was scheduled.
    pub fn coalesced(&self) -> u64 {
        self.coalesced
    }
}
