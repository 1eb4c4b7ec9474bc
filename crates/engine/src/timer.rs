use liftlog_domain::Seconds;

/// Single-shot countdown for rest periods, driven by a one-second tick.
///
/// At most one countdown runs at a time; `start` replaces any running
/// countdown. Completion is observed exactly once, either as `true` from
/// [`RestTimer::tick`] on natural expiry or as `true` from
/// [`RestTimer::skip`].
#[derive(Debug, Default)]
pub struct RestTimer {
    remaining: Option<u32>,
}

impl RestTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a countdown of `duration` seconds. A zero duration leaves
    /// the timer idle, there is no zero-length suspension.
    pub fn start(&mut self, duration: Seconds) {
        let seconds = u32::from(duration);
        self.remaining = if seconds == 0 { None } else { Some(seconds) };
    }

    /// Advances the countdown by one second. Returns `true` exactly when
    /// the countdown reaches zero.
    pub fn tick(&mut self) -> bool {
        match self.remaining {
            Some(1) => {
                self.remaining = None;
                true
            }
            Some(seconds) => {
                self.remaining = Some(seconds - 1);
                false
            }
            None => false,
        }
    }

    /// Cancels the countdown and reports whether one was running.
    pub fn skip(&mut self) -> bool {
        self.remaining.take().is_some()
    }

    /// Cancels the countdown without completion semantics.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    #[must_use]
    pub fn remaining(&self) -> Option<u32> {
        self.remaining
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.remaining.is_some()
    }
}

/// Free-running session-duration counter. Ticks every second, including
/// during rests, until stopped; stopping freezes the count.
#[derive(Debug, Default)]
pub struct ElapsedClock {
    seconds: u64,
    stopped: bool,
}

impl ElapsedClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        if !self.stopped {
            self.seconds += 1;
        }
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    #[must_use]
    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
