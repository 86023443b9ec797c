/// Background music autoplay state.
///
/// Browsers reject `play()` until the user interacts with the page, so the
/// first attempt may fail and is retried on later gestures. Only one `play()`
/// request is in flight at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AutoplayState {
    #[default]
    Idle,
    Pending,
    Started,
}

#[derive(Clone, Debug, Default)]
pub struct AutoplayGate {
    state: AutoplayState,
    attempts: u32,
}

impl AutoplayGate {
    #[inline]
    pub fn state(&self) -> AutoplayState {
        self.state
    }

    #[inline]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[inline]
    pub fn is_started(&self) -> bool {
        self.state == AutoplayState::Started
    }

    /// Returns true when the caller should issue a `play()` request.
    pub fn begin_attempt(&mut self) -> bool {
        if self.state != AutoplayState::Idle {
            return false;
        }
        self.state = AutoplayState::Pending;
        self.attempts += 1;
        true
    }

    pub fn succeeded(&mut self) {
        self.state = AutoplayState::Started;
    }

    pub fn failed(&mut self) {
        if self.state == AutoplayState::Pending {
            self.state = AutoplayState::Idle;
        }
    }
}
