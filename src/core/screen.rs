use thiserror::Error;

/// One of the three full-viewport views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Landing,
    Memories,
    Proposal,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Landing, Screen::Memories, Screen::Proposal];

    /// Id of the section element rendering this screen.
    pub fn element_id(self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Memories => "memories",
            Screen::Proposal => "proposal",
        }
    }

    pub fn next(self) -> Option<Screen> {
        match self {
            Screen::Landing => Some(Screen::Memories),
            Screen::Memories => Some(Screen::Proposal),
            Screen::Proposal => None,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScreenError {
    #[error("cannot leave {from:?}: {active:?} is the active screen")]
    NotActive { from: Screen, active: Screen },
    #[error("transition {from:?} -> {to:?} already in progress")]
    InProgress { from: Screen, to: Screen },
    #[error("transition from {0:?} to itself")]
    SameScreen(Screen),
    #[error("celebration requires the proposal screen, {0:?} is active")]
    NotOnProposal(Screen),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Screen,
    pub to: Screen,
}

/// Tracks which screen is shown, the fade in flight and the celebration latch.
///
/// The outgoing screen stays the visible one until its fade finishes, so at
/// any instant exactly one screen counts as visible.
#[derive(Clone, Debug)]
pub struct ScreenFlow {
    active: Screen,
    pending: Option<Transition>,
    celebrating: bool,
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenFlow {
    pub fn new() -> Self {
        Self {
            active: Screen::Landing,
            pending: None,
            celebrating: false,
        }
    }

    #[inline]
    pub fn active(&self) -> Screen {
        self.active
    }

    #[inline]
    pub fn pending(&self) -> Option<Transition> {
        self.pending
    }

    #[inline]
    pub fn is_celebrating(&self) -> bool {
        self.celebrating
    }

    pub fn begin_transition(&mut self, from: Screen, to: Screen) -> Result<Transition, ScreenError> {
        if let Some(t) = self.pending {
            return Err(ScreenError::InProgress {
                from: t.from,
                to: t.to,
            });
        }
        if from == to {
            return Err(ScreenError::SameScreen(from));
        }
        if from != self.active {
            return Err(ScreenError::NotActive {
                from,
                active: self.active,
            });
        }
        let t = Transition { from, to };
        self.pending = Some(t);
        Ok(t)
    }

    /// Complete the pending fade. Returns the newly active screen.
    pub fn finish_transition(&mut self) -> Option<Screen> {
        let t = self.pending.take()?;
        self.active = t.to;
        Some(t.to)
    }

    #[inline]
    pub fn is_visible(&self, screen: Screen) -> bool {
        self.active == screen
    }

    pub fn visible_count(&self) -> usize {
        Screen::ALL.iter().filter(|s| self.is_visible(**s)).count()
    }

    /// Whether the body should carry the spotlight styling.
    pub fn spotlight(&self) -> bool {
        self.active == Screen::Proposal && !self.celebrating
    }

    /// Latch the celebration. `Ok(true)` only on the first call.
    pub fn celebrate(&mut self) -> Result<bool, ScreenError> {
        if self.active != Screen::Proposal {
            return Err(ScreenError::NotOnProposal(self.active));
        }
        if self.celebrating {
            return Ok(false);
        }
        self.celebrating = true;
        Ok(true)
    }

    /// The evasive button only moves while the question is on screen.
    pub fn physics_active(&self) -> bool {
        self.active == Screen::Proposal && self.pending.is_none() && !self.celebrating
    }
}
