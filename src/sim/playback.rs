//! Playback — explicit state machine over a precomputed step sequence.
//!
//! The simulator produces the whole step sequence once; playback is
//! nothing but an index into it plus a play state, advanced by an
//! external scheduler (a timer loop, an event loop tick). Because the
//! steps are immutable, pausing, rewinding, and scrubbing never re-run
//! the algorithm.

use super::step::Step;

// ─── PlayState ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

// ─── Playback ────────────────────────────────────────────────────────────────

/// Cursor over an immutable step sequence.
#[derive(Debug, Clone)]
pub struct Playback {
    steps: Vec<Step>,
    index: usize,
    state: PlayState,
}

impl Playback {
    pub fn new(steps: Vec<Step>) -> Self {
        Self {
            steps,
            index: 0,
            state: PlayState::Stopped,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn state(&self) -> PlayState {
        self.state
    }

    /// The step under the cursor, if any.
    pub fn current(&self) -> Option<&Step> {
        self.steps.get(self.index)
    }

    /// Start (or resume) playing. No-op on an empty sequence.
    pub fn play(&mut self) {
        if !self.steps.is_empty() {
            self.state = PlayState::Playing;
        }
    }

    /// Freeze the cursor without losing the position.
    pub fn pause(&mut self) {
        if self.state == PlayState::Playing {
            self.state = PlayState::Paused;
        }
    }

    /// Advance one step if playing. Returns the newly current step, or
    /// None when paused, stopped, or already at the final step (in which
    /// case playback stops).
    pub fn tick(&mut self) -> Option<&Step> {
        if self.state != PlayState::Playing {
            return None;
        }
        if self.index + 1 < self.steps.len() {
            self.index += 1;
            self.steps.get(self.index)
        } else {
            self.state = PlayState::Stopped;
            None
        }
    }

    /// Move the cursor to an arbitrary step. Returns false (and leaves
    /// the cursor in place) if `index` is out of range.
    pub fn seek(&mut self, index: usize) -> bool {
        if index < self.steps.len() {
            self.index = index;
            true
        } else {
            false
        }
    }

    /// Back to the first step, stopped.
    pub fn rewind(&mut self) {
        self.index = 0;
        self.state = PlayState::Stopped;
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
