//! Canonical interaction state for the route widget.
//!
//! All mutation goes through [`InteractionState::apply`]; callers build a
//! [`StateUpdate`] with only the fields they mean to change and the merge
//! leaves everything else untouched.

/// Opaque handle to a placed marker, issued by the map layer. A handle is
/// dead the moment its marker is removed; holders must drop it to `None`.
pub type MarkerId = u64;

pub const PROMPT_INITIAL: &str = "Click the map to set markers.";
pub const PROMPT_START_SET: &str = "Start set! Click again for destination.";
pub const PROMPT_BOTH_SET: &str = "Both markers set!";
pub const PROMPT_START_REMOVED: &str = "Start marker removed. Click the map to set a new start.";
pub const PROMPT_END_REMOVED: &str = "End marker removed. Click the map for destination.";

/// Interaction phase derived from which markers exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    StartSet,
    BothSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    pub status_text: String,
    pub start: Option<MarkerId>,
    pub end: Option<MarkerId>,
}

impl Default for InteractionState {
    fn default() -> Self {
        InteractionState {
            status_text: PROMPT_INITIAL.to_string(),
            start: None,
            end: None,
        }
    }
}

impl InteractionState {
    /// A lone end marker (start retracted while both were set) counts as
    /// `StartSet`: exactly one point is committed and the next click
    /// commits the other.
    pub fn phase(&self) -> Phase {
        match (self.start.is_some(), self.end.is_some()) {
            (false, false) => Phase::Empty,
            (true, true) => Phase::BothSet,
            _ => Phase::StartSet,
        }
    }

    /// Merge `update` into the state. The only sanctioned mutation path;
    /// performs no validation beyond the merge.
    pub fn apply(&mut self, update: StateUpdate) {
        if let Some(text) = update.status_text {
            self.status_text = text;
        }
        if let Some(start) = update.start {
            self.start = start;
        }
        if let Some(end) = update.end {
            self.end = end;
        }
    }
}

/// Partial update of [`InteractionState`]. Unset fields are left alone,
/// including the distinction between "don't touch `start`" and "clear
/// `start`" (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct StateUpdate {
    status_text: Option<String>,
    start: Option<Option<MarkerId>>,
    end: Option<Option<MarkerId>>,
}

impl StateUpdate {
    pub fn status(mut self, text: &str) -> Self {
        self.status_text = Some(text.to_string());
        self
    }

    pub fn start(mut self, marker: Option<MarkerId>) -> Self {
        self.start = Some(marker);
        self
    }

    pub fn end(mut self, marker: Option<MarkerId>) -> Self {
        self.end = Some(marker);
        self
    }
}
