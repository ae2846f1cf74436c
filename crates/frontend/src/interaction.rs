//! Marker lifecycle: turns map clicks into a start/end pair and keeps the
//! visuals consistent with [`InteractionState`] across every mutation path
//! (click-to-place, click-to-remove, reset).
//!
//! A click is handled in two halves because the road snap is a network
//! round-trip: `begin_click` issues a ticket before the lookup and
//! `finish_click` redeems it afterwards. Each new click (and each reset)
//! invalidates older tickets, so a snap response that resolves after the
//! user has already moved on is discarded instead of applied.

use waylight_shared::models::LatLon;

use crate::state::{
    InteractionState, MarkerId, Phase, StateUpdate, PROMPT_BOTH_SET, PROMPT_END_REMOVED,
    PROMPT_INITIAL, PROMPT_START_REMOVED, PROMPT_START_SET,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerRole {
    Start,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedMarker {
    pub id: MarkerId,
    pub role: MarkerRole,
    pub at: LatLon,
}

/// The slice of the map library this controller needs.
pub trait MarkerMap {
    fn place_marker(&mut self, at: LatLon, role: MarkerRole) -> MarkerId;
    fn remove_marker(&mut self, id: MarkerId);
}

/// Marker store backing the rendered overlay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerBoard {
    markers: Vec<PlacedMarker>,
    next_id: MarkerId,
}

impl MarkerBoard {
    pub fn markers(&self) -> &[PlacedMarker] {
        &self.markers
    }

    pub fn coord_of(&self, id: MarkerId) -> Option<LatLon> {
        self.markers.iter().find(|m| m.id == id).map(|m| m.at)
    }
}

impl MarkerMap for MarkerBoard {
    fn place_marker(&mut self, at: LatLon, role: MarkerRole) -> MarkerId {
        self.next_id += 1;
        let id = self.next_id;
        self.markers.push(PlacedMarker { id, role, at });
        id
    }

    fn remove_marker(&mut self, id: MarkerId) {
        self.markers.retain(|m| m.id != id);
    }
}

/// Proof that a click is still the latest one when its snap resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct RoutePlanner<M: MarkerMap> {
    state: InteractionState,
    map: M,
    click_gen: u64,
}

impl<M: MarkerMap> RoutePlanner<M> {
    pub fn new(map: M) -> Self {
        RoutePlanner {
            state: InteractionState::default(),
            map,
            click_gen: 0,
        }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn map(&self) -> &M {
        &self.map
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn status_text(&self) -> &str {
        &self.state.status_text
    }

    /// Which role the next placement would take, or `None` when both
    /// points are committed.
    fn next_role(&self) -> Option<MarkerRole> {
        if self.state.start.is_none() {
            Some(MarkerRole::Start)
        } else if self.state.end.is_none() {
            Some(MarkerRole::End)
        } else {
            None
        }
    }

    /// Start handling a map click. Returns `None` when both markers are
    /// already set: the click is silently ignored and no road lookup
    /// should be made. Otherwise the issued ticket supersedes any click
    /// still waiting on its lookup.
    pub fn begin_click(&mut self) -> Option<ClickTicket> {
        self.next_role()?;
        self.click_gen += 1;
        Some(ClickTicket(self.click_gen))
    }

    /// Complete a click with the effective (possibly snapped) coordinate.
    ///
    /// The placement decision is made against the state as it exists now,
    /// not as it was when the click landed; a superseded ticket is
    /// discarded. Returns the role that was placed.
    pub fn finish_click(&mut self, ticket: ClickTicket, at: LatLon) -> Option<MarkerRole> {
        if ticket.0 != self.click_gen {
            return None;
        }
        let role = self.next_role()?;
        // Consume the ticket: a redeemed click can never apply again.
        self.click_gen += 1;
        let id = self.map.place_marker(at, role);
        match role {
            MarkerRole::Start => {
                self.state
                    .apply(StateUpdate::default().start(Some(id)).status(PROMPT_START_SET));
            }
            MarkerRole::End => {
                self.state
                    .apply(StateUpdate::default().end(Some(id)).status(PROMPT_BOTH_SET));
            }
        }
        Some(role)
    }

    /// Remove the start marker. No-op when there is none.
    pub fn remove_start(&mut self) {
        let Some(id) = self.state.start else {
            return;
        };
        self.map.remove_marker(id);
        self.state
            .apply(StateUpdate::default().start(None).status(PROMPT_START_REMOVED));
    }

    /// Remove the end marker. No-op when there is none.
    pub fn remove_end(&mut self) {
        let Some(id) = self.state.end else {
            return;
        };
        self.map.remove_marker(id);
        self.state
            .apply(StateUpdate::default().end(None).status(PROMPT_END_REMOVED));
    }

    /// Remove whatever markers exist and restore the initial prompt. Also
    /// supersedes any click still waiting on its lookup, so a snap
    /// resolving across a reset cannot resurrect a marker.
    pub fn reset(&mut self) {
        self.click_gen += 1;
        if let Some(id) = self.state.start {
            self.map.remove_marker(id);
        }
        if let Some(id) = self.state.end {
            self.map.remove_marker(id);
        }
        self.state.apply(
            StateUpdate::default()
                .start(None)
                .end(None)
                .status(PROMPT_INITIAL),
        );
    }
}
