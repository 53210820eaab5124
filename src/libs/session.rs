//! Punch session state machine for one employee-day.
//!
//! The session never owns authoritative state: it is rebuilt from the stored
//! [`ShiftRecord`] and [`PunchSession::apply`] returns the next record without
//! touching the current one, so a rejected punch leaves nothing behind.
//!
//! ```text
//! Idle ──start──▶ FirstOpen ──end──▶ FirstClosed ──start──▶ SecondOpen ──end──▶ SecondClosed
//! ```
//!
//! "First" and "second" in the state names count segments of the day, not raw
//! slot positions; either raw slot may be punched first.

use crate::libs::classifier::is_afternoon;
use crate::libs::error::Conflict;
use crate::libs::shift::{ShiftKey, ShiftRecord, Slot, SlotId};
use crate::libs::time::Stamp;
use chrono::{NaiveDate, NaiveDateTime};
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Clocking in or out on a slot.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PunchAction {
    Start,
    End,
}

impl fmt::Display for PunchAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PunchAction::Start => write!(f, "start"),
            PunchAction::End => write!(f, "end"),
        }
    }
}

/// Progress of a single raw slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlotPhase {
    Empty,
    Open,
    Closed,
}

impl SlotPhase {
    /// An end without a start is not a punch; such a slot is `Empty`.
    pub fn of(slot: &Slot) -> Self {
        match (slot.start.is_set(), slot.end.is_set()) {
            (false, _) => SlotPhase::Empty,
            (true, false) => SlotPhase::Open,
            (true, true) => SlotPhase::Closed,
        }
    }
}

/// Where an employee-day stands, derived from its two raw slots.
///
/// The names count segments of the day: `FirstOpen` is whichever raw slot
/// was started first, and `SecondOpen` the other one after it was closed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Idle,
    FirstOpen,
    FirstClosed,
    SecondOpen,
    SecondClosed,
    /// Both raw slots open. Only reachable through data written outside the
    /// engine; ends are still accepted, starts are not.
    Overlapping,
}

impl SessionState {
    /// Derives the state from the persisted record.
    pub fn of(record: &ShiftRecord) -> Self {
        use SlotPhase::*;
        match (SlotPhase::of(&record.first_slot), SlotPhase::of(&record.second_slot)) {
            (Empty, Empty) => SessionState::Idle,
            (Open, Empty) | (Empty, Open) => SessionState::FirstOpen,
            (Closed, Empty) | (Empty, Closed) => SessionState::FirstClosed,
            (Closed, Open) | (Open, Closed) => SessionState::SecondOpen,
            (Closed, Closed) => SessionState::SecondClosed,
            (Open, Open) => SessionState::Overlapping,
        }
    }

    /// Nothing more can be punched today.
    pub fn is_terminal(&self) -> bool {
        matches!(self, SessionState::SecondClosed)
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// In-memory view of one employee-day, rebuilt from its record.
#[derive(Debug, Clone)]
pub struct PunchSession {
    record: ShiftRecord,
}

impl PunchSession {
    /// Wraps a record loaded from the store, or an empty one.
    pub fn new(record: ShiftRecord) -> Self {
        Self { record }
    }

    /// Key of the underlying record.
    pub fn key(&self) -> ShiftKey {
        self.record.key()
    }

    /// Day this session belongs to. Sessions never cross midnight.
    pub fn date(&self) -> NaiveDate {
        self.record.date
    }

    /// The record this session was built from.
    pub fn record(&self) -> &ShiftRecord {
        &self.record
    }

    /// Current state, recomputed from the record on every call.
    pub fn state(&self) -> SessionState {
        SessionState::of(&self.record)
    }

    /// True if the session belongs to `date`.
    pub fn is_for_day(&self, date: NaiveDate) -> bool {
        self.record.date == date
    }

    /// Computes the record after punching `action` on `slot` at `now`.
    ///
    /// With `reject_ambiguous`, a start that would leave both slots starting
    /// before the afternoon boundary is refused.
    pub fn apply(&self, slot: SlotId, action: PunchAction, now: NaiveDateTime, reject_ambiguous: bool) -> Result<ShiftRecord, Conflict> {
        let mut next = self.record.clone();
        match action {
            PunchAction::Start => {
                match SlotPhase::of(self.record.slot(slot)) {
                    SlotPhase::Open => return Err(Conflict::SlotAlreadyOpen(slot)),
                    SlotPhase::Closed => return Err(Conflict::SlotAlreadyClosed(slot)),
                    SlotPhase::Empty => {}
                }
                if SlotPhase::of(self.record.slot(slot.other())) == SlotPhase::Open {
                    return Err(Conflict::OtherSlotOpen {
                        requested: slot,
                        open: slot.other(),
                    });
                }
                let start = Stamp::at(now);
                let other = self.record.slot(slot.other());
                if reject_ambiguous && other.start.is_set() && !is_afternoon(other.start) && !is_afternoon(start) {
                    return Err(Conflict::AmbiguousSlots(slot));
                }
                // A stray end without a start is discarded with the new start.
                *next.slot_mut(slot) = Slot { start, end: Stamp::Unset };
            }
            PunchAction::End => {
                let current = self.record.slot(slot);
                match SlotPhase::of(current) {
                    SlotPhase::Empty => return Err(Conflict::SlotNotOpen(slot)),
                    SlotPhase::Closed => return Err(Conflict::SlotAlreadyClosed(slot)),
                    SlotPhase::Open => {}
                }
                if current.start.instant().is_some_and(|start| now < start) {
                    return Err(Conflict::EndBeforeStart(slot));
                }
                next.slot_mut(slot).end = Stamp::at(now);
            }
        }
        Ok(next)
    }
}
