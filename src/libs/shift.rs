//! Shift records: the persisted two-slot punch record per employee-day.

use crate::libs::time::Stamp;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque staff identifier, owned by the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    /// Wraps an identifier as handed out by the staff directory. No validation
    /// is done here.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as stored in the `employee_id` column.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Natural key of a [`ShiftRecord`].
///
/// Punches are serialized per key, and the store holds at most one record
/// per key. Displays as `employee@YYYY-MM-DD` in logs and errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShiftKey {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
}

impl ShiftKey {
    pub fn new(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self { employee_id, date }
    }
}

impl fmt::Display for ShiftKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}@{}", self.employee_id, self.date.format("%Y-%m-%d"))
    }
}

/// Positional slot of a record as stored.
///
/// This is where a punch was written, not what it means: morning and
/// afternoon come from [`crate::libs::classifier`].
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotId {
    First,
    Second,
}

impl SlotId {
    /// Both slots in storage order.
    pub const ALL: [SlotId; 2] = [SlotId::First, SlotId::Second];

    /// Storage position, 0 for `First`. Used as a tie-break when two slots
    /// start at the same instant.
    pub fn index(self) -> usize {
        match self {
            SlotId::First => 0,
            SlotId::Second => 1,
        }
    }

    /// The slot that is not `self`.
    pub fn other(self) -> SlotId {
        match self {
            SlotId::First => SlotId::Second,
            SlotId::Second => SlotId::First,
        }
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SlotId::First => write!(f, "first"),
            SlotId::Second => write!(f, "second"),
        }
    }
}

/// One `{start, end}` punch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Slot {
    pub start: Stamp,
    pub end: Stamp,
}

impl Slot {
    /// Builds a slot from anything convertible to a [`Stamp`]. Epoch
    /// placeholders become `Unset`.
    pub fn new(start: impl Into<Stamp>, end: impl Into<Stamp>) -> Self {
        Self { start: start.into(), end: end.into() }
    }

    /// Started and not yet ended.
    pub fn is_open(&self) -> bool {
        self.start.is_set() && !self.end.is_set()
    }

    /// Both endpoints recorded.
    pub fn is_closed(&self) -> bool {
        self.start.is_set() && self.end.is_set()
    }
}

/// The persisted punch record of one employee on one day.
///
/// At most two slots exist; `version` is bumped by the store on every save
/// and is 0 for a record that has never been written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub employee_id: EmployeeId,
    pub date: NaiveDate,
    pub first_slot: Slot,
    pub second_slot: Slot,
    #[serde(default)]
    pub version: u64,
}

impl ShiftRecord {
    /// An empty record, as seen before the first punch of the day.
    pub fn new(employee_id: EmployeeId, date: NaiveDate) -> Self {
        Self {
            employee_id,
            date,
            first_slot: Slot::default(),
            second_slot: Slot::default(),
            version: 0,
        }
    }

    /// A record with both slots given, still at version 0. Used for imports
    /// and tests.
    pub fn with_slots(employee_id: EmployeeId, date: NaiveDate, first_slot: Slot, second_slot: Slot) -> Self {
        Self {
            first_slot,
            second_slot,
            ..Self::new(employee_id, date)
        }
    }

    /// The `(employee, date)` key this record is stored and locked under.
    pub fn key(&self) -> ShiftKey {
        ShiftKey::new(self.employee_id.clone(), self.date)
    }

    /// The raw slot at position `id`, as stored.
    pub fn slot(&self, id: SlotId) -> &Slot {
        match id {
            SlotId::First => &self.first_slot,
            SlotId::Second => &self.second_slot,
        }
    }

    /// Mutable access to the raw slot at position `id`.
    ///
    /// Only the session state machine writes slots. Changes made here skip
    /// its transition checks.
    pub fn slot_mut(&mut self, id: SlotId) -> &mut Slot {
        match id {
            SlotId::First => &mut self.first_slot,
            SlotId::Second => &mut self.second_slot,
        }
    }

    /// Slots that carry a start, in chronological order of that start.
    pub fn pairs(&self) -> Vec<(SlotId, Slot)> {
        let mut pairs: Vec<(SlotId, Slot)> = SlotId::ALL
            .iter()
            .map(|&id| (id, *self.slot(id)))
            .filter(|(_, slot)| slot.start.is_set())
            .collect();
        pairs.sort_by_key(|(id, slot)| (slot.start.instant(), id.index()));
        pairs
    }

    /// The raw slot currently open, if any.
    pub fn open_slot(&self) -> Option<SlotId> {
        SlotId::ALL.into_iter().find(|&id| self.slot(id).is_open())
    }
}
