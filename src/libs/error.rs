//! Error types of the punch engine and its storage collaborator.

use crate::libs::shift::{ShiftKey, SlotId};
use chrono::NaiveDate;
use thiserror::Error;

/// A punch that is not legal in the current state of the record.
///
/// Rejections never mutate the record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Conflict {
    #[error("{0} slot is already open")]
    SlotAlreadyOpen(SlotId),

    #[error("{0} slot is already closed")]
    SlotAlreadyClosed(SlotId),

    #[error("{0} slot has not been started")]
    SlotNotOpen(SlotId),

    #[error("cannot start the {requested} slot while the {open} slot is open")]
    OtherSlotOpen { requested: SlotId, open: SlotId },

    #[error("cannot end the {0} slot before its start")]
    EndBeforeStart(SlotId),

    #[error("punches for {date} are closed, today is {today}")]
    StaleDay { date: NaiveDate, today: NaiveDate },

    #[error("starting the {0} slot now would put both slots in the morning")]
    AmbiguousSlots(SlotId),
}

/// Failures of the persistence collaborator.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Shift {key} was modified concurrently (expected version {expected}, found {found:?})")]
    VersionConflict {
        key: ShiftKey,
        expected: u64,
        found: Option<u64>,
    },

    #[error("Storage error: {0}")]
    Other(String),
}

/// What a punch can fail with.
#[derive(Error, Debug)]
pub enum PunchError {
    #[error("Punch rejected: {0}")]
    Conflict(#[from] Conflict),

    #[error("Shift {0} is busy with another punch, nothing was recorded")]
    LockTimeout(ShiftKey),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl PunchError {
    pub fn conflict(&self) -> Option<&Conflict> {
        match self {
            PunchError::Conflict(conflict) => Some(conflict),
            _ => None,
        }
    }
}

pub type PunchResult<T> = Result<T, PunchError>;
