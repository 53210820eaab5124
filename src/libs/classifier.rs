//! Morning/afternoon reclassification of raw punch slots.
//!
//! Operators may clock in through either raw slot, but reports always show
//! morning work on the left and afternoon work on the right. A slot whose start
//! is at or after 14:30 belongs to the afternoon column.
//!
//! Classification is re-derived on every read and never stored: editing a
//! start across the boundary changes the routing.
//!
//! ## Routing Rules
//!
//! - Slots without a start are never displayed, whatever their end says
//! - A single started slot goes to its column, the other column stays unset
//! - Two afternoon starts keep their stored positions
//! - Otherwise each slot goes to its own column
//!
//! Two morning starts would land in the same column. [`classify`] reports that
//! as [`AmbiguousClassification`]; [`display_view`] falls back to showing both
//! pairs in chronological order so neither is dropped from totals.

use crate::libs::shift::{ShiftRecord, Slot, SlotId};
use crate::libs::time::Stamp;
use serde::Serialize;
use thiserror::Error;

/// First minute that counts as afternoon.
pub const AFTERNOON_FROM: (u32, u32) = (14, 30);

/// A display column: the raw slot that was routed into it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SlotView {
    pub start: Stamp,
    pub end: Stamp,
    pub source: Option<SlotId>,
}

impl SlotView {
    fn from_slot(id: SlotId, slot: &Slot) -> Self {
        Self {
            start: slot.start,
            end: slot.end,
            source: Some(id),
        }
    }

    pub fn is_open(&self) -> bool {
        self.start.is_set() && !self.end.is_set()
    }

    pub fn is_closed(&self) -> bool {
        self.start.is_set() && self.end.is_set()
    }
}

/// Derived morning/afternoon view of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ClassifiedShift {
    /// Morning work.
    pub display_first: SlotView,
    /// Afternoon work.
    pub display_second: SlotView,
}

impl ClassifiedShift {
    pub fn views(&self) -> [&SlotView; 2] {
        [&self.display_first, &self.display_second]
    }
}

/// Both raw slots started before the afternoon boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("both slots of {employee} on {date} start before 14:30 ({first_start} and {second_start})")]
pub struct AmbiguousClassification {
    pub employee: String,
    pub date: String,
    pub first_start: Stamp,
    pub second_start: Stamp,
    /// Both pairs in chronological order.
    pub fallback: ClassifiedShift,
}

/// True for a start at or after 14:30. An unset start is never afternoon.
pub fn is_afternoon(start: Stamp) -> bool {
    let (from_hour, from_minute) = AFTERNOON_FROM;
    match start.hour_minute() {
        Some((hour, minute)) => hour > from_hour || (hour == from_hour && minute >= from_minute),
        None => false,
    }
}

/// Routes the raw slots of `record` into display columns.
pub fn classify(record: &ShiftRecord) -> Result<ClassifiedShift, AmbiguousClassification> {
    let first = record.slot(SlotId::First);
    let second = record.slot(SlotId::Second);

    match (first.start.is_set(), second.start.is_set()) {
        (false, false) => Ok(ClassifiedShift::default()),
        (true, false) => Ok(route_single(SlotId::First, first)),
        (false, true) => Ok(route_single(SlotId::Second, second)),
        (true, true) => {
            let first_afternoon = is_afternoon(first.start);
            let second_afternoon = is_afternoon(second.start);

            if first_afternoon && second_afternoon {
                return Ok(positional(record));
            }
            if first_afternoon == second_afternoon {
                return Err(AmbiguousClassification {
                    employee: record.employee_id.to_string(),
                    date: record.date.format("%Y-%m-%d").to_string(),
                    first_start: first.start,
                    second_start: second.start,
                    fallback: chronological(record),
                });
            }

            let (morning, afternoon) = if first_afternoon {
                (SlotId::Second, SlotId::First)
            } else {
                (SlotId::First, SlotId::Second)
            };
            Ok(ClassifiedShift {
                display_first: SlotView::from_slot(morning, record.slot(morning)),
                display_second: SlotView::from_slot(afternoon, record.slot(afternoon)),
            })
        }
    }
}

/// Total version of [`classify`]: an ambiguous record is shown chronologically.
pub fn display_view(record: &ShiftRecord) -> ClassifiedShift {
    classify(record).unwrap_or_else(|ambiguous| {
        tracing::warn!(
            employee = %record.employee_id,
            date = %record.date,
            "{}; showing slots chronologically",
            ambiguous
        );
        ambiguous.fallback
    })
}

fn route_single(id: SlotId, slot: &Slot) -> ClassifiedShift {
    let view = SlotView::from_slot(id, slot);
    if is_afternoon(slot.start) {
        ClassifiedShift {
            display_second: view,
            ..ClassifiedShift::default()
        }
    } else {
        ClassifiedShift {
            display_first: view,
            ..ClassifiedShift::default()
        }
    }
}

fn positional(record: &ShiftRecord) -> ClassifiedShift {
    ClassifiedShift {
        display_first: SlotView::from_slot(SlotId::First, record.slot(SlotId::First)),
        display_second: SlotView::from_slot(SlotId::Second, record.slot(SlotId::Second)),
    }
}

fn chronological(record: &ShiftRecord) -> ClassifiedShift {
    let mut pairs = record.pairs().into_iter().map(|(id, slot)| SlotView::from_slot(id, &slot));
    ClassifiedShift {
        display_first: pairs.next().unwrap_or_default(),
        display_second: pairs.next().unwrap_or_default(),
    }
}
