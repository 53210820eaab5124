//! Completeness and worked-time analysis over classified shifts.
//!
//! Every function here classifies first and works on display columns, never
//! on raw positions: the open slot may sit in raw "second" while being shown
//! as morning work, and each column's duration comes from the raw pair routed
//! into it.

use crate::libs::classifier::{display_view, ClassifiedShift};
use crate::libs::shift::ShiftRecord;
use crate::libs::time::{duration_minutes, format_duration};
use serde::Serialize;

/// True when any display column has a start but no end.
pub fn is_incomplete(record: &ShiftRecord) -> bool {
    view_is_incomplete(&display_view(record))
}

/// Minutes worked across both display columns. Open columns count as 0.
pub fn total_worked_minutes(record: &ShiftRecord) -> i64 {
    view_worked_minutes(&display_view(record))
}

/// [`total_worked_minutes`] rendered as `HH:MM`, `--:--` when nothing is closed.
pub fn format_total_worked(record: &ShiftRecord) -> String {
    format_duration(total_worked_minutes(record))
}

fn view_is_incomplete(view: &ClassifiedShift) -> bool {
    view.views().iter().any(|column| column.is_open())
}

fn view_worked_minutes(view: &ClassifiedShift) -> i64 {
    view.views()
        .iter()
        .filter(|column| column.is_closed())
        .map(|column| duration_minutes(column.start, column.end))
        .sum()
}

/// Everything a report needs about one record, derived from one classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftAnalysis {
    pub view: ClassifiedShift,
    pub first_minutes: i64,
    pub second_minutes: i64,
    pub total_minutes: i64,
    pub incomplete: bool,
}

impl ShiftAnalysis {
    pub fn of(record: &ShiftRecord) -> Self {
        let view = display_view(record);
        Self {
            first_minutes: duration_minutes(view.display_first.start, view.display_first.end),
            second_minutes: duration_minutes(view.display_second.start, view.display_second.end),
            total_minutes: view_worked_minutes(&view),
            incomplete: view_is_incomplete(&view),
            view,
        }
    }
}
