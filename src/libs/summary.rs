//! Aggregate worked-time reporting over many shift records.
//!
//! Each record becomes a [`FormattedShift`] row of pre-formatted strings, ready
//! for console tables and export. The summary total is the plain sum of every
//! record's worked minutes: records with nothing closed add 0, while their row
//! still shows the `--:--` placeholder.
//!
//! ## Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shiftclock::libs::shift::{EmployeeId, ShiftRecord};
//! use shiftclock::libs::summary::ShiftSummary;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let summary = ShiftSummary::from_records(&[ShiftRecord::new(EmployeeId::new("e-1"), date)]);
//! assert_eq!(summary.total_minutes, 0);
//! assert_eq!(summary.rows[0].worked, "--:--");
//! assert_eq!(summary.total(), "00:00");
//! ```

use crate::libs::analyzer::ShiftAnalysis;
use crate::libs::shift::ShiftRecord;
use crate::libs::time::{format_clock_time, format_duration, format_hours_minutes};
use serde::{Deserialize, Serialize};

/// One record, formatted for display.
///
/// Column pairs follow the display routing: `morning_*` is the first display
/// column and `afternoon_*` the second.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedShift {
    pub date: String,
    pub employee: String,
    pub morning_start: String,
    pub morning_end: String,
    pub afternoon_start: String,
    pub afternoon_end: String,
    /// Worked time of the day, `--:--` when no column is closed.
    pub worked: String,
    pub incomplete: bool,
}

impl FormattedShift {
    pub fn from_analysis(record: &ShiftRecord, analysis: &ShiftAnalysis) -> Self {
        let view = &analysis.view;
        Self {
            date: record.date.format("%Y-%m-%d").to_string(),
            employee: record.employee_id.to_string(),
            morning_start: format_clock_time(view.display_first.start),
            morning_end: format_clock_time(view.display_first.end),
            afternoon_start: format_clock_time(view.display_second.start),
            afternoon_end: format_clock_time(view.display_second.end),
            worked: format_duration(analysis.total_minutes),
            incomplete: analysis.incomplete,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftSummary {
    /// Rows sorted by date, then employee.
    pub rows: Vec<FormattedShift>,
    pub total_minutes: i64,
    pub incomplete_days: usize,
}

impl ShiftSummary {
    pub fn from_records(records: &[ShiftRecord]) -> Self {
        let mut sorted: Vec<&ShiftRecord> = records.iter().collect();
        sorted.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.employee_id.cmp(&b.employee_id)));

        let mut rows = Vec::with_capacity(sorted.len());
        let mut total_minutes = 0;
        let mut incomplete_days = 0;
        for record in sorted {
            let analysis = ShiftAnalysis::of(record);
            total_minutes += analysis.total_minutes;
            if analysis.incomplete {
                incomplete_days += 1;
            }
            rows.push(FormattedShift::from_analysis(record, &analysis));
        }

        Self {
            rows,
            total_minutes,
            incomplete_days,
        }
    }

    /// Total worked time as `HH:MM`; `00:00` when nothing was completed.
    pub fn total(&self) -> String {
        format_hours_minutes(self.total_minutes)
    }
}
