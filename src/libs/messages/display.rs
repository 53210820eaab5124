use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            Message::PunchRecorded { employee, slot, action, time } => {
                format!("{} punched {} of the {} slot at {}", employee, action, slot, time)
            }
            Message::PunchRejected(reason) => format!("Punch not recorded: {}", reason),
            Message::SessionState(state) => format!("Session state: {}", state),

            Message::ShiftHeader(employee, date) => format!("Shift of {} on {}", employee, date),
            Message::NoShiftFound(employee, date) => format!("No punches found for {} on {}.", employee, date),
            Message::ShiftIncomplete => "This shift has a clock-in without clock-out and needs correction.".to_string(),
            Message::ShiftAmbiguous => "Both slots start in the morning; shown in chronological order.".to_string(),
            Message::WorkedTotal(total) => format!("Worked: {}", total),

            Message::WorkingHoursForMonth(employee, month) => format!("Working hours of {} for {}", employee, month),
            Message::IncompleteDays(count) => format!("{} day(s) with incomplete punches.", count),
            Message::NoShiftsForMonth => "No shifts recorded for this month.".to_string(),

            Message::ConfigSaved(path) => format!("Configuration saved to {}", path),

            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed successfully".to_string(),

            Message::InvalidDate(input) => format!("Invalid date '{}', expected YYYY-MM-DD or 'today'", input),
            Message::InvalidMonth(input) => format!("Invalid month '{}', expected YYYY-MM", input),
        };
        write!(f, "{}", text)
    }
}
