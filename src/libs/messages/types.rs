#[derive(Debug, Clone)]
pub enum Message {
    // === PUNCH MESSAGES ===
    PunchRecorded {
        employee: String,
        slot: String,
        action: String,
        time: String,
    },
    PunchRejected(String),
    SessionState(String),

    // === SHIFT MESSAGES ===
    ShiftHeader(String, String), // employee, date
    NoShiftFound(String, String), // employee, date
    ShiftIncomplete,
    ShiftAmbiguous,
    WorkedTotal(String),

    // === SUMMARY MESSAGES ===
    WorkingHoursForMonth(String, String), // employee, month/year
    IncompleteDays(usize),
    NoShiftsForMonth,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved(String),

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,

    // === INPUT MESSAGES ===
    InvalidDate(String),
    InvalidMonth(String),
}
