//! SQLite persistence for shift records.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use shiftclock::db::shifts::Shifts;
//! use shiftclock::libs::shift::EmployeeId;
//! use shiftclock::libs::store::ShiftStore;
//!
//! let shifts = Shifts::new()?;
//! let today = Local::now().date_naive();
//! let record = shifts.load(&EmployeeId::new("e-17"), today)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management.
///
/// Opens the database file and applies pending migrations.
pub mod db;

/// Versioned schema migrations.
pub mod migrations;

/// Shift records: the SQLite implementation of the store collaborator,
/// with optimistic versioning on save.
pub mod shifts;
