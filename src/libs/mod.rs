//! Core library modules for shiftclock.
//!
//! ## Features
//!
//! - **Time**: Sentinel handling, clock-time and duration formatting
//! - **Shift Model**: Two-slot records keyed by employee and date
//! - **Reconciliation**: Slot classification, completeness and worked time
//! - **Punching**: Session state machine and the serialized punch engine
//! - **Infrastructure**: Configuration, data storage, messaging
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use shiftclock::libs::analyzer::{is_incomplete, total_worked_minutes};
//! use shiftclock::libs::shift::{EmployeeId, ShiftRecord, Slot};
//! use shiftclock::libs::time::Stamp;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
//! let record = ShiftRecord::with_slots(
//!     EmployeeId::new("e-1"),
//!     date,
//!     Slot::new(Stamp::parse("2025-03-10 15:00:00"), Stamp::parse("2025-03-10 19:00:00")),
//!     Slot::default(),
//! );
//! assert_eq!(total_worked_minutes(&record), 240);
//! assert!(!is_incomplete(&record));
//! ```

pub mod analyzer;
pub mod classifier;
pub mod clock;
pub mod config;
pub mod data_storage;
pub mod error;
pub mod messages;
pub mod punch;
pub mod session;
pub mod shift;
pub mod store;
pub mod summary;
pub mod time;
