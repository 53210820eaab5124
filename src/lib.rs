//! # Shiftclock - shift clocking and reconciliation
//!
//! Records employee punches into a two-slot record per employee-day and
//! derives what reports need from it.
//!
//! ## Features
//!
//! - **Punch Engine**: Serialized per employee-day, with conflict detection
//! - **Slot Classification**: Morning/afternoon display routing of raw slots
//! - **Reconciliation**: Incomplete-shift detection and worked-time totals
//! - **Storage**: SQLite store with optimistic versioning, or in-memory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shiftclock::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
