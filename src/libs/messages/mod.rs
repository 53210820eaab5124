//! User-facing message catalogue.
//!
//! Every console line goes through a [`Message`] variant and one of the
//! `msg_*` macros, so wording lives in one place.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
