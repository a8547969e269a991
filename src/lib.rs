//! Doctor appointment booking wizard.
//!
//! Loads a doctor directory (falling back to built-in samples when the
//! endpoint is unavailable) and walks the user through selecting a doctor,
//! describing the concern, picking a date/time and confirming.

pub mod config;
pub mod directory;
pub mod error;
pub mod messaging;
pub mod session;
pub mod ui;
pub mod wizard;
