//! Appointment pages.
//!
//! - `list`: table filtered by patient/doctor name and by a day range.
//! - `form`: create/edit form with doctor and patient selects; split into
//!   state, messages, update and view like the larger components.

pub mod form;
pub mod list;
