//! Repository methods, one module per entity family.
//!
//! All methods are `impl MaggidService` blocks; the service stays a single
//! type so the CLI only carries one handle.

mod bank;
mod capture;
mod comment;
mod course;
mod document;
mod event;
mod growth;
mod nudges;
mod pipeline;
mod practice;
mod quiz;
mod reminders;
mod ritual;
mod shas;
mod task;
mod usage;

pub use capture::prompt_for_date;
pub use growth::reflection_prompt_for_date;
pub use reminders::{Reminder, ReminderKind, ReminderSchedule};
