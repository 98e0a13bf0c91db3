//! Partial-update structs with builders.
//!
//! Each field is `Option<...>`: `None` means "leave unchanged". Nullable
//! columns use `Option<Option<T>>` so `Some(None)` can set them to NULL.

pub mod document;
pub mod goal;
pub mod pipeline;
pub mod task;

pub use document::{DocumentUpdate, DocumentUpdateBuilder};
pub use goal::{GoalUpdate, GoalUpdateBuilder};
pub use pipeline::{PipelineUpdate, PipelineUpdateBuilder};
pub use task::{TaskUpdate, TaskUpdateBuilder};
