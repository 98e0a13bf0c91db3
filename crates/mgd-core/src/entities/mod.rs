//! Entity structs for all Maggid domain objects.

mod bank;
mod capture;
mod course;
mod document;
mod event;
mod growth;
mod pipeline;
mod practice;
mod quiz;
mod ritual;
mod shas;
mod task;
mod usage;

pub use bank::{Question, Story};
pub use capture::{CaptureStats, StoryCapture};
pub use course::{Course, CourseSegment, DailyLesson};
pub use document::{Comment, ResearchDocument, Section};
pub use event::{CalendarEvent, ScheduleBlock};
pub use growth::{DailyReflection, Goal, GoalNote};
pub use pipeline::PipelineItem;
pub use practice::{DeliveryEntry, PracticeLog};
pub use quiz::{Quiz, QuizQuestion};
pub use ritual::{Ritual, RitualCompletion};
pub use shas::{ShasCompletion, ShasMasechta};
pub use task::Task;
pub use usage::{CommandUsage, ProfileEntry, UsageEvent};
