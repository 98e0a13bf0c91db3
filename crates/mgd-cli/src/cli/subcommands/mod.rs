mod bank;
mod capture;
mod course;
mod doc;
mod event;
mod growth;
mod import;
mod pipeline;
mod practice;
mod ritual;
mod shas;
mod task;

pub use bank::{QuestionCommands, StoryCommands};
pub use capture::CaptureCommands;
pub use course::CourseCommands;
pub use doc::{CommentCommands, DocCommands, QuizCommands};
pub use event::{EventCommands, ScheduleCommands};
pub use growth::{GoalCommands, ReflectCommands};
pub use import::{ImportCommands, RemindCommands, UsageCommands};
pub use pipeline::PipelineCommands;
pub use practice::{JournalCommands, PracticeCommands};
pub use ritual::RitualCommands;
pub use shas::ShasCommands;
pub use task::TaskCommands;
