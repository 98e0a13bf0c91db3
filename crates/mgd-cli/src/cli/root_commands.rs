use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CaptureCommands, CourseCommands, DocCommands, EventCommands, GoalCommands, ImportCommands,
    JournalCommands, PipelineCommands, PracticeCommands, QuestionCommands, ReflectCommands,
    RemindCommands, RitualCommands, ScheduleCommands, ShasCommands, StoryCommands, TaskCommands,
    UsageCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize maggid in a directory.
    Init(InitArgs),
    /// Today at a glance: nudges, rituals, tasks, events, pipeline.
    Dashboard,
    /// Research documents and speech drafts.
    Doc {
        #[command(subcommand)]
        action: DocCommands,
    },
    /// Content pipeline (idea through delivered).
    Pipeline {
        #[command(subcommand)]
        action: PipelineCommands,
    },
    /// Tasks.
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Calendar events.
    Event {
        #[command(subcommand)]
        action: EventCommands,
    },
    /// Weekly schedule blocks.
    Schedule {
        #[command(subcommand)]
        action: ScheduleCommands,
    },
    /// Daily rituals.
    Ritual {
        #[command(subcommand)]
        action: RitualCommands,
    },
    /// Courses and daily lessons.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Story bank.
    Story {
        #[command(subcommand)]
        action: StoryCommands,
    },
    /// Question bank.
    Question {
        #[command(subcommand)]
        action: QuestionCommands,
    },
    /// Daily story capture.
    Capture {
        #[command(subcommand)]
        action: CaptureCommands,
    },
    /// Practice logs.
    Practice {
        #[command(subcommand)]
        action: PracticeCommands,
    },
    /// Delivery journal.
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },
    /// Shas learning tracker.
    Shas {
        #[command(subcommand)]
        action: ShasCommands,
    },
    /// Goals.
    Goal {
        #[command(subcommand)]
        action: GoalCommands,
    },
    /// Daily reflections.
    Reflect {
        #[command(subcommand)]
        action: ReflectCommands,
    },
    /// Batch importers and seeders.
    Import {
        #[command(subcommand)]
        action: ImportCommands,
    },
    /// Reminders.
    Remind {
        #[command(subcommand)]
        action: RemindCommands,
    },
    /// Usage stats and profile.
    Usage {
        #[command(subcommand)]
        action: UsageCommands,
    },
    /// Sync the embedded replica with the configured remote.
    Sync,
}

/// Arguments for `mgd init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory).
    #[arg(default_value = ".")]
    pub path: String,
}
