use clap::Subcommand;

/// Course and daily-lesson commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// Create a course from a JSON segments file.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        source_type: Option<String>,
        /// JSON array of { "title": optional, "content": string }.
        #[arg(long)]
        segments_file: String,
    },
    /// Get a course by id.
    Get { id: String },
    /// List courses.
    List,
    /// List a course's segments in order.
    Segments { course: String },
    /// Mark a segment completed (defaults to today).
    Complete {
        segment: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// The next uncompleted segment of every course.
    Today,
}
