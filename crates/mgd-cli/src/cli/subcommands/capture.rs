use clap::Subcommand;

/// Story-capture commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CaptureCommands {
    /// Show the rotating prompt for a date (defaults to today).
    Prompt {
        #[arg(long)]
        date: Option<String>,
    },
    /// Record a capture against the day's prompt.
    Add {
        response: String,
        #[arg(long)]
        emotion: Option<String>,
        /// Free-form capture with your own prompt instead of the rotation.
        #[arg(long)]
        free: Option<String>,
        #[arg(long)]
        date: Option<String>,
    },
    /// List recent captures.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Promote a capture into the story bank.
    Promote {
        id: String,
        #[arg(long)]
        title: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Capture totals and current streak.
    Stats,
}
