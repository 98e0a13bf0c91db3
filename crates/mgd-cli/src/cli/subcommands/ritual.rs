use clap::Subcommand;

/// Daily ritual commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RitualCommands {
    /// Create a ritual.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Frequency: daily, weekday, shabbos, weekly.
        #[arg(long, default_value = "daily")]
        frequency: String,
        #[arg(long)]
        content: Option<String>,
        #[arg(long, default_value_t = 0)]
        sort_order: i64,
    },
    /// List rituals with today's completion state.
    List {
        /// Include deactivated rituals.
        #[arg(long)]
        all: bool,
    },
    /// Check off a ritual for a date (defaults to today).
    Complete {
        id: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Undo a completion.
    Uncomplete {
        id: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Current completion streak for a ritual.
    Streak { id: String },
    /// Deactivate a ritual (kept for history).
    Deactivate { id: String },
}
