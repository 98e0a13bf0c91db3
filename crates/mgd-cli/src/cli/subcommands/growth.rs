use clap::Subcommand;

/// Goal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum GoalCommands {
    /// Create a goal.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Target date as YYYY-MM-DD.
        #[arg(long)]
        target: Option<String>,
        #[arg(long, default_value_t = 0)]
        sort_order: i64,
    },
    /// Get a goal by id.
    Get { id: String },
    /// List goals (defaults to active).
    List {
        /// Status: active, achieved, archived.
        #[arg(long)]
        status: Option<String>,
    },
    /// Update a goal.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        target: Option<String>,
    },
    /// Delete a goal.
    Delete { id: String },
}

/// Daily reflection commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReflectCommands {
    /// Show the rotating growth prompt for a date (defaults to today).
    Prompt {
        #[arg(long)]
        date: Option<String>,
    },
    /// Save (or revise) the reflection for a date.
    Save {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        wins: Option<String>,
        #[arg(long)]
        struggles: Option<String>,
        #[arg(long)]
        gratitude: Option<String>,
        #[arg(long)]
        tomorrow: Option<String>,
        /// Repeatable "goal-id=note" pairs.
        #[arg(long = "goal-note")]
        goal_notes: Vec<String>,
        #[arg(long = "theme")]
        themes: Vec<String>,
    },
    /// Show the reflection for a date (defaults to today).
    Show {
        #[arg(long)]
        date: Option<String>,
    },
    /// List recent reflections.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
}
