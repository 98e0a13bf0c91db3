use clap::Subcommand;

/// Calendar event commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EventCommands {
    /// Create an event.
    Create {
        #[arg(long)]
        title: String,
        /// Start time, RFC 3339 or "YYYY-MM-DD HH:MM" local.
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        event_type: Option<String>,
        #[arg(long)]
        recurring: Option<String>,
        #[arg(long)]
        pipeline: Option<String>,
    },
    /// Get an event by id.
    Get { id: String },
    /// Upcoming events, soonest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Delete an event.
    Delete { id: String },
}

/// Weekly schedule block commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ScheduleCommands {
    /// Add a recurring block. Day 0 = Sunday .. 6 = Shabbos; omit for daily.
    Add {
        #[arg(long)]
        day: Option<u8>,
        /// Start time as HH:MM.
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        activity: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List blocks, optionally for one day.
    List {
        #[arg(long)]
        day: Option<u8>,
    },
    /// Delete a block.
    Delete { id: String },
}
