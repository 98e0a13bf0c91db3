use clap::Subcommand;

/// Batch importers. All are best-effort: individual failures are counted
/// and reported, not fatal.
#[derive(Clone, Debug, Subcommand)]
pub enum ImportCommands {
    /// Import markdown documents from a content tree.
    Docs { root: String },
    /// Import paired practice/research parsha files as one topic.
    Parsha { root: String, name: String },
    /// Install the canonical 63-masechta reference list.
    #[command(name = "seed-shas")]
    SeedShas,
    /// Install starter rituals and growth defaults.
    #[command(name = "seed-growth")]
    SeedGrowth,
}

/// Reminder commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RemindCommands {
    /// Print reminders due right now.
    Check,
    /// Poll once a minute and print reminders as they come due.
    Watch,
}

/// Usage tracking and profile commands.
#[derive(Clone, Debug, Subcommand)]
pub enum UsageCommands {
    /// Per-command invocation counts.
    Stats {
        #[arg(long, default_value_t = 30)]
        days: u32,
    },
    /// Recent raw usage events.
    Recent {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Set a profile key to a JSON value.
    Set { key: String, value: String },
    /// Get a profile key.
    Get { key: String },
}
