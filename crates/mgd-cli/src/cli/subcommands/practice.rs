use clap::Subcommand;

/// Practice log commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PracticeCommands {
    /// Log a rehearsal. The three V ratings are 1-5.
    Log {
        #[arg(long)]
        pipeline: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        minutes: Option<i64>,
        #[arg(long)]
        practice_type: Option<String>,
        #[arg(long)]
        vocal: Option<i64>,
        #[arg(long)]
        vitality: Option<i64>,
        #[arg(long)]
        visual: Option<i64>,
        #[arg(long)]
        notes: Option<String>,
    },
    /// List practice sessions, optionally for one pipeline item.
    List {
        #[arg(long)]
        pipeline: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}

/// Delivery journal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JournalCommands {
    /// Record a delivery debrief.
    Add {
        #[arg(long)]
        pipeline: Option<String>,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        audience: Option<String>,
        #[arg(long)]
        landed: Option<String>,
        #[arg(long)]
        didnt: Option<String>,
        #[arg(long)]
        reactions: Option<String>,
        /// Overall rating 1-5.
        #[arg(long)]
        rating: Option<i64>,
        #[arg(long)]
        lessons: Option<String>,
    },
    /// List delivery entries, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
}
