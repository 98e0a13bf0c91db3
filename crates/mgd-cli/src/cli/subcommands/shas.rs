use clap::Subcommand;

/// Shas tracker commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ShasCommands {
    /// List all masechtos in canonical order.
    List,
    /// Progress report for a track, grouped by seder.
    Progress {
        /// Track: gemara or mishnayos.
        #[arg(long, default_value = "gemara")]
        track: String,
    },
    /// Mark a masechta finished (by id or name).
    Complete {
        masechta: String,
        #[arg(long, default_value = "gemara")]
        track: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Clear a completion mark.
    Uncomplete {
        masechta: String,
        #[arg(long, default_value = "gemara")]
        track: String,
    },
}
