use clap::Subcommand;

/// Content pipeline commands.
#[derive(Clone, Debug, Subcommand)]
pub enum PipelineCommands {
    /// Create an item (starts at the idea stage).
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        content_type: Option<String>,
        #[arg(long)]
        audience: Option<String>,
    },
    /// Get an item by id.
    Get { id: String },
    /// List items, optionally one stage.
    List {
        /// Stage: idea, research, draft, practice, ready, delivered.
        #[arg(long)]
        stage: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Move an item to a stage (any stage is reachable).
    Stage { id: String, stage: String },
    /// Update an item's fields.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        content_type: Option<String>,
        #[arg(long)]
        document: Option<String>,
        #[arg(long)]
        audience: Option<String>,
    },
    /// Delete an item.
    Delete { id: String },
    /// Item counts per stage.
    Counts,
}
