use clap::Subcommand;

/// Story bank commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StoryCommands {
    /// Add a story.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: String,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long = "topic")]
        topics: Vec<String>,
    },
    /// Get a story by id.
    Get { id: String },
    /// List stories, optionally by tag.
    List {
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Record that a story was used in a pipeline item.
    Use { id: String, pipeline: String },
    /// Delete a story.
    Delete { id: String },
}

/// Question bank commands.
#[derive(Clone, Debug, Subcommand)]
pub enum QuestionCommands {
    /// Add a question.
    Add {
        #[arg(long)]
        question: String,
        #[arg(long)]
        context: Option<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long = "topic")]
        topics: Vec<String>,
    },
    /// Get a question by id.
    Get { id: String },
    /// List questions, optionally by tag.
    List {
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Record that a question was used in a pipeline item.
    Use { id: String, pipeline: String },
    /// Delete a question.
    Delete { id: String },
}
