use clap::Subcommand;

/// Research document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DocCommands {
    /// Create a document from a markdown file.
    Create {
        file: String,
        /// Category: mitzvah, course, draft, speech.
        #[arg(long, default_value = "draft")]
        category: String,
        /// Title override (defaults to the file's first heading).
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        topic: Option<String>,
    },
    /// Get a document by id or slug.
    Get { id: String },
    /// List documents.
    List {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Update a document.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        /// Replace content from a markdown file (re-derives sections).
        #[arg(long)]
        file: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// Status: research, prep, session, practice, complete.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        topic: Option<String>,
    },
    /// Delete a document.
    Delete { id: String },
    /// Topic groups across the library.
    Topics,
    /// Section comments.
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },
    /// Stored quizzes.
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },
    /// Export unresolved comments as a feedback file.
    Feedback {
        slug: String,
        /// Output directory (defaults to the configured feedback dir).
        #[arg(long)]
        out: Option<String>,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum CommentCommands {
    /// Add a comment to a section.
    Add {
        document: String,
        section: String,
        content: String,
        /// Type: note, needs_research, simplify, add_story, great, question.
        #[arg(long, default_value = "note")]
        r#type: String,
    },
    /// List a document's comments.
    List {
        document: String,
        #[arg(long)]
        resolved: bool,
    },
    /// Mark a comment resolved.
    Resolve { id: String },
    /// Delete a comment.
    Delete { id: String },
}

#[derive(Clone, Debug, Subcommand)]
pub enum QuizCommands {
    /// Save a quiz for a document from a JSON questions file.
    Save { document: String, file: String },
    /// Show the latest quiz for a document.
    Show { document: String },
}
