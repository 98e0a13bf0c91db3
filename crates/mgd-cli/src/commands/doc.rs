use std::path::Path;

use anyhow::Context;
use chrono::Local;
use serde::Serialize;

use mgd_core::entities::{Comment, QuizQuestion};
use mgd_core::enums::{DocCategory, DocStatus};
use mgd_core::markdown::extract_title;
use mgd_db::updates::DocumentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{CommentCommands, DocCommands, QuizCommands};
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `mgd doc`.
pub async fn handle(
    action: &DocCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        DocCommands::Create {
            file,
            category,
            title,
            topic,
        } => {
            let content = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {file}"))?;
            let category: DocCategory = parse_enum(category, "category")?;
            let title = title
                .clone()
                .or_else(|| extract_title(&content))
                .unwrap_or_else(|| file_stem(file));
            let doc = ctx
                .service
                .create_document(&title, category, &content, topic.as_deref())
                .await?;
            output(&doc, flags.format)
        }
        DocCommands::Get { id } => {
            let doc = ctx.service.resolve_document(id).await?;
            output(&doc, flags.format)
        }
        DocCommands::List { category, limit } => {
            let category = category
                .as_deref()
                .map(|c| parse_enum::<DocCategory>(c, "category"))
                .transpose()?;
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let docs = ctx.service.list_documents(category, limit).await?;
            output(&docs, flags.format)
        }
        DocCommands::Update {
            id,
            title,
            file,
            category,
            status,
            topic,
        } => {
            let doc = ctx.service.resolve_document(id).await?;
            let mut update = DocumentUpdateBuilder::new();
            if let Some(title) = title {
                update = update.title(title.clone());
            }
            if let Some(file) = file {
                let content = std::fs::read_to_string(file)
                    .with_context(|| format!("failed to read {file}"))?;
                update = update.content(content);
            }
            if let Some(category) = category {
                update = update.category(parse_enum::<DocCategory>(category, "category")?);
            }
            if let Some(status) = status {
                update = update.status(parse_enum::<DocStatus>(status, "status")?);
            }
            if let Some(topic) = topic {
                update = update.topic_slug(Some(topic.clone()));
            }
            let doc = ctx.service.update_document(&doc.id, update.build()).await?;
            output(&doc, flags.format)
        }
        DocCommands::Delete { id } => {
            let doc = ctx.service.resolve_document(id).await?;
            ctx.service.delete_document(&doc.id).await?;
            output(&serde_json::json!({ "deleted": doc.id }), flags.format)
        }
        DocCommands::Topics => {
            let groups = ctx.service.topic_groups().await?;
            output(&groups, flags.format)
        }
        DocCommands::Comment { action } => handle_comment(action, ctx, flags).await,
        DocCommands::Quiz { action } => handle_quiz(action, ctx, flags).await,
        DocCommands::Feedback { slug, out } => feedback(slug, out.as_deref(), ctx, flags).await,
    }
}

async fn handle_comment(
    action: &CommentCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CommentCommands::Add {
            document,
            section,
            content,
            r#type,
        } => {
            let doc = ctx.service.resolve_document(document).await?;
            let comment_type = parse_enum(r#type, "comment type")?;
            let comment = ctx
                .service
                .add_comment(&doc.id, section, content, comment_type)
                .await?;
            output(&comment, flags.format)
        }
        CommentCommands::List { document, resolved } => {
            let doc = ctx.service.resolve_document(document).await?;
            let comments = ctx.service.list_comments(&doc.id, *resolved).await?;
            output(&comments, flags.format)
        }
        CommentCommands::Resolve { id } => {
            let comment = ctx.service.resolve_comment(id).await?;
            output(&comment, flags.format)
        }
        CommentCommands::Delete { id } => {
            ctx.service.delete_comment(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

async fn handle_quiz(
    action: &QuizCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        QuizCommands::Save { document, file } => {
            let doc = ctx.service.resolve_document(document).await?;
            let raw = std::fs::read_to_string(file)
                .with_context(|| format!("failed to read {file}"))?;
            let questions: Vec<QuizQuestion> = serde_json::from_str(&raw)
                .with_context(|| format!("invalid quiz questions in {file}"))?;
            let quiz = ctx.service.save_quiz(&doc.id, questions).await?;
            output(&quiz, flags.format)
        }
        QuizCommands::Show { document } => {
            let doc = ctx.service.resolve_document(document).await?;
            let quiz = ctx
                .service
                .latest_quiz(&doc.id)
                .await?
                .with_context(|| format!("no quiz stored for '{}'", doc.slug))?;
            output(&quiz, flags.format)
        }
    }
}

#[derive(Serialize)]
struct FeedbackReport {
    path: String,
    comments: usize,
}

/// Export a document's unresolved comments as a markdown feedback file,
/// grouped by section.
async fn feedback(
    slug: &str,
    out: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let doc = ctx.service.resolve_document(slug).await?;
    let comments = ctx.service.list_comments(&doc.id, false).await?;
    if comments.is_empty() {
        anyhow::bail!("no unresolved comments on '{}'", doc.slug);
    }

    let mut body = format!(
        "# Feedback: {}\n\nStatus: {} | Exported: {}\n\n",
        doc.title,
        doc.status.as_str(),
        Local::now().format("%Y-%m-%d")
    );
    let mut placed = std::collections::HashSet::new();
    for section in &doc.sections {
        let notes: Vec<&Comment> = comments
            .iter()
            .filter(|c| c.section_id == section.id)
            .collect();
        if notes.is_empty() {
            continue;
        }
        body.push_str(&format!("## {}\n\n", section.title));
        for comment in notes {
            placed.insert(comment.id.clone());
            body.push_str(&comment_bullet(comment));
        }
        body.push('\n');
    }

    // Comments whose section no longer exists still make it into the file.
    let orphans: Vec<&Comment> = comments.iter().filter(|c| !placed.contains(&c.id)).collect();
    if !orphans.is_empty() {
        body.push_str("## General\n\n");
        for comment in orphans {
            body.push_str(&comment_bullet(comment));
        }
        body.push('\n');
    }

    let dir = ctx
        .project_root
        .join(out.unwrap_or(&ctx.config.general.feedback_dir));
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let path = dir.join(format!("{}-comments.md", doc.slug));
    std::fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))?;

    let report = FeedbackReport {
        path: path.display().to_string(),
        comments: comments.len(),
    };
    output(&report, flags.format)
}

fn comment_bullet(comment: &Comment) -> String {
    format!(
        "- **[{}]** {}\n",
        comment.comment_type.as_str(),
        comment.content
    )
}

fn file_stem(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .map_or_else(|| path.to_string(), |s| s.to_string_lossy().into_owned())
}
