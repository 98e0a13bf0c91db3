use std::path::{Path, PathBuf};

use serde::Serialize;

use mgd_core::enums::{DocCategory, DocStatus};
use mgd_core::markdown::{extract_title, slugify};
use mgd_db::updates::DocumentUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ImportCommands;
use crate::context::AppContext;
use crate::output::output;

/// Per-record outcome counts for a batch import.
#[derive(Debug, Default, Serialize)]
pub struct ImportReport {
    pub imported: u32,
    pub updated: u32,
    pub skipped: u32,
    pub errors: Vec<String>,
}

/// Handle `mgd import`.
pub async fn handle(
    action: &ImportCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ImportCommands::Docs { root } => {
            let report = import_docs(Path::new(root), ctx).await;
            output(&report, flags.format)
        }
        ImportCommands::Parsha { root, name } => {
            let report = import_parsha(Path::new(root), name, ctx).await;
            output(&report, flags.format)
        }
        ImportCommands::SeedShas => {
            let inserted = ctx.service.seed_shas().await?;
            output(&serde_json::json!({ "inserted": inserted }), flags.format)
        }
        ImportCommands::SeedGrowth => {
            let rituals = ctx.service.seed_growth().await?;
            ctx.service
                .set_profile(
                    "growth_defaults",
                    serde_json::json!({
                        "capture_prompts": "default",
                        "reflection_prompts": "default",
                    }),
                )
                .await?;
            output(&serde_json::json!({ "rituals": rituals }), flags.format)
        }
    }
}

/// Walk the conventional content tree and upsert every markdown file.
async fn import_docs(root: &Path, ctx: &AppContext) -> ImportReport {
    let mut report = ImportReport::default();

    for dir in subdirectories(&root.join("content/mitzvos"), &mut report) {
        let topic = dir_slug(&dir);
        import_dir(&dir, DocCategory::Mitzvah, topic.as_deref(), ctx, &mut report).await;
    }

    import_dir(
        &root.join("content/drafts"),
        DocCategory::Draft,
        None,
        ctx,
        &mut report,
    )
    .await;

    for dir in subdirectories(&root.join("courses"), &mut report) {
        let topic = dir_slug(&dir);
        import_dir(&dir, DocCategory::Course, topic.as_deref(), ctx, &mut report).await;
    }

    report
}

/// Import the paired practice/research files of one parsha as a topic group.
async fn import_parsha(root: &Path, name: &str, ctx: &AppContext) -> ImportReport {
    let mut report = ImportReport::default();
    let topic = slugify(name);

    for path in markdown_files(root, &mut report) {
        let Some(stem) = stem_of(&path) else {
            report.skipped += 1;
            continue;
        };
        // Only the practice-*/research-* pair for this parsha.
        let is_pair_member = stem.starts_with("practice") || stem.starts_with("research");
        if !is_pair_member || !stem.contains(topic.as_str()) {
            report.skipped += 1;
            continue;
        }
        import_file(&path, DocCategory::Speech, Some(&topic), ctx, &mut report).await;
    }

    report
}

async fn import_dir(
    dir: &Path,
    category: DocCategory,
    topic: Option<&str>,
    ctx: &AppContext,
    report: &mut ImportReport,
) {
    if !dir.is_dir() {
        return;
    }
    for path in markdown_files(dir, report) {
        import_file(&path, category, topic, ctx, report).await;
    }
}

async fn import_file(
    path: &Path,
    category: DocCategory,
    topic: Option<&str>,
    ctx: &AppContext,
    report: &mut ImportReport,
) {
    let Some(stem) = stem_of(path) else {
        report.skipped += 1;
        return;
    };
    // Print-layout copies duplicate their source document.
    if stem.ends_with("-print") {
        report.skipped += 1;
        return;
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) => {
            report
                .errors
                .push(format!("{}: {error}", path.display()));
            return;
        }
    };

    let title = derive_title(&content, &stem);
    let slug = slugify(&stem);
    let status = status_for_stem(&stem);

    match ctx
        .service
        .upsert_document_by_slug(&slug, &title, category, &content, topic)
        .await
    {
        Ok((doc, created)) => {
            if created {
                report.imported += 1;
            } else {
                report.updated += 1;
            }
            if doc.status != status {
                let update = DocumentUpdateBuilder::new().status(status).build();
                if let Err(error) = ctx.service.update_document(&doc.id, update).await {
                    report
                        .errors
                        .push(format!("{}: {error}", path.display()));
                }
            }
        }
        Err(error) => {
            report
                .errors
                .push(format!("{}: {error}", path.display()));
        }
    }
}

/// Document title: the first `# ` heading with any dash-separated subtitle
/// stripped, falling back to the file stem.
fn derive_title(content: &str, stem: &str) -> String {
    extract_title(content).map_or_else(
        || stem.to_string(),
        |title| {
            title
                .split(['—', '–'])
                .next()
                .unwrap_or(&title)
                .trim()
                .to_string()
        },
    )
}

/// Workflow status is encoded in the file base name by convention.
fn status_for_stem(stem: &str) -> DocStatus {
    if stem.starts_with("prep") {
        DocStatus::Prep
    } else if stem.starts_with("session") {
        DocStatus::Session
    } else if stem.starts_with("practice") {
        DocStatus::Practice
    } else {
        DocStatus::Research
    }
}

fn subdirectories(parent: &Path, report: &mut ImportReport) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(parent) {
        Ok(entries) => entries,
        Err(_) => return Vec::new(),
    };
    let mut dirs = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) if entry.path().is_dir() => dirs.push(entry.path()),
            Ok(_) => {}
            Err(error) => report
                .errors
                .push(format!("{}: {error}", parent.display())),
        }
    }
    dirs.sort();
    dirs
}

fn markdown_files(dir: &Path, report: &mut ImportReport) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            report.errors.push(format!("{}: {error}", dir.display()));
            return Vec::new();
        }
    };
    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "md") {
                    files.push(path);
                }
            }
            Err(error) => report.errors.push(format!("{}: {error}", dir.display())),
        }
    }
    files.sort();
    files
}

fn stem_of(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
}

fn dir_slug(dir: &Path) -> Option<String> {
    dir.file_name()
        .map(|name| slugify(&name.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use mgd_core::enums::DocStatus;
    use pretty_assertions::assert_eq;

    use super::{derive_title, status_for_stem};

    #[test]
    fn title_comes_from_first_heading() {
        let content = "# Hilchos Shabbos — Session Notes\n\nBody text.\n";
        assert_eq!(derive_title(content, "session-shabbos"), "Hilchos Shabbos");
    }

    #[test]
    fn title_falls_back_to_stem() {
        assert_eq!(derive_title("no heading here\n", "research-chanukah"), "research-chanukah");
    }

    #[test]
    fn en_dash_subtitles_strip_too() {
        let content = "# Tefillah – part two\n";
        assert_eq!(derive_title(content, "x"), "Tefillah");
    }

    #[test]
    fn stem_prefix_maps_to_status() {
        assert_eq!(status_for_stem("research-bereishis"), DocStatus::Research);
        assert_eq!(status_for_stem("prep-bereishis"), DocStatus::Prep);
        assert_eq!(status_for_stem("session-notes"), DocStatus::Session);
        assert_eq!(status_for_stem("practice-bereishis"), DocStatus::Practice);
        assert_eq!(status_for_stem("overview"), DocStatus::Research);
    }
}
