use std::path::Path;

use anyhow::Context;
use serde::Serialize;

use mgd_db::service::MaggidService;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::output::output;

const CONFIG_TEMPLATE: &str = "\
# Maggid project configuration. Every key can also be set through the
# environment as MAGGID_<SECTION>__<KEY>.

[general]
# default_limit = 20
# feedback_dir = \"coaching/feedback\"

[remote]
# url = \"libsql://...\"
# auth_token = \"...\"

[remind]
# morning_hour = 7
# evening_hour = 21
# task_hour = 8
# event_lead_minutes = 15
";

#[derive(Serialize)]
struct InitReport {
    project_root: String,
    created_config: bool,
}

/// Handle `mgd init`: create the `.maggid` marker directory, a commented
/// config template, and the database schema.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = Path::new(&args.path);
    let maggid_dir = root.join(".maggid");
    std::fs::create_dir_all(&maggid_dir)
        .with_context(|| format!("failed to create {}", maggid_dir.display()))?;

    let config_path = maggid_dir.join("config.toml");
    let created_config = if config_path.exists() {
        false
    } else {
        std::fs::write(&config_path, CONFIG_TEMPLATE)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        true
    };

    // Opening the database runs the migrations.
    let db_path = maggid_dir.join("maggid.db");
    MaggidService::new_local(&db_path.to_string_lossy())
        .await
        .context("failed to create maggid database")?;

    let report = InitReport {
        project_root: root.display().to_string(),
        created_config,
    };
    output(&report, flags.format)
}
