use std::path::PathBuf;

use anyhow::Context;
use mgd_config::MaggidConfig;
use mgd_db::service::MaggidService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: MaggidService,
    pub config: MaggidConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open the database under `.maggid/` and wire up the service.
    ///
    /// A configured remote opens a synced embedded replica; a failed remote
    /// open degrades to the plain local file with a warning.
    pub async fn init(project_root: PathBuf, config: MaggidConfig) -> anyhow::Result<Self> {
        let maggid_dir = project_root.join(".maggid");
        let db_path = maggid_dir.join("maggid.db");
        let replica_path = maggid_dir.join("maggid-synced.db");

        let db_path_str = db_path.to_string_lossy();
        let replica_path_str = replica_path.to_string_lossy();

        let service = if config.remote.is_configured() {
            match MaggidService::new_synced(
                &replica_path_str,
                &config.remote.url,
                &config.remote.auth_token,
            )
            .await
            {
                Ok(service) => service,
                Err(error) => {
                    tracing::warn!(
                        %error,
                        "failed to open synced replica; falling back to local database"
                    );
                    MaggidService::new_local(&db_path_str)
                        .await
                        .context("failed to open maggid database")?
                }
            }
        } else {
            MaggidService::new_local(&db_path_str)
                .await
                .context("failed to open maggid database")?
        };

        Ok(Self {
            service,
            config,
            project_root,
        })
    }
}
