//! Hosted database (libSQL remote replica) configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RemoteConfig {
    /// Remote database URL (`libsql://...`). Empty = local-only.
    #[serde(default)]
    pub url: String,

    /// Auth token for the remote database.
    #[serde(default)]
    pub auth_token: String,
}

impl RemoteConfig {
    /// Whether enough is configured to open a synced replica.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unconfigured_by_default() {
        assert!(!RemoteConfig::default().is_configured());
    }

    #[test]
    fn url_alone_is_not_configured() {
        let config = RemoteConfig {
            url: "libsql://maggid.example.turso.io".into(),
            auth_token: String::new(),
        };
        assert!(!config.is_configured());
    }
}
