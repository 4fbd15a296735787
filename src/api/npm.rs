//! Looks up the latest published versions cached in the session store.

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::session::StoreKey;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, error};

const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// Resolves a store key to its current value.
#[allow(async_fn_in_trait)]
pub trait VersionSource {
    async fn lookup(&self, key: StoreKey) -> Result<Option<String>>;
}

#[derive(Debug, Deserialize)]
struct PackageManifest {
    version: String,
}

/// Client for the npm registry `/<package>/latest` endpoint.
pub struct NpmClient {
    client: Client,
    base_url: String,
    framework_package: String,
    cli_package: String,
    offline: bool,
}

impl NpmClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder().timeout(LOOKUP_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: config.npm_registry_url.trim_end_matches('/').to_string(),
            framework_package: config.framework_package.clone(),
            cli_package: config.cli_package.clone(),
            offline: config.offline,
        })
    }

    fn package_for(&self, key: StoreKey) -> &str {
        match key {
            StoreKey::CliLatestVersion => &self.cli_package,
            StoreKey::LatestVersion => &self.framework_package,
        }
    }

    /// Fetches the `latest` dist-tag version of `package`.
    pub async fn latest_version(&self, package: &str) -> Result<String> {
        // Scoped names keep the `@` but escape the slash
        let url = format!("{}/{}/latest", self.base_url, package.replace('/', "%2f"));
        debug!("Looking up latest version of {} at {}", package, url);

        let manifest: PackageManifest = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                error!("Version lookup for {} failed: {}", package, e);
                AppError::Api(e.into())
            })?
            .json()
            .await?;

        Ok(manifest.version)
    }
}

impl VersionSource for NpmClient {
    async fn lookup(&self, key: StoreKey) -> Result<Option<String>> {
        if self.offline {
            return Ok(None);
        }
        self.latest_version(self.package_for(key)).await.map(Some)
    }
}
