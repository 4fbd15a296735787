//! Per-invocation session state: cached version strings and the component catalog.
//!
//! A `Session` is created empty for every process run, filled by the pre-action hook
//! and handed to the action by reference. Nothing here is persisted.

use crate::api::VersionSource;
use crate::models::{Component, ComponentCatalog};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, warn};

/// Keys of the cached version values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StoreKey {
    /// Latest published version of the CLI itself.
    CliLatestVersion,
    /// Latest published version of the UI framework package.
    LatestVersion,
}

impl StoreKey {
    pub const ALL: [StoreKey; 2] = [StoreKey::CliLatestVersion, StoreKey::LatestVersion];

    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::CliLatestVersion => "cliLatestVersion",
            StoreKey::LatestVersion => "latestVersion",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Default)]
pub struct Session {
    store: BTreeMap<StoreKey, String>,
    catalog: Option<ComponentCatalog>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: StoreKey) -> Option<&str> {
        self.store.get(&key).map(String::as_str)
    }

    pub fn set(&mut self, key: StoreKey, value: impl Into<String>) {
        self.store.insert(key, value.into());
    }

    /// Seeds the session catalog from freshly fetched registry components.
    pub fn init_components(&mut self, components: Vec<Component>) {
        let catalog = ComponentCatalog::new(components);
        debug!("Seeded session with {} components", catalog.len());
        self.catalog = Some(catalog);
    }

    /// The seeded catalog, if the current command fetched one.
    pub fn catalog(&self) -> Option<&ComponentCatalog> {
        self.catalog.as_ref()
    }

    /// Re-reads every cached version from `source`.
    ///
    /// Lookup failures only leave the key unset; they never fail the command.
    pub async fn refresh_versions<V: VersionSource>(&mut self, source: &V) {
        for key in StoreKey::ALL {
            match source.lookup(key).await {
                Ok(Some(version)) => {
                    debug!("{} = {}", key, version);
                    self.set(key, version);
                },
                Ok(None) => debug!("No value available for {}", key),
                Err(e) => warn!("Failed to look up {}: {}", key, e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AppError, Result};
    use crate::models::test_component;

    struct FixedVersions;

    impl VersionSource for FixedVersions {
        async fn lookup(&self, key: StoreKey) -> Result<Option<String>> {
            match key {
                StoreKey::CliLatestVersion => Ok(Some("0.2.0".to_string())),
                StoreKey::LatestVersion => Err(AppError::Cli("registry down".to_string())),
            }
        }
    }

    #[test]
    fn test_store_key_names() {
        assert_eq!(StoreKey::CliLatestVersion.to_string(), "cliLatestVersion");
        assert_eq!(StoreKey::LatestVersion.to_string(), "latestVersion");
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert!(session.catalog().is_none());
        assert!(session.get(StoreKey::LatestVersion).is_none());
    }

    #[test]
    fn test_init_components() {
        let mut session = Session::new();
        session.init_components(vec![test_component("button", "2.0.26")]);
        assert_eq!(session.catalog().map(ComponentCatalog::len), Some(1));
    }

    #[tokio::test]
    async fn test_refresh_versions_tolerates_lookup_failures() {
        let mut session = Session::new();
        session.set(StoreKey::LatestVersion, "1.0.0");

        session.refresh_versions(&FixedVersions).await;

        assert_eq!(session.get(StoreKey::CliLatestVersion), Some("0.2.0"));
        // A failed lookup keeps whatever was there
        assert_eq!(session.get(StoreKey::LatestVersion), Some("1.0.0"));
    }
}
