//! Handlers bound to the CLI commands.
//!
//! The router only knows the [`Actions`] trait; [`ProjectActions`] is the default
//! implementation that works on a project's `package.json` and config files.

mod add;
mod doctor;
mod env;
mod init;
mod list;
mod remove;
mod upgrade;

use crate::cli::{AddArgs, DoctorArgs, EnvArgs, InitArgs, ListArgs, RemoveArgs, UpgradeArgs};
use crate::error::{AppError, Result};
use crate::models::ComponentCatalog;
use crate::session::Session;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use std::path::{Path, PathBuf};

pub(crate) const PACKAGE_JSON: &str = "package.json";
pub(crate) const APP_FILE: &str = "src/App.tsx";
pub(crate) const TAILWIND_CONFIGS: [&str; 4] = [
    "tailwind.config.js",
    "tailwind.config.ts",
    "tailwind.config.cjs",
    "tailwind.config.mjs",
];

/// One handler per action identifier.
#[allow(async_fn_in_trait)]
pub trait Actions {
    async fn add(&self, session: &Session, args: &AddArgs) -> Result<()>;
    async fn init(&self, session: &Session, args: &InitArgs) -> Result<()>;
    async fn remove(&self, session: &Session, args: &RemoveArgs) -> Result<()>;
    async fn upgrade(&self, session: &Session, args: &UpgradeArgs) -> Result<()>;
    async fn list(&self, session: &Session, args: &ListArgs) -> Result<()>;
    async fn env(&self, session: &Session, args: &EnvArgs) -> Result<()>;
    async fn doctor(&self, session: &Session, args: &DoctorArgs) -> Result<()>;
}

/// Actions operating on the project rooted at `root`.
pub struct ProjectActions {
    root: PathBuf,
    interactive: bool,
}

impl ProjectActions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            interactive: false,
        }
    }

    /// Allows prompting the user when input is missing.
    pub fn with_interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a user-supplied path against the project root, falling back to `default`.
    pub(crate) fn resolve(&self, given: Option<&Path>, default: &str) -> PathBuf {
        match given {
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => self.root.join(path),
            None => self.root.join(default),
        }
    }

    /// The tailwind config in use: the given path if it exists, else the first known name found.
    pub(crate) fn find_tailwind(&self, given: Option<&Path>) -> Option<PathBuf> {
        match given {
            Some(path) => Some(self.resolve(Some(path), "")).filter(|p| p.is_file()),
            None => TAILWIND_CONFIGS
                .iter()
                .map(|name| self.root.join(name))
                .find(|p| p.is_file()),
        }
    }
}

impl Actions for ProjectActions {
    async fn add(&self, session: &Session, args: &AddArgs) -> Result<()> {
        add::run(self, session, args).await
    }

    async fn init(&self, session: &Session, args: &InitArgs) -> Result<()> {
        init::run(self, session, args).await
    }

    async fn remove(&self, session: &Session, args: &RemoveArgs) -> Result<()> {
        remove::run(self, session, args).await
    }

    async fn upgrade(&self, session: &Session, args: &UpgradeArgs) -> Result<()> {
        upgrade::run(self, session, args).await
    }

    async fn list(&self, session: &Session, args: &ListArgs) -> Result<()> {
        list::run(self, session, args).await
    }

    async fn env(&self, session: &Session, args: &EnvArgs) -> Result<()> {
        env::run(self, session, args).await
    }

    async fn doctor(&self, session: &Session, args: &DoctorArgs) -> Result<()> {
        doctor::run(self, session, args).await
    }
}

/// The session catalog, or an error for commands that run without one.
pub(crate) fn require_catalog(session: &Session) -> Result<&ComponentCatalog> {
    session.catalog().ok_or_else(|| {
        AppError::Unavailable(
            "The component registry is not loaded for this command. Use `ui add` instead"
                .to_string(),
        )
    })
}

/// A table in the style shared by all action output.
pub(crate) fn table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)));
    table
}
