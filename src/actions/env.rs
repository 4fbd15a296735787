use super::{table, ProjectActions, PACKAGE_JSON};
use crate::cli::EnvArgs;
use crate::error::Result;
use crate::models::PackageJson;
use crate::session::{Session, StoreKey};
use comfy_table::{Cell, Color, Table};
use std::env::consts::{ARCH, OS};
use tracing::debug;

/// Prints debugging information about the CLI and the current project.
pub(super) async fn run(actions: &ProjectActions, session: &Session, args: &EnvArgs) -> Result<()> {
    println!("{}", environment_table(actions, session, args));
    Ok(())
}

fn environment_table(actions: &ProjectActions, session: &Session, args: &EnvArgs) -> Table {
    let unknown = || "unknown".to_string();
    let mut table = table(&["Property", "Value"]);
    let mut row = |key: &str, value: String| {
        table.add_row(vec![Cell::new(key).fg(Color::Green), Cell::new(value)]);
    };

    row("CLI version", env!("CARGO_PKG_VERSION").to_string());
    row(
        "Latest CLI version",
        session
            .get(StoreKey::CliLatestVersion)
            .map(str::to_string)
            .unwrap_or_else(unknown),
    );
    row(
        "Latest framework version",
        session
            .get(StoreKey::LatestVersion)
            .map(str::to_string)
            .unwrap_or_else(unknown),
    );
    row("Platform", format!("{} ({})", OS, ARCH));
    row("Working directory", actions.root().display().to_string());

    let package_path = actions.resolve(args.package_path.as_deref(), PACKAGE_JSON);
    match PackageJson::load(&package_path) {
        Ok(package) => {
            row("package.json", package.path().display().to_string());
            row("Project", package.name().map(str::to_string).unwrap_or_else(unknown));
            if let Some(catalog) = session.catalog() {
                row(
                    "Installed components",
                    catalog.installed(&package).len().to_string(),
                );
            }
        },
        Err(e) => {
            debug!("No usable package.json: {}", e);
            row("package.json", format!("not found ({})", package_path.display()));
        },
    }

    row(
        "Registry components",
        session
            .catalog()
            .map(|c| c.len().to_string())
            .unwrap_or_else(unknown),
    );
    table
}
