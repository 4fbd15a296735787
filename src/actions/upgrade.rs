use super::{require_catalog, table, ProjectActions, PACKAGE_JSON};
use crate::cli::UpgradeArgs;
use crate::error::{AppError, Result};
use crate::models::{clean_version, PackageJson};
use crate::session::Session;
use colored::*;
use comfy_table::{Cell, Color};
use tracing::info;

/// Moves installed components to the catalog version.
pub(super) async fn run(
    actions: &ProjectActions,
    session: &Session,
    args: &UpgradeArgs,
) -> Result<()> {
    let catalog = require_catalog(session)?;
    let package_path = actions.resolve(args.package_path.as_deref(), PACKAGE_JSON);
    let mut package = PackageJson::load(&package_path)?;

    if !args.all && args.components.is_empty() {
        return Err(AppError::Cli(
            "No components specified. Pass component names or use --all".to_string(),
        ));
    }

    let requested = catalog.resolve(&args.components)?;
    let targets: Vec<_> = catalog
        .installed(&package)
        .into_iter()
        .filter(|(c, _)| args.all || requested.contains(c))
        .collect();

    for component in &requested {
        if !targets.iter().any(|(c, _)| c.name == component.name) {
            println!(
                "{} {}",
                component.name.yellow(),
                "is not installed, skipping".yellow()
            );
        }
    }

    let mut summary = table(&["Component", "Installed", "Latest", "Status"]);
    let mut upgraded = 0;
    for (component, installed) in &targets {
        let status = if clean_version(installed) == component.version {
            Cell::new("up to date").fg(Color::Green)
        } else {
            package.set_dependency(&component.package, &format!("^{}", component.version))?;
            upgraded += 1;
            Cell::new("upgraded").fg(Color::Cyan)
        };
        summary.add_row(vec![
            Cell::new(&component.name),
            Cell::new(installed),
            Cell::new(&component.version),
            status,
        ]);
    }

    if targets.is_empty() {
        println!("{}", "No installed components to upgrade.".yellow());
        return Ok(());
    }

    if upgraded > 0 {
        package.save()?;
    }
    info!("Upgraded {} component(s)", upgraded);
    println!("{}", summary);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::testing::{dependency, project, session};
    use super::*;

    #[tokio::test]
    async fn test_upgrade_all_outdated() {
        let (dir, actions) = project(r#"{"@nextui-org/button":"^2.0.0","@nextui-org/card":"^2.0.24"}"#);
        let args = UpgradeArgs {
            all: true,
            ..UpgradeArgs::default()
        };

        run(&actions, &session(), &args).await.unwrap();

        assert_eq!(dependency(&dir, "@nextui-org/button").as_deref(), Some("^2.0.26"));
        assert_eq!(dependency(&dir, "@nextui-org/card").as_deref(), Some("^2.0.24"));
        // Not installed, so not added
        assert_eq!(dependency(&dir, "@nextui-org/tabs"), None);
    }

    #[tokio::test]
    async fn test_upgrade_only_named() {
        let (dir, actions) = project(r#"{"@nextui-org/button":"2.0.1","@nextui-org/tabs":"2.0.1"}"#);
        let args = UpgradeArgs {
            components: vec!["tabs".to_string()],
            ..UpgradeArgs::default()
        };

        run(&actions, &session(), &args).await.unwrap();

        assert_eq!(dependency(&dir, "@nextui-org/button").as_deref(), Some("2.0.1"));
        assert_eq!(dependency(&dir, "@nextui-org/tabs").as_deref(), Some("^2.0.20"));
    }

    #[tokio::test]
    async fn test_upgrade_requires_a_selection() {
        let (_dir, actions) = project("{}");
        assert!(matches!(
            run(&actions, &session(), &UpgradeArgs::default()).await,
            Err(AppError::Cli(_))
        ));
    }
}
