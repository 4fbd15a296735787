use super::{require_catalog, ProjectActions, PACKAGE_JSON};
use crate::cli::RemoveArgs;
use crate::error::{AppError, Result};
use crate::models::{Component, PackageJson};
use crate::session::Session;
use colored::*;
use tracing::info;

/// Drops the selected components' packages from `dependencies`.
pub(super) async fn run(
    actions: &ProjectActions,
    session: &Session,
    args: &RemoveArgs,
) -> Result<()> {
    let catalog = require_catalog(session)?;
    let package_path = actions.resolve(args.package_path.as_deref(), PACKAGE_JSON);
    let mut package = PackageJson::load(&package_path)?;

    let targets: Vec<&Component> = if args.all {
        catalog.installed(&package).into_iter().map(|(c, _)| c).collect()
    } else if !args.components.is_empty() {
        catalog.resolve(&args.components)?
    } else {
        return Err(AppError::Cli(
            "No components specified. Pass component names or use --all".to_string(),
        ));
    };

    let mut removed = Vec::new();
    for component in targets {
        if package.remove_dependency(&component.package) {
            removed.push(component.name.as_str());
        } else {
            println!(
                "{} {}",
                component.name.yellow(),
                "is not installed, skipping".yellow()
            );
        }
    }

    if removed.is_empty() {
        println!("{}", "Nothing to remove.".yellow());
        return Ok(());
    }

    package.save()?;
    info!("Removed {} component(s) from {}", removed.len(), package.path().display());
    println!("{} {}", "Removed:".green(), removed.join(", "));

    if let Some(path) = &args.tailwind_path {
        if actions.find_tailwind(Some(path)).is_some() {
            println!(
                "{} {}",
                "Review the component content paths in".cyan(),
                path.display()
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::testing::{dependency, project, session};
    use super::*;

    #[tokio::test]
    async fn test_remove_named_component() {
        let (dir, actions) = project(r#"{"@nextui-org/button":"^2.0.26","@nextui-org/card":"^2.0.24"}"#);
        let args = RemoveArgs {
            components: vec!["button".to_string(), "tabs".to_string()],
            ..RemoveArgs::default()
        };

        run(&actions, &session(), &args).await.unwrap();

        assert_eq!(dependency(&dir, "@nextui-org/button"), None);
        assert!(dependency(&dir, "@nextui-org/card").is_some());
    }

    #[tokio::test]
    async fn test_remove_all_installed_keeps_other_dependencies() {
        let (dir, actions) = project(r#"{"react":"^18.2.0","@nextui-org/tabs":"^2.0.20"}"#);
        let args = RemoveArgs {
            all: true,
            ..RemoveArgs::default()
        };

        run(&actions, &session(), &args).await.unwrap();

        assert_eq!(dependency(&dir, "@nextui-org/tabs"), None);
        assert_eq!(dependency(&dir, "react").as_deref(), Some("^18.2.0"));
    }

    #[tokio::test]
    async fn test_remove_requires_a_selection() {
        let (_dir, actions) = project("{}");
        assert!(matches!(
            run(&actions, &session(), &RemoveArgs::default()).await,
            Err(AppError::Cli(_))
        ));
    }

    #[tokio::test]
    async fn test_remove_unknown_component() {
        let (_dir, actions) = project("{}");
        let args = RemoveArgs {
            components: vec!["widget".to_string()],
            ..RemoveArgs::default()
        };
        let err = run(&actions, &session(), &args).await.unwrap_err();
        assert!(err.to_string().contains("widget"));
    }
}
