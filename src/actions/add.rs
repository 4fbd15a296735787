use super::{require_catalog, table, ProjectActions, APP_FILE, PACKAGE_JSON};
use crate::cli::AddArgs;
use crate::error::{AppError, Result};
use crate::models::{Component, ComponentCatalog, PackageJson};
use crate::session::Session;
use colored::*;
use comfy_table::{Cell, Color};
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use std::fs;
use tracing::{debug, info};

/// Adds the selected components' packages to `dependencies`.
pub(super) async fn run(actions: &ProjectActions, session: &Session, args: &AddArgs) -> Result<()> {
    let catalog = require_catalog(session)?;
    let package_path = actions.resolve(args.package_path.as_deref(), PACKAGE_JSON);
    let mut package = PackageJson::load(&package_path)?;

    let selected = if args.all {
        catalog.iter().collect()
    } else if !args.components.is_empty() {
        catalog.resolve(&args.components)?
    } else {
        prompt_components(actions, catalog)?
    };

    if selected.is_empty() {
        println!("{}", "No components selected, nothing to add.".yellow());
        return Ok(());
    }

    let mut summary = table(&["Component", "Package", "Version", "Status"]);
    let mut added = 0;
    for component in selected {
        let status = match package.dependency(&component.package) {
            Some(existing) => Cell::new(format!("already installed ({})", existing)).fg(Color::Yellow),
            None => {
                package.set_dependency(&component.package, &format!("^{}", component.version))?;
                added += 1;
                Cell::new("added").fg(Color::Green)
            },
        };
        summary.add_row(vec![
            Cell::new(&component.name),
            Cell::new(&component.package),
            Cell::new(&component.version),
            status,
        ]);
    }

    if added > 0 {
        package.save()?;
    }
    if args.prettier {
        debug!("--prettier has no effect, {} is always pretty-printed", package.path().display());
    }
    info!("Added {} component(s) to {}", added, package.path().display());

    println!("{}", summary);

    if let Some(path) = &args.tailwind_path {
        if actions.find_tailwind(Some(path)).is_none() {
            println!(
                "{} {}",
                "Tailwind config not found:".yellow(),
                path.display()
            );
        }
    }
    if args.add_app {
        check_app_file(actions, args)?;
    }

    if added > 0 {
        println!(
            "{}",
            format!("Added {} component(s). Run your package manager's install to fetch them.", added)
                .green()
        );
    }
    Ok(())
}

fn prompt_components<'a>(
    actions: &ProjectActions,
    catalog: &'a ComponentCatalog,
) -> Result<Vec<&'a Component>> {
    if !actions.interactive {
        return Err(AppError::Cli(
            "No components specified. Pass component names or use --all".to_string(),
        ));
    }

    let names = catalog.names();
    let chosen = MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt("Which components would you like to add?")
        .items(&names)
        .interact_opt()?
        .unwrap_or_default();

    Ok(catalog
        .iter()
        .enumerate()
        .filter(|(i, _)| chosen.contains(i))
        .map(|(_, c)| c)
        .collect())
}

/// Verifies the app entry exists and mentions a provider wrapper.
fn check_app_file(actions: &ProjectActions, args: &AddArgs) -> Result<()> {
    let app_path = actions.resolve(args.app_path.as_deref(), APP_FILE);
    if !app_path.is_file() {
        println!(
            "{} {}",
            "App file not found, wrap your app with the UI provider manually:".yellow(),
            app_path.display()
        );
        return Ok(());
    }

    let content = fs::read_to_string(&app_path)?;
    if content.contains("Provider") {
        debug!("{} already renders a provider", app_path.display());
    } else {
        println!(
            "{} {}",
            "Wrap the root component with the UI provider in".yellow(),
            app_path.display()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::testing::{dependency, project, session};
    use super::*;

    #[tokio::test]
    async fn test_add_named_components() {
        let (dir, actions) = project(r#"{"react":"^18.2.0"}"#);
        let args = AddArgs {
            components: vec!["button".to_string(), "Card".to_string()],
            ..AddArgs::default()
        };

        run(&actions, &session(), &args).await.unwrap();

        assert_eq!(dependency(&dir, "@nextui-org/button").as_deref(), Some("^2.0.26"));
        assert_eq!(dependency(&dir, "@nextui-org/card").as_deref(), Some("^2.0.24"));
        assert_eq!(dependency(&dir, "@nextui-org/tabs"), None);
        assert_eq!(dependency(&dir, "react").as_deref(), Some("^18.2.0"));
    }

    #[tokio::test]
    async fn test_add_all_keeps_existing_versions() {
        let (dir, actions) = project(r#"{"@nextui-org/button":"2.0.0"}"#);
        let args = AddArgs {
            all: true,
            ..AddArgs::default()
        };

        run(&actions, &session(), &args).await.unwrap();

        assert_eq!(dependency(&dir, "@nextui-org/button").as_deref(), Some("2.0.0"));
        assert_eq!(dependency(&dir, "@nextui-org/tabs").as_deref(), Some("^2.0.20"));
    }

    #[tokio::test]
    async fn test_add_unknown_component_fails_without_writing() {
        let (dir, actions) = project("{}");
        let args = AddArgs {
            components: vec!["button".to_string(), "spaceship".to_string()],
            ..AddArgs::default()
        };

        let err = run(&actions, &session(), &args).await.unwrap_err();
        assert!(err.to_string().contains("spaceship"));
        assert_eq!(dependency(&dir, "@nextui-org/button"), None);
    }

    #[tokio::test]
    async fn test_add_without_selection_is_an_error_when_not_interactive() {
        let (_dir, actions) = project("{}");
        let result = run(&actions, &session(), &AddArgs::default()).await;
        assert!(matches!(result, Err(AppError::Cli(msg)) if msg.contains("--all")));
    }

    #[tokio::test]
    async fn test_add_without_registry() {
        let (_dir, actions) = project("{}");
        let args = AddArgs {
            components: vec!["button".to_string()],
            ..AddArgs::default()
        };
        assert!(run(&actions, &Session::new(), &args).await.is_err());
    }

    #[tokio::test]
    async fn test_add_with_missing_app_file_still_succeeds() {
        let (dir, actions) = project("{}");
        let args = AddArgs {
            components: vec!["tabs".to_string()],
            add_app: true,
            ..AddArgs::default()
        };
        run(&actions, &session(), &args).await.unwrap();
        assert!(dependency(&dir, "@nextui-org/tabs").is_some());
    }
}
