use super::{ProjectActions, PACKAGE_JSON};
use crate::cli::{InitArgs, Template};
use crate::error::{AppError, Result};
use crate::models::PackageJson;
use crate::session::Session;
use colored::*;
use std::fs;
use std::path::Path;
use tracing::info;

const DEFAULT_PROJECT_NAME: &str = "ui-app";

const APP_PAGE: &str = "export default function Page() {
  return <main>Hello from ui</main>;
}
";

const PAGES_INDEX: &str = "export default function Home() {
  return <main>Hello from ui</main>;
}
";

/// Scaffolds a new project directory.
pub(super) async fn run(actions: &ProjectActions, _session: &Session, args: &InitArgs) -> Result<()> {
    let name = args
        .project_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_PROJECT_NAME);
    validate_name(name)?;

    let template = args.template.unwrap_or_default();
    let project_dir = actions.root().join(name);
    ensure_empty_dir(&project_dir)?;

    let (entry, content) = match template {
        Template::App => ("app/page.tsx", APP_PAGE),
        Template::Pages => ("pages/index.tsx", PAGES_INDEX),
    };
    let entry_path = project_dir.join(entry);
    if let Some(parent) = entry_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&entry_path, content)?;
    PackageJson::create(project_dir.join(PACKAGE_JSON), name).save()?;

    info!("Initialized {} with the {:?} template", project_dir.display(), template);
    println!(
        "{} {}",
        "Created project".green(),
        project_dir.display().to_string().bold()
    );
    println!("Next: cd {} && ui add --all", name);
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !name.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(AppError::Cli(format!(
            "Invalid project name '{}'. Use letters, digits, '-', '_' or '.'",
            name
        )))
    }
}

fn ensure_empty_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        if fs::read_dir(dir)?.next().is_some() {
            return Err(AppError::Project(format!(
                "{} already exists and is not empty",
                dir.display()
            )));
        }
        return Ok(());
    }
    fs::create_dir_all(dir)?;
    Ok(())
}
