use super::{require_catalog, ProjectActions, APP_FILE, PACKAGE_JSON};
use crate::cli::DoctorArgs;
use crate::error::Result;
use crate::models::PackageJson;
use crate::session::Session;
use colored::*;
use std::fs;
use tracing::{debug, info};

const PNPM_LOCK: &str = "pnpm-lock.yaml";
const NPMRC: &str = ".npmrc";

/// Runs the project checks and prints every issue found.
pub(super) async fn run(
    actions: &ProjectActions,
    session: &Session,
    args: &DoctorArgs,
) -> Result<()> {
    let issues = diagnose(actions, session, args)?;

    if issues.is_empty() {
        println!("{}", "No issues found.".green());
        return Ok(());
    }

    println!("{}", format!("Found {} issue(s):", issues.len()).red().bold());
    for issue in &issues {
        println!("  {} {}", "✗".red(), issue);
    }
    Ok(())
}

fn diagnose(actions: &ProjectActions, session: &Session, args: &DoctorArgs) -> Result<Vec<String>> {
    let catalog = require_catalog(session)?;
    let mut issues = Vec::new();

    let package_path = actions.resolve(args.package_path.as_deref(), PACKAGE_JSON);
    match PackageJson::load(&package_path) {
        Ok(package) => {
            let installed = catalog.installed(&package);
            debug!("{} components installed", installed.len());
            if installed.is_empty() {
                issues.push(format!(
                    "No components are installed in {}",
                    package.path().display()
                ));
            }
        },
        Err(e) => issues.push(e.to_string()),
    }

    if args.check_tailwind && actions.find_tailwind(args.tailwind_path.as_deref()).is_none() {
        issues.push(match &args.tailwind_path {
            Some(path) => format!("Tailwind config not found at {}", path.display()),
            None => "No tailwind.config.(js|ts|cjs|mjs) found".to_string(),
        });
    }

    if args.check_app {
        let app_path = actions.resolve(args.app_path.as_deref(), APP_FILE);
        if !app_path.is_file() {
            issues.push(format!("App file not found at {}", app_path.display()));
        }
    }

    if args.check_pnpm && actions.root().join(PNPM_LOCK).is_file() {
        let npmrc = fs::read_to_string(actions.root().join(NPMRC)).unwrap_or_default();
        if !npmrc.contains("public-hoist-pattern") {
            issues.push(format!(
                "pnpm detected: add `public-hoist-pattern[]=*@nextui-org/*` to {}",
                NPMRC
            ));
        }
    }

    info!("Doctor found {} issue(s)", issues.len());
    Ok(issues)
}
