use super::{require_catalog, table, ProjectActions, PACKAGE_JSON};
use crate::cli::ListArgs;
use crate::error::Result;
use crate::models::{clean_version, ComponentCatalog, PackageJson};
use crate::session::Session;
use colored::*;
use comfy_table::{Cell, Color, Table};

pub(super) async fn run(actions: &ProjectActions, session: &Session, args: &ListArgs) -> Result<()> {
    let catalog = require_catalog(session)?;

    if args.remote {
        match remote_table(catalog) {
            Some(table) => {
                println!("{}", table);
                println!("{} components available", catalog.len());
            },
            None => println!("{}", "The registry lists no components.".yellow()),
        }
        return Ok(());
    }

    let package_path = actions.resolve(args.package_path.as_deref(), PACKAGE_JSON);
    let package = PackageJson::load(&package_path)?;
    match installed_table(catalog, &package) {
        Some(table) => println!("{}", table),
        None => println!(
            "{}",
            "No components installed. Run `ui add` to add some.".yellow()
        ),
    }
    Ok(())
}

/// Every registry component; `None` when the registry is empty.
fn remote_table(catalog: &ComponentCatalog) -> Option<Table> {
    if catalog.is_empty() {
        return None;
    }

    let mut table = table(&["Component", "Package", "Version", "Status", "Description"]);
    for component in catalog.iter() {
        table.add_row(vec![
            Cell::new(&component.name).fg(Color::Green),
            Cell::new(&component.package),
            Cell::new(&component.version),
            Cell::new(&component.status),
            Cell::new(&component.description),
        ]);
    }
    Some(table)
}

/// Installed components with installed vs. latest version; `None` when nothing is installed.
fn installed_table(catalog: &ComponentCatalog, package: &PackageJson) -> Option<Table> {
    let installed = catalog.installed(package);
    if installed.is_empty() {
        return None;
    }

    let mut table = table(&["Component", "Package", "Installed", "Latest", "Status"]);
    for (component, version) in installed {
        let outdated = clean_version(&version) != component.version;
        table.add_row(vec![
            Cell::new(&component.name).fg(Color::Green),
            Cell::new(&component.package),
            Cell::new(&version).fg(if outdated { Color::Yellow } else { Color::White }),
            Cell::new(&component.version),
            Cell::new(&component.status),
        ]);
    }
    Some(table)
}
