//! Component registry data: the wire format and the in-session catalog.

use crate::error::{AppError, Result};
use crate::models::PackageJson;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response structure of the component registry document.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegistryResponse {
    pub components: Vec<Component>,
    /// Version of the registry document itself, if published.
    #[serde(default)]
    pub version: Option<String>,
}

/// A single UI component as described by the registry.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    /// npm package providing the component, e.g. `@nextui-org/button`.
    pub package: String,
    pub version: String,
    #[serde(default)]
    pub docs: Option<String>,
    #[serde(default)]
    pub description: String,
    /// Release status as published by the registry (`stable`, `new`, `updated`, ...).
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub peer_dependencies: BTreeMap<String, String>,
}

fn default_status() -> String {
    "stable".to_string()
}

/// Strips range operators from a dependency spec (`^2.1.0` -> `2.1.0`).
pub fn clean_version(spec: &str) -> &str {
    spec.trim().trim_start_matches(&['^', '~', '=', 'v'][..])
}

/// Components available for this session, sorted by name.
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    components: Vec<Component>,
}

impl ComponentCatalog {
    pub fn new(mut components: Vec<Component>) -> Self {
        components.sort_by_key(|c| c.name.to_ascii_lowercase());
        components.dedup_by(|a, b| a.name.eq_ignore_ascii_case(&b.name));
        Self { components }
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Component> {
        self.components.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    /// Looks a component up by name or package name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Component> {
        let name = name.trim();
        self.components
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name) || c.package.eq_ignore_ascii_case(name))
    }

    /// Resolves every requested name, failing with the full list of unknown names.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<&Component>> {
        let mut found = Vec::with_capacity(names.len());
        let mut unknown = Vec::new();

        for name in names {
            match self.get(name) {
                Some(component) if !found.contains(&component) => found.push(component),
                Some(_) => {},
                None => unknown.push(name.as_str()),
            }
        }

        if !unknown.is_empty() {
            return Err(AppError::Cli(format!(
                "Unknown component(s): {}. Run `ui list --remote` to see what is available",
                unknown.join(", ")
            )));
        }

        Ok(found)
    }

    /// Components present in the project's dependencies, paired with the installed spec.
    pub fn installed<'a>(&'a self, package: &PackageJson) -> Vec<(&'a Component, String)> {
        self.components
            .iter()
            .filter_map(|c| package.dependency(&c.package).map(|v| (c, v.to_string())))
            .collect()
    }
}

impl From<Vec<Component>> for ComponentCatalog {
    fn from(components: Vec<Component>) -> Self {
        Self::new(components)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) fn component(name: &str, version: &str) -> Component {
        Component {
            name: name.to_string(),
            package: format!("@nextui-org/{}", name),
            version: version.to_string(),
            docs: None,
            description: format!("The {} component", name),
            status: "stable".to_string(),
            style: String::new(),
            peer_dependencies: BTreeMap::new(),
        }
    }

    #[test]
    fn test_registry_response_deserializes_camel_case() {
        let body = json!({
            "components": [{
                "name": "button",
                "package": "@nextui-org/button",
                "version": "2.0.26",
                "docs": "https://nextui.org/docs/components/button",
                "description": "Buttons allow users to perform actions",
                "status": "updated",
                "style": "",
                "peerDependencies": { "react": ">=18" }
            }, {
                "name": "card",
                "package": "@nextui-org/card",
                "version": "2.0.24"
            }],
            "version": "2.2.9"
        });

        let response: RegistryResponse = serde_json::from_value(body).unwrap();
        assert_eq!(response.version.as_deref(), Some("2.2.9"));
        assert_eq!(response.components.len(), 2);
        assert_eq!(response.components[0].status, "updated");
        assert_eq!(
            response.components[0].peer_dependencies.get("react").map(String::as_str),
            Some(">=18")
        );
        // Missing optional fields take their defaults
        assert_eq!(response.components[1].status, "stable");
        assert!(response.components[1].docs.is_none());
    }

    #[test]
    fn test_catalog_is_sorted_and_case_insensitive() {
        let catalog = ComponentCatalog::new(vec![
            component("tabs", "2.0.1"),
            component("button", "2.0.26"),
            component("Button", "2.0.0"),
        ]);

        assert_eq!(catalog.names(), vec!["button", "tabs"]);
        assert!(catalog.get("BUTTON").is_some());
        assert!(catalog.get("@nextui-org/tabs").is_some());
        assert!(catalog.get("accordion").is_none());
    }

    #[test]
    fn test_resolve_reports_all_unknown_names() {
        let catalog = ComponentCatalog::new(vec![component("button", "2.0.26")]);

        let names = vec!["button".to_string(), "nope".to_string(), "zilch".to_string()];
        match catalog.resolve(&names) {
            Err(AppError::Cli(msg)) => {
                assert!(msg.contains("nope"));
                assert!(msg.contains("zilch"));
                assert!(!msg.contains("button,"));
            },
            other => panic!("Expected CliError, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_skips_duplicates() {
        let catalog = ComponentCatalog::new(vec![component("button", "2.0.26")]);
        let names = vec!["button".to_string(), "Button".to_string()];
        assert_eq!(catalog.resolve(&names).unwrap().len(), 1);
    }

    #[test]
    fn test_clean_version() {
        assert_eq!(clean_version("^2.1.0"), "2.1.0");
        assert_eq!(clean_version("~1.0.0"), "1.0.0");
        assert_eq!(clean_version(" 3.0.0 "), "3.0.0");
        assert_eq!(clean_version("v0.9.1"), "0.9.1");
    }
}
