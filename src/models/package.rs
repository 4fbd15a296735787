//! Read/modify/write access to a project's `package.json`.

use crate::error::{AppError, Result};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

const DEPENDENCIES: &str = "dependencies";

/// A parsed `package.json`. Key order is preserved on save.
#[derive(Debug, Clone)]
pub struct PackageJson {
    path: PathBuf,
    root: Map<String, Value>,
}

impl PackageJson {
    /// Loads and parses `package.json` at `path`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Project` if the file is missing or is not a JSON object,
    /// and `AppError::JsonParse` if it is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading {}", path.display());

        if !path.is_file() {
            return Err(AppError::Project(format!(
                "package.json not found at {}. Use --packagePath to point at it",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        match serde_json::from_str::<Value>(&content)? {
            Value::Object(root) => Ok(Self {
                path: path.to_path_buf(),
                root,
            }),
            _ => Err(AppError::Project(format!(
                "{} does not contain a JSON object",
                path.display()
            ))),
        }
    }

    /// Creates a fresh `package.json` for a new project; nothing is written until `save`.
    pub fn create(path: impl AsRef<Path>, name: &str) -> Self {
        let mut root = Map::new();
        root.insert("name".to_string(), Value::from(name));
        root.insert("version".to_string(), Value::from("0.1.0"));
        root.insert("private".to_string(), Value::Bool(true));
        root.insert(DEPENDENCIES.to_string(), Value::Object(Map::new()));
        Self {
            path: path.as_ref().to_path_buf(),
            root,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.root.get("name").and_then(Value::as_str)
    }

    /// The version spec of `package` under `dependencies`, if present.
    pub fn dependency(&self, package: &str) -> Option<&str> {
        self.root
            .get(DEPENDENCIES)
            .and_then(Value::as_object)
            .and_then(|deps| deps.get(package))
            .and_then(Value::as_str)
    }

    /// Sets `dependencies[package] = version`. Returns `true` if the file content changed.
    pub fn set_dependency(&mut self, package: &str, version: &str) -> Result<bool> {
        let deps = self.dependencies_mut()?;
        if deps.get(package).and_then(Value::as_str) == Some(version) {
            return Ok(false);
        }
        deps.insert(package.to_string(), Value::from(version));
        Ok(true)
    }

    /// Removes `package` from `dependencies`. Returns `true` if it was present.
    pub fn remove_dependency(&mut self, package: &str) -> bool {
        self.root
            .get_mut(DEPENDENCIES)
            .and_then(Value::as_object_mut)
            .and_then(|deps| deps.shift_remove(package))
            .is_some()
    }

    /// Writes the document back, pretty-printed with a trailing newline.
    pub fn save(&self) -> Result<()> {
        let mut content = serde_json::to_string_pretty(&self.root)?;
        content.push('\n');
        fs::write(&self.path, content)?;
        info!("Updated {}", self.path.display());
        Ok(())
    }

    fn dependencies_mut(&mut self) -> Result<&mut Map<String, Value>> {
        let path = self.path.display().to_string();
        self.root
            .entry(DEPENDENCIES)
            .or_insert_with(|| Value::Object(Map::new()))
            .as_object_mut()
            .ok_or_else(|| AppError::Project(format!("\"dependencies\" in {} is not an object", path)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_package(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("package.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        match PackageJson::load(dir.path().join("package.json")) {
            Err(AppError::Project(msg)) => assert!(msg.contains("package.json not found")),
            other => panic!("Expected ProjectError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_rejects_non_object() {
        let dir = TempDir::new().unwrap();
        let path = write_package(&dir, "[1, 2, 3]");
        assert!(matches!(PackageJson::load(path), Err(AppError::Project(_))));
    }

    #[test]
    fn test_load_invalid_json() {
        let dir = TempDir::new().unwrap();
        let path = write_package(&dir, "{ not json");
        assert!(matches!(PackageJson::load(path), Err(AppError::JsonParse(_))));
    }

    #[test]
    fn test_set_and_remove_dependency_preserves_order() {
        let dir = TempDir::new().unwrap();
        let path = write_package(
            &dir,
            r#"{"name":"demo","scripts":{"dev":"next dev"},"dependencies":{"react":"^18.2.0"}}"#,
        );

        let mut package = PackageJson::load(&path).unwrap();
        assert_eq!(package.name(), Some("demo"));
        assert!(package.set_dependency("@nextui-org/button", "^2.0.26").unwrap());
        assert!(!package.set_dependency("@nextui-org/button", "^2.0.26").unwrap());
        assert!(package.remove_dependency("react"));
        assert!(!package.remove_dependency("react"));
        package.save().unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.ends_with('\n'));
        let name_pos = saved.find("\"name\"").unwrap();
        let scripts_pos = saved.find("\"scripts\"").unwrap();
        let deps_pos = saved.find("\"dependencies\"").unwrap();
        assert!(name_pos < scripts_pos && scripts_pos < deps_pos);

        let reloaded = PackageJson::load(&path).unwrap();
        assert_eq!(reloaded.dependency("@nextui-org/button"), Some("^2.0.26"));
        assert_eq!(reloaded.dependency("react"), None);
    }

    #[test]
    fn test_set_dependency_creates_section() {
        let dir = TempDir::new().unwrap();
        let path = write_package(&dir, r#"{"name":"demo"}"#);
        let mut package = PackageJson::load(path).unwrap();
        assert!(package.set_dependency("@nextui-org/card", "^2.0.24").unwrap());
        assert_eq!(package.dependency("@nextui-org/card"), Some("^2.0.24"));
    }

    #[test]
    fn test_set_dependency_rejects_malformed_section() {
        let dir = TempDir::new().unwrap();
        let path = write_package(&dir, r#"{"dependencies":[]}"#);
        let mut package = PackageJson::load(path).unwrap();
        assert!(matches!(
            package.set_dependency("@nextui-org/card", "^2.0.24"),
            Err(AppError::Project(_))
        ));
    }
}
