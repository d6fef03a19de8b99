use crate::pm::PackageManager;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// One dependency mapping from `package.json`: name → version requirement.
///
/// `serde_json`'s `preserve_order` feature keeps keys in manifest order,
/// which is the order dependency names appear in built commands.
pub type DependencyTable = serde_json::Map<String, serde_json::Value>;

/// The four dependency categories a manifest can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyGroup {
    Production,
    Development,
    Optional,
    Peer,
}

impl DependencyGroup {
    /// Processing order for one invocation.
    pub const ALL: [DependencyGroup; 4] = [
        DependencyGroup::Production,
        DependencyGroup::Development,
        DependencyGroup::Optional,
        DependencyGroup::Peer,
    ];

    /// The key under which this group appears in `package.json`.
    pub fn manifest_key(self) -> &'static str {
        match self {
            Self::Production => "dependencies",
            Self::Development => "devDependencies",
            Self::Optional => "optionalDependencies",
            Self::Peer => "peerDependencies",
        }
    }

    /// The install flag that records a dependency under this group, if any.
    /// Production installs carry no modifier.
    pub fn modifier(self, pm: PackageManager) -> Option<&'static str> {
        let commands = pm.commands();
        match self {
            Self::Production => None,
            Self::Development => Some(commands.dev_flag),
            Self::Optional => Some(commands.optional_flag),
            Self::Peer => Some(commands.peer_flag),
        }
    }
}

impl fmt::Display for DependencyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Production => write!(f, "dependencies"),
            Self::Development => write!(f, "dev dependencies"),
            Self::Optional => write!(f, "optional dependencies"),
            Self::Peer => write!(f, "peer dependencies"),
        }
    }
}

/// Dependency declarations read from a project's `package.json`.
///
/// Only the four group mappings are read; every other manifest field is
/// ignored. A missing group is an empty mapping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub dependencies: DependencyTable,
    #[serde(default)]
    pub dev_dependencies: DependencyTable,
    #[serde(default)]
    pub optional_dependencies: DependencyTable,
    #[serde(default)]
    pub peer_dependencies: DependencyTable,
}

impl Manifest {
    /// Load `package.json` from the project directory.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join("package.json");
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read manifest file {:?}", path))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse manifest file {:?}", path))
    }

    pub fn group(&self, group: DependencyGroup) -> &DependencyTable {
        match group {
            DependencyGroup::Production => &self.dependencies,
            DependencyGroup::Development => &self.dev_dependencies,
            DependencyGroup::Optional => &self.optional_dependencies,
            DependencyGroup::Peer => &self.peer_dependencies,
        }
    }

    /// Dependency names for one group, in manifest order, after filtering.
    ///
    /// Names in `exclude` are removed first; if `only` is non-empty the rest
    /// is restricted to names it contains. A name in both lists stays
    /// excluded. An empty result means "no work", never an error.
    pub fn dependency_names(
        &self,
        group: DependencyGroup,
        exclude: &[String],
        only: &[String],
    ) -> Vec<String> {
        self.group(group)
            .keys()
            .filter(|name| !exclude.iter().any(|excluded| excluded == *name))
            .filter(|name| only.is_empty() || only.iter().any(|wanted| wanted == *name))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, contents: &str) {
        fs::write(dir.join("package.json"), contents).unwrap();
    }

    fn list(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_load_reads_all_groups() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{
                "name": "fixture",
                "version": "1.0.0",
                "dependencies": {"a": "^1.0.0"},
                "devDependencies": {"b": "~2.0.0"},
                "optionalDependencies": {"c": "3.x"},
                "peerDependencies": {"d": ">=4"}
            }"#,
        );

        let manifest = Manifest::load(temp.path()).unwrap();
        assert_eq!(manifest.dependencies.len(), 1);
        assert_eq!(manifest.dev_dependencies.len(), 1);
        assert_eq!(manifest.optional_dependencies.len(), 1);
        assert_eq!(manifest.peer_dependencies.len(), 1);
    }

    #[test]
    fn test_load_missing_groups_are_empty() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), r#"{"name": "bare"}"#);

        let manifest = Manifest::load(temp.path()).unwrap();
        for group in DependencyGroup::ALL {
            assert!(manifest.group(group).is_empty());
        }
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Manifest::load(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to read manifest file"));
    }

    #[test]
    fn test_load_invalid_json() {
        let temp = TempDir::new().unwrap();
        write_manifest(temp.path(), "not json at all");
        let err = Manifest::load(temp.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse manifest file"));
    }

    #[test]
    fn test_dependency_names_keep_manifest_order() {
        let temp = TempDir::new().unwrap();
        write_manifest(
            temp.path(),
            r#"{"dependencies": {"zeta": "1", "alpha": "1", "mid": "1"}}"#,
        );

        let manifest = Manifest::load(temp.path()).unwrap();
        let names = manifest.dependency_names(DependencyGroup::Production, &[], &[]);
        assert_eq!(names, list(&["zeta", "alpha", "mid"]));
    }

    #[test]
    fn test_dependency_names_exclude() {
        let mut manifest = Manifest::default();
        for name in ["a", "b", "c"] {
            manifest.dependencies.insert(name.to_string(), "1".into());
        }

        let names = manifest.dependency_names(DependencyGroup::Production, &list(&["b"]), &[]);
        assert_eq!(names, list(&["a", "c"]));
    }

    #[test]
    fn test_dependency_names_only() {
        let mut manifest = Manifest::default();
        for name in ["a", "b", "c"] {
            manifest.dev_dependencies.insert(name.to_string(), "1".into());
        }

        let names =
            manifest.dependency_names(DependencyGroup::Development, &[], &list(&["c", "a"]));
        assert_eq!(names, list(&["a", "c"]));
    }

    #[test]
    fn test_exclude_beats_only() {
        let mut manifest = Manifest::default();
        for name in ["a", "b"] {
            manifest.dependencies.insert(name.to_string(), "1".into());
        }

        // "a" is in both lists and must stay excluded.
        let names = manifest.dependency_names(
            DependencyGroup::Production,
            &list(&["a"]),
            &list(&["a", "b"]),
        );
        assert_eq!(names, list(&["b"]));
    }

    #[test]
    fn test_dependency_names_empty_group() {
        let manifest = Manifest::default();
        let names = manifest.dependency_names(DependencyGroup::Peer, &[], &[]);
        assert!(names.is_empty());
    }

    #[test]
    fn test_group_manifest_keys() {
        assert_eq!(DependencyGroup::Production.manifest_key(), "dependencies");
        assert_eq!(DependencyGroup::Development.manifest_key(), "devDependencies");
        assert_eq!(DependencyGroup::Optional.manifest_key(), "optionalDependencies");
        assert_eq!(DependencyGroup::Peer.manifest_key(), "peerDependencies");
    }

    #[test]
    fn test_group_modifiers() {
        assert_eq!(DependencyGroup::Production.modifier(PackageManager::Npm), None);
        assert_eq!(
            DependencyGroup::Development.modifier(PackageManager::Yarn),
            Some("--dev")
        );
        assert_eq!(
            DependencyGroup::Optional.modifier(PackageManager::Npm),
            Some("--save-optional")
        );
        assert_eq!(
            DependencyGroup::Peer.modifier(PackageManager::Pnpm),
            Some("--save-peer")
        );
    }
}
