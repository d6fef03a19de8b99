use crate::manifest::DependencyGroup;
use crate::pm::PackageManagerChoice;
use std::path::PathBuf;

/// Caller-supplied options for one refresh invocation.
///
/// Every field is optional; unset fields fall back to the documented default
/// field-by-field when resolved into a [`Config`].
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Directory containing the `package.json` file. Default: `.`
    pub path: Option<PathBuf>,
    /// Refresh only the production dependencies. Default: false
    pub only_prod: Option<bool>,
    /// Refresh only the dev dependencies. Default: false
    pub only_dev: Option<bool>,
    /// Refresh only the optional dependencies. Default: false
    pub only_optional: Option<bool>,
    /// Refresh only the peer dependencies. Default: false
    pub only_peer: Option<bool>,
    /// Clean the package manager cache before refreshing. Default: false
    pub clean_cache: Option<bool>,
    /// Dependencies to leave untouched. Default: empty
    pub exclude: Option<Vec<String>>,
    /// When non-empty, restrict the refresh to these dependencies. Default: empty
    pub only: Option<Vec<String>>,
    /// Package manager to use. Default: auto-detect from lock files
    pub package_manager: Option<PackageManagerChoice>,
}

/// Fully resolved configuration. Every field has a concrete value.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub path: PathBuf,
    pub only_prod: bool,
    pub only_dev: bool,
    pub only_optional: bool,
    pub only_peer: bool,
    pub clean_cache: bool,
    pub exclude: Vec<String>,
    pub only: Vec<String>,
    pub package_manager: PackageManagerChoice,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: PathBuf::from("."),
            only_prod: false,
            only_dev: false,
            only_optional: false,
            only_peer: false,
            clean_cache: false,
            exclude: Vec::new(),
            only: Vec::new(),
            package_manager: PackageManagerChoice::Auto,
        }
    }
}

impl Config {
    /// Merge caller options with the defaults. Never fails.
    pub fn resolve(options: Options) -> Self {
        let defaults = Self::default();
        Self {
            path: options.path.unwrap_or(defaults.path),
            only_prod: options.only_prod.unwrap_or(defaults.only_prod),
            only_dev: options.only_dev.unwrap_or(defaults.only_dev),
            only_optional: options.only_optional.unwrap_or(defaults.only_optional),
            only_peer: options.only_peer.unwrap_or(defaults.only_peer),
            clean_cache: options.clean_cache.unwrap_or(defaults.clean_cache),
            exclude: options.exclude.unwrap_or(defaults.exclude),
            only: options.only.unwrap_or(defaults.only),
            package_manager: options.package_manager.unwrap_or(defaults.package_manager),
        }
    }

    fn only_flag(&self, group: DependencyGroup) -> bool {
        match group {
            DependencyGroup::Production => self.only_prod,
            DependencyGroup::Development => self.only_dev,
            DependencyGroup::Optional => self.only_optional,
            DependencyGroup::Peer => self.only_peer,
        }
    }

    /// Whether a group takes part in this invocation.
    ///
    /// A group is active when none of the other three groups' `only` flags is
    /// set. With no flags every group runs; with exactly one flag only that
    /// group runs. Setting two or more flags together disables every group
    /// and is documented as an unsupported combination.
    pub fn group_active(&self, group: DependencyGroup) -> bool {
        DependencyGroup::ALL
            .into_iter()
            .filter(|other| *other != group)
            .all(|other| !self.only_flag(other))
    }
}
