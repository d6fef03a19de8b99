use clap::ValueEnum;
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Auto-detection found no lock file and no manager was forced.
///
/// This is fatal for the whole invocation: nothing runs after it.
#[derive(Debug, Error)]
#[error("no package manager found in {}; pass --package-manager to pick one", .path.display())]
pub struct NoPackageManager {
    pub path: PathBuf,
}

/// Package manager as chosen by the caller, before resolution.
///
/// `Auto` only exists at the configuration boundary; it is resolved to a
/// concrete [`PackageManager`] before any command is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PackageManagerChoice {
    #[default]
    Auto,
    Npm,
    Yarn,
    Pnpm,
}

impl PackageManagerChoice {
    /// Resolve the choice to a concrete package manager.
    ///
    /// Explicit choices pass through without touching the filesystem. `Auto`
    /// probes `dir` for known lock files in priority order npm → yarn → pnpm.
    pub fn resolve(self, dir: &Path) -> Result<PackageManager, NoPackageManager> {
        match self {
            Self::Npm => Ok(PackageManager::Npm),
            Self::Yarn => Ok(PackageManager::Yarn),
            Self::Pnpm => Ok(PackageManager::Pnpm),
            Self::Auto => PackageManager::detect(dir).ok_or_else(|| NoPackageManager {
                path: dir.to_path_buf(),
            }),
        }
    }
}

impl fmt::Display for PackageManagerChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Npm => write!(f, "npm"),
            Self::Yarn => write!(f, "yarn"),
            Self::Pnpm => write!(f, "pnpm"),
        }
    }
}

/// A concrete package manager the refresh pipeline can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
}

/// Command vocabulary for one package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSet {
    pub uninstall: &'static str,
    pub install: &'static str,
    pub dev_flag: &'static str,
    pub optional_flag: &'static str,
    pub peer_flag: &'static str,
    pub cache_clean: &'static str,
}

const NPM_COMMANDS: CommandSet = CommandSet {
    uninstall: "npm uninstall",
    install: "npm install",
    dev_flag: "--save-dev",
    optional_flag: "--save-optional",
    peer_flag: "--save-peer",
    cache_clean: "npm cache clean --force",
};

const YARN_COMMANDS: CommandSet = CommandSet {
    uninstall: "yarn remove",
    install: "yarn add",
    dev_flag: "--dev",
    optional_flag: "--optional",
    peer_flag: "--peer",
    cache_clean: "yarn cache clean",
};

const PNPM_COMMANDS: CommandSet = CommandSet {
    uninstall: "pnpm remove",
    install: "pnpm add",
    dev_flag: "--save-dev",
    optional_flag: "--save-optional",
    peer_flag: "--save-peer",
    cache_clean: "pnpm cache clean",
};

impl PackageManager {
    /// Lock-file probe order for auto-detection. First match wins.
    pub const DETECTION_ORDER: [PackageManager; 3] =
        [PackageManager::Npm, PackageManager::Yarn, PackageManager::Pnpm];

    /// The lock file whose presence identifies this manager.
    pub fn lock_file(self) -> &'static str {
        match self {
            Self::Npm => "package-lock.json",
            Self::Yarn => "yarn.lock",
            Self::Pnpm => "pnpm-lock.yaml",
        }
    }

    pub fn commands(self) -> &'static CommandSet {
        match self {
            Self::Npm => &NPM_COMMANDS,
            Self::Yarn => &YARN_COMMANDS,
            Self::Pnpm => &PNPM_COMMANDS,
        }
    }

    /// Probe `dir` for a known lock file. Existence only, contents are never read.
    pub fn detect(dir: &Path) -> Option<Self> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|pm| dir.join(pm.lock_file()).exists())
    }

    /// Build the uninstall-then-reinstall command line for one dependency group.
    ///
    /// Names are joined with single spaces in the order given, without quoting.
    /// A name containing shell metacharacters is the caller's responsibility.
    pub fn refresh_command(self, names: &[String], modifier: Option<&str>) -> String {
        let deps = names.join(" ");
        let commands = self.commands();
        match modifier {
            Some(flag) => format!(
                "{} {deps} && {} {flag} {deps}",
                commands.uninstall, commands.install
            ),
            None => format!("{} {deps} && {} {deps}", commands.uninstall, commands.install),
        }
    }

    pub fn cache_clean_command(self) -> &'static str {
        self.commands().cache_clean
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Npm => write!(f, "npm"),
            Self::Yarn => write!(f, "yarn"),
            Self::Pnpm => write!(f, "pnpm"),
        }
    }
}
