// Public API
pub mod cli;
pub mod commands;

// Core domain types
mod config;
mod manifest;
mod pm;
mod refresh;
mod runner;
mod ui;

// Re-export main types
pub use config::{Config, Options};
pub use manifest::{DependencyGroup, DependencyTable, Manifest};
pub use pm::{CommandSet, NoPackageManager, PackageManager, PackageManagerChoice};
pub use refresh::{refresh, RefreshOutcome};
pub use runner::{CommandRunner, ShellRunner};
