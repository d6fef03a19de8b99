use crate::config::{Config, Options};
use crate::manifest::{DependencyGroup, Manifest};
use crate::pm::PackageManager;
use crate::runner::CommandRunner;
use anyhow::Result;
use std::path::Path;
use tracing::{debug, error, info, warn};

/// What one refresh invocation did, for the caller's summary.
#[derive(Debug, Clone)]
pub struct RefreshOutcome {
    /// The concrete package manager the invocation ran with.
    pub package_manager: PackageManager,
    /// Groups whose refresh command completed successfully.
    pub refreshed: Vec<DependencyGroup>,
    /// Active groups that had no dependencies to act on.
    pub skipped_empty: Vec<DependencyGroup>,
    /// Groups whose refresh command failed. Failures never abort the run.
    pub failed: Vec<DependencyGroup>,
}

impl RefreshOutcome {
    fn new(package_manager: PackageManager) -> Self {
        Self {
            package_manager,
            refreshed: Vec::new(),
            skipped_empty: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Refresh the dependency groups selected by `options`.
///
/// Resolves the configuration and package manager, loads the manifest, then
/// walks the four dependency groups in order, uninstalling and reinstalling
/// each active non-empty group through `runner`. Commands run strictly one
/// at a time. A failed command is logged and recorded but does not stop the
/// remaining groups; only an unresolvable package manager or an unreadable
/// manifest aborts the invocation.
pub fn refresh(options: Options, runner: &dyn CommandRunner) -> Result<RefreshOutcome> {
    let config = Config::resolve(options);
    let pm = config.package_manager.resolve(&config.path)?;
    let manifest = Manifest::load(&config.path)?;

    let mut outcome = RefreshOutcome::new(pm);

    // Cache cleaning ignores the group filters entirely.
    if config.clean_cache {
        execute(runner, pm.cache_clean_command(), &config.path);
    }

    for group in DependencyGroup::ALL {
        if !config.group_active(group) {
            continue;
        }

        let names = manifest.dependency_names(group, &config.exclude, &config.only);
        if names.is_empty() {
            warn!("No {group} found in package.json");
            outcome.skipped_empty.push(group);
            continue;
        }

        let command = pm.refresh_command(&names, group.modifier(pm));
        if execute(runner, &command, &config.path) {
            outcome.refreshed.push(group);
        } else {
            outcome.failed.push(group);
        }
    }

    Ok(outcome)
}

/// Run one command, logging it and its result. Returns whether it succeeded;
/// the error itself is absorbed here.
fn execute(runner: &dyn CommandRunner, command: &str, cwd: &Path) -> bool {
    info!("{command}");
    match runner.run(command, cwd) {
        Ok(stdout) => {
            debug!("{stdout}");
            true
        }
        Err(err) => {
            error!("Command failed: {err:#}");
            false
        }
    }
}
