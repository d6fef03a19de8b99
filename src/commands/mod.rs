use crate::cli::Cli;
use crate::config::Options;
use crate::refresh::{refresh, RefreshOutcome};
use crate::runner::ShellRunner;
use crate::ui;
use anyhow::Result;
use std::path::PathBuf;

pub fn execute(cli: Cli) -> Result<()> {
    let package_manager = cli.package_manager_choice();

    let options = Options {
        path: cli
            .source
            .as_deref()
            .map(|source| PathBuf::from(shellexpand::tilde(source).into_owned())),
        only_prod: Some(cli.prod),
        only_dev: Some(cli.dev),
        only_optional: Some(cli.optional),
        only_peer: Some(cli.peer),
        clean_cache: Some(cli.clean),
        exclude: Some(cli.exclude),
        only: Some(cli.only),
        package_manager: Some(package_manager),
    };

    let runner = ShellRunner::new()?;
    let outcome = refresh(options, &runner)?;
    report(&outcome);
    Ok(())
}

fn report(outcome: &RefreshOutcome) {
    if outcome.refreshed.is_empty() && outcome.failed.is_empty() {
        ui::info("Nothing to refresh.");
        return;
    }

    if !outcome.refreshed.is_empty() {
        ui::success(
            "Refreshed",
            format!(
                "{} dependency group(s) with {}",
                outcome.refreshed.len(),
                outcome.package_manager
            ),
        );
    }

    if !outcome.failed.is_empty() {
        let failed: Vec<String> = outcome.failed.iter().map(|g| g.to_string()).collect();
        ui::warn(format!("Failed to refresh: {}", failed.join(", ")));
    }
}
