use crate::pm::PackageManagerChoice;
use clap::Parser;

/// Dependency refresher - reinstall package.json dependencies at their latest versions
///
/// depfresh uninstalls and reinstalls the dependency groups declared in
/// package.json so every version range is resolved again from scratch. The
/// package manager is auto-detected from the project's lock file unless one
/// is forced with --package-manager (or the --npm/--yarn/--pnpm shorthands).
///
/// Passing more than one of --prod/--dev/--optional/--peer together is
/// unsupported and refreshes nothing.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory containing the package.json file
    #[arg(short, long, value_name = "DIR")]
    pub source: Option<String>,

    /// Only refresh the production dependencies
    #[arg(short, long)]
    pub prod: bool,

    /// Only refresh the dev dependencies
    #[arg(short, long)]
    pub dev: bool,

    /// Only refresh the optional dependencies
    #[arg(short, long)]
    pub optional: bool,

    /// Only refresh the peer dependencies
    #[arg(long)]
    pub peer: bool,

    /// Clean the package manager cache before refreshing
    #[arg(short, long)]
    pub clean: bool,

    /// Dependency to leave untouched (repeatable)
    #[arg(short, long, value_name = "NAME")]
    pub exclude: Vec<String>,

    /// Restrict the refresh to this dependency (repeatable)
    #[arg(long, value_name = "NAME")]
    pub only: Vec<String>,

    /// Package manager to use; auto probes the lock files
    #[arg(short = 'm', long, value_enum, default_value_t = PackageManagerChoice::Auto)]
    pub package_manager: PackageManagerChoice,

    /// Shorthand for --package-manager npm
    #[arg(long, conflicts_with_all = ["yarn", "pnpm"])]
    pub npm: bool,

    /// Shorthand for --package-manager yarn
    #[arg(long, conflicts_with = "pnpm")]
    pub yarn: bool,

    /// Shorthand for --package-manager pnpm
    #[arg(long)]
    pub pnpm: bool,
}

impl Cli {
    /// The package manager choice after applying the shorthand flags.
    pub fn package_manager_choice(&self) -> PackageManagerChoice {
        if self.npm {
            PackageManagerChoice::Npm
        } else if self.yarn {
            PackageManagerChoice::Yarn
        } else if self.pnpm {
            PackageManagerChoice::Pnpm
        } else {
            self.package_manager
        }
    }
}
