use anyhow::{Context, Result};
use std::path::Path;
use tokio::runtime::Runtime;

/// Executes shell commands on behalf of the refresh pipeline.
///
/// The pipeline only builds command strings; everything that actually spawns
/// a process sits behind this trait so tests can substitute a recorder.
pub trait CommandRunner {
    /// Run `command` through the shell in `cwd`, returning captured stdout.
    /// A non-zero exit is an error carrying the process's stderr text.
    fn run(&self, command: &str, cwd: &Path) -> Result<String>;
}

/// Runs commands through `sh -c` on a tokio runtime, one at a time.
///
/// The built command lines contain `&&`, so they need a shell rather than a
/// direct exec. Output is captured, not streamed.
pub struct ShellRunner {
    runtime: Runtime,
}

impl ShellRunner {
    pub fn new() -> Result<Self> {
        let runtime = Runtime::new().context("Failed to build command runtime")?;
        Ok(Self { runtime })
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str, cwd: &Path) -> Result<String> {
        // `Command::output()` spawns eagerly and needs the runtime context to
        // be entered before the future is constructed.
        let _guard = self.runtime.enter();
        let output = self
            .runtime
            .block_on(
                tokio::process::Command::new("sh")
                    .arg("-c")
                    .arg(command)
                    .current_dir(cwd)
                    .output(),
            )
            .with_context(|| format!("Failed to spawn command: {command}"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{}", stderr.trim_end());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_run_captures_stdout() {
        let temp = TempDir::new().unwrap();
        let runner = ShellRunner::new().unwrap();
        let stdout = runner.run("echo hello", temp.path()).unwrap();
        assert_eq!(stdout.trim(), "hello");
    }

    #[test]
    fn test_run_uses_working_directory() {
        let temp = TempDir::new().unwrap();
        let runner = ShellRunner::new().unwrap();
        let stdout = runner.run("pwd", temp.path()).unwrap();
        let reported = PathBuf::from(stdout.trim());
        // Compare canonicalized paths; on macOS /tmp is a symlink.
        assert_eq!(
            reported.canonicalize().unwrap(),
            temp.path().canonicalize().unwrap()
        );
    }

    #[test]
    fn test_run_failure_carries_stderr() {
        let temp = TempDir::new().unwrap();
        let runner = ShellRunner::new().unwrap();
        let err = runner
            .run("echo boom >&2; exit 3", temp.path())
            .unwrap_err();
        assert!(err.to_string().contains("boom"));
    }
}
