use {
    anyhow::{anyhow, Context, Result},
    log::info,
    std::{
        path::{Path, PathBuf},
        process::Command,
    },
};

/// External command execution.
///
/// Every task reaches the outside world through this trait so the tools it
/// drives (`gem`, `bundle`, ...) can be swapped for fakes.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Runs `program` with inherited stdio, failing on a non-zero exit.
    fn run_v(&self, program: &str, args: &[String]) -> Result<()>;

    /// Runs `program` and returns its stdout without the trailing newline.
    fn output(&self, program: &str, args: &[String]) -> Result<String>;
}

/// Runs commands as child processes rooted at a working directory.
#[derive(Debug, Clone)]
pub struct ShellRunner {
    dir: PathBuf,
}

impl ShellRunner {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn command(&self, program: &str, args: &[String]) -> Command {
        info!("exec: {}", command_line(program, args));
        let mut command = Command::new(program);
        command.args(args).current_dir(&self.dir);
        command
    }
}

impl CommandRunner for ShellRunner {
    fn run_v(&self, program: &str, args: &[String]) -> Result<()> {
        let status = self
            .command(program, args)
            .status()
            .with_context(|| format!("failed to run `{}`", command_line(program, args)))?;
        if !status.success() {
            return Err(anyhow!(
                "running `{}` failed with {}",
                command_line(program, args),
                exit_code(status.code())
            ));
        }
        Ok(())
    }

    fn output(&self, program: &str, args: &[String]) -> Result<String> {
        let output = self
            .command(program, args)
            .output()
            .with_context(|| format!("failed to run `{}`", command_line(program, args)))?;
        if !output.status.success() {
            return Err(anyhow!(
                "running `{}` failed with {}: {}",
                command_line(program, args),
                exit_code(output.status.code()),
                String::from_utf8_lossy(&output.stderr).trim()
            ));
        }
        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.trim_end_matches(['\r', '\n']).to_string())
    }
}

pub fn command_line(program: &str, args: &[String]) -> String {
    std::iter::once(program)
        .chain(args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

fn exit_code(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
