use {
    crate::{config::Config, utils, utils::CommandRunner},
    anyhow::{Context, Result},
    log::info,
    std::fs,
};

/// Packages the gem into `<output-dir>/<name>-<version>.<extension>`.
///
/// A partially written artifact is left in place if the packaging tool fails.
pub fn run(config: &Config, runner: &dyn CommandRunner) -> Result<()> {
    let output_dir = config.output_dir_path();
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create {}", output_dir.display()))?;

    let version = utils::read_version(&config.version_file_path())?;
    let artifact = config.artifact_path(&version);
    info!("building {}", artifact.display());

    runner.run_v(
        &config.package_tool,
        &[
            "build".to_string(),
            "--output".to_string(),
            artifact.display().to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{commands::test_helpers::*, utils::shell::MockCommandRunner},
        anyhow::anyhow,
        pretty_assertions::assert_eq,
    };

    #[test]
    fn test_build_creates_output_dir_and_packages() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::write(config.version_file_path(), "1.2.3").unwrap();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run_v()
            .withf(|program, args| {
                program == "gem" && args == strings(&["build", "--output", "build/aserto-1.2.3.gem"])
            })
            .times(1)
            .returning(|_, _| Ok(()));

        run(&config, &runner).unwrap();

        assert!(dir.path().join("build").is_dir());
    }

    #[test]
    fn test_build_with_existing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::create_dir_all(config.output_dir_path()).unwrap();
        fs::write(config.version_file_path(), "0.31.0\n").unwrap();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run_v()
            .withf(|_, args| args == strings(&["build", "--output", "build/aserto-0.31.0.gem"]))
            .times(1)
            .returning(|_, _| Ok(()));

        run(&config, &runner).unwrap();
    }

    #[test]
    fn test_build_without_version_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        let mut runner = MockCommandRunner::new();
        runner.expect_run_v().times(0);

        let err = run(&config, &runner).unwrap_err();

        assert_eq!(
            err.downcast_ref::<std::io::Error>().unwrap().kind(),
            std::io::ErrorKind::NotFound
        );
    }

    #[test]
    fn test_build_tool_failure_is_returned() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::write(config.version_file_path(), "1.2.3").unwrap();
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run_v()
            .times(1)
            .returning(|_, _| Err(anyhow!("running `gem build` failed with exit code 1")));

        let err = run(&config, &runner).unwrap_err();

        assert_eq!(err.to_string(), "running `gem build` failed with exit code 1");
    }

    #[test]
    fn test_build_output_dir_creation_failure() {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::write(config.version_file_path(), "1.2.3").unwrap();
        fs::write(config.output_dir_path(), "not a directory").unwrap();
        let mut runner = MockCommandRunner::new();
        runner.expect_run_v().times(0);

        let err = run(&config, &runner).unwrap_err();

        assert_eq!(
            err.to_string(),
            format!("failed to create {}", config.output_dir_path().display())
        );
    }
}
