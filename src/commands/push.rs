use {
    crate::{config::Config, utils, utils::CommandRunner},
    anyhow::Result,
    log::info,
};

/// Publishes the artifact built for the current version.
pub fn run(config: &Config, runner: &dyn CommandRunner) -> Result<()> {
    let version = utils::read_version(&config.version_file_path())?;
    let artifact = config.artifact_path(&version);
    info!("pushing {}", artifact.display());

    runner.run_v(
        &config.publish_tool,
        &["push".to_string(), artifact.display().to_string()],
    )
}
