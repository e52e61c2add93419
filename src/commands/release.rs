use {
    crate::{commands, config::Config, utils::CommandRunner},
    anyhow::Result,
    log::info,
};

/// Builds and then pushes the gem, stopping at the first failure.
///
/// Nothing is rolled back: a failed push leaves the built artifact in the
/// output directory.
pub fn run(config: &Config, runner: &dyn CommandRunner) -> Result<()> {
    commands::build::run(config, runner)?;
    commands::push::run(config, runner)?;
    info!("released {}", config.package_name);
    Ok(())
}
