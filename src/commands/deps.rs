use {
    crate::{config::Config, utils::CommandRunner},
    anyhow::{anyhow, Result},
    log::info,
};

pub fn run(config: &Config, runner: &dyn CommandRunner) -> Result<()> {
    let Some((program, args)) = config.install_command.split_first() else {
        return Err(anyhow!("no dependency install command configured"));
    };
    info!("installing dependencies");
    runner.run_v(program, args)
}
