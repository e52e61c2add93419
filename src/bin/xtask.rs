use {
    anyhow::{Context, Result},
    clap::{Args, Parser, Subcommand},
    gem_xtask::{
        commands,
        config::{Config, Overrides},
        utils::{get_git_root_path, ShellRunner},
    },
    log::debug,
    std::path::PathBuf,
};

#[derive(Parser)]
#[command(name = "xtask", about = "Gem release tasks", version)]
struct Xtask {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Install required dependencies", visible_alias = "deps")]
    InstallDependencies,
    #[command(about = "Bump the version file")]
    Bump(commands::bump_version::CommandArgs),
    #[command(about = "Build the gem")]
    Build,
    #[command(about = "Push the built gem")]
    Push,
    #[command(about = "Build then push the gem")]
    Release,
}

#[derive(Args, Debug)]
pub struct GlobalOptions {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Run as if started in <ROOT> (defaults to the git top-level directory)
    #[arg(short = 'C', long, global = true, env = "XTASK_ROOT")]
    pub root: Option<PathBuf>,

    /// Config file, relative to the root
    #[arg(long, global = true, env = "XTASK_CONFIG")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, env = "XTASK_PACKAGE_NAME")]
    pub package_name: Option<String>,

    #[arg(long, global = true, env = "XTASK_EXTENSION")]
    pub extension: Option<String>,
}

fn main() {
    if let Err(err) = try_main() {
        // printed directly so no log filter can hide it
        eprintln!("Error: {err}");
        for (i, cause) in err.chain().skip(1).enumerate() {
            eprintln!("  {}: {}", i.saturating_add(1), cause);
        }
        std::process::exit(1);
    }
}

fn try_main() -> Result<()> {
    let xtask = Xtask::parse();

    let default_level = if xtask.global.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let root = resolve_root(xtask.global.root)?;
    let overrides = Overrides {
        package_name: xtask.global.package_name,
        extension: xtask.global.extension,
    };
    let config = Config::load(&root, xtask.global.config.as_deref(), &overrides)?;
    let runner = ShellRunner::new(&config.root);
    debug!("running in {}", runner.dir().display());

    match xtask.command {
        Commands::InstallDependencies => commands::deps::run(&config, &runner)?,
        Commands::Bump(args) => {
            let versions = commands::bump_version::SemverBump::new(&config);
            commands::bump_version::run(args, &config, &versions)?;
        }
        Commands::Build => commands::build::run(&config, &runner)?,
        Commands::Push => commands::push::run(&config, &runner)?,
        Commands::Release => commands::release::run(&config, &runner)?,
    }

    Ok(())
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(root) = root {
        return Ok(root);
    }
    let cwd = std::env::current_dir().context("failed to get current directory")?;
    Ok(get_git_root_path(&cwd).ok().flatten().unwrap_or(cwd))
}
