use {
    crate::{config::Config, utils},
    anyhow::{anyhow, Context, Result},
    clap::{Args, ValueEnum},
    log::{debug, info},
    semver::{Prerelease, Version},
    std::path::PathBuf,
};

#[derive(Args)]
pub struct CommandArgs {
    /// Bump level (major, minor, patch, pre-release, promote-pre-release,
    /// patch-or-pre-release) or an explicit version
    pub next: String,
}

#[derive(ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum BumpLevel {
    #[value(help = "Bump major: x.y.z -> x+1.0.0")]
    Major,
    #[value(help = "Bump minor: x.y.z -> x.y+1.0")]
    Minor,
    #[value(help = "Bump patch: x.y.z -> x.y.z+1")]
    Patch,
    #[value(
        help = "Bump prerelease suffix: x.y.z-<tag>.n -> x.y.z-<tag>.n+1 (e.g. alpha/beta/rc)"
    )]
    PreRelease,
    #[value(
        help = "Promote prerelease stage: alpha.n -> beta.0, beta.n -> rc.0, rc.n -> '' (removed rc prerelease)"
    )]
    PromotePreRelease,
    #[value(
        help = "Bump prerelease if present; otherwise bump patch (x.y.z-<tag>.n -> x.y.z-<tag>.n+1, x.y.z -> x.y.z+1)"
    )]
    PatchOrPreRelease,
}

/// Computes the version a bump request resolves to.
#[cfg_attr(test, mockall::automock)]
pub trait NextVersion {
    fn next_version(&self, next: &str) -> Result<String>;
}

/// Resolves bump requests against the current content of the version file.
pub struct SemverBump {
    version_file: PathBuf,
}

impl SemverBump {
    pub fn new(config: &Config) -> Self {
        Self {
            version_file: config.version_file_path(),
        }
    }
}

impl NextVersion for SemverBump {
    fn next_version(&self, next: &str) -> Result<String> {
        if let Ok(level) = BumpLevel::from_str(next, true) {
            let current_str = utils::read_version(&self.version_file)
                .context("failed to get current version")?;
            let current = Version::parse(current_str.trim())
                .with_context(|| format!("invalid current version `{current_str}`"))?;
            debug!("current version {current}, bumping {level:?}");
            return Ok(bump_version(&level, &current)?.to_string());
        }

        let explicit = next.strip_prefix('v').unwrap_or(next);
        match Version::parse(explicit) {
            Ok(version) => Ok(version.to_string()),
            Err(_) => Err(anyhow!(
                "invalid bump kind `{next}`, expected one of major, minor, patch, pre-release, \
                 promote-pre-release, patch-or-pre-release or a semantic version"
            )),
        }
    }
}

pub fn run(args: CommandArgs, config: &Config, versions: &dyn NextVersion) -> Result<()> {
    let next_version = versions.next_version(&args.next)?;
    println!("Bumping version to {next_version}");

    let path = config.version_file_path();
    utils::write_version(&path, &next_version)?;
    info!("wrote {next_version} to {}", path.display());

    Ok(())
}

pub fn bump_version(level: &BumpLevel, current: &Version) -> Result<Version> {
    let mut new_version = current.clone();
    match level {
        BumpLevel::Major => {
            new_version.major = new_version.major.saturating_add(1);
            new_version.minor = 0;
            new_version.patch = 0;
            new_version.pre = Prerelease::EMPTY;
        }
        BumpLevel::Minor => {
            new_version.minor = new_version.minor.saturating_add(1);
            new_version.patch = 0;
            new_version.pre = Prerelease::EMPTY;
        }
        BumpLevel::Patch => {
            new_version.patch = new_version.patch.saturating_add(1);
            new_version.pre = Prerelease::EMPTY;
        }
        BumpLevel::PreRelease => {
            let Some((prefix, number_str)) = current.pre.as_str().split_once('.') else {
                return Err(anyhow!("unexpected prerelease format: {}", current.pre));
            };
            let Ok(number) = number_str.parse::<u64>() else {
                return Err(anyhow!("unexpected prerelease format: {}", current.pre));
            };
            new_version.pre = Prerelease::new(&format!("{prefix}.{}", number.saturating_add(1)))?;
        }
        BumpLevel::PromotePreRelease => {
            let Some((prefix, _)) = current.pre.as_str().split_once('.') else {
                return Err(anyhow!("unexpected prerelease format: {}", current.pre));
            };
            new_version.pre = match prefix {
                "alpha" => Prerelease::new("beta.0")?,
                "beta" => Prerelease::new("rc.0")?,
                "rc" => Prerelease::EMPTY,
                _ => {
                    return Err(anyhow!(
                        "unexpected prerelease format: {}, only alpha, beta, and rc are supported",
                        current.pre
                    ));
                }
            };
        }
        BumpLevel::PatchOrPreRelease => {
            if current.pre.is_empty() {
                new_version = bump_version(&BumpLevel::Patch, current)?;
            } else {
                new_version = bump_version(&BumpLevel::PreRelease, current)?;
            }
        }
    }

    Ok(new_version)
}
