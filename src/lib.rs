//! Gem XTask - release tasks for the aserto gem
//!
//! Each task is a thin wrapper over external tools: `bundle` installs the
//! dependencies, `gem` builds and pushes the package. The only state shared
//! between tasks is the `VERSION` file in the root directory.
//!
//! # Examples
//!
//! ## Computing the artifact name
//!
//! ```
//! use gem_xtask::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(
//!     config.artifact_path("1.2.3").to_str(),
//!     Some("build/aserto-1.2.3.gem")
//! );
//! ```
//!
//! ## Bumping version
//!
//! ```
//! use gem_xtask::commands::bump_version::{bump_version, BumpLevel};
//! use semver::Version;
//!
//! let current = Version::parse("1.2.3").unwrap();
//! let new = bump_version(&BumpLevel::Minor, &current).unwrap();
//! assert_eq!(new, Version::parse("1.3.0").unwrap());
//! ```
//!
//! ## Releasing
//!
//! ```no_run
//! use gem_xtask::{commands::release, config::Config, utils::ShellRunner};
//!
//! let config = Config::default();
//! release::run(&config, &ShellRunner::new(&config.root)).unwrap();
//! ```

pub mod commands;
pub mod config;
pub mod utils;

pub use commands::{build, bump_version, deps, push, release};

pub use semver::Version;

pub type Result<T> = anyhow::Result<T>;
