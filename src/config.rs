//! Task configuration.
//!
//! Values come from, in order of precedence, command line overrides, an
//! optional `xtask.toml` in the root directory, and built-in defaults.
//!
//! ```toml
//! [package]
//! name = "aserto"
//! extension = "gem"
//!
//! [paths]
//! version-file = "VERSION"
//! output-dir = "build"
//!
//! [tools]
//! package = "gem"
//! publish = "gem"
//! install = ["bundle", "install"]
//! ```

use {
    anyhow::{anyhow, Context, Result},
    log::debug,
    serde::Deserialize,
    std::{
        fs,
        path::{Path, PathBuf},
    },
};

pub const DEFAULT_CONFIG_FILE: &str = "xtask.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory every relative path and command is resolved against.
    pub root: PathBuf,
    pub package_name: String,
    pub extension: String,
    pub version_file: PathBuf,
    pub output_dir: PathBuf,
    pub package_tool: String,
    pub publish_tool: String,
    /// Program followed by its arguments.
    pub install_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            package_name: "aserto".to_string(),
            extension: "gem".to_string(),
            version_file: PathBuf::from("VERSION"),
            output_dir: PathBuf::from("build"),
            package_tool: "gem".to_string(),
            publish_tool: "gem".to_string(),
            install_command: vec!["bundle".to_string(), "install".to_string()],
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub package_name: Option<String>,
    pub extension: Option<String>,
}

/// Contents of `xtask.toml`. Every field is optional and falls back to the
/// built-in default.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ConfigFile {
    pub package: PackageSection,
    pub paths: PathsSection,
    pub tools: ToolsSection,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct PackageSection {
    pub name: Option<String>,
    pub extension: Option<String>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct PathsSection {
    pub version_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct ToolsSection {
    pub package: Option<String>,
    pub publish: Option<String>,
    pub install: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml_edit::de::from_str(content)?)
    }
}

impl Config {
    /// Loads the configuration for `root`.
    ///
    /// `file` names an explicit config file which must exist; without it the
    /// default file is read only when present.
    pub fn load(root: &Path, file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let mut config = Self {
            root: root.to_path_buf(),
            ..Self::default()
        };

        let path = match file {
            Some(file) => Some(root.join(file)),
            None => Some(root.join(DEFAULT_CONFIG_FILE)).filter(|path| path.is_file()),
        };
        if let Some(path) = path {
            debug!("reading config from {}", path.display());
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file = ConfigFile::parse(&content)
                .with_context(|| format!("failed to parse {}", path.display()))?;
            config.merge(file)?;
        }

        if let Some(name) = &overrides.package_name {
            config.package_name = name.clone();
        }
        if let Some(extension) = &overrides.extension {
            config.extension = extension.clone();
        }

        debug!("{config:?}");
        Ok(config)
    }

    fn merge(&mut self, file: ConfigFile) -> Result<()> {
        let ConfigFile {
            package,
            paths,
            tools,
        } = file;

        if let Some(name) = package.name {
            self.package_name = name;
        }
        if let Some(extension) = package.extension {
            self.extension = extension;
        }
        if let Some(version_file) = paths.version_file {
            self.version_file = version_file;
        }
        if let Some(output_dir) = paths.output_dir {
            self.output_dir = output_dir;
        }
        if let Some(package_tool) = tools.package {
            self.package_tool = package_tool;
        }
        if let Some(publish_tool) = tools.publish {
            self.publish_tool = publish_tool;
        }
        if let Some(install) = tools.install {
            if install.is_empty() {
                return Err(anyhow!("`tools.install` must name a program"));
            }
            self.install_command = install;
        }
        Ok(())
    }

    pub fn version_file_path(&self) -> PathBuf {
        self.root.join(&self.version_file)
    }

    pub fn output_dir_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }

    /// Artifact location relative to the root, as handed to the external tools.
    pub fn artifact_path(&self, version: &str) -> PathBuf {
        self.output_dir.join(crate::utils::artifact_file_name(
            &self.package_name,
            version,
            &self.extension,
        ))
    }
}
