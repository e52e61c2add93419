use {
    anyhow::{Context, Result},
    std::{
        fs::{self, OpenOptions},
        io::Write,
        path::Path,
    },
};

/// Reads the version token from `path`.
///
/// Only a single trailing line terminator is dropped; the rest of the content
/// is taken as-is.
pub fn read_version(path: &Path) -> Result<String> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let version = content
        .strip_suffix("\r\n")
        .or_else(|| content.strip_suffix('\n'))
        .unwrap_or(&content);
    Ok(version.to_string())
}

/// Replaces the content of the version file at `path` with `version`,
/// creating it when absent.
pub fn write_version(path: &Path, version: &str) -> Result<()> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o755);
    }
    let mut file = options
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    file.write_all(version.as_bytes())
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

/// `<name>-<version>.<extension>`, shared by every task that touches the
/// packaged artifact.
pub fn artifact_file_name(name: &str, version: &str, extension: &str) -> String {
    format!("{name}-{version}.{extension}")
}
