use {
    anyhow::{anyhow, Result},
    std::{
        path::{Path, PathBuf},
        process::Command,
    },
};

/// Returns the top-level directory of the git repository containing `dir`,
/// or `None` when `dir` is not inside a repository.
pub fn get_git_root_path(dir: &Path) -> Result<Option<PathBuf>> {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(dir)
        .output()
        .map_err(|e| anyhow!("failed to get git root path, error: {e}"))?;
    if !output.status.success() {
        return Ok(None);
    }
    let root = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if root.is_empty() {
        return Ok(None);
    }
    Ok(Some(PathBuf::from(root)))
}

#[cfg(test)]
mod tests {
    use {super::*, pretty_assertions::assert_eq, std::fs};

    #[test]
    fn test_get_git_root_path() {
        let temp_dir = tempfile::tempdir().unwrap();
        Command::new("git")
            .args(["init"])
            .current_dir(temp_dir.path())
            .output()
            .unwrap();
        let nested = temp_dir.path().join("lib/aserto");
        fs::create_dir_all(&nested).unwrap();

        let root_path = get_git_root_path(&nested).unwrap().unwrap();

        let canonicalized_root_path = fs::canonicalize(root_path).unwrap();
        let canonicalized_temp_dir_path = fs::canonicalize(temp_dir.path()).unwrap();

        assert_eq!(canonicalized_root_path, canonicalized_temp_dir_path);
    }

    #[test]
    fn test_get_git_root_path_outside_repository() {
        let temp_dir = tempfile::tempdir().unwrap();

        // a tempdir nested inside some other checkout would still resolve
        if let Some(root) = get_git_root_path(temp_dir.path()).unwrap() {
            assert!(!fs::canonicalize(root)
                .unwrap()
                .starts_with(fs::canonicalize(temp_dir.path()).unwrap()));
        }
    }
}
