pub mod build;
pub mod bump_version;
pub mod deps;
pub mod push;
pub mod release;

#[cfg(test)]
pub(crate) mod test_helpers {
    use {
        crate::{config::Config, utils::shell::MockCommandRunner},
        anyhow::Result,
        std::{
            fs,
            path::Path,
            sync::{Arc, Mutex},
        },
    };

    pub fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    pub fn test_config(root: &Path) -> Config {
        Config {
            root: root.to_path_buf(),
            ..Config::default()
        }
    }

    /// Runs `task` against a version file holding `version` and returns the
    /// last argument it handed to the external tool.
    pub fn artifact_seen_by(
        version: &str,
        task: fn(&Config, &dyn crate::utils::CommandRunner) -> Result<()>,
    ) -> String {
        let dir = tempfile::tempdir().unwrap();
        let config = test_config(dir.path());
        fs::write(config.version_file_path(), version).unwrap();

        let seen = Arc::new(Mutex::new(None));
        let mut runner = MockCommandRunner::new();
        runner.expect_run_v().times(1).returning({
            let seen = Arc::clone(&seen);
            move |_, args| {
                *seen.lock().unwrap() = args.last().cloned();
                Ok(())
            }
        });

        task(&config, &runner).unwrap();

        let artifact = seen.lock().unwrap().take().unwrap();
        artifact
    }
}
