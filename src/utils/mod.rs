pub mod fs;
pub mod git;
pub mod shell;

pub use fs::{artifact_file_name, read_version, write_version};
pub use git::get_git_root_path;
pub use shell::{CommandRunner, ShellRunner};
