//! File-backed logging.
//!
//! The game owns the terminal while it runs, so log records go to a file
//! (`~/.clicker/clicker.log` unless overridden). The filter comes from
//! `RUST_LOG` and defaults to `info`.

use env_logger::{Env, Target};
use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

const LOG_FILENAME: &str = "clicker.log";

/// Get the ~/.clicker/ directory path, creating it if needed.
pub fn clicker_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".clicker");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn default_log_path() -> io::Result<PathBuf> {
    Ok(clicker_dir()?.join(LOG_FILENAME))
}

/// Installs the global logger, appending to `path` (or the default log file).
/// Returns the file actually used.
pub fn init_file_logger(path: Option<&Path>) -> io::Result<PathBuf> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => default_log_path()?,
    };
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .map_err(io::Error::other)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_log_path_format() {
        let path = default_log_path().expect("default_log_path should succeed");
        assert!(path.to_string_lossy().ends_with(".clicker/clicker.log"));
    }

    #[test]
    fn test_init_writes_to_requested_file() {
        let path = std::env::temp_dir().join("clicker_logging_test.log");
        let used = init_file_logger(Some(&path)).expect("logger should install");
        assert_eq!(used, path);
        assert!(path.exists());

        // A second logger cannot be installed
        assert!(init_file_logger(Some(&path)).is_err());

        fs::remove_file(path).ok();
    }
}
