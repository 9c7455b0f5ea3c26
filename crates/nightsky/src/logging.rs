//! Log file setup.
//!
//! The terminal belongs to the animation while it runs, so log records go to
//! a file in the cache directory instead of stderr. `RUST_LOG` selects the
//! filter and defaults to `info`. Logging is best effort: when the file cannot
//! be set up the sky still shows, just without a log.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};
use env_logger::{Builder, Env, Target, WriteStyle};
use nightsky_config::Config;

/// Name of the log file inside the cache directory.
const LOG_FILE_NAME: &str = "nightsky.log";

/// Install the global logger.
///
/// Returns the log file path, or `None` when logging stays disabled.
pub fn init() -> Option<PathBuf> {
    let dirs = Config::project_dirs()?;
    init_in(dirs.cache_dir(), "info")
}

fn init_in(dir: &Path, default_filter: &str) -> Option<PathBuf> {
    match install(dir, default_filter) {
        Ok(path) => Some(path),
        Err(err) => {
            eprintln!("nightsky: logging disabled: {err:#}");
            None
        }
    }
}

fn install(dir: &Path, default_filter: &str) -> Result<PathBuf> {
    let (path, file) = open_log_file(dir)?;
    Builder::from_env(Env::default().default_filter_or(default_filter))
        .target(Target::Pipe(Box::new(file)))
        .write_style(WriteStyle::Never)
        .try_init()
        .wrap_err("failed to initialize logger")?;
    Ok(path)
}

fn open_log_file(dir: &Path) -> Result<(PathBuf, File)> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create log directory {}", dir.display()))?;
    let path = dir.join(LOG_FILE_NAME);
    let file = File::create(&path)
        .wrap_err_with(|| format!("failed to create log file {}", path.display()))?;
    Ok((path, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("nightsky-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_unwritable_log_dir_disables_logging() {
        let base = scratch_dir("log-blocked");
        fs::create_dir_all(&base).unwrap();
        // A regular file where the log directory should go.
        let blocker = base.join("cache");
        fs::write(&blocker, "").unwrap();
        let dir = blocker.join("nightsky");

        assert!(open_log_file(&dir).is_err());
        assert_eq!(init_in(&dir, "info"), None);

        let _ = fs::remove_dir_all(&base);
    }

    #[test]
    fn test_config_records_reach_log_file() {
        let dir = scratch_dir("log-config");
        let path = init_in(&dir, "debug").unwrap();

        let config = Config::load_from(&dir.join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        log::logger().flush();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("not found, using defaults"), "log was: {contents}");

        let _ = fs::remove_dir_all(&dir);
    }
}
