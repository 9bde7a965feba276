//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Config file name inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Application directory under the user config root.
const APP_DIR: &str = "moviebff";

/// Locates `config.toml`.
///
/// Precedence: the `--dir` override, then `$XDG_CONFIG_HOME/moviebff`, then
/// `$HOME/.config/moviebff`.
///
/// # Errors
///
/// Returns an error if no override is given and neither `XDG_CONFIG_HOME`
/// nor `HOME` is set.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    config_path_from(
        dir.map(PathBuf::as_path),
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

fn config_path_from(
    dir: Option<&Path>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    let base = match (dir, xdg_config_home, home) {
        (Some(dir), _, _) => return Ok(dir.join(CONFIG_FILE)),
        (None, Some(xdg), _) if xdg.is_absolute() => xdg,
        (None, _, Some(home)) => home.join(".config"),
        _ => bail!("cannot locate config directory: set HOME or pass --dir"),
    };
    Ok(base.join(APP_DIR).join(CONFIG_FILE))
}
