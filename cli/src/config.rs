// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, fs, path::PathBuf};

use taskpal_core::{APP_NAME, Config};

const TASKPAL_CONFIG_ENV: &str = "TASKPAL_CONFIG";

/// Locate, read, and normalize the configuration.
///
/// Lookup order: the `--config` flag, then the `TASKPAL_CONFIG` environment
/// variable, then `config.toml` under the user's config directory. With no
/// config file anywhere, the built-in defaults apply.
pub fn parse_config(path: Option<PathBuf>) -> Result<Config, Box<dyn Error>> {
    let path = if let Some(path) = path {
        Some(path)
    } else if let Ok(env_path) = std::env::var(TASKPAL_CONFIG_ENV) {
        Some(PathBuf::from(env_path))
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        config.exists().then_some(config)
    };

    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?;
            toml::from_str::<Config>(&content)
                .map_err(|e| format!("Failed to parse config file at {}: {}", path.display(), e))?
        }
        None => Config::default(),
    };

    config.normalize()?;
    Ok(config)
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(windows)]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific config directory not found".into())
}
