//  ____  ____                 __  __       _
// |  _ \|  _ \ __ _ ___ ___  |  \/  | __ _| |_ ___
// | |_) | |_) / _` / __/ __| | |\/| |/ _` | __/ _ \
// |  _ <|  __/ (_| \__ \__ \ | |  | | (_| | ||  __/
// |_| \_\_|   \__,_|___/___/ |_|  |_|\__,_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use anyhow::{Context, Result, bail};
use chrono::Utc;
use dirs::config_dir;
use rpassword::read_password;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::passgen::DEFAULT_LENGTH;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    pub default_length: usize,
    pub created_at: String,
    pub last_modified: String,
}

impl ConfigFile {
    pub fn new() -> Self {
        let timenow = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        Self {
            default_length: DEFAULT_LENGTH,
            created_at: timenow.clone(),
            last_modified: timenow,
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config_data = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&config_data)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn save_to(&mut self, path: &Path) -> Result<()> {
        self.last_modified = Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let config_file = fs::File::create(path)
            .with_context(|| format!("Failed to create config file {}", path.display()))?;
        serde_json::to_writer_pretty(config_file, self)
            .with_context(|| format!("Failed to write config file {}", path.display()))
    }
}

/// Configuration directory for this tool.
pub fn get_config_dir() -> Result<PathBuf> {
    match config_dir() {
        Some(path) => Ok(path.join("rpassmate")),
        None => bail!("Could not determine configuration directory"),
    }
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the user configuration, falling back to defaults when no file was
/// written yet.
pub fn load_or_default() -> Result<ConfigFile> {
    let path = config_file_path()?;
    if path.exists() {
        ConfigFile::load_from(&path)
    } else {
        Ok(ConfigFile::new())
    }
}

/// Prompts on stdout and reads one trimmed line from stdin.
pub fn prompt_input(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush output")?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompts for a password with input echo suppressed.
pub fn read_password_from_stdin(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush().context("Failed to flush output")?;
    read_password().context("Failed to read password")
}
