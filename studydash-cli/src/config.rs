//! Configuration
//!
//! Resolution order for every setting: command-line flag or environment
//! variable, then `config.toml`, then built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use serde::{Deserialize, Serialize};
use studydash_core::deadline::DEFAULT_WINDOW_MINUTES;
use studydash_core::timer::DEFAULT_SESSION_SECS;
use tracing::info;

const STORE_FILE: &str = "dashboard.json";

/// Contents of `config.toml`; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudydashConfig {
    pub data_dir: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub pomodoro_minutes: Option<u32>,
    pub reminder_window_minutes: Option<i64>,
}

impl StudydashConfig {
    /// `<config dir>/studydash/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("studydash").join("config.toml"))
    }

    /// A missing file is an empty config
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, raw).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Fully resolved settings used by the commands
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub config_path: Option<PathBuf>,
    pub data_dir: PathBuf,
    pub log_dir: PathBuf,
    pub pomodoro_minutes: u32,
    pub reminder_window_minutes: i64,
}

impl Settings {
    pub fn resolve(data_dir_flag: Option<PathBuf>, config_flag: Option<PathBuf>) -> Result<Self> {
        let config_path = config_flag.or_else(StudydashConfig::default_path);
        let file = match &config_path {
            Some(path) => StudydashConfig::load(path)?,
            None => StudydashConfig::default(),
        };
        Self::from_parts(data_dir_flag, config_path, file)
    }

    fn from_parts(
        data_dir_flag: Option<PathBuf>,
        config_path: Option<PathBuf>,
        file: StudydashConfig,
    ) -> Result<Self> {
        let data_dir = match data_dir_flag.or(file.data_dir) {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        let log_dir = file.log_dir.unwrap_or_else(|| data_dir.join("logs"));
        Ok(Self {
            config_path,
            log_dir,
            data_dir,
            pomodoro_minutes: file.pomodoro_minutes.unwrap_or(DEFAULT_SESSION_SECS / 60),
            reminder_window_minutes: file.reminder_window_minutes.unwrap_or(DEFAULT_WINDOW_MINUTES),
        })
    }

    pub fn store_path(&self) -> PathBuf {
        self.data_dir.join(STORE_FILE)
    }
}

fn default_data_dir() -> Result<PathBuf> {
    if let Some(dir) = dirs::data_dir() {
        return Ok(dir.join("studydash"));
    }
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".studydash"))
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Print the resolved settings
    Show,
    /// Write a config file with the current settings if none exists
    Init,
}

pub fn run(args: ConfigArgs, settings: &Settings) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            match &settings.config_path {
                Some(path) => println!("config file:      {}", path.display()),
                None => println!("config file:      (none)"),
            }
            println!("data dir:         {}", settings.data_dir.display());
            println!("store:            {}", settings.store_path().display());
            println!("log dir:          {}", settings.log_dir.display());
            println!("pomodoro minutes: {}", settings.pomodoro_minutes);
            println!("reminder window:  {} minutes", settings.reminder_window_minutes);
            Ok(())
        }
        ConfigCommand::Init => {
            let path = settings
                .config_path
                .as_deref()
                .context("No config directory available on this system")?;
            if path.exists() {
                println!("Config already exists at {}", path.display());
                return Ok(());
            }
            let config = StudydashConfig {
                data_dir: Some(settings.data_dir.clone()),
                log_dir: Some(settings.log_dir.clone()),
                pomodoro_minutes: Some(settings.pomodoro_minutes),
                reminder_window_minutes: Some(settings.reminder_window_minutes),
            };
            config.save(path)?;
            info!("Wrote config to {}", path.display());
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_file_beats_default() {
        let file = StudydashConfig {
            data_dir: Some(PathBuf::from("/from/file")),
            pomodoro_minutes: Some(50),
            ..Default::default()
        };

        let settings = Settings::from_parts(Some(PathBuf::from("/from/flag")), None, file.clone()).unwrap();
        assert_eq!(settings.data_dir, PathBuf::from("/from/flag"));
        assert_eq!(settings.log_dir, PathBuf::from("/from/flag/logs"));
        assert_eq!(settings.pomodoro_minutes, 50);
        assert_eq!(settings.reminder_window_minutes, 60);

        let settings = Settings::from_parts(None, None, file).unwrap();
        assert_eq!(settings.store_path(), PathBuf::from("/from/file/dashboard.json"));
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("studydash").join("config.toml");
        let config = StudydashConfig {
            pomodoro_minutes: Some(30),
            reminder_window_minutes: Some(15),
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(StudydashConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = StudydashConfig::load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(loaded, StudydashConfig::default());
    }
}
