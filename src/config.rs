use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// VK account whose photos are being backed up
    pub owner_id: String,
    /// Which album to read; "profile" is the profile-pictures album
    pub album_id: String,
    /// How many photos to request, newest slice as VK returns it
    pub photo_count: u32,
    /// Where the JSON upload report is written
    pub report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner_id: String::new(),
            album_id: "profile".to_string(),
            photo_count: 5,
            report_file: "photos_info.json".to_string(),
        }
    }
}

impl Config {
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;

        Ok(())
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        if config.owner_id.trim().is_empty() {
            bail!("owner_id is not set in {}", path.display());
        }

        if config.photo_count == 0 {
            bail!("photo_count must be at least 1 in {}", path.display());
        }

        Ok(config)
    }

    pub fn get_config_path(config_arg: &Option<PathBuf>) -> PathBuf {
        config_arg
            .clone()
            .unwrap_or_else(|| PathBuf::from("config.yaml"))
    }
}

/// Access tokens for the two services, read from the environment. A
/// `.env` file in the working directory is honored. Tokens never live
/// in the config file.
#[derive(Debug)]
pub struct Credentials {
    pub vk_token: String,
    pub disk_token: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let vk_token =
            env::var("VK_TOKEN").context("VK_TOKEN is not set (export it or add it to .env)")?;
        let disk_token = env::var("YANDEX_DISK_TOKEN")
            .context("YANDEX_DISK_TOKEN is not set (export it or add it to .env)")?;

        Ok(Self {
            vk_token,
            disk_token,
        })
    }
}
