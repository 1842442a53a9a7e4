use crate::errors::{ChatError, ChatResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf, sync::RwLock};

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5500/api/chat";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_url: String,
    pub default_persona: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            default_persona: "kind_ta".to_string(),
            request_timeout_secs: 30,
            log_level: "info".to_string(),
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Loads `~/.config/moodchat/config.json` when present, otherwise falls
/// back to defaults with a `CHAT_API_URL` env override.
pub fn initialize_config() -> ChatResult<()> {
    let config_path = get_config_path()?;

    let config = if config_path.exists() {
        let config_str = fs::read_to_string(&config_path)
            .map_err(|e| ChatError::config_error(format!("failed to read config file: {}", e)))?;

        serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("failed to parse config: {}", e)))?
    } else {
        let mut config = Config::default();
        if let Ok(url) = env::var("CHAT_API_URL") {
            config.api_url = url;
        }
        config
    };

    validate_config(&config)?;
    *CONFIG.write().unwrap() = config;

    Ok(())
}

fn get_config_path() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("could not determine home directory"))?;

    Ok(home_dir.join(".config").join("moodchat").join("config.json"))
}

fn validate_config(config: &Config) -> ChatResult<()> {
    if !config.api_url.starts_with("http") {
        return Err(ChatError::config_error(
            "api_url must be an http(s) endpoint",
        ));
    }

    if config.default_persona.is_empty() {
        return Err(ChatError::config_error("default_persona is required"));
    }

    if config.request_timeout_secs == 0 {
        return Err(ChatError::config_error(
            "request_timeout_secs must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}
