use std::path::{Path, PathBuf};
use std::time::Duration;

use config::ConfigError;
use serde::Deserialize;

use crate::domain::blink::Blink;
use crate::domain::content::Content;
use crate::domain::typewriter::TypewriterParams;
use crate::presentation::config::keybindings;
use crate::presentation::config::styles;
use crate::utils;

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub content: Content,
}

/// Timings of the home page animation, in milliseconds
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub typewriter_speed_ms: u64,
    pub typewriter_start_delay_ms: u64,
    pub reveal_delay_ms: u64,
    pub cursor_blink_ms: u64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            typewriter_speed_ms: 80,
            typewriter_start_delay_ms: 500,
            reveal_delay_ms: 300,
            cursor_blink_ms: 1000,
        }
    }
}

impl AnimationConfig {
    pub fn typewriter_params(&self, text: &str) -> TypewriterParams {
        TypewriterParams::new(
            text,
            Duration::from_millis(self.typewriter_speed_ms),
            Duration::from_millis(self.typewriter_start_delay_ms),
        )
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    pub fn blink(&self) -> Blink {
        Blink::new(Duration::from_millis(self.cursor_blink_ms))
    }
}

/// Mail relay used by the contact form
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub endpoint: String,
    /// Sent as a bearer token when present
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub ack_duration_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("http://localhost:3000/api/send-email"),
            api_key: None,
            timeout_secs: 15,
            ack_duration_ms: 5000,
        }
    }
}

impl ContactConfig {
    pub fn ack_duration(&self) -> Duration {
        Duration::from_millis(self.ack_duration_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Only the configuration compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    /// Layered configuration: embedded defaults, then any user config file
    /// found in the config directory, then `FOLIO__*` environment variables.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_data_dir(), &utils::get_config_dir())
    }

    pub fn load_from(data_dir: &Path, config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded()?;
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?
            .add_source(config::File::from_str(CONFIG, config::FileFormat::Json5));

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true;
            }
        }
        if !found_config {
            log::info!(
                "No user configuration file in {}, using defaults",
                config_dir.display()
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(utils::paths::PROJECT_NAME.as_str())
                .prefix_separator("__")
                .separator("__"),
        );

        let mut cfg: Self = builder.build()?.try_deserialize()?;

        // Merge default keybindings into user config (flat mapping)
        for (keyseq, action) in default_config.keybindings.iter() {
            cfg.keybindings.entry(keyseq.clone()).or_insert(*action);
        }
        for (style_key, style) in default_config.styles.iter() {
            cfg.styles.entry(style_key.clone()).or_insert(*style);
        }

        if cfg.contact.endpoint.trim().is_empty() {
            return Err(ConfigError::NotFound(String::from("contact.endpoint")));
        }

        Ok(cfg)
    }
}
