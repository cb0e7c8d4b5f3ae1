//! # Configuration Management Module
//!
//! Runtime settings for the `dossier` binary and for hosts embedding the engine.
//! The engine itself takes no configuration; everything here is about which cases
//! a host opens and how it runs the interrogation around them.
//!
//! ## Configuration Structure
//!
//! - [`EngineConfig`] - default language and category, optional fixed seed, optional
//!   lexicon file replacing the built-in word pools
//! - [`InterrogationConfig`] - question quota and red-notice roll for new cases
//! - [`LoggingConfig`] - log level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use dossier::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Config::create_default("dossier.toml").await?;
//!     let config = Config::load("dossier.toml").await?;
//!     println!("Language: {}", config.engine.language);
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [engine]
//! language = "tr"
//! category = "homicide"
//! # seed = 42
//! # lexicon_file = "lexicon.toml"
//!
//! [interrogation]
//! max_questions = 10
//! red_notice_chance = 0.2
//!
//! [logging]
//! level = "info"
//! # file = "dossier.log"
//! ```
//!
//! Every section and field may be omitted; missing values take their defaults.

use anyhow::{anyhow, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

use crate::lexicon::Lexicon;
use crate::model::{Category, Language};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub interrogation: InterrogationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_category")]
    pub category: Category,
    /// Fixed seed for reproducible cases. Unset means a fresh entropy seed per case.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// TOML or JSON lexicon used instead of the built-in one, chosen by extension.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lexicon_file: Option<String>,
}

fn default_category() -> Category {
    Category::Homicide
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            category: default_category(),
            seed: None,
            lexicon_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterrogationConfig {
    /// Questions allowed per case before only an accusation is accepted.
    #[serde(default = "default_max_questions")]
    pub max_questions: u32,
    /// Probability in [0, 1] that a new case is flagged as a red notice.
    #[serde(default = "default_red_notice_chance")]
    pub red_notice_chance: f64,
}

fn default_max_questions() -> u32 {
    10
}

fn default_red_notice_chance() -> f64 {
    0.2
}

impl Default for InterrogationConfig {
    fn default() -> Self {
        Self {
            max_questions: default_max_questions(),
            red_notice_chance: default_red_notice_chance(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub async fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Load `path` if it exists, defaults otherwise.
    pub async fn load_or_default(path: &str) -> Result<Self> {
        if fs::try_exists(path).await.unwrap_or(false) {
            Self::load(path).await
        } else {
            debug!("config file {} not found, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Create a default configuration file
    pub async fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content)
            .await
            .map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.interrogation.max_questions == 0 {
            return Err(anyhow!("interrogation.max_questions must be at least 1"));
        }
        let chance = self.interrogation.red_notice_chance;
        if !(0.0..=1.0).contains(&chance) {
            return Err(anyhow!(
                "interrogation.red_notice_chance must be within [0, 1], got {}",
                chance
            ));
        }
        Ok(())
    }

    /// The lexicon cases are drawn from: the configured file, or the built-in one.
    pub async fn lexicon(&self) -> Result<Lexicon> {
        let Some(path) = self.engine.lexicon_file.as_deref() else {
            return Ok(Lexicon::builtin()?.clone());
        };
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read lexicon file {}: {}", path, e))?;
        let is_json = Path::new(path)
            .extension()
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let lexicon = if is_json {
            Lexicon::from_json_str(&content)
        } else {
            Lexicon::from_toml_str(&content)
        }
        .map_err(|e| anyhow!("Invalid lexicon file {}: {}", path, e))?;
        debug!(
            "loaded lexicon {} ({} languages)",
            path,
            lexicon.languages().count()
        );
        Ok(lexicon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.engine.language, Language::Tr);
        assert_eq!(config.engine.category, Category::Homicide);
        assert_eq!(config.interrogation.max_questions, 10);
    }

    #[test]
    fn test_empty_toml_takes_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.interrogation, InterrogationConfig::default());
        assert_eq!(config.logging.level, "info");
        assert!(config.engine.seed.is_none());
    }

    #[test]
    fn test_partial_sections() {
        let config: Config = toml::from_str(
            "[engine]\nlanguage = \"en\"\ncategory = \"cyber\"\nseed = 7\n\n[interrogation]\nmax_questions = 3\n",
        )
        .unwrap();
        assert_eq!(config.engine.language, Language::En);
        assert_eq!(config.engine.category, Category::Cyber);
        assert_eq!(config.engine.seed, Some(7));
        assert_eq!(config.interrogation.max_questions, 3);
        assert_eq!(config.interrogation.red_notice_chance, 0.2);
    }

    #[test]
    fn test_validate_rejects_bad_interrogation_settings() {
        let mut config = Config::default();
        config.interrogation.max_questions = 0;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.interrogation.red_notice_chance = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_serializes_round_trip() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(text.contains("[engine]"));
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.interrogation, InterrogationConfig::default());
    }
}
