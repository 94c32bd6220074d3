use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::controller::IntroConfig;

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "showreel";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<IntroSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntroSection {
    /// Full sweeps over the slide set during the intro reel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loops: Option<u32>,

    /// Reel duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f32>,

    /// Longest wait for media readiness before the intro starts anyway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_wait: Option<f32>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `showreel config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# Showreel configuration\n{yaml}");
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Intro settings with config values layered over the defaults.
    pub fn intro_config(&self) -> IntroConfig {
        let mut intro = IntroConfig::default();
        if let Some(section) = &self.intro {
            if let Some(loops) = section.loops {
                intro.loops = loops;
            }
            if let Some(duration) = section.duration {
                intro.duration = duration;
            }
            if let Some(media_wait) = section.media_wait {
                intro.media_wait = media_wait;
            }
        }
        intro
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                self.defaults
                    .get_or_insert_with(DefaultsConfig::default)
                    .theme = Some(value.to_string());
            }
            "intro.loops" => {
                let loops: u32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid loop count: {value}"))?;
                if loops == 0 {
                    anyhow::bail!("Invalid loop count: {value}. Must be at least 1.");
                }
                self.intro.get_or_insert_with(IntroSection::default).loops = Some(loops);
            }
            "intro.duration" => {
                let duration: f32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid duration: {value}"))?;
                if duration <= 0.0 {
                    anyhow::bail!("Invalid duration: {value}. Must be positive.");
                }
                self.intro
                    .get_or_insert_with(IntroSection::default)
                    .duration = Some(duration);
            }
            "intro.media_wait" => {
                let wait: f32 = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("Invalid media wait: {value}"))?;
                if wait < 0.0 {
                    anyhow::bail!("Invalid media wait: {value}. Must not be negative.");
                }
                self.intro
                    .get_or_insert_with(IntroSection::default)
                    .media_wait = Some(wait);
            }
            _ => anyhow::bail!(
                "Unknown config key: {key}. Valid keys: defaults.theme, intro.loops, intro.duration, intro.media_wait"
            ),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_validates_keys_and_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "dark").is_ok());
        assert!(config.set("defaults.theme", "solarized").is_err());
        assert!(config.set("intro.loops", "4").is_ok());
        assert!(config.set("intro.loops", "0").is_err());
        assert!(config.set("intro.duration", "-1").is_err());
        assert!(config.set("nope", "x").is_err());
    }

    #[test]
    fn intro_config_layers_over_defaults() {
        let mut config = Config::default();
        let intro = config.intro_config();
        assert_eq!(intro.loops, 6);

        config.set("intro.loops", "3").unwrap();
        config.set("intro.duration", "1.5").unwrap();
        let intro = config.intro_config();
        assert_eq!(intro.loops, 3);
        assert_eq!(intro.duration, 1.5);
        // Unset keys keep their defaults.
        assert_eq!(intro.media_wait, 2.0);
    }
}
