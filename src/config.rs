use color_eyre::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::content::MissionForm;

const APP_NAME: &str = "everyones-ai";

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub carousel: CarouselConfig,
    #[serde(default)]
    pub hero: HeroConfig,
    #[serde(default)]
    pub links: LinksConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Tools carousel timing and gesture settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub autoplay_interval_ms: u64,
    /// Horizontal drag distance, in columns, a swipe has to exceed
    pub swipe_threshold: u16,
}

/// Starfield animation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroConfig {
    pub star_count: usize,
    pub frame_interval_ms: u64,
}

/// External forms and playlists the page redirects to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinksConfig {
    pub form_link: String,
    pub stories_playlist: String,
    pub join_form_url: String,
    pub submit_idea_form_url: String,
    pub upload_creation_form_url: String,
    pub feedback_form_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file override; defaults to the platform data directory
    pub file: Option<PathBuf>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5000,
            swipe_threshold: 50,
        }
    }
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            star_count: 400,
            frame_interval_ms: 33,
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        let idea_form = "https://docs.google.com/forms/d/e/1FAIpQLSfff7ZEucppfYljUxwzRpm8brOFW7hWy9ULFf2S3RERUHldKg/viewform?usp=header";
        Self {
            form_link: idea_form.to_string(),
            stories_playlist: "https://www.youtube.com/watch?v=2g3l5q2nPkE&list=PL_SazjdcB6DklaZntosVLM5Hp1H9dnCWz".to_string(),
            join_form_url: "https://huggingface.co/".to_string(),
            submit_idea_form_url: idea_form.to_string(),
            upload_creation_form_url: "https://docs.google.com/forms/d/e/1FAIpQLSdz2gl_Bcm2Hah5xeflB0p8-YMOsgIGbEwQYxDYetXNnDwr2w/viewform?usp=publish-editor".to_string(),
            feedback_form_url: "https://docs.google.com/forms/d/e/1FAIpQLSeWwCWHLvFBArpKaHRdAvJZW7E2xsGpTIr1dOefcjsddYQK7g/viewform?usp=publish-editor".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms.max(1))
    }
}

impl HeroConfig {
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms.max(1))
    }
}

impl LinksConfig {
    /// Resolves the form a mission card points at
    #[must_use]
    pub fn mission_form(&self, form: MissionForm) -> &str {
        match form {
            MissionForm::Join => &self.join_form_url,
            MissionForm::SubmitIdea => &self.submit_idea_form_url,
            MissionForm::UploadCreation => &self.upload_creation_form_url,
            MissionForm::Feedback => &self.feedback_form_url,
        }
    }
}

impl Config {
    /// Loads configuration from disk or creates default if not found
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let config = Config::default();
            config.save()?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&config_path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Returns the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.toml"))
    }

    /// Returns the log file location, honoring the override in `[logging]`
    pub fn log_path(&self) -> Result<PathBuf> {
        if let Some(file) = &self.logging.file {
            return Ok(file.clone());
        }
        Ok(project_dirs()?.data_dir().join(format!("{APP_NAME}.log")))
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", APP_NAME)
        .ok_or_else(|| color_eyre::eyre::eyre!("Could not determine config directory"))
}
