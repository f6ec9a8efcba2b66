//! Application configuration and persisted render settings for profilegen.
//!
//! Two files live under `~/.profilegen/`:
//! - `profilegen.toml`: [`AppConfig`]: paths and remote endpoints.
//! - `settings.json`: [`RenderConfig`]: which optional README sections to render.
//!
//! Both fall back to defaults when the file does not exist.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ProfileGenError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "profilegen.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".profilegen";

/// Default settings file name (inside the config directory).
const SETTINGS_FILE_NAME: &str = "settings.json";

// ---------------------------------------------------------------------------
// App config (profilegen.toml)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where files are read from and written to.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Remote lookup endpoints.
    #[serde(default)]
    pub remote: RemoteConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Rendered README destination, relative to the working directory.
    #[serde(default = "default_output_file")]
    pub output_file: String,

    /// Local icon catalog file.
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Persisted render settings. Defaults to `~/.profilegen/settings.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings_file: Option<String>,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            catalog_file: default_catalog_file(),
            settings_file: None,
        }
    }
}

fn default_output_file() -> String {
    "README.md".into()
}
fn default_catalog_file() -> String {
    "devicon_tools.json".into()
}

/// `[remote]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// GitHub REST API root used for the username check.
    #[serde(default = "default_github_api_url")]
    pub github_api_url: String,

    /// Devicon catalog JSON.
    #[serde(default = "default_devicon_url")]
    pub devicon_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Whether the interview checks that the username exists on GitHub.
    #[serde(default = "default_true")]
    pub verify_username: bool,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            github_api_url: default_github_api_url(),
            devicon_url: default_devicon_url(),
            timeout_secs: default_timeout_secs(),
            verify_username: true,
        }
    }
}

fn default_github_api_url() -> String {
    "https://api.github.com".into()
}
fn default_devicon_url() -> String {
    "https://raw.githubusercontent.com/devicons/devicon/master/devicon.json".into()
}
fn default_timeout_secs() -> u64 {
    10
}
fn default_true() -> bool {
    true
}

impl AppConfig {
    /// Resolved settings file path.
    pub fn settings_path(&self) -> Result<PathBuf> {
        match &self.paths.settings_file {
            Some(p) => Ok(PathBuf::from(p)),
            None => Ok(config_dir()?.join(SETTINGS_FILE_NAME)),
        }
    }
}

// ---------------------------------------------------------------------------
// Render config (settings.json)
// ---------------------------------------------------------------------------

/// Section gates and cosmetic parameters for the README assembler.
///
/// Every optional section has exactly one gate. Missing keys in a persisted
/// file fall back to [`RenderConfig::default`]; unknown keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub show_stats: bool,
    pub show_streak: bool,
    pub show_top_langs: bool,
    pub show_visitor_counter: bool,
    pub show_badges: bool,
    pub show_journey: bool,
    pub show_quote: bool,
    pub add_gif_banner: bool,
    pub center_content: bool,
    pub use_emojis: bool,
    /// Theme name passed to the stats cards.
    pub stats_theme: String,
    pub quote: String,
    pub gif_banner_url: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_stats: true,
            show_streak: true,
            show_top_langs: true,
            show_visitor_counter: false,
            show_badges: true,
            show_journey: true,
            show_quote: false,
            add_gif_banner: false,
            center_content: true,
            use_emojis: true,
            stats_theme: "radical".into(),
            quote: String::new(),
            gif_banner_url: String::new(),
        }
    }
}

/// Value of a single [`RenderConfig`] entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingValue<'a> {
    Flag(bool),
    Text(&'a str),
}

impl std::fmt::Display for SettingValue<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(true) => f.write_str("on"),
            Self::Flag(false) => f.write_str("off"),
            Self::Text(t) if t.is_empty() => f.write_str("(empty)"),
            Self::Text(t) => write!(f, "\"{t}\""),
        }
    }
}

/// Every editable key of [`RenderConfig`], in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    ShowStats,
    ShowStreak,
    ShowTopLangs,
    ShowVisitorCounter,
    ShowBadges,
    ShowJourney,
    ShowQuote,
    AddGifBanner,
    CenterContent,
    UseEmojis,
    StatsTheme,
    Quote,
    GifBannerUrl,
}

impl SettingKey {
    pub const ALL: [SettingKey; 13] = [
        Self::ShowStats,
        Self::ShowStreak,
        Self::ShowTopLangs,
        Self::ShowVisitorCounter,
        Self::ShowBadges,
        Self::ShowJourney,
        Self::ShowQuote,
        Self::AddGifBanner,
        Self::CenterContent,
        Self::UseEmojis,
        Self::StatsTheme,
        Self::Quote,
        Self::GifBannerUrl,
    ];

    /// The JSON key this entry is persisted under.
    pub fn name(self) -> &'static str {
        match self {
            Self::ShowStats => "show_stats",
            Self::ShowStreak => "show_streak",
            Self::ShowTopLangs => "show_top_langs",
            Self::ShowVisitorCounter => "show_visitor_counter",
            Self::ShowBadges => "show_badges",
            Self::ShowJourney => "show_journey",
            Self::ShowQuote => "show_quote",
            Self::AddGifBanner => "add_gif_banner",
            Self::CenterContent => "center_content",
            Self::UseEmojis => "use_emojis",
            Self::StatsTheme => "stats_theme",
            Self::Quote => "quote",
            Self::GifBannerUrl => "gif_banner_url",
        }
    }

    pub fn is_flag(self) -> bool {
        !matches!(self, Self::StatsTheme | Self::Quote | Self::GifBannerUrl)
    }
}

impl RenderConfig {
    pub fn get(&self, key: SettingKey) -> SettingValue<'_> {
        match key {
            SettingKey::StatsTheme => SettingValue::Text(&self.stats_theme),
            SettingKey::Quote => SettingValue::Text(&self.quote),
            SettingKey::GifBannerUrl => SettingValue::Text(&self.gif_banner_url),
            SettingKey::ShowStats => SettingValue::Flag(self.show_stats),
            SettingKey::ShowStreak => SettingValue::Flag(self.show_streak),
            SettingKey::ShowTopLangs => SettingValue::Flag(self.show_top_langs),
            SettingKey::ShowVisitorCounter => SettingValue::Flag(self.show_visitor_counter),
            SettingKey::ShowBadges => SettingValue::Flag(self.show_badges),
            SettingKey::ShowJourney => SettingValue::Flag(self.show_journey),
            SettingKey::ShowQuote => SettingValue::Flag(self.show_quote),
            SettingKey::AddGifBanner => SettingValue::Flag(self.add_gif_banner),
            SettingKey::CenterContent => SettingValue::Flag(self.center_content),
            SettingKey::UseEmojis => SettingValue::Flag(self.use_emojis),
        }
    }

    /// Return a copy with the boolean `key` flipped. Text keys are left as-is.
    pub fn toggled(mut self, key: SettingKey) -> Self {
        if let Some(slot) = self.flag_slot(key) {
            *slot = !*slot;
        }
        self
    }

    /// Return a copy with the text `key` replaced. Flag keys are left as-is.
    pub fn with_text(mut self, key: SettingKey, value: impl Into<String>) -> Self {
        match key {
            SettingKey::StatsTheme => self.stats_theme = value.into(),
            SettingKey::Quote => self.quote = value.into(),
            SettingKey::GifBannerUrl => self.gif_banner_url = value.into(),
            _ => {}
        }
        self
    }

    fn flag_slot(&mut self, key: SettingKey) -> Option<&mut bool> {
        match key {
            SettingKey::ShowStats => Some(&mut self.show_stats),
            SettingKey::ShowStreak => Some(&mut self.show_streak),
            SettingKey::ShowTopLangs => Some(&mut self.show_top_langs),
            SettingKey::ShowVisitorCounter => Some(&mut self.show_visitor_counter),
            SettingKey::ShowBadges => Some(&mut self.show_badges),
            SettingKey::ShowJourney => Some(&mut self.show_journey),
            SettingKey::ShowQuote => Some(&mut self.show_quote),
            SettingKey::AddGifBanner => Some(&mut self.add_gif_banner),
            SettingKey::CenterContent => Some(&mut self.center_content),
            SettingKey::UseEmojis => Some(&mut self.use_emojis),
            SettingKey::StatsTheme | SettingKey::Quote | SettingKey::GifBannerUrl => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.profilegen/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ProfileGenError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.profilegen/profilegen.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ProfileGenError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| ProfileGenError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ProfileGenError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let content = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| ProfileGenError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ProfileGenError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

// ---------------------------------------------------------------------------
// Settings persistence
// ---------------------------------------------------------------------------

/// Load persisted render settings. Returns defaults if the file does not exist.
pub fn load_settings_from(path: &Path) -> Result<RenderConfig> {
    if !path.exists() {
        tracing::debug!(?path, "settings file not found, using defaults");
        return Ok(RenderConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ProfileGenError::io(path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| ProfileGenError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Persist render settings as pretty JSON (temp file + rename).
pub fn save_settings_to(path: &Path, settings: &RenderConfig) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ProfileGenError::io(parent, e))?;
    }

    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| ProfileGenError::config(format!("settings serialization failed: {e}")))?;

    let temp = path.with_extension("json.tmp");
    std::fs::write(&temp, json).map_err(|e| ProfileGenError::io(&temp, e))?;
    std::fs::rename(&temp, path).map_err(|e| ProfileGenError::io(path, e))?;

    tracing::debug!(?path, "settings saved");
    Ok(())
}
