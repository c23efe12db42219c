use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub carousel: CarouselConfig,
    /// Responsive visible counts, selected by host width
    #[serde(default)]
    pub breakpoints: Vec<Breakpoint>,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            carousel: CarouselConfig::default(),
            breakpoints: Vec::new(),
            ui: UiConfig::default(),
            menu: MenuConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Per-instance carousel settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Items visible at once
    #[serde(default = "default_slides_to_show")]
    pub slides_to_show: usize,
    /// Items advanced per navigation step
    #[serde(default = "default_slides_to_scroll")]
    pub slides_to_scroll: usize,
    /// Seamless wraparound at both ends
    #[serde(default = "default_true")]
    pub infinite: bool,
    /// Declared duration of every animated move
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slides_to_show: default_slides_to_show(),
            slides_to_scroll: default_slides_to_scroll(),
            infinite: default_true(),
            animation_duration_ms: default_animation_duration(),
        }
    }
}

impl CarouselConfig {
    /// Reject settings that would make the layout math undefined
    pub fn validate(&self) -> crate::Result<()> {
        if self.slides_to_show < 1 {
            return Err(crate::Error::InvalidConfig(
                "slides_to_show must be at least 1".to_string(),
            ));
        }
        if self.slides_to_scroll < 1 {
            return Err(crate::Error::InvalidConfig(
                "slides_to_scroll must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    #[inline]
    pub fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }
}

/// Visible count used once the host is at least `min_width` wide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoint {
    pub min_width: u16,
    pub slides_to_show: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Frame rate while a slide animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Easing curve for animated moves
    #[serde(default)]
    pub easing: EasingType,
    /// Render pagination dots under the track
    #[serde(default = "default_true")]
    pub show_pagination: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            animation_fps: default_animation_fps(),
            easing: EasingType::default(),
            show_pagination: default_true(),
        }
    }
}

/// Easing function type for animated moves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// No easing - jump at the end of the duration
    None,
    /// Linear interpolation
    Linear,
    /// Cubic ease-out (default)
    #[default]
    Cubic,
    /// Quintic ease-out
    Quintic,
    /// Exponential ease-out
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Delay before a hover menu hides after the pointer leaves
    #[serde(default = "default_hide_delay")]
    pub hide_delay_ms: u64,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay(),
        }
    }
}

impl MenuConfig {
    #[inline]
    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_slides_to_show() -> usize {
    6
}

fn default_slides_to_scroll() -> usize {
    6
}

fn default_animation_duration() -> u64 {
    500
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_fps() -> u32 {
    60
}

fn default_hide_delay() -> u64 {
    200
}

impl AppConfig {
    /// Load configuration from the default location or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load and validate configuration from an explicit path, falling back
    /// to defaults when the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let config = Self::read_from(path)?;
        config.carousel.validate()?;
        Ok(config)
    }

    /// Parse configuration from an explicit path without validating it, so
    /// callers can apply overrides first
    pub fn read_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to the default location
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/carousel/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("carousel")
            .join("config.toml")
    }

    /// Visible count for a host of the given width.
    ///
    /// Picks the breakpoint with the greatest `min_width` not above `width`;
    /// breakpoints with a zero count are ignored. Without a match the
    /// configured `carousel.slides_to_show` applies.
    pub fn slides_to_show_for_width(&self, width: u16) -> usize {
        self.breakpoints
            .iter()
            .filter(|bp| bp.slides_to_show >= 1 && bp.min_width <= width)
            .max_by_key(|bp| bp.min_width)
            .map(|bp| bp.slides_to_show)
            .unwrap_or(self.carousel.slides_to_show)
    }
}
