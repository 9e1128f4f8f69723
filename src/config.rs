use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PaletteError, Result};
use crate::grid::{GridOptions, LineFit};

/// RGB color values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Theme color palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Tile text
    pub tile_fg: Rgb,
    /// Tile background
    pub tile_bg: Rgb,
    /// Text of the tile under the cursor
    pub active_fg: Rgb,
    /// Background of the tile under the cursor
    pub active_bg: Rgb,
    /// Muted/secondary text color
    pub muted: Rgb,
    /// Frame around the grid
    pub border: Rgb,
    /// Load errors
    pub error: Rgb,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            tile_fg: Rgb::new(250, 250, 250),
            tile_bg: Rgb::new(125, 86, 244),
            active_fg: Rgb::new(250, 250, 250),
            active_bg: Rgb::new(148, 185, 242),
            muted: Rgb::new(140, 140, 140),
            border: Rgb::new(80, 80, 100),
            error: Rgb::new(252, 129, 129),
        }
    }
}

impl ThemeColors {
    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            tile_fg: Rgb::new(205, 214, 244),   // Text
            tile_bg: Rgb::new(69, 71, 90),      // Surface1
            active_fg: Rgb::new(30, 30, 46),    // Base
            active_bg: Rgb::new(203, 166, 247), // Mauve
            muted: Rgb::new(166, 173, 200),     // Subtext0
            border: Rgb::new(88, 91, 112),      // Surface2
            error: Rgb::new(243, 139, 168),     // Red
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            tile_fg: Rgb::new(255, 255, 255),
            tile_bg: Rgb::new(0, 0, 0),
            active_fg: Rgb::new(0, 0, 0),
            active_bg: Rgb::new(255, 255, 0),
            muted: Rgb::new(200, 200, 200),
            border: Rgb::new(255, 255, 255),
            error: Rgb::new(255, 0, 0),
        }
    }

    /// Get theme by name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().replace(['-', '_', ' '], "") {
            s if s == "default" => Some(Self::default()),
            s if s == "catppuccinmocha" => Some(Self::catppuccin_mocha()),
            s if s == "highcontrast" => Some(Self::high_contrast()),
            _ => None,
        }
    }
}

/// Theme configuration - either a preset name or custom colors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ThemeConfig {
    /// Preset theme name
    Preset(String),
    /// Custom color configuration
    Custom(ThemeColors),
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig::Preset("default".to_string())
    }
}

impl ThemeConfig {
    /// Resolve to actual theme colors
    pub fn resolve(&self) -> ThemeColors {
        match self {
            ThemeConfig::Preset(name) => ThemeColors::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme = %name, "unknown theme preset, using default");
                ThemeColors::default()
            }),
            ThemeConfig::Custom(colors) => colors.clone(),
        }
    }
}

/// Spacing around each tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileConfig {
    #[serde(default = "default_margin")]
    pub margin: u16,

    #[serde(default = "default_padding")]
    pub padding: u16,
}

fn default_margin() -> u16 {
    1
}

fn default_padding() -> u16 {
    2
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            padding: default_padding(),
        }
    }
}

/// Per-action key overrides. Actions left out keep their default keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMapConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_left: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_up: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_right: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor_down: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force_quit: Option<Vec<String>>,
}

/// Configuration settings for the palette
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_heading")]
    pub heading: String,

    #[serde(default = "default_true")]
    pub show_diagnostics: bool,

    #[serde(default)]
    pub tile: TileConfig,

    #[serde(default)]
    pub line_fit: LineFit,

    #[serde(default)]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub keymap: KeyMapConfig,

    /// Milliseconds between UI ticks
    #[serde(default = "default_tick_rate")]
    pub tick_rate: u64,
}

fn default_heading() -> String {
    "Palette".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    250
}

impl Default for Config {
    fn default() -> Self {
        Self {
            heading: default_heading(),
            show_diagnostics: true,
            tile: TileConfig::default(),
            line_fit: LineFit::default(),
            theme: ThemeConfig::default(),
            keymap: KeyMapConfig::default(),
            tick_rate: default_tick_rate(),
        }
    }
}

impl Config {
    /// Get the config file path (~/.palette.json)
    fn config_file_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".palette.json"))
            .ok_or(PaletteError::NoHomeDirectory)
    }

    /// Ensure the config file exists, creating it with defaults if not
    fn ensure_config_file(config_path: &Path) -> Result<()> {
        if !config_path.exists() {
            let default_config = Config::default();
            let data = serde_json::to_string_pretty(&default_config)?;
            fs::write(config_path, data)?;
            tracing::info!(path = %config_path.display(), "created default config");
        }
        Ok(())
    }

    /// Load configuration from ~/.palette.json, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;
        Self::ensure_config_file(&config_path)?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, merging with defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration, falling back to defaults with a warning on failure.
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "failed to load config");
                eprintln!("Warning: failed to load config: {err}, using defaults");
                Self::default()
            }
        }
    }

    /// Layout options handed to every grid built from this config
    pub fn grid_options(&self) -> GridOptions {
        GridOptions {
            heading: Some(self.heading.clone()).filter(|h| !h.is_empty()),
            margin: self.tile.margin,
            padding: self.tile.padding,
            line_fit: self.line_fit,
            show_diagnostics: self.show_diagnostics,
        }
    }
}
