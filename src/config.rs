use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use serde::{Deserialize, Deserializer, Serialize};

use crate::body::DEFAULT_EXTEND_BY;
use crate::border::{Border, DEFAULT_STATS_HEIGHT, DEFAULT_THICKNESS};
use crate::direction::Direction;
use crate::segment::{Segment, Size};

pub const CONFIG_ENV: &str = "SNAKE_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "snake.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1150,
            height: 760,
            title: "Snake".to_string(),
        }
    }
}

/// Everything tunable about a session. Every field has a default, so a
/// partial `snake.json` only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub tick_ms: u64,
    pub border_thickness: i32,
    pub stats_height: i32,
    pub head: Size,
    /// Body piece size while facing sideways. Its width is also the head speed.
    pub piece: Size,
    pub extend_by: usize,
    pub food: Size,
    pub outline_width: u32,
    #[serde(deserialize_with = "direction_from_str")]
    pub initial_direction: Direction,
    /// Top-left of the head at the start of a round. Centered when absent.
    pub start_position: Option<(i32, i32)>,
    pub best_score_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            tick_ms: 60,
            border_thickness: DEFAULT_THICKNESS,
            stats_height: DEFAULT_STATS_HEIGHT,
            head: Size::new(32, 32),
            piece: Size::new(16, 32),
            extend_by: DEFAULT_EXTEND_BY,
            food: Size::new(32, 32),
            outline_width: 2,
            initial_direction: Direction::Right,
            start_position: None,
            best_score_path: PathBuf::from("best_score.json"),
        }
    }
}

impl GameConfig {
    pub fn display_size(&self) -> (i32, i32) {
        (self.window.width as i32, self.window.height as i32)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for (name, size) in [("head", self.head), ("piece", self.piece), ("food", self.food)] {
            if size.width <= 0 || size.height <= 0 {
                bail!("{name} size must be positive, got {}x{}", size.width, size.height);
            }
        }
        if self.tick_ms == 0 {
            bail!("tick_ms must be at least 1");
        }
        if self.extend_by == 0 {
            bail!("extend_by must be at least 1");
        }
        if self.border_thickness <= 0 || self.stats_height <= 0 {
            bail!(
                "border_thickness and stats_height must be positive, got {} and {}",
                self.border_thickness,
                self.stats_height
            );
        }
        if self.outline_width == 0 {
            bail!("outline_width must be at least 1");
        }
        let (width, height) = self.display_size();
        let min_width = 2 * self.border_thickness + self.head.width.max(self.food.width);
        let min_height =
            self.border_thickness + 1 + self.stats_height + self.head.height.max(self.food.height);
        if width < min_width || height < min_height {
            bail!("window {width}x{height} is too small, need at least {min_width}x{min_height}");
        }
        if let Some((x, y)) = self.start_position {
            let border = Border::new(width, height, self.border_thickness, self.stats_height);
            let head = Segment::new(x, y, self.head, self.initial_direction);
            if !border.is_inside(&head.rect()) {
                bail!("start_position ({x}, {y}) puts the head outside the field");
            }
        }
        Ok(())
    }
}

fn direction_from_str<'de, D>(deserializer: D) -> Result<Direction, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
}

/// Path from `SNAKE_CONFIG`, falling back to `snake.json`.
pub fn config_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Missing file gives defaults, unreadable JSON is logged and also gives
/// defaults. A config that parses but makes no sense is an error.
pub fn load(path: &Path) -> anyhow::Result<GameConfig> {
    let config = if path.exists() {
        match read(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring config {}: {err:#}", path.display());
                GameConfig::default()
            }
        }
    } else {
        GameConfig::default()
    };
    config.validate()?;
    Ok(config)
}

fn read(path: &Path) -> anyhow::Result<GameConfig> {
    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config = serde_json::from_str(&content).context("parse config")?;
    Ok(config)
}
