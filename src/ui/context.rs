use std::str::FromStr;
use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::Marker;

use crate::error::ConfigError;
use crate::game::Player;

/// `[display]` section of the config file.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub target_fps: u32,
    pub x_color: String,
    pub o_color: String,
    pub grid_color: String,
    pub highlight_color: String,
    pub highlight_winner: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            target_fps: 60,
            x_color: "red".to_string(),
            o_color: "blue".to_string(),
            grid_color: "white".to_string(),
            highlight_color: "green".to_string(),
            highlight_winner: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub x: Color,
    pub o: Color,
    pub grid: Color,
    pub highlight: Color,
}

impl Palette {
    pub fn piece(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

/// Everything the renderer needs that outlives a single frame. Built once
/// at startup and lent to each draw.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub palette: Palette,
    pub marker: Marker,
    pub highlight_winner: bool,
    pub frame_budget: Duration,
}

impl RenderContext {
    pub fn from_config(config: &DisplayConfig) -> Result<Self, ConfigError> {
        if config.target_fps == 0 {
            return Err(ConfigError::Validation(
                "display.target_fps must be > 0".into(),
            ));
        }
        Ok(RenderContext {
            palette: Palette {
                x: parse_color("display.x_color", &config.x_color)?,
                o: parse_color("display.o_color", &config.o_color)?,
                grid: parse_color("display.grid_color", &config.grid_color)?,
                highlight: parse_color("display.highlight_color", &config.highlight_color)?,
            },
            marker: Marker::Braille,
            highlight_winner: config.highlight_winner,
            frame_budget: Duration::from_secs_f64(1.0 / f64::from(config.target_fps)),
        })
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        RenderContext {
            palette: Palette {
                x: Color::Red,
                o: Color::Blue,
                grid: Color::White,
                highlight: Color::Green,
            },
            marker: Marker::Braille,
            highlight_winner: true,
            frame_budget: Duration::from_secs_f64(1.0 / 60.0),
        }
    }
}

pub(crate) fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    Color::from_str(value)
        .map_err(|_| ConfigError::Validation(format!("{field}: unknown color '{value}'")))
}
