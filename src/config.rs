use std::fmt;

use serde::Deserialize;

// ── GameConfig ───────────────────────────────────────────────────────────────

/// Layout and tuning constants for one arena session.
///
/// Every field has a default, so a JSON override only needs the keys it
/// changes:
///
/// ```json
/// { "enemy_count": 3, "seed": 42 }
/// ```
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square dungeon, in tiles (includes the wall ring).
    pub dungeon_size: u32,
    /// Tile edge in logical pixels.
    pub tile_size: f32,
    /// Integer upscale applied by the window.
    pub render_scale: u32,
    /// Player speed in pixels per tick.
    pub player_speed: f32,
    pub enemy_count: usize,
    /// Enemy vertical speed in pixels per tick (never scaled by `delta`).
    pub enemy_speed: f32,
    pub enemy_spacing: f32,
    pub enemy_x_offset: f32,
    /// Health lost per tick while the player overlaps any enemy.
    pub health_decrement: f32,
    pub health_max: f32,
    pub treasure_size: f32,
    pub door_size: f32,
    /// Offset from the player's position at which a carried treasure sits.
    pub carry_offset: f32,
    /// Frame rate at which `delta == 1.0`.
    pub target_fps: f32,
    /// Seed for enemy placement.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dungeon_size:     16,
            tile_size:        32.0,
            render_scale:     2,
            player_speed:     5.0,
            enemy_count:      6,
            enemy_speed:      2.0,
            enemy_spacing:    48.0,
            enemy_x_offset:   150.0,
            health_decrement: 1.0,
            health_max:       128.0,
            treasure_size:    16.0,
            door_size:        16.0,
            carry_offset:     8.0,
            target_fps:       60.0,
            seed:             0,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing keys fall back to [`GameConfig::default`].
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Arena edge length in logical pixels (`dungeon_size * tile_size`).
    pub fn arena_px(&self) -> f32 {
        self.dungeon_size as f32 * self.tile_size
    }

    /// Reject layouts the world builder cannot place entities in.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.tile_size > 0.0) {
            return Err(ConfigError::TileSize(self.tile_size));
        }
        if self.dungeon_size < 3 {
            return Err(ConfigError::DungeonTooSmall(self.dungeon_size));
        }
        if !(self.health_max > 0.0) {
            return Err(ConfigError::HealthMax(self.health_max));
        }
        if self.render_scale == 0 {
            return Err(ConfigError::RenderScale);
        }
        if !(self.target_fps > 0.0) {
            return Err(ConfigError::TargetFps(self.target_fps));
        }
        Ok(())
    }
}

// ── ConfigError ──────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    TileSize(f32),
    /// A dungeon needs at least one floor tile inside the wall ring.
    DungeonTooSmall(u32),
    HealthMax(f32),
    RenderScale,
    TargetFps(f32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TileSize(v) => write!(f, "tile_size must be positive, got {v}"),
            ConfigError::DungeonTooSmall(n) => {
                write!(f, "dungeon_size must be at least 3 tiles, got {n}")
            }
            ConfigError::HealthMax(v) => write!(f, "health_max must be positive, got {v}"),
            ConfigError::RenderScale => write!(f, "render_scale must be at least 1"),
            ConfigError::TargetFps(v) => write!(f, "target_fps must be positive, got {v}"),
        }
    }
}

impl std::error::Error for ConfigError {}
