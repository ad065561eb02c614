use crate::config::GameConfig;

// ── WindowMode ────────────────────────────────────────────────────────────────

/// Controls how the OS window is presented.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WindowMode {
    /// Standard decorated window at the configured resolution.
    Windowed,
    /// Borderless window sized to match the monitor's native resolution.
    Borderless,
}

// ── WindowConfig ──────────────────────────────────────────────────────────────

/// Window configuration snapshot.
///
/// - **logical** dimensions are the arena resolution the game simulates in
///   (16 tiles × 32 px = 512 × 512 by default).
/// - **physical** dimensions are the OS window size: logical × `render_scale`.
#[derive(Clone, Debug, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Actual window width in physical pixels.
    pub physical_width: u32,
    /// Actual window height in physical pixels.
    pub physical_height: u32,
    /// Arena width in logical pixels.
    pub logical_width: u32,
    /// Arena height in logical pixels.
    pub logical_height: u32,
    pub render_scale: u32,
    /// Active window mode.
    pub mode: WindowMode,
}

impl WindowConfig {
    /// Size the window for the arena described by `game`.
    pub fn from_game(game: &GameConfig) -> Self {
        let logical = game.arena_px().round().max(0.0) as u32;
        let scale = game.render_scale.max(1);
        Self {
            title:           "Treasure Hunter".to_string(),
            physical_width:  logical * scale,
            physical_height: logical * scale,
            logical_width:   logical,
            logical_height:  logical,
            render_scale:    scale,
            mode:            WindowMode::Windowed,
        }
    }

    /// Aspect ratio of the **logical** resolution (`logical_width / logical_height`).
    ///
    /// Returns `0.0` when `logical_height` is zero to avoid division by zero.
    pub fn aspect_ratio(&self) -> f32 {
        if self.logical_height == 0 {
            return 0.0;
        }
        self.logical_width as f32 / self.logical_height as f32
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::from_game(&GameConfig::default())
    }
}
