use std::fmt;

use crate::geometry::{Edge, clamp, overlaps};
use crate::world::{GameWorld, HIT_ALPHA};

// ── GameState ────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Won,
    Lost,
}

impl Outcome {
    /// Short outcome tag: `"won"` or `"lost"`.
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Won => "won",
            Outcome::Lost => "lost",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You {}!", self.message())
    }
}

/// Session state. `Ended` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    Playing,
    Ended(Outcome),
}

impl GameState {
    pub fn is_playing(&self) -> bool {
        matches!(self, GameState::Playing)
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            GameState::Playing => None,
            GameState::Ended(o) => Some(*o),
        }
    }
}

/// Result of one [`GameStateMachine::update`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tick {
    /// Still playing. Carries the boundary edge the player was pushed back
    /// from this tick, if any.
    Running { player_edge: Option<Edge> },
    /// This tick ended the game.
    Finished(Outcome),
    /// The game had already ended; nothing was changed.
    AlreadyEnded(Outcome),
}

// ── GameStateMachine ─────────────────────────────────────────────────────────

/// Per-frame gameplay update over a [`GameWorld`].
///
/// Driven once per rendered frame. `delta` is the number of target frames
/// elapsed since the previous call (≈ 1.0 at the target rate) and scales
/// player motion only; enemies patrol at a fixed per-tick speed.
#[derive(Debug, Default)]
pub struct GameStateMachine {
    state: GameState,
    ticks: u64,
    warned_after_end: bool,
}

impl GameStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Ticks advanced while playing, including the one that ended the game.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn update(&mut self, world: &mut GameWorld, delta: f32) -> Tick {
        if let GameState::Ended(outcome) = self.state {
            if !self.warned_after_end {
                log::warn!("update called after the game {}; ignoring", outcome.message());
                self.warned_after_end = true;
            }
            return Tick::AlreadyEnded(outcome);
        }
        self.ticks += 1;

        let player = &mut world.player;
        player.hit = false;
        player.position += player.velocity * delta;
        let player_edge = clamp(&mut player.position, &world.boundary, world.tile_size);

        for enemy in &mut world.enemies {
            enemy.position.y += enemy.velocity.y;
            if clamp(&mut enemy.position, &world.boundary, world.tile_size)
                .is_some_and(Edge::is_vertical_bound)
            {
                enemy.velocity.y = -enemy.velocity.y;
            }
        }

        let player_rect = world.player.rect();
        world.player.hit = world.enemies.iter().any(|e| overlaps(&player_rect, &e.rect()));

        if world.player.hit {
            world.health.decrease(world.health_decrement);
            world.player.alpha = HIT_ALPHA;
        } else {
            world.player.alpha = 1.0;
        }

        if overlaps(&player_rect, &world.treasure.rect()) {
            world.treasure.position = world.player.position + world.carry_offset;
        }

        if overlaps(&world.treasure.rect(), &world.door.rect()) {
            return self.finish(Outcome::Won);
        }
        if world.health.is_empty() {
            return self.finish(Outcome::Lost);
        }

        Tick::Running { player_edge }
    }

    fn finish(&mut self, outcome: Outcome) -> Tick {
        log::info!("game over after {} ticks: {}", self.ticks, outcome.message());
        self.state = GameState::Ended(outcome);
        Tick::Finished(outcome)
    }
}
