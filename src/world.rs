use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameConfig;
use crate::geometry::{Rect, arena_boundary};

/// Opacity signalled for the player while an enemy is touching them.
pub const HIT_ALPHA: f32 = 0.5;

// ── Entity ───────────────────────────────────────────────────────────────────

/// Stable identity of an arena entity. The rendering side keys its visual
/// nodes by this.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityId {
    Player,
    Treasure,
    Door,
    Enemy(usize),
}

/// Plain positional record. Only the player uses `hit` and `alpha`.
#[derive(Clone, Debug, PartialEq)]
pub struct Entity {
    pub position: Vec2,
    pub size: Vec2,
    pub velocity: Vec2,
    pub hit: bool,
    pub alpha: f32,
}

impl Entity {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size, velocity: Vec2::ZERO, hit: false, alpha: 1.0 }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }
}

// ── HealthBar ────────────────────────────────────────────────────────────────

/// Remaining player health, drawn as a bar `value` units wide.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HealthBar {
    value: f32,
    max: f32,
}

impl HealthBar {
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self { value: max, max }
    }

    pub fn value(&self) -> f32 { self.value }
    pub fn max(&self) -> f32 { self.max }
    pub fn is_empty(&self) -> bool { self.value <= 0.0 }

    /// Fraction of health left, in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.value / self.max
    }

    /// Subtract `amount`, flooring at zero. Negative amounts are ignored.
    pub fn decrease(&mut self, amount: f32) {
        self.value = (self.value - amount.max(0.0)).clamp(0.0, self.max);
    }
}

// ── GameWorld ────────────────────────────────────────────────────────────────

/// All entity and arena state of one session.
///
/// Built once by [`GameWorld::new`]; afterwards only positions, velocities,
/// the hit flag and health change.
#[derive(Clone, Debug, PartialEq)]
pub struct GameWorld {
    pub player: Entity,
    pub treasure: Entity,
    pub door: Entity,
    pub enemies: Vec<Entity>,
    pub health: HealthBar,
    /// Side length of the dungeon in tiles, wall ring included.
    pub dungeon_size: u32,
    /// Playable region inside the wall ring.
    pub boundary: Rect,
    /// Extent used for boundary containment.
    pub tile_size: f32,
    /// Where a carried treasure sits relative to the player.
    pub carry_offset: Vec2,
    pub health_decrement: f32,
}

impl GameWorld {
    /// Lay out the arena described by `config`. Enemy heights come from an RNG
    /// seeded with `config.seed`, so equal configs give equal worlds.
    pub fn new(config: &GameConfig) -> Self {
        let tile = config.tile_size;
        let arena = config.arena_px();
        let boundary = arena_boundary(config.dungeon_size, tile);
        let mid_y = arena / 2.0 - tile;

        let player = Entity::new(Vec2::new(68.0, mid_y), Vec2::splat(tile));
        let treasure = Entity::new(
            Vec2::new(arena - tile - config.treasure_size, mid_y),
            Vec2::splat(config.treasure_size),
        );
        let door = Entity::new(Vec2::new(tile, tile), Vec2::splat(config.door_size));

        let mut rng = StdRng::seed_from_u64(config.seed);
        let max_y = (boundary.bottom() - tile).max(boundary.y);
        let mut direction = 1.0;
        let enemies = (0..config.enemy_count)
            .map(|i| {
                let x = config.enemy_spacing * i as f32 + config.enemy_x_offset;
                let y = if max_y > boundary.y { rng.gen_range(boundary.y..=max_y) } else { boundary.y };
                let enemy = Entity::new(Vec2::new(x, y), Vec2::splat(tile))
                    .with_velocity(Vec2::new(0.0, config.enemy_speed * direction));
                log::debug!("enemy {i} placed at ({x}, {y:.1}), vy {}", enemy.velocity.y);
                direction = -direction;
                enemy
            })
            .collect::<Vec<_>>();

        log::info!(
            "arena {0}x{0} tiles, {1} enemies, health {2}",
            config.dungeon_size,
            enemies.len(),
            config.health_max
        );

        Self {
            player,
            treasure,
            door,
            enemies,
            health: HealthBar::new(config.health_max),
            dungeon_size: config.dungeon_size,
            boundary,
            tile_size: tile,
            carry_offset: Vec2::splat(config.carry_offset),
            health_decrement: config.health_decrement,
        }
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        match id {
            EntityId::Player => Some(&self.player),
            EntityId::Treasure => Some(&self.treasure),
            EntityId::Door => Some(&self.door),
            EntityId::Enemy(i) => self.enemies.get(i),
        }
    }

    /// Every entity with its identity, player first.
    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        [
            (EntityId::Player, &self.player),
            (EntityId::Treasure, &self.treasure),
            (EntityId::Door, &self.door),
        ]
        .into_iter()
        .chain(self.enemies.iter().enumerate().map(|(i, e)| (EntityId::Enemy(i), e)))
    }
}
