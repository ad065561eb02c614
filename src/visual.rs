// ── Visual table ─────────────────────────────────────────────────────────────
//
// The presentation side's mirror of a `GameWorld`. Nodes are keyed by the
// same `EntityId`s the simulation uses; the simulation never reads this.

use std::collections::BTreeMap;

use glam::Vec2;

use crate::geometry::{TileKind, dungeon_tiles};
use crate::state::{GameState, Outcome};
use crate::world::{EntityId, GameWorld};

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct VisualNode {
    pub position: Vec2,
    pub size: Vec2,
    pub alpha: f32,
    pub visible: bool,
}

/// Which top-level scene is shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Game,
    GameOver { outcome: Outcome },
}

#[derive(Clone, Debug)]
pub struct VisualTable {
    nodes: BTreeMap<EntityId, VisualNode>,
    tiles: Vec<(Vec2, TileKind)>,
    health_bar_width: f32,
    health_bar_max: f32,
    scene: SceneKind,
}

impl VisualTable {
    /// Create one node per world entity plus the world's dungeon tiles.
    pub fn new(world: &GameWorld) -> Self {
        let tile = world.tile_size;
        let tiles = dungeon_tiles(world.dungeon_size)
            .map(|(i, j, kind)| (Vec2::new(i as f32 * tile, j as f32 * tile), kind))
            .collect();
        let mut table = Self {
            nodes: BTreeMap::new(),
            tiles,
            health_bar_width: world.health.value(),
            health_bar_max: world.health.max(),
            scene: SceneKind::Game,
        };
        table.sync(world, GameState::Playing);
        table
    }

    /// Copy the latest simulation state into the visual nodes.
    pub fn sync(&mut self, world: &GameWorld, state: GameState) {
        for (id, entity) in world.entities() {
            let node = VisualNode {
                position: entity.position,
                size: entity.size,
                alpha: entity.alpha,
                visible: true,
            };
            self.nodes.insert(id, node);
        }
        self.health_bar_width = world.health.value();

        let scene = match state {
            GameState::Playing => SceneKind::Game,
            GameState::Ended(outcome) => SceneKind::GameOver { outcome },
        };
        if scene != self.scene {
            log::info!("scene switch: {:?} -> {:?}", self.scene, scene);
            self.scene = scene;
        }
    }

    pub fn node(&self, id: EntityId) -> Option<&VisualNode> {
        self.nodes.get(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&EntityId, &VisualNode)> {
        self.nodes.iter()
    }

    pub fn tiles(&self) -> &[(Vec2, TileKind)] {
        &self.tiles
    }

    pub fn scene(&self) -> SceneKind {
        self.scene
    }

    pub fn health_bar_width(&self) -> f32 {
        self.health_bar_width
    }

    /// One-line status, used as the window title.
    pub fn hud_text(&self) -> String {
        match self.scene {
            SceneKind::Game => format!(
                "Treasure Hunter | Health {:.0}/{:.0}",
                self.health_bar_width, self.health_bar_max
            ),
            SceneKind::GameOver { outcome } => format!("Treasure Hunter | {outcome}"),
        }
    }
}
