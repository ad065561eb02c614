use std::collections::HashMap;

use glam::Vec2;
pub use winit::keyboard::KeyCode;

/// Logical movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Left, Direction::Up, Direction::Right, Direction::Down];

    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Unit step in arena coordinates (y grows downward).
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
        }
    }
}

// ── InputBinding ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyState {
    #[default]
    Idle,
    Pressed,
}

/// Edge-triggered state of one logical key.
///
/// `press` and `release` report `true` only when the state actually changes,
/// so OS key repeat while held produces a single press.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputBinding {
    state: KeyState,
}

impl InputBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> KeyState { self.state }
    pub fn is_down(&self) -> bool { self.state == KeyState::Pressed }

    pub fn press(&mut self) -> bool {
        let changed = self.state == KeyState::Idle;
        self.state = KeyState::Pressed;
        changed
    }

    pub fn release(&mut self) -> bool {
        let changed = self.state == KeyState::Pressed;
        self.state = KeyState::Idle;
        changed
    }
}

// ── KeyBindings ──────────────────────────────────────────────────────────────

/// Maps physical keys to movement directions. Several keys may share a
/// direction.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, Direction>,
}

impl KeyBindings {
    /// No keys bound.
    pub fn empty() -> Self {
        Self { bindings: HashMap::new() }
    }

    pub fn bind(&mut self, key: KeyCode, direction: Direction) {
        self.bindings.insert(key, direction);
    }

    pub fn direction(&self, key: KeyCode) -> Option<Direction> {
        self.bindings.get(&key).copied()
    }
}

/// Arrow keys plus WASD.
impl Default for KeyBindings {
    fn default() -> Self {
        let mut map = Self::empty();
        map.bind(KeyCode::ArrowLeft, Direction::Left);
        map.bind(KeyCode::ArrowUp, Direction::Up);
        map.bind(KeyCode::ArrowRight, Direction::Right);
        map.bind(KeyCode::ArrowDown, Direction::Down);
        map.bind(KeyCode::KeyA, Direction::Left);
        map.bind(KeyCode::KeyW, Direction::Up);
        map.bind(KeyCode::KeyD, Direction::Right);
        map.bind(KeyCode::KeyS, Direction::Down);
        map
    }
}

// ── MovementControls ─────────────────────────────────────────────────────────

/// Turns key presses and releases into a player velocity.
///
/// Every bound key keeps its own [`InputBinding`]; a direction is held while
/// any of its keys is down.
///
/// - Pressing a direction moves at `speed` along it and stops the other axis.
/// - Releasing the last key of a direction stops that axis, unless the
///   opposite direction is still held or the player is moving along the
///   other axis.
#[derive(Debug, Clone)]
pub struct MovementControls {
    keys: KeyBindings,
    held: HashMap<KeyCode, InputBinding>,
    speed: f32,
}

impl MovementControls {
    pub fn new(speed: f32) -> Self {
        Self::with_keys(speed, KeyBindings::default())
    }

    pub fn with_keys(speed: f32, keys: KeyBindings) -> Self {
        Self { keys, held: HashMap::new(), speed }
    }

    pub fn key_state(&self, key: KeyCode) -> KeyState {
        self.held.get(&key).map_or(KeyState::Idle, InputBinding::state)
    }

    pub fn is_held(&self, direction: Direction) -> bool {
        self.held
            .iter()
            .any(|(key, binding)| binding.is_down() && self.keys.direction(*key) == Some(direction))
    }

    /// Feed a raw key event. Returns `true` if the key is bound and changed
    /// its binding's state.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool, velocity: &mut Vec2) -> bool {
        let Some(direction) = self.keys.direction(key) else { return false };
        let binding = self.held.entry(key).or_default();
        if pressed {
            if !binding.press() {
                return false;
            }
            *velocity = direction.unit() * self.speed;
        } else {
            if !binding.release() {
                return false;
            }
            if !self.is_held(direction) {
                self.stop(direction, velocity);
            }
        }
        true
    }

    fn stop(&self, direction: Direction, velocity: &mut Vec2) {
        if self.is_held(direction.opposite()) {
            return;
        }
        if direction.is_horizontal() {
            if velocity.y == 0.0 {
                velocity.x = 0.0;
            }
        } else if velocity.x == 0.0 {
            velocity.y = 0.0;
        }
    }
}
