pub mod app;
pub mod config;
pub mod geometry;
pub mod input;
pub mod state;
pub mod visual;
pub mod window;
pub mod world;

pub use config::GameConfig;
pub use state::{GameState, GameStateMachine, Outcome, Tick};
pub use world::{Entity, EntityId, GameWorld, HealthBar};
