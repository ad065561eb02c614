use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::error::EventLoopError;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

use crate::config::GameConfig;
use crate::input::MovementControls;
use crate::state::{GameStateMachine, Tick};
use crate::visual::VisualTable;
use crate::window::{WindowConfig, WindowMode, apply_window_settings, window_attributes};
use crate::world::GameWorld;

/// Longest frame gap fed into the simulation, in seconds. Longer stalls
/// (window drag, debugger) are truncated.
const MAX_FRAME_SECS: f32 = 0.25;

/// Convert a wall-clock frame gap into the `delta` passed to
/// [`GameStateMachine::update`]: frames elapsed at `target_fps`.
pub fn frame_delta(elapsed_secs: f32, target_fps: f32) -> f32 {
    elapsed_secs.clamp(0.0, MAX_FRAME_SECS) * target_fps
}

/// Wall-clock time between ticks at `target_fps`.
pub fn frame_interval(target_fps: f32) -> Duration {
    if !(target_fps > 0.0) {
        return Duration::ZERO;
    }
    Duration::from_secs_f32(1.0 / target_fps)
}

/// Earliest instant the next tick may run, or `None` before the first tick.
pub fn next_frame_at(last: Option<Instant>, target_fps: f32) -> Option<Instant> {
    last.map(|t| t + frame_interval(target_fps))
}

/// Whether a tick is due at `now`. Enemy patrols and health loss are per
/// tick, so ticks must not run faster than `target_fps`.
pub fn frame_due(last: Option<Instant>, now: Instant, target_fps: f32) -> bool {
    next_frame_at(last, target_fps).is_none_or(|deadline| now >= deadline)
}

/// Open a window and run the game until it is closed.
pub fn run(config: GameConfig, window_config: WindowConfig) -> Result<(), EventLoopError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = App::new(config, window_config);
    event_loop.run_app(&mut app)
}

// ── App (winit ApplicationHandler) ──────────────────────────────────────────

struct App {
    config: GameConfig,
    window_config: WindowConfig,
    window: Option<Window>,
    world: GameWorld,
    machine: GameStateMachine,
    controls: MovementControls,
    visuals: VisualTable,
    last_instant: Option<Instant>,
    title: String,
}

impl App {
    fn new(config: GameConfig, window_config: WindowConfig) -> Self {
        let world = GameWorld::new(&config);
        let visuals = VisualTable::new(&world);
        let controls = MovementControls::new(config.player_speed);
        let title = window_config.title.clone();
        Self {
            config,
            window_config,
            window: None,
            world,
            machine: GameStateMachine::new(),
            controls,
            visuals,
            last_instant: None,
            title,
        }
    }

    fn frame(&mut self) {
        let now = Instant::now();
        // OS-initiated redraws (expose, resize) can arrive between ticks.
        if !frame_due(self.last_instant, now, self.config.target_fps) {
            return;
        }
        let delta = match self.last_instant {
            Some(prev) => frame_delta(now.duration_since(prev).as_secs_f32(), self.config.target_fps),
            None => 1.0,
        };
        self.last_instant = Some(now);

        if self.machine.state().is_playing() {
            if let Tick::Finished(outcome) = self.machine.update(&mut self.world, delta) {
                log::info!("{outcome}");
            }
        }
        self.visuals.sync(&self.world, self.machine.state());

        let hud = self.visuals.hud_text();
        if hud != self.title {
            if let Some(window) = &self.window {
                window.set_title(&hud);
            }
            self.title = hud;
        }
    }

    fn toggle_fullscreen(&mut self) {
        self.window_config.mode = match self.window_config.mode {
            WindowMode::Windowed => WindowMode::Borderless,
            WindowMode::Borderless => WindowMode::Windowed,
        };
        log::info!("window mode -> {:?}", self.window_config.mode);
        if let Some(window) = &self.window {
            apply_window_settings(window, &self.window_config);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        match event_loop.create_window(window_attributes(&self.window_config)) {
            Ok(window) => {
                log::info!(
                    "window created: {}x{} (arena {}x{}, scale {})",
                    self.window_config.physical_width,
                    self.window_config.physical_height,
                    self.window_config.logical_width,
                    self.window_config.logical_height,
                    self.window_config.render_scale,
                );
                self.window = Some(window);
            }
            Err(e) => {
                log::error!("failed to create window: {e}");
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let Some(window) = &self.window else { return };
        let now = Instant::now();
        if frame_due(self.last_instant, now, self.config.target_fps) {
            window.request_redraw();
            event_loop.set_control_flow(ControlFlow::Wait);
        } else if let Some(deadline) = next_frame_at(self.last_instant, self.config.target_fps) {
            event_loop.set_control_flow(ControlFlow::WaitUntil(deadline));
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested after {} ticks", self.machine.ticks());
                event_loop.exit();
            }

            WindowEvent::RedrawRequested => self.frame(),

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => match (code, state) {
                (KeyCode::Escape, ElementState::Pressed) => event_loop.exit(),
                (KeyCode::F11, ElementState::Pressed) => self.toggle_fullscreen(),
                _ => {
                    let pressed = state == ElementState::Pressed;
                    if self.controls.handle_key(code, pressed, &mut self.world.player.velocity) {
                        log::debug!("{code:?} {state:?} -> velocity {}", self.world.player.velocity);
                    }
                }
            },

            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_target_frame_is_delta_one() {
        assert!((frame_delta(1.0 / 60.0, 60.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn long_stall_is_truncated() {
        assert!((frame_delta(3.0, 60.0) - 15.0).abs() < 1e-4);
    }

    #[test]
    fn negative_gap_is_zero() {
        assert_eq!(frame_delta(-1.0, 60.0), 0.0);
    }

    #[test]
    fn first_frame_is_always_due() {
        assert!(frame_due(None, Instant::now(), 60.0));
        assert_eq!(next_frame_at(None, 60.0), None);
    }

    #[test]
    fn frame_waits_for_interval() {
        let t0 = Instant::now();
        assert!(!frame_due(Some(t0), t0, 60.0));
        assert!(!frame_due(Some(t0), t0 + Duration::from_millis(1), 60.0));
        assert!(!frame_due(Some(t0), t0 + Duration::from_millis(16), 60.0));
        assert!(frame_due(Some(t0), t0 + Duration::from_millis(17), 60.0));
        assert_eq!(next_frame_at(Some(t0), 60.0), Some(t0 + frame_interval(60.0)));
    }

    #[test]
    fn zero_fps_does_not_throttle() {
        assert_eq!(frame_interval(0.0), Duration::ZERO);
        let t0 = Instant::now();
        assert!(frame_due(Some(t0), t0, 0.0));
    }

    /// Wakeups every millisecond for one second still give about 60 ticks,
    /// so an enemy sitting on the player drains ~60 health, not all 128.
    #[test]
    fn fast_wakeups_are_paced_to_target_fps() {
        use crate::world::Entity;
        use glam::Vec2;

        let config = GameConfig { enemy_count: 0, ..GameConfig::default() };
        let mut world = GameWorld::new(&config);
        world.enemies.push(Entity::new(world.player.position, Vec2::splat(config.tile_size)));
        let mut machine = GameStateMachine::new();

        let t0 = Instant::now();
        let mut last = None;
        for ms in 0..1000 {
            let now = t0 + Duration::from_millis(ms);
            if frame_due(last, now, config.target_fps) {
                let delta = match last {
                    Some(prev) => frame_delta(now.duration_since(prev).as_secs_f32(), config.target_fps),
                    None => 1.0,
                };
                last = Some(now);
                machine.update(&mut world, delta);
            }
        }

        let ticks = machine.ticks();
        assert!((55..=61).contains(&ticks), "ran {ticks} ticks in one second");
        assert!(machine.state().is_playing());
        assert_eq!(world.health.value(), 128.0 - ticks as f32);
    }
}
