pub mod config;

pub use config::{WindowConfig, WindowMode};

use winit::dpi::PhysicalSize;
use winit::window::{Fullscreen, Window, WindowAttributes};

/// Initial attributes for a window described by `config`.
pub fn window_attributes(config: &WindowConfig) -> WindowAttributes {
    let attrs = Window::default_attributes()
        .with_title(&config.title)
        .with_inner_size(PhysicalSize::new(config.physical_width, config.physical_height))
        .with_resizable(false);
    match config.mode {
        WindowMode::Windowed => attrs,
        WindowMode::Borderless => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
    }
}

/// Apply `config` to an existing `window`.
///
/// # Windowed
/// Leaves fullscreen, restores decorations and requests the configured
/// physical size. The result may arrive later as a `WindowEvent::Resized`.
///
/// # Borderless
/// Borderless fullscreen on the current monitor; the logical arena size is
/// unchanged.
pub fn apply_window_settings(window: &Window, config: &WindowConfig) {
    match config.mode {
        WindowMode::Windowed => {
            window.set_fullscreen(None);
            window.set_decorations(true);
            let _ = window.request_inner_size(PhysicalSize::new(
                config.physical_width,
                config.physical_height,
            ));
        }
        WindowMode::Borderless => {
            window.set_fullscreen(Some(Fullscreen::Borderless(None)));
        }
    }
}
