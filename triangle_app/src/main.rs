//! Triangle demo application
//!
//! Opens a window, draws one triangle every frame and exits when the window is
//! closed or Escape is pressed. Window settings are read from
//! `triangle_app.toml` in the working directory when present.

use render_core::foundation::logging;
use render_core::prelude::*;
use thiserror::Error;

const CONFIG_PATH: &str = "triangle_app.toml";

const TRIANGLE: [f64; 9] = [-0.6, -0.4, 0.0, 0.6, -0.4, 0.0, 0.0, 0.6, 0.0];

/// Application errors
#[derive(Error, Debug)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// World holding the demo triangle
fn build_world() -> World {
    let mut object_factories = ObjectFactory::slot();
    let mut world = World::new();
    world.add_object(object_factories.get_instance().create_triangle(&TRIANGLE));
    object_factories.delete_instance();
    world
}

/// Attach the world and the Escape handler to a freshly created window
fn prepare<'w>(window: &mut Window<'w>, world: &'w World) {
    window.set_keyboard_delegate(Box::new(CloseOnKey::default()));
    window.set_world(Some(world));
}

fn main() -> Result<(), AppError> {
    logging::init();
    log::info!("Starting triangle demo");

    let config = WindowConfig::load_or_default(CONFIG_PATH)?;
    let world = build_world();

    let mut window_factories = window_factory_slot();
    let mut window = window_factories
        .get_instance()
        .create_window_from_config_or_die(&config);
    window_factories.delete_instance();

    prepare(&mut window, &world);
    let frames = window.run_until_closed();

    drop(window);
    drop(world);
    log::info!("Triangle demo finished after {} frames", frames);
    Ok(())
}
