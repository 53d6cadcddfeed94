//! Headless Bevy apps hosting the ship plugin.
use bevy::prelude::*;
use facing::{SceneConfig, Ship, ShipPlugin};

/// Builder for test `App` instances running [`ShipPlugin`].
pub struct ShipTestAppBuilder {
    app: App,
}

impl ShipTestAppBuilder {
    /// Create a new test app with `MinimalPlugins` and a ship using `config`.
    #[must_use]
    pub fn new(config: SceneConfig) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_plugins(ShipPlugin::new(config));
        Self { app }
    }

    /// Run `frames` update cycles.
    #[must_use]
    pub fn run_frames(mut self, frames: usize) -> Self {
        for _ in 0..frames {
            self.app.update();
        }
        self
    }

    /// Build and return the configured `App`.
    #[must_use]
    pub fn build(self) -> App {
        self.app
    }
}

/// Returns a copy of the only ship and its transform.
///
/// # Panics
/// Panics unless exactly one ship exists.
pub fn single_ship(app: &mut App) -> (Ship, Transform) {
    let mut query = app.world_mut().query::<(&Ship, &Transform)>();
    let (ship, transform) = query
        .single(app.world())
        .unwrap_or_else(|err| panic!("expected exactly one ship: {err}"));
    (ship.clone(), *transform)
}
