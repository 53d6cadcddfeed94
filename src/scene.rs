//! Bevy plugin animating the ship every frame.
//!
//! `ShipPlugin` spawns a single [`Ship`] and rewrites its `Transform` from the
//! animator's frame output on every `Update`. Drawing belongs to whichever
//! render plugins the host app installs; with the `render` feature the ship
//! is given a sprite and a camera framing the orbit.

use bevy::prelude::*;
use log::info;

use crate::animation::{FrameOutput, ShipAnimator};
use crate::config::SceneConfig;

/// Scene settings the ship is spawned with.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Default, Deref)]
pub struct ShipSettings(pub SceneConfig);

/// The orbiting ship and its animation state.
#[derive(Component, Debug, Clone)]
pub struct Ship {
    /// Drives position and facing.
    pub animator: ShipAnimator,
    /// Output of the most recent tick, if any.
    pub last_frame: Option<FrameOutput>,
}

impl Ship {
    /// Wraps an animator that has not ticked yet.
    #[must_use]
    pub const fn new(animator: ShipAnimator) -> Self {
        Self {
            animator,
            last_frame: None,
        }
    }
}

/// Builds the ship's `Transform` from its translation, rotation and scale.
///
/// Equivalent to `frame.model`, but assembled from parts rather than
/// decomposed from the matrix, so a zero scale still yields a finite
/// rotation.
#[must_use]
pub fn ship_transform(frame: &FrameOutput) -> Transform {
    Transform {
        translation: frame.position.extend(0.0),
        rotation: Quat::from_rotation_z(frame.angle),
        scale: Vec3::new(frame.scale, frame.scale, 1.0),
    }
}

/// Spawns the ship described by [`ShipSettings`].
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn spawn_ship_system(mut commands: Commands, settings: Res<ShipSettings>) {
    let animator = ShipAnimator::new(&settings);
    info!("spawning ship with {} facing", settings.policy.name());
    let frame = animator.sample(animator.clock().time);
    let ship = (
        Ship::new(animator),
        ship_transform(&frame),
        Name::new("Ship"),
    );
    #[cfg(feature = "render")]
    commands.spawn((ship, render::ship_sprite()));
    #[cfg(not(feature = "render"))]
    commands.spawn(ship);
}

/// Advances every ship by one frame and writes its transform.
pub fn animate_ship_system(mut ships: Query<(&mut Ship, &mut Transform)>) {
    for (mut ship, mut transform) in &mut ships {
        let frame = ship.animator.tick();
        *transform = ship_transform(&frame);
        ship.last_frame = Some(frame);
    }
}

/// Plugin owning the ship entity and its per-frame animation.
///
/// # Examples
///
/// ```ignore
/// use bevy::prelude::*;
/// use facing::{FacingPolicy, SceneConfig, ShipPlugin};
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(ShipPlugin::new(SceneConfig {
///         policy: FacingPolicy::smoothed(),
///         ..SceneConfig::default()
///     }))
///     .run();
/// ```
#[derive(Debug, Default)]
pub struct ShipPlugin {
    /// Settings inserted as [`ShipSettings`].
    pub config: SceneConfig,
}

impl ShipPlugin {
    /// Plugin spawning a ship with `config`.
    #[must_use]
    pub const fn new(config: SceneConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ShipPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ShipSettings(self.config));
        app.add_systems(Startup, spawn_ship_system);
        app.add_systems(Update, animate_ship_system);
        #[cfg(feature = "render")]
        app.add_systems(Startup, render::camera_setup);
    }
}

#[cfg(feature = "render")]
mod render {
    use bevy::prelude::*;

    /// World units shown per pixel; the orbit lives in `[-1, 1]`.
    const PIXELS_PER_UNIT: f32 = 400.0;
    /// Side of the untransformed ship quad, matching `[-1, 1]` geometry.
    const SHIP_SIZE: f32 = 2.0;

    pub(super) fn ship_sprite() -> Sprite {
        Sprite::from_color(Color::srgb(1.0, 0.0, 1.0), Vec2::splat(SHIP_SIZE))
    }

    pub(super) fn camera_setup(mut commands: Commands, cameras: Query<&Camera2d>) {
        if !cameras.is_empty() {
            return;
        }
        commands.spawn((
            Camera2d,
            Projection::Orthographic(OrthographicProjection {
                scale: 1.0 / PIXELS_PER_UNIT,
                ..OrthographicProjection::default_2d()
            }),
            Name::new("ShipCamera"),
        ));
    }
}
