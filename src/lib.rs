#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate animating a ship around a circular path.
//! The ship turns to face its direction of travel under one of several
//! facing policies, and each frame yields a model matrix for the renderer.
pub mod angle;
pub mod animation;
pub mod config;
pub mod constants;
pub mod facing;
pub mod logging;
pub mod path;
pub mod scene;
pub mod transform;
pub use constants::*;

// Re-export commonly used items
pub use angle::{heading, lerp_shortest, normalize, shortest_delta};
pub use animation::{FrameClock, FrameOutput, ShipAnimator};
pub use config::{ConfigError, SceneConfig};
pub use facing::{Direction, FacingController, FacingPolicy};
pub use logging::init as init_logging;
pub use path::{CirclePath, ParametricPath};
pub use scene::{
    animate_ship_system, ship_transform, spawn_ship_system, Ship, ShipPlugin, ShipSettings,
};
pub use transform::compose;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use facing::prelude::*;
    //! ```

    pub use crate::compose;
    pub use crate::FacingController;
    pub use crate::FacingPolicy;
    pub use crate::ParametricPath;
    pub use crate::SceneConfig;
    pub use crate::ShipAnimator;
    pub use crate::ShipPlugin;
}
