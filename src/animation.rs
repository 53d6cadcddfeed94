//! Per-frame animation of the orbiting ship.
//!
//! [`ShipAnimator`] ties the pieces together: the clock advances, the path is
//! sampled, the facing controller turns and a fresh model matrix is composed.
//! It is driven once per rendered frame by whatever owns the window.
use glam::{Mat4, Vec2};
use log::debug;

use crate::config::SceneConfig;
use crate::facing::{FacingController, FacingPolicy};
use crate::path::{CirclePath, ParametricPath};
use crate::transform::compose;

/// Accumulates the path time parameter by a fixed step per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    /// Current time parameter.
    pub time: f32,
    /// Amount added on every [`advance`](Self::advance).
    pub step: f32,
}

impl FrameClock {
    /// Starts a clock at zero.
    #[must_use]
    pub const fn new(step: f32) -> Self {
        Self { time: 0.0, step }
    }

    /// Moves forward one frame and returns the new time.
    pub fn advance(&mut self) -> f32 {
        self.time += self.step;
        self.time
    }
}

/// Everything computed for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutput {
    /// Time parameter the frame was evaluated at.
    pub time: f32,
    /// Ship position on the path.
    pub position: Vec2,
    /// Forward-difference direction of travel.
    ///
    /// Zero when the active policy ignores motion.
    pub tangent: Vec2,
    /// Facing angle after the update.
    pub angle: f32,
    /// Uniform scale baked into `model`.
    pub scale: f32,
    /// Model matrix handed to the renderer.
    pub model: Mat4,
}

/// Drives one ship around its path.
#[derive(Debug, Clone)]
pub struct ShipAnimator {
    path: CirclePath,
    controller: FacingController,
    clock: FrameClock,
    scale: f32,
    tangent_epsilon: f32,
}

impl ShipAnimator {
    /// Builds an animator from scene settings.
    #[must_use]
    pub fn new(config: &SceneConfig) -> Self {
        debug!(
            "ship animator: radius {}, scale {}, step {}, policy {}",
            config.radius,
            config.scale,
            config.time_step,
            config.policy.name()
        );
        Self {
            path: CirclePath::new(config.radius).with_phase(config.phase),
            controller: FacingController::new(config.policy),
            clock: FrameClock::new(config.time_step),
            scale: config.scale,
            tangent_epsilon: config.tangent_epsilon,
        }
    }

    /// The facing controller.
    #[must_use]
    pub const fn controller(&self) -> &FacingController {
        &self.controller
    }

    /// The frame clock.
    #[must_use]
    pub const fn clock(&self) -> FrameClock {
        self.clock
    }

    /// Switches facing policy mid-flight.
    pub fn set_policy(&mut self, policy: FacingPolicy) {
        self.controller.set_policy(policy);
    }

    /// Advances one frame.
    ///
    /// The clock moves first, so the first frame is evaluated at one step
    /// past zero.
    pub fn tick(&mut self) -> FrameOutput {
        let time = self.clock.advance();
        let position = self.path.position(time);
        let tangent = self.tangent_at(time);
        let angle = self.controller.update(tangent);
        FrameOutput {
            time,
            position,
            tangent,
            angle,
            scale: self.scale,
            model: compose(position, angle, self.scale),
        }
    }

    /// Evaluates the frame at `time` with the current facing, leaving all
    /// state untouched.
    #[must_use]
    pub fn sample(&self, time: f32) -> FrameOutput {
        let position = self.path.position(time);
        let angle = self.controller.current();
        FrameOutput {
            time,
            position,
            tangent: self.tangent_at(time),
            angle,
            scale: self.scale,
            model: compose(position, angle, self.scale),
        }
    }

    fn tangent_at(&self, time: f32) -> Vec2 {
        if self.controller.policy().uses_tangent() {
            self.path.tangent(time, self.tangent_epsilon)
        } else {
            Vec2::ZERO
        }
    }
}

impl Default for ShipAnimator {
    fn default() -> Self {
        Self::new(&SceneConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::Vec4;

    fn config(policy: FacingPolicy) -> SceneConfig {
        SceneConfig {
            radius: 1.0,
            scale: 1.0,
            policy,
            ..SceneConfig::default()
        }
    }

    #[test]
    fn clock_accumulates_steps() {
        let mut clock = FrameClock::new(0.25);
        clock.advance();
        assert_relative_eq!(clock.advance(), 0.5);
    }

    #[test]
    fn tick_moves_along_the_circle() {
        let mut animator = ShipAnimator::new(&config(FacingPolicy::None));
        let frame = animator.tick();
        assert_relative_eq!(frame.time, 0.01);
        assert_relative_eq!(frame.position.x, 0.01_f32.cos(), epsilon = 1e-6);
        assert_relative_eq!(frame.position.y, 0.01_f32.sin(), epsilon = 1e-6);
        assert_eq!(frame.tangent, Vec2::ZERO);
        assert_eq!(frame.angle, 0.0);
    }

    #[test]
    fn model_places_ship_on_path() {
        let mut animator = ShipAnimator::new(&config(FacingPolicy::InstantaneousTangent));
        for _ in 0..37 {
            let frame = animator.tick();
            let origin = frame.model * Vec4::W;
            assert_relative_eq!(origin.x, frame.position.x, epsilon = 1e-5);
            assert_relative_eq!(origin.y, frame.position.y, epsilon = 1e-5);
        }
    }

    #[test]
    fn tangent_facing_leads_position_by_quarter_turn() {
        let mut animator = ShipAnimator::new(&config(FacingPolicy::InstantaneousTangent));
        let frame = animator.tick();
        let expected = crate::angle::normalize(frame.time + std::f32::consts::FRAC_PI_2);
        // Forward difference looks half a step ahead.
        assert_relative_eq!(frame.angle, expected, epsilon = 0.01);
    }

    #[test]
    fn sample_does_not_advance() {
        let animator = ShipAnimator::new(&config(FacingPolicy::clockwise()));
        let before = animator.clock();
        let frame = animator.sample(1.0);
        assert_eq!(animator.clock(), before);
        assert_eq!(frame.angle, 0.0);
    }

    #[test]
    fn policy_switch_keeps_angle() {
        let mut animator = ShipAnimator::new(&config(FacingPolicy::clockwise()));
        animator.tick();
        let spun = animator.controller().current();
        animator.set_policy(FacingPolicy::smoothed());
        assert_eq!(animator.controller().current(), spun);
    }
}
