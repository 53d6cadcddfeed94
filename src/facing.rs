//! Facing controller turning the ship towards its direction of travel.
//!
//! [`FacingController`] owns the ship's facing angle and advances it once per
//! frame according to a [`FacingPolicy`]. Policies range from never rotating
//! to snapping straight onto the path tangent.
use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::angle::{heading, lerp_shortest, normalize};
use crate::constants::{BLEND_FACTOR, ROTATION_SPEED};

/// One of four compass-aligned movement buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Moving towards positive y.
    Up,
    /// Moving towards negative y.
    Down,
    /// Moving towards negative x.
    Left,
    /// Moving towards positive x.
    Right,
}

impl Direction {
    /// Buckets a movement vector by its dominant axis.
    ///
    /// Movement is horizontal only when `|dx|` strictly exceeds `|dy|`; ties,
    /// including the zero vector, count as vertical. A zero or non-finite
    /// vector is [`Direction::Up`].
    ///
    /// # Examples
    /// ```
    /// use facing::facing::Direction;
    /// use glam::Vec2;
    /// assert_eq!(Direction::classify(Vec2::new(0.3, -0.1)), Direction::Right);
    /// assert_eq!(Direction::classify(Vec2::new(0.1, -0.3)), Direction::Down);
    /// ```
    #[must_use]
    pub fn classify(movement: Vec2) -> Self {
        if !movement.is_finite() {
            return Self::Up;
        }
        if movement.x.abs() > movement.y.abs() {
            if movement.x > 0.0 {
                Self::Right
            } else {
                Self::Left
            }
        } else if movement.y < 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }

    /// Facing for a ship whose nose points up at angle zero.
    ///
    /// Right is `π/2`, left `-π/2`, up `0` and down `π`.
    #[must_use]
    pub const fn nose_up_angle(self) -> f32 {
        match self {
            Self::Up => 0.0,
            Self::Down => PI,
            Self::Left => -FRAC_PI_2,
            Self::Right => FRAC_PI_2,
        }
    }

    /// Direction of the bucket's axis measured anticlockwise from `+x`.
    ///
    /// Matches [`heading`] of the axis unit vector, so right is `0`, up
    /// `π/2`, left `π` and down `-π/2`.
    #[must_use]
    pub const fn axis_angle(self) -> f32 {
        match self {
            Self::Right => 0.0,
            Self::Up => FRAC_PI_2,
            Self::Left => PI,
            Self::Down => -FRAC_PI_2,
        }
    }
}

/// Strategy used to derive the facing angle each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FacingPolicy {
    /// The ship never rotates.
    None,
    /// Spin clockwise by a fixed amount every frame regardless of motion.
    ContinuousClockwise {
        /// Radians subtracted per frame.
        rotation_speed: f32,
    },
    /// Ease towards the nose-up angle of the movement bucket.
    VelocityTrackingSmoothed {
        /// Fraction of the remaining shortest arc covered per frame.
        blend_factor: f32,
    },
    /// Snap to the axis angle of the movement bucket.
    QuantizedFourDirection,
    /// Snap to the exact tangent direction.
    #[default]
    InstantaneousTangent,
}

impl FacingPolicy {
    /// Clockwise spin at the default [`ROTATION_SPEED`].
    #[must_use]
    pub const fn clockwise() -> Self {
        Self::ContinuousClockwise {
            rotation_speed: ROTATION_SPEED,
        }
    }

    /// Smoothed tracking at the default [`BLEND_FACTOR`].
    #[must_use]
    pub const fn smoothed() -> Self {
        Self::VelocityTrackingSmoothed {
            blend_factor: BLEND_FACTOR,
        }
    }

    /// Short identifier used on the command line and in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ContinuousClockwise { .. } => "continuous_clockwise",
            Self::VelocityTrackingSmoothed { .. } => "velocity_tracking_smoothed",
            Self::QuantizedFourDirection => "quantized_four_direction",
            Self::InstantaneousTangent => "instantaneous_tangent",
        }
    }

    /// Looks up a policy by [`name`](Self::name), using default parameters.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let policy = match name {
            "none" => Self::None,
            "continuous_clockwise" => Self::clockwise(),
            "velocity_tracking_smoothed" => Self::smoothed(),
            "quantized_four_direction" => Self::QuantizedFourDirection,
            "instantaneous_tangent" => Self::InstantaneousTangent,
            _ => return None,
        };
        Some(policy)
    }

    /// Whether the policy reads the path tangent at all.
    #[must_use]
    pub const fn uses_tangent(&self) -> bool {
        matches!(
            self,
            Self::VelocityTrackingSmoothed { .. }
                | Self::QuantizedFourDirection
                | Self::InstantaneousTangent
        )
    }
}

/// Owns the ship's facing angle and advances it once per frame.
///
/// The angle starts at zero and `current` is kept in `(-π, π]` after every
/// update, including while spinning, so precision never runs out on a long
/// session.
#[derive(Debug, Clone, PartialEq)]
pub struct FacingController {
    current: f32,
    target: f32,
    policy: FacingPolicy,
    bucket: Option<Direction>,
}

impl FacingController {
    /// Creates a controller facing angle zero.
    #[must_use]
    pub const fn new(policy: FacingPolicy) -> Self {
        Self {
            current: 0.0,
            target: 0.0,
            policy,
            bucket: None,
        }
    }

    /// Current facing angle in radians.
    #[must_use]
    pub const fn current(&self) -> f32 {
        self.current
    }

    /// Angle the controller is turning towards.
    ///
    /// Equal to [`current`](Self::current) for policies that do not smooth.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Active policy.
    #[must_use]
    pub const fn policy(&self) -> FacingPolicy {
        self.policy
    }

    /// Last movement bucket seen by a quantising policy.
    #[must_use]
    pub const fn bucket(&self) -> Option<Direction> {
        self.bucket
    }

    /// Switches policy, keeping the current angle.
    pub fn set_policy(&mut self, policy: FacingPolicy) {
        if policy != self.policy {
            debug!(
                "facing policy {} -> {}",
                self.policy.name(),
                policy.name()
            );
        }
        self.policy = policy;
        self.bucket = None;
    }

    /// Returns to angle zero without changing policy.
    pub fn reset(&mut self) {
        self.current = 0.0;
        self.target = 0.0;
        self.bucket = None;
    }

    /// Advances the facing by one frame and returns the new angle.
    ///
    /// `tangent` is the direction of travel; policies that ignore motion
    /// ignore it too.
    ///
    /// # Examples
    /// ```
    /// use facing::facing::{FacingController, FacingPolicy};
    /// use glam::Vec2;
    /// let mut controller = FacingController::new(FacingPolicy::InstantaneousTangent);
    /// let angle = controller.update(Vec2::new(0.0, 2.0));
    /// assert!((angle - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    /// ```
    pub fn update(&mut self, tangent: Vec2) -> f32 {
        match self.policy {
            FacingPolicy::None => {
                self.current = 0.0;
                self.target = 0.0;
            }
            FacingPolicy::ContinuousClockwise { rotation_speed } => {
                self.current = normalize(self.current - rotation_speed);
                self.target = self.current;
            }
            FacingPolicy::VelocityTrackingSmoothed { blend_factor } => {
                let bucket = self.observe_bucket(tangent);
                self.target = normalize(bucket.nose_up_angle());
                self.current = lerp_shortest(self.current, self.target, blend_factor);
            }
            FacingPolicy::QuantizedFourDirection => {
                let bucket = self.observe_bucket(tangent);
                self.target = bucket.axis_angle();
                self.current = self.target;
            }
            FacingPolicy::InstantaneousTangent => {
                self.target = heading(tangent);
                self.current = self.target;
            }
        }
        self.current
    }

    fn observe_bucket(&mut self, tangent: Vec2) -> Direction {
        let bucket = Direction::classify(tangent);
        if self.bucket != Some(bucket) {
            debug!("movement bucket {:?} -> {bucket:?}", self.bucket);
            self.bucket = Some(bucket);
        }
        bucket
    }
}

impl Default for FacingController {
    fn default() -> Self {
        Self::new(FacingPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;
    use std::f32::consts::TAU;

    #[rstest]
    #[case::right(Vec2::new(1.0, 0.2), Direction::Right)]
    #[case::left(Vec2::new(-1.0, 0.2), Direction::Left)]
    #[case::up(Vec2::new(0.2, 1.0), Direction::Up)]
    #[case::down(Vec2::new(0.2, -1.0), Direction::Down)]
    #[case::tie_is_vertical(Vec2::new(1.0, -1.0), Direction::Down)]
    #[case::zero_is_up(Vec2::ZERO, Direction::Up)]
    #[case::nan_is_up(Vec2::new(f32::NAN, -1.0), Direction::Up)]
    fn classify_buckets(#[case] movement: Vec2, #[case] expected: Direction) {
        assert_eq!(Direction::classify(movement), expected);
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    fn canonical_angles_are_normalised(#[case] direction: Direction) {
        assert_eq!(normalize(direction.nose_up_angle()), direction.nose_up_angle());
        assert_eq!(normalize(direction.axis_angle()), direction.axis_angle());
    }

    #[test]
    fn axis_angle_matches_heading() {
        for (direction, axis) in [
            (Direction::Right, Vec2::X),
            (Direction::Up, Vec2::Y),
            (Direction::Left, Vec2::NEG_X),
            (Direction::Down, Vec2::NEG_Y),
        ] {
            assert_relative_eq!(direction.axis_angle(), heading(axis), epsilon = 1e-6);
        }
    }

    #[test]
    fn none_policy_never_rotates() {
        let mut controller = FacingController::new(FacingPolicy::None);
        for tangent in [Vec2::X, Vec2::NEG_Y, Vec2::new(-3.0, 2.0)] {
            assert_eq!(controller.update(tangent), 0.0);
        }
    }

    #[test]
    fn clockwise_wraps_into_range() {
        let mut controller = FacingController::new(FacingPolicy::ContinuousClockwise {
            rotation_speed: 0.5,
        });
        for _ in 0..10 {
            controller.update(Vec2::X);
        }
        assert_relative_eq!(controller.current(), -5.0 + TAU, epsilon = 1e-5);
    }

    #[test]
    fn clockwise_keeps_turning_on_long_sessions() {
        let mut controller = FacingController::new(FacingPolicy::clockwise());
        for _ in 0..1_000_000 {
            let angle = controller.update(Vec2::ZERO);
            assert!(angle > -PI && angle <= PI, "{angle} escaped (-π, π]");
        }
        let before = controller.current();
        let after = controller.update(Vec2::ZERO);
        let turned = crate::angle::shortest_delta(before, after);
        assert_relative_eq!(turned, -ROTATION_SPEED, epsilon = 1e-5);
    }

    #[test]
    fn smoothed_turns_a_fraction_of_the_arc() {
        let mut controller = FacingController::new(FacingPolicy::VelocityTrackingSmoothed {
            blend_factor: 0.5,
        });
        controller.update(Vec2::X);
        assert_relative_eq!(controller.target(), FRAC_PI_2);
        assert_relative_eq!(controller.current(), FRAC_PI_2 * 0.5, epsilon = 1e-6);
        controller.update(Vec2::X);
        assert_relative_eq!(controller.current(), FRAC_PI_2 * 0.75, epsilon = 1e-6);
    }

    #[test]
    fn smoothed_converges_on_target() {
        let mut controller = FacingController::new(FacingPolicy::smoothed());
        for _ in 0..2000 {
            controller.update(Vec2::NEG_X);
        }
        assert_relative_eq!(controller.current(), -FRAC_PI_2, epsilon = 1e-4);
    }

    #[test]
    fn smoothed_turns_through_the_wrap_boundary() {
        let mut controller = FacingController::new(FacingPolicy::VelocityTrackingSmoothed {
            blend_factor: 1.0,
        });
        // Face down (π), then head left (-π/2): the short way is through +π.
        controller.update(Vec2::NEG_Y);
        assert_relative_eq!(controller.current(), PI, epsilon = 1e-6);
        controller.set_policy(FacingPolicy::VelocityTrackingSmoothed { blend_factor: 0.5 });
        let next = controller.update(Vec2::NEG_X);
        assert_relative_eq!(next, -0.75 * PI, epsilon = 1e-5);
    }

    #[test]
    fn quantized_snaps_without_lag() {
        let mut controller = FacingController::new(FacingPolicy::QuantizedFourDirection);
        assert_eq!(controller.update(Vec2::new(0.0, -1.0)), -FRAC_PI_2);
        assert_eq!(controller.bucket(), Some(Direction::Down));
        assert_eq!(controller.update(Vec2::new(-2.0, 0.5)), PI);
        assert_eq!(controller.bucket(), Some(Direction::Left));
    }

    #[test]
    fn tangent_policy_follows_atan2() {
        let mut controller = FacingController::new(FacingPolicy::InstantaneousTangent);
        let angle = controller.update(Vec2::new(-1.0, -1.0));
        assert_relative_eq!(angle, -0.75 * PI, epsilon = 1e-6);
        assert_eq!(controller.update(Vec2::ZERO), 0.0);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut controller = FacingController::new(FacingPolicy::InstantaneousTangent);
        controller.update(Vec2::NEG_X);
        controller.reset();
        assert_eq!(controller.current(), 0.0);
        assert_eq!(controller.target(), 0.0);
        assert_eq!(controller.bucket(), None);
    }

    #[rstest]
    #[case(FacingPolicy::None)]
    #[case(FacingPolicy::clockwise())]
    #[case(FacingPolicy::smoothed())]
    #[case(FacingPolicy::QuantizedFourDirection)]
    #[case(FacingPolicy::InstantaneousTangent)]
    fn names_round_trip(#[case] policy: FacingPolicy) {
        assert_eq!(FacingPolicy::from_name(policy.name()), Some(policy));
    }

    #[test]
    fn unknown_name_is_rejected() {
        assert_eq!(FacingPolicy::from_name("spin"), None);
    }

    #[test]
    fn policy_deserialises_from_tagged_json() {
        let policy: FacingPolicy = serde_json::from_str(
            r#"{"kind": "velocity_tracking_smoothed", "blend_factor": 0.1}"#,
        )
        .expect("valid policy json");
        assert_eq!(
            policy,
            FacingPolicy::VelocityTrackingSmoothed { blend_factor: 0.1 }
        );
    }
}
