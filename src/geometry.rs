//! Defines the planar geometry types used by the odometry and the vision adapter.
//!
//! Both [Pose2d] and [Transform2d] are thin wrappers around a [nalgebra::Isometry2], the
//! first one describing where the robot is on the field, the second one describing how to
//! get from one frame (e.g. the camera) to another (e.g. a target).

extern crate nalgebra as na;

use na::{Isometry2, UnitComplex, Vector2};

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod geometry_tests;

/// Below this rotation the twist exponential uses the Taylor expansion.
const SMALL_ANGLE_THRESHOLD: f64 = 1e-9;

/// Describes the position and heading of the robot on the field.
///
/// Positions are in metres and the heading is counter-clockwise positive in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose2d {
    isometry: Isometry2<f64>,
}

impl Pose2d {
    /// Returns the pose that results from moving along the given twist, starting at the
    /// current pose. The twist is expressed in the robot frame and is assumed to follow a
    /// constant curvature arc.
    ///
    /// ## Parameters
    ///
    /// * 'twist' - The change in position and heading, relative to the current pose.
    pub fn exp(&self, twist: &Twist2d) -> Pose2d {
        let (sin_theta, cos_theta) = twist.dtheta.sin_cos();

        let (s, c) = if twist.dtheta.abs() < SMALL_ANGLE_THRESHOLD {
            (
                1.0 - twist.dtheta * twist.dtheta / 6.0,
                0.5 * twist.dtheta,
            )
        } else {
            (sin_theta / twist.dtheta, (1.0 - cos_theta) / twist.dtheta)
        };

        let transform = Transform2d::new(
            twist.dx * s - twist.dy * c,
            twist.dx * c + twist.dy * s,
            twist.dtheta,
        );

        self.transform_by(&transform)
    }

    /// Returns the heading of the pose in radians, in the range (-PI, PI].
    pub fn heading(&self) -> f64 {
        self.isometry.rotation.angle()
    }

    /// Returns the underlying isometry.
    pub fn isometry(&self) -> &Isometry2<f64> {
        &self.isometry
    }

    /// Creates a new pose.
    ///
    /// ## Parameters
    ///
    /// * 'x' - The x position in metres.
    /// * 'y' - The y position in metres.
    /// * 'heading' - The heading in radians.
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self {
            isometry: Isometry2::new(Vector2::new(x, y), heading),
        }
    }

    /// Returns the pose at the field origin, facing along the x-axis.
    pub fn origin() -> Self {
        Self {
            isometry: Isometry2::identity(),
        }
    }

    /// Returns the pose obtained by applying the transform in the frame of the current pose.
    pub fn transform_by(&self, transform: &Transform2d) -> Pose2d {
        Pose2d {
            isometry: self.isometry * transform.isometry,
        }
    }

    /// Returns a copy of the pose with the heading replaced.
    pub fn with_heading(&self, heading: f64) -> Pose2d {
        Pose2d {
            isometry: Isometry2::from_parts(self.isometry.translation, UnitComplex::new(heading)),
        }
    }

    /// Returns the x position in metres.
    pub fn x(&self) -> f64 {
        self.isometry.translation.vector.x
    }

    /// Returns the y position in metres.
    pub fn y(&self) -> f64 {
        self.isometry.translation.vector.y
    }
}

impl Default for Pose2d {
    fn default() -> Self {
        Self::origin()
    }
}

/// Describes the translation and rotation from one planar frame to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform2d {
    isometry: Isometry2<f64>,
}

impl Transform2d {
    /// Returns the underlying isometry.
    pub fn isometry(&self) -> &Isometry2<f64> {
        &self.isometry
    }

    /// Creates a new transform.
    ///
    /// ## Parameters
    ///
    /// * 'x' - The translation along the x-axis in metres.
    /// * 'y' - The translation along the y-axis in metres.
    /// * 'rotation' - The rotation in radians.
    pub fn new(x: f64, y: f64, rotation: f64) -> Self {
        Self {
            isometry: Isometry2::new(Vector2::new(x, y), rotation),
        }
    }

    /// Returns the rotation in radians, in the range (-PI, PI].
    pub fn rotation(&self) -> f64 {
        self.isometry.rotation.angle()
    }

    /// Returns the translation along the x-axis in metres.
    pub fn x(&self) -> f64 {
        self.isometry.translation.vector.x
    }

    /// Returns the translation along the y-axis in metres.
    pub fn y(&self) -> f64 {
        self.isometry.translation.vector.y
    }
}

/// Describes a change in pose along an arc, relative to the robot frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Twist2d {
    /// The change in the x direction in metres.
    pub dx: f64,

    /// The change in the y direction in metres.
    pub dy: f64,

    /// The change in heading in radians.
    pub dtheta: f64,
}

impl Twist2d {
    /// Creates a new twist.
    pub fn new(dx: f64, dy: f64, dtheta: f64) -> Self {
        Self { dx, dy, dtheta }
    }
}
