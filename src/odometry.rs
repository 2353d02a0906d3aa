//! Provides the pose estimate of a mecanum drive from wheel velocities and heading.
//!
//! Each update converts the wheel velocities into a chassis velocity, integrates it over the
//! elapsed time along a constant curvature arc, and then replaces the heading of the result
//! with the heading reported by the sensor, which is far more accurate than the heading
//! derived from the wheels.

use tracing::trace;

use crate::{
    geometry::{Pose2d, Twist2d},
    kinematics::{MecanumKinematics, MecanumWheelSpeeds},
};

#[cfg(test)]
#[path = "odometry_tests.rs"]
mod odometry_tests;

/// Tracks the pose of a mecanum drive.
#[derive(Clone, Debug)]
pub struct MecanumOdometry {
    kinematics: MecanumKinematics,

    pose: Pose2d,

    /// The difference between the heading of the pose and the sensor heading, in radians.
    gyro_offset: f64,

    /// The heading, in radians, that was used for the previous update.
    previous_angle: f64,
}

impl MecanumOdometry {
    /// Creates a new odometry instance.
    ///
    /// ## Parameters
    ///
    /// * 'kinematics' - The kinematics of the drive.
    /// * 'gyro_angle' - The current sensor heading in radians.
    /// * 'initial_pose' - The pose the robot starts at.
    pub fn new(kinematics: MecanumKinematics, gyro_angle: f64, initial_pose: Pose2d) -> Self {
        Self {
            kinematics,
            pose: initial_pose,
            gyro_offset: initial_pose.heading() - gyro_angle,
            previous_angle: initial_pose.heading(),
        }
    }

    /// Returns the kinematics used to convert wheel velocities.
    pub fn kinematics(&self) -> &MecanumKinematics {
        &self.kinematics
    }

    /// Returns the current pose estimate.
    pub fn pose(&self) -> Pose2d {
        self.pose
    }

    /// Resets the estimate to the given pose.
    ///
    /// ## Parameters
    ///
    /// * 'pose' - The pose the robot is known to be at.
    /// * 'gyro_angle' - The current sensor heading in radians.
    pub fn reset_position(&mut self, pose: Pose2d, gyro_angle: f64) {
        self.pose = pose;
        self.previous_angle = pose.heading();
        self.gyro_offset = pose.heading() - gyro_angle;
    }

    /// Integrates the wheel velocities over the elapsed time and returns the new pose.
    ///
    /// ## Parameters
    ///
    /// * 'gyro_angle' - The current sensor heading in radians.
    /// * 'wheel_speeds' - The current wheel velocities in metres per second.
    /// * 'elapsed_in_seconds' - The time since the previous update.
    pub fn update(
        &mut self,
        gyro_angle: f64,
        wheel_speeds: &MecanumWheelSpeeds,
        elapsed_in_seconds: f64,
    ) -> Pose2d {
        let angle = gyro_angle + self.gyro_offset;

        let chassis = self.kinematics.to_chassis_speeds(wheel_speeds);
        let twist = Twist2d::new(
            chassis.vx * elapsed_in_seconds,
            chassis.vy * elapsed_in_seconds,
            angle - self.previous_angle,
        );

        self.previous_angle = angle;
        self.pose = self.pose.exp(&twist).with_heading(angle);

        trace!(
            x = self.pose.x(),
            y = self.pose.y(),
            heading = self.pose.heading(),
            "Odometry updated"
        );

        self.pose
    }
}
