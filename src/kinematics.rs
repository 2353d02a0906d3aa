//! Provides the kinematics of a four wheel mecanum drive.
//!
//! [MecanumKinematics] converts between the velocity of the chassis and the velocities of the
//! four wheels, given the location of each wheel relative to the centre of the robot.
//! [MecanumMixer] turns a normalized (forward, strafe, rotate) stick intent into the open loop
//! outputs for the four wheels.
//!
//! The chassis frame has the x-axis pointing forward, the y-axis pointing to the left and
//! rotations are counter-clockwise positive.

extern crate nalgebra as na;

use na::{Matrix3x4, Matrix4x3, Vector2, Vector3, Vector4};
use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
#[path = "kinematics_tests.rs"]
mod kinematics_tests;

/// The tolerance used when computing the pseudo-inverse of the kinematics matrix.
const PSEUDO_INVERSE_EPSILON: f64 = 1e-9;

/// Describes the velocity of the robot chassis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChassisSpeeds {
    /// The forward velocity in metres per second.
    pub vx: f64,

    /// The sideways velocity in metres per second, left is positive.
    pub vy: f64,

    /// The angular velocity in radians per second, counter-clockwise is positive.
    pub omega: f64,
}

impl ChassisSpeeds {
    /// Creates a new [ChassisSpeeds] instance.
    pub fn new(vx: f64, vy: f64, omega: f64) -> Self {
        Self { vx, vy, omega }
    }
}

/// Stores one value per wheel of a mecanum drive, e.g. wheel velocities or motor outputs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MecanumWheelSpeeds {
    /// The value for the front left wheel.
    pub front_left: f64,

    /// The value for the front right wheel.
    pub front_right: f64,

    /// The value for the rear left wheel.
    pub rear_left: f64,

    /// The value for the rear right wheel.
    pub rear_right: f64,
}

impl MecanumWheelSpeeds {
    /// Scales all values down proportionally so that none of them exceeds the given
    /// magnitude. Values that are already within the limit are returned unchanged.
    ///
    /// ## Parameters
    ///
    /// * 'maximum' - The largest magnitude allowed for any wheel.
    pub fn desaturate(&self, maximum: f64) -> MecanumWheelSpeeds {
        let largest = self
            .as_array()
            .iter()
            .fold(0.0_f64, |acc, value| acc.max(value.abs()));

        if largest > maximum {
            self.scale(maximum / largest)
        } else {
            *self
        }
    }

    /// Returns the values in the order front left, front right, rear left, rear right.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.front_left,
            self.front_right,
            self.rear_left,
            self.rear_right,
        ]
    }

    /// Creates a new [MecanumWheelSpeeds] instance.
    pub fn new(front_left: f64, front_right: f64, rear_left: f64, rear_right: f64) -> Self {
        Self {
            front_left,
            front_right,
            rear_left,
            rear_right,
        }
    }

    /// Returns a copy with every value multiplied by the given factor.
    pub fn scale(&self, factor: f64) -> MecanumWheelSpeeds {
        MecanumWheelSpeeds::new(
            self.front_left * factor,
            self.front_right * factor,
            self.rear_left * factor,
            self.rear_right * factor,
        )
    }
}

/// The location of each wheel relative to the centre of the robot, in metres.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
pub struct WheelLocations {
    /// The (x, y) location of the front left wheel.
    pub front_left: [f64; 2],

    /// The (x, y) location of the front right wheel.
    pub front_right: [f64; 2],

    /// The (x, y) location of the rear left wheel.
    pub rear_left: [f64; 2],

    /// The (x, y) location of the rear right wheel.
    pub rear_right: [f64; 2],
}

impl WheelLocations {
    /// Creates the locations for a rectangular wheel layout.
    ///
    /// ## Parameters
    ///
    /// * 'half_wheelbase' - The distance from the centre to the front axle, in metres.
    /// * 'half_track_width' - The distance from the centre to the left wheels, in metres.
    pub fn rectangular(half_wheelbase: f64, half_track_width: f64) -> Self {
        Self {
            front_left: [half_wheelbase, half_track_width],
            front_right: [half_wheelbase, -half_track_width],
            rear_left: [-half_wheelbase, half_track_width],
            rear_right: [-half_wheelbase, -half_track_width],
        }
    }
}

impl Default for WheelLocations {
    fn default() -> Self {
        Self::rectangular(0.2794, 0.2794)
    }
}

/// Converts between chassis velocities and wheel velocities for a mecanum drive.
#[derive(Clone, Debug)]
pub struct MecanumKinematics {
    /// Maps chassis speeds onto wheel speeds.
    inverse_kinematics: Matrix4x3<f64>,

    /// Maps wheel speeds onto chassis speeds, the pseudo-inverse of the inverse kinematics.
    forward_kinematics: Matrix3x4<f64>,
}

impl MecanumKinematics {
    /// Creates the kinematics for the given wheel layout.
    ///
    /// ## Errors
    ///
    /// * [Error::SingularKinematics] - Returned when the wheel layout cannot be inverted, e.g.
    ///   when all wheels sit on the centre of the robot.
    pub fn new(locations: &WheelLocations) -> Result<Self, Error> {
        let fl = Vector2::from(locations.front_left);
        let fr = Vector2::from(locations.front_right);
        let rl = Vector2::from(locations.rear_left);
        let rr = Vector2::from(locations.rear_right);

        #[rustfmt::skip]
        let inverse_kinematics = Matrix4x3::new(
            1.0, -1.0, -(fl.x + fl.y),
            1.0,  1.0, fr.x - fr.y,
            1.0,  1.0, rl.x - rl.y,
            1.0, -1.0, -(rr.x + rr.y),
        );

        // A pseudo-inverse exists for rank deficient matrices too, but it silently drops
        // the lost degree of freedom.
        if inverse_kinematics.rank(PSEUDO_INVERSE_EPSILON) < 3 {
            return Err(Error::SingularKinematics);
        }

        let forward_kinematics = inverse_kinematics
            .pseudo_inverse(PSEUDO_INVERSE_EPSILON)
            .map_err(|_| Error::SingularKinematics)?;

        Ok(Self {
            inverse_kinematics,
            forward_kinematics,
        })
    }

    /// Returns the chassis velocity that corresponds to the given wheel velocities.
    pub fn to_chassis_speeds(&self, wheel_speeds: &MecanumWheelSpeeds) -> ChassisSpeeds {
        let wheels = Vector4::from(wheel_speeds.as_array());
        let chassis = self.forward_kinematics * wheels;

        ChassisSpeeds::new(chassis.x, chassis.y, chassis.z)
    }

    /// Returns the wheel velocities needed to achieve the given chassis velocity.
    pub fn to_wheel_speeds(&self, chassis_speeds: &ChassisSpeeds) -> MecanumWheelSpeeds {
        let chassis = Vector3::new(chassis_speeds.vx, chassis_speeds.vy, chassis_speeds.omega);
        let wheels = self.inverse_kinematics * chassis;

        MecanumWheelSpeeds::new(wheels.x, wheels.y, wheels.z, wheels.w)
    }
}

/// Mixes a normalized drive intent into open loop wheel outputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MecanumMixer {
    /// Translational inputs with a magnitude at or below this value are treated as zero.
    deadband: f64,

    /// The output that corresponds to a full scale input.
    max_output: f64,
}

impl MecanumMixer {
    /// Applies the deadband to a single input, rescaling the remaining range to [0, 1].
    fn apply_deadband(&self, value: f64) -> f64 {
        if self.deadband <= 0.0 {
            return value;
        }

        if value.abs() > self.deadband {
            (value - self.deadband * value.signum()) / (1.0 - self.deadband)
        } else {
            0.0
        }
    }

    /// Returns the open loop outputs for the given drive intent.
    ///
    /// The (strafe, forward) pair is rotated by `-gyro_angle_in_degrees` before mixing, so
    /// passing the negated robot heading makes the intent relative to the robot frame turned
    /// by the heading. Passing zero gives robot relative driving.
    ///
    /// ## Parameters
    ///
    /// * 'forward' - The forward intent, forward is positive.
    /// * 'strafe' - The sideways intent, right is positive.
    /// * 'rotation' - The rotation intent, clockwise is positive.
    /// * 'gyro_angle_in_degrees' - The angle the translational intent is compensated for.
    pub fn drive_cartesian(
        &self,
        forward: f64,
        strafe: f64,
        rotation: f64,
        gyro_angle_in_degrees: f64,
    ) -> MecanumWheelSpeeds {
        let forward = self.apply_deadband(forward);
        let strafe = self.apply_deadband(strafe);

        let (sin, cos) = (-gyro_angle_in_degrees).to_radians().sin_cos();
        let x = strafe * cos - forward * sin;
        let y = strafe * sin + forward * cos;

        MecanumWheelSpeeds::new(
            x + y + rotation,
            -x + y - rotation,
            -x + y + rotation,
            x + y - rotation,
        )
        .desaturate(1.0)
        .scale(self.max_output)
    }

    /// Creates a new mixer.
    ///
    /// ## Parameters
    ///
    /// * 'deadband' - The magnitude below which translational inputs are ignored.
    /// * 'max_output' - The output that corresponds to a full scale input.
    pub fn new(deadband: f64, max_output: f64) -> Self {
        Self {
            deadband,
            max_output,
        }
    }
}

impl Default for MecanumMixer {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}
