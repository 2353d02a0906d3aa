//! Defines the drive subsystem of a mecanum robot.
//!
//! The [DriveSystem] turns a (forward, strafe, rotate) intent into open loop outputs for the
//! four wheels, honouring field oriented driving and slow mode, and keeps a pose estimate up
//! to date from the wheel encoders and the heading sensor.

use std::sync::{Arc, Mutex};

use tracing::{debug, info};

use crate::{
    config::{DriveConfig, TrajectoryConfig},
    control::profiled_pid::ProfiledPidController,
    geometry::Pose2d,
    hardware::{
        actuator_interface::{WheelActuator, WheelPosition},
        sensor_interface::HeadingSensor,
    },
    kinematics::{MecanumKinematics, MecanumMixer, MecanumWheelSpeeds},
    odometry::MecanumOdometry,
    telemetry::{Sendable, TelemetryBuilder},
    Error,
};

use super::Subsystem;

#[cfg(test)]
#[path = "drive_system_tests.rs"]
mod drive_system_tests;

/// The heading range used when the heading controller treats its input as continuous.
const CONTINUOUS_HEADING_RANGE: (f64, f64) = (-180.0, 180.0);

/// Boundary between turning clockwise and counter-clockwise when turning to a heading.
const HALF_TURN_IN_DEGREES: f64 = 180.0;

/// The speed modes of the drive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpeedMode {
    /// The normal speed.
    Nominal,
    /// The reduced speed used for precise manoeuvring.
    Slow,
}

/// The four wheel actuators of a mecanum drive.
#[derive(Debug)]
pub struct MecanumWheels<A: WheelActuator> {
    /// The front left wheel.
    pub front_left: A,
    /// The rear left wheel.
    pub rear_left: A,
    /// The front right wheel.
    pub front_right: A,
    /// The rear right wheel.
    pub rear_right: A,
}

impl<A: WheelActuator> MecanumWheels<A> {
    /// Returns the actuator at the given position.
    pub fn get(&self, position: WheelPosition) -> &A {
        match position {
            WheelPosition::FrontLeft => &self.front_left,
            WheelPosition::RearLeft => &self.rear_left,
            WheelPosition::FrontRight => &self.front_right,
            WheelPosition::RearRight => &self.rear_right,
        }
    }

    /// Returns the actuator at the given position.
    pub fn get_mut(&mut self, position: WheelPosition) -> &mut A {
        match position {
            WheelPosition::FrontLeft => &mut self.front_left,
            WheelPosition::RearLeft => &mut self.rear_left,
            WheelPosition::FrontRight => &mut self.front_right,
            WheelPosition::RearRight => &mut self.rear_right,
        }
    }

    /// Creates a new set of wheels, in wiring order.
    pub fn new(front_left: A, rear_left: A, front_right: A, rear_right: A) -> Self {
        Self {
            front_left,
            rear_left,
            front_right,
            rear_right,
        }
    }

    /// Returns the current encoder velocity of every wheel.
    fn velocities(&self) -> MecanumWheelSpeeds {
        MecanumWheelSpeeds::new(
            self.front_left.velocity(),
            self.front_right.velocity(),
            self.rear_left.velocity(),
            self.rear_right.velocity(),
        )
    }
}

/// A cloneable handle that reads the latest pose estimate from any thread.
///
/// Every read returns a complete pose; a reader never sees the position of one update
/// combined with the heading of another.
#[derive(Clone, Debug)]
pub struct PoseReader {
    pose: Arc<Mutex<Pose2d>>,
}

impl PoseReader {
    /// Returns the latest pose estimate.
    #[cfg_attr(test, mutants::skip)] // Cannot easily check mutations as this is a threaded lock situation
    pub fn pose(&self) -> Pose2d {
        *self.pose.lock().unwrap_or_else(|err| err.into_inner())
    }
}

/// The drive subsystem of a mecanum robot.
pub struct DriveSystem<A: WheelActuator, H: HeadingSensor> {
    wheels: MecanumWheels<A>,
    heading_sensor: H,

    mixer: MecanumMixer,
    odometry: MecanumOdometry,

    /// The pose estimate, shared with the [PoseReader]s. Only written by the periodic update.
    pose: Arc<Mutex<Pose2d>>,

    heading_controller: ProfiledPidController,

    field_oriented: bool,
    speed_mode: SpeedMode,

    config: DriveConfig,
}

impl<A: WheelActuator, H: HeadingSensor> DriveSystem<A, H> {
    /// Returns the kinematics of the drive, e.g. for trajectory following.
    pub fn kinematics(&self) -> &MecanumKinematics {
        self.odometry.kinematics()
    }

    /// Drives with the given intent, scaled by the active speed multiplier.
    ///
    /// In field oriented mode the translational intent is compensated for the heading of
    /// the robot. Inputs are not checked, NaN or out of range values are passed to the mixer
    /// as they are.
    ///
    /// ## Parameters
    ///
    /// * 'forward' - The forward intent in [-1, 1].
    /// * 'strafe' - The sideways intent in [-1, 1], right is positive.
    /// * 'rotate' - The rotation intent in [-1, 1], clockwise is positive.
    pub fn drive(&mut self, forward: f64, strafe: f64, rotate: f64) {
        let multiplier = self.speed_multiplier();
        let forward = forward * multiplier;
        let strafe = strafe * multiplier;
        let rotate = rotate * multiplier;

        let gyro_angle = if self.field_oriented {
            -self.heading_degrees()
        } else {
            0.0
        };

        let outputs = self
            .mixer
            .drive_cartesian(forward, strafe, rotate, gyro_angle);

        self.wheels.front_left.set_output(outputs.front_left);
        self.wheels.rear_left.set_output(outputs.rear_left);
        self.wheels.front_right.set_output(outputs.front_right);
        self.wheels.rear_right.set_output(outputs.rear_right);
    }

    /// Drives at half the translational intent while turning to correct the heading by the
    /// given offset, e.g. the horizontal offset to a vision target.
    ///
    /// ## Parameters
    ///
    /// * 'forward' - The forward intent in [-1, 1].
    /// * 'strafe' - The sideways intent in [-1, 1], right is positive.
    /// * 'target_heading_offset' - The angle, in degrees, between the current heading and
    ///   the desired heading.
    pub fn drive_with_heading_correction(
        &mut self,
        forward: f64,
        strafe: f64,
        target_heading_offset: f64,
    ) {
        let heading = self.heading_degrees();
        let rotation = self
            .heading_controller
            .calculate(heading, heading - target_heading_offset);

        self.drive(forward / 2.0, strafe / 2.0, rotation);
    }

    /// Returns the raw heading reported by the heading sensor, in degrees.
    pub fn heading_degrees(&self) -> f64 {
        self.heading_sensor.angle_degrees()
    }

    /// Returns the heading sensor.
    pub fn heading_sensor(&self) -> &H {
        &self.heading_sensor
    }

    /// Returns the heading sensor, e.g. to script a simulated sensor.
    pub fn heading_sensor_mut(&mut self) -> &mut H {
        &mut self.heading_sensor
    }

    /// Returns a value indicating whether the drive is in field oriented mode.
    pub fn is_field_oriented(&self) -> bool {
        self.field_oriented
    }

    /// Creates a new drive subsystem.
    ///
    /// Applies the motor configuration to every wheel and seeds the pose estimate at the
    /// field origin with the current heading.
    ///
    /// ## Parameters
    ///
    /// * 'wheels' - The four wheel actuators.
    /// * 'heading_sensor' - The sensor that reports the heading of the robot.
    /// * 'config' - The drive configuration.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidConfiguration] - Returned when the configuration is out of range.
    /// * [Error::ActuatorConfigurationFailed] - Returned when a wheel rejects its configuration.
    /// * [Error::SingularKinematics] - Returned when the wheel locations cannot be inverted.
    pub fn new(
        mut wheels: MecanumWheels<A>,
        heading_sensor: H,
        config: DriveConfig,
    ) -> Result<Self, Error> {
        config.validate()?;

        for position in WheelPosition::ALL {
            wheels
                .get_mut(position)
                .configure(&config.motor)
                .map_err(|e| Error::ActuatorConfigurationFailed {
                    wheel: position.name(),
                    reason: e.to_string(),
                })?;
        }

        let kinematics = MecanumKinematics::new(&config.wheel_locations)?;
        let odometry = MecanumOdometry::new(
            kinematics,
            heading_sensor.angle_degrees().to_radians(),
            Pose2d::origin(),
        );

        let mut heading_controller = ProfiledPidController::new(
            config.heading_controller.gains,
            config.heading_controller.constraints()?,
            config.tick_period_in_seconds,
        );
        if config.heading_controller.continuous_input {
            heading_controller
                .enable_continuous_input(CONTINUOUS_HEADING_RANGE.0, CONTINUOUS_HEADING_RANGE.1);
        }
        heading_controller.reset(heading_sensor.angle_degrees());

        info!(
            field_oriented = config.field_oriented_at_start,
            current_limit = config.motor.current_limit_in_amps(),
            "Drive system initialized"
        );

        Ok(Self {
            wheels,
            heading_sensor,
            mixer: MecanumMixer::new(config.deadband, config.max_output),
            pose: Arc::new(Mutex::new(odometry.pose())),
            odometry,
            heading_controller,
            field_oriented: config.field_oriented_at_start,
            speed_mode: SpeedMode::Nominal,
            config,
        })
    }

    /// Returns the latest pose estimate.
    pub fn pose(&self) -> Pose2d {
        self.pose_reader().pose()
    }

    /// Returns a handle that reads the pose estimate from other threads.
    pub fn pose_reader(&self) -> PoseReader {
        PoseReader {
            pose: self.pose.clone(),
        }
    }

    /// Turns at a fixed speed towards the given heading: clockwise for headings in
    /// [0, 180] degrees and counter-clockwise above that.
    ///
    /// The proximity check `current <= target + tolerance || current >= target - tolerance`
    /// holds for every real heading, so the turn is commanded on every call. The drive does
    /// not stop by itself once the target is reached.
    ///
    /// ## Parameters
    ///
    /// * 'target_angle' - The target heading in degrees, in [0, 360].
    pub fn rotate_to_heading(&mut self, target_angle: f64) {
        let current_angle = self.heading_degrees();
        let tolerance = self.config.rotate_to_heading_tolerance_in_degrees;
        let speed = self.config.rotate_to_heading_speed;

        if current_angle <= target_angle + tolerance || current_angle >= target_angle - tolerance
        {
            debug!(current_angle, target_angle, "Turning towards heading");

            if target_angle <= HALF_TURN_IN_DEGREES {
                self.drive(0.0, 0.0, speed);
            } else if target_angle > HALF_TURN_IN_DEGREES {
                self.drive(0.0, 0.0, -speed);
            }
        }
    }

    /// Drives each wheel with a closed loop velocity reference.
    ///
    /// ## Parameters
    ///
    /// * 'speeds' - The velocity reference for each wheel, in encoder velocity units.
    pub fn set_wheel_speeds(&mut self, speeds: &MecanumWheelSpeeds) {
        self.wheels
            .front_left
            .set_velocity_reference(speeds.front_left);
        self.wheels.rear_left.set_velocity_reference(speeds.rear_left);
        self.wheels
            .front_right
            .set_velocity_reference(speeds.front_right);
        self.wheels
            .rear_right
            .set_velocity_reference(speeds.rear_right);
    }

    /// Returns the active speed mode.
    pub fn speed_mode(&self) -> SpeedMode {
        self.speed_mode
    }

    /// Returns the multiplier applied to every drive intent.
    pub fn speed_multiplier(&self) -> f64 {
        match self.speed_mode {
            SpeedMode::Nominal => self.config.nominal_speed_multiplier,
            SpeedMode::Slow => self.config.slow_speed_multiplier,
        }
    }

    /// Switches between field oriented and robot oriented driving.
    pub fn toggle_field_oriented(&mut self) {
        self.field_oriented = !self.field_oriented;
        info!(field_oriented = self.field_oriented, "Toggled field oriented driving");
    }

    /// Switches between the nominal and the slow speed multiplier.
    pub fn toggle_slow_mode(&mut self) {
        self.speed_mode = match self.speed_mode {
            SpeedMode::Nominal => SpeedMode::Slow,
            SpeedMode::Slow => SpeedMode::Nominal,
        };
        info!(
            speed_multiplier = self.speed_multiplier(),
            "Toggled slow mode"
        );
    }

    /// Returns the limits for generating trajectories for this drive.
    pub fn trajectory_config(&self) -> &TrajectoryConfig {
        &self.config.trajectory
    }

    /// Returns the wheel actuators.
    pub fn wheels(&self) -> &MecanumWheels<A> {
        &self.wheels
    }

    /// Returns the wheel actuators, e.g. to script simulated wheels.
    pub fn wheels_mut(&mut self) -> &mut MecanumWheels<A> {
        &mut self.wheels
    }
}

impl<A: WheelActuator, H: HeadingSensor> Subsystem for DriveSystem<A, H> {
    /// Integrates the current wheel velocities and heading into the pose estimate over one
    /// tick period.
    fn periodic(&mut self) {
        let wheel_speeds = self
            .wheels
            .velocities()
            .scale(self.config.encoder_velocity_factor);
        let heading = self.heading_degrees().to_radians();

        let pose = self
            .odometry
            .update(heading, &wheel_speeds, self.config.tick_period_in_seconds);

        *self.pose.lock().unwrap_or_else(|err| err.into_inner()) = pose;
    }
}

impl<A: WheelActuator, H: HeadingSensor> Sendable for DriveSystem<A, H> {
    fn dashboard_type(&self) -> &'static str {
        "DriveSystem"
    }

    fn describe(&self, builder: &mut TelemetryBuilder) {
        builder.add_boolean_property("Field Oriented", self.field_oriented);
        builder.add_double_property("Speed Multiplier", self.speed_multiplier());
    }
}
