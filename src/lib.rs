#![warn(missing_docs)]

//! Drivetrain and vision subsystems for a mecanum drive competition robot.
//!
//! Provides a drive controller that turns a (forward, strafe, rotate) velocity intent into
//! wheel commands while keeping a pose estimate up to date, and a target sensor adapter that
//! presents the latest camera observation as angular offsets and transforms. All hardware is
//! reached through the capability traits in [hardware] so that the control logic can run
//! against the simulated implementations in [hardware::simulation].

use thiserror::Error;

/// Defines the configuration for the subsystems and how it is loaded.
pub mod config;

/// Provides the feedback controllers used for heading correction.
pub mod control;

/// Defines the planar geometry types used for poses and transforms.
pub mod geometry;

/// Defines the capability interfaces for the robot hardware.
pub mod hardware;

/// Provides the mecanum forward and inverse kinematics and the drive mixer.
pub mod kinematics;

/// Defines different number spaces
pub mod number_space;

/// Provides the pose estimation from wheel speeds and heading.
pub mod odometry;

/// Defines the subsystems that are invoked periodically by the robot loop.
pub mod subsystems;

/// Provides the dashboard property exposure for the subsystems.
pub mod telemetry;

/// Provides the target sensor adapter for the vision camera.
pub mod vision;

/// Defines the different errors for the mecanum subsystems crate.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Returned when the alliance colour has not been published by the match info source.
    #[error("The alliance colour is not available from the match info source.")]
    AllianceUnavailable,

    /// Returned when one of the wheel actuators rejects its configuration.
    #[error("Failed to configure the {wheel} actuator: {reason}")]
    ActuatorConfigurationFailed {
        /// The name of the wheel whose actuator failed.
        wheel: &'static str,
        /// The description of the failure.
        reason: String,
    },

    /// Returned when a configuration value is outside its valid range.
    #[error("The configuration is invalid: {reason}")]
    InvalidConfiguration {
        /// The description of the invalid value.
        reason: String,
    },

    /// Returned when the configuration document could not be parsed.
    #[error("Failed to parse the configuration.")]
    ConfigurationParse {
        /// The parser error.
        #[from]
        source: toml::de::Error,
    },

    /// Returned when the configuration file could not be read.
    #[error("Failed to read the configuration file.")]
    ConfigurationRead {
        /// The IO error.
        #[from]
        source: std::io::Error,
    },

    /// Returned when the wheel layout produces a kinematics matrix that cannot be inverted.
    #[error("The wheel layout does not produce invertible kinematics.")]
    SingularKinematics,

    /// Returned when the motion profile constraints are not positive and finite.
    #[error("The motion constraints must be positive and finite.")]
    InvalidMotionConstraints,

    /// Returned when the dashboard side of the telemetry channel has been dropped.
    #[error("The telemetry receiver has been disconnected.")]
    TelemetryChannelClosed,
}
