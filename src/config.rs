//! Defines the configuration of the drive and vision subsystems.
//!
//! The configuration is read from a TOML document. Every value has a default that matches
//! the competition robot, so an empty document is a valid configuration and a document only
//! needs to list the values that differ.
//!
//! ```
//! use mecanum_subsystems::config::RobotConfig;
//!
//! let config = RobotConfig::from_toml_str(
//!     r#"
//!     [drive]
//!     slow_speed_multiplier = 0.3
//!
//!     [vision.pipelines]
//!     red = 7
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(0.3, config.drive.slow_speed_multiplier);
//! assert_eq!(0.8, config.drive.nominal_speed_multiplier);
//! assert_eq!(7, config.vision.pipelines.red);
//! ```

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    control::{pid::PidGains, trapezoid_profile::MotionConstraints},
    hardware::actuator_interface::MotorConfiguration,
    kinematics::WheelLocations,
    Error,
};

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

/// The configuration for all subsystems of the robot.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct RobotConfig {
    /// The configuration of the drive subsystem.
    pub drive: DriveConfig,

    /// The configuration of the vision subsystem.
    pub vision: VisionConfig,
}

impl RobotConfig {
    /// Parses and validates the configuration from a TOML document.
    ///
    /// ## Errors
    ///
    /// * [Error::ConfigurationParse] - Returned when the document is not valid TOML or has
    ///   values of the wrong type.
    /// * [Error::InvalidConfiguration] - Returned when a value is out of range.
    pub fn from_toml_str(document: &str) -> Result<Self, Error> {
        let config: RobotConfig = toml::from_str(document)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration from a TOML file.
    ///
    /// ## Errors
    ///
    /// * [Error::ConfigurationRead] - Returned when the file cannot be read.
    /// * [Error::ConfigurationParse] - Returned when the file is not valid TOML.
    /// * [Error::InvalidConfiguration] - Returned when a value is out of range.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let document = fs::read_to_string(path)?;
        Self::from_toml_str(&document)
    }

    /// Checks that all values are within their valid range.
    pub fn validate(&self) -> Result<(), Error> {
        self.drive.validate()?;
        self.vision.validate()
    }
}

/// The configuration of the drive subsystem.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct DriveConfig {
    /// The settings applied to every drive motor controller.
    pub motor: MotorConfiguration,

    /// The location of the wheels relative to the centre of the robot.
    pub wheel_locations: WheelLocations,

    /// The speed multiplier used outside of slow mode.
    pub nominal_speed_multiplier: f64,

    /// The speed multiplier used in slow mode.
    pub slow_speed_multiplier: f64,

    /// Indicates whether the drive starts in field oriented mode.
    pub field_oriented_at_start: bool,

    /// The rotation intent used when turning towards a heading.
    pub rotate_to_heading_speed: f64,

    /// The tolerance, in degrees, of the turn towards a heading.
    pub rotate_to_heading_tolerance_in_degrees: f64,

    /// The controller that corrects the heading while driving towards a target.
    pub heading_controller: HeadingControllerConfig,

    /// The time between two periodic updates, in seconds.
    pub tick_period_in_seconds: f64,

    /// The factor that converts encoder velocities to metres per second.
    pub encoder_velocity_factor: f64,

    /// Translational intents at or below this magnitude are ignored.
    pub deadband: f64,

    /// The open loop output that corresponds to a full intent.
    pub max_output: f64,

    /// The limits handed to trajectory generation.
    pub trajectory: TrajectoryConfig,
}

impl DriveConfig {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        require_positive("drive.nominal_speed_multiplier", self.nominal_speed_multiplier)?;
        require_positive("drive.slow_speed_multiplier", self.slow_speed_multiplier)?;
        require_positive("drive.tick_period_in_seconds", self.tick_period_in_seconds)?;
        require_positive("drive.max_output", self.max_output)?;
        require_positive("drive.encoder_velocity_factor", self.encoder_velocity_factor)?;

        if !(0.0..1.0).contains(&self.deadband) {
            return Err(Error::InvalidConfiguration {
                reason: format!("drive.deadband must be in [0, 1), found {}", self.deadband),
            });
        }

        self.heading_controller.constraints()?;
        self.trajectory.constraints()?;

        Ok(())
    }
}

impl Default for DriveConfig {
    fn default() -> Self {
        Self {
            motor: MotorConfiguration::default(),
            wheel_locations: WheelLocations::default(),
            nominal_speed_multiplier: 0.8,
            slow_speed_multiplier: 0.4,
            field_oriented_at_start: true,
            rotate_to_heading_speed: 0.4,
            rotate_to_heading_tolerance_in_degrees: 5.0,
            heading_controller: HeadingControllerConfig::default(),
            tick_period_in_seconds: 0.02,
            encoder_velocity_factor: 1.0,
            deadband: 0.0,
            max_output: 1.0,
            trajectory: TrajectoryConfig::default(),
        }
    }
}

/// The configuration of the heading correction controller. All angles are in degrees.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct HeadingControllerConfig {
    /// The controller gains.
    pub gains: PidGains,

    /// The maximum rotation speed of the profile, in degrees per second.
    pub max_rotation_speed: f64,

    /// The maximum rotation acceleration of the profile, in degrees per second squared.
    pub max_rotation_acceleration: f64,

    /// Indicates whether the heading is treated as wrapping around at +/- 180 degrees.
    pub continuous_input: bool,
}

impl HeadingControllerConfig {
    /// Returns the motion constraints of the heading profile.
    pub fn constraints(&self) -> Result<MotionConstraints, Error> {
        MotionConstraints::new(self.max_rotation_speed, self.max_rotation_acceleration).map_err(
            |_| Error::InvalidConfiguration {
                reason: "drive.heading_controller limits must be positive".to_string(),
            },
        )
    }
}

impl Default for HeadingControllerConfig {
    fn default() -> Self {
        Self {
            gains: PidGains::default(),
            max_rotation_speed: 360.0,
            max_rotation_acceleration: 720.0,
            continuous_input: false,
        }
    }
}

/// The speed limits handed to trajectory generation for the drive.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct TrajectoryConfig {
    /// The maximum speed in metres per second.
    pub max_speed: f64,

    /// The maximum acceleration in metres per second squared.
    pub max_acceleration: f64,

    /// Indicates whether trajectories are driven backwards.
    pub reversed: bool,
}

impl TrajectoryConfig {
    /// Returns the speed limits as motion constraints.
    pub fn constraints(&self) -> Result<MotionConstraints, Error> {
        MotionConstraints::new(self.max_speed, self.max_acceleration).map_err(|_| {
            Error::InvalidConfiguration {
                reason: "drive.trajectory limits must be positive".to_string(),
            }
        })
    }
}

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            max_speed: 3.0,
            max_acceleration: 3.0,
            reversed: false,
        }
    }
}

/// The configuration of the vision subsystem.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct VisionConfig {
    /// The name of the camera, as published by the camera software.
    pub camera_name: String,

    /// The on-device pipeline index for each pipeline mode.
    pub pipelines: PipelineIndices,

    /// Indicates whether the camera starts in driver mode.
    pub driver_mode_at_start: bool,
}

impl VisionConfig {
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if self.camera_name.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                reason: "vision.camera_name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for VisionConfig {
    fn default() -> Self {
        Self {
            camera_name: "mscam".to_string(),
            pipelines: PipelineIndices::default(),
            driver_mode_at_start: true,
        }
    }
}

/// The on-device pipeline index for each pipeline mode.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PipelineIndices {
    /// The pipeline that detects blue alliance targets.
    pub blue: u8,

    /// The pipeline that detects red alliance targets.
    pub red: u8,

    /// The neutral pipeline.
    pub none: u8,
}

impl Default for PipelineIndices {
    fn default() -> Self {
        Self {
            blue: 5,
            red: 6,
            none: 1,
        }
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidConfiguration {
            reason: format!("{} must be positive, found {}", name, value),
        })
    }
}
