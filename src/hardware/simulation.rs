//! Simulated hardware that records what it is told and reports scripted readings.
//!
//! Used to run the subsystems without the robot, e.g. in tests or on a development machine.

use crate::Error;

use super::{
    actuator_interface::{MotorConfiguration, WheelActuator},
    camera_interface::{Camera, PipelineResult},
    sensor_interface::{HeadingSensor, MatchInfoProvider},
};

#[cfg(test)]
#[path = "simulation_tests.rs"]
mod simulation_tests;

/// The last command that was sent to a [SimulatedWheel].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelCommand {
    /// An open loop output in the range [-1, 1].
    Output(f64),
    /// A closed loop velocity reference.
    Velocity(f64),
}

/// A wheel actuator that stores the last command and reports a scripted velocity.
#[derive(Debug, Default)]
pub struct SimulatedWheel {
    configuration: Option<MotorConfiguration>,
    last_command: Option<WheelCommand>,
    velocity: f64,
    rejects_configuration: bool,
}

impl SimulatedWheel {
    /// Returns the configuration that was applied, if any.
    pub fn configuration(&self) -> Option<&MotorConfiguration> {
        self.configuration.as_ref()
    }

    /// Returns the last command that was sent to the wheel.
    pub fn last_command(&self) -> Option<WheelCommand> {
        self.last_command
    }

    /// Returns the last open loop output, or `None` if the last command was not an open
    /// loop command.
    pub fn last_output(&self) -> Option<f64> {
        match self.last_command {
            Some(WheelCommand::Output(output)) => Some(output),
            _ => None,
        }
    }

    /// Creates a new wheel that is stationary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a wheel that fails when it is configured, mimicking a controller that is not
    /// present on the bus.
    pub fn rejecting_configuration() -> Self {
        Self {
            rejects_configuration: true,
            ..Self::default()
        }
    }

    /// Sets the velocity the wheel will report.
    pub fn set_velocity(&mut self, velocity: f64) {
        self.velocity = velocity;
    }
}

impl WheelActuator for SimulatedWheel {
    fn configure(&mut self, configuration: &MotorConfiguration) -> Result<(), Error> {
        if self.rejects_configuration {
            return Err(Error::InvalidConfiguration {
                reason: "the simulated controller did not respond".to_string(),
            });
        }

        self.configuration = Some(configuration.clone());
        Ok(())
    }

    fn set_output(&mut self, output: f64) {
        self.last_command = Some(WheelCommand::Output(output));
    }

    fn set_velocity_reference(&mut self, velocity: f64) {
        self.last_command = Some(WheelCommand::Velocity(velocity));
    }

    fn velocity(&self) -> f64 {
        self.velocity
    }
}

/// A heading sensor that reports a scripted angle.
#[derive(Debug, Default)]
pub struct SimulatedHeadingSensor {
    angle_in_degrees: f64,
}

impl SimulatedHeadingSensor {
    /// Creates a new sensor reporting the given angle.
    pub fn new(angle_in_degrees: f64) -> Self {
        Self { angle_in_degrees }
    }

    /// Sets the angle the sensor will report.
    pub fn set_angle_degrees(&mut self, angle_in_degrees: f64) {
        self.angle_in_degrees = angle_in_degrees;
    }
}

impl HeadingSensor for SimulatedHeadingSensor {
    fn angle_degrees(&self) -> f64 {
        self.angle_in_degrees
    }
}

/// A camera that returns a scripted frame result and records the modes it was switched to.
#[derive(Debug, Default)]
pub struct SimulatedCamera {
    result: PipelineResult,
    pipeline_index: Option<u8>,
    driver_mode: Option<bool>,
}

impl SimulatedCamera {
    /// Returns the driver mode that was last set on the camera.
    pub fn driver_mode(&self) -> Option<bool> {
        self.driver_mode
    }

    /// Creates a new camera that sees no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pipeline index that was last set on the camera.
    pub fn pipeline_index(&self) -> Option<u8> {
        self.pipeline_index
    }

    /// Sets the frame result that the camera will report.
    pub fn set_result(&mut self, result: PipelineResult) {
        self.result = result;
    }
}

impl Camera for SimulatedCamera {
    fn latest_result(&self) -> PipelineResult {
        self.result.clone()
    }

    fn set_pipeline_index(&mut self, index: u8) {
        self.pipeline_index = Some(index);
    }

    fn set_driver_mode(&mut self, enabled: bool) {
        self.driver_mode = Some(enabled);
    }
}

/// Match information with a fixed alliance, or no alliance at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticMatchInfo {
    is_red_alliance: Option<bool>,
}

impl StaticMatchInfo {
    /// Match information for the blue alliance.
    pub fn blue() -> Self {
        Self {
            is_red_alliance: Some(false),
        }
    }

    /// Match information that has not been published yet.
    pub fn unavailable() -> Self {
        Self {
            is_red_alliance: None,
        }
    }

    /// Match information for the red alliance.
    pub fn red() -> Self {
        Self {
            is_red_alliance: Some(true),
        }
    }
}

impl MatchInfoProvider for StaticMatchInfo {
    fn is_red_alliance(&self) -> Option<bool> {
        self.is_red_alliance
    }
}
