use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Error;

#[cfg(test)]
#[path = "actuator_interface_tests.rs"]
mod actuator_interface_tests;

/// The smart current limit for the drive motors, in amps.
const DEFAULT_CURRENT_LIMIT_IN_AMPS: u32 = 40;

/// The voltage to which the motor output is compensated.
const DEFAULT_NOMINAL_VOLTAGE: f64 = 12.0;

/// The time in seconds to go from zero to full output in open loop.
const DEFAULT_OPEN_LOOP_RAMP_RATE_IN_SECONDS: f64 = 0.2;

/// Identifies one of the four wheels of a mecanum drive.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum WheelPosition {
    /// The front left wheel.
    FrontLeft,
    /// The rear left wheel.
    RearLeft,
    /// The front right wheel.
    FrontRight,
    /// The rear right wheel.
    RearRight,
}

impl WheelPosition {
    /// All wheels, in the order in which the drive hardware is wired.
    pub const ALL: [WheelPosition; 4] = [
        WheelPosition::FrontLeft,
        WheelPosition::RearLeft,
        WheelPosition::FrontRight,
        WheelPosition::RearRight,
    ];

    /// Returns the human readable name of the wheel.
    pub fn name(&self) -> &'static str {
        match self {
            WheelPosition::FrontLeft => "front left",
            WheelPosition::RearLeft => "rear left",
            WheelPosition::FrontRight => "front right",
            WheelPosition::RearRight => "rear right",
        }
    }
}

impl Display for WheelPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Stores the settings that are applied to a motor controller once, when the drive
/// is constructed.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct MotorConfiguration {
    /// The current limit in amps.
    current_limit_in_amps: u32,

    /// The voltage that full output is compensated to.
    nominal_voltage: f64,

    /// The time in seconds it takes to ramp from zero to full output in open loop.
    open_loop_ramp_rate_in_seconds: f64,
}

impl MotorConfiguration {
    /// Returns the current limit in amps.
    pub fn current_limit_in_amps(&self) -> u32 {
        self.current_limit_in_amps
    }

    /// Returns the nominal voltage used for voltage compensation.
    pub fn nominal_voltage(&self) -> f64 {
        self.nominal_voltage
    }

    /// Returns the open loop ramp rate in seconds.
    pub fn open_loop_ramp_rate_in_seconds(&self) -> f64 {
        self.open_loop_ramp_rate_in_seconds
    }

    /// Creates a new instance of [MotorConfiguration] with the given values.
    ///
    /// ## Parameters
    ///
    /// * 'current_limit_in_amps' - The current limit for the motor
    /// * 'nominal_voltage' - The voltage that full output is compensated to
    /// * 'open_loop_ramp_rate_in_seconds' - The time to go from zero to full output
    pub fn new(
        current_limit_in_amps: u32,
        nominal_voltage: f64,
        open_loop_ramp_rate_in_seconds: f64,
    ) -> Self {
        Self {
            current_limit_in_amps,
            nominal_voltage,
            open_loop_ramp_rate_in_seconds,
        }
    }
}

impl Default for MotorConfiguration {
    fn default() -> Self {
        Self::new(
            DEFAULT_CURRENT_LIMIT_IN_AMPS,
            DEFAULT_NOMINAL_VOLTAGE,
            DEFAULT_OPEN_LOOP_RAMP_RATE_IN_SECONDS,
        )
    }
}

/// Defines the interface for the motor controller and encoder that drive a single wheel.
///
/// All calls are assumed to be non-blocking register style writes and reads. Communication
/// faults are not reported through this interface; a disconnected controller simply keeps
/// reporting its last (or zero) velocity.
pub trait WheelActuator {
    /// Applies the current limit, voltage compensation and ramp rate to the controller.
    fn configure(&mut self, configuration: &MotorConfiguration) -> Result<(), Error>;

    /// Sets the open loop output, as a fraction of the nominal voltage in the range [-1, 1].
    fn set_output(&mut self, output: f64);

    /// Sets the closed loop velocity reference, in encoder velocity units.
    fn set_velocity_reference(&mut self, velocity: f64);

    /// Returns the current velocity as reported by the encoder, in encoder velocity units.
    fn velocity(&self) -> f64;
}
