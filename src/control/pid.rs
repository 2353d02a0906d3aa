use serde::{Deserialize, Serialize};

use crate::number_space::{to_number_space, NumberSpaceType, RealNumberValueSpace};

#[cfg(test)]
#[path = "pid_tests.rs"]
mod pid_tests;

/// The default limits on the integral contribution to the output.
const DEFAULT_INTEGRAL_RANGE: (f64, f64) = (-1.0, 1.0);

/// Stores the proportional, integral and derivative gains of a controller.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PidGains {
    /// The proportional gain.
    pub kp: f64,

    /// The integral gain.
    pub ki: f64,

    /// The derivative gain.
    pub kd: f64,
}

impl PidGains {
    /// Creates a new set of gains.
    pub fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }
}

/// A PID controller that is updated once per fixed period.
pub struct PidController {
    gains: PidGains,

    /// The time between two calls to [PidController::calculate], in seconds.
    period_in_seconds: f64,

    /// The number space in which the error is measured. Periodic spaces make the controller
    /// take the shortest way around.
    number_space: Box<dyn RealNumberValueSpace>,

    position_error: f64,
    previous_error: f64,
    total_error: f64,

    /// The minimum and maximum contribution of the integral term to the output.
    integral_range: (f64, f64),
}

impl PidController {
    /// Returns the output for the given measurement and setpoint.
    ///
    /// ## Parameters
    ///
    /// * 'measurement' - The current value of the controlled quantity.
    /// * 'setpoint' - The desired value of the controlled quantity.
    pub fn calculate(&mut self, measurement: f64, setpoint: f64) -> f64 {
        self.previous_error = self.position_error;
        self.position_error = self
            .number_space
            .smallest_distance_between_values(measurement, setpoint);

        let velocity_error = (self.position_error - self.previous_error) / self.period_in_seconds;

        if self.gains.ki != 0.0 {
            let first = self.integral_range.0 / self.gains.ki;
            let second = self.integral_range.1 / self.gains.ki;
            self.total_error = (self.total_error + self.position_error * self.period_in_seconds)
                .max(first.min(second))
                .min(first.max(second));
        }

        self.gains.kp * self.position_error
            + self.gains.ki * self.total_error
            + self.gains.kd * velocity_error
    }

    /// Makes the controller treat the measurement as periodic between the given bounds, e.g.
    /// -180 and 180 degrees for a heading.
    pub fn enable_continuous_input(&mut self, minimum: f64, maximum: f64) {
        self.number_space = to_number_space(NumberSpaceType::Periodic { minimum, maximum });
    }

    /// Returns the gains of the controller.
    pub fn gains(&self) -> &PidGains {
        &self.gains
    }

    /// Creates a new controller.
    ///
    /// ## Parameters
    ///
    /// * 'gains' - The proportional, integral and derivative gains.
    /// * 'period_in_seconds' - The time between two calls to [PidController::calculate].
    pub fn new(gains: PidGains, period_in_seconds: f64) -> Self {
        Self {
            gains,
            period_in_seconds,
            number_space: to_number_space(NumberSpaceType::LinearUnlimited),
            position_error: 0.0,
            previous_error: 0.0,
            total_error: 0.0,
            integral_range: DEFAULT_INTEGRAL_RANGE,
        }
    }

    /// Returns the time between two updates, in seconds.
    pub fn period_in_seconds(&self) -> f64 {
        self.period_in_seconds
    }

    /// Returns the error that was used in the last call to [PidController::calculate].
    pub fn position_error(&self) -> f64 {
        self.position_error
    }

    /// Clears the accumulated error state.
    pub fn reset(&mut self) {
        self.position_error = 0.0;
        self.previous_error = 0.0;
        self.total_error = 0.0;
    }

    /// Sets the minimum and maximum contribution of the integral term.
    pub fn set_integral_range(&mut self, minimum: f64, maximum: f64) {
        self.integral_range = (minimum, maximum);
    }
}
