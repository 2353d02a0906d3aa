use crate::number_space::{to_number_space, NumberSpaceType, RealNumberValueSpace};

use super::{
    pid::{PidController, PidGains},
    trapezoid_profile::{MotionConstraints, ProfileState, TrapezoidProfile},
};

#[cfg(test)]
#[path = "profiled_pid_tests.rs"]
mod profiled_pid_tests;

/// A PID controller that does not chase its goal directly but follows a trapezoidal
/// motion profile towards it, advancing the profile by one period per update.
pub struct ProfiledPidController {
    controller: PidController,
    constraints: MotionConstraints,

    /// The periodic number space of the measurement, if continuous input is enabled.
    continuous_input: Option<Box<dyn RealNumberValueSpace>>,

    goal: ProfileState,
    setpoint: ProfileState,
}

impl ProfiledPidController {
    /// Returns the output for the given measurement, moving the goal to `goal_position`.
    ///
    /// ## Parameters
    ///
    /// * 'measurement' - The current value of the controlled quantity.
    /// * 'goal_position' - The position the controller should end up at.
    pub fn calculate(&mut self, measurement: f64, goal_position: f64) -> f64 {
        let mut goal = ProfileState::new(goal_position, 0.0);

        // Re-express goal and setpoint relative to the measurement so that the profile
        // never goes the long way around.
        if let Some(space) = &self.continuous_input {
            goal.position =
                measurement + space.smallest_distance_between_values(measurement, goal.position);
            self.setpoint.position = measurement
                + space.smallest_distance_between_values(measurement, self.setpoint.position);
        }

        self.goal = goal;

        let profile = TrapezoidProfile::new(self.constraints, self.setpoint, self.goal);
        self.setpoint = profile.calculate(self.controller.period_in_seconds());

        self.controller.calculate(measurement, self.setpoint.position)
    }

    /// Makes the controller treat the measurement as periodic between the given bounds.
    pub fn enable_continuous_input(&mut self, minimum: f64, maximum: f64) {
        self.controller.enable_continuous_input(minimum, maximum);
        self.continuous_input = Some(to_number_space(NumberSpaceType::Periodic {
            minimum,
            maximum,
        }));
    }

    /// Returns the goal that was given in the last update.
    pub fn goal(&self) -> ProfileState {
        self.goal
    }

    /// Creates a new controller.
    ///
    /// ## Parameters
    ///
    /// * 'gains' - The proportional, integral and derivative gains.
    /// * 'constraints' - The maximum velocity and acceleration of the motion profile.
    /// * 'period_in_seconds' - The time between two updates.
    pub fn new(gains: PidGains, constraints: MotionConstraints, period_in_seconds: f64) -> Self {
        Self {
            controller: PidController::new(gains, period_in_seconds),
            constraints,
            continuous_input: None,
            goal: ProfileState::default(),
            setpoint: ProfileState::default(),
        }
    }

    /// Restarts the profile from the given measurement, at rest.
    pub fn reset(&mut self, measurement: f64) {
        self.controller.reset();
        self.setpoint = ProfileState::new(measurement, 0.0);
    }

    /// Returns the intermediate setpoint the profile is currently at.
    pub fn setpoint(&self) -> ProfileState {
        self.setpoint
    }
}
