//! Defines a trapezoidal motion profile.
//!
//! The profile accelerates at the maximum acceleration until it reaches the maximum
//! velocity, cruises, and then decelerates so that it arrives at the goal with the goal
//! velocity. If the distance is too short to reach the maximum velocity the profile
//! degenerates into a triangle.

use crate::Error;

#[cfg(test)]
#[path = "trapezoid_profile_tests.rs"]
mod trapezoid_profile_tests;

/// The maximum velocity and acceleration of a motion profile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionConstraints {
    max_velocity: f64,
    max_acceleration: f64,
}

impl MotionConstraints {
    /// Returns the maximum acceleration.
    pub fn max_acceleration(&self) -> f64 {
        self.max_acceleration
    }

    /// Returns the maximum velocity.
    pub fn max_velocity(&self) -> f64 {
        self.max_velocity
    }

    /// Creates a new set of constraints.
    ///
    /// ## Errors
    ///
    /// * [Error::InvalidMotionConstraints] - Returned when either value is not positive and finite.
    pub fn new(max_velocity: f64, max_acceleration: f64) -> Result<Self, Error> {
        let is_valid = |v: f64| v.is_finite() && v > 0.0;
        if !is_valid(max_velocity) || !is_valid(max_acceleration) {
            return Err(Error::InvalidMotionConstraints);
        }

        Ok(Self {
            max_velocity,
            max_acceleration,
        })
    }
}

/// A position and velocity along a motion profile.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ProfileState {
    /// The position.
    pub position: f64,

    /// The velocity.
    pub velocity: f64,
}

impl ProfileState {
    /// Creates a new state.
    pub fn new(position: f64, velocity: f64) -> Self {
        Self { position, velocity }
    }

    /// Mirrors the state when the profile runs in the negative direction.
    fn directed(&self, direction: f64) -> ProfileState {
        ProfileState::new(self.position * direction, self.velocity * direction)
    }
}

/// A trapezoidal motion profile from a current state to a goal state.
#[derive(Clone, Copy, Debug)]
pub struct TrapezoidProfile {
    constraints: MotionConstraints,

    /// Either 1.0 or -1.0, the profile is always computed as if it runs forward.
    direction: f64,

    initial: ProfileState,
    goal: ProfileState,

    end_acceleration: f64,
    end_full_speed: f64,
    end_deceleration: f64,
}

impl TrapezoidProfile {
    /// Returns the state of the profile at time `t`, in seconds after the start.
    pub fn calculate(&self, t: f64) -> ProfileState {
        let max_acceleration = self.constraints.max_acceleration;
        let max_velocity = self.constraints.max_velocity;

        let mut result = self.initial;
        if t < self.end_acceleration {
            result.velocity += t * max_acceleration;
            result.position += (self.initial.velocity + t * max_acceleration / 2.0) * t;
        } else if t < self.end_full_speed {
            result.velocity = max_velocity;
            result.position += (self.initial.velocity
                + self.end_acceleration * max_acceleration / 2.0)
                * self.end_acceleration
                + max_velocity * (t - self.end_acceleration);
        } else if t <= self.end_deceleration {
            let time_left = self.end_deceleration - t;
            result.velocity = self.goal.velocity + time_left * max_acceleration;
            result.position = self.goal.position
                - (self.goal.velocity + time_left * max_acceleration / 2.0) * time_left;
        } else {
            result = self.goal;
        }

        result.directed(self.direction)
    }

    /// Returns the total time the profile takes, in seconds.
    pub fn total_time(&self) -> f64 {
        self.end_deceleration
    }

    /// Creates a profile from the current state to the goal.
    ///
    /// ## Parameters
    ///
    /// * 'constraints' - The maximum velocity and acceleration.
    /// * 'current' - The state the profile starts in.
    /// * 'goal' - The state the profile should end in.
    pub fn new(constraints: MotionConstraints, current: ProfileState, goal: ProfileState) -> Self {
        let direction = if current.position > goal.position {
            -1.0
        } else {
            1.0
        };

        let mut initial = current.directed(direction);
        let goal = goal.directed(direction);

        let max_acceleration = constraints.max_acceleration;
        let max_velocity = constraints.max_velocity;

        if initial.velocity > max_velocity {
            initial.velocity = max_velocity;
        }

        // Treat the start and end as if they were part of a profile that started and ended
        // at rest, then cut off the parts that do not apply.
        let cutoff_begin = initial.velocity / max_acceleration;
        let cutoff_distance_begin = cutoff_begin * cutoff_begin * max_acceleration / 2.0;

        let cutoff_end = goal.velocity / max_acceleration;
        let cutoff_distance_end = cutoff_end * cutoff_end * max_acceleration / 2.0;

        let full_trapezoid_distance =
            cutoff_distance_begin + (goal.position - initial.position) + cutoff_distance_end;
        let mut acceleration_time = max_velocity / max_acceleration;

        let mut full_speed_distance =
            full_trapezoid_distance - acceleration_time * acceleration_time * max_acceleration;

        if full_speed_distance < 0.0 {
            acceleration_time = (full_trapezoid_distance / max_acceleration).sqrt();
            full_speed_distance = 0.0;
        }

        let end_acceleration = acceleration_time - cutoff_begin;
        let end_full_speed = end_acceleration + full_speed_distance / max_velocity;
        let end_deceleration = end_full_speed + acceleration_time - cutoff_end;

        Self {
            constraints,
            direction,
            initial,
            goal,
            end_acceleration,
            end_full_speed,
            end_deceleration,
        }
    }
}
