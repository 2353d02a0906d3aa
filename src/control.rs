/// Defines a PID controller with a fixed update period
pub mod pid;

/// Defines a PID controller that follows a trapezoidal motion profile towards its goal
pub mod profiled_pid;

/// Defines the trapezoidal motion profile
pub mod trapezoid_profile;
