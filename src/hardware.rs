/// Defines the interface for the wheel actuators
pub mod actuator_interface;

/// Defines the interface for the vision camera
pub mod camera_interface;

/// Defines the interface for sensors and match information
pub mod sensor_interface;

/// Provides simulated hardware for running the subsystems without a robot
pub mod simulation;
