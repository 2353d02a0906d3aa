/// Defines the adapter that presents the camera observations to the rest of the robot
pub mod target_sensor;
