//! Defines the interface for sensors

/// Defines the interface for hardware that reports the heading of the robot.
pub trait HeadingSensor {
    /// Returns the cumulative heading in degrees.
    ///
    /// The value is not wrapped, i.e. after two full turns the sensor reports 720 degrees.
    fn angle_degrees(&self) -> f64;
}

/// Defines the interface for the match information that is published by the field
/// management system.
pub trait MatchInfoProvider {
    /// Returns `Some(true)` if the robot is on the red alliance, `Some(false)` if it is on the
    /// blue alliance and `None` if the alliance has not been published yet.
    fn is_red_alliance(&self) -> Option<bool>;
}
