/// Defines the mecanum drive subsystem
pub mod drive_system;

/// Defines a part of the robot that is updated once per scheduling tick.
///
/// The robot loop calls [Subsystem::periodic] on every subsystem at a fixed cadence,
/// typically 50 Hz, from a single thread.
pub trait Subsystem {
    /// Runs the per-tick update of the subsystem.
    fn periodic(&mut self);
}
