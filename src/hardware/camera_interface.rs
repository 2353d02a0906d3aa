//! Defines the interface for the vision camera and the observations it reports.

use crate::geometry::Transform2d;

#[cfg(test)]
#[path = "camera_interface_tests.rs"]
mod camera_interface_tests;

/// Describes a single target that was detected in a camera frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedTarget {
    /// The horizontal angle from the crosshair to the target, in degrees.
    yaw: f64,

    /// The vertical angle from the crosshair to the target, in degrees.
    pitch: f64,

    /// The fraction of the image covered by the target, in percent.
    area: f64,

    /// The planar transform from the camera to the target.
    camera_to_target: Transform2d,
}

impl TrackedTarget {
    /// Returns the fraction of the image covered by the target, in percent.
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Returns the transform from the camera to the target.
    pub fn camera_to_target(&self) -> Transform2d {
        self.camera_to_target
    }

    /// Creates a new [TrackedTarget].
    ///
    /// ## Parameters
    ///
    /// * 'yaw' - The horizontal offset in degrees.
    /// * 'pitch' - The vertical offset in degrees.
    /// * 'area' - The fraction of the image covered by the target.
    /// * 'camera_to_target' - The transform from the camera to the target.
    pub fn new(yaw: f64, pitch: f64, area: f64, camera_to_target: Transform2d) -> Self {
        Self {
            yaw,
            pitch,
            area,
            camera_to_target,
        }
    }

    /// Returns the vertical offset from the crosshair to the target, in degrees.
    pub fn pitch(&self) -> f64 {
        self.pitch
    }

    /// Returns the horizontal offset from the crosshair to the target, in degrees.
    pub fn yaw(&self) -> f64 {
        self.yaw
    }
}

/// The result of processing one camera frame.
///
/// The targets are ranked by the camera pipeline, the best candidate comes first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PipelineResult {
    targets: Vec<TrackedTarget>,

    /// The processing latency of the frame in milliseconds.
    latency_in_millis: f64,
}

impl PipelineResult {
    /// Returns the best ranked target, if any target was detected.
    pub fn best_target(&self) -> Option<&TrackedTarget> {
        self.targets.first()
    }

    /// Returns a value indicating whether any target was detected in the frame.
    pub fn has_targets(&self) -> bool {
        !self.targets.is_empty()
    }

    /// Returns the processing latency of the frame in milliseconds.
    pub fn latency_in_millis(&self) -> f64 {
        self.latency_in_millis
    }

    /// Creates a new [PipelineResult] from the ranked targets.
    pub fn new(targets: Vec<TrackedTarget>, latency_in_millis: f64) -> Self {
        Self {
            targets,
            latency_in_millis,
        }
    }

    /// Returns all detected targets, best ranked first.
    pub fn targets(&self) -> &[TrackedTarget] {
        &self.targets
    }
}

/// Defines the interface for a camera that runs a target detection pipeline on-device.
pub trait Camera {
    /// Returns the result for the most recently processed frame.
    fn latest_result(&self) -> PipelineResult;

    /// Switches the on-device pipeline.
    fn set_pipeline_index(&mut self, index: u8);

    /// Enables or disables driver mode, which turns off target processing overlays.
    fn set_driver_mode(&mut self, enabled: bool);
}
