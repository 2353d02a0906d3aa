//! Presents the latest camera observation as angular offsets and transforms.
//!
//! The [TargetSensor] owns the camera, picks the detection pipeline for the alliance the
//! robot plays on and hides the camera specific result types from the rest of the robot.
//! The camera is only ever switched on request; the sensor has no periodic work.

use tracing::{debug, info};

use crate::{
    config::{PipelineIndices, VisionConfig},
    geometry::Transform2d,
    hardware::{
        camera_interface::{Camera, TrackedTarget},
        sensor_interface::MatchInfoProvider,
    },
    telemetry::{Sendable, TelemetryBuilder},
    Error,
};

#[cfg(test)]
#[path = "target_sensor_tests.rs"]
mod target_sensor_tests;

/// The detection pipelines of the camera.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PipelineMode {
    /// Detects the targets of the blue alliance.
    Blue,
    /// Detects the targets of the red alliance.
    Red,
    /// The neutral pipeline.
    None,
}

impl PipelineMode {
    /// Returns the on-device index of the pipeline.
    pub fn index(&self, indices: &PipelineIndices) -> u8 {
        match self {
            PipelineMode::Blue => indices.blue,
            PipelineMode::Red => indices.red,
            PipelineMode::None => indices.none,
        }
    }
}

/// Adapts a vision camera for target tracking.
pub struct TargetSensor<C: Camera> {
    camera: C,
    pipeline: PipelineMode,
    driver_mode: bool,
    config: VisionConfig,
}

impl<C: Camera> TargetSensor<C> {
    /// Returns the best ranked target in the latest frame, if any.
    pub fn best_target(&self) -> Option<TrackedTarget> {
        self.camera.latest_result().best_target().copied()
    }

    /// Returns the camera.
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Returns the camera, e.g. to script a simulated camera.
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Returns a value indicating whether driver mode is enabled.
    pub fn driver_mode(&self) -> bool {
        self.driver_mode
    }

    /// Returns a value indicating whether the latest frame contains any target.
    pub fn has_targets(&self) -> bool {
        self.camera.latest_result().has_targets()
    }

    /// Returns the horizontal angle, in degrees, from the crosshair to the best target, or
    /// `None` when no target is visible.
    pub fn horizontal_offset(&self) -> Option<f64> {
        self.best_target().map(|t| t.yaw())
    }

    /// Creates a new target sensor and selects the pipeline for the alliance of the robot.
    ///
    /// ## Parameters
    ///
    /// * 'camera' - The camera that runs the detection pipelines.
    /// * 'match_info' - The source of the alliance colour.
    /// * 'config' - The vision configuration.
    ///
    /// ## Errors
    ///
    /// * [Error::AllianceUnavailable] - Returned when the alliance has not been published.
    /// * [Error::InvalidConfiguration] - Returned when the configuration is out of range.
    pub fn new<M: MatchInfoProvider>(
        camera: C,
        match_info: &M,
        config: VisionConfig,
    ) -> Result<Self, Error> {
        config.validate()?;

        let pipeline = match match_info.is_red_alliance() {
            Some(true) => PipelineMode::Red,
            Some(false) => PipelineMode::Blue,
            None => return Err(Error::AllianceUnavailable),
        };

        let mut result = Self {
            camera,
            pipeline,
            driver_mode: config.driver_mode_at_start,
            config,
        };
        result.set_pipeline(pipeline);
        result.set_driver_mode(result.driver_mode);

        info!(
            camera = result.config.camera_name.as_str(),
            pipeline = ?result.pipeline,
            "Target sensor initialized"
        );

        Ok(result)
    }

    /// Returns the active pipeline.
    pub fn pipeline(&self) -> PipelineMode {
        self.pipeline
    }

    /// Enables or disables driver mode on the camera.
    pub fn set_driver_mode(&mut self, enabled: bool) {
        self.driver_mode = enabled;
        self.camera.set_driver_mode(enabled);
        debug!(
            camera = self.config.camera_name.as_str(),
            enabled, "Set driver mode"
        );
    }

    /// Switches the camera to the given pipeline.
    pub fn set_pipeline(&mut self, pipeline: PipelineMode) {
        self.pipeline = pipeline;
        self.camera
            .set_pipeline_index(pipeline.index(&self.config.pipelines));
        debug!(
            camera = self.config.camera_name.as_str(),
            ?pipeline,
            "Set pipeline"
        );
    }

    /// Inverts driver mode.
    pub fn toggle_driver_mode(&mut self) {
        self.set_driver_mode(!self.driver_mode);
    }

    /// Returns the transform from the camera to the best target, or `None` when no target
    /// is visible.
    pub fn transform_to_target(&self) -> Option<Transform2d> {
        self.best_target().map(|t| t.camera_to_target())
    }

    /// Returns the vertical angle, in degrees, from the crosshair to the best target, or
    /// `None` when no target is visible.
    pub fn vertical_offset(&self) -> Option<f64> {
        self.best_target().map(|t| t.pitch())
    }
}

impl<C: Camera> Sendable for TargetSensor<C> {
    fn dashboard_type(&self) -> &'static str {
        "TargetSensor"
    }

    fn describe(&self, builder: &mut TelemetryBuilder) {
        builder.add_boolean_property("Driver Mode", self.driver_mode);
    }
}
