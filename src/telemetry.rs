//! Provides the exposure of subsystem state to a dashboard.
//!
//! Subsystems implement [Sendable] to describe their state as a set of named, read-only
//! properties. A [TelemetryPublisher] takes snapshots of these properties and sends them
//! over a channel to whatever forwards them to the dashboard.

use crossbeam_channel::{Receiver, Sender};
use tracing::debug;

use crate::Error;

#[cfg(test)]
#[path = "telemetry_tests.rs"]
mod telemetry_tests;

/// The value of a single telemetry property.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TelemetryValue {
    /// A boolean value.
    Boolean(bool),
    /// A floating point value.
    Double(f64),
}

/// A named telemetry property.
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetryProperty {
    name: &'static str,
    value: TelemetryValue,
}

impl TelemetryProperty {
    /// Returns the name of the property.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the value of the property.
    pub fn value(&self) -> TelemetryValue {
        self.value
    }
}

/// Collects the properties that a [Sendable] exposes.
#[derive(Debug, Default)]
pub struct TelemetryBuilder {
    properties: Vec<TelemetryProperty>,
}

impl TelemetryBuilder {
    /// Adds a boolean property.
    pub fn add_boolean_property(&mut self, name: &'static str, value: bool) {
        self.properties.push(TelemetryProperty {
            name,
            value: TelemetryValue::Boolean(value),
        });
    }

    /// Adds a floating point property.
    pub fn add_double_property(&mut self, name: &'static str, value: f64) {
        self.properties.push(TelemetryProperty {
            name,
            value: TelemetryValue::Double(value),
        });
    }

    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Defines an object that exposes its state as dashboard properties.
pub trait Sendable {
    /// Returns the widget type the dashboard should use to display the object.
    fn dashboard_type(&self) -> &'static str;

    /// Adds the current value of every exposed property to the builder.
    fn describe(&self, builder: &mut TelemetryBuilder);
}

/// The properties of a [Sendable] at one point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct TelemetrySnapshot {
    table: String,
    dashboard_type: &'static str,
    properties: Vec<TelemetryProperty>,
}

impl TelemetrySnapshot {
    /// Takes a snapshot of the properties of the given object.
    ///
    /// ## Parameters
    ///
    /// * 'table' - The name under which the properties are published.
    /// * 'sendable' - The object to take the snapshot of.
    pub fn capture(table: &str, sendable: &dyn Sendable) -> Self {
        let mut builder = TelemetryBuilder::new();
        sendable.describe(&mut builder);

        Self {
            table: table.to_string(),
            dashboard_type: sendable.dashboard_type(),
            properties: builder.properties,
        }
    }

    /// Returns the widget type of the object.
    pub fn dashboard_type(&self) -> &'static str {
        self.dashboard_type
    }

    /// Returns the value of the property with the given name.
    pub fn get(&self, name: &str) -> Option<TelemetryValue> {
        self.properties
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value)
    }

    /// Returns all properties in the order they were added.
    pub fn properties(&self) -> &[TelemetryProperty] {
        &self.properties
    }

    /// Returns the name under which the properties are published.
    pub fn table(&self) -> &str {
        &self.table
    }
}

/// Sends telemetry snapshots to the dashboard side of a channel.
#[derive(Clone, Debug)]
pub struct TelemetryPublisher {
    sender: Sender<TelemetrySnapshot>,
}

impl TelemetryPublisher {
    /// Creates a new publisher and the receiver on which the snapshots arrive.
    pub fn new() -> (Self, Receiver<TelemetrySnapshot>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self { sender }, receiver)
    }

    /// Takes a snapshot of the object and sends it to the dashboard side.
    ///
    /// ## Errors
    ///
    /// * [Error::TelemetryChannelClosed] - Returned when the receiver has been dropped.
    pub fn publish(&self, table: &str, sendable: &dyn Sendable) -> Result<(), Error> {
        let snapshot = TelemetrySnapshot::capture(table, sendable);
        debug!(table, properties = snapshot.properties.len(), "Publishing telemetry");

        self.sender
            .send(snapshot)
            .map_err(|_source| Error::TelemetryChannelClosed)
    }
}
