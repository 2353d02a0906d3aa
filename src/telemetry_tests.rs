use super::*;

struct Indicator {
    enabled: bool,
    level: f64,
}

impl Sendable for Indicator {
    fn dashboard_type(&self) -> &'static str {
        "Indicator"
    }

    fn describe(&self, builder: &mut TelemetryBuilder) {
        builder.add_boolean_property("Enabled", self.enabled);
        builder.add_double_property("Level", self.level);
    }
}

#[test]
fn when_capturing_snapshot_should_contain_all_properties_in_order() {
    let indicator = Indicator {
        enabled: true,
        level: 0.25,
    };

    let snapshot = TelemetrySnapshot::capture("Indicator", &indicator);

    assert_eq!("Indicator", snapshot.table());
    assert_eq!("Indicator", snapshot.dashboard_type());
    assert_eq!(2, snapshot.properties().len());
    assert_eq!("Enabled", snapshot.properties()[0].name());
    assert_eq!(TelemetryValue::Boolean(true), snapshot.properties()[0].value());
    assert_eq!("Level", snapshot.properties()[1].name());
    assert_eq!(TelemetryValue::Double(0.25), snapshot.properties()[1].value());
}

#[test]
fn when_getting_unknown_property_should_return_none() {
    let indicator = Indicator {
        enabled: false,
        level: 0.0,
    };

    let snapshot = TelemetrySnapshot::capture("Indicator", &indicator);

    assert_eq!(Some(TelemetryValue::Boolean(false)), snapshot.get("Enabled"));
    assert!(snapshot.get("Missing").is_none());
}

#[test]
fn when_publishing_snapshot_should_arrive_at_receiver() {
    let (publisher, receiver) = TelemetryPublisher::new();
    let mut indicator = Indicator {
        enabled: true,
        level: 1.0,
    };

    publisher.publish("First", &indicator).unwrap();
    indicator.level = 2.0;
    publisher.publish("First", &indicator).unwrap();

    let first = receiver.try_recv().unwrap();
    let second = receiver.try_recv().unwrap();
    assert_eq!(Some(TelemetryValue::Double(1.0)), first.get("Level"));
    assert_eq!(Some(TelemetryValue::Double(2.0)), second.get("Level"));
    assert!(receiver.try_recv().is_err());
}

#[test]
fn when_receiver_is_dropped_publish_should_fail() {
    let (publisher, receiver) = TelemetryPublisher::new();
    drop(receiver);

    let indicator = Indicator {
        enabled: true,
        level: 1.0,
    };
    let result = publisher.publish("Indicator", &indicator);

    assert!(matches!(result, Err(Error::TelemetryChannelClosed)));
}
