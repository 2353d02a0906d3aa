use super::*;

#[test]
fn test_new_instance() {
    let configuration = MotorConfiguration::new(30, 11.0, 0.5);

    assert_eq!(configuration.current_limit_in_amps(), 30);
    assert_eq!(configuration.nominal_voltage(), 11.0);
    assert_eq!(configuration.open_loop_ramp_rate_in_seconds(), 0.5);
}

#[test]
fn test_default_instance() {
    let configuration = MotorConfiguration::default();

    assert_eq!(configuration.current_limit_in_amps(), 40);
    assert_eq!(configuration.nominal_voltage(), 12.0);
    assert_eq!(configuration.open_loop_ramp_rate_in_seconds(), 0.2);
}

#[test]
fn test_deserialize_partial_document_uses_defaults() {
    let configuration: MotorConfiguration = toml::from_str("current_limit_in_amps = 35").unwrap();

    assert_eq!(configuration.current_limit_in_amps(), 35);
    assert_eq!(configuration.nominal_voltage(), 12.0);
    assert_eq!(configuration.open_loop_ramp_rate_in_seconds(), 0.2);
}

#[test]
fn test_wheel_names() {
    assert_eq!(WheelPosition::FrontLeft.name(), "front left");
    assert_eq!(WheelPosition::RearLeft.name(), "rear left");
    assert_eq!(WheelPosition::FrontRight.name(), "front right");
    assert_eq!(format!("{}", WheelPosition::RearRight), "rear right");
}

#[test]
fn test_wheel_order_matches_wiring() {
    assert_eq!(
        WheelPosition::ALL,
        [
            WheelPosition::FrontLeft,
            WheelPosition::RearLeft,
            WheelPosition::FrontRight,
            WheelPosition::RearRight,
        ]
    );
}
