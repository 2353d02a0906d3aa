use float_cmp::{ApproxEq, F64Margin};

use super::*;

const MARGIN: F64Margin = F64Margin {
    ulps: 4,
    epsilon: 1e-9,
};

#[test]
fn when_only_proportional_gain_output_should_scale_error() {
    let mut controller = PidController::new(PidGains::new(0.5, 0.0, 0.0), 0.02);

    let output = controller.calculate(10.0, 30.0);

    assert!(output.approx_eq(10.0, MARGIN));
    assert!(controller.position_error().approx_eq(20.0, MARGIN));
}

#[test]
fn when_all_gains_are_zero_output_should_be_zero() {
    let mut controller = PidController::new(PidGains::default(), 0.02);

    assert_eq!(0.0, controller.calculate(0.0, 90.0));
    assert_eq!(0.0, controller.calculate(45.0, 90.0));
}

#[test]
fn when_derivative_gain_output_should_follow_error_change() {
    let mut controller = PidController::new(PidGains::new(0.0, 0.0, 0.1), 0.5);

    // First call: error goes from 0 to 1 in 0.5 seconds.
    let first = controller.calculate(0.0, 1.0);
    assert!(first.approx_eq(0.2, MARGIN));

    // Second call: error stays the same, so there is no derivative contribution.
    let second = controller.calculate(0.0, 1.0);
    assert!(second.approx_eq(0.0, MARGIN));
}

#[test]
fn when_integral_gain_output_should_accumulate() {
    let mut controller = PidController::new(PidGains::new(0.0, 1.0, 0.0), 0.1);

    let first = controller.calculate(0.0, 2.0);
    let second = controller.calculate(0.0, 2.0);

    assert!(first.approx_eq(0.2, MARGIN));
    assert!(second.approx_eq(0.4, MARGIN));
}

#[test]
fn when_integral_exceeds_range_it_should_be_clamped() {
    let mut controller = PidController::new(PidGains::new(0.0, 1.0, 0.0), 1.0);
    controller.set_integral_range(-0.5, 0.5);

    let output = controller.calculate(0.0, 10.0);

    assert!(output.approx_eq(0.5, MARGIN));
}

#[test]
fn when_input_is_continuous_error_should_take_the_short_way() {
    let mut controller = PidController::new(PidGains::new(1.0, 0.0, 0.0), 0.02);
    controller.enable_continuous_input(-180.0, 180.0);

    let output = controller.calculate(170.0, -170.0);

    assert!(output.approx_eq(20.0, MARGIN));
}

#[test]
fn when_reset_error_state_should_be_cleared() {
    let mut controller = PidController::new(PidGains::new(0.0, 1.0, 1.0), 1.0);
    controller.calculate(0.0, 0.5);

    controller.reset();

    assert_eq!(0.0, controller.position_error());
    // Without history the output only holds the fresh error contributions.
    let output = controller.calculate(0.0, 0.25);
    assert!(output.approx_eq(0.5, MARGIN));
}
