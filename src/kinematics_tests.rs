use float_cmp::{ApproxEq, F64Margin};

use super::*;

const MARGIN: F64Margin = F64Margin {
    ulps: 4,
    epsilon: 1e-9,
};

fn assert_wheels_close(expected: MecanumWheelSpeeds, actual: MecanumWheelSpeeds) {
    for (e, a) in expected.as_array().iter().zip(actual.as_array().iter()) {
        assert!(
            (*a).approx_eq(*e, MARGIN),
            "expected {:?} but got {:?}",
            expected,
            actual
        );
    }
}

fn square_kinematics() -> MecanumKinematics {
    MecanumKinematics::new(&WheelLocations::rectangular(0.25, 0.25)).unwrap()
}

// MecanumWheelSpeeds

#[test]
fn when_speeds_are_within_limit_desaturate_should_not_change_them() {
    let speeds = MecanumWheelSpeeds::new(0.5, -0.25, 1.0, -1.0);

    assert_eq!(speeds, speeds.desaturate(1.0));
}

#[test]
fn when_speeds_exceed_limit_desaturate_should_scale_proportionally() {
    let speeds = MecanumWheelSpeeds::new(2.0, -1.0, 0.5, -4.0);

    let result = speeds.desaturate(1.0);

    assert_wheels_close(MecanumWheelSpeeds::new(0.5, -0.25, 0.125, -1.0), result);
}

#[test]
fn when_scaling_speeds_should_multiply_each_wheel() {
    let speeds = MecanumWheelSpeeds::new(1.0, 2.0, 3.0, 4.0);

    assert_eq!(
        MecanumWheelSpeeds::new(0.5, 1.0, 1.5, 2.0),
        speeds.scale(0.5)
    );
}

// MecanumKinematics

#[test]
fn when_wheels_share_a_point_kinematics_should_be_singular() {
    let locations = WheelLocations::rectangular(0.0, 0.0);

    let result = MecanumKinematics::new(&locations);

    assert!(matches!(result, Err(Error::SingularKinematics)));
}

#[test]
fn when_driving_forward_all_wheels_should_turn_forward() {
    let kinematics = square_kinematics();

    let speeds = kinematics.to_wheel_speeds(&ChassisSpeeds::new(1.0, 0.0, 0.0));

    assert_wheels_close(MecanumWheelSpeeds::new(1.0, 1.0, 1.0, 1.0), speeds);
}

#[test]
fn when_strafing_left_diagonal_wheels_should_oppose() {
    let kinematics = square_kinematics();

    let speeds = kinematics.to_wheel_speeds(&ChassisSpeeds::new(0.0, 1.0, 0.0));

    assert_wheels_close(MecanumWheelSpeeds::new(-1.0, 1.0, 1.0, -1.0), speeds);
}

#[test]
fn when_rotating_counter_clockwise_left_wheels_should_turn_backward() {
    let kinematics = square_kinematics();

    let speeds = kinematics.to_wheel_speeds(&ChassisSpeeds::new(0.0, 0.0, 1.0));

    assert_wheels_close(MecanumWheelSpeeds::new(-0.5, 0.5, -0.5, 0.5), speeds);
}

#[test]
fn when_all_wheels_turn_equally_chassis_should_move_forward() {
    let kinematics = square_kinematics();

    let chassis = kinematics.to_chassis_speeds(&MecanumWheelSpeeds::new(2.0, 2.0, 2.0, 2.0));

    assert!(chassis.vx.approx_eq(2.0, MARGIN));
    assert!(chassis.vy.approx_eq(0.0, MARGIN));
    assert!(chassis.omega.approx_eq(0.0, MARGIN));
}

#[test]
fn when_converting_back_and_forth_chassis_speeds_should_be_recovered() {
    let kinematics =
        MecanumKinematics::new(&WheelLocations::rectangular(0.3, 0.2)).unwrap();
    let chassis = ChassisSpeeds::new(0.3, -0.2, 0.5);

    let result = kinematics.to_chassis_speeds(&kinematics.to_wheel_speeds(&chassis));

    assert!(result.vx.approx_eq(chassis.vx, MARGIN));
    assert!(result.vy.approx_eq(chassis.vy, MARGIN));
    assert!(result.omega.approx_eq(chassis.omega, MARGIN));
}

// MecanumMixer

#[test]
fn when_mixing_forward_intent_all_outputs_should_match() {
    let mixer = MecanumMixer::default();

    let outputs = mixer.drive_cartesian(0.5, 0.0, 0.0, 0.0);

    assert_wheels_close(MecanumWheelSpeeds::new(0.5, 0.5, 0.5, 0.5), outputs);
}

#[test]
fn when_mixing_strafe_right_intent_diagonals_should_oppose() {
    let mixer = MecanumMixer::default();

    let outputs = mixer.drive_cartesian(0.0, 0.5, 0.0, 0.0);

    assert_wheels_close(MecanumWheelSpeeds::new(0.5, -0.5, -0.5, 0.5), outputs);
}

#[test]
fn when_mixing_clockwise_rotation_sides_should_oppose() {
    let mixer = MecanumMixer::default();

    let outputs = mixer.drive_cartesian(0.0, 0.0, 0.3, 0.0);

    assert_wheels_close(MecanumWheelSpeeds::new(0.3, -0.3, 0.3, -0.3), outputs);
}

#[test]
fn when_mixing_saturated_intent_outputs_should_be_desaturated() {
    let mixer = MecanumMixer::default();

    let outputs = mixer.drive_cartesian(1.0, 1.0, 0.0, 0.0);

    assert_wheels_close(MecanumWheelSpeeds::new(1.0, 0.0, 0.0, 1.0), outputs);
}

#[test]
fn when_mixing_with_gyro_angle_translation_should_be_rotated() {
    let mixer = MecanumMixer::default();

    // A forward intent rotated by -90 degrees becomes a strafe to the right.
    let outputs = mixer.drive_cartesian(0.5, 0.0, 0.0, 90.0);

    assert_wheels_close(MecanumWheelSpeeds::new(0.5, -0.5, -0.5, 0.5), outputs);
}

#[test]
fn when_mixing_with_deadband_small_inputs_should_be_ignored() {
    let mixer = MecanumMixer::new(0.1, 1.0);

    assert_wheels_close(
        MecanumWheelSpeeds::default(),
        mixer.drive_cartesian(0.05, -0.05, 0.0, 0.0),
    );
    assert_wheels_close(
        MecanumWheelSpeeds::new(0.5, 0.5, 0.5, 0.5),
        mixer.drive_cartesian(0.55, 0.0, 0.0, 0.0),
    );
}

#[test]
fn when_mixing_with_reduced_max_output_outputs_should_be_scaled() {
    let mixer = MecanumMixer::new(0.0, 0.5);

    let outputs = mixer.drive_cartesian(1.0, 0.0, 0.0, 0.0);

    assert_wheels_close(MecanumWheelSpeeds::new(0.5, 0.5, 0.5, 0.5), outputs);
}

#[test]
fn when_mixing_nan_intent_should_pass_it_through() {
    let mixer = MecanumMixer::default();

    let outputs = mixer.drive_cartesian(f64::NAN, 0.0, 0.0, 0.0);

    assert!(outputs.as_array().iter().all(|v| v.is_nan()));
}
