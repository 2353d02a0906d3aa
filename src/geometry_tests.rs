use std::f64::consts::{FRAC_PI_2, PI};

use float_cmp::{ApproxEq, F64Margin};

use super::*;

fn assert_close(expected: f64, actual: f64) {
    assert!(
        actual.approx_eq(
            expected,
            F64Margin {
                ulps: 4,
                epsilon: 1e-9
            }
        ),
        "expected {} but got {}",
        expected,
        actual
    );
}

#[test]
fn when_creating_pose_should_store_position_and_heading() {
    let pose = Pose2d::new(1.5, -2.0, 0.25);

    assert_close(1.5, pose.x());
    assert_close(-2.0, pose.y());
    assert_close(0.25, pose.heading());
}

#[test]
fn when_creating_default_pose_should_be_at_origin() {
    let pose = Pose2d::default();

    assert_eq!(Pose2d::origin(), pose);
    assert_close(0.0, pose.x());
    assert_close(0.0, pose.y());
    assert_close(0.0, pose.heading());
}

#[test]
fn when_integrating_straight_twist_should_move_along_heading() {
    let pose = Pose2d::new(1.0, 1.0, FRAC_PI_2);

    let result = pose.exp(&Twist2d::new(2.0, 0.0, 0.0));

    assert_close(1.0, result.x());
    assert_close(3.0, result.y());
    assert_close(FRAC_PI_2, result.heading());
}

#[test]
fn when_integrating_quarter_arc_should_end_on_the_circle() {
    // A quarter circle with radius 1, starting at the origin facing +x.
    let pose = Pose2d::origin();

    let result = pose.exp(&Twist2d::new(FRAC_PI_2, 0.0, FRAC_PI_2));

    assert_close(1.0, result.x());
    assert_close(1.0, result.y());
    assert_close(FRAC_PI_2, result.heading());
}

#[test]
fn when_integrating_pure_rotation_should_stay_in_place() {
    let pose = Pose2d::new(0.5, 0.5, 0.0);

    let result = pose.exp(&Twist2d::new(0.0, 0.0, PI / 4.0));

    assert_close(0.5, result.x());
    assert_close(0.5, result.y());
    assert_close(PI / 4.0, result.heading());
}

#[test]
fn when_replacing_heading_should_keep_translation() {
    let pose = Pose2d::new(3.0, 4.0, 0.1);

    let result = pose.with_heading(-1.0);

    assert_close(3.0, result.x());
    assert_close(4.0, result.y());
    assert_close(-1.0, result.heading());
}

#[test]
fn when_transforming_pose_should_apply_transform_in_pose_frame() {
    let pose = Pose2d::new(0.0, 0.0, FRAC_PI_2);
    let transform = Transform2d::new(1.0, 0.0, 0.0);

    let result = pose.transform_by(&transform);

    assert_close(0.0, result.x());
    assert_close(1.0, result.y());
}

#[test]
fn when_creating_transform_should_store_translation_and_rotation() {
    let transform = Transform2d::new(2.0, -1.0, -0.5);

    assert_close(2.0, transform.x());
    assert_close(-1.0, transform.y());
    assert_close(-0.5, transform.rotation());
}
