use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mecanum_subsystems::{
    geometry::Pose2d,
    kinematics::{ChassisSpeeds, MecanumKinematics, MecanumMixer, MecanumWheelSpeeds, WheelLocations},
    odometry::MecanumOdometry,
};

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets =
        mixer_drive_cartesian,
        kinematics_to_wheel_speeds,
        kinematics_to_chassis_speeds,
        odometry_update,
}

criterion_main!(benches);

fn kinematics() -> MecanumKinematics {
    match MecanumKinematics::new(&WheelLocations::default()) {
        Ok(k) => k,
        Err(e) => panic!("Failed to create the kinematics: {}", e),
    }
}

pub fn mixer_drive_cartesian(c: &mut Criterion) {
    let mixer = MecanumMixer::new(0.0, 1.0);

    c.bench_function("MecanumMixer::drive_cartesian", |b| {
        b.iter(|| {
            mixer.drive_cartesian(
                black_box(0.6),
                black_box(-0.3),
                black_box(0.2),
                black_box(-37.0),
            )
        })
    });
}

pub fn kinematics_to_wheel_speeds(c: &mut Criterion) {
    let kinematics = kinematics();
    let speeds = ChassisSpeeds::new(1.5, -0.5, 0.8);

    c.bench_function("MecanumKinematics::to_wheel_speeds", |b| {
        b.iter(|| kinematics.to_wheel_speeds(black_box(&speeds)))
    });
}

pub fn kinematics_to_chassis_speeds(c: &mut Criterion) {
    let kinematics = kinematics();
    let speeds = MecanumWheelSpeeds::new(1.0, 2.0, 1.5, 0.5);

    c.bench_function("MecanumKinematics::to_chassis_speeds", |b| {
        b.iter(|| kinematics.to_chassis_speeds(black_box(&speeds)))
    });
}

pub fn odometry_update(c: &mut Criterion) {
    let mut odometry = MecanumOdometry::new(kinematics(), 0.0, Pose2d::origin());
    let speeds = MecanumWheelSpeeds::new(1.0, 2.0, 1.5, 0.5);
    let mut angle = 0.0;

    c.bench_function("MecanumOdometry::update", |b| {
        b.iter(|| {
            angle += 0.001;
            odometry.update(black_box(angle), black_box(&speeds), black_box(0.02))
        })
    });
}
