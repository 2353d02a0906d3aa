use super::*;

#[test]
fn test_linear_unbounded_space_normalize_value() {
    let space = LinearUnboundedSpace::new();
    assert_eq!(space.normalize_value(5.0), 5.0);
    assert_eq!(space.normalize_value(-3.0), -3.0);
    assert_eq!(space.normalize_value(720.0), 720.0);
}

#[test]
fn test_linear_unbounded_space_smallest_distance_between_values() {
    let space = LinearUnboundedSpace::new();
    assert_eq!(space.smallest_distance_between_values(1.0, 4.0), 3.0);
    assert_eq!(space.smallest_distance_between_values(10.0, 350.0), 340.0);
    assert_eq!(space.smallest_distance_between_values(0.0, 0.0), 0.0);
}

#[test]
fn test_periodic_space_normalize_value_degrees() {
    let space = PeriodicSpace::new(0.0, 360.0);
    assert_eq!(space.normalize_value(370.0), 10.0);
    assert_eq!(space.normalize_value(-90.0), 270.0);
    assert_eq!(space.normalize_value(360.0), 0.0);
    assert_eq!(space.normalize_value(0.0), 0.0);
}

#[test]
fn test_periodic_space_normalize_value_symmetric_range() {
    let space = PeriodicSpace::new(-180.0, 180.0);
    assert_eq!(space.normalize_value(190.0), -170.0);
    assert_eq!(space.normalize_value(-190.0), 170.0);
    assert_eq!(space.normalize_value(180.0), -180.0);
    assert_eq!(space.normalize_value(45.0), 45.0);
}

#[test]
fn test_periodic_space_smallest_distance_crosses_boundary() {
    let space = PeriodicSpace::new(0.0, 360.0);
    assert_eq!(space.smallest_distance_between_values(10.0, 350.0), -20.0);
    assert_eq!(space.smallest_distance_between_values(350.0, 10.0), 20.0);
    assert_eq!(space.smallest_distance_between_values(0.0, 90.0), 90.0);
}

#[test]
fn test_periodic_space_smallest_distance_with_unwrapped_inputs() {
    let space = PeriodicSpace::new(-180.0, 180.0);
    assert_eq!(space.smallest_distance_between_values(720.0, 30.0), 30.0);
    assert_eq!(space.smallest_distance_between_values(-30.0, 30.0), 60.0);
}

#[test]
fn test_to_number_space_creates_matching_space() {
    let linear = to_number_space(NumberSpaceType::LinearUnlimited);
    assert_eq!(linear.smallest_distance_between_values(10.0, 350.0), 340.0);

    let periodic = to_number_space(NumberSpaceType::Periodic {
        minimum: 0.0,
        maximum: 360.0,
    });
    assert_eq!(periodic.smallest_distance_between_values(10.0, 350.0), -20.0);
}
