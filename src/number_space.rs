//! Defines different ways to describe a space of numbers and how these spaces behave at the
//! boundaries.
//!
//! A linear unbounded space has boundaries at +infinity and -infinity and never wraps around.
//! A periodic space has a finite size and wraps around at its boundaries, i.e. going backwards
//! from the lower boundary ends up directly at the upper boundary. Headings are the typical
//! example: -180 degrees and 180 degrees describe the same direction.
//!
//! The [to_number_space()] function creates either kind of space from a [NumberSpaceType].

#[cfg(test)]
#[path = "number_space_tests.rs"]
mod number_space_tests;

/// Defines the different kinds of number spaces available.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NumberSpaceType {
    /// Indicates that a number space is a linear number space where numbers sequentially
    /// increase from -infinity to +infinity.
    LinearUnlimited,

    /// Indicates that a number space is periodic, i.e. numbers increase from the
    /// `minimum` value up to the `maximum` value after which they wrap around to the
    /// `minimum` value again.
    Periodic {
        /// The lower boundary of the space.
        minimum: f64,
        /// The upper boundary of the space.
        maximum: f64,
    },
}

/// Defines an abstraction over number spaces
pub trait RealNumberValueSpace: Send + Sync {
    /// Returns the value in the space that is equivalent to the given value.
    ///
    /// ## Parameters
    ///
    /// * `value` - The value that should be normalized.
    ///
    /// ## Example
    ///
    /// ```
    /// use mecanum_subsystems::number_space::{ NumberSpaceType, to_number_space };
    ///
    /// let space = to_number_space(NumberSpaceType::Periodic { minimum: -180.0, maximum: 180.0 });
    /// assert_eq!(-90.0, space.normalize_value(270.0));
    /// ```
    fn normalize_value(&self, value: f64) -> f64;

    /// Returns the smallest signed distance needed to go from `start` to `end`.
    ///
    /// For linear spaces this is simply `end - start`. For periodic spaces the path across
    /// the boundary is taken if it is shorter.
    ///
    /// ## Example
    ///
    /// ```
    /// use mecanum_subsystems::number_space::{ NumberSpaceType, to_number_space };
    ///
    /// let space = to_number_space(NumberSpaceType::Periodic { minimum: 0.0, maximum: 360.0 });
    /// assert_eq!(-20.0, space.smallest_distance_between_values(10.0, 350.0));
    /// ```
    fn smallest_distance_between_values(&self, start: f64, end: f64) -> f64;
}

/// The linear number space, ranging from -infinity to +infinity.
pub(crate) struct LinearUnboundedSpace {}

impl LinearUnboundedSpace {
    pub fn new() -> LinearUnboundedSpace {
        LinearUnboundedSpace {}
    }
}

impl RealNumberValueSpace for LinearUnboundedSpace {
    fn normalize_value(&self, value: f64) -> f64 {
        value
    }

    fn smallest_distance_between_values(&self, start: f64, end: f64) -> f64 {
        end - start
    }
}

/// A number space that wraps around once every period.
pub(crate) struct PeriodicSpace {
    minimum: f64,
    range_size: f64,
}

impl PeriodicSpace {
    pub fn new(minimum: f64, maximum: f64) -> PeriodicSpace {
        PeriodicSpace {
            minimum,
            range_size: maximum - minimum,
        }
    }

    /// Wraps the value into [minimum, minimum + range_size).
    fn wrap(&self, value: f64) -> f64 {
        let offset = (value - self.minimum).rem_euclid(self.range_size);
        self.minimum + offset
    }
}

impl RealNumberValueSpace for PeriodicSpace {
    fn normalize_value(&self, value: f64) -> f64 {
        self.wrap(value)
    }

    fn smallest_distance_between_values(&self, start: f64, end: f64) -> f64 {
        let half_range = 0.5 * self.range_size;
        let diff = (end - start).rem_euclid(self.range_size);
        if diff > half_range {
            diff - self.range_size
        } else {
            diff
        }
    }
}

/// Returns a [RealNumberValueSpace] instance for the given number space type.
///
/// ```
/// use mecanum_subsystems::number_space::{ NumberSpaceType, to_number_space };
///
/// let space = to_number_space(NumberSpaceType::LinearUnlimited);
/// assert_eq!(1.0, space.smallest_distance_between_values(1.0, 2.0));
/// ```
pub fn to_number_space(number_space_type: NumberSpaceType) -> Box<dyn RealNumberValueSpace> {
    match number_space_type {
        NumberSpaceType::LinearUnlimited => Box::new(LinearUnboundedSpace::new()),
        NumberSpaceType::Periodic { minimum, maximum } => {
            Box::new(PeriodicSpace::new(minimum, maximum))
        }
    }
}
