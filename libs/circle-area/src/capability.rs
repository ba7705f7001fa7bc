//! # Circle Area Capability
//!
//! The single contract every provider implements.

/// Computes the area of a circle from its radius.
///
/// Any finite radius is accepted, including zero and negative values; no
/// validation is performed and the call has no side effects.
///
/// ## Example
///
/// ```rust
/// use circle_area::{CircleArea, ClassConstantArea};
///
/// let area = ClassConstantArea.calculate(2.0);
/// assert_eq!(area, 12.56);
/// ```
pub trait CircleArea: Send + Sync {
    /// Area of a circle with the given `radius`.
    fn calculate(&self, radius: f64) -> f64;
}

impl<T: CircleArea + ?Sized> CircleArea for Box<T> {
    fn calculate(&self, radius: f64) -> f64 {
        (**self).calculate(radius)
    }
}

impl<T: CircleArea + ?Sized> CircleArea for &T {
    fn calculate(&self, radius: f64) -> f64 {
        (**self).calculate(radius)
    }
}
