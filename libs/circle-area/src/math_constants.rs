//! # Constant-Bearing Capability
//!
//! [`MathConstants`] composes [`CircleArea`] and carries `PI` as a provided
//! associated constant. Implementers read it unqualified as `Self::PI`
//! unless they declare an inherent `PI` of their own, which then wins for
//! every `Self::PI` lookup in that type. `<T as MathConstants>::PI` always
//! reaches the inherited value.
//!
//! The same value is exported as the module-level [`PI`] so that code which
//! never implements the trait can still qualify it as `math_constants::PI`.

use crate::capability::CircleArea;

/// π as declared by the constant-bearing capability.
pub const PI: f64 = config::constants::PI;

/// Capability that brings `PI` into every implementer's scope.
///
/// ## Example
///
/// ```rust
/// use circle_area::math_constants::MathConstants;
/// use circle_area::InterfaceConstantArea;
///
/// assert_eq!(<InterfaceConstantArea as MathConstants>::PI, 3.14);
/// ```
pub trait MathConstants: CircleArea {
    /// Inherited π.
    const PI: f64 = PI;
}
