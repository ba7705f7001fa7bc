//! Area through an explicitly qualified capability constant.

use crate::capability::CircleArea;
use crate::math_constants;

/// Implements only [`CircleArea`] and qualifies `PI` through the
/// constant-bearing capability's module. Visibility is enough; no
/// `MathConstants` impl exists for this type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QualifiedInterfaceConstantArea;

impl CircleArea for QualifiedInterfaceConstantArea {
    fn calculate(&self, radius: f64) -> f64 {
        math_constants::PI * radius * radius
    }
}
