//! Area through a constant inherited from the capability.

use crate::capability::CircleArea;
use crate::math_constants::MathConstants;

/// Implements [`MathConstants`] and reads the inherited `PI` unqualified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterfaceConstantArea;

impl MathConstants for InterfaceConstantArea {}

impl CircleArea for InterfaceConstantArea {
    fn calculate(&self, radius: f64) -> f64 {
        Self::PI * radius * radius
    }
}
