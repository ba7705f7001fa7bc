//! Area through a constant owned by a plain data holder.

use crate::capability::CircleArea;
use config::constants::MathConstantsClass;

/// Reads π from [`MathConstantsClass`], which is not a capability this type
/// implements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClassConstantArea;

impl CircleArea for ClassConstantArea {
    fn calculate(&self, radius: f64) -> f64 {
        MathConstantsClass::PI * radius * radius
    }
}
