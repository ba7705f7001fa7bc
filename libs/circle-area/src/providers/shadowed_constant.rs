//! Area through a local constant that shadows the inherited one.

use crate::capability::CircleArea;
use crate::math_constants::MathConstants;
use config::constants::SHADOWED_PI;

/// Implements [`MathConstants`] but also declares an inherent `PI`.
///
/// Inherent associated items take precedence over trait items, so every
/// `Self::PI` in this type reads 200 rather than 3.14. Only the qualified
/// form `<Self as MathConstants>::PI` reaches the inherited value.
///
/// ## Example
///
/// ```rust
/// use circle_area::{CircleArea, ShadowedConstantArea};
///
/// let provider = ShadowedConstantArea;
/// assert_eq!(provider.calculate(1.0), 200.0);
/// assert_eq!(provider.calculate_qualified(1.0), 3.14);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShadowedConstantArea;

impl ShadowedConstantArea {
    const PI: f64 = SHADOWED_PI;

    /// The `PI` this type inherits from [`MathConstants`], bypassing the
    /// local declaration.
    pub fn inherited_pi(&self) -> f64 {
        <Self as MathConstants>::PI
    }

    /// The `PI` an unqualified lookup inside this type resolves to.
    pub fn local_pi(&self) -> f64 {
        Self::PI
    }

    /// Area computed with the qualified, inherited `PI`.
    pub fn calculate_qualified(&self, radius: f64) -> f64 {
        <Self as MathConstants>::PI * radius * radius
    }
}

impl MathConstants for ShadowedConstantArea {}

impl CircleArea for ShadowedConstantArea {
    fn calculate(&self, radius: f64) -> f64 {
        Self::PI * radius * radius
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::approx_constant)]

    use super::*;

    #[test]
    fn test_local_constant_wins() {
        assert_eq!(ShadowedConstantArea.local_pi(), 200.0);
        assert_eq!(ShadowedConstantArea.calculate(1.0), 200.0);
    }

    #[test]
    fn test_qualified_lookup_bypasses_shadow() {
        assert_eq!(ShadowedConstantArea.inherited_pi(), 3.14);
        assert_eq!(ShadowedConstantArea.calculate_qualified(1.0), 3.14);
        assert_eq!(ShadowedConstantArea.calculate_qualified(2.0), 12.56);
    }

    #[test]
    fn test_shadowing_does_not_override_trait_value() {
        assert_eq!(
            <ShadowedConstantArea as MathConstants>::PI,
            crate::math_constants::PI
        );
    }
}
