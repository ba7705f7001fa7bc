//! Numeric values shared by every circle-area provider.
//!
//! Each public item documents its purpose and provides a minimal usage
//! example so that downstream crates can stay declarative and avoid
//! scattering literals.

use thiserror::Error;

// =============================================================================
// AREA CONSTANTS
// =============================================================================

/// Two-decimal approximation of π used by all area computations.
///
/// Areas are compared exactly against `3.14 * r * r`, so this must stay the
/// literal `3.14` and never become `std::f64::consts::PI`.
///
/// # Examples
/// ```
/// use config::constants::PI;
/// assert_eq!(PI * 2.0 * 2.0, 12.56);
/// ```
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.14;

/// Value a shadowing provider redeclares under the name `PI`.
///
/// # Examples
/// ```
/// use config::constants::SHADOWED_PI;
/// assert_eq!(SHADOWED_PI, 200.0);
/// ```
pub const SHADOWED_PI: f64 = 200.0;

/// Radius the reference checks evaluate every provider at.
pub const REFERENCE_RADIUS: f64 = 1.0;

/// Relative tolerance used when deciding whether two areas diverge.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// CONSTANT HOLDER
// =============================================================================

/// Plain data holder exposing [`PI`] as an associated constant.
///
/// Carries no behavior and implements no capability; consumers reach the
/// value by qualifying it with the type name.
///
/// # Examples
/// ```
/// use config::constants::MathConstantsClass;
/// let area = MathConstantsClass::PI * 1.0 * 1.0;
/// assert_eq!(area, 3.14);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MathConstantsClass;

impl MathConstantsClass {
    /// Same value as [`PI`].
    pub const PI: f64 = PI;
}

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of the settings used when comparing providers.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// assert_eq!(config.reference_radius, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Relative tolerance for divergence checks.
    pub tolerance: f64,
    /// Radius at which providers are compared by default.
    pub reference_radius: f64,
}

impl GlobalConfig {
    /// Builds a configuration, validating the supplied tolerance and radius.
    ///
    /// Negative and zero radii are accepted; only non-finite ones are not.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 2.0).expect("valid config");
    /// assert_eq!(cfg.reference_radius, 2.0);
    /// ```
    pub fn new(tolerance: f64, reference_radius: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !reference_radius.is_finite() {
            return Err(ConfigError::InvalidRadius(reference_radius));
        }
        Ok(Self {
            tolerance,
            reference_radius,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            reference_radius: REFERENCE_RADIUS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative, or not finite.
    #[error("tolerance must be positive and finite: {0}")]
    InvalidTolerance(f64),
    /// Raised when the reference radius is NaN or infinite.
    #[error("reference_radius must be finite: {0}")]
    InvalidRadius(f64),
}
