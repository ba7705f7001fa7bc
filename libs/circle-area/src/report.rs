//! # Area Report
//!
//! Evaluates providers side by side against the `3.14 * r * r` reference.

use crate::capability::CircleArea;
use crate::kind::ProviderKind;
use config::constants::{GlobalConfig, PI};
use serde::Serialize;
use tracing::debug;

/// Result of evaluating one provider at one radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaReport {
    /// Evaluated provider.
    pub kind: ProviderKind,
    /// Input radius.
    pub radius: f64,
    /// Area the provider computed.
    pub area: f64,
    /// `3.14 * radius * radius`.
    pub reference_area: f64,
    /// True when `area` differs from `reference_area` beyond tolerance.
    pub diverges: bool,
}

/// Evaluate `kind` at `radius`.
///
/// Divergence is relative to the reference, or absolute when the reference
/// is zero.
///
/// ## Example
///
/// ```rust
/// use circle_area::{report::evaluate, ProviderKind};
/// use config::GlobalConfig;
///
/// let report = evaluate(ProviderKind::ShadowedConstant, 1.0, &GlobalConfig::default());
/// assert!(report.diverges);
/// ```
pub fn evaluate(kind: ProviderKind, radius: f64, config: &GlobalConfig) -> AreaReport {
    let area = kind.build().calculate(radius);
    let reference_area = PI * radius * radius;
    let delta = (area - reference_area).abs();
    let diverges = if reference_area == 0.0 {
        delta > config.tolerance
    } else {
        delta / reference_area.abs() > config.tolerance
    };

    debug!(provider = kind.name(), radius, area, reference_area, diverges, "evaluated provider");

    AreaReport {
        kind,
        radius,
        area,
        reference_area,
        diverges,
    }
}

/// Evaluate every provider at the configured reference radius.
pub fn evaluate_all(config: &GlobalConfig) -> Vec<AreaReport> {
    ProviderKind::ALL
        .into_iter()
        .map(|kind| evaluate(kind, config.reference_radius, config))
        .collect()
}

/// Providers whose area diverges at the configured reference radius.
pub fn divergent(config: &GlobalConfig) -> Vec<ProviderKind> {
    evaluate_all(config)
        .into_iter()
        .filter(|report| report.diverges)
        .map(|report| report.kind)
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::approx_constant)]

    use super::*;

    #[test]
    fn test_reference_radius_flags_shadowed_only() {
        let config = GlobalConfig::default();
        assert_eq!(divergent(&config), vec![ProviderKind::ShadowedConstant]);
    }

    #[test]
    fn test_zero_radius_never_diverges() {
        let config = GlobalConfig::new(1.0e-9, 0.0).unwrap();
        for report in evaluate_all(&config) {
            assert_eq!(report.area, 0.0);
            assert!(!report.diverges, "{}", report.kind);
        }
    }

    #[test]
    fn test_report_fields() {
        let report = evaluate(ProviderKind::InterfaceConstant, 2.0, &GlobalConfig::default());
        assert_eq!(report.area, 12.56);
        assert_eq!(report.reference_area, 12.56);
        assert_eq!(report.radius, 2.0);
        assert!(!report.diverges);
    }

    #[test]
    fn test_report_serializes_kind_by_name() {
        let report = evaluate(ProviderKind::ShadowedConstant, 1.0, &GlobalConfig::default());
        let json = serde_json::to_value(report).unwrap();
        assert_eq!(json["kind"], "shadowed-constant");
        assert_eq!(json["area"], 200.0);
        assert_eq!(json["diverges"], true);
    }
}
