//! # Provider Registry
//!
//! Names the four providers, builds them, and describes each one's
//! constant-resolution path in terms of [`crate::resolution`].

use crate::capability::CircleArea;
use crate::error::AreaError;
use crate::providers::{
    ClassConstantArea, InterfaceConstantArea, QualifiedInterfaceConstantArea,
    ShadowedConstantArea,
};
use crate::resolution::{
    ConstantLookup, ConstantScope, ConstantTable, CAPABILITY_OWNER, CLASS_OWNER,
};
use config::constants::SHADOWED_PI;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Name every provider reads.
pub const PI_NAME: &str = "PI";

/// Identifies one of the four providers.
///
/// ## Example
///
/// ```rust
/// use circle_area::{CircleArea, ProviderKind};
///
/// let kind: ProviderKind = "shadowed-constant".parse().unwrap();
/// assert_eq!(kind.build().calculate(1.0), 200.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProviderKind {
    /// [`ClassConstantArea`].
    ClassConstant,
    /// [`InterfaceConstantArea`].
    InterfaceConstant,
    /// [`QualifiedInterfaceConstantArea`].
    QualifiedInterfaceConstant,
    /// [`ShadowedConstantArea`].
    ShadowedConstant,
}

impl ProviderKind {
    /// All providers in declaration order.
    pub const ALL: [ProviderKind; 4] = [
        ProviderKind::ClassConstant,
        ProviderKind::InterfaceConstant,
        ProviderKind::QualifiedInterfaceConstant,
        ProviderKind::ShadowedConstant,
    ];

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            ProviderKind::ClassConstant => "class-constant",
            ProviderKind::InterfaceConstant => "interface-constant",
            ProviderKind::QualifiedInterfaceConstant => "qualified-interface-constant",
            ProviderKind::ShadowedConstant => "shadowed-constant",
        }
    }

    /// Name of the provider type.
    pub fn type_name(self) -> &'static str {
        match self {
            ProviderKind::ClassConstant => "ClassConstantArea",
            ProviderKind::InterfaceConstant => "InterfaceConstantArea",
            ProviderKind::QualifiedInterfaceConstant => "QualifiedInterfaceConstantArea",
            ProviderKind::ShadowedConstant => "ShadowedConstantArea",
        }
    }

    /// Construct the provider.
    pub fn build(self) -> Box<dyn CircleArea> {
        debug!(provider = self.name(), "building circle area provider");
        match self {
            ProviderKind::ClassConstant => Box::new(ClassConstantArea),
            ProviderKind::InterfaceConstant => Box::new(InterfaceConstantArea),
            ProviderKind::QualifiedInterfaceConstant => Box::new(QualifiedInterfaceConstantArea),
            ProviderKind::ShadowedConstant => Box::new(ShadowedConstantArea),
        }
    }

    /// Constants reachable from inside the provider.
    pub fn scope(self) -> ConstantScope {
        let scope = ConstantScope::new(self.type_name());
        match self {
            ProviderKind::ClassConstant => scope.see(ConstantTable::math_constants_class()),
            ProviderKind::InterfaceConstant => scope.inherit(ConstantTable::math_constants()),
            ProviderKind::QualifiedInterfaceConstant => scope.see(ConstantTable::math_constants()),
            ProviderKind::ShadowedConstant => scope
                .with_local(PI_NAME, SHADOWED_PI)
                .inherit(ConstantTable::math_constants()),
        }
    }

    /// How the provider names `PI` in its computation.
    pub fn lookup(self) -> ConstantLookup {
        match self {
            ProviderKind::ClassConstant => ConstantLookup::qualified(CLASS_OWNER),
            ProviderKind::QualifiedInterfaceConstant => ConstantLookup::qualified(CAPABILITY_OWNER),
            ProviderKind::InterfaceConstant | ProviderKind::ShadowedConstant => {
                ConstantLookup::Unqualified
            }
        }
    }

    /// The `PI` the provider reads, according to the resolution model.
    pub fn resolved_pi(self) -> Result<f64, AreaError> {
        self.scope().resolve_lookup(&self.lookup(), PI_NAME)
    }

    /// True when a local declaration hides the inherited `PI`.
    pub fn shadows_inherited(self) -> bool {
        self.scope().shadows(PI_NAME)
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProviderKind {
    type Err = AreaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AreaError::UnknownProvider(s.to_string()))
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    #![allow(clippy::approx_constant)]

    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for kind in ProviderKind::ALL {
            assert_eq!(kind.name().parse::<ProviderKind>(), Ok(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn test_unknown_name() {
        assert_eq!(
            "circle".parse::<ProviderKind>(),
            Err(AreaError::UnknownProvider("circle".to_string()))
        );
    }

    #[test]
    fn test_resolved_pi_per_provider() {
        assert_eq!(ProviderKind::ClassConstant.resolved_pi(), Ok(3.14));
        assert_eq!(ProviderKind::InterfaceConstant.resolved_pi(), Ok(3.14));
        assert_eq!(ProviderKind::QualifiedInterfaceConstant.resolved_pi(), Ok(3.14));
        assert_eq!(ProviderKind::ShadowedConstant.resolved_pi(), Ok(200.0));
    }

    #[test]
    fn test_only_shadowed_provider_shadows() {
        for kind in ProviderKind::ALL {
            assert_eq!(
                kind.shadows_inherited(),
                kind == ProviderKind::ShadowedConstant,
                "{kind}"
            );
        }
    }

    #[test]
    fn test_qualified_provider_cannot_resolve_unqualified() {
        let scope = ProviderKind::QualifiedInterfaceConstant.scope();
        assert!(scope.resolve(PI_NAME).is_err());
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&ProviderKind::QualifiedInterfaceConstant).unwrap();
        assert_eq!(json, "\"qualified-interface-constant\"");
        let back: ProviderKind = serde_json::from_str("\"class-constant\"").unwrap();
        assert_eq!(back, ProviderKind::ClassConstant);
    }
}
