//! # Circle Area
//!
//! One capability, four providers. Each provider computes `π × r²` and they
//! differ only in where `π` comes from:
//!
//! ```text
//! MathConstantsClass::PI ──────────────► ClassConstantArea
//! MathConstants (inherited Self::PI) ──► InterfaceConstantArea
//! math_constants::PI (qualified) ──────► QualifiedInterfaceConstantArea
//! local PI = 200 shadows MathConstants ► ShadowedConstantArea
//! ```
//!
//! The first three agree on `3.14 × r²`. The fourth redeclares `PI` locally
//! and computes `200 × r²`; its inherited value stays reachable only by
//! qualification.
//!
//! ## Example
//!
//! ```rust
//! use circle_area::{CircleArea, ProviderKind};
//!
//! for kind in ProviderKind::ALL {
//!     let area = kind.build().calculate(1.0);
//!     assert_eq!(area == 3.14, kind != ProviderKind::ShadowedConstant);
//! }
//! ```

pub mod capability;
pub mod error;
pub mod kind;
pub mod math_constants;
pub mod providers;
pub mod report;
pub mod resolution;

// Re-export public API
pub use capability::CircleArea;
pub use error::AreaError;
pub use kind::ProviderKind;
pub use math_constants::MathConstants;
pub use providers::{
    ClassConstantArea, InterfaceConstantArea, QualifiedInterfaceConstantArea,
    ShadowedConstantArea,
};
pub use report::{evaluate, evaluate_all, AreaReport};
pub use resolution::{ConstantLookup, ConstantScope, ConstantTable};

#[cfg(test)]
mod tests;
