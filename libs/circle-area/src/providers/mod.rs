//! # Providers
//!
//! Four [`CircleArea`](crate::CircleArea) implementations that differ only
//! in where they read π from:
//!
//! | Provider | Implements | Reads |
//! |----------|------------|-------|
//! | [`ClassConstantArea`] | `CircleArea` | `MathConstantsClass::PI` |
//! | [`InterfaceConstantArea`] | `MathConstants`, `CircleArea` | `Self::PI` (inherited) |
//! | [`QualifiedInterfaceConstantArea`] | `CircleArea` | `math_constants::PI` |
//! | [`ShadowedConstantArea`] | `MathConstants`, `CircleArea` | `Self::PI` (local, 200) |

mod class_constant;
mod interface_constant;
mod qualified_constant;
mod shadowed_constant;

pub use class_constant::ClassConstantArea;
pub use interface_constant::InterfaceConstantArea;
pub use qualified_constant::QualifiedInterfaceConstantArea;
pub use shadowed_constant::ShadowedConstantArea;
