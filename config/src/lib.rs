//! # Config Crate
//!
//! Centralized constants for the circle-area providers. Every literal an
//! area computation reads is defined here once, so that the providers only
//! differ in *how* they reach a value, never in the value itself.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{MathConstantsClass, PI, SHADOWED_PI};
//!
//! assert_eq!(MathConstantsClass::PI, PI);
//! assert!(SHADOWED_PI > PI);
//! ```

pub mod constants;

pub use constants::{ConfigError, GlobalConfig, MathConstantsClass};
