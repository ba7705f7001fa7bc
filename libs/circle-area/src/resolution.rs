//! # Constant Resolution
//!
//! Explicit model of how a provider finds `PI`, independent of the
//! compiler's own rules.
//!
//! ## Resolution Rules
//!
//! - Unqualified names check the local table first, then inherited tables
//!   in declaration order
//! - A local declaration shadows every inherited one of the same name
//! - Qualified names go straight to the named owner, which only has to be
//!   reachable (local, inherited, or merely visible)
//!
//! ## Example
//!
//! ```rust
//! use circle_area::resolution::{ConstantScope, ConstantTable};
//!
//! let scope = ConstantScope::new("Shadowing")
//!     .with_local("PI", 200.0)
//!     .inherit(ConstantTable::math_constants());
//!
//! assert_eq!(scope.resolve("PI").unwrap(), 200.0);
//! assert_eq!(scope.resolve_qualified("MathConstants", "PI").unwrap(), 3.14);
//! ```

use crate::error::AreaError;
use config::constants::{MathConstantsClass, PI};
use std::collections::HashMap;
use tracing::debug;

/// Owner name of the plain data-holder table.
pub const CLASS_OWNER: &str = "MathConstantsClass";
/// Owner name of the constant-bearing capability table.
pub const CAPABILITY_OWNER: &str = "MathConstants";

// =============================================================================
// TABLE
// =============================================================================

/// Named constants declared by a single owner.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantTable {
    owner: String,
    bindings: HashMap<String, f64>,
}

impl ConstantTable {
    /// Create an empty table for `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            bindings: HashMap::new(),
        }
    }

    /// Table of the plain data holder, declaring `PI`.
    pub fn math_constants_class() -> Self {
        Self::new(CLASS_OWNER).with("PI", MathConstantsClass::PI)
    }

    /// Table of the constant-bearing capability, declaring `PI`.
    pub fn math_constants() -> Self {
        Self::new(CAPABILITY_OWNER).with("PI", PI)
    }

    /// Builder form of [`define`](Self::define).
    pub fn with(mut self, name: &str, value: f64) -> Self {
        self.define(name, value);
        self
    }

    /// Declare `name`, replacing any earlier declaration in this table.
    pub fn define(&mut self, name: &str, value: f64) {
        self.bindings.insert(name.to_string(), value);
    }

    /// Value declared under `name` in this table only.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.bindings.get(name).copied()
    }

    /// Name of the declaring entity.
    pub fn owner(&self) -> &str {
        &self.owner
    }
}

// =============================================================================
// LOOKUP
// =============================================================================

/// How a provider names the constant it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstantLookup {
    /// Bare name, resolved through the scope chain.
    Unqualified,
    /// Name prefixed with its declaring owner.
    Qualified {
        /// The declaring owner.
        owner: String,
    },
}

impl ConstantLookup {
    /// Qualified lookup through `owner`.
    pub fn qualified(owner: impl Into<String>) -> Self {
        Self::Qualified {
            owner: owner.into(),
        }
    }
}

// =============================================================================
// SCOPE
// =============================================================================

/// The constants reachable from inside one provider.
///
/// `local` holds the provider's own declarations, `inherited` the tables of
/// the capabilities it implements, and `visible` tables it can only name.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantScope {
    local: ConstantTable,
    inherited: Vec<ConstantTable>,
    visible: Vec<ConstantTable>,
}

impl ConstantScope {
    /// Scope with an empty local table owned by `owner`.
    pub fn new(owner: impl Into<String>) -> Self {
        Self {
            local: ConstantTable::new(owner),
            inherited: Vec::new(),
            visible: Vec::new(),
        }
    }

    /// Declare a local constant.
    pub fn with_local(mut self, name: &str, value: f64) -> Self {
        self.local.define(name, value);
        self
    }

    /// Inherit every constant of `table` for unqualified lookups.
    pub fn inherit(mut self, table: ConstantTable) -> Self {
        self.inherited.push(table);
        self
    }

    /// Make `table` reachable for qualified lookups only.
    pub fn see(mut self, table: ConstantTable) -> Self {
        self.visible.push(table);
        self
    }

    /// Owner of the local table.
    pub fn owner(&self) -> &str {
        self.local.owner()
    }

    /// True when a local declaration hides an inherited one of the same name.
    pub fn shadows(&self, name: &str) -> bool {
        self.local.get(name).is_some() && self.inherited.iter().any(|t| t.get(name).is_some())
    }

    /// Resolve an unqualified name: local first, then inherited.
    pub fn resolve(&self, name: &str) -> Result<f64, AreaError> {
        let found = std::iter::once(&self.local)
            .chain(self.inherited.iter())
            .find_map(|table| table.get(name).map(|value| (table.owner(), value)));

        match found {
            Some((from, value)) => {
                debug!(scope = self.owner(), name, from, value, "resolved unqualified constant");
                Ok(value)
            }
            None => Err(AreaError::UnresolvedConstant {
                scope: self.owner().to_string(),
                name: name.to_string(),
            }),
        }
    }

    /// Resolve `owner::name`, skipping the local/inherited search order.
    pub fn resolve_qualified(&self, owner: &str, name: &str) -> Result<f64, AreaError> {
        let table = std::iter::once(&self.local)
            .chain(self.inherited.iter())
            .chain(self.visible.iter())
            .find(|table| table.owner() == owner)
            .ok_or_else(|| AreaError::UnknownSource {
                owner: owner.to_string(),
                name: name.to_string(),
            })?;

        let value = table.get(name).ok_or_else(|| AreaError::UnresolvedConstant {
            scope: owner.to_string(),
            name: name.to_string(),
        })?;
        debug!(scope = self.owner(), owner, name, value, "resolved qualified constant");
        Ok(value)
    }

    /// Resolve `name` the way `lookup` describes.
    pub fn resolve_lookup(&self, lookup: &ConstantLookup, name: &str) -> Result<f64, AreaError> {
        match lookup {
            ConstantLookup::Unqualified => self.resolve(name),
            ConstantLookup::Qualified { owner } => self.resolve_qualified(owner, name),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
