//! Row abstraction consumed by the engine.

use std::fmt::Debug;

/// A row of tabular data with a unique, stable identifier.
///
/// Field access goes through a [`crate::TableSchema`]; the trait itself only
/// exposes the identity used by selection and expansion tracking.
pub trait Record {
    /// Identifier type; must be totally ordered so id sets iterate deterministically.
    type Id: Ord + Clone + Debug;

    /// Stable identifier for this row.
    fn id(&self) -> Self::Id;
}
