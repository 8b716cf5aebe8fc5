//! ia-reconcile
//!
//! Collection reconciliation for relationship option lists.
//!
//! - Candidates absent from a known collection are prepended, once each
//! - The known collection keeps its relative order
//! - Identifier equality treats "both absent" as equal
//!
//! Deterministic, pure logic. No IO.

mod collection;
mod identified;

pub use collection::{reconcile, same_entity};
pub use identified::Identified;
