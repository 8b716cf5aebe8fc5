//! ia-service
//!
//! In-memory entity services for the administration screens.
//!
//! Responsibilities:
//! - CRUD with the REST resource's id rules (idexists / idnull / idinvalid / idnotfound)
//! - Route resolution for detail and update screens
//! - Relationship option loading for the intent update screen
//! - Seeding from a JSON document

mod backoffice;
mod error;
mod options;
mod resolve;
mod service;

pub use backoffice::{Backoffice, Seed};
pub use error::ServiceError;
pub use options::IntentRelationshipOptions;
pub use resolve::resolve;
pub use service::{EntityService, QueryRequest, Sort, SortOrder};
