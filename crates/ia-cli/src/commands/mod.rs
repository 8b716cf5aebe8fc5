pub mod entities;
pub mod reconcile;

pub use entities::{list, load_backoffice, options, show};
pub use reconcile::reconcile_files;
