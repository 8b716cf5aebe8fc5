//! ia-forms
//!
//! Form binding for the entity update screens.
//!
//! A form holds the record id (read-only) and the kind's raw field values.
//! Raw values differ from the model only where the input widgets need text,
//! i.e. Intent date-times rendered as `YYYY-MM-DDTHH:mm`.

mod error;
mod form;
mod model;

pub use error::FormError;
pub use form::EntityForm;
pub use model::{FormModel, IntentFormRaw, DATE_TIME_FORMAT};
