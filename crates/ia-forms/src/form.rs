use chrono::{DateTime, Utc};
use ia_schemas::Draft;

use crate::{FormError, FormModel};

/// Edit/create form for one record of kind `K`.
///
/// The id control is disabled: it is set from the input and never edited.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityForm<K: FormModel> {
    id: Option<String>,
    raw: K::Raw,
}

impl<K: FormModel> EntityForm<K> {
    /// `None` opens a blank create form with the kind's defaults.
    pub fn new(input: Option<Draft<K>>) -> Self {
        Self::new_at(input, Utc::now())
    }

    /// Same as [`EntityForm::new`] with an explicit clock for the defaults.
    pub fn new_at(input: Option<Draft<K>>, now: DateTime<Utc>) -> Self {
        let draft = input.unwrap_or_else(|| Draft::new(K::form_defaults(now)));
        Self {
            raw: draft.data.to_raw(),
            id: draft.id,
        }
    }

    /// Replace every control's value; same defaulting rule as `new`.
    pub fn reset(&mut self, input: Option<Draft<K>>) {
        self.reset_at(input, Utc::now());
    }

    pub fn reset_at(&mut self, input: Option<Draft<K>>, now: DateTime<Utc>) {
        *self = Self::new_at(input, now);
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn raw(&self) -> &K::Raw {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut K::Raw {
        &mut self.raw
    }

    /// Current form value converted back to the model.
    pub fn value(&self) -> Result<Draft<K>, FormError> {
        Ok(Draft {
            id: self.id.clone(),
            data: K::from_raw(self.raw.clone())?,
        })
    }
}
