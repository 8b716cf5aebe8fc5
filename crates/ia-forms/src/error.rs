use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A date-time field holds text that does not match `DATE_TIME_FORMAT`.
    InvalidDateTime { field: &'static str, value: String },
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormError::InvalidDateTime { field, value } => {
                write!(f, "field '{field}': invalid date-time '{value}'")
            }
        }
    }
}

impl std::error::Error for FormError {}
