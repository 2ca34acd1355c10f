/// Basic presence and range checks applied before anything is written.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required text field was empty
    #[error("{0} is required")]
    Missing(&'static str),

    /// A numeric field was below zero
    #[error("{0} must not be negative")]
    Negative(&'static str),

    /// A numeric field was zero or below
    #[error("{0} must be greater than zero")]
    NotPositive(&'static str),

    /// A code field held something other than digits
    #[error("{0} must contain only digits")]
    NotDigits(&'static str),

    /// A numeric field was infinite or not a number
    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    /// A numeric field exceeded its upper bound
    #[error("{field} must be at most {max}")]
    TooLarge {
        /// The offending field
        field: &'static str,
        /// The largest accepted value
        max: i64,
    },

    /// A text field exceeded its column width
    #[error("{field} must be at most {max} characters")]
    TooLong {
        /// The offending field
        field: &'static str,
        /// The allowed number of characters
        max: usize,
    },
}

pub(crate) fn required(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        Err(ValidationError::Missing(field))
    } else {
        Ok(())
    }
}

pub(crate) fn at_most(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        Err(ValidationError::TooLong { field, max })
    } else {
        Ok(())
    }
}

pub(crate) fn finite(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::NotFinite(field))
    }
}

pub(crate) fn not_above(field: &'static str, value: i64, max: i64) -> Result<(), ValidationError> {
    if value > max {
        Err(ValidationError::TooLarge { field, max })
    } else {
        Ok(())
    }
}

pub(crate) fn non_negative<T: PartialOrd + Default>(
    field: &'static str,
    value: T,
) -> Result<(), ValidationError> {
    // NaN fails this comparison, which is what we want
    if value >= T::default() {
        Ok(())
    } else {
        Err(ValidationError::Negative(field))
    }
}

pub(crate) fn positive<T: PartialOrd + Default>(
    field: &'static str,
    value: T,
) -> Result<(), ValidationError> {
    if value > T::default() {
        Ok(())
    } else {
        Err(ValidationError::NotPositive(field))
    }
}

/// Trim a required text field in place.
pub(crate) fn trim(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_owned();
    }
}

/// Trim and upper-case a code field in place.
pub(crate) fn code(value: &mut String) {
    *value = value.trim().to_uppercase();
}

/// Trim an optional text field, dropping it when nothing is left.
pub(crate) fn trim_optional(value: &mut Option<String>) {
    *value = value
        .take()
        .map(|text| text.trim().to_owned())
        .filter(|text| !text.is_empty());
}
