//! Per-field validation of a charging record.
//!
//! Validation never fails: it returns a [`ValidationErrors`] map that is
//! empty for a submittable record. The map is ordered by schema position so
//! [`ValidationErrors::first`] is the field a blocked submit should focus.

use super::record::{ChargingRecord, Field};
use std::collections::BTreeMap;
use std::fmt;

/// Numeric fields checked when no explicit set is configured.
pub const DEFAULT_NUMERIC_FIELDS: [Field; 3] = [Field::ChargeCurrent, Field::BattVoltInitial, Field::BattVoltFinal];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    NotANumber,
    NotAChoice,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Required => f.write_str("This field is required"),
            FieldError::NotANumber => f.write_str("Must be a number"),
            FieldError::NotAChoice => f.write_str("Must be one of the listed options"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    /// First failing field in schema order.
    pub fn first(&self) -> Option<Field> {
        self.0.keys().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validator {
    numeric_fields: Vec<Field>,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            numeric_fields: DEFAULT_NUMERIC_FIELDS.to_vec(),
        }
    }
}

impl Validator {
    pub fn with_numeric_fields(numeric_fields: impl IntoIterator<Item = Field>) -> Self {
        Self {
            numeric_fields: numeric_fields.into_iter().collect(),
        }
    }

    pub fn numeric_fields(&self) -> &[Field] {
        &self.numeric_fields
    }

    pub fn validate(&self, record: &ChargingRecord) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        for field in Field::ALL {
            if field.is_optional() || field.is_derived() {
                continue;
            }
            let value = record.get(field).trim();
            if value.is_empty() {
                errors.insert(field, FieldError::Required);
            } else if field.choices().is_some_and(|choices| !choices.contains(&value)) {
                errors.insert(field, FieldError::NotAChoice);
            }
        }

        // Runs second so it wins for any field it applies to.
        for field in &self.numeric_fields {
            let value = record.get(*field);
            if !value.trim().is_empty() && !is_numeric(value) {
                errors.insert(*field, FieldError::NotANumber);
            }
        }

        errors
    }

    pub fn is_valid(&self, record: &ChargingRecord) -> bool {
        self.validate(record).is_empty()
    }
}

/// Validates with the default numeric field set.
pub fn validate(record: &ChargingRecord) -> ValidationErrors {
    Validator::default().validate(record)
}

pub fn is_valid(record: &ChargingRecord) -> bool {
    validate(record).is_empty()
}

/// Accepts decimal and exponent notation with surrounding whitespace;
/// NaN and infinities are rejected.
pub fn is_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().map(|n| n.is_finite()).unwrap_or(false)
}
