//! Comment-form field validation.
//!
//! DESIGN
//! ======
//! Rules are data: each field maps to an ordered list of `(validator, message)`
//! pairs, and a value is valid only when every validator in its list passes.
//! The host re-runs the same table on `POST /api/comments`, so browser and
//! server can never disagree on what a valid comment is.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::fmt;

use serde::Serialize;

/// Select values accepted by the rating field.
pub const RATING_OPTIONS: &[&str] = &["1", "2", "3", "4", "5"];

pub const AUTHOR_MIN_LEN: usize = 2;
pub const AUTHOR_MAX_LEN: usize = 15;
pub const TEXT_MIN_LEN: usize = 2;

/// Comment form fields that carry validation rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Author,
    Rating,
    Text,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Author, Field::Rating, Field::Text];

    /// Form control name / DOM id.
    pub fn name(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Rating => "rating",
            Self::Text => "text",
        }
    }
}

/// A single pure predicate over a raw field value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Validator {
    /// Non-empty.
    Required,
    /// Non-empty and at least `n` characters.
    MinLength(usize),
    /// Empty, or at most `n` characters.
    MaxLength(usize),
    /// Exactly one of the listed values.
    OneOf(&'static [&'static str]),
}

impl Validator {
    /// Returns `true` when `value` satisfies this validator.
    pub fn check(self, value: &str) -> bool {
        match self {
            Self::Required => !value.is_empty(),
            Self::MinLength(min) => !value.is_empty() && value.chars().count() >= min,
            Self::MaxLength(max) => value.is_empty() || value.chars().count() <= max,
            Self::OneOf(options) => options.contains(&value),
        }
    }
}

/// A validator paired with the message shown when it fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rule {
    pub validator: Validator,
    pub message: &'static str,
}

const AUTHOR_RULES: &[Rule] = &[
    Rule { validator: Validator::Required, message: "Required" },
    Rule { validator: Validator::MinLength(AUTHOR_MIN_LEN), message: "Must be at least 2 characters" },
    Rule { validator: Validator::MaxLength(AUTHOR_MAX_LEN), message: "Must be at most 15 characters" },
];

const RATING_RULES: &[Rule] = &[Rule { validator: Validator::OneOf(RATING_OPTIONS), message: "You must select an option" }];

const TEXT_RULES: &[Rule] = &[
    Rule { validator: Validator::Required, message: "Required" },
    Rule { validator: Validator::MinLength(TEXT_MIN_LEN), message: "Must be at least 2 characters" },
];

/// The rule list for `field`, in display order.
pub fn rules_for(field: Field) -> &'static [Rule] {
    match field {
        Field::Author => AUTHOR_RULES,
        Field::Rating => RATING_RULES,
        Field::Text => TEXT_RULES,
    }
}

/// Messages of every failing rule for `field`, in rule order.
pub fn validate_field(field: Field, value: &str) -> Vec<&'static str> {
    rules_for(field)
        .iter()
        .filter(|rule| !rule.validator.check(value))
        .map(|rule| rule.message)
        .collect()
}

/// Per-field failure messages for a whole comment.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    pub author: Vec<&'static str>,
    pub rating: Vec<&'static str>,
    pub text: Vec<&'static str>,
}

impl FieldErrors {
    pub fn for_field(&self, field: Field) -> &[&'static str] {
        match field {
            Field::Author => &self.author,
            Field::Rating => &self.rating,
            Field::Text => &self.text,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Vec<&'static str> {
        match field {
            Field::Author => &mut self.author,
            Field::Rating => &mut self.rating,
            Field::Text => &mut self.text,
        }
    }

    /// `true` when no field has a failing rule.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|field| self.for_field(*field).is_empty())
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for field in Field::ALL {
            let messages = self.for_field(field);
            if messages.is_empty() {
                continue;
            }
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{}: {}", field.name(), messages.join(", "))?;
        }
        Ok(())
    }
}

/// Run every field's rules against raw form values.
pub fn validate_comment(author: &str, rating: &str, text: &str) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for (field, value) in [(Field::Author, author), (Field::Rating, rating), (Field::Text, text)] {
        *errors.slot_mut(field) = validate_field(field, value);
    }
    errors
}
