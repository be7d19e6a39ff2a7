//! Form validation
//!
//! Every entity DTO declares a static field-to-validator table
//! (see the `Validate` impls next to each DTO). Validation runs
//! synchronously before any database or network call; the first
//! failing rule per field is reported.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, NaiveDate};
use serde::Serialize;

/// Primitive kind a form field is validated against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    RequiredString,
    RequiredNumber,
    OptionalNumber,
    RequiredDate,
}

/// One entry of an entity's validation table.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub kind: FieldKind,
    pub message: &'static str,
}

pub const fn rule(field: &'static str, kind: FieldKind, message: &'static str) -> FieldRule {
    FieldRule {
        field,
        kind,
        message,
    }
}

/// Current value of a field, as bound to the form.
pub enum FieldValue<'a> {
    Str(&'a str),
    Num(Option<f64>),
}

/// Field name -> first failing message.
#[derive(Debug, Serialize)]
pub struct ValidationErrors(pub BTreeMap<&'static str, &'static str>);

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

pub trait Validate {
    /// The entity's validation table, paired with the current values.
    fn rules(&self) -> Vec<(FieldRule, FieldValue<'_>)>;

    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors: BTreeMap<&'static str, &'static str> = BTreeMap::new();
        for (rule, value) in self.rules() {
            if errors.contains_key(rule.field) {
                continue;
            }
            if !check(rule.kind, &value) {
                errors.insert(rule.field, rule.message);
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

fn check(kind: FieldKind, value: &FieldValue<'_>) -> bool {
    match (kind, value) {
        (FieldKind::RequiredString, FieldValue::Str(s)) => !s.trim().is_empty(),
        (FieldKind::RequiredNumber, FieldValue::Num(n)) => n.map_or(false, f64::is_finite),
        (FieldKind::OptionalNumber, FieldValue::Num(n)) => n.map_or(true, f64::is_finite),
        (FieldKind::RequiredDate, FieldValue::Str(s)) => parse_date(s).is_some(),
        // A table pairing a kind with the wrong value shape is a
        // programming error; treat the field as valid rather than
        // blocking the form.
        _ => true,
    }
}

/// Accepts RFC 3339 timestamps and plain `YYYY-MM-DD` dates.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    let prefix = s.get(..10).unwrap_or(s);
    NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Form {
        nom: String,
        prix: Option<f64>,
        date: String,
    }

    impl Validate for Form {
        fn rules(&self) -> Vec<(FieldRule, FieldValue<'_>)> {
            vec![
                (
                    rule("nom", FieldKind::RequiredString, "Le nom est requis"),
                    FieldValue::Str(&self.nom),
                ),
                (
                    rule("prix", FieldKind::RequiredNumber, "Le prix est requis"),
                    FieldValue::Num(self.prix),
                ),
                (
                    rule("date", FieldKind::RequiredDate, "La date est requise"),
                    FieldValue::Str(&self.date),
                ),
            ]
        }
    }

    #[test]
    fn valid_form_passes() {
        let form = Form {
            nom: "Monture".into(),
            prix: Some(120.0),
            date: "2024-03-01".into(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn missing_required_field_yields_exactly_one_message() {
        let form = Form {
            nom: "   ".into(),
            prix: Some(10.0),
            date: "2024-03-01".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0.len(), 1);
        assert_eq!(errors.0.get("nom"), Some(&"Le nom est requis"));
    }

    #[test]
    fn missing_number_and_bad_date_reported_per_field() {
        let form = Form {
            nom: "ok".into(),
            prix: None,
            date: "pas une date".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0.len(), 2);
        assert_eq!(errors.0.get("prix"), Some(&"Le prix est requis"));
        assert_eq!(errors.0.get("date"), Some(&"La date est requise"));
    }

    #[test]
    fn rfc3339_and_plain_dates_parse() {
        assert!(parse_date("2024-05-12T10:30:00Z").is_some());
        assert!(parse_date("2024-05-12").is_some());
        assert!(parse_date("12/05/2024").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn infinite_numbers_are_rejected() {
        let form = Form {
            nom: "ok".into(),
            prix: Some(f64::NAN),
            date: "2024-03-01".into(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.0.get("prix"), Some(&"Le prix est requis"));
    }
}
