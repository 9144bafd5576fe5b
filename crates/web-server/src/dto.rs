//! Request inputs and response bodies.
//!
//! Inputs arrive as raw key/value pairs (first occurrence wins), are gathered
//! into optional fields, and then pass through an explicit `validate` step, so a
//! missing or malformed field becomes an [`AppError`] instead of an extractor
//! rejection.

use crate::error::AppError;
use configuration::InvalidInputPolicy;
use core_types::NewUser;
use serde::{Deserialize, Serialize};

/// The `{"message": ...}` body used by every JSON endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Query string of `GET /parameters`.
#[derive(Debug, Default)]
pub struct ParametersQuery {
    pub name: Option<String>,
    pub age: Option<String>,
}

/// A name and an age that have passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visitor {
    pub name: String,
    pub age: i64,
}

impl ParametersQuery {
    /// Builds the query from raw key/value pairs. A repeated key keeps its
    /// first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "age" => &mut query.age,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    pub fn validate(self, policy: InvalidInputPolicy) -> Result<Visitor, AppError> {
        let name = self.name.ok_or_else(|| {
            AppError::invalid_input(policy, "Query parameter 'name' is required.")
        })?;
        let raw_age = self.age.ok_or_else(|| {
            AppError::invalid_input(policy, "Query parameter 'age' is required.")
        })?;
        let age = parse_saturating(raw_age.trim()).ok_or_else(|| {
            AppError::invalid_input(
                policy,
                format!("Query parameter 'age' must be an integer, got '{raw_age}'."),
            )
        })?;

        Ok(Visitor { name, age })
    }
}

/// Parses the `<age>` path segment of `/url_variables`.
///
/// Only plain decimal digits are accepted, so `-3`, `+3` and `3.0` do not match
/// the route at all.
pub fn parse_path_age(segment: &str) -> Option<i64> {
    if !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    parse_saturating(segment)
}

/// Parses an optionally signed decimal integer. Magnitudes beyond `i64` clamp
/// to `i64::MAX` / `i64::MIN`; they are still integers on the same side of
/// any age threshold.
fn parse_saturating(text: &str) -> Option<i64> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let value = match digits.parse::<i64>() {
        Ok(magnitude) if negative => -magnitude,
        Ok(magnitude) => magnitude,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    };
    Some(value)
}

/// Form body of `POST /register`.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub password: Option<String>,
}

impl RegisterForm {
    /// Builds the form from raw key/value pairs. A repeated field keeps its
    /// first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "email" => &mut form.email,
                "first_name" => &mut form.first_name,
                "last_name" => &mut form.last_name,
                "password" => &mut form.password,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    /// Requires all four fields to be present. Values are taken as submitted:
    /// no trimming, no length rules, no password hashing.
    pub fn validate(self, policy: InvalidInputPolicy) -> Result<NewUser, AppError> {
        let missing: Vec<&str> = [
            ("email", self.email.is_none()),
            ("first_name", self.first_name.is_none()),
            ("last_name", self.last_name.is_none()),
            ("password", self.password.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        match (self.email, self.first_name, self.last_name, self.password) {
            (Some(email), Some(first_name), Some(last_name), Some(password)) => Ok(NewUser {
                first_name,
                last_name,
                email,
                password,
            }),
            _ => Err(AppError::invalid_input(
                policy,
                format!("Missing form field(s): {}.", missing.join(", ")),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: InvalidInputPolicy = InvalidInputPolicy::BadRequest;

    fn query(name: Option<&str>, age: Option<&str>) -> ParametersQuery {
        ParametersQuery {
            name: name.map(str::to_string),
            age: age.map(str::to_string),
        }
    }

    #[test]
    fn parameters_parse_integer_age() {
        let visitor = query(Some("Bruce"), Some(" 28 ")).validate(POLICY).unwrap();
        assert_eq!(visitor, Visitor { name: "Bruce".to_string(), age: 28 });

        let negative = query(Some("Bruce"), Some("-4")).validate(POLICY).unwrap();
        assert_eq!(negative.age, -4);
    }

    #[test]
    fn parameters_reject_missing_or_malformed_fields() {
        for q in [
            query(None, Some("20")),
            query(Some("Bruce"), None),
            query(Some("Bruce"), Some("twenty")),
            query(Some("Bruce"), Some("")),
        ] {
            assert!(matches!(q.validate(POLICY), Err(AppError::InvalidInput(_))));
        }
    }

    #[test]
    fn fidelity_policy_yields_unhandled_input() {
        let err = query(Some("Bruce"), Some("x"))
            .validate(InvalidInputPolicy::InternalError)
            .unwrap_err();
        assert!(matches!(err, AppError::UnhandledInput(_)));
    }

    #[test]
    fn path_age_accepts_only_digits() {
        assert_eq!(parse_path_age("15"), Some(15));
        assert_eq!(parse_path_age("007"), Some(7));
        assert_eq!(parse_path_age("99999999999999999999"), Some(i64::MAX));
        for bad in ["", "abc", "-3", "+3", "3.0"] {
            assert_eq!(parse_path_age(bad), None, "{bad:?}");
        }
    }

    #[test]
    fn oversized_query_ages_clamp_instead_of_failing() {
        let huge = query(Some("Bruce"), Some("99999999999999999999"))
            .validate(POLICY)
            .unwrap();
        assert_eq!(huge.age, i64::MAX);

        let tiny = query(Some("Bruce"), Some("-99999999999999999999"))
            .validate(POLICY)
            .unwrap();
        assert_eq!(tiny.age, i64::MIN);

        let signed = query(Some("Bruce"), Some("+21")).validate(POLICY).unwrap();
        assert_eq!(signed.age, 21);
    }

    #[test]
    fn repeated_query_keys_keep_the_first_value() {
        let pairs = vec![
            ("age".to_string(), "28".to_string()),
            ("name".to_string(), "Bruce".to_string()),
            ("age".to_string(), "12".to_string()),
            ("other".to_string(), "x".to_string()),
        ];
        let visitor = ParametersQuery::from_pairs(pairs).validate(POLICY).unwrap();
        assert_eq!(visitor, Visitor { name: "Bruce".to_string(), age: 28 });
    }

    #[test]
    fn register_form_requires_every_field() {
        let form = RegisterForm {
            email: Some("a@b.com".to_string()),
            first_name: Some("A".to_string()),
            last_name: None,
            password: None,
        };
        match form.validate(POLICY) {
            Err(AppError::InvalidInput(message)) => {
                assert!(message.contains("last_name, password"), "{message}");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn register_form_keeps_values_verbatim() {
        let form = RegisterForm {
            email: Some("a@b.com".to_string()),
            first_name: Some(" A ".to_string()),
            last_name: Some("B".to_string()),
            password: Some("p".to_string()),
        };
        let user = form.validate(POLICY).unwrap();
        assert_eq!(user.first_name, " A ");
        assert_eq!(user.password, "p");
    }
}
