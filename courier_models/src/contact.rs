use std::{collections::BTreeMap, sync::LazyLock};

use nutype::nutype;
use regex::Regex;
use serde::Serialize;

use crate::{RecaptchaResponse, RecaptchaResponseError};

/// A contact form submission that has passed field validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: SubmissionName,
    pub email: SubmissionEmail,
    pub message: SubmissionMessage,
    pub captcha: RecaptchaResponse,
}

/// Raw field values as sent by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
    pub captcha: Option<String>,
}

#[nutype(
    sanitize(trim),
    validate(len_char_min = 2, len_char_max = 80),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionName(String);

#[nutype(
    sanitize(trim),
    validate(len_char_max = 120, regex = EMAIL_REGEX),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionEmail(String);

/// Accepts `local@domain.tld` shapes: no whitespace, exactly one `@` and at
/// least one dot after it.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

#[nutype(
    sanitize(trim),
    validate(len_char_min = 6, len_char_max = 2000),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct SubmissionMessage(String);

/// Result of the reCAPTCHA siteverify call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaptchaVerdict {
    pub success: bool,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionField {
    Name,
    Email,
    Message,
    Captcha,
}

/// Mapping from rejected fields to the first violated rule per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionErrors(BTreeMap<SubmissionField, &'static str>);

impl SubmissionErrors {
    pub fn get(&self, field: SubmissionField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: SubmissionField, reason: &'static str) {
        self.0.insert(field, reason);
    }
}

impl FromIterator<(SubmissionField, &'static str)> for SubmissionErrors {
    fn from_iter<I: IntoIterator<Item = (SubmissionField, &'static str)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl TryFrom<SubmissionFields> for Submission {
    type Error = SubmissionErrors;

    /// Validates all fields and aggregates the failures. Within one field the
    /// first violated rule wins, but every field is always checked.
    fn try_from(fields: SubmissionFields) -> Result<Self, Self::Error> {
        let mut errors = SubmissionErrors::default();

        let name = check_field(
            &mut errors,
            SubmissionField::Name,
            fields.name,
            SubmissionName::try_new,
            |err| match err {
                SubmissionNameError::LenCharMinViolated | SubmissionNameError::LenCharMaxViolated => {
                    "must be between 2 and 80 characters long"
                }
            },
        );
        let email = check_field(
            &mut errors,
            SubmissionField::Email,
            fields.email,
            SubmissionEmail::try_new,
            |err| match err {
                SubmissionEmailError::LenCharMaxViolated => "must not be longer than 120 characters",
                SubmissionEmailError::RegexViolated => "must be a valid email address",
            },
        );
        let message = check_field(
            &mut errors,
            SubmissionField::Message,
            fields.message,
            SubmissionMessage::try_new,
            |err| match err {
                SubmissionMessageError::LenCharMinViolated
                | SubmissionMessageError::LenCharMaxViolated => {
                    "must be between 6 and 2000 characters long"
                }
            },
        );
        let captcha = check_field(
            &mut errors,
            SubmissionField::Captcha,
            fields.captcha,
            RecaptchaResponse::try_new,
            |err| match err {
                RecaptchaResponseError::NotEmptyViolated => "is required",
            },
        );

        match (name, email, message, captcha) {
            (Some(name), Some(email), Some(message), Some(captcha)) => Ok(Self {
                name,
                email,
                message,
                captcha,
            }),
            _ => Err(errors),
        }
    }
}

fn check_field<T, E>(
    errors: &mut SubmissionErrors,
    field: SubmissionField,
    value: Option<String>,
    parse: impl FnOnce(String) -> Result<T, E>,
    reason: impl FnOnce(E) -> &'static str,
) -> Option<T> {
    match value.ok_or("is required").and_then(|value| parse(value).map_err(reason)) {
        Ok(parsed) => Some(parsed),
        Err(reason) => {
            errors.insert(field, reason);
            None
        }
    }
}
