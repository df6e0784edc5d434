//! Acceptance rules for incoming user requests.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::users::dto::{CreateUserRequest, GetUserRequest};

pub const MIN_PASSWORD_CHARS: usize = 8;
pub const MAX_EMAIL_LEN: usize = 254;

/// A single rule broken by a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub rule: &'static str,
    pub message: String,
}

/// Every violation found in one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error)]
#[error("invalid fields: {}", summary(.0))]
pub struct ValidationErrors(Vec<FieldViolation>);

fn summary(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| format!("{} ({})", v.field, v.rule))
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, rule: &'static str, message: impl Into<String>) {
        self.0.push(FieldViolation {
            field,
            rule,
            message: message.into(),
        });
    }

    fn into_result(self) -> Result<(), ValidationErrors> {
        if self.0.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn violations(&self) -> &[FieldViolation] {
        &self.0
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|v| v.field == field)
    }

    pub fn into_violations(self) -> Vec<FieldViolation> {
        self.0
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    email.chars().count() <= MAX_EMAIL_LEN && EMAIL_RE.is_match(email)
}

/// Absolute URL with a scheme and a host.
pub(crate) fn is_valid_url(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) => url.has_host(),
        Err(_) => false,
    }
}

// Postgres text cannot hold U+0000.
fn check_nul(errors: &mut ValidationErrors, field: &'static str, value: &str) -> bool {
    if value.contains('\0') {
        errors.push(field, "nul", format!("{field} must not contain NUL characters"));
        return false;
    }
    true
}

fn check_email(errors: &mut ValidationErrors, email: &str) {
    if !check_nul(errors, "email", email) {
        return;
    }
    if email.is_empty() {
        errors.push("email", "required", "email is required");
    } else if !is_valid_email(email) {
        errors.push("email", "email", "email is not a valid email address");
    }
}

/// Check a creation request. Reports every violation, not just the first.
pub fn validate(req: &CreateUserRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if check_nul(&mut errors, "name", &req.name) && req.name.trim().is_empty() {
        errors.push("name", "required", "name is required");
    }

    check_email(&mut errors, req.email.trim());

    if req.password.is_empty() {
        errors.push("password", "required", "password is required");
    } else if check_nul(&mut errors, "password", &req.password)
        && req.password.chars().count() < MIN_PASSWORD_CHARS
    {
        errors.push(
            "password",
            "min",
            format!("password must be at least {MIN_PASSWORD_CHARS} characters long"),
        );
    }

    if let Some(image_url) = req.image_url.as_deref() {
        if check_nul(&mut errors, "image_url", image_url)
            && !image_url.is_empty()
            && !is_valid_url(image_url)
        {
            errors.push("image_url", "url", "image_url is not a valid URL");
        }
    }

    if let Some(description) = req.description.as_deref() {
        check_nul(&mut errors, "description", description);
    }

    if req.interests.iter().any(|i| i.contains('\0')) {
        errors.push("interests", "nul", "interests must not contain NUL characters");
    }

    errors.into_result()
}

pub fn validate_lookup(req: &GetUserRequest) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    check_email(&mut errors, req.email.trim());
    errors.into_result()
}
