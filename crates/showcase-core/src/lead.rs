//! # Lead Capture Contract
//!
//! The request shape sent to the lead capture gateway and the client-side
//! checks run before any network call.
//!
//! Validation collects every failing field instead of stopping at the
//! first one, so a form can mark all of them at once.

use crate::primitives::{
    MAX_EMAIL_LENGTH, MAX_EXTRA_FIELDS, MAX_LEAD_TAGS, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH,
    MIN_PHONE_DIGITS,
};
use crate::{FieldError, ShowcaseError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which form step produced the lead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStage {
    /// Short contact form: name and email.
    #[default]
    Contact,
    /// Readiness assessment: adds company size and industry.
    Assessment,
    /// Consultation request: adds a message describing the project.
    Consultation,
}

impl LeadStage {
    /// Wire name of the stage.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Assessment => "assessment",
            Self::Consultation => "consultation",
        }
    }

    /// Parse a stage name, case-insensitively.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "contact" => Some(Self::Contact),
            "assessment" => Some(Self::Assessment),
            "consultation" => Some(Self::Consultation),
            _ => None,
        }
    }
}

impl fmt::Display for LeadStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// JSON payload of a lead submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub stage: LeadStage,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Free-form category tags (interests, selected solutions).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Stage-specific fields without a dedicated slot.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl LeadSubmission {
    /// Create a submission with the two always-required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>, stage: LeadStage) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            stage,
            ..Self::default()
        }
    }

    /// Lowercased, trimmed email; the submitter key of the in-flight guard.
    #[must_use]
    pub fn submitter_key(&self) -> String {
        self.email.trim().to_lowercase()
    }

    /// Run every client-side check.
    pub fn validate(&self) -> Result<(), ShowcaseError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ShowcaseError::Validation(errors))
        }
    }

    /// All failing fields, in form order.
    #[must_use]
    pub fn field_errors(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name.len() > MAX_NAME_LENGTH {
            errors.push(FieldError::new(
                "name",
                format!("Name must be at most {MAX_NAME_LENGTH} characters"),
            ));
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !is_valid_email(email) {
            errors.push(FieldError::new("email", "Enter a valid email address"));
        }

        if let Some(phone) = non_blank(self.phone.as_deref()) {
            if !is_valid_phone(phone) {
                errors.push(FieldError::new("phone", "Enter a valid phone number"));
            }
        }

        match self.stage {
            LeadStage::Contact => {}
            LeadStage::Assessment => {
                if non_blank(self.company_size.as_deref()).is_none() {
                    errors.push(FieldError::new("companySize", "Company size is required"));
                }
                if non_blank(self.industry.as_deref()).is_none() {
                    errors.push(FieldError::new("industry", "Industry is required"));
                }
            }
            LeadStage::Consultation => {
                if non_blank(self.message.as_deref()).is_none() {
                    errors.push(FieldError::new("message", "Tell us about your project"));
                }
            }
        }

        if self.message.as_ref().is_some_and(|m| m.len() > MAX_MESSAGE_LENGTH) {
            errors.push(FieldError::new(
                "message",
                format!("Message must be at most {MAX_MESSAGE_LENGTH} characters"),
            ));
        }

        if self.tags.len() > MAX_LEAD_TAGS {
            errors.push(FieldError::new(
                "tags",
                format!("At most {MAX_LEAD_TAGS} tags are allowed"),
            ));
        }

        if self.extra.len() > MAX_EXTRA_FIELDS {
            errors.push(FieldError::new(
                "extra",
                format!("At most {MAX_EXTRA_FIELDS} extra fields are allowed"),
            ));
        }

        errors
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Pragmatic email check: one `@`, non-empty local part, dotted domain,
/// no whitespace.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

/// Digits plus common separators, with at least `MIN_PHONE_DIGITS` digits.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    let allowed = |c: char| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.' | '+');
    if !phone.chars().all(allowed) {
        return false;
    }
    if phone.chars().skip(1).any(|c| c == '+') {
        return false;
    }
    phone.chars().filter(char::is_ascii_digit).count() >= MIN_PHONE_DIGITS
}

// =============================================================================
// TESTS
// =============================================================================
