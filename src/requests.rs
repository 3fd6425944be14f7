// src/requests.rs

use serde::Deserialize;

use crate::error::Violations;
use crate::rules::{self, AVATAR_URL_MAX_CHARS, NAME_MAX_CHARS, PASSWORD_MIN_CHARS};

// -------- RAW PAYLOADS --------
// Shapes as bound from the request body by the web layer. Structural problems
// (missing fields, wrong types) are serde's to reject, not ours.

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdatePayload {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PasswordChangePayload {
    pub current_password: String, // Plain text
    pub new_password: String,     // Plain text
}

/// Contract between the body-binding layer and the services that apply a
/// change: a payload either becomes its validated counterpart or an ordered
/// list of violations. Never both, never a partial value.
///
/// Every violated rule is collected, not just the first, so the client sees
/// one message per failed constraint.
pub trait ValidateRequest {
    type Valid;

    fn validate(self) -> Result<Self::Valid, Violations>;
}

impl ValidateRequest for ProfileUpdatePayload {
    type Valid = ProfileUpdateRequest;

    fn validate(self) -> Result<ProfileUpdateRequest, Violations> {
        let mut violations = Violations::new();

        if rules::is_blank(&self.name) {
            violations.add("name", "Name is required");
        }
        if rules::char_len(&self.name) > NAME_MAX_CHARS {
            violations.add("name", "Name cannot exceed 255 characters");
        }
        if let Some(url) = &self.avatar_url
            && rules::char_len(url) > AVATAR_URL_MAX_CHARS
        {
            violations.add("avatar_url", "Avatar URL cannot exceed 500 characters");
        }

        if violations.is_empty() {
            Ok(ProfileUpdateRequest {
                name: self.name,
                avatar_url: self.avatar_url,
            })
        } else {
            tracing::debug!(violations = violations.len(), "profile update rejected");
            Err(violations)
        }
    }
}

impl ValidateRequest for PasswordChangePayload {
    type Valid = PasswordChangeRequest;

    fn validate(self) -> Result<PasswordChangeRequest, Violations> {
        let mut violations = Violations::new();

        if rules::is_blank(&self.current_password) {
            violations.add("current_password", "Current password is required");
        }
        // A blank new password reports only the required-violation; the
        // length rule applies to non-blank values.
        if rules::is_blank(&self.new_password) {
            violations.add("new_password", "New password is required");
        } else if rules::char_len(&self.new_password) < PASSWORD_MIN_CHARS {
            violations.add("new_password", "Password must be at least 8 characters");
        }

        if violations.is_empty() {
            Ok(PasswordChangeRequest {
                current_password: self.current_password,
                new_password: self.new_password,
            })
        } else {
            tracing::debug!(violations = violations.len(), "password change rejected");
            Err(violations)
        }
    }
}

// -------- VALIDATED REQUESTS --------
// Constructible only through `ValidateRequest::validate`; an instance always
// satisfies every field constraint at once. Values are carried verbatim, no
// trimming or normalization.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileUpdateRequest {
    name: String,
    avatar_url: Option<String>,
}

impl ProfileUpdateRequest {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    /// Returns the raw values, e.g. to hand to the profile service.
    pub fn into_payload(self) -> ProfileUpdatePayload {
        ProfileUpdatePayload {
            name: self.name,
            avatar_url: self.avatar_url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChangeRequest {
    current_password: String,
    new_password: String,
}

impl PasswordChangeRequest {
    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }

    /// Returns the raw values, e.g. to hand to the credential service.
    pub fn into_payload(self) -> PasswordChangePayload {
        PasswordChangePayload {
            current_password: self.current_password,
            new_password: self.new_password,
        }
    }
}
