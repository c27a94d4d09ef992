use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::errors::AppError;

/// Collection that lead submissions are written to.
pub const LEAD_COLLECTION: &str = "lead";

pub const NAME_MIN_CHARS: usize = 2;

const EMAIL_MAX_LEN: usize = 254;
const EMAIL_LOCAL_MAX_LEN: usize = 64;

// local@domain.tld, at least one dot in the domain. Unicode letters and
// digits are allowed on both sides (UTF-8 local parts, IDN domains).
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}.!#$%&'*+/=?^_`{|}~-]+@[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?(?:\.[\p{L}\p{N}](?:[\p{L}\p{N}-]{0,61}[\p{L}\p{N}])?)+$",
    )
    .expect("email regex must compile")
});

/// Lead form body as received on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct LeadInput {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Free-form: "PT", "membership", "class", ...
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A validated lead. Only obtainable through `Lead::try_from(LeadInput)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lead {
    name: String,
    email: String,
    phone: Option<String>,
    interest: Option<String>,
    message: Option<String>,
}

impl Lead {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    pub fn interest(&self) -> Option<&str> {
        self.interest.as_deref()
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl TryFrom<LeadInput> for Lead {
    type Error = AppError;

    fn try_from(input: LeadInput) -> Result<Self, Self::Error> {
        if input.name.chars().count() < NAME_MIN_CHARS {
            return Err(AppError::Validation(format!(
                "name: must be at least {} characters",
                NAME_MIN_CHARS
            )));
        }

        if !is_valid_email(&input.email) {
            return Err(AppError::Validation(
                "email: value is not a valid email address".to_string(),
            ));
        }

        Ok(Self {
            name: input.name,
            email: input.email,
            phone: input.phone,
            interest: input.interest,
            message: input.message,
        })
    }
}

/// Acknowledgement returned after a lead is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCreated {
    pub status: String,
    pub id: String,
}

impl LeadCreated {
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            id: id.into(),
        }
    }
}

/// Syntactic email check: `local@domain.tld` with RFC length limits.
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > EMAIL_MAX_LEN {
        return false;
    }

    let Some((local, _domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.len() > EMAIL_LOCAL_MAX_LEN || local.starts_with('.') || local.ends_with('.') {
        return false;
    }
    if local.contains("..") {
        return false;
    }

    EMAIL_REGEX.is_match(email)
}
