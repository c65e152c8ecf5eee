//! Submission validation for new participants.
//!
//! Errors are reported per field in form order so the first entry can take
//! focus. A field carries at most one error.

use std::collections::BTreeMap;

use serde::Serialize;
use url::Url;

use crate::error::CoreError;
use crate::participant::NewParticipant;
use crate::upload;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const MSG_NAME_REQUIRED: &str = "Please enter your name";
pub const MSG_LINKEDIN_REQUIRED: &str = "Please enter your LinkedIn URL";
pub const MSG_LINKEDIN_INVALID: &str =
    "Please enter a valid URL (starting with http:// or https://)";
pub const MSG_URL_INVALID: &str = "Please enter a valid URL";
pub const MSG_PROJECT_NAME_REQUIRED: &str = "Please enter a display name for your project";
pub const MSG_PROJECT_URL_REQUIRED: &str = "Please enter a project URL or remove the project name";
pub const MSG_SUBMIT_FAILED: &str = "Something went wrong. Please try again.";

/// Submission fields, declared in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionField {
    Name,
    LinkedinUrl,
    PortfolioUrl,
    ProjectUrl,
    ProjectName,
    Avatar,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: SubmissionField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: SubmissionField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Whether `candidate` parses as an absolute `http` or `https` URL.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

/// Validate a submission, returning a trimmed copy with blank optionals cleared.
pub fn validate_submission(input: &NewParticipant) -> Result<NewParticipant, CoreError> {
    let name = input.name.trim();
    let linkedin_url = input.linkedin_url.trim();
    let portfolio_url = present(&input.portfolio_url);
    let project_url = present(&input.project_url);
    let project_name = present(&input.project_name);
    let avatar_image = present(&input.avatar_image);

    let mut errors: BTreeMap<SubmissionField, String> = BTreeMap::new();
    let mut fail = |field: SubmissionField, message: &str| {
        errors.entry(field).or_insert_with(|| message.to_string());
    };

    if name.is_empty() {
        fail(SubmissionField::Name, MSG_NAME_REQUIRED);
    }

    if linkedin_url.is_empty() {
        fail(SubmissionField::LinkedinUrl, MSG_LINKEDIN_REQUIRED);
    } else if !is_valid_url(linkedin_url) {
        fail(SubmissionField::LinkedinUrl, MSG_LINKEDIN_INVALID);
    }

    if portfolio_url.is_some_and(|url| !is_valid_url(url)) {
        fail(SubmissionField::PortfolioUrl, MSG_URL_INVALID);
    }

    if project_url.is_some_and(|url| !is_valid_url(url)) {
        fail(SubmissionField::ProjectUrl, MSG_URL_INVALID);
    }

    match (project_url, project_name) {
        (Some(_), None) => fail(SubmissionField::ProjectName, MSG_PROJECT_NAME_REQUIRED),
        (None, Some(_)) => fail(SubmissionField::ProjectUrl, MSG_PROJECT_URL_REQUIRED),
        _ => {}
    }

    if let Some(Err(e)) = avatar_image.map(upload::check_data_url) {
        fail(SubmissionField::Avatar, &e.to_string());
    }

    if !errors.is_empty() {
        return Err(CoreError::InvalidFields(
            errors
                .into_iter()
                .map(|(field, message)| FieldError { field, message })
                .collect(),
        ));
    }

    Ok(NewParticipant {
        name: name.to_string(),
        linkedin_url: linkedin_url.to_string(),
        portfolio_url: portfolio_url.map(str::to_string),
        project_url: project_url.map(str::to_string),
        project_name: project_name.map(str::to_string),
        avatar_image: avatar_image.map(str::to_string),
    })
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
