//! Page interactions with no real backend behind them.
//!
//! The contact form validates like its input widgets do and then stops: the
//! submission is suppressed, nothing is sent or stored. The GPX download on
//! route cards is not available yet and says so explicitly.

use serde::Serialize;
use thiserror::Error;

use crate::content::RouteEntry;

/// Field names shared by the rendered form and the validation below.
pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_MESSAGE: &str = "message";

/// Values typed into the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(name: impl Into<String>, email: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check the three required fields, in form order.
    ///
    /// Same rules as the input widgets: `required` only rejects the empty
    /// string, and the email value is stripped of surrounding whitespace
    /// before its syntax is checked.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.is_empty() {
            return Err(FormError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !is_valid_email(email) {
            return Err(FormError::InvalidEmail(self.email.clone()));
        }
        if self.message.is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("the name field is required")]
    MissingName,
    #[error("the email field is required")]
    MissingEmail,
    #[error("{0:?} is not a valid email address")]
    InvalidEmail(String),
    #[error("the message field is required")]
    MissingMessage,
}

/// Result of a contact form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SubmitOutcome {
    /// Default action prevented; the form is handed back untouched.
    Suppressed(ContactForm),
}

/// Result of pressing "Télécharger GPX" on a route card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DownloadOutcome {
    Unavailable { route: &'static str },
}

/// Submit the contact form.
///
/// Invalid input is rejected the way the browser would reject it. Valid input
/// produces [`SubmitOutcome::Suppressed`]: no request, no navigation, no storage.
pub fn submit_contact_form(form: &ContactForm) -> Result<SubmitOutcome, FormError> {
    form.validate()?;
    tracing::debug!("Contact form submission suppressed ({} message chars)", form.message.len());
    Ok(SubmitOutcome::Suppressed(form.clone()))
}

/// GPX tracks are not published yet.
pub fn request_gpx_download(route: &RouteEntry) -> DownloadOutcome {
    tracing::debug!("GPX download requested for {}, not available", route.name);
    DownloadOutcome::Unavailable { route: route.name }
}

/// Syntactic email check matching the `type="email"` input rule:
/// `local@domain`, no whitespace, domain made of non-empty labels of
/// ASCII letters, digits and hyphens that neither start nor end with a hyphen.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    let local_ok = local.chars().all(|c| {
        c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
    });
    if !local_ok {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}
