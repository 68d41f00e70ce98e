//! Write paths: appeal (ticket) submission and grant applications.
//!
//! Input is validated locally before anything goes over the wire; the
//! backend owns persistence and answers with the stored record.

use campus_core::{error::CampusError, record::Record};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::client::{read_json, ApiClient};
use crate::endpoints;

/// Largest attachment accepted with an appeal.
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;
/// Longest appeal message accepted.
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Appeal / ticket addressed to the university administration.
#[derive(Debug, Clone, Default)]
pub struct AppealForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub attachment: Option<PathBuf>,
}

/// Application for a research grant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct GrantApplication {
    #[serde(rename = "grant")]
    pub grant_id: String,
    pub applicant_name: String,
    pub email: String,
    pub organization: String,
    pub project_summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_amount: Option<f64>,
}

fn require(field: &str, value: &str) -> Result<(), CampusError> {
    if value.trim().is_empty() {
        return Err(CampusError::invalid(field, "required"));
    }
    Ok(())
}

/// Loose shape check: `local@domain.tld`, no whitespace.
pub fn validate_email(email: &str) -> Result<(), CampusError> {
    let email = email.trim();
    require("email", email)?;
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !email.contains(char::is_whitespace)
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(CampusError::invalid("email", "not an email address"))
    }
}

/// Digits plus the usual separators, at least 7 digits.
pub fn validate_phone(phone: &str) -> Result<(), CampusError> {
    let allowed = phone
        .chars()
        .all(|c| c.is_ascii_digit() || " +-()".contains(c));
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    if allowed && digits >= 7 {
        Ok(())
    } else {
        Err(CampusError::invalid("phone", "not a phone number"))
    }
}

impl AppealForm {
    pub fn validate(&self) -> Result<(), CampusError> {
        require("full_name", &self.full_name)?;
        validate_email(&self.email)?;
        if let Some(ref phone) = self.phone {
            if !phone.trim().is_empty() {
                validate_phone(phone)?;
            }
        }
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        if self.message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(CampusError::invalid(
                "message",
                format!("longer than {MAX_MESSAGE_CHARS} characters"),
            ));
        }
        if let Some(ref path) = self.attachment {
            check_attachment(path)?;
        }
        Ok(())
    }
}

fn check_attachment(path: &Path) -> Result<(), CampusError> {
    let meta = std::fs::metadata(path)
        .map_err(|e| CampusError::invalid("attachment", format!("{}: {e}", path.display())))?;
    if !meta.is_file() {
        return Err(CampusError::invalid("attachment", "not a file"));
    }
    if meta.len() > MAX_ATTACHMENT_BYTES {
        return Err(CampusError::invalid(
            "attachment",
            format!("larger than {} MB", MAX_ATTACHMENT_BYTES / (1024 * 1024)),
        ));
    }
    Ok(())
}

impl GrantApplication {
    pub fn validate(&self) -> Result<(), CampusError> {
        require("grant", &self.grant_id)?;
        require("applicant_name", &self.applicant_name)?;
        validate_email(&self.email)?;
        require("organization", &self.organization)?;
        require("project_summary", &self.project_summary)?;
        if let Some(amount) = self.requested_amount {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(CampusError::invalid("requested_amount", "must be positive"));
            }
        }
        Ok(())
    }
}

fn stored_record(body: serde_json::Value) -> Record {
    Record::from_value(body).unwrap_or_default()
}

impl ApiClient {
    /// Submit an appeal as multipart form data.
    pub async fn submit_appeal(&self, form: &AppealForm, lang: &str) -> Result<Record, CampusError> {
        form.validate()?;

        let mut multipart = reqwest::multipart::Form::new()
            .text("full_name", form.full_name.trim().to_string())
            .text("email", form.email.trim().to_string())
            .text("subject", form.subject.trim().to_string())
            .text("message", form.message.clone());
        if let Some(ref phone) = form.phone {
            if !phone.trim().is_empty() {
                multipart = multipart.text("phone", phone.trim().to_string());
            }
        }
        if let Some(ref path) = form.attachment {
            let bytes = tokio::fs::read(path).await?;
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "attachment".to_string());
            debug!("appeal: attaching {file_name} ({} bytes)", bytes.len());
            multipart = multipart.part(
                "attachment",
                reqwest::multipart::Part::bytes(bytes).file_name(file_name),
            );
        }

        let url = self.url(endpoints::APPEALS);
        debug!("api: POST {url} (multipart)");
        let builder = self.http().post(&url).multipart(multipart);
        let resp = self
            .with_language(builder, lang)
            .send()
            .await
            .map_err(|e| CampusError::Network(format!("POST {url} failed: {e}")))?;
        let record = stored_record(read_json(resp, &url).await?);
        info!("appeal submitted (id: {})", record.id().unwrap_or_default());
        Ok(record)
    }

    /// Submit a grant application as JSON.
    pub async fn submit_grant_application(
        &self,
        application: &GrantApplication,
        lang: &str,
    ) -> Result<Record, CampusError> {
        application.validate()?;

        let url = self.url(endpoints::GRANT_APPLICATIONS);
        debug!("api: POST {url}");
        let builder = self.http().post(&url).json(application);
        let resp = self
            .with_language(builder, lang)
            .send()
            .await
            .map_err(|e| CampusError::Network(format!("POST {url} failed: {e}")))?;
        let record = stored_record(read_json(resp, &url).await?);
        info!(
            "grant application submitted (id: {})",
            record.id().unwrap_or_default()
        );
        Ok(record)
    }
}
