use chrono::DateTime;
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Rule violated by a [`Worker`] that cannot be written.
///
/// Rules are checked in declaration order and only the first violation is
/// reported, so the message a client sees is deterministic.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("an email is required")]
    MissingEmail,

    #[error("invalid contract end date for a contractor, must be in RFC3339")]
    InvalidContractEnd,

    #[error("a job title is required for employees")]
    MissingJobTitle,

    #[error("no contract end date for employees")]
    ContractEndForEmployee,

    #[error("no job titles for contractors")]
    JobTitleForContractor,
}

/// A worker record, either an employee or a contractor.
///
/// Every field falls back to its empty value when missing from the JSON
/// payload. A body without an `email` is therefore rejected by [`Worker::validate`]
/// with a readable message instead of failing to decode.
///
/// # Examples
/// ```
/// use workforce::types::worker::Worker;
///
/// let worker: Worker = serde_json::from_str(
///     r#"{"email":"a@x.com","name":"A","isContractor":false,"jobTitle":"Eng","tags":["x"]}"#,
/// ).unwrap();
/// assert!(worker.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Worker {
    /// Primary key of the record
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_contractor: bool,
    /// RFC3339 timestamp, contractors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_end: Option<String>,
    /// Employees only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

/// Reads an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Strict RFC3339: date and time are separated by an upper-case `T` and UTC
/// is written `Z`. `parse_from_rfc3339` on its own also takes a space, `t` and `z`.
fn is_rfc3339(value: &str) -> bool {
    value.as_bytes().get(10) == Some(&b'T') && !value.ends_with('z') && DateTime::parse_from_rfc3339(value).is_ok()
}

impl Worker {
    /// Contract end date, with an absent value read as empty.
    pub fn contract_end(&self) -> &str {
        self.contract_end.as_deref().unwrap_or_default()
    }

    /// Job title, with an absent value read as empty.
    pub fn job_title(&self) -> &str {
        self.job_title.as_deref().unwrap_or_default()
    }

    /// Checks the record against the write invariants.
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] in this order:
    /// 1. the email is empty
    /// 2. a contractor's `contractEnd` is missing or not RFC3339
    /// 3. an employee has no job title
    /// 4. an employee has a contract end date
    /// 5. a contractor has a job title
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }

        if self.is_contractor && !is_rfc3339(self.contract_end()) {
            return Err(ValidationError::InvalidContractEnd);
        }

        if !self.is_contractor && self.job_title().is_empty() {
            return Err(ValidationError::MissingJobTitle);
        }

        if !self.is_contractor && !self.contract_end().is_empty() {
            return Err(ValidationError::ContractEndForEmployee);
        }

        if self.is_contractor && !self.job_title().is_empty() {
            return Err(ValidationError::JobTitleForContractor);
        }

        Ok(())
    }
}
