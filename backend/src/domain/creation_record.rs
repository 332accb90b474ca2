//! Acknowledgement for a stored user.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidSubmission;

/// Identifier assigned by the store on insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecordId(i64);

impl UserRecordId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i32> for UserRecordId {
    fn from(value: i32) -> Self {
        Self(i64::from(value))
    }
}

impl fmt::Display for UserRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Denormalised copy of a newly inserted user.
///
/// Returned to the caller and mirrored into the audit log. The only
/// constructor takes the identifier the store handed back, so a record never
/// describes a row that was not inserted.
///
/// Serialises as `{"id":1,"full_name":"Ada Lovelace","email":"ada@x.com"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreationRecord {
    id: UserRecordId,
    full_name: String,
    email: String,
}

impl CreationRecord {
    /// Build the record for `submission` stored under `id`.
    pub fn new(id: UserRecordId, submission: &ValidSubmission) -> Self {
        Self {
            id,
            full_name: submission.full_name(),
            email: submission.email().to_owned(),
        }
    }

    pub fn id(&self) -> UserRecordId {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserSubmission;
    use serde_json::json;

    fn valid_submission() -> ValidSubmission {
        UserSubmission {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@x.com".into(),
            phone_number: "555-0100".into(),
            dob: "1815-12-10".into(),
            address: "London".into(),
        }
        .validate()
        .expect("valid submission")
    }

    #[test]
    fn derives_full_name_and_email() {
        let record = CreationRecord::new(UserRecordId::new(7), &valid_submission());
        assert_eq!(record.id().get(), 7);
        assert_eq!(record.full_name(), "Ada Lovelace");
        assert_eq!(record.email(), "ada@x.com");
    }

    #[test]
    fn serialises_with_wire_field_names() {
        let record = CreationRecord::new(UserRecordId::from(42_i32), &valid_submission());
        let value = serde_json::to_value(&record).expect("serialise record");
        assert_eq!(
            value,
            json!({"id": 42, "full_name": "Ada Lovelace", "email": "ada@x.com"})
        );
    }
}
