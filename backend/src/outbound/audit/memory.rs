//! In-memory audit sink.
//!
//! Stores the encoded lines exactly as the file adapter would write them.
//! Tests use [`MemoryAuditSink::fail_with`] to simulate a broken audit log.

use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::CreationRecord;
use crate::domain::ports::{AuditSink, AuditSinkError};

use super::encode_line;

#[derive(Debug, Default)]
struct MemoryState {
    lines: Vec<String>,
    failure: Option<String>,
}

/// [`AuditSink`] keeping documents in a vector.
#[derive(Debug, Default)]
pub struct MemoryAuditSink {
    state: Mutex<MemoryState>,
}

impl MemoryAuditSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every following append fail with `message`.
    pub fn fail_with(&self, message: impl Into<String>) {
        self.state().failure = Some(message.into());
    }

    /// Raw lines appended so far, separators included.
    pub fn lines(&self) -> Vec<String> {
        self.state().lines.clone()
    }

    /// Appended documents decoded back into records.
    ///
    /// # Errors
    ///
    /// Returns the decoding error of the first malformed line.
    pub fn records(&self) -> Result<Vec<CreationRecord>, serde_json::Error> {
        self.state()
            .lines
            .iter()
            .map(|line| serde_json::from_str(line))
            .collect()
    }

    /// Number of successful appends.
    pub fn len(&self) -> usize {
        self.state().lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AuditSink for MemoryAuditSink {
    async fn append(&self, record: &CreationRecord) -> Result<(), AuditSinkError> {
        let line = encode_line(record)?;
        let mut state = self.state();
        if let Some(message) = &state.failure {
            return Err(AuditSinkError::write(message.clone()));
        }
        let text = match String::from_utf8(line) {
            Ok(text) => text,
            Err(err) => return Err(AuditSinkError::encode(err.to_string())),
        };
        state.lines.push(text);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UserRecordId, UserSubmission};

    fn record() -> CreationRecord {
        let submission = UserSubmission {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@x.com".into(),
            phone_number: "555-0100".into(),
            dob: "1815-12-10".into(),
            address: "London".into(),
        }
        .validate()
        .expect("valid submission");
        CreationRecord::new(UserRecordId::new(1), &submission)
    }

    #[tokio::test]
    async fn stores_newline_terminated_documents() {
        let sink = MemoryAuditSink::new();
        sink.append(&record()).await.expect("append");

        assert_eq!(
            sink.lines(),
            vec!["{\"id\":1,\"full_name\":\"Ada Lovelace\",\"email\":\"ada@x.com\"}\n".to_owned()]
        );
        assert_eq!(sink.records().expect("decode"), vec![record()]);
    }

    #[tokio::test]
    async fn injected_failure_stores_nothing() {
        let sink = MemoryAuditSink::new();
        sink.fail_with("disk full");

        let err = sink.append(&record()).await.expect_err("must fail");

        assert_eq!(err, AuditSinkError::write("disk full"));
        assert!(sink.is_empty());
    }
}
