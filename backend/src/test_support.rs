//! Test doubles shared by unit and integration tests.
//!
//! Only compiled with the `test-support` feature.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{UserRecordId, ValidSubmission};

/// A row as the in-memory repository stored it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUser {
    pub id: UserRecordId,
    pub submission: ValidSubmission,
}

#[derive(Debug, Default)]
struct RepositoryState {
    rows: Vec<StoredUser>,
    failure: Option<UserPersistenceError>,
}

/// [`UserRepository`] assigning sequential ids starting at 1.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    next_id: AtomicI64,
    state: Mutex<RepositoryState>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            next_id: AtomicI64::new(1),
            state: Mutex::new(RepositoryState::default()),
        }
    }
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, RepositoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Make every following insert fail with `failure`.
    pub fn fail_with(&self, failure: UserPersistenceError) {
        self.state().failure = Some(failure);
    }

    /// Rows inserted so far, in insertion order.
    pub fn rows(&self) -> Vec<StoredUser> {
        self.state().rows.clone()
    }

    pub fn len(&self) -> usize {
        self.state().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(
        &self,
        submission: &ValidSubmission,
    ) -> Result<UserRecordId, UserPersistenceError> {
        let mut state = self.state();
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        let id = UserRecordId::new(self.next_id.fetch_add(1, Ordering::Relaxed));
        state.rows.push(StoredUser {
            id,
            submission: submission.clone(),
        });
        Ok(id)
    }
}
