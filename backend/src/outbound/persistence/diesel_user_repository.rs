//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{UserRecordId, ValidSubmission};

use super::connection::{AcquireError, ConnectionSource};
use super::models::NewUserRow;
use super::schema::users;

/// Diesel-backed implementation of the [`UserRepository`] port.
///
/// The connection policy (fresh per insert or pooled) is carried by the
/// [`ConnectionSource`]; the insert itself is identical for both.
#[derive(Clone, Debug)]
pub struct DieselUserRepository {
    connections: ConnectionSource,
}

impl DieselUserRepository {
    /// Create a repository drawing connections from `connections`.
    pub fn new(connections: ConnectionSource) -> Self {
        Self { connections }
    }
}

fn map_acquire_error(error: AcquireError) -> UserPersistenceError {
    UserPersistenceError::connection(error.to_string())
}

/// Every failure after a connection was obtained is a write failure, a
/// dropped connection included. The driver message is passed through.
fn map_write_error(error: DieselError) -> UserPersistenceError {
    match &error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            debug!("connection dropped mid-write");
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "user insert rejected");
        }
        _ => debug!(error = %error, "user insert failed"),
    }
    UserPersistenceError::write(error.to_string())
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(
        &self,
        submission: &ValidSubmission,
    ) -> Result<UserRecordId, UserPersistenceError> {
        let mut conn = self
            .connections
            .acquire()
            .await
            .map_err(map_acquire_error)?;

        let id: i32 = diesel::insert_into(users::table)
            .values(NewUserRow::from(submission))
            .returning(users::id)
            .get_result(&mut *conn)
            .await
            .map_err(map_write_error)?;

        Ok(UserRecordId::from(id))
    }
}
