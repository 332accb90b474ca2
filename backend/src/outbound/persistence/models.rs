//! Internal Diesel row structs.
//!
//! Implementation details of the persistence layer; the domain never sees
//! them.

use chrono::NaiveDate;
use diesel::prelude::*;

use crate::domain::ValidSubmission;

use super::schema::users;

/// Insertable row for the `users` table. `id` is left to the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone_number: &'a str,
    pub dob: NaiveDate,
    pub address: &'a str,
}

impl<'a> From<&'a ValidSubmission> for NewUserRow<'a> {
    fn from(submission: &'a ValidSubmission) -> Self {
        Self {
            first_name: submission.first_name(),
            last_name: submission.last_name(),
            email: submission.email(),
            phone_number: submission.phone_number(),
            dob: submission.date_of_birth().as_naive_date(),
            address: submission.address(),
        }
    }
}
