//! Registration input.
//!
//! [`UserSubmission`] is the decoded request payload exactly as the client
//! sent it. [`UserSubmission::validate`] turns it into a [`ValidSubmission`],
//! the only shape persistence adapters accept.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `chrono` layout for dates of birth.
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

const DATE_OF_BIRTH_LEN: usize = 10;

/// Validation failures for [`UserSubmission::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionValidationError {
    /// The value is not ten characters of the form `DDDD-DD-DD`.
    #[error("date of birth {value:?} does not match YYYY-MM-DD")]
    DateOfBirthLayout { value: String },
    /// The layout is right but the month/day do not name a real date.
    #[error("date of birth {value:?} is not a calendar date")]
    DateOfBirthOutOfRange { value: String },
}

/// User registration payload as received.
///
/// No field is interpreted until [`validate`](Self::validate) runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub dob: String,
    pub address: String,
}

impl UserSubmission {
    /// Check the date of birth and produce the persistable form.
    ///
    /// # Examples
    /// ```
    /// use user_intake::domain::UserSubmission;
    ///
    /// let submission = UserSubmission {
    ///     first_name: "Ada".into(),
    ///     last_name: "Lovelace".into(),
    ///     email: "ada@x.com".into(),
    ///     phone_number: "555-0100".into(),
    ///     dob: "1815-12-10".into(),
    ///     address: "London".into(),
    /// };
    /// let valid = submission.validate().expect("valid date");
    /// assert_eq!(valid.full_name(), "Ada Lovelace");
    /// ```
    pub fn validate(self) -> Result<ValidSubmission, SubmissionValidationError> {
        let date_of_birth = self.dob.parse::<DateOfBirth>()?;
        Ok(ValidSubmission {
            submission: self,
            date_of_birth,
        })
    }
}

/// A strictly parsed `YYYY-MM-DD` calendar date.
///
/// Stricter than `chrono`'s `%Y-%m-%d`, which tolerates single-digit months
/// and days and signed years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    /// The date as a `chrono` value.
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

fn has_date_layout(raw: &str) -> bool {
    raw.len() == DATE_OF_BIRTH_LEN
        && raw.bytes().enumerate().all(|(index, byte)| match index {
            4 | 7 => byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

impl FromStr for DateOfBirth {
    type Err = SubmissionValidationError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if !has_date_layout(raw) {
            return Err(SubmissionValidationError::DateOfBirthLayout {
                value: raw.to_owned(),
            });
        }
        NaiveDate::parse_from_str(raw, DATE_OF_BIRTH_FORMAT)
            .map(Self)
            .map_err(|_| SubmissionValidationError::DateOfBirthOutOfRange {
                value: raw.to_owned(),
            })
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_OF_BIRTH_FORMAT))
    }
}

/// Submission whose date of birth has been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidSubmission {
    submission: UserSubmission,
    date_of_birth: DateOfBirth,
}

impl ValidSubmission {
    pub fn first_name(&self) -> &str {
        &self.submission.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.submission.last_name
    }

    pub fn email(&self) -> &str {
        &self.submission.email
    }

    pub fn phone_number(&self) -> &str {
        &self.submission.phone_number
    }

    pub fn address(&self) -> &str {
        &self.submission.address
    }

    pub fn date_of_birth(&self) -> DateOfBirth {
        self.date_of_birth
    }

    /// First and last name joined by one space, neither trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.submission.first_name, self.submission.last_name)
    }
}
