//! Diesel table definitions for the PostgreSQL schema.
//!
//! The `users` table is provisioned outside this service. Keep this file in
//! step with it (`diesel print-schema` regenerates it from a live database):
//!
//! ```sql
//! CREATE TABLE users (
//!     id           SERIAL PRIMARY KEY,
//!     first_name   TEXT NOT NULL,
//!     last_name    TEXT NOT NULL,
//!     email        TEXT NOT NULL,
//!     phone_number TEXT NOT NULL,
//!     dob          DATE NOT NULL,
//!     address      TEXT NOT NULL
//! );
//! ```

diesel::table! {
    /// Registered users, one row per successful submission.
    users (id) {
        /// Primary key assigned by the `SERIAL` sequence.
        id -> Int4,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        phone_number -> Text,
        dob -> Date,
        address -> Text,
    }
}
