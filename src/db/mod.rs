//! Database access layer
//!
//! Free functions over `&PgPool`, one SQL statement per call. No
//! transactions: every statement commits independently.

pub mod employees;
