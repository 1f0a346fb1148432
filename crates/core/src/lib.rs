//! Domain model and validation for the form builder.
//!
//! This crate is free of I/O: it defines the question/answer model and the
//! validation rules that the persistence and HTTP layers enforce.

pub mod answer;
pub mod error;
pub mod question;
pub mod types;
pub mod validation;
