//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod form_repo;
pub mod response_repo;

pub use form_repo::FormRepo;
pub use response_repo::ResponseRepo;
