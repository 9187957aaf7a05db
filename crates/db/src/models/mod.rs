//! Row structs and write DTOs.
//!
//! Each submodule contains:
//! - `FromRow` entity structs matching the database rows
//! - A write DTO used by the repository's insert/update path

pub mod movie;
