//! Catalog domain for cinedex.
//!
//! Holds the movie model, the contracts for the local store and the external
//! metadata provider, and the [`reconcile::Reconciler`] that arbitrates
//! between the two. This crate has no database or HTTP dependencies so the
//! same engine runs against Postgres in production and in-memory in tests.

pub mod error;
pub mod external_id;
pub mod memory;
pub mod movie;
pub mod provider;
pub mod reconcile;
pub mod store;
pub mod types;
