//! Database-backed test infrastructure.
//!
//! Tests that exercise the real SQL layer get an isolated database inside a
//! shared PostgreSQL container. Isolation is per-database, not per-transaction:
//! services commit normally and clean state comes from each test owning its
//! own freshly migrated database.

mod db;

pub(crate) use context::TestContext;
