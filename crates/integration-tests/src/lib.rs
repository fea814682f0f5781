//! Integration tests for Tamarind.
//!
//! The tests in `tests/` run against a live `PostgreSQL` database and are
//! ignored by default.
//!
//! # Running Tests
//!
//! ```bash
//! # Point at a disposable database
//! export DATABASE_URL=postgres://localhost/tamarind_test
//!
//! # Run the ignored database tests
//! cargo test -p tamarind-integration-tests -- --ignored
//! ```
//!
//! Migrations are applied automatically before each test; every test creates
//! its own user and catalog rows, so tests do not interfere with each other
//! and can share a database.
