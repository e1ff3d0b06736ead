//! Shared test utilities
//!
//! - `TestDatabase`: PostgreSQL container with the workspace migrations applied
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::TestDatabase;
//!
//! #[tokio::test]
//! #[ignore] // Requires Docker
//! async fn my_postgres_test() {
//!     let db = TestDatabase::new().await;
//!     let pool = db.pool();
//! }
//! ```

mod postgres;

pub use postgres::TestDatabase;
