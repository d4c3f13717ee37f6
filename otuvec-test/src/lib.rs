//! Test utilities for the otuvec workspace
//!
//! Centralises fixtures, temporary file environments and invariant assertions
//! so that the integration tests of each crate share one source of test data.
//!
//! # Features
//!
//! - **Test Environment**: temporary directories for list and group files
//! - **Fixtures**: example partitions, group maps and random generators
//! - **Assertions**: checks of the counter invariants on partitions and vectors

pub mod assertions;
pub mod environment;
pub mod fixtures;

// Re-export commonly used items
pub use environment::TestEnvironment;
pub use fixtures::{
    example_groups, example_partition, random_community, RandomCommunity, EXAMPLE_GROUP_FILE,
    EXAMPLE_LIST_FILE,
};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};
pub use tempfile;

/// Initialize test logging (call once per test module)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Run a test with a fresh temporary environment
///
/// # Example
/// ```rust
/// use otuvec_test::with_test_env;
///
/// with_test_env(|env| {
///     let path = env.write_file("groups.txt", "seq1\tA\n")?;
///     assert!(path.exists());
///     Ok(())
/// })
/// .unwrap();
/// ```
pub fn with_test_env<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&TestEnvironment) -> Result<R>,
{
    let env = TestEnvironment::new()?;
    // Cleanup happens automatically via Drop
    f(&env)
}
