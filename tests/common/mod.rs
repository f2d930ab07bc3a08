// Common test utilities and fixtures

pub mod fixtures;
pub mod helpers;

// Re-export commonly used items
// Note: Not every integration test crate uses every helper
#[allow(unused_imports)]
pub use fixtures::{fixtures_dir, TestRepo, FIXTURE_DOCUMENT_COUNT};
#[allow(unused_imports)]
pub use helpers::{fixture_memex, load_dir, paths, small_memex};
