// tests/support/mod.rs
// Shared by several integration test binaries; each uses a subset.
#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
