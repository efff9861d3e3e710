//! Shared helpers for integration tests.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use resource_matchers::resource::MemoryResource;

/// Install a test-friendly tracing subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// `/parent` with the children `child1` and `child2`, in that order.
pub fn parent_with_two_children() -> MemoryResource {
    MemoryResource::new("/parent").with_children(["child1", "child2"])
}
