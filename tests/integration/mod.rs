//! Integration tests for treeshell.

pub mod dispatch_test;
pub mod registry_test;
