//! Helpers shared by the quickcheck-based tests.

pub(crate) mod quick;
