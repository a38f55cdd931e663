//! Crate-level test suites
