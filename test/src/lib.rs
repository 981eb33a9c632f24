//! # Rigbridge Test
//! Test support for the Rigbridge crates: an in-memory engine stub and the
//! helpers the integration suites under `tests/` are built from.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]


pub use helpers::TestRig;
pub use stub_backend::StubBackend;
