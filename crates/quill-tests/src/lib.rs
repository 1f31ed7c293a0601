//! Integration test suite for Quill.
//!
//! Known-answer vectors, cross-implementation checks against the `bip39`
//! crate, property tests and adversarial inputs live under `tests/`.

pub mod helpers;
