//! CLI integration tests against fixture barrels.

#![cfg(unix)]

mod common;
mod info_tests;
