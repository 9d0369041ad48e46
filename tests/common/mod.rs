//! Common test infrastructure
//!
//! This module provides the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.

mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use client::TestClient;
pub use constants::*;
pub use server::TestServer;
