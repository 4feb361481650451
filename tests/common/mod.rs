//! Common test infrastructure for imgrecolor integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;
pub mod mock_server;

pub use fixtures::Workspace;
pub use mock_server::MockPaletteServer;
