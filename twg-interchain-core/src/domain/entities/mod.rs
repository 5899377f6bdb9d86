//! Domain entities and value objects
//!
//! This module contains the networks, tokens and the per-session state the
//! swap front-end works with.

pub mod network;
pub mod token;
pub mod session;

// Re-export entities
pub use network::*;
pub use token::*;
pub use session::*;
