//! Domain repositories
//!
//! Traits for the chain collaborators the session controller delegates to.

pub mod wallet_provider;
pub mod token_reader;
pub mod bridge_transport;

// Re-export repositories
pub use wallet_provider::*;
pub use token_reader::*;
pub use bridge_transport::*;
