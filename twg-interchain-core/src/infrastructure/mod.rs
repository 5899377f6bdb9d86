//! Infrastructure layer - configuration and chain integrations
//!
//! This module contains the configuration loader and the ethers-backed
//! implementations of the wallet, token and bridge collaborators.

pub mod config;
pub mod ethereum;

// Re-export infrastructure components
pub use self::config::*;
pub use ethereum::*;
