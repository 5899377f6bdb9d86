//! Domain layer - entities, catalog and collaborator traits
//!
//! This module contains the session model and the ports the session
//! controller talks to.

pub mod entities;
pub mod catalog;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use catalog::*;
pub use repositories::*;
