//! Core swap functionality
//!
//! This module contains the session controller, transfer preparation and the
//! read-only view the front-end renders.

pub mod session;
pub mod transactions;
pub mod view;

pub use session::SessionController;
pub use transactions::build_transfer_request;
pub use view::SessionView;
