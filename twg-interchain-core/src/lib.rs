//! TWG Interchain Core
//!
//! Session core for the Trump Wif Grill interchain swap front-end.
//! Connects a wallet, moves it between the supported testnets, reads token
//! balances and bridges tTWG to another chain.
//!
//! ## Architecture
//!
//! - **Core**: Session controller, transfer preparation, session view
//! - **Domain**: Networks, tokens, sessions, the catalog and collaborator traits
//! - **Infrastructure**: Configuration and the ethers-backed collaborators
//! - **Shared**: Common types, constants, errors and utilities
//!
//! ## Usage
//!
//! ```no_run
//! use twg_interchain_core::{init_swap_core, NetworkId, TokenSymbol};
//!
//! # async fn run() -> Result<(), twg_interchain_core::SwapError> {
//! let mut controller = init_swap_core().await?;
//!
//! controller.connect().await?;
//! controller.switch_network_by_id(NetworkId::Blast).await?;
//! controller.select_token(TokenSymbol::Ttwg, None).await?;
//!
//! println!("{}", controller.view());
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export main types
pub use crate::core::{SessionController, SessionView};
pub use domain::{Catalog, NetworkDescriptor, NetworkId, Session, TokenDescriptor, TokenSymbol};
pub use domain::{BridgeTransport, TokenReader, WalletProvider};
pub use infrastructure::{Eip1193Provider, EthersBridge, SwapConfig};
pub use shared::error::{RpcFailure, SwapError};
pub use shared::types::{DisplayBalance, TransferReceipt, TransferStatus};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Initialize logging; `RUST_LOG` controls verbosity
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::try_init()?;
    Ok(())
}

/// Build a session controller from `.env`, the optional config file and
/// `TWG_*` environment variables
pub async fn init_swap_core() -> Result<SessionController, SwapError> {
    let config = SwapConfig::load()?;
    build_controller(config)
}

/// Wire the ethers-backed collaborators for `config`
pub fn build_controller(config: SwapConfig) -> Result<SessionController, SwapError> {
    let catalog = Arc::new(config.catalog()?);
    let wallet = Arc::new(Eip1193Provider::new(&config.wallet_rpc_url)?);
    let bridge = Arc::new(EthersBridge::new(config.signer_key));

    log::info!(
        "{} {} ready: wallet endpoint {}, {} networks",
        NAME,
        VERSION,
        config.wallet_rpc_url,
        catalog.networks().len()
    );

    let provider: Arc<dyn WalletProvider> = wallet.clone();
    Ok(SessionController::new(catalog, Some(provider), wallet, bridge))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_controller_with_defaults() {
        let controller = build_controller(SwapConfig::default()).unwrap();
        assert!(!controller.session().is_connected());
        assert_eq!(controller.catalog().networks().len(), 4);
        assert_eq!(controller.view().connect_label, "Connect Wallet");
    }

    #[test]
    fn test_build_controller_rejects_bad_wallet_url() {
        let mut config = SwapConfig::default();
        config.wallet_rpc_url = "::not a url::".to_string();
        assert!(matches!(build_controller(config), Err(SwapError::Config(_))));
    }

    #[test]
    fn test_init_logging_twice() {
        let _ = init();
        assert!(init().is_err());
    }
}
