//! Wallet provider port
//!
//! The browser-injected EIP-1193 provider, modeled as an injected capability
//! so the session controller can run against a fake in tests.

use crate::shared::types::{AddChainParams, RpcResult};
use async_trait::async_trait;
use ethers::types::{Address, U256};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// `eth_requestAccounts`; the first address is the primary account
    async fn request_accounts(&self) -> RpcResult<Vec<Address>>;

    /// `wallet_switchEthereumChain`. Fails with code 4902 when the wallet
    /// does not know the chain.
    async fn switch_chain(&self, chain_id_hex: &str) -> RpcResult<()>;

    /// `wallet_addEthereumChain`. A successful add also makes the chain active.
    async fn add_chain(&self, params: &AddChainParams) -> RpcResult<()>;

    /// Native asset balance on the wallet's active chain
    async fn native_balance(&self, account: Address) -> RpcResult<U256>;
}
