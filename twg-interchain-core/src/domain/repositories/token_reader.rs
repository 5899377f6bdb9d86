//! Token balance port

use crate::domain::entities::TokenInterface;
use crate::shared::types::RpcResult;
use async_trait::async_trait;
use ethers::types::{Address, U256};

/// Reads token balances through the wallet's active chain
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenReader: Send + Sync {
    /// `balanceOf(owner)` on `contract`, in the token's smallest unit
    async fn balance_of(
        &self,
        interface: TokenInterface,
        contract: Address,
        owner: Address,
    ) -> RpcResult<U256>;
}
