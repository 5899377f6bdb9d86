//! Bridge transport port

use crate::shared::types::{RpcResult, TransferReceipt, TransferRequest};
use async_trait::async_trait;

/// Submits a cross-chain transfer and waits for it to be mined.
///
/// Implementations connect to `request.rpc_url` independently of the
/// wallet's active chain. The confirmation wait has no timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BridgeTransport: Send + Sync {
    async fn send_token(&self, request: &TransferRequest) -> RpcResult<TransferReceipt>;
}
