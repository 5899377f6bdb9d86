//! ethers-backed chain collaborators
//!
//! `Eip1193Provider` talks to a wallet that exposes the EIP-1193 methods
//! over JSON-RPC (Frame and similar desktop wallets). `EthersBridge` signs and
//! submits `sendToken` calls on the bridge token contract.

use crate::domain::{BridgeTransport, TokenInterface, TokenReader, WalletProvider};
use crate::shared::error::{RpcFailure, SwapError};
use crate::shared::types::{AddChainParams, RpcResult, TransferReceipt, TransferRequest, TransferStatus};
use crate::shared::utils::tx_hash_hex;
use async_trait::async_trait;
use ethers::{
    contract::{Contract, ContractError},
    core::types::{Address, U256},
    middleware::SignerMiddleware,
    providers::{Http, Middleware, MiddlewareError, Provider},
    signers::{LocalWallet, Signer},
};
use serde_json::{json, Value};
use std::sync::Arc;
use zeroize::Zeroizing;

#[derive(Debug, Clone)]
pub struct Eip1193Provider {
    provider: Provider<Http>,
}

impl Eip1193Provider {
    pub fn new(rpc_url: &str) -> Result<Self, SwapError> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| SwapError::config(format!("Invalid wallet RPC URL {}: {}", rpc_url, e)))?;
        Ok(Self { provider })
    }
}

#[async_trait]
impl WalletProvider for Eip1193Provider {
    async fn request_accounts(&self) -> RpcResult<Vec<Address>> {
        log::debug!("eth_requestAccounts");
        let accounts: Vec<Address> = self.provider.request("eth_requestAccounts", ()).await?;
        Ok(accounts)
    }

    async fn switch_chain(&self, chain_id_hex: &str) -> RpcResult<()> {
        log::debug!("wallet_switchEthereumChain {}", chain_id_hex);
        let _: Value = self
            .provider
            .request("wallet_switchEthereumChain", [json!({ "chainId": chain_id_hex })])
            .await?;
        Ok(())
    }

    async fn add_chain(&self, params: &AddChainParams) -> RpcResult<()> {
        log::debug!("wallet_addEthereumChain {}", params.chain_id);
        let _: Value = self.provider.request("wallet_addEthereumChain", [params]).await?;
        Ok(())
    }

    async fn native_balance(&self, account: Address) -> RpcResult<U256> {
        Ok(self.provider.get_balance(account, None).await?)
    }
}

#[async_trait]
impl TokenReader for Eip1193Provider {
    async fn balance_of(&self, interface: TokenInterface, contract: Address, owner: Address) -> RpcResult<U256> {
        let abi = interface.abi().map_err(|e| RpcFailure::other(e.to_string()))?;
        let contract = Contract::new(contract, abi, Arc::new(self.provider.clone()));

        log::debug!("balanceOf({:?}) on {:?}", owner, contract.address());
        contract
            .method::<_, U256>("balanceOf", owner)
            .map_err(|e| RpcFailure::other(e.to_string()))?
            .call()
            .await
            .map_err(contract_failure)
    }
}

/// Signs bridge transfers with a locally held key
pub struct EthersBridge {
    signer_key: Option<Zeroizing<String>>,
}

impl EthersBridge {
    pub fn new(signer_key: Option<Zeroizing<String>>) -> Self {
        Self { signer_key }
    }

    fn wallet(&self) -> RpcResult<LocalWallet> {
        let key = self
            .signer_key
            .as_ref()
            .ok_or_else(|| RpcFailure::other("No signer key configured (TWG_SIGNER_KEY)"))?;
        key.trim()
            .trim_start_matches("0x")
            .parse::<LocalWallet>()
            .map_err(|e| RpcFailure::other(format!("Invalid signer key: {}", e)))
    }
}

#[async_trait]
impl BridgeTransport for EthersBridge {
    async fn send_token(&self, request: &TransferRequest) -> RpcResult<TransferReceipt> {
        let wallet = self.wallet()?;
        let provider = Provider::<Http>::try_from(request.rpc_url.as_str())
            .map_err(|e| RpcFailure::other(format!("Invalid RPC URL {}: {}", request.rpc_url, e)))?;
        let chain_id = provider.get_chainid().await?;
        let wallet = wallet.with_chain_id(chain_id.as_u64());
        let client = Arc::new(SignerMiddleware::new(provider, wallet));

        let abi = TokenInterface::InterchainToken
            .abi()
            .map_err(|e| RpcFailure::other(e.to_string()))?;
        let contract = Contract::new(request.bridge_contract, abi, client);

        let call = contract
            .method::<_, ()>(
                "sendToken",
                (
                    request.destination_chain.clone(),
                    request.destination_address.clone(),
                    request.amount,
                ),
            )
            .map_err(|e| RpcFailure::other(e.to_string()))?;

        let pending = call.send().await.map_err(contract_failure)?;
        let hash = tx_hash_hex(pending.tx_hash().as_bytes());
        log::info!("Bridge transfer submitted on {}: {}", request.network_id, hash);

        // no timeout on the confirmation wait
        let receipt = pending
            .await?
            .ok_or_else(|| RpcFailure::other(format!("Transaction {} was dropped", hash)))?;

        let status = match receipt.status.map(|s| s.as_u64()) {
            Some(0) => TransferStatus::Reverted,
            _ => TransferStatus::Confirmed,
        };

        Ok(TransferReceipt {
            hash,
            status,
            block_number: receipt.block_number.map(|n| n.as_u64()),
        })
    }
}

/// Keep the JSON-RPC code (e.g. 4001) when a contract call fails in the wallet
fn contract_failure<M: Middleware>(err: ContractError<M>) -> RpcFailure {
    let response = match &err {
        ContractError::MiddlewareError { e } => {
            MiddlewareError::as_error_response(e).map(|r| (r.code, r.message.clone()))
        }
        ContractError::ProviderError { e } => {
            MiddlewareError::as_error_response(e).map(|r| (r.code, r.message.clone()))
        }
        _ => None,
    };
    match response {
        Some((code, message)) => RpcFailure::new(code, message),
        None => RpcFailure::other(err.to_string()),
    }
}
