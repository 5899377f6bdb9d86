//! Runtime configuration
//!
//! Layers, lowest priority first: built-in catalog, optional config file
//! (`twg-swap.toml` / `.json` / `.yaml`, or the path in `TWG_CONFIG_FILE`),
//! `TWG_*` environment variables. `.env` is loaded before anything is read.

use crate::domain::{Catalog, NetworkId};
use crate::shared::constants::{DEFAULT_CONFIG_FILE, DEFAULT_WALLET_RPC_URL, ENV_CONFIG_FILE, ENV_PREFIX};
use crate::shared::error::SwapError;
use crate::shared::utils::parse_address;
use config::{Config, Environment, File};
use dotenv::dotenv;
use serde::Deserialize;
use std::env;
use std::fmt;
use zeroize::Zeroizing;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSwapConfig {
    rpc_fantom: Option<String>,
    rpc_blast: Option<String>,
    rpc_ethereum: Option<String>,
    rpc_moonbeam: Option<String>,
    wallet_rpc_url: Option<String>,
    bridge_token_address: Option<String>,
    signer_key: Option<String>,
}

pub struct SwapConfig {
    pub rpc_fantom: Option<String>,
    pub rpc_blast: Option<String>,
    pub rpc_ethereum: Option<String>,
    pub rpc_moonbeam: Option<String>,
    /// Wallet endpoint speaking EIP-1193 methods over JSON-RPC
    pub wallet_rpc_url: String,
    pub bridge_token_address: Option<String>,
    /// Key that signs bridge transfers
    pub signer_key: Option<Zeroizing<String>>,
}

impl fmt::Debug for SwapConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwapConfig")
            .field("rpc_fantom", &self.rpc_fantom)
            .field("rpc_blast", &self.rpc_blast)
            .field("rpc_ethereum", &self.rpc_ethereum)
            .field("rpc_moonbeam", &self.rpc_moonbeam)
            .field("wallet_rpc_url", &self.wallet_rpc_url)
            .field("bridge_token_address", &self.bridge_token_address)
            .field("signer_key", &self.signer_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self::from(RawSwapConfig::default())
    }
}

impl From<RawSwapConfig> for SwapConfig {
    fn from(raw: RawSwapConfig) -> Self {
        Self {
            rpc_fantom: non_empty(raw.rpc_fantom),
            rpc_blast: non_empty(raw.rpc_blast),
            rpc_ethereum: non_empty(raw.rpc_ethereum),
            rpc_moonbeam: non_empty(raw.rpc_moonbeam),
            wallet_rpc_url: non_empty(raw.wallet_rpc_url).unwrap_or_else(|| DEFAULT_WALLET_RPC_URL.to_string()),
            bridge_token_address: non_empty(raw.bridge_token_address),
            signer_key: non_empty(raw.signer_key).map(Zeroizing::new),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl SwapConfig {
    /// Load `.env`, the optional config file and `TWG_*` variables
    pub fn load() -> Result<Self, SwapError> {
        dotenv().ok();

        let path = env::var(ENV_CONFIG_FILE).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        log::debug!("Loading configuration from {} (optional) and {}_* variables", path, ENV_PREFIX);
        Self::build(File::with_name(&path).required(false), Environment::with_prefix(ENV_PREFIX))
    }

    /// Load a specific config file, which must exist, plus `TWG_*` variables
    pub fn from_file(path: &str) -> Result<Self, SwapError> {
        Self::build(File::with_name(path).required(true), Environment::with_prefix(ENV_PREFIX))
    }

    fn build(
        file: File<config::FileSourceFile, config::FileFormat>,
        environment: Environment,
    ) -> Result<Self, SwapError> {
        let raw: RawSwapConfig = Config::builder()
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(Self::from(raw))
    }

    pub fn rpc_override(&self, id: NetworkId) -> Option<&str> {
        match id {
            NetworkId::Fantom => self.rpc_fantom.as_deref(),
            NetworkId::Blast => self.rpc_blast.as_deref(),
            NetworkId::Ethereum => self.rpc_ethereum.as_deref(),
            NetworkId::Moonbeam => self.rpc_moonbeam.as_deref(),
        }
    }

    /// Built-in catalog with the configured overrides applied
    pub fn catalog(&self) -> Result<Catalog, SwapError> {
        let mut catalog = Catalog::builtin()?;

        for id in NetworkId::ALL {
            if let (Some(url), Some(network)) = (self.rpc_override(id), catalog.network_mut(id)) {
                log::info!("Using RPC override for {}: {}", id, url);
                network.rpc_url = url.trim().to_string();
            }
        }

        if let Some(address) = &self.bridge_token_address {
            let address = parse_address(address)
                .map_err(|e| SwapError::config(format!("Invalid bridge token address: {}", e)))?;
            catalog.set_bridge_token(address);
        }

        Ok(catalog)
    }
}
