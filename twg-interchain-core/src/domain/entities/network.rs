//! Network entity for the swap core

use crate::shared::constants::NetworkConfig;
use crate::shared::error::SwapError;
use crate::shared::types::AddChainParams;
use crate::shared::utils::normalize_chain_id_hex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkId {
    Fantom,
    Blast,
    Ethereum,
    Moonbeam,
}

impl NetworkId {
    pub const ALL: [NetworkId; 4] = [
        NetworkId::Fantom,
        NetworkId::Blast,
        NetworkId::Ethereum,
        NetworkId::Moonbeam,
    ];

    /// Identifier used by the picker and by the bridge contract
    pub fn as_str(&self) -> &'static str {
        match self {
            NetworkId::Fantom => "fantom",
            NetworkId::Blast => "blast",
            NetworkId::Ethereum => "ethereum",
            NetworkId::Moonbeam => "moonbeam",
        }
    }
}

impl fmt::Display for NetworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for NetworkId {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fantom" => Ok(NetworkId::Fantom),
            "blast" => Ok(NetworkId::Blast),
            "ethereum" => Ok(NetworkId::Ethereum),
            "moonbeam" => Ok(NetworkId::Moonbeam),
            other => Err(SwapError::config(format!("Unknown network: {}", other))),
        }
    }
}

/// Static description of a supported chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    pub id: NetworkId,
    pub display_name: String,
    pub chain_id_hex: String,
    pub rpc_url: String,
    pub logo_url: Option<String>,
}

impl NetworkDescriptor {
    pub fn new(
        id: NetworkId,
        display_name: impl Into<String>,
        chain_id_hex: &str,
        rpc_url: impl Into<String>,
        logo_url: Option<String>,
    ) -> Result<Self, SwapError> {
        let rpc_url = rpc_url.into();
        if rpc_url.trim().is_empty() {
            return Err(SwapError::config(format!("RPC URL not set for {}", id)));
        }
        Ok(Self {
            id,
            display_name: display_name.into(),
            chain_id_hex: normalize_chain_id_hex(chain_id_hex)?,
            rpc_url,
            logo_url,
        })
    }

    pub fn from_config(config: &NetworkConfig) -> Result<Self, SwapError> {
        let logo_url = if config.logo_url.is_empty() {
            None
        } else {
            Some(config.logo_url.to_string())
        };
        Self::new(
            config.id.parse()?,
            config.name,
            config.chain_id_hex,
            config.rpc_url,
            logo_url,
        )
    }

    pub fn chain_id(&self) -> u64 {
        // chain_id_hex is normalized on construction
        u64::from_str_radix(self.chain_id_hex.trim_start_matches("0x"), 16).unwrap_or_default()
    }

    /// Registration request for wallets that do not know this chain yet
    pub fn add_chain_params(&self) -> AddChainParams {
        AddChainParams {
            chain_id: self.chain_id_hex.clone(),
            chain_name: self.display_name.clone(),
            rpc_urls: vec![self.rpc_url.clone()],
            icon_urls: self.logo_url.iter().cloned().collect(),
        }
    }
}
