//! Static network and token catalog
//!
//! The catalog is built once (from the built-in constants, optionally with
//! configuration overrides) and injected into the session controller. It is
//! read-only at runtime.

use crate::domain::entities::{
    NetworkDescriptor, NetworkId, ResolvedToken, TokenDescriptor, TokenInterface, TokenSymbol,
};
use crate::shared::constants::{
    BRIDGE_TOKEN_ADDRESS, SUPPORTED_NETWORKS, TTWG_TOKEN, WETH_TOKEN, WFTM_TOKEN, WMATIC_TOKEN,
};
use crate::shared::error::SwapError;
use crate::shared::utils::parse_address;
use ethers::types::Address;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    networks: Vec<NetworkDescriptor>,
    tokens: Vec<TokenDescriptor>,
    bridge_token: Address,
}

impl Catalog {
    pub fn new(
        networks: Vec<NetworkDescriptor>,
        tokens: Vec<TokenDescriptor>,
        bridge_token: Address,
    ) -> Result<Self, SwapError> {
        if networks.is_empty() {
            return Err(SwapError::config("Catalog needs at least one network"));
        }
        for (i, network) in networks.iter().enumerate() {
            if networks[..i].iter().any(|n| n.id == network.id) {
                return Err(SwapError::config(format!("Duplicate network: {}", network.id)));
            }
        }
        if let Some(token) = tokens.iter().find(|t| t.contract_address.is_some() && t.interface.is_none()) {
            return Err(SwapError::config(format!("No contract interface for {}", token.symbol)));
        }
        if tokens.iter().any(|t| t.symbol == TokenSymbol::Custom) {
            return Err(SwapError::config("Custom token cannot be statically configured"));
        }
        Ok(Self {
            networks,
            tokens,
            bridge_token,
        })
    }

    /// Built-in testnet catalog
    pub fn builtin() -> Result<Self, SwapError> {
        let networks = SUPPORTED_NETWORKS
            .iter()
            .map(|config| NetworkDescriptor::from_config(config))
            .collect::<Result<Vec<_>, _>>()?;

        let tokens = vec![
            TokenDescriptor::from_config(TokenSymbol::Ttwg, &TTWG_TOKEN, TokenInterface::InterchainToken)?,
            TokenDescriptor::from_config(TokenSymbol::Weth, &WETH_TOKEN, TokenInterface::WrappedEth)?,
            TokenDescriptor::from_config(TokenSymbol::Wftm, &WFTM_TOKEN, TokenInterface::WrappedFtm)?,
            TokenDescriptor::from_config(TokenSymbol::Wmatic, &WMATIC_TOKEN, TokenInterface::WrappedMatic)?,
            TokenDescriptor::native(),
        ];

        Self::new(networks, tokens, parse_address(BRIDGE_TOKEN_ADDRESS)?)
    }

    pub fn networks(&self) -> &[NetworkDescriptor] {
        &self.networks
    }

    pub fn tokens(&self) -> &[TokenDescriptor] {
        &self.tokens
    }

    pub fn bridge_token(&self) -> Address {
        self.bridge_token
    }

    pub fn network(&self, id: NetworkId) -> Option<&NetworkDescriptor> {
        self.networks.iter().find(|n| n.id == id)
    }

    pub fn network_mut(&mut self, id: NetworkId) -> Option<&mut NetworkDescriptor> {
        self.networks.iter_mut().find(|n| n.id == id)
    }

    pub fn token(&self, symbol: TokenSymbol) -> Option<&TokenDescriptor> {
        self.tokens.iter().find(|t| t.symbol == symbol)
    }

    /// Point transfers and the tTWG picker entry at another deployment
    pub fn set_bridge_token(&mut self, address: Address) {
        self.bridge_token = address;
        for token in self.tokens.iter_mut().filter(|t| t.symbol == TokenSymbol::Ttwg) {
            token.contract_address = Some(address);
        }
    }

    /// Token picker contents for a network. Every configured token is offered
    /// on every network, followed by the custom entry.
    pub fn token_options(&self, _network: Option<NetworkId>) -> Vec<TokenSymbol> {
        self.tokens
            .iter()
            .map(|t| t.symbol)
            .chain(std::iter::once(TokenSymbol::Custom))
            .collect()
    }

    /// Resolve the token a balance query should run against.
    ///
    /// Returns `Ok(None)` when `custom` is selected without an address.
    pub fn resolve_token(
        &self,
        symbol: TokenSymbol,
        custom_address: Option<&str>,
    ) -> Result<Option<ResolvedToken>, SwapError> {
        if symbol == TokenSymbol::Custom {
            let address = match custom_address.map(str::trim).filter(|a| !a.is_empty()) {
                Some(address) => address,
                None => return Ok(None),
            };
            return Ok(Some(ResolvedToken::Contract {
                symbol,
                address: parse_address(address)?,
                interface: TokenInterface::InterchainToken,
            }));
        }

        let descriptor = self
            .token(symbol)
            .ok_or_else(|| SwapError::config(format!("Token not configured: {}", symbol)))?;

        match (descriptor.contract_address, descriptor.interface) {
            (None, _) => Ok(Some(ResolvedToken::Native)),
            (Some(address), Some(interface)) => Ok(Some(ResolvedToken::Contract {
                symbol,
                address,
                interface,
            })),
            (Some(_), None) => Err(SwapError::config(format!("No contract interface for {}", symbol))),
        }
    }
}
