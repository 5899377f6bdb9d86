//! Token entity for the swap core

use crate::shared::constants::{
    TokenConfig, ERC20_BALANCE_OF, INTERCHAIN_SEND_TOKEN, WRAPPED_DEPOSIT, WRAPPED_WITHDRAW,
};
use crate::shared::error::SwapError;
use crate::shared::utils::parse_address;
use ethers::abi::{parse_abi, Abi};
use ethers::types::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenSymbol {
    #[default]
    #[serde(rename = "tTWG")]
    Ttwg,
    #[serde(rename = "wETH")]
    Weth,
    #[serde(rename = "wFTM")]
    Wftm,
    #[serde(rename = "wMATIC")]
    Wmatic,
    /// Native asset of the connected network
    #[serde(rename = "native")]
    Native,
    /// User-supplied contract address
    #[serde(rename = "custom")]
    Custom,
}

impl TokenSymbol {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenSymbol::Ttwg => "tTWG",
            TokenSymbol::Weth => "wETH",
            TokenSymbol::Wftm => "wFTM",
            TokenSymbol::Wmatic => "wMATIC",
            TokenSymbol::Native => "native",
            TokenSymbol::Custom => "custom",
        }
    }
}

impl fmt::Display for TokenSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TokenSymbol {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ttwg" => Ok(TokenSymbol::Ttwg),
            "weth" => Ok(TokenSymbol::Weth),
            "wftm" => Ok(TokenSymbol::Wftm),
            "wmatic" => Ok(TokenSymbol::Wmatic),
            "native" => Ok(TokenSymbol::Native),
            "custom" => Ok(TokenSymbol::Custom),
            other => Err(SwapError::validation(format!("Unknown token: {}", other))),
        }
    }
}

/// Contract interface used to talk to a token
///
/// Custom tokens reuse `InterchainToken`; there is no per-address ABI lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenInterface {
    InterchainToken,
    WrappedEth,
    WrappedFtm,
    WrappedMatic,
}

impl TokenInterface {
    pub fn abi(&self) -> Result<Abi, SwapError> {
        let signatures: &[&str] = match self {
            TokenInterface::InterchainToken => &[ERC20_BALANCE_OF, INTERCHAIN_SEND_TOKEN],
            TokenInterface::WrappedEth | TokenInterface::WrappedFtm | TokenInterface::WrappedMatic => {
                &[ERC20_BALANCE_OF, WRAPPED_DEPOSIT, WRAPPED_WITHDRAW]
            }
        };
        parse_abi(signatures).map_err(|e| SwapError::config(format!("Invalid ABI for {:?}: {}", self, e)))
    }
}

/// Static description of a selectable token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenDescriptor {
    pub symbol: TokenSymbol,
    pub display_name: String,
    /// `None` for the native asset
    pub contract_address: Option<Address>,
    /// `None` for the native asset, which has no contract to call
    pub interface: Option<TokenInterface>,
}

impl TokenDescriptor {
    pub fn from_config(
        symbol: TokenSymbol,
        config: &TokenConfig,
        interface: TokenInterface,
    ) -> Result<Self, SwapError> {
        Ok(Self {
            symbol,
            display_name: config.name.to_string(),
            contract_address: Some(parse_address(config.address)?),
            interface: Some(interface),
        })
    }

    pub fn native() -> Self {
        Self {
            symbol: TokenSymbol::Native,
            display_name: "Native Balance".to_string(),
            contract_address: None,
            interface: None,
        }
    }

    pub fn is_native(&self) -> bool {
        self.contract_address.is_none()
    }

    /// Picker label, e.g. "Wrapped Ethereum (wETH)"
    pub fn label(&self) -> String {
        if self.is_native() {
            self.display_name.clone()
        } else {
            format!("{} ({})", self.display_name, self.symbol)
        }
    }
}

/// Token the next balance query runs against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedToken {
    Native,
    Contract {
        symbol: TokenSymbol,
        address: Address,
        interface: TokenInterface,
    },
}

pub const CUSTOM_TOKEN_LABEL: &str = "Custom Token";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::constants::WETH_TOKEN;

    #[test]
    fn test_symbol_parsing() {
        assert_eq!("wETH".parse::<TokenSymbol>().unwrap(), TokenSymbol::Weth);
        assert_eq!("TTWG".parse::<TokenSymbol>().unwrap(), TokenSymbol::Ttwg);
        assert!("doge".parse::<TokenSymbol>().is_err());
    }

    #[test]
    fn test_symbol_serde_names() {
        let json = serde_json::to_string(&TokenSymbol::Wmatic).unwrap();
        assert_eq!(json, "\"wMATIC\"");
    }

    #[test]
    fn test_descriptor_label() {
        let weth = TokenDescriptor::from_config(TokenSymbol::Weth, &WETH_TOKEN, TokenInterface::WrappedEth).unwrap();
        assert_eq!(weth.label(), "Wrapped Ethereum (wETH)");
        assert!(!weth.is_native());
        assert_eq!(weth.interface, Some(TokenInterface::WrappedEth));

        let native = TokenDescriptor::native();
        assert!(native.is_native());
        assert!(native.interface.is_none());
    }

    #[test]
    fn test_interfaces_expose_balance_of() {
        for interface in [
            TokenInterface::InterchainToken,
            TokenInterface::WrappedEth,
            TokenInterface::WrappedFtm,
            TokenInterface::WrappedMatic,
        ] {
            let abi = interface.abi().unwrap();
            assert!(abi.function("balanceOf").is_ok());
        }
        assert!(TokenInterface::InterchainToken.abi().unwrap().function("sendToken").is_ok());
    }
}
