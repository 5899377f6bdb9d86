//! Read-only snapshot of a session for rendering
//!
//! Front-ends render from `SessionView` and send user actions back through
//! the controller; they never edit session fields themselves.

use crate::domain::{Catalog, NetworkId, Session, TokenSymbol, CUSTOM_TOKEN_LABEL};
use crate::shared::types::{StatusLevel, StatusMessage};
use crate::shared::utils::short_address;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const CONNECT_LABEL: &str = "Connect Wallet";
pub const DISCONNECT_LABEL: &str = "Disconnect Wallet";
pub const NO_NETWORK_LABEL: &str = "Network";
pub const NO_BALANCE: &str = "-";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkOption {
    pub id: NetworkId,
    pub label: String,
    pub logo_url: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenOption {
    pub symbol: TokenSymbol,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    pub connect_label: String,
    pub account: Option<String>,
    pub network_label: String,
    pub networks: Vec<NetworkOption>,
    pub tokens: Vec<TokenOption>,
    pub show_custom_address: bool,
    pub custom_token_address: Option<String>,
    pub balance: String,
    pub status: Option<StatusMessage>,
    /// Transfer targets; any configured network, whatever the wallet is on
    pub destinations: Vec<NetworkOption>,
    pub bridge_contract: String,
}

impl SessionView {
    pub fn new(session: &Session, catalog: &Catalog) -> Self {
        let connected = session.is_connected();

        let network_label = session
            .network
            .and_then(|id| catalog.network(id))
            .map(|n| n.display_name.clone())
            .unwrap_or_else(|| NO_NETWORK_LABEL.to_string());

        let networks = catalog
            .networks()
            .iter()
            .map(|n| NetworkOption {
                id: n.id,
                label: n.display_name.clone(),
                logo_url: n.logo_url.clone(),
                selected: session.network == Some(n.id),
            })
            .collect();

        let destinations = catalog
            .networks()
            .iter()
            .map(|n| NetworkOption {
                id: n.id,
                label: n.display_name.clone(),
                logo_url: n.logo_url.clone(),
                selected: false,
            })
            .collect();

        let tokens = session
            .token_options
            .iter()
            .map(|symbol| TokenOption {
                symbol: *symbol,
                label: token_label(catalog, *symbol),
                selected: session.selected_token == *symbol,
            })
            .collect();

        Self {
            connect_label: (if connected { DISCONNECT_LABEL } else { CONNECT_LABEL }).to_string(),
            account: session.account.as_ref().map(short_address),
            network_label,
            networks,
            tokens,
            show_custom_address: session.selected_token == TokenSymbol::Custom,
            custom_token_address: session.custom_token_address.clone(),
            balance: session.balance.clone().unwrap_or_else(|| NO_BALANCE.to_string()),
            status: session.status.clone(),
            destinations,
            bridge_contract: format!("CA: {:?}", catalog.bridge_token()),
        }
    }
}

fn token_label(catalog: &Catalog, symbol: TokenSymbol) -> String {
    match catalog.token(symbol) {
        Some(descriptor) => descriptor.label(),
        None if symbol == TokenSymbol::Custom => CUSTOM_TOKEN_LABEL.to_string(),
        None => symbol.to_string(),
    }
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]  {}", self.connect_label, self.account.as_deref().unwrap_or(""))?;
        writeln!(f, "Network: {}", self.network_label)?;
        for network in &self.networks {
            let marker = if network.selected { "*" } else { " " };
            writeln!(f, "  {} {:<9} {}", marker, network.id, network.label)?;
        }

        writeln!(f, "Token:")?;
        for token in &self.tokens {
            let marker = if token.selected { "*" } else { " " };
            writeln!(f, "  {} {:<7} {}", marker, token.symbol, token.label)?;
        }
        if self.show_custom_address {
            writeln!(
                f,
                "  Custom token address: {}",
                self.custom_token_address.as_deref().unwrap_or("<not set>")
            )?;
        }

        writeln!(f, "Balance: {}", self.balance)?;
        let destinations: Vec<&str> = self.destinations.iter().map(|d| d.id.as_str()).collect();
        writeln!(f, "Send to: {}", destinations.join(", "))?;
        writeln!(f, "{}", self.bridge_contract)?;

        if let Some(status) = &self.status {
            let tag = match status.level {
                StatusLevel::Info => "info",
                StatusLevel::Success => "ok",
                StatusLevel::Error => "error",
            };
            write!(f, "[{}] {}", tag, status.text)?;
        }
        Ok(())
    }
}
