//! Session entity
//!
//! One `Session` exists per controller. It is the single source of truth the
//! UI renders from; the UI never writes form state back into it directly.

use crate::domain::entities::network::NetworkId;
use crate::domain::entities::token::TokenSymbol;
use crate::shared::types::{DisplayBalance, StatusMessage};
use chrono::{DateTime, Utc};
use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Connection state derived from `account` and `network`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Disconnected,
    ConnectedNoNetwork,
    OnNetwork(NetworkId),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub account: Option<Address>,
    pub network: Option<NetworkId>,
    pub selected_token: TokenSymbol,
    pub custom_token_address: Option<String>,
    pub token_options: Vec<TokenSymbol>,
    /// Last successfully queried balance
    pub balance: Option<DisplayBalance>,
    pub status: Option<StatusMessage>,
}

impl Session {
    pub fn new(token_options: Vec<TokenSymbol>) -> Self {
        Self {
            id: format!("session_{}", uuid::Uuid::new_v4()),
            created_at: Utc::now(),
            account: None,
            network: None,
            selected_token: TokenSymbol::default(),
            custom_token_address: None,
            token_options,
            balance: None,
            status: None,
        }
    }

    pub fn state(&self) -> SessionState {
        match (self.account, self.network) {
            (None, _) => SessionState::Disconnected,
            (Some(_), None) => SessionState::ConnectedNoNetwork,
            (Some(_), Some(network)) => SessionState::OnNetwork(network),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Custom token selected but no address entered yet
    pub fn awaiting_custom_address(&self) -> bool {
        self.selected_token == TokenSymbol::Custom && self.custom_token_address.is_none()
    }

    pub fn report(&mut self, status: StatusMessage) {
        self.status = Some(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_disconnected() {
        let session = Session::new(vec![TokenSymbol::Ttwg]);
        assert_eq!(session.state(), SessionState::Disconnected);
        assert_eq!(session.selected_token, TokenSymbol::Ttwg);
        assert!(session.balance.is_none());
        assert!(session.id.starts_with("session_"));
    }

    #[test]
    fn test_state_transitions() {
        let mut session = Session::new(Vec::new());
        session.account = Some(Address::repeat_byte(0x11));
        assert_eq!(session.state(), SessionState::ConnectedNoNetwork);

        session.network = Some(NetworkId::Blast);
        assert_eq!(session.state(), SessionState::OnNetwork(NetworkId::Blast));

        // network without account is still disconnected
        session.account = None;
        assert_eq!(session.state(), SessionState::Disconnected);
    }

    #[test]
    fn test_awaiting_custom_address() {
        let mut session = Session::new(Vec::new());
        session.selected_token = TokenSymbol::Custom;
        assert!(session.awaiting_custom_address());

        session.custom_token_address = Some("0x4200000000000000000000000000000000000023".to_string());
        assert!(!session.awaiting_custom_address());
    }
}
