//! Network session controller
//!
//! Owns the `Session` and mutates it in response to user actions. All chain
//! I/O goes through the injected `WalletProvider`, `TokenReader` and
//! `BridgeTransport`.
//!
//! Every operation takes `&mut self`, so at most one runs at a time and each
//! session field holds the last resolved result. Nothing can be cancelled and
//! no timeouts are added on top of the collaborators' own; in particular the
//! transfer confirmation wait is unbounded.

use crate::core::transactions::build_transfer_request;
use crate::core::view::SessionView;
use crate::domain::{
    BridgeTransport, Catalog, NetworkDescriptor, NetworkId, ResolvedToken, Session, TokenReader,
    TokenSymbol, WalletProvider,
};
use crate::shared::constants::DISPLAY_DECIMALS;
use crate::shared::error::SwapError;
use crate::shared::types::{DisplayBalance, StatusMessage, SwapResult, TransferReceipt, TransferStatus};
use crate::shared::utils::{format_balance, short_address};
use ethers::types::Address;
use std::sync::Arc;

pub struct SessionController {
    catalog: Arc<Catalog>,
    /// `None` when no wallet is installed
    wallet: Option<Arc<dyn WalletProvider>>,
    tokens: Arc<dyn TokenReader>,
    bridge: Arc<dyn BridgeTransport>,
    session: Session,
}

impl SessionController {
    pub fn new(
        catalog: Arc<Catalog>,
        wallet: Option<Arc<dyn WalletProvider>>,
        tokens: Arc<dyn TokenReader>,
        bridge: Arc<dyn BridgeTransport>,
    ) -> Self {
        let session = Session::new(catalog.token_options(None));
        Self {
            catalog,
            wallet,
            tokens,
            bridge,
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn view(&self) -> SessionView {
        SessionView::new(&self.session, &self.catalog)
    }

    /// Request account access and refresh the balance for the new account.
    ///
    /// A failed balance refresh is reported on the status line but does not
    /// fail the connection.
    pub async fn connect(&mut self) -> SwapResult<Address> {
        let wallet = self.wallet_or_fail()?;

        let accounts = match wallet.request_accounts().await {
            Ok(accounts) => accounts,
            Err(e) if e.is_user_rejected() => return Err(self.fail(SwapError::user_rejected(e.to_string()))),
            Err(e) => return Err(self.fail(SwapError::provider_unavailable(e.to_string()))),
        };

        let account = match accounts.first() {
            Some(account) => *account,
            None => return Err(self.fail(SwapError::provider_unavailable("Wallet returned no accounts"))),
        };

        self.session.account = Some(account);
        log::info!("Connected wallet account {:?}", account);
        self.session
            .report(StatusMessage::success(format!("Connected {}", short_address(&account))));

        self.refresh_and_report().await;
        Ok(account)
    }

    /// Drop the account and start over with a fresh session. Wallets expose
    /// no reliable disconnect signal, so this is purely local.
    pub fn disconnect(&mut self) {
        log::info!("Disconnecting session {}", self.session.id);
        self.session = Session::new(self.catalog.token_options(None));
    }

    /// Switch the wallet to `target`, registering the chain first when the
    /// wallet reports it as unknown (code 4902).
    pub async fn switch_network(&mut self, target: &NetworkDescriptor) -> SwapResult<()> {
        let wallet = self.wallet_or_fail()?;

        log::debug!("Requesting switch to {} ({})", target.id, target.chain_id_hex);
        match wallet.switch_chain(&target.chain_id_hex).await {
            Ok(()) => {}
            Err(e) if e.is_unrecognized_chain() => {
                log::info!("Wallet does not know {}, adding it", target.id);
                // a successful add also activates the chain, no second switch
                if let Err(add_err) = wallet.add_chain(&target.add_chain_params()).await {
                    return Err(self.fail(SwapError::network_add_failed(target.id.as_str(), add_err.to_string())));
                }
            }
            Err(e) => {
                return Err(self.fail(SwapError::network_switch_failed(target.id.as_str(), e.to_string())));
            }
        }

        self.apply_network(target.id);
        log::info!("Switched to network {}", target.id);
        self.session
            .report(StatusMessage::success(format!("Switched to {}", target.display_name)));

        self.refresh_and_report().await;
        Ok(())
    }

    pub async fn switch_network_by_id(&mut self, id: NetworkId) -> SwapResult<()> {
        let target = match self.catalog.network(id) {
            Some(target) => target.clone(),
            None => return Err(self.fail(SwapError::config(format!("Network not configured: {}", id)))),
        };
        self.switch_network(&target).await
    }

    /// Query the balance of the selected token for the connected account.
    ///
    /// Returns `Ok(None)` without querying anything when no account is
    /// connected or when the custom token has no address yet. On failure the
    /// last known balance is kept.
    pub async fn refresh_balance(&mut self) -> SwapResult<Option<DisplayBalance>> {
        let account = match self.session.account {
            Some(account) => account,
            None => {
                log::debug!("Skipping balance refresh, no account connected");
                return Ok(None);
            }
        };

        let resolved = match self
            .catalog
            .resolve_token(self.session.selected_token, self.session.custom_token_address.as_deref())
        {
            Ok(Some(resolved)) => resolved,
            Ok(None) => {
                log::debug!("Skipping balance refresh, custom token address missing");
                self.session
                    .report(StatusMessage::info("Enter a custom token address to see its balance"));
                return Ok(None);
            }
            Err(e) => return Err(self.fail(SwapError::balance_query_failed(e.to_string()))),
        };

        let raw = match resolved {
            ResolvedToken::Native => match self.wallet.clone() {
                Some(wallet) => wallet.native_balance(account).await,
                None => return Err(self.fail(SwapError::balance_query_failed("No wallet provider detected"))),
            },
            ResolvedToken::Contract { address, interface, .. } => {
                self.tokens.balance_of(interface, address, account).await
            }
        };

        let raw = match raw {
            Ok(raw) => raw,
            Err(e) => return Err(self.fail(SwapError::balance_query_failed(e.to_string()))),
        };

        let balance = match format_balance(raw, DISPLAY_DECIMALS) {
            Ok(balance) => balance,
            Err(e) => return Err(self.fail(SwapError::balance_query_failed(e.to_string()))),
        };

        log::debug!("Balance of {} for {:?}: {}", self.session.selected_token, account, balance);
        self.session.balance = Some(balance.clone());
        Ok(Some(balance))
    }

    /// Change the token selection and refresh the balance for it.
    pub async fn select_token(
        &mut self,
        symbol: TokenSymbol,
        custom_address: Option<&str>,
    ) -> SwapResult<Option<DisplayBalance>> {
        self.session.selected_token = symbol;
        self.session.custom_token_address = custom_address
            .map(str::trim)
            .filter(|address| !address.is_empty())
            .map(str::to_string);
        log::info!("Selected token {}", symbol);

        self.refresh_balance().await
    }

    /// Bridge `amount` of the bridge token to `destination_address` on
    /// `destination_network` and wait for the transaction to be mined.
    ///
    /// No retries; the user re-submits on failure.
    pub async fn initiate_transfer(
        &mut self,
        source_token: TokenSymbol,
        amount: &str,
        destination_network: NetworkId,
        destination_address: &str,
    ) -> SwapResult<TransferReceipt> {
        let request = match build_transfer_request(
            &self.catalog,
            source_token,
            amount,
            destination_network,
            destination_address,
        ) {
            Ok(request) => request,
            Err(e) => return Err(self.fail(e)),
        };

        log::info!(
            "Sending {} (raw {}) to {} on {}",
            amount, request.amount, request.destination_address, request.destination_chain
        );
        self.session
            .report(StatusMessage::info("Transfer submitted, waiting for confirmation"));

        let receipt = match self.bridge.send_token(&request).await {
            Ok(receipt) => receipt,
            Err(e) => return Err(self.fail(SwapError::transfer_failed(e.to_string()))),
        };

        if receipt.status == TransferStatus::Reverted {
            return Err(self.fail(SwapError::transfer_failed(format!("Transaction {} reverted", receipt.hash))));
        }

        log::info!("Transfer confirmed in {}", receipt.hash);
        self.session
            .report(StatusMessage::success(format!("Transaction successful: {}", receipt.hash)));
        Ok(receipt)
    }

    fn apply_network(&mut self, id: NetworkId) {
        self.session.network = Some(id);
        self.session.token_options = self.catalog.token_options(Some(id));
        if !self.session.token_options.contains(&self.session.selected_token) {
            self.session.selected_token = TokenSymbol::default();
            self.session.custom_token_address = None;
        }
    }

    async fn refresh_and_report(&mut self) {
        // failure is already logged and on the status line
        let _ = self.refresh_balance().await;
    }

    fn wallet_or_fail(&mut self) -> SwapResult<Arc<dyn WalletProvider>> {
        match self.wallet.clone() {
            Some(wallet) => Ok(wallet),
            None => Err(self.fail(SwapError::provider_unavailable("No wallet provider detected"))),
        }
    }

    fn fail(&mut self, error: SwapError) -> SwapError {
        log::warn!("{}", error);
        self.session.report(StatusMessage::error(error.to_string()));
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MockBridgeTransport, MockTokenReader, MockWalletProvider, TokenInterface};
    use crate::shared::error::RpcFailure;
    use crate::shared::types::{AddChainParams, StatusLevel, TransferRequest};
    use crate::shared::utils::parse_address;
    use ethers::types::U256;
    use mockall::Sequence;

    fn account() -> Address {
        parse_address("0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6").unwrap()
    }

    fn controller(
        wallet: MockWalletProvider,
        tokens: MockTokenReader,
        bridge: MockBridgeTransport,
    ) -> SessionController {
        SessionController::new(
            Arc::new(Catalog::builtin().unwrap()),
            Some(Arc::new(wallet)),
            Arc::new(tokens),
            Arc::new(bridge),
        )
    }

    fn connected(wallet: MockWalletProvider, tokens: MockTokenReader) -> SessionController {
        let mut controller = controller(wallet, tokens, MockBridgeTransport::new());
        controller.session.account = Some(account());
        controller
    }

    fn zero_balances() -> MockTokenReader {
        let mut tokens = MockTokenReader::new();
        tokens.expect_balance_of().returning(|_, _, _| Ok(U256::zero()));
        tokens
    }

    #[tokio::test]
    async fn test_connect_sets_account_and_refreshes_balance() {
        let mut wallet = MockWalletProvider::new();
        wallet
            .expect_request_accounts()
            .times(1)
            .returning(|| Ok(vec![account(), Address::zero()]));

        let mut tokens = MockTokenReader::new();
        tokens
            .expect_balance_of()
            .times(1)
            .withf(|interface, _, owner| *interface == TokenInterface::InterchainToken && *owner == account())
            .returning(|_, _, _| Ok(U256::exp10(18)));

        let mut controller = controller(wallet, tokens, MockBridgeTransport::new());
        let connected = controller.connect().await.unwrap();

        assert_eq!(connected, account());
        assert_eq!(controller.session().account, Some(account()));
        assert_eq!(controller.session().balance.as_deref(), Some("1.0"));
    }

    #[tokio::test]
    async fn test_connect_without_provider() {
        let mut controller = SessionController::new(
            Arc::new(Catalog::builtin().unwrap()),
            None,
            Arc::new(MockTokenReader::new()),
            Arc::new(MockBridgeTransport::new()),
        );

        let result = controller.connect().await;
        assert!(matches!(result, Err(SwapError::ProviderUnavailable(_))));
        assert_eq!(controller.session().status.as_ref().unwrap().level, StatusLevel::Error);
    }

    #[tokio::test]
    async fn test_connect_rejected_leaves_session_unchanged() {
        let mut wallet = MockWalletProvider::new();
        wallet
            .expect_request_accounts()
            .returning(|| Err(RpcFailure::new(4001, "User rejected the request.")));

        let mut controller = controller(wallet, MockTokenReader::new(), MockBridgeTransport::new());
        let result = controller.connect().await;

        assert!(matches!(result, Err(SwapError::UserRejected(_))));
        assert!(controller.session().account.is_none());
    }

    #[tokio::test]
    async fn test_connect_with_no_accounts() {
        let mut wallet = MockWalletProvider::new();
        wallet.expect_request_accounts().times(1).returning(|| Ok(Vec::new()));
        let mut tokens = MockTokenReader::new();
        tokens.expect_balance_of().times(0);

        let mut controller = controller(wallet, tokens, MockBridgeTransport::new());
        let result = controller.connect().await;

        assert!(matches!(result, Err(SwapError::ProviderUnavailable(_))));
        assert!(controller.session().account.is_none());
    }

    #[tokio::test]
    async fn test_connect_transport_failure_is_not_a_rejection() {
        let mut wallet = MockWalletProvider::new();
        wallet
            .expect_request_accounts()
            .times(1)
            .returning(|| Err(RpcFailure::new(-32603, "Internal JSON-RPC error")));

        let mut controller = controller(wallet, MockTokenReader::new(), MockBridgeTransport::new());
        let result = controller.connect().await;

        assert!(matches!(result, Err(SwapError::ProviderUnavailable(_))));
        assert!(controller.session().account.is_none());
        assert_eq!(controller.session().status.as_ref().unwrap().level, StatusLevel::Error);
    }

    #[tokio::test]
    async fn test_switch_without_provider() {
        let mut controller = SessionController::new(
            Arc::new(Catalog::builtin().unwrap()),
            None,
            Arc::new(MockTokenReader::new()),
            Arc::new(MockBridgeTransport::new()),
        );
        controller.session.account = Some(account());
        controller.session.network = Some(NetworkId::Fantom);

        let result = controller.switch_network_by_id(NetworkId::Blast).await;
        assert!(matches!(result, Err(SwapError::ProviderUnavailable(_))));
        assert_eq!(controller.session().network, Some(NetworkId::Fantom));
    }

    #[tokio::test]
    async fn test_connect_survives_balance_failure() {
        let mut wallet = MockWalletProvider::new();
        wallet.expect_request_accounts().returning(|| Ok(vec![account()]));

        let mut tokens = MockTokenReader::new();
        tokens
            .expect_balance_of()
            .returning(|_, _, _| Err(RpcFailure::other("execution reverted")));

        let mut controller = controller(wallet, tokens, MockBridgeTransport::new());
        assert!(controller.connect().await.is_ok());
        assert!(controller.session().balance.is_none());

        let status = controller.session().status.clone().unwrap();
        assert_eq!(status.level, StatusLevel::Error);
        assert!(status.text.contains("Balance query failed"));
    }

    #[tokio::test]
    async fn test_switch_every_known_network() {
        let catalog = Catalog::builtin().unwrap();
        let count = catalog.networks().len();

        let mut wallet = MockWalletProvider::new();
        wallet.expect_switch_chain().times(count).returning(|_| Ok(()));
        wallet.expect_add_chain().times(0);

        let mut tokens = MockTokenReader::new();
        tokens.expect_balance_of().times(count).returning(|_, _, _| Ok(U256::zero()));

        let mut controller = connected(wallet, tokens);
        for network in catalog.networks() {
            controller.switch_network(network).await.unwrap();
            assert_eq!(controller.session().network, Some(network.id));
        }
    }

    #[tokio::test]
    async fn test_unrecognized_chain_is_added_once() {
        let mut seq = Sequence::new();
        let mut wallet = MockWalletProvider::new();
        wallet
            .expect_switch_chain()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|chain_id: &str| chain_id == "0x1a4")
            .returning(|_| Err(RpcFailure::new(4902, "Unrecognized chain ID \"0x1a4\".")));
        wallet
            .expect_add_chain()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|params: &AddChainParams| {
                params.chain_id == "0x1a4" && params.rpc_urls == vec!["https://sepolia.blast.io".to_string()]
            })
            .returning(|_| Ok(()));

        let mut controller = connected(wallet, zero_balances());
        controller.switch_network_by_id(NetworkId::Blast).await.unwrap();

        assert_eq!(controller.session().network, Some(NetworkId::Blast));
    }

    #[tokio::test]
    async fn test_failed_add_keeps_previous_network() {
        let mut wallet = MockWalletProvider::new();
        wallet
            .expect_switch_chain()
            .times(1)
            .returning(|_| Err(RpcFailure::new(4902, "Unrecognized chain ID")));
        wallet
            .expect_add_chain()
            .times(1)
            .returning(|_| Err(RpcFailure::new(4001, "User rejected the request.")));

        let mut controller = connected(wallet, MockTokenReader::new());
        controller.session.network = Some(NetworkId::Ethereum);

        let result = controller.switch_network_by_id(NetworkId::Blast).await;
        assert!(matches!(result, Err(SwapError::NetworkAddFailed { .. })));
        assert_eq!(controller.session().network, Some(NetworkId::Ethereum));
    }

    #[tokio::test]
    async fn test_other_switch_failure() {
        let mut wallet = MockWalletProvider::new();
        wallet
            .expect_switch_chain()
            .returning(|_| Err(RpcFailure::new(-32603, "Internal error")));
        wallet.expect_add_chain().times(0);

        let mut controller = connected(wallet, MockTokenReader::new());
        let result = controller.switch_network_by_id(NetworkId::Fantom).await;

        assert!(matches!(result, Err(SwapError::NetworkSwitchFailed { .. })));
        assert!(controller.session().network.is_none());
    }

    #[tokio::test]
    async fn test_custom_token_without_address_issues_no_query() {
        let mut wallet = MockWalletProvider::new();
        wallet.expect_native_balance().times(0);
        let mut tokens = MockTokenReader::new();
        tokens.expect_balance_of().times(0);

        let mut controller = connected(wallet, tokens);
        assert_eq!(controller.select_token(TokenSymbol::Custom, Some("")).await.unwrap(), None);
        assert_eq!(controller.refresh_balance().await.unwrap(), None);
        assert!(controller.session().awaiting_custom_address());
    }

    #[tokio::test]
    async fn test_custom_token_uses_interchain_interface() {
        let custom = "0x21ba4f6aEdA155DD77Cc33Fb93646910543F0380";
        let mut tokens = MockTokenReader::new();
        tokens
            .expect_balance_of()
            .times(1)
            .withf(move |interface, contract, _| {
                *interface == TokenInterface::InterchainToken && *contract == parse_address(custom).unwrap()
            })
            .returning(|_, _, _| Ok(U256::from(5u64) * U256::exp10(17)));

        let mut controller = connected(MockWalletProvider::new(), tokens);
        let balance = controller.select_token(TokenSymbol::Custom, Some(custom)).await.unwrap();
        assert_eq!(balance.as_deref(), Some("0.5"));
    }

    #[tokio::test]
    async fn test_weth_balance_is_normalized() {
        let mut tokens = MockTokenReader::new();
        tokens
            .expect_balance_of()
            .withf(|interface, contract, _| {
                *interface == TokenInterface::WrappedEth
                    && *contract == parse_address("0x4200000000000000000000000000000000000023").unwrap()
            })
            .returning(|_, _, _| Ok(U256::from_dec_str("2500000000000000000").unwrap()));

        let mut controller = connected(MockWalletProvider::new(), tokens);
        controller.session.network = Some(NetworkId::Ethereum);
        controller.session.selected_token = TokenSymbol::Weth;

        assert_eq!(controller.refresh_balance().await.unwrap().as_deref(), Some("2.5"));
        assert_eq!(controller.view().balance, "2.5");
    }

    #[tokio::test]
    async fn test_native_balance_goes_through_wallet() {
        let mut wallet = MockWalletProvider::new();
        wallet
            .expect_native_balance()
            .times(1)
            .withf(|owner| *owner == account())
            .returning(|_| Ok(U256::from(3u64) * U256::exp10(18)));
        let mut tokens = MockTokenReader::new();
        tokens.expect_balance_of().times(0);

        let mut controller = connected(wallet, tokens);
        let balance = controller.select_token(TokenSymbol::Native, None).await.unwrap();
        assert_eq!(balance.as_deref(), Some("3.0"));
    }

    #[tokio::test]
    async fn test_failed_refresh_keeps_last_balance() {
        let mut tokens = MockTokenReader::new();
        tokens
            .expect_balance_of()
            .returning(|_, _, _| Err(RpcFailure::other("connection refused")));

        let mut controller = connected(MockWalletProvider::new(), tokens);
        controller.session.balance = Some("7.0".to_string());

        let result = controller.refresh_balance().await;
        assert!(matches!(result, Err(SwapError::BalanceQueryFailed(_))));
        assert_eq!(controller.session().balance.as_deref(), Some("7.0"));
    }

    #[tokio::test]
    async fn test_refresh_without_account_is_noop() {
        let mut tokens = MockTokenReader::new();
        tokens.expect_balance_of().times(0);

        let mut controller = controller(MockWalletProvider::new(), tokens, MockBridgeTransport::new());
        assert_eq!(controller.refresh_balance().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_disconnect_always_clears_account() {
        let mut controller = connected(MockWalletProvider::new(), MockTokenReader::new());
        controller.session.network = Some(NetworkId::Moonbeam);
        controller.session.balance = Some("1.0".to_string());
        let old_id = controller.session().id.clone();

        controller.disconnect();
        assert!(controller.session().account.is_none());
        assert!(controller.session().network.is_none());
        assert!(controller.session().balance.is_none());
        assert_ne!(controller.session().id, old_id);

        // already disconnected
        controller.disconnect();
        assert!(controller.session().account.is_none());
    }

    #[tokio::test]
    async fn test_transfer_scales_amount() {
        let mut bridge = MockBridgeTransport::new();
        bridge
            .expect_send_token()
            .times(1)
            .withf(|request: &TransferRequest| {
                request.amount == U256::from_dec_str("10000000000000000000").unwrap()
                    && request.destination_chain == "moonbeam"
                    && request.rpc_url == "https://moonbase-alpha.public.blastapi.io"
            })
            .returning(|_| {
                Ok(TransferReceipt {
                    hash: "0xabc".to_string(),
                    status: TransferStatus::Confirmed,
                    block_number: Some(42),
                })
            });

        let mut controller = controller(MockWalletProvider::new(), MockTokenReader::new(), bridge);
        let receipt = controller
            .initiate_transfer(
                TokenSymbol::Ttwg,
                "10",
                NetworkId::Moonbeam,
                "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6",
            )
            .await
            .unwrap();

        assert_eq!(receipt.block_number, Some(42));
        assert_eq!(controller.session().status.as_ref().unwrap().level, StatusLevel::Success);
    }

    #[tokio::test]
    async fn test_transfer_failures() {
        let mut bridge = MockBridgeTransport::new();
        let mut seq = Sequence::new();
        bridge
            .expect_send_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(RpcFailure::other("signer unavailable")));
        bridge.expect_send_token().times(1).in_sequence(&mut seq).returning(|_| {
            Ok(TransferReceipt {
                hash: "0xdead".to_string(),
                status: TransferStatus::Reverted,
                block_number: Some(7),
            })
        });

        let mut controller = controller(MockWalletProvider::new(), MockTokenReader::new(), bridge);
        let destination = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6";

        // rejected before reaching the bridge
        let invalid = controller
            .initiate_transfer(TokenSymbol::Ttwg, "lots", NetworkId::Blast, destination)
            .await;
        assert!(matches!(invalid, Err(SwapError::TransferFailed(_))));

        let unavailable = controller
            .initiate_transfer(TokenSymbol::Ttwg, "1", NetworkId::Blast, destination)
            .await;
        assert!(matches!(unavailable, Err(SwapError::TransferFailed(_))));

        let reverted = controller
            .initiate_transfer(TokenSymbol::Ttwg, "1", NetworkId::Blast, destination)
            .await;
        assert!(matches!(reverted, Err(SwapError::TransferFailed(msg)) if msg.contains("0xdead")));
    }
}
