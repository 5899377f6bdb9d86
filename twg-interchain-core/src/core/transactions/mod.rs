//! Cross-chain transfer preparation
//!
//! Turns the swap form input into a `TransferRequest` for the bridge
//! transport. Every failure here is reported as `TransferFailed`.

use crate::domain::{Catalog, NetworkId, TokenSymbol};
use crate::shared::constants::DISPLAY_DECIMALS;
use crate::shared::error::SwapError;
use crate::shared::types::TransferRequest;
use crate::shared::utils::{parse_address, parse_amount};

/// Build the bridge call for a transfer.
///
/// The destination network is resolved from the catalog on its own; it is
/// not compared with the wallet's active network. The transfer always goes
/// through the bridge token contract, whatever `source_token` is selected.
pub fn build_transfer_request(
    catalog: &Catalog,
    source_token: TokenSymbol,
    amount: &str,
    destination_network: NetworkId,
    destination_address: &str,
) -> Result<TransferRequest, SwapError> {
    let network = catalog.network(destination_network).ok_or_else(|| {
        SwapError::transfer_failed(format!("Network not configured: {}", destination_network))
    })?;

    let amount = parse_amount(amount, DISPLAY_DECIMALS).map_err(|e| SwapError::transfer_failed(e.to_string()))?;

    let destination_address = destination_address.trim();
    if destination_address.is_empty() {
        return Err(SwapError::transfer_failed("Destination address cannot be empty"));
    }
    parse_address(destination_address).map_err(|e| SwapError::transfer_failed(e.to_string()))?;

    Ok(TransferRequest {
        network_id: network.id.to_string(),
        rpc_url: network.rpc_url.clone(),
        bridge_contract: catalog.bridge_token(),
        destination_chain: network.id.to_string(),
        destination_address: destination_address.to_string(),
        amount,
        source_token: source_token.to_string(),
    })
}
