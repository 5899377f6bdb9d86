//! Utility functions for the swap core

use crate::shared::error::SwapError;
use ethers::types::{Address, U256};
use ethers::utils::format_units;

/// Normalize a hex chain id the way wallets expect it (`0x`-prefixed,
/// lowercase, no leading zeros).
pub fn normalize_chain_id_hex(chain_id: &str) -> Result<String, SwapError> {
    let digits = chain_id
        .strip_prefix("0x")
        .or_else(|| chain_id.strip_prefix("0X"))
        .ok_or_else(|| SwapError::validation(format!("Chain id must start with 0x: {}", chain_id)))?;

    let value = u64::from_str_radix(digits, 16)
        .map_err(|e| SwapError::validation(format!("Invalid chain id {}: {}", chain_id, e)))?;

    Ok(format!("{:#x}", value))
}

/// Parse an EVM address
pub fn parse_address(address: &str) -> Result<Address, SwapError> {
    let trimmed = address.trim();
    if !trimmed.starts_with("0x") || trimmed.len() != 42 {
        return Err(SwapError::validation(format!("Invalid address: {}", address)));
    }
    trimmed
        .parse::<Address>()
        .map_err(|e| SwapError::validation(format!("Invalid address {}: {}", address, e)))
}

/// Format a raw amount as a decimal string, trimming trailing zeros but
/// keeping at least one fractional digit ("2.5", "1.0", "0.0").
pub fn format_balance(raw: U256, decimals: u8) -> Result<String, SwapError> {
    let full = format_units(raw, u32::from(decimals))
        .map_err(|e| SwapError::validation(format!("Cannot format amount: {}", e)))?;

    match full.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            let fraction = if fraction.is_empty() { "0" } else { fraction };
            Ok(format!("{}.{}", whole, fraction))
        }
        None => Ok(format!("{}.0", full)),
    }
}

/// Scale a human-readable amount ("10", "0.25") to its smallest unit.
/// Accepts plain decimal digits with at most one `.`; rejects empty,
/// negative, zero and out-of-range amounts.
pub fn parse_amount(amount: &str, decimals: u8) -> Result<U256, SwapError> {
    let trimmed = amount.trim();
    if trimmed.is_empty() {
        return Err(SwapError::validation("Amount cannot be empty"));
    }
    if trimmed.starts_with('-') {
        return Err(SwapError::validation("Amount cannot be negative"));
    }

    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let is_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !is_digits(whole) || !is_digits(fraction) {
        return Err(SwapError::validation(format!("Invalid amount: {}", amount)));
    }
    if fraction.len() > usize::from(decimals) {
        return Err(SwapError::validation(format!(
            "Amount {} has more than {} decimal places",
            amount, decimals
        )));
    }

    let out_of_range = || SwapError::validation(format!("Amount out of range: {}", amount));
    let unit = U256::from(10u8)
        .checked_pow(U256::from(decimals))
        .ok_or_else(out_of_range)?;
    let whole = if whole.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(whole).map_err(|_| out_of_range())?
    };
    let fraction = if fraction.is_empty() {
        U256::zero()
    } else {
        // right-pad to `decimals` digits; the length check above keeps this in range
        let padded = format!("{:0<width$}", fraction, width = usize::from(decimals));
        U256::from_dec_str(&padded).map_err(|_| out_of_range())?
    };

    let scaled = whole
        .checked_mul(unit)
        .and_then(|w| w.checked_add(fraction))
        .ok_or_else(out_of_range)?;

    if scaled.is_zero() {
        return Err(SwapError::validation("Amount must be greater than zero"));
    }
    Ok(scaled)
}

/// Short form of an address for status lines (`0x1234…abcd`)
pub fn short_address(address: &Address) -> String {
    let full = format!("{:?}", address);
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

/// Hex form of a transaction hash
pub fn tx_hash_hex(hash: &[u8]) -> String {
    format!("0x{}", hex::encode(hash))
}
