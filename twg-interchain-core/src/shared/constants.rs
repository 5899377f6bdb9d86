//! Constants for the swap core
//!
//! This module contains the built-in network and token catalog and the
//! provider error codes the session controller reacts to.

// EIP-1193 / MetaMask provider error codes
pub const USER_REJECTED_ERROR_CODE: i64 = 4001;
pub const UNRECOGNIZED_CHAIN_ERROR_CODE: i64 = 4902;

// Balances and transfer amounts are always handled at 18 decimals
pub const DISPLAY_DECIMALS: u8 = 18;

// Bridge token (tTWG) deployed at the same address on every supported network
pub const BRIDGE_TOKEN_ADDRESS: &str = "0xF659A577B56A8D5d124ac740670429AbEE9160C4";

// Environment keys
pub const ENV_PREFIX: &str = "TWG";
pub const ENV_CONFIG_FILE: &str = "TWG_CONFIG_FILE";
pub const DEFAULT_CONFIG_FILE: &str = "twg-swap";
pub const DEFAULT_WALLET_RPC_URL: &str = "http://127.0.0.1:1248";

// Network configurations
#[derive(Debug, Clone)]
pub struct NetworkConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub chain_id_hex: &'static str,
    pub rpc_url: &'static str,
    pub logo_url: &'static str,
}

pub static FANTOM_TESTNET_CONFIG: NetworkConfig = NetworkConfig {
    id: "fantom",
    name: "Fantom Testnet",
    chain_id_hex: "0xfa2",
    rpc_url: "https://fantom.api.onfinality.io/public",
    logo_url: "https://avatars.githubusercontent.com/u/39045722?s=48&v=4",
};

pub static BLAST_SEPOLIA_CONFIG: NetworkConfig = NetworkConfig {
    id: "blast",
    name: "Blast Sepolia",
    chain_id_hex: "0x1a4",
    rpc_url: "https://sepolia.blast.io",
    logo_url: "https://freecoins24.io/wp-content/uploads/2023/11/Blast-network-logo.jpg",
};

pub static ETHEREUM_SEPOLIA_CONFIG: NetworkConfig = NetworkConfig {
    id: "ethereum",
    name: "Ethereum Sepolia Testnet",
    chain_id_hex: "0xaa36a7",
    rpc_url: "https://ethereum-sepolia-rpc.publicnode.com",
    logo_url: "https://avatars.githubusercontent.com/u/6250754?s=48&v=4",
};

pub static MOONBASE_ALPHA_CONFIG: NetworkConfig = NetworkConfig {
    id: "moonbeam",
    name: "Moonbeam Alpha Testnet",
    chain_id_hex: "0x507",
    rpc_url: "https://moonbase-alpha.public.blastapi.io",
    logo_url: "https://avatars.githubusercontent.com/u/84856768?s=48&v=4",
};

pub static SUPPORTED_NETWORKS: [&NetworkConfig; 4] = [
    &FANTOM_TESTNET_CONFIG,
    &BLAST_SEPOLIA_CONFIG,
    &ETHEREUM_SEPOLIA_CONFIG,
    &MOONBASE_ALPHA_CONFIG,
];

// Token configurations
#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub symbol: &'static str,
    pub name: &'static str,
    pub address: &'static str,
}

pub static TTWG_TOKEN: TokenConfig = TokenConfig {
    symbol: "tTWG",
    name: "Trump Wif Grill",
    address: BRIDGE_TOKEN_ADDRESS,
};

pub static WETH_TOKEN: TokenConfig = TokenConfig {
    symbol: "wETH",
    name: "Wrapped Ethereum",
    address: "0x4200000000000000000000000000000000000023",
};

pub static WFTM_TOKEN: TokenConfig = TokenConfig {
    symbol: "wFTM",
    name: "Wrapped Fantom",
    address: "0x594D8b81eC765410536ab59E98091700b99508D8",
};

pub static WMATIC_TOKEN: TokenConfig = TokenConfig {
    symbol: "wMATIC",
    name: "Wrapped Matic",
    address: "0x21ba4f6aEdA155DD77Cc33Fb93646910543F0380",
};

// Human-readable ABIs, one per token interface
pub const ERC20_BALANCE_OF: &str = "function balanceOf(address account) view returns (uint256)";
pub const INTERCHAIN_SEND_TOKEN: &str =
    "function sendToken(string destinationChain, string destinationAddress, uint256 amount)";
pub const WRAPPED_DEPOSIT: &str = "function deposit() payable";
pub const WRAPPED_WITHDRAW: &str = "function withdraw(uint256 amount)";
