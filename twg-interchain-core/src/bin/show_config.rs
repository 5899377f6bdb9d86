use twg_interchain_core::{SwapConfig, NAME, VERSION};

fn main() -> anyhow::Result<()> {
    let config = SwapConfig::load()?;
    let catalog = config.catalog()?;

    println!("{} {} Network Configuration:\n", NAME, VERSION);
    println!("  Wallet RPC URL: {}", config.wallet_rpc_url);
    println!("  Bridge Token (CA): {:?}", catalog.bridge_token());
    println!("  Signer Key: {}", if config.signer_key.is_some() { "(set)" } else { "(not set)" });
    println!();

    for network in catalog.networks() {
        let source = if config.rpc_override(network.id).is_some() { "override" } else { "default" };
        println!(
            "  {:<9} {:<26} chain {:<9} {} ({})",
            network.id, network.display_name, network.chain_id_hex, network.rpc_url, source
        );
    }
    println!();

    for token in catalog.tokens() {
        match token.contract_address {
            Some(address) => println!("  {:<7} {:<28} {:?}", token.symbol, token.label(), address),
            None => println!("  {:<7} {}", token.symbol, token.label()),
        }
    }
    Ok(())
}
