use anyhow::{bail, Context};
use tokio::io::{AsyncBufReadExt, BufReader};
use twg_interchain_core::{init_swap_core, NetworkId, SessionController, TokenSymbol, NAME, VERSION};

const HELP: &str = "\
Commands:
  connect                                   connect the wallet
  disconnect                                forget the connected account
  network <id>                              switch to fantom | blast | ethereum | moonbeam
  token <symbol> [address]                  select tTWG | wETH | wFTM | wMATIC | native | custom
  balance                                   refresh the balance
  swap <token> <amount> <network> <address> bridge tokens to another chain
  show                                      print the session
  quit";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Connect,
    Disconnect,
    Network(NetworkId),
    Token(TokenSymbol, Option<String>),
    Balance,
    Swap {
        token: TokenSymbol,
        amount: String,
        network: NetworkId,
        address: String,
    },
    Show,
    Help,
    Quit,
}

fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let command = match words.as_slice() {
        [] => return Ok(None),
        ["connect"] => Command::Connect,
        ["disconnect"] => Command::Disconnect,
        ["network", id] => Command::Network(id.parse()?),
        ["token", symbol] => Command::Token(symbol.parse()?, None),
        ["token", symbol, address] => Command::Token(symbol.parse()?, Some(address.to_string())),
        ["balance"] => Command::Balance,
        ["swap", token, amount, network, address] => Command::Swap {
            token: token.parse()?,
            amount: amount.to_string(),
            network: network.parse()?,
            address: address.to_string(),
        },
        ["show"] => Command::Show,
        ["help"] => Command::Help,
        ["quit"] | ["exit"] => Command::Quit,
        _ => bail!("Unrecognized command: {}", line.trim()),
    };
    Ok(Some(command))
}

async fn run(controller: &mut SessionController, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Connect => {
            let account = controller.connect().await?;
            println!("Connected {:?}", account);
        }
        Command::Disconnect => controller.disconnect(),
        Command::Network(id) => controller.switch_network_by_id(id).await?,
        Command::Token(symbol, address) => {
            controller.select_token(symbol, address.as_deref()).await?;
        }
        Command::Balance => match controller.refresh_balance().await? {
            Some(balance) => println!("Balance: {}", balance),
            None => println!("No balance to show"),
        },
        Command::Swap {
            token,
            amount,
            network,
            address,
        } => {
            println!("Waiting for confirmation...");
            let receipt = controller.initiate_transfer(token, &amount, network, &address).await?;
            println!("Transaction {} confirmed in block {:?}", receipt.hash, receipt.block_number);
        }
        Command::Show => println!("{}", controller.view()),
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut controller = init_swap_core().await.context("Failed to initialize swap core")?;
    println!("{} {}\n", NAME, VERSION);
    println!("{}\n", controller.view());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{}", e);
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        let show_after = !matches!(command, Command::Show | Command::Help);
        if let Err(e) = run(&mut controller, command).await {
            eprintln!("{}", e);
        }
        if show_after {
            println!("\n{}\n", controller.view());
        }
    }
    Ok(())
}
