// DofusDB item lookup - Main Entry Point

use clap::{Parser, Subcommand};
use dofusdb_lookup::{
    display::item_card, verbosity::set_verbosity_level, v_error, v_summary, DofusDbClient,
    DofusDbConfig, CONFIG_FILE, DEFAULT_ITEM_NAME,
};

#[derive(Debug, Parser)]
#[command(name = "dofusdb_lookup", version, about = "Look up items in the DofusDB API")]
struct Cli {
    /// Increase output verbosity (-v basic, -vv full)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the TOML configuration file
    #[arg(long, default_value = CONFIG_FILE, global = true)]
    config: String,

    /// Override the API base URL from the configuration
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search items by localized name and print the raw JSON response
    Search {
        #[arg(required = true)]
        name: Vec<String>,
    },
    /// Show an item card with its craft recipe and estimated cost
    Item {
        #[arg(required = true)]
        name: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    set_verbosity_level(cli.verbose);

    let mut config = DofusDbConfig::load_or_default(&cli.config)?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
    }
    config.validate()?;

    if config.logging.verbosity > cli.verbose {
        set_verbosity_level(config.logging.verbosity);
    }
    config.print_summary();

    let client = DofusDbClient::from_config(&config);

    match cli.command {
        None => {
            client.search_items(DEFAULT_ITEM_NAME).await;
        }
        Some(Command::Search { name }) => {
            client.search_items(&name.join(" ")).await;
        }
        Some(Command::Item { name }) => {
            let name = name.join(" ");
            match item_card(&client, name.trim()).await {
                Ok(Some(card)) => v_summary!("{}", card),
                Ok(None) => v_error!("Nenhum item encontrado para: '{}'", name.trim()),
                Err(e) => v_error!("❌ Item lookup for '{}' failed: {}", name.trim(), e),
            }
        }
    }

    Ok(())
}
