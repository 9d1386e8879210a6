use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Converts amounts between currencies using the Bank of Russia daily rates.
#[derive(Debug, Parser)]
#[command(name = "cbr-converter", version, about)]
pub struct Cli {
    /// Read rates from a saved daily XML document instead of the network.
    #[arg(long, global = true, value_name = "PATH")]
    pub feed_file: Option<PathBuf>,

    /// Base URL of the CBR site.
    #[arg(long, global = true, value_name = "URL")]
    pub feed_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the loaded currencies with their catalog index.
    Currencies {
        /// Print the catalog as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the exchange rate between two currencies.
    Rate {
        /// Base currency, by catalog index or code.
        from: String,
        /// Quoted currency, by catalog index or code.
        to: String,
    },
    /// Convert an amount of one currency into another.
    Convert {
        #[arg(allow_hyphen_values = true)]
        amount: String,
        from: String,
        to: String,
    },
}
