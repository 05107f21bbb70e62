use clap::{ArgAction, Parser, Subcommand};
use countries_core::config::DEFAULT_ENDPOINT;

/// CLI arguments for countries-cli
#[derive(Debug, Parser)]
#[command(
    name = "countries",
    version,
    about = "Search the public country list by name and show country details"
)]
pub struct CliArgs {
    /// Country list endpoint (REST Countries v3.1 shape)
    #[arg(short = 'u', long = "url", global = true, default_value = DEFAULT_ENDPOINT)]
    pub url: String,

    /// Read the country list from a saved .json or .json.gz file instead of the endpoint
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// Match names without accents too (e.g. "aland" finds "Åland Islands")
    #[arg(long = "fold-accents", global = true)]
    pub fold_accents: bool,

    /// Give up on the endpoint after this many seconds (default: wait forever)
    #[arg(long = "timeout", global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List country names, optionally filtered by a search text
    List {
        /// Case-insensitive substring of the common name
        #[arg(short = 's', long = "search", default_value = "")]
        search: String,
    },

    /// Show the details of one country
    Show {
        /// Common name, or a substring of it (first match wins)
        name: String,
    },

    /// Count countries per region
    Stats,
}
