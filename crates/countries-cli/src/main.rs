//! countries: terminal front-end for the countries browser
//!
//! Drives the same view state as the browser build: the list is loaded once,
//! a search text narrows it down, and `show` opens the detail overlay of one
//! country and prints it.
//!
//! Usage examples
//! --------------
//!
//! - List every country
//!   $ countries list
//!
//! - Filter by a case-insensitive substring of the common name
//!   $ countries list --search an
//!
//! - Show the details of a country
//!   $ countries show france
//!
//! - Work from a saved payload instead of the network
//!   $ countries --input countries.json.gz stats
//!
//! A failed load is logged on stderr and the output falls back to the
//! "no results" message, like the browser grid does.
mod args;
mod render;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use countries_core::{
    loader, Action, Commit, CountryId, SourceConfig, ViewConfig, ViewHandle, ViewState,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let view = ViewHandle::with_config(&ViewConfig::folded(args.fold_accents));
    load_once(&view, &args);

    match args.command {
        Commands::List { search } => {
            view.dispatch(Action::SetSearch(search));
            print!("{}", view.read(render::grid));
        }

        Commands::Show { name } => {
            view.dispatch(Action::SetSearch(name.clone()));
            match view.read(|s| best_match(s, &name)) {
                Some(id) => {
                    view.dispatch(Action::OpenDetail(id));
                    if let Some(detail) = view.read(ViewState::detail) {
                        print!("{}", render::detail(&detail));
                    }
                    view.dispatch(Action::CloseDetail);
                }
                None => print!("{}", view.read(render::grid)),
            }
        }

        Commands::Stats => {
            print!("{}", view.read(render::stats));
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Runs the one-time load. Failures are logged by the ticket and leave the
/// view empty.
fn load_once(view: &ViewHandle, args: &CliArgs) {
    let Some(ticket) = view.begin_load() else {
        return;
    };

    let outcome = match &args.input {
        Some(path) => loader::read_countries_file(path),
        None => loader::fetch_countries_blocking(&SourceConfig {
            endpoint: args.url.clone(),
            timeout_secs: args.timeout,
        }),
    };

    if ticket.complete(outcome) == Commit::Failed {
        tracing::warn!("continuing with an empty country list");
    }
}

/// Exact (case-insensitive) name among the visible cards, else the first card.
fn best_match(state: &ViewState, name: &str) -> Option<CountryId> {
    let key = state.match_mode().key(name);
    let ids = state.filtered_ids();
    ids.iter()
        .copied()
        .find(|&id| {
            state
                .country(id)
                .is_some_and(|c| state.match_mode().key(c.name()) == key)
        })
        .or_else(|| ids.first().copied())
}
