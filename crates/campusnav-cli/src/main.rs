use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod commands;

use commands::route::RouteArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "Campus route-finding utilities")]
struct Cli {
    /// Path to a campus map JSON file. Defaults to the bundled sample
    /// campus when omitted.
    #[arg(long, global = true)]
    map: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a route between two campus locations.
    Route(RouteArgs),
    /// List the locations known to the map.
    Locations,
    /// Print the precomputed all-pairs routing table.
    Table,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let map = commands::load_map(cli.map.as_deref())?;
    match cli.command {
        Command::Route(args) => commands::route::run(&map, &args),
        Command::Locations => commands::locations::run(&map),
        Command::Table => commands::table::run(&map),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
