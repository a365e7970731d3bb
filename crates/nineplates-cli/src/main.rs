use clap::{Parser, Subcommand};
use nineplates_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "nineplates", version, about = "Nine Plates CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Plate management
    Plate {
        #[command(subcommand)]
        action: commands::plate::PlateAction,
    },
    /// Life efficiency score
    Score,
    /// Plan and capacity
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// List consequence values and their labels
    Consequences,
}

fn init_tracing() {
    let default_level = Config::load_or_default().logging.level;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plate { action } => commands::plate::run(action),
        Commands::Score => commands::score::run(),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Consequences => commands::plate::consequences(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
