mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use innkeep::Config;
use tracing_subscriber::EnvFilter;

use commands::quote::QuoteArgs;
use commands::validate::FormArg;

#[derive(Parser)]
#[command(name = "innkeep")]
#[command(version, about = "Innkeep front desk tools", long_about = None)]
struct Cli {
    /// Configuration file
    #[arg(short, long, global = true, default_value = "innkeep.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a stay: subtotal, discount, tax and total
    Quote(QuoteArgs),

    /// Validate a JSON form payload and print its field errors
    Validate {
        /// Which form the payload belongs to
        form: FormArg,

        /// JSON file with the payload
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, source) = Config::read(&cli.config)?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    source.log(&cli.config);

    match cli.command {
        Commands::Quote(args) => {
            commands::quote::execute(&args, &config.pricing)?;
        }
        Commands::Validate { form, file } => {
            if !commands::validate::execute(form, &file)? {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
