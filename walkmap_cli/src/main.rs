use clap::{Parser, Subcommand};
use tracing::debug;

use crate::walks::WalksArgs;

mod file_utils;
mod parsers;
mod walk_table;
mod walks;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Split GPS tracks into walks and print them
    #[command(visible_alias = "w")]
    Walks {
        #[command(flatten)]
        args: WalksArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Walks { args }) => walks::run(args)?,
        None => {
            debug!("No command provided");
        }
    }

    Ok(())
}
