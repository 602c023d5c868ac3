use anyhow::Context;
use clap::Parser;

mod cli;
mod logging;
mod report;
mod service;
mod transport;

use cli::{Cli, Commands};
use service::OrderService;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let verbosity = cli.verbosity();
    logging::init_logging(verbosity);
    tracing::debug!("Verbose mode activated");

    let service = OrderService::new(&cli.base_url);
    let exchange = match cli.command {
        Some(Commands::Create(args)) => service.create_order(&args.into())?,
        Some(Commands::Get(args)) => service.get_order_by_id(args.id)?,
        Some(Commands::Delete(args)) => service.delete_order_by_id(args.id)?,
        Some(Commands::Other(args)) => {
            tracing::debug!(command = ?args.first(), "unrecognized command");
            println!("Invalid command");
            return Ok(());
        }
        None => {
            println!("Invalid command");
            return Ok(());
        }
    };

    report::display(&mut std::io::stderr().lock(), &exchange, verbosity).context("failed to write report")?;
    Ok(())
}
