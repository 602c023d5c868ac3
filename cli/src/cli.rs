use clap::builder::BoolishValueParser;
use clap::{Args, Parser, Subcommand};
use petstore_core::{Order, DEFAULT_BASE_URL};

use crate::report::Verbosity;

#[derive(Parser, Debug)]
#[command(name = "petstore", version, about = "Client for Petstore")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Increase output verbosity")]
    pub verbose: bool,
    /// Test seam for pointing the binary at a local mock store. Hidden because
    /// the public pet-store URL is the only supported target.
    #[arg(long, global = true, hide = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flag(self.verbose)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an order
    Create(CreateArgs),
    /// Get an order
    Get(OrderIdArgs),
    /// Delete an order
    Delete(OrderIdArgs),
    #[command(external_subcommand)]
    Other(Vec<String>),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    #[arg(short, long, allow_negative_numbers = true, help = "Order ID")]
    pub id: Option<i64>,
    #[arg(short, long, alias = "pet_id", allow_negative_numbers = true, help = "Pet ID")]
    pub pet_id: Option<i64>,
    #[arg(short, long, allow_negative_numbers = true, help = "Quantity")]
    pub quantity: Option<i32>,
    #[arg(short, long, alias = "ship_date", help = "Ship Date")]
    pub ship_date: Option<String>,
    #[arg(short = 'S', long, help = "Status")]
    pub status: Option<String>,
    #[arg(short, long, value_parser = BoolishValueParser::new(), help = "Complete")]
    pub complete: Option<bool>,
}

impl From<CreateArgs> for Order {
    fn from(args: CreateArgs) -> Self {
        Order {
            id: args.id,
            pet_id: args.pet_id,
            quantity: args.quantity,
            ship_date: args.ship_date,
            status: args.status,
            complete: args.complete,
        }
    }
}

#[derive(Args, Debug)]
pub struct OrderIdArgs {
    #[arg(short, long, allow_negative_numbers = true, help = "Order ID")]
    pub id: i64,
}
