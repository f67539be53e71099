/*
[INPUT]:  Command-line arguments
[OUTPUT]: Parsed CLI commands for the trading facade
[POS]:    CLI layer - argument surface
[UPDATE]: When changing CLI flags or adding commands
*/

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "binance-futures",
    version,
    about = "Binance USDT-M futures trading CLI",
    long_about = "Validates trading parameters and forwards them to the exchange.\n\
                  Run without a command for the interactive menu."
)]
pub struct Cli {
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Place an order
    Order {
        #[command(subcommand)]
        order: OrderCommand,
    },
    /// Check account balance
    Balance {
        #[arg(short = 'a', long, default_value = "USDT")]
        asset: String,
    },
    /// Get current price
    Price {
        #[arg(short = 's', long)]
        symbol: String,
    },
    /// Get current position
    Position {
        #[arg(short = 's', long)]
        symbol: String,
    },
    /// Close current position
    Close {
        #[arg(short = 's', long)]
        symbol: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
    /// Get open orders
    Orders {
        #[arg(short = 's', long)]
        symbol: String,
    },
    /// Cancel orders
    Cancel {
        #[command(subcommand)]
        cancel: CancelCommand,
    },
    /// Set leverage
    Leverage {
        #[arg(short = 's', long)]
        symbol: String,
        /// Leverage value (1-125)
        #[arg(short = 'l', long)]
        leverage: u32,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// Place a market order
    Market(MarketOrderArgs),
    /// Place a limit order
    Limit(LimitOrderArgs),
}

#[derive(Args, Debug)]
pub struct MarketOrderArgs {
    #[arg(short = 's', long)]
    pub symbol: String,
    /// Order side (BUY/SELL)
    #[arg(short = 'S', long)]
    pub side: String,
    #[arg(short = 'q', long)]
    pub quantity: f64,
}

#[derive(Args, Debug)]
pub struct LimitOrderArgs {
    #[arg(short = 's', long)]
    pub symbol: String,
    /// Order side (BUY/SELL)
    #[arg(short = 'S', long)]
    pub side: String,
    #[arg(short = 'q', long)]
    pub quantity: f64,
    #[arg(short = 'p', long)]
    pub price: f64,
    /// Time in force (GTC/IOC/FOK)
    #[arg(short = 't', long = "time-in-force", default_value = "GTC")]
    pub time_in_force: String,
}

#[derive(Subcommand, Debug)]
pub enum CancelCommand {
    /// Cancel a single order
    One {
        #[arg(short = 's', long)]
        symbol: String,
        #[arg(short = 'o', long = "order-id")]
        order_id: i64,
    },
    /// Cancel all open orders
    All {
        #[arg(short = 's', long)]
        symbol: String,
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}
