/*
[INPUT]:  Parsed CLI commands and user confirmations
[OUTPUT]: Facade calls and printed results
[POS]:    CLI layer - command handlers (I/O only, no decision logic)
[UPDATE]: When adding commands or changing output format
*/

use binance_futures_adapter::{BotResult, FuturesBot, OrderResponse, Position};
use console::style;
use dialoguer::{Confirm, theme::ColorfulTheme};

use super::args::{CancelCommand, Command, OrderCommand};

/// Dispatch one parsed command against the facade.
///
/// Case normalization happens here; the validation layer matches exactly.
pub async fn run_command(bot: &FuturesBot, command: Command) -> BotResult<()> {
    match command {
        Command::Order { order } => match order {
            OrderCommand::Market(args) => {
                let order = bot
                    .place_market_order(
                        &args.symbol.to_uppercase(),
                        &args.side.to_uppercase(),
                        args.quantity,
                    )
                    .await?;
                println!("\n{}", style("Market order placed").green().bold());
                print_order(&order);
            }
            OrderCommand::Limit(args) => {
                let order = bot
                    .place_limit_order(
                        &args.symbol.to_uppercase(),
                        &args.side.to_uppercase(),
                        args.quantity,
                        args.price,
                        &args.time_in_force.to_uppercase(),
                    )
                    .await?;
                println!("\n{}", style("Limit order placed").green().bold());
                print_order(&order);
            }
        },
        Command::Balance { asset } => {
            let asset = asset.to_uppercase();
            let balance = bot.balance(&asset).await?;
            println!("\n{asset} balance: {}", style(balance).cyan());
        }
        Command::Price { symbol } => {
            let symbol = symbol.to_uppercase();
            let price = bot.current_price(&symbol).await?;
            println!("\n{symbol} current price: {}", style(price).cyan());
        }
        Command::Position { symbol } => {
            let symbol = symbol.to_uppercase();
            match bot.position(&symbol).await? {
                Some(position) => print_position(&position),
                None => println!("\nNo open position for {symbol}"),
            }
        }
        Command::Close { symbol, yes } => {
            let symbol = symbol.to_uppercase();
            if !yes && !confirm(&format!("Close position for {symbol}?")) {
                println!("{}", style("Cancelled.").yellow());
                return Ok(());
            }
            match bot.close_position(&symbol).await? {
                Some(order) => {
                    println!("\n{}", style("Position closed").green().bold());
                    print_order(&order);
                }
                None => println!("\nNo position to close for {symbol}"),
            }
        }
        Command::Orders { symbol } => {
            let symbol = symbol.to_uppercase();
            let orders = bot.open_orders(&symbol).await?;
            if orders.is_empty() {
                println!("\nNo open orders for {symbol}");
            } else {
                println!("\nOpen orders for {symbol}:");
                for order in &orders {
                    print_order(order);
                }
            }
        }
        Command::Cancel { cancel } => match cancel {
            CancelCommand::One { symbol, order_id } => {
                let response = bot
                    .cancel_order(&symbol.to_uppercase(), order_id)
                    .await?;
                println!("\n{}", style("Order cancelled").green().bold());
                println!("Order ID: {}", response.order_id);
            }
            CancelCommand::All { symbol, yes } => {
                let symbol = symbol.to_uppercase();
                if !yes && !confirm(&format!("Cancel all orders for {symbol}?")) {
                    println!("{}", style("Cancelled.").yellow());
                    return Ok(());
                }
                bot.cancel_all_orders(&symbol).await?;
                println!("\nAll orders cancelled for {symbol}");
            }
        },
        Command::Leverage { symbol, leverage } => {
            let response = bot
                .set_leverage(&symbol.to_uppercase(), leverage)
                .await?;
            println!("\n{}", style("Leverage set").green().bold());
            println!("Symbol: {}", response.symbol);
            println!("Leverage: {}x", response.leverage);
        }
    }
    Ok(())
}

pub fn print_order(order: &OrderResponse) {
    println!("Order ID: {}", order.order_id);
    println!("Status: {}", order.status);
    if !order.order_type.is_empty() {
        println!("Type: {} | Side: {}", order.order_type, order.side);
    }
    println!("Quantity: {} | Executed: {}", order.orig_qty, order.executed_qty);
    if !order.price.is_zero() {
        println!("Price: {}", order.price);
    }
    if !order.time_in_force.is_empty() {
        println!("Time in Force: {}", order.time_in_force);
    }
}

pub fn print_position(position: &Position) {
    println!("\nCurrent position for {}:", position.symbol);
    println!("Amount: {}", position.amount);
    println!("Entry Price: {}", position.entry_price);
    println!("Mark Price: {}", position.mark_price);
    println!("Unrealized PnL: {}", position.unrealized_pnl);
    println!("Leverage: {}x", position.leverage);
}

fn confirm(prompt: &str) -> bool {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}
