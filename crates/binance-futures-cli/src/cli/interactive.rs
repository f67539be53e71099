/*
[INPUT]:  User selections and inputs via interactive prompts
[OUTPUT]: Facade calls for the selected trading operation
[POS]:    CLI interactive flow
[UPDATE]: When adding menu actions or changing prompt flow
*/

use anyhow::Result;
use binance_futures_adapter::{BotError, FuturesBot, Symbol};
use console::style;
use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

use super::commands::{print_order, print_position};

/// Menu loop mirroring the command surface. Errors are printed and the
/// menu continues; only Exit leaves the loop.
pub async fn run_interactive(bot: &FuturesBot) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{}", style("Binance Futures Trading CLI").bold().cyan());

    loop {
        let actions = vec![
            "Place market order",
            "Place limit order",
            "Check balance",
            "Get current price",
            "View position",
            "Close position",
            "View open orders",
            "Cancel order",
            "Cancel all orders",
            "Set leverage",
            "Exit",
        ];
        let selection = Select::with_theme(&theme)
            .with_prompt("Select action")
            .items(&actions)
            .default(0)
            .interact()?;

        let outcome = match selection {
            0 => market_order(bot, &theme).await,
            1 => limit_order(bot, &theme).await,
            2 => balance(bot, &theme).await,
            3 => price(bot, &theme).await,
            4 => position(bot, &theme).await,
            5 => close_position(bot, &theme).await,
            6 => open_orders(bot, &theme).await,
            7 => cancel_order(bot, &theme).await,
            8 => cancel_all(bot, &theme).await,
            9 => set_leverage(bot, &theme).await,
            _ => return Ok(()),
        };

        if let Err(err) = outcome {
            match err.downcast_ref::<BotError>() {
                Some(BotError::Validation(validation)) => {
                    println!("{} {validation}", style("Validation error:").red())
                }
                Some(runtime) => println!("{} {runtime}", style("Runtime error:").red()),
                None => println!("{} {err}", style("Error:").red()),
            }
        }
    }
}

fn select_symbol(theme: &ColorfulTheme) -> Result<String> {
    let symbols: Vec<&str> = Symbol::ALL.iter().map(Symbol::as_str).collect();
    let index = Select::with_theme(theme)
        .with_prompt("Trading symbol")
        .items(&symbols)
        .default(0)
        .interact()?;
    Ok(symbols[index].to_string())
}

fn select_side(theme: &ColorfulTheme) -> Result<String> {
    let sides = ["BUY", "SELL"];
    let index = Select::with_theme(theme)
        .with_prompt("Order side")
        .items(&sides)
        .default(0)
        .interact()?;
    Ok(sides[index].to_string())
}

async fn market_order(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    println!("{}", style("Place market order").bold());
    let symbol = select_symbol(theme)?;
    let side = select_side(theme)?;
    let quantity: f64 = Input::with_theme(theme)
        .with_prompt("Quantity")
        .interact_text()?;

    let order = bot.place_market_order(&symbol, &side, quantity).await?;
    println!("\n{}", style("Order placed").green().bold());
    print_order(&order);
    Ok(())
}

async fn limit_order(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    println!("{}", style("Place limit order").bold());
    let symbol = select_symbol(theme)?;
    let side = select_side(theme)?;
    let quantity: f64 = Input::with_theme(theme)
        .with_prompt("Quantity")
        .interact_text()?;
    let price: f64 = Input::with_theme(theme)
        .with_prompt("Price")
        .interact_text()?;

    let tifs = ["GTC", "IOC", "FOK"];
    let tif_index = Select::with_theme(theme)
        .with_prompt("Time in force")
        .items(&tifs)
        .default(0)
        .interact()?;

    let order = bot
        .place_limit_order(&symbol, &side, quantity, price, tifs[tif_index])
        .await?;
    println!("\n{}", style("Order placed").green().bold());
    print_order(&order);
    Ok(())
}

async fn balance(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    let asset: String = Input::with_theme(theme)
        .with_prompt("Asset")
        .default("USDT".to_string())
        .interact_text()?;
    let asset = asset.trim().to_uppercase();

    let balance = bot.balance(&asset).await?;
    println!("\n{asset} balance: {}", style(balance).cyan());
    Ok(())
}

async fn price(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    let symbol = select_symbol(theme)?;
    let price = bot.current_price(&symbol).await?;
    println!("\n{symbol} price: {}", style(price).cyan());
    Ok(())
}

async fn position(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    let symbol = select_symbol(theme)?;
    match bot.position(&symbol).await? {
        Some(position) => print_position(&position),
        None => println!("\nNo open position for {symbol}"),
    }
    Ok(())
}

async fn close_position(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    let symbol = select_symbol(theme)?;
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Close position for {symbol}?"))
        .default(false)
        .interact()?;
    if !confirmed {
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
    Ok(())
}

async fn open_orders(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    let symbol = select_symbol(theme)?;
    let orders = bot.open_orders(&symbol).await?;
    if orders.is_empty() {
        println!("\nNo open orders for {symbol}");
    } else {
        println!("\nOpen orders for {symbol}:");
        for order in &orders {
            print_order(order);
        }
    }
    Ok(())
}

async fn cancel_order(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    let symbol = select_symbol(theme)?;
    let order_id: i64 = Input::with_theme(theme)
        .with_prompt("Order ID")
        .interact_text()?;

    let response = bot.cancel_order(&symbol, order_id).await?;
    println!("\nOrder {} cancelled", response.order_id);
    Ok(())
}

async fn cancel_all(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    let symbol = select_symbol(theme)?;
    let confirmed = Confirm::with_theme(theme)
        .with_prompt(format!("Cancel all orders for {symbol}?"))
        .default(false)
        .interact()?;
    if !confirmed {
        println!("{}", style("Cancelled.").yellow());
        return Ok(());
    }

    bot.cancel_all_orders(&symbol).await?;
    println!("\nAll orders cancelled for {symbol}");
    Ok(())
}

async fn set_leverage(bot: &FuturesBot, theme: &ColorfulTheme) -> Result<()> {
    let symbol = select_symbol(theme)?;
    let leverage: u32 = Input::with_theme(theme)
        .with_prompt("Leverage (1-125)")
        .interact_text()?;

    let response = bot.set_leverage(&symbol, leverage).await?;
    println!("\nLeverage set to {}x for {}", response.leverage, response.symbol);
    Ok(())
}
