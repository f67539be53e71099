/*
[INPUT]:  Raw trading parameters from the CLI or other callers
[OUTPUT]: Exchange responses reshaped into domain results
[POS]:    Trading facade - the only holder of the authenticated client handle
[UPDATE]: When adding trading operations or changing operation contracts
*/

pub mod error;

pub use error::{BotError, BotResult};

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use tracing::{error, info, warn};

use crate::http::UmFuturesClient;
use crate::types::{
    AccountInfo, CancelAllResponse, ChangeLeverageResponse, OrderResponse, OrderSide, Position,
};
use crate::validation::{
    validate_cancel_order, validate_credentials, validate_leverage, validate_limit_order,
    validate_market_order, validate_symbol,
};

/// Trading facade for Binance USDT-M futures.
///
/// Every operation validates its raw inputs first, issues exactly one
/// network call on success (two for `close_position`), and wraps any
/// client-side failure into `BotError::Runtime`. Request objects returned
/// by the validation layer are trusted as-is; nothing is re-checked here.
#[derive(Debug)]
pub struct FuturesBot {
    client: UmFuturesClient,
}

impl FuturesBot {
    /// Build a facade from raw credentials.
    ///
    /// Fails with a validation error for malformed credentials and a
    /// runtime failure if the HTTP client cannot be constructed.
    pub fn new(api_key: &str, secret_key: &str, base_url: &str) -> BotResult<Self> {
        info!("initializing futures trading facade");
        let credentials = validate_credentials(api_key, secret_key, base_url).inspect_err(|err| {
            error!(field = %err.field, "credential validation failed");
        })?;

        let client = UmFuturesClient::new(credentials).map_err(|err| {
            error!(error = %err, "client initialization failed");
            BotError::runtime(format!("failed to initialize client: {err}"))
        })?;
        info!(base_url = %client.base_url(), "client initialized");

        Ok(Self { client })
    }

    /// Raw account state
    pub async fn account_info(&self) -> BotResult<AccountInfo> {
        info!("fetching account information");
        let account = self.client.account().await.map_err(|err| {
            error!(error = %err, "failed to get account info");
            BotError::runtime(format!("failed to get account info: {err}"))
        })?;
        info!(asset_count = account.assets.len(), "account information retrieved");
        Ok(account)
    }

    /// Available balance for an asset; an asset absent from the account
    /// list is a zero balance, not an error.
    pub async fn balance(&self, asset: &str) -> BotResult<Decimal> {
        info!(asset = %asset, "fetching balance");
        let account = self.account_info().await?;

        match account.assets.iter().find(|entry| entry.asset == asset) {
            Some(entry) => {
                info!(asset = %asset, balance = %entry.available_balance, "balance retrieved");
                Ok(entry.available_balance)
            }
            None => {
                warn!(asset = %asset, "asset not found in account");
                Ok(Decimal::ZERO)
            }
        }
    }

    /// Current market price for a symbol
    pub async fn current_price(&self, symbol: &str) -> BotResult<Decimal> {
        let symbol = validate_symbol(symbol)?;
        info!(symbol = %symbol, "fetching current price");

        let ticker = self.client.ticker_price(symbol.as_str()).await.map_err(|err| {
            error!(symbol = %symbol, error = %err, "failed to get price");
            BotError::runtime(format!("failed to get price: {err}"))
        })?;
        info!(symbol = %symbol, price = %ticker.price, "price retrieved");
        Ok(ticker.price)
    }

    /// Place a market order
    pub async fn place_market_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: f64,
    ) -> BotResult<OrderResponse> {
        let validated = validate_market_order(symbol, side, quantity).inspect_err(|err| {
            error!(field = %err.field, "market order validation failed");
        })?;
        info!(
            symbol = %validated.symbol(),
            side = %validated.side(),
            quantity = %validated.quantity(),
            "placing market order"
        );

        let order = self
            .client
            .new_order(
                validated.symbol().as_str(),
                validated.side(),
                validated.order_type(),
                validated.quantity(),
                None,
                None,
            )
            .await
            .map_err(|err| {
                error!(error = %err, "market order execution failed");
                BotError::runtime(format!("order execution failed: {err}"))
            })?;

        info!(
            order_id = order.order_id,
            status = %order.status,
            "market order executed"
        );
        Ok(order)
    }

    /// Place a limit order
    pub async fn place_limit_order(
        &self,
        symbol: &str,
        side: &str,
        quantity: f64,
        price: f64,
        time_in_force: &str,
    ) -> BotResult<OrderResponse> {
        let validated =
            validate_limit_order(symbol, side, quantity, price, time_in_force).inspect_err(|err| {
                error!(field = %err.field, "limit order validation failed");
            })?;
        info!(
            symbol = %validated.symbol(),
            side = %validated.side(),
            quantity = %validated.quantity(),
            price = %validated.price(),
            time_in_force = %validated.time_in_force(),
            "placing limit order"
        );

        let order = self
            .client
            .new_order(
                validated.symbol().as_str(),
                validated.side(),
                validated.order_type(),
                validated.quantity(),
                Some(validated.time_in_force()),
                Some(validated.price()),
            )
            .await
            .map_err(|err| {
                error!(error = %err, "limit order execution failed");
                BotError::runtime(format!("order execution failed: {err}"))
            })?;

        info!(
            order_id = order.order_id,
            status = %order.status,
            "limit order placed"
        );
        Ok(order)
    }

    /// Cancel a single order
    pub async fn cancel_order(&self, symbol: &str, order_id: i64) -> BotResult<OrderResponse> {
        let validated = validate_cancel_order(symbol, order_id).inspect_err(|err| {
            error!(field = %err.field, "cancel order validation failed");
        })?;
        info!(
            symbol = %validated.symbol(),
            order_id = validated.order_id(),
            "cancelling order"
        );

        let response = self
            .client
            .cancel_order(validated.symbol().as_str(), validated.order_id())
            .await
            .map_err(|err| {
                error!(error = %err, "order cancellation failed");
                BotError::runtime(format!("order cancellation failed: {err}"))
            })?;

        info!(order_id = response.order_id, "order cancelled");
        Ok(response)
    }

    /// Cancel every open order for a symbol
    pub async fn cancel_all_orders(&self, symbol: &str) -> BotResult<CancelAllResponse> {
        let symbol = validate_symbol(symbol)?;
        info!(symbol = %symbol, "cancelling all orders");

        let response = self
            .client
            .cancel_open_orders(symbol.as_str())
            .await
            .map_err(|err| {
                error!(symbol = %symbol, error = %err, "failed to cancel all orders");
                BotError::runtime(format!("failed to cancel all orders: {err}"))
            })?;

        info!(symbol = %symbol, "all orders cancelled");
        Ok(response)
    }

    /// Open orders for a symbol
    pub async fn open_orders(&self, symbol: &str) -> BotResult<Vec<OrderResponse>> {
        let symbol = validate_symbol(symbol)?;
        info!(symbol = %symbol, "fetching open orders");

        let orders = self.client.get_orders(symbol.as_str()).await.map_err(|err| {
            error!(symbol = %symbol, error = %err, "failed to get open orders");
            BotError::runtime(format!("failed to get open orders: {err}"))
        })?;

        info!(symbol = %symbol, order_count = orders.len(), "open orders retrieved");
        Ok(orders)
    }

    /// Current position for a symbol.
    ///
    /// A row with amount exactly zero means no exposure and is skipped; the
    /// first non-zero row is returned. Hedge-mode accounts with two live
    /// rows see only the first one.
    pub async fn position(&self, symbol: &str) -> BotResult<Option<Position>> {
        let symbol = validate_symbol(symbol)?;
        info!(symbol = %symbol, "fetching position");

        let rows = self
            .client
            .get_position_risk(symbol.as_str())
            .await
            .map_err(|err| {
                error!(symbol = %symbol, error = %err, "failed to get position");
                BotError::runtime(format!("failed to get position: {err}"))
            })?;

        for row in &rows {
            if row.position_amt != Decimal::ZERO {
                let position = Position::from(row);
                info!(
                    symbol = %symbol,
                    amount = %position.amount,
                    entry_price = %position.entry_price,
                    unrealized_pnl = %position.unrealized_pnl,
                    "position found"
                );
                return Ok(Some(position));
            }
        }

        info!(symbol = %symbol, "no open position");
        Ok(None)
    }

    /// Change leverage for a symbol
    pub async fn set_leverage(
        &self,
        symbol: &str,
        leverage: u32,
    ) -> BotResult<ChangeLeverageResponse> {
        let validated = validate_leverage(symbol, leverage).inspect_err(|err| {
            error!(field = %err.field, "leverage validation failed");
        })?;
        info!(
            symbol = %validated.symbol(),
            leverage = validated.leverage(),
            "setting leverage"
        );

        let response = self
            .client
            .change_leverage(validated.symbol().as_str(), validated.leverage())
            .await
            .map_err(|err| {
                error!(error = %err, "leverage change failed");
                BotError::runtime(format!("leverage change failed: {err}"))
            })?;

        info!(leverage = response.leverage, "leverage set");
        Ok(response)
    }

    /// Close the current position with a market order.
    ///
    /// No position is a successful no-op, not an error. A long closes with
    /// SELL, a short with BUY, for the absolute held amount. The closing
    /// order goes through the same validated market-order path, so a held
    /// amount that violates the quantity precision rules fails validation.
    pub async fn close_position(&self, symbol: &str) -> BotResult<Option<OrderResponse>> {
        let position = self.position(symbol).await?;

        let Some(position) = position else {
            info!(symbol = %symbol, "no position to close");
            return Ok(None);
        };

        let side = if position.amount > Decimal::ZERO {
            OrderSide::Sell
        } else {
            OrderSide::Buy
        };
        let quantity = position.amount.abs().to_f64().ok_or_else(|| {
            BotError::runtime(format!(
                "position amount {} not representable as a quantity",
                position.amount
            ))
        })?;

        info!(
            symbol = %symbol,
            side = %side,
            quantity = quantity,
            "closing position"
        );

        let order = self
            .place_market_order(symbol, side.as_str(), quantity)
            .await?;

        info!(order_id = order.order_id, "position closed");
        Ok(Some(order))
    }
}
