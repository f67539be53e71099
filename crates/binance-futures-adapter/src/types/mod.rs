/*
[INPUT]:  Exchange schema and validation-layer type requirements
[OUTPUT]: Typed enums, validated requests, and response models
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

pub mod enums;
pub mod models;
pub mod requests;

pub use enums::{OrderSide, OrderType, Symbol, TimeInForce, UnknownVariant};
pub use models::{
    AccountAsset, AccountInfo, CancelAllResponse, ChangeLeverageResponse, OrderResponse, Position,
    PositionRisk, TickerPrice,
};
pub use requests::{
    ApiCredentials, CancelOrderRequest, LeverageRequest, LimitOrderRequest, MarketOrderRequest,
};
